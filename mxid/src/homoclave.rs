//! Provisional RFC homoclave.
//!
//! The real homoclave is assigned by SAT from the full legal name with an
//! unpublished procedure. This is a deterministic stand-in only: it is not a
//! valid tax-authority value and every RFC that carries it is marked
//! provisional (see [`Rfc::is_provisional`]).
//!
//! [`Rfc::is_provisional`]: crate::rfc::Rfc::is_provisional

use crate::name::ParsedName;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 32-bit rolling string hash: `h = h * 31 + unit`, wrapping as `i32`.
///
/// Iterates UTF-16 code units so non-BMP input hashes the same way it would
/// in the registration front end.
fn rolling_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Three letters derived from `paternal + maternal + first + birth_date`.
pub fn rfc_homoclave(name: &ParsedName, birth_date_ddmmyyyy: &str) -> String {
    let seed = format!(
        "{}{}{}{}",
        name.paternal, name.maternal, name.first, birth_date_ddmmyyyy
    );
    let mut value = rolling_hash(&seed).unsigned_abs();

    let mut out = String::with_capacity(3);
    for _ in 0..3 {
        out.push(LETTERS[(value % 26) as usize] as char);
        value /= 26;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::parse_full_name;

    #[test]
    fn test_empty_input() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rfc_homoclave(&ParsedName::default(), ""), "AAA");
    }

    #[test]
    fn test_rolling_hash_small() {
        // 'A' = 65, then 65 * 31 + 66
        assert_eq!(rolling_hash("A"), 65);
        assert_eq!(rolling_hash("AB"), 65 * 31 + 66);
    }

    #[test]
    fn test_rolling_hash_wraps() {
        let long = "Z".repeat(64);
        // Must not panic on overflow.
        let _ = rolling_hash(&long);
    }

    #[test]
    fn test_known_values() {
        let juan = parse_full_name("Juan Pérez López");
        assert_eq!(rfc_homoclave(&juan, "15/06/1990"), "DKJ");

        let gloria = parse_full_name("Gloria Hernández García");
        assert_eq!(rfc_homoclave(&gloria, "27/04/1956"), "MGS");
    }

    #[test]
    fn test_deterministic_and_letters_only() {
        let name = parse_full_name("Ana Cacahuate Cruz");
        let a = rfc_homoclave(&name, "01/01/1990");
        let b = rfc_homoclave(&name, "01/01/1990");
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert!(a.chars().all(|c| c.is_ascii_uppercase()));
    }
}
