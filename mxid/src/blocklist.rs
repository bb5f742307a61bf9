//! Inconvenient-word filter for the first four identifier characters.

use tracing::debug;

use crate::letters::FILL;

/// Words RENAPO and SAT refuse as the first four characters of an identifier.
pub const BLOCKED_WORDS: [&str; 81] = [
    "BACA", "BAKA", "BUEI", "BUEY", "CACA", "CACO", "CAGA", "CAGO", "CAKA", "CAKO", "COGE",
    "COGI", "COJA", "COJE", "COJI", "COJO", "COLA", "CULO", "FALO", "FETO", "GETA", "GUEI",
    "GUEY", "JETA", "JOTO", "KACA", "KACO", "KAGA", "KAGO", "KAKA", "KAKO", "KOGE", "KOGI",
    "KOJA", "KOJE", "KOJI", "KOJO", "KOLA", "KULO", "LILO", "LOCA", "LOCO", "LOKA", "LOKO",
    "MAME", "MAMO", "MEAR", "MEAS", "MEON", "MIAR", "MION", "MOCO", "MOKO", "MULA", "MULO",
    "NACA", "NACO", "PEDA", "PEDO", "PENE", "PIPI", "PITO", "POPO", "PUTA", "PUTO", "QULO",
    "RATA", "ROBA", "ROBE", "ROBO", "RUIN", "SENO", "TETA", "VACA", "VAGA", "VAGO", "VAKA",
    "VUEI", "VUEY", "WUEI", "WUEY",
];

/// Whether the first four characters of `base` spell a blocked word.
pub fn is_blocked(base: &str) -> bool {
    base.get(..4)
        .map(|prefix| BLOCKED_WORDS.contains(&prefix))
        .unwrap_or(false)
}

/// Replace the first character with `X` if the prefix is blocked.
///
/// Must run on the bare base, before any suffix is appended.
pub fn filter_obscenity(base: &str) -> String {
    if !is_blocked(base) {
        return base.to_string();
    }
    debug!(prefix = &base[..4], "Blocked identifier prefix, substituting first character");
    let mut filtered = String::with_capacity(base.len());
    filtered.push(FILL);
    filtered.extend(base.chars().skip(1));
    filtered
}
