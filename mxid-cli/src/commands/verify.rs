use crate::error::Result;
use crate::output::{labelled, print_success, OutputFormat, TextRender};
use clap::Args;
use mxid::state::state_name;
use mxid::{Error as MxidError, IdKind};
use serde::Serialize;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// CURP or RFC to check
    pub id: String,
}

/// Segments decoded from a valid CURP
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurpDetails {
    pub birth_date: String,
    pub century_indicator: char,
    pub gender: Option<String>,
    pub state_code: String,
    pub state_name: Option<&'static str>,
    pub check_digit: char,
}

/// Segments of a valid RFC
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RfcDetails {
    pub base: String,
    pub homoclave: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curp: Option<CurpDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfc: Option<RfcDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl TextRender for VerifyResponse {
    fn render_text(&self) -> String {
        let mut rows = vec![
            ("Input", self.input.clone()),
            ("Valid", if self.valid { "yes" } else { "no" }.to_string()),
        ];
        if let Some(kind) = self.kind {
            rows.push(("Kind", kind.to_uppercase()));
        }
        if let Some(ref curp) = self.curp {
            rows.push(("Birth date", curp.birth_date.clone()));
            rows.push(("Century", curp.century_indicator.to_string()));
            rows.push((
                "Gender",
                curp.gender.clone().unwrap_or_else(|| "-".to_string()),
            ));
            rows.push((
                "State",
                match curp.state_name {
                    Some(name) => format!("{} ({})", curp.state_code, name),
                    None => curp.state_code.clone(),
                },
            ));
            rows.push(("Check digit", curp.check_digit.to_string()));
        }
        if let Some(ref rfc) = self.rfc {
            rows.push(("Base", rfc.base.clone()));
            rows.push(("Homoclave", rfc.homoclave.clone()));
        }
        if let Some(ref reason) = self.reason {
            rows.push(("Reason", reason.clone()));
        }
        labelled(&rows)
    }
}

/// Check an identifier's shape and, for a CURP, its verification digit.
///
/// An invalid identifier is a normal answer, not a command failure.
pub fn run(args: &VerifyArgs) -> Result<VerifyResponse> {
    let input = args.id.trim().to_string();
    let response = match mxid::parse(&input) {
        Ok(IdKind::Curp(curp)) => VerifyResponse {
            valid: true,
            kind: Some("curp"),
            curp: Some(CurpDetails {
                birth_date: curp.birth_date_segment().to_string(),
                century_indicator: curp.century_indicator(),
                gender: curp.gender().map(|g| g.to_string()),
                state_code: curp.state_code().to_string(),
                state_name: state_name(curp.state_code()),
                check_digit: curp.check_digit(),
            }),
            rfc: None,
            reason: None,
            input,
        },
        Ok(IdKind::Rfc(rfc)) => VerifyResponse {
            valid: true,
            kind: Some("rfc"),
            curp: None,
            rfc: Some(RfcDetails {
                base: rfc.base().to_string(),
                homoclave: rfc.homoclave().to_string(),
            }),
            reason: None,
            input,
        },
        Err(e @ MxidError::CheckDigitMismatch { .. }) => {
            debug!("Verification digit mismatch: {}", e);
            VerifyResponse {
                valid: false,
                kind: Some("curp"),
                curp: None,
                rfc: None,
                reason: Some(e.to_string()),
                input,
            }
        }
        Err(MxidError::UnrecognizedFormat(_)) => VerifyResponse {
            valid: false,
            kind: None,
            curp: None,
            rfc: None,
            reason: Some("Not a CURP or RFC".to_string()),
            input,
        },
        Err(e) => return Err(e.into()),
    };
    Ok(response)
}

pub fn handle(args: &VerifyArgs, format: OutputFormat) -> Result<()> {
    let response = run(args)?;
    print_success(format, &response);
    Ok(())
}
