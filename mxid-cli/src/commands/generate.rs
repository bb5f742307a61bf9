use crate::error::Result;
use crate::output::{labelled, print_success, OutputFormat, TextRender};
use clap::Args;
use mxid::{GeneratedIds, Generator, PersonalIdentity, PROVISIONAL_HOMOCLAVE_NOTICE};
use serde::Serialize;
use tracing::{debug, warn};

/// Registration fields shared by `generate` and `curp`
#[derive(Args, Debug, Clone)]
pub struct IdentityArgs {
    /// Full name, given names first
    #[arg(short, long)]
    pub name: String,
    /// Second surname, when entered separately
    #[arg(long)]
    pub second_surname: Option<String>,
    /// Birth date as DD/MM/YYYY
    #[arg(short, long)]
    pub birth_date: String,
    /// Hombre or Mujer
    #[arg(short, long)]
    pub gender: String,
    /// Birth state (name, alias, or "extranjero")
    #[arg(short, long)]
    pub state: String,
}

impl IdentityArgs {
    pub fn to_identity(&self) -> PersonalIdentity {
        let mut builder = PersonalIdentity::builder()
            .full_name(&self.name)
            .birth_date(&self.birth_date)
            .gender(&self.gender)
            .birth_state(&self.state);
        if let Some(ref surname) = self.second_surname {
            builder = builder.second_surname(surname);
        }
        builder.build()
    }
}

/// Arguments for `rfc`
#[derive(Args, Debug, Clone)]
pub struct RfcArgs {
    /// Full name, given names first
    #[arg(short, long)]
    pub name: String,
    /// Birth date as DD/MM/YYYY
    #[arg(short, long)]
    pub birth_date: String,
}

#[derive(Debug, Serialize)]
pub struct CurpResponse {
    pub curp: String,
}

#[derive(Debug, Serialize)]
pub struct RfcResponse {
    pub rfc: String,
    pub provisional: bool,
    pub notice: &'static str,
}

impl TextRender for GeneratedIds {
    fn render_text(&self) -> String {
        let rfc = if self.rfc_homoclave_provisional {
            format!("{} (provisional homoclave)", self.rfc)
        } else {
            self.rfc.to_string()
        };
        format!(
            "{}\n{}",
            labelled(&[("CURP", self.curp.to_string()), ("RFC", rfc)]),
            self.notice
        )
    }
}

impl TextRender for CurpResponse {
    fn render_text(&self) -> String {
        labelled(&[("CURP", self.curp.clone())])
    }
}

impl TextRender for RfcResponse {
    fn render_text(&self) -> String {
        let suffix = if self.provisional { " (provisional homoclave)" } else { "" };
        format!("{}\n{}", labelled(&[("RFC", format!("{}{}", self.rfc, suffix))]), self.notice)
    }
}

/// Generate both identifiers for one identity
pub fn run_generate(args: &IdentityArgs, generator: &Generator) -> GeneratedIds {
    let identity = args.to_identity();
    warn_if_incomplete(&identity);
    generator.generate(&identity)
}

/// Generate only the CURP
pub fn run_curp(args: &IdentityArgs, generator: &Generator) -> CurpResponse {
    let identity = args.to_identity();
    warn_if_incomplete(&identity);
    CurpResponse {
        curp: generator.curp_for(&identity).to_string(),
    }
}

/// Generate only the RFC
pub fn run_rfc(args: &RfcArgs, generator: &Generator) -> RfcResponse {
    let rfc = generator.rfc(&args.name, &args.birth_date);
    RfcResponse {
        provisional: rfc.is_provisional(),
        rfc: rfc.to_string(),
        notice: PROVISIONAL_HOMOCLAVE_NOTICE,
    }
}

pub fn handle_generate(
    args: &IdentityArgs,
    format: OutputFormat,
    generator: &Generator,
) -> Result<()> {
    print_success(format, &run_generate(args, generator));
    Ok(())
}

pub fn handle_curp(args: &IdentityArgs, format: OutputFormat, generator: &Generator) -> Result<()> {
    print_success(format, &run_curp(args, generator));
    Ok(())
}

pub fn handle_rfc(args: &RfcArgs, format: OutputFormat, generator: &Generator) -> Result<()> {
    print_success(format, &run_rfc(args, generator));
    Ok(())
}

/// Generation still proceeds; fill values will show up in the output.
fn warn_if_incomplete(identity: &PersonalIdentity) {
    match identity.validate() {
        Ok(()) => debug!("Identity fields complete"),
        Err(e) => warn!("Generating from incomplete identity: {}", e),
    }
}
