use crate::error::{Error, Result};
use crate::output::{print_success, OutputFormat, TextRender};
use clap::Args;
use mxid::{GeneratedIds, Generator, PersonalIdentity};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// JSON file holding an array of identities
    pub file: PathBuf,
    /// Skip identities with missing or malformed fields instead of generating fill values
    #[arg(long)]
    pub strict: bool,
}

/// One skipped identity in strict mode
#[derive(Debug, Serialize)]
pub struct BatchRejection {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<GeneratedIds>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<BatchRejection>,
    pub total: usize,
}

impl TextRender for BatchResponse {
    fn render_text(&self) -> String {
        let mut lines: Vec<String> = self
            .results
            .iter()
            .map(|ids| format!("{}  {}", ids.curp, ids.rfc))
            .collect();
        lines.extend(
            self.rejected
                .iter()
                .map(|r| format!("rejected #{}: {}", r.index, r.reason)),
        );
        lines.push(format!(
            "{} of {} generated; RFC homoclaves are provisional",
            self.results.len(),
            self.total
        ));
        lines.join("\n")
    }
}

/// Read identities from `path`
pub fn load_identities(path: &Path) -> Result<Vec<PersonalIdentity>> {
    let contents = fs::read_to_string(path)?;
    let identities: Vec<PersonalIdentity> = serde_json::from_str(&contents)?;
    if identities.is_empty() {
        return Err(Error::invalid_input(format!(
            "No identities in {}",
            path.display()
        )));
    }
    debug!("Loaded {} identities from {}", identities.len(), path.display());
    Ok(identities)
}

pub fn run(args: &BatchArgs, generator: &Generator) -> Result<BatchResponse> {
    let identities = load_identities(&args.file)?;
    let total = identities.len();
    let mut results = Vec::with_capacity(total);
    let mut rejected = Vec::new();

    for (index, identity) in identities.iter().enumerate() {
        if args.strict {
            if let Err(e) = identity.validate() {
                rejected.push(BatchRejection {
                    index,
                    reason: e.to_string(),
                });
                continue;
            }
        }
        results.push(generator.generate(identity));
    }

    info!(
        "Generated {} of {} identities ({} rejected)",
        results.len(),
        total,
        rejected.len()
    );
    Ok(BatchResponse {
        results,
        rejected,
        total,
    })
}

pub fn handle(args: &BatchArgs, format: OutputFormat, generator: &Generator) -> Result<()> {
    let response = run(args, generator)?;
    print_success(format, &response);
    Ok(())
}
