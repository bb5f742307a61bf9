use crate::error::{Error, Result};
use crate::output::{labelled, print_success, OutputFormat, TextRender};
use clap::Args;
use mxid::state::{state_code_with, state_name, FOREIGN_BORN, STATES};
use mxid::StateMatch;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct StateArgs {
    /// State name to resolve
    pub name: Option<String>,
    /// List every code instead of resolving a name
    #[arg(short, long, conflicts_with = "name")]
    pub list: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StateEntry {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StateResponse {
    Lookup {
        input: String,
        code: &'static str,
        name: Option<&'static str>,
        matched: bool,
    },
    List {
        states: Vec<StateEntry>,
        total: usize,
    },
}

impl TextRender for StateResponse {
    fn render_text(&self) -> String {
        match self {
            StateResponse::Lookup {
                input,
                code,
                name,
                matched,
            } => {
                let resolved = match (name, matched) {
                    (Some(name), true) => format!("{} ({})", code, name),
                    _ => format!("{} (no match, treated as foreign-born)", code),
                };
                labelled(&[("Input", input.clone()), ("Code", resolved)])
            }
            StateResponse::List { states, .. } => states
                .iter()
                .map(|s| format!("{}  {}", s.code, s.name))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

pub fn run(args: &StateArgs, state_match: StateMatch) -> Result<StateResponse> {
    if args.list {
        let mut states: Vec<StateEntry> = STATES
            .iter()
            .map(|s| StateEntry {
                code: s.code,
                name: s.name,
            })
            .collect();
        states.push(StateEntry {
            code: FOREIGN_BORN,
            name: state_name(FOREIGN_BORN).unwrap_or_default(),
        });
        let total = states.len();
        return Ok(StateResponse::List { states, total });
    }

    let input = args
        .name
        .clone()
        .ok_or_else(|| Error::invalid_input("Provide a state name or --list"))?;
    let code = state_code_with(&input, state_match);
    Ok(StateResponse::Lookup {
        matched: code != FOREIGN_BORN || names_foreign_birth(&input),
        name: state_name(code),
        code,
        input,
    })
}

/// `NE` is a real answer when the input asked for it, not only a fallback.
fn names_foreign_birth(input: &str) -> bool {
    let cleaned = mxid::clean_alpha(input);
    cleaned == FOREIGN_BORN || cleaned.contains("EXTRANJERO")
}

pub fn handle(args: &StateArgs, format: OutputFormat, state_match: StateMatch) -> Result<()> {
    let response = run(args, state_match)?;
    print_success(format, &response);
    Ok(())
}
