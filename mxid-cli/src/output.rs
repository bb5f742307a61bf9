use serde::Serialize;
use std::fmt;

/// How command responses are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{"status": .., "data": ..}` envelope
    #[default]
    Json,
    /// One labelled line per field
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown format: {}. Use 'json' or 'text'", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Plain-text form of a command response
pub trait TextRender {
    fn render_text(&self) -> String;
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

const SERIALIZATION_FAILED: &str = "{\"status\":\"error\",\"error\":\"Serialization failed\"}";

fn to_json<T: Serialize>(envelope: &Envelope<'_, T>) -> String {
    serde_json::to_string_pretty(envelope).unwrap_or_else(|_| SERIALIZATION_FAILED.to_string())
}

/// Render a command response
pub fn render_success<T: Serialize + TextRender>(format: OutputFormat, data: &T) -> String {
    match format {
        OutputFormat::Json => to_json(&Envelope {
            status: "success",
            data: Some(data),
            error: None,
        }),
        OutputFormat::Text => data.render_text(),
    }
}

/// Render a command failure
pub fn render_error(format: OutputFormat, error: &str) -> String {
    match format {
        OutputFormat::Json => to_json::<()>(&Envelope {
            status: "error",
            data: None,
            error: Some(error),
        }),
        OutputFormat::Text => format!("Error: {}", error),
    }
}

/// Write a command response to stdout
pub fn print_success<T: Serialize + TextRender>(format: OutputFormat, data: &T) {
    println!("{}", render_success(format, data));
}

/// Write a command failure to stderr
pub fn print_error(format: OutputFormat, error: &str) {
    eprintln!("{}", render_error(format, error));
}

/// `label: value` with labels padded to a common width
pub(crate) fn labelled(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}", format!("{}:", label), value, width = width + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[derive(Serialize)]
    struct Sample {
        curp: &'static str,
    }

    impl TextRender for Sample {
        fn render_text(&self) -> String {
            labelled(&[("CURP", self.curp.to_string())])
        }
    }

    #[test]
    fn test_json_envelope() {
        let rendered = render_success(
            OutputFormat::Json,
            &Sample {
                curp: "HEGG560427MVZRRL04",
            },
        );
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["curp"], "HEGG560427MVZRRL04");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_text_uses_response_rendering() {
        let rendered = render_success(
            OutputFormat::Text,
            &Sample {
                curp: "HEGG560427MVZRRL04",
            },
        );
        assert_eq!(rendered, "CURP:  HEGG560427MVZRRL04");
    }

    #[test]
    fn test_labels_are_aligned() {
        let text = labelled(&[("CURP", "A".to_string()), ("Birth date", "B".to_string())]);
        assert_eq!(text, "CURP:        A\nBirth date:  B");
    }

    #[test]
    fn test_error_rendering() {
        let json_err = render_error(OutputFormat::Json, "bad input");
        let value: Value = serde_json::from_str(&json_err).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "bad input");
        assert!(value.get("data").is_none());

        assert_eq!(render_error(OutputFormat::Text, "bad input"), "Error: bad input");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(" Text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
