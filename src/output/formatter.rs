// ABOUTME: Output formatting for rendered stub snippets
// ABOUTME: Emits either the raw comment block or a JSON wrapper for tooling

use serde_json::json;
use std::str::FromStr;

use super::error::{OutputError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Raw,
    Json,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(OutputFormat::Raw),
            "json" => Ok(OutputFormat::Json),
            other => Err(OutputError::UnknownFormat(other.to_string())),
        }
    }
}

pub struct OutputProcessor {
    format: OutputFormat,
}

impl OutputProcessor {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a rendered snippet for its destination
    pub fn process(&self, op_type: &str, snippet: &str) -> Result<String> {
        match self.format {
            OutputFormat::Raw => Ok(snippet.to_string()),
            OutputFormat::Json => {
                let wrapped = json!({
                    "op_type": op_type,
                    "snippet": snippet,
                });
                Ok(serde_json::to_string_pretty(&wrapped)?)
            }
        }
    }
}
