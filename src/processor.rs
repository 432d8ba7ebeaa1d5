//! Output-format selection for the command-line wrapper
//!
//! The CLI can emit the stripped text, or dump the scanner's token stream
//! for debugging a surprising result. Formats are named on the command
//! line, so the parsing and the error live here rather than in the binary.

use std::fmt;

use crate::lexer;
use crate::options::StripOptions;
use crate::strip;

/// What the CLI should print for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The stripped source text.
    Strip,
    /// The token stream as pretty-printed JSON.
    TokenJson,
    /// The token stream, one token per line.
    TokenSimple,
}

impl OutputFormat {
    /// Parse a format name like `strip` or `token-json`.
    pub fn from_name(name: &str) -> Result<Self, ProcessError> {
        match name {
            "strip" => Ok(OutputFormat::Strip),
            "token-json" => Ok(OutputFormat::TokenJson),
            "token-simple" => Ok(OutputFormat::TokenSimple),
            _ => Err(ProcessError::UnknownFormat(name.to_string())),
        }
    }
}

/// Run one strip invocation and render it in the requested format.
pub fn process(
    source: &str,
    options: &StripOptions,
    format: OutputFormat,
) -> Result<String, ProcessError> {
    match format {
        OutputFormat::Strip => Ok(strip::strip(source, options)),
        OutputFormat::TokenJson => {
            let tokens = lexer::scan(source, options);
            serde_json::to_string_pretty(&tokens)
                .map_err(|e| ProcessError::Serialize(e.to_string()))
        }
        OutputFormat::TokenSimple => {
            let tokens = lexer::scan(source, options);
            Ok(tokens
                .iter()
                .map(|token| format!("{:?} {:?}", token.kind, token.raw))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

/// Errors from format selection or token serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    UnknownFormat(String),
    Serialize(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::UnknownFormat(name) => write!(
                f,
                "unknown output format '{}' (expected strip, token-json or token-simple)",
                name
            ),
            ProcessError::Serialize(msg) => write!(f, "failed to serialize tokens: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_round_trip() {
        assert_eq!(OutputFormat::from_name("strip"), Ok(OutputFormat::Strip));
        assert_eq!(
            OutputFormat::from_name("token-json"),
            Ok(OutputFormat::TokenJson)
        );
        assert_eq!(
            OutputFormat::from_name("token-simple"),
            Ok(OutputFormat::TokenSimple)
        );
        assert!(matches!(
            OutputFormat::from_name("xml"),
            Err(ProcessError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_strip_format_strips() {
        let out = process("a // b", &StripOptions::all(), OutputFormat::Strip).unwrap();
        assert_eq!(out, "a ");
    }

    #[test]
    fn test_token_json_lists_token_kinds() {
        let out = process(
            "'s' // c",
            &StripOptions::all(),
            OutputFormat::TokenJson,
        )
        .unwrap();
        assert!(out.contains("QuotedString"));
        assert!(out.contains("LineComment"));
    }

    #[test]
    fn test_token_simple_is_one_token_per_line() {
        let out = process("a\nb", &StripOptions::all(), OutputFormat::TokenSimple).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Text"));
        assert!(lines[1].starts_with("Newline"));
    }
}
