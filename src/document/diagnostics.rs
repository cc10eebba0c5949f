//! Parse error diagnostics pointing into the offending document

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// A JSON or YAML document that failed to decode, with source location
#[derive(Debug, Error, Diagnostic)]
#[error("{format} document could not be decoded: {message}")]
#[diagnostic(code(dcc::document::parse))]
pub struct ParseError {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    format: &'static str,

    message: String,
}

impl ParseError {
    pub fn from_yaml(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));
        Self::at_location("YAML", err.to_string(), source, filename, line, column)
    }

    pub fn from_json(err: &serde_json::Error, source: &str, filename: &str) -> Self {
        let line = err.line().max(1);
        let column = err.column().max(1);
        Self::at_location("JSON", err.to_string(), source, filename, line, column)
    }

    fn at_location(
        format: &'static str,
        message: String,
        source: &str,
        filename: &str,
        line: usize,
        column: usize,
    ) -> Self {
        let offset = offset_of(source, line, column);
        let end = (offset + 1).min(source.len()).max(offset);
        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..end),
            help: suggest(&message),
            format,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors reading an input document
#[derive(Debug, Error, Diagnostic)]
pub enum DocumentError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("cannot read {}", .path.display())]
    #[diagnostic(code(dcc::document::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported document type: {}", .path.display())]
    #[diagnostic(
        code(dcc::document::format),
        help("use a .json, .yaml or .yml file")
    )]
    UnsupportedFormat { path: PathBuf },
}

/// Byte offset of a 1-based line/column position, clamped to the source
fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let text = source[line_start..].lines().next().unwrap_or("");
    let within = text
        .char_indices()
        .nth(column.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    line_start + within
}

/// Hints for mistakes common in hand-edited model exports
fn suggest(message: &str) -> Option<String> {
    let msg = message.to_lowercase();

    if msg.contains("tab") {
        return Some("YAML indentation must use spaces, not tabs.".to_string());
    }
    if msg.contains("trailing comma") {
        return Some("JSON does not allow a comma after the last member.".to_string());
    }
    if msg.contains("expected a mapping") || msg.contains("invalid type") {
        return Some(
            "Requirements, parts and metrics are mappings keyed by name, not lists.".to_string(),
        );
    }
    if msg.contains("mapping values are not allowed") {
        return Some("A space may be missing after ':', or indentation is off.".to_string());
    }
    if msg.contains("eof") || msg.contains("end of") {
        return Some("The document ends early; check for unclosed brackets or quotes.".to_string());
    }

    None
}
