//! corosync.conf text parser
//!
//! Turns configuration text into a [`Section`] tree. The grammar is line
//! oriented:
//!
//! - blank lines and lines starting with `#` are ignored
//! - `name {` opens a section, `}` closes it
//! - `key: value` adds an attribute (split at the first `:`)
//!
//! Parsing never recovers: the first structural problem aborts with a
//! [`ParseError`].

use super::Section;
use thiserror::Error;

/// Structural problems in corosync configuration text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing closing brace")]
    MissingClosingBrace,

    #[error("unexpected closing brace")]
    UnexpectedClosingBrace,

    #[error("line {line}: {message}")]
    OtherSyntax { line: usize, message: String },
}

/// Parse configuration text into an unnamed root section.
pub fn parse(text: &str) -> Result<Section, ParseError> {
    // Open sections, innermost last. The root is never popped.
    let mut stack = vec![Section::root()];

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_suffix('{') {
            let name = name.trim();
            if name.is_empty() {
                return Err(ParseError::OtherSyntax {
                    line: line_number,
                    message: "section name is missing".to_string(),
                });
            }
            stack.push(Section::new(name));
        } else if let Some(rest) = line.strip_prefix('}') {
            if !rest.trim().is_empty() {
                return Err(ParseError::OtherSyntax {
                    line: line_number,
                    message: format!("unexpected text after closing brace: '{}'", rest.trim()),
                });
            }
            if stack.len() == 1 {
                return Err(ParseError::UnexpectedClosingBrace);
            }
            if let Some(closed) = stack.pop()
                && let Some(parent) = stack.last_mut()
            {
                parent.add_section(closed);
            }
        } else if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if key.is_empty() {
                return Err(ParseError::OtherSyntax {
                    line: line_number,
                    message: "attribute name is missing".to_string(),
                });
            }
            if let Some(current) = stack.last_mut() {
                current.add_attribute(key, value.trim());
            }
        } else {
            return Err(ParseError::OtherSyntax {
                line: line_number,
                message: format!("expected 'key: value' or 'name {{', found '{}'", line),
            });
        }
    }

    if stack.len() > 1 {
        return Err(ParseError::MissingClosingBrace);
    }
    Ok(stack.pop().unwrap_or_else(Section::root))
}
