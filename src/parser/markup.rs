//! Markup Parser
//!
//! Interprets `${c}`, `${c,a}` and `${c,a,b}` colour directives embedded in
//! otherwise literal text:
//! - `${c}`: foreground `c`, style 0, background unset
//! - `${c,a}`: foreground `c`, style named `a`, background unset
//! - `${c,a,b}`: foreground `c`, style named `a`, background `b`
//!
//! Anything that does not form a complete directive is literal text.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::AttributeTable;
use crate::core::{AttributeTriple, Record};

use super::contract::{ParsedText, TextParser};

/// Parser for `${...}` colour markup
#[derive(Debug, Clone, Default)]
pub struct MarkupParser {
    table: Arc<AttributeTable>,
    text: ParsedText,
}

impl MarkupParser {
    /// Create a parser using the default attribute table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser using `table` to resolve style names
    pub fn with_table(table: Arc<AttributeTable>) -> Self {
        Self {
            table,
            text: ParsedText::default(),
        }
    }

    /// Try to match a directive at the head of `rest`.
    ///
    /// Returns the new attributes and the byte length of the directive.
    fn match_token(&self, rest: &str) -> Option<(AttributeTriple, usize)> {
        let body = rest.strip_prefix("${")?;
        let end = body.find('}')?;
        let fields: Vec<&str> = body[..end].split(',').collect();

        let attributes = match fields.as_slice() {
            [c] => AttributeTriple {
                foreground: Some(colour(c)?),
                style: Some(0),
                background: None,
            },
            [c, a] => AttributeTriple {
                foreground: Some(colour(c)?),
                style: Some(self.style(a)?),
                background: None,
            },
            [c, a, b] => AttributeTriple {
                foreground: Some(colour(c)?),
                style: Some(self.style(a)?),
                background: Some(colour(b)?),
            },
            _ => return None,
        };

        // "${" + body + "}"
        Some((attributes, end + 3))
    }

    fn style(&self, name: &str) -> Option<i32> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }
        let code = self.table.style_code(name);
        if code.is_none() {
            debug!("Unknown markup style: {}", name);
        }
        code
    }
}

/// A colour field is a non-empty run of decimal digits
fn colour(field: &str) -> Option<i32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl TextParser for MarkupParser {
    fn reset(&mut self, raw: &str, initial: Option<AttributeTriple>) {
        self.text = ParsedText::new(raw);

        let mut attributes = initial.unwrap_or_default();
        let mut rest = raw;
        // Position in the rendered text; only literal characters advance it
        let mut offset = 0;
        let mut raw_offset = 0;
        // Set when a directive was consumed after the last literal character
        let mut pending = false;

        while let Some(c) = rest.chars().next() {
            let token = if c == '$' { self.match_token(rest) } else { None };
            match token {
                Some((next, len)) => {
                    trace!("Markup directive at {}: {:?}", raw_offset, next);
                    attributes = next;
                    raw_offset += len;
                    rest = &rest[len..];
                    pending = true;
                }
                None => {
                    self.text
                        .result
                        .push(Record::glyph(c.to_string(), attributes, offset));
                    offset += 1;
                    raw_offset += c.len_utf8();
                    rest = &rest[c.len_utf8()..];
                    pending = false;
                }
            }
        }

        // How far into the visible text parsing reached
        self.text.cursor = self.text.result.len() as isize;

        if pending {
            self.text.result.push(Record::marker(attributes, offset));
        }
    }

    fn cursor(&self) -> isize {
        self.text.cursor
    }

    fn normalize(&mut self) -> String {
        self.text.raw.clone()
    }

    fn records(&self) -> &[Record] {
        &self.text.result
    }

    fn raw_text(&self) -> &str {
        &self.text.raw
    }
}
