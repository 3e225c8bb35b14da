//! Passthrough Parser
//!
//! Display-only strategy: every character becomes one record and control
//! characters are shown in caret notation (`^M` for CR).

use crate::core::{AttributeTriple, Record};

use super::contract::{ParsedText, TextParser};

/// Parser that makes non-printable control characters visible
#[derive(Debug, Clone, Default)]
pub struct PassthroughParser {
    text: ParsedText,
}

impl PassthroughParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self::default()
    }
}

/// Caret notation for C0 controls, the character itself otherwise
fn visible(c: char) -> String {
    match u8::try_from(c) {
        Ok(code) if code < 0x20 => format!("^{}", char::from(b'@' + code)),
        _ => c.to_string(),
    }
}

impl TextParser for PassthroughParser {
    fn reset(&mut self, raw: &str, initial: Option<AttributeTriple>) {
        self.text = ParsedText::new(raw);

        // Every record shares the same uniform colouring
        let attributes = initial.map_or_else(AttributeTriple::unset, |a| a.first_component_only());
        self.text.result = raw
            .chars()
            .enumerate()
            .map(|(i, c)| Record::glyph(visible(c), attributes, i))
            .collect();
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

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(parser: &PassthroughParser) -> Vec<&str> {
        parser
            .parse()
            .filter_map(|r| r.glyph.as_deref())
            .collect()
    }

    #[test]
    fn test_bell_is_visible() {
        let mut parser = PassthroughParser::new();
        parser.reset("\x07bell", None);
        assert_eq!(glyphs(&parser), vec!["^G", "b", "e", "l", "l"]);
    }

    #[test]
    fn test_controls() {
        let mut parser = PassthroughParser::new();
        parser.reset("\0\r\n\x1b\x1f", None);
        assert_eq!(glyphs(&parser), vec!["^@", "^M", "^J", "^[", "^_"]);
    }

    #[test]
    fn test_del_and_unicode_are_literal() {
        let mut parser = PassthroughParser::new();
        parser.reset("\x7f世", None);
        assert_eq!(glyphs(&parser), vec!["\x7f", "世"]);
    }

    #[test]
    fn test_offsets_are_character_indices() {
        let mut parser = PassthroughParser::new();
        parser.reset("a\tb", None);
        let offsets: Vec<_> = parser.parse().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn test_uniform_attributes() {
        let mut parser = PassthroughParser::new();
        parser.reset("ab", Some(AttributeTriple::new(3, 1, 4)));
        for record in parser.parse() {
            assert_eq!(record.attributes.foreground, Some(3));
            assert_eq!(record.attributes.style, None);
            assert_eq!(record.attributes.background, None);
        }

        parser.reset("ab", None);
        assert!(parser.parse().all(|r| r.attributes.is_unset()));
    }

    #[test]
    fn test_normalize_returns_raw() {
        let mut parser = PassthroughParser::new();
        parser.reset("x\x1b[31my", None);
        assert_eq!(parser.normalize(), "x\x1b[31my");
        assert_eq!(parser.cursor(), 0);
    }
}
