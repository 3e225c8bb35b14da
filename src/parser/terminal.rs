//! Terminal Parser
//!
//! Interprets real terminal output: printable characters, backspace,
//! carriage return and a practical subset of CSI sequences, tracking an
//! editable cursor that can move back and overwrite earlier cells.
//!
//! Supported sequences:
//! - BS, CR
//! - CSI m: SGR colour and style
//! - CSI K: erase in line
//! - CSI P: delete characters
//! - CSI C / CSI D: cursor forward / back
//!
//! Anything else is skipped. An ESC that does not start a CSI sequence
//! consumes itself and the following character.

use std::sync::Arc;

use tracing::debug;

use crate::config::AttributeTable;
use crate::core::{AttributeTriple, Record};

use super::contract::{ParsedText, TextParser};
use super::csi::CsiSequence;
use super::sgr::{SgrDecoder, SgrState};

const BS: char = '\x08';
const CR: char = '\x0d';
const ESC: char = '\x1b';

/// Most blank cells an erase may add beyond the current line length
const MAX_LINE_WIDTH: usize = 65_536;

/// Parser for ANSI/VT escape sequences
#[derive(Debug, Clone, Default)]
pub struct TerminalParser {
    table: Arc<AttributeTable>,
    text: ParsedText,
}

impl TerminalParser {
    /// Create a parser using the default attribute table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser using `table` for reset colours and style codes
    pub fn with_table(table: Arc<AttributeTable>) -> Self {
        Self {
            table,
            text: ParsedText::default(),
        }
    }
}

/// SGR sequence switching from `current` to `next`.
///
/// Components that became unset, and styles other than bold, normal and
/// reverse, cannot be expressed and contribute nothing.
fn sgr_transition(
    table: &AttributeTable,
    current: &AttributeTriple,
    next: &AttributeTriple,
) -> Option<String> {
    let change = current.diff(next);
    let mut codes = Vec::with_capacity(3);

    if change.foreground {
        if let Some(fg) = next.foreground {
            codes.push(format!("38;5;{fg}"));
        }
    }
    if change.style {
        match next.style {
            Some(style) if style == table.bold => codes.push("1".to_string()),
            Some(style) if style == table.normal => codes.push("2".to_string()),
            Some(style) if style == table.reverse => codes.push("7".to_string()),
            _ => {}
        }
    }
    if change.background {
        if let Some(bg) = next.background {
            codes.push(format!("48;5;{bg}"));
        }
    }

    // An empty "ESC[m" would read back as a reset
    if codes.is_empty() {
        None
    } else {
        Some(format!("\x1b[{}m", codes.join(";")))
    }
}

/// Transient state for a single `reset` call
#[derive(Debug)]
struct ParserState<'t> {
    table: &'t AttributeTable,
    /// Current attributes
    attributes: AttributeTriple,
    /// Next write position in the buffer. May run past the end or below zero.
    cursor: isize,
    /// Characters of raw input consumed so far
    raw_offset: usize,
    /// Printable characters written so far
    offset: usize,
    /// Attributes of the most recently written record
    last_written: AttributeTriple,
    buffer: Vec<Record>,
}

impl<'t> ParserState<'t> {
    fn new(table: &'t AttributeTable, attributes: AttributeTriple) -> Self {
        Self {
            table,
            attributes,
            cursor: 0,
            raw_offset: 0,
            offset: 0,
            last_written: attributes,
            buffer: Vec::new(),
        }
    }

    /// Buffer index for the cursor, with a negative cursor clamped to 0
    fn cursor_index(&self) -> usize {
        usize::try_from(self.cursor).unwrap_or(0)
    }

    /// Overwrite the record under the cursor, or append past the end
    fn print(&mut self, c: char) {
        if self.cursor < 0 {
            debug!("Cursor at {} before line start, clamping to 0", self.cursor);
            self.cursor = 0;
        }
        let index = self.cursor_index();
        let record = Record::glyph(c.to_string(), self.attributes, self.offset);
        match self.buffer.get_mut(index) {
            Some(existing) => *existing = record,
            None => self.buffer.push(record),
        }
        self.cursor = self.cursor.saturating_add(1);
        self.offset += 1;
        self.last_written = self.attributes;
    }

    fn backspace(&mut self) {
        self.cursor = self.cursor.saturating_sub(1).max(0);
    }

    fn carriage_return(&mut self) {
        self.cursor = 0;
    }

    /// Handle an ESC at the head of `rest`, returning the bytes consumed
    fn escape(&mut self, rest: &str) -> usize {
        let Some(csi) = CsiSequence::parse(rest) else {
            debug!("Skipping unsupported escape at {}", self.raw_offset);
            return rest.char_indices().nth(2).map_or(rest.len(), |(i, _)| i);
        };

        match csi.final_char {
            'm' => self.select_graphic_rendition(&csi),
            'K' => self.erase_in_line(csi.params),
            'P' => self.delete_chars(csi.count()),
            'C' => self.cursor = self.cursor.saturating_add(csi.count()),
            'D' => self.cursor = self.cursor.saturating_sub(csi.count()),
            other => debug!("Ignoring control {:?} at {}", other, self.raw_offset),
        }
        csi.len
    }

    fn select_graphic_rendition(&mut self, csi: &CsiSequence<'_>) {
        let mut decoder = SgrDecoder::new(self.table);
        decoder.apply(csi.sgr_params(), &mut self.attributes);
        if decoder.state() != SgrState::Normal {
            debug!("Truncated colour selector at {}: {:?}", self.raw_offset, decoder.state());
        }
    }

    /// `count` spaces in the current attributes, at most `MAX_LINE_WIDTH`
    /// past the end of the line
    fn blanks(&mut self, count: usize) -> Vec<Record> {
        let limit = self.buffer.len().saturating_add(MAX_LINE_WIDTH);
        if count > limit {
            debug!("Erase of {} cells at {} limited to {}", count, self.raw_offset, limit);
        }
        let count = count.min(limit);
        if count > 0 {
            self.last_written = self.attributes;
        }
        vec![Record::glyph(" ", self.attributes, self.offset); count]
    }

    fn erase_in_line(&mut self, param: &str) {
        let cursor = self.cursor_index();
        match param {
            // Cursor to end of line
            "" | "0" => self.buffer.truncate(cursor),
            // Start of line to cursor
            "1" => {
                let tail = if cursor < self.buffer.len() {
                    self.buffer.split_off(cursor)
                } else {
                    Vec::new()
                };
                self.buffer = self.blanks(cursor);
                self.buffer.extend(tail);
            }
            // Whole line: only the cells before the cursor survive, as blanks
            "2" => self.buffer = self.blanks(cursor),
            _ => debug!("Ignoring erase in line {:?} at {}", param, self.raw_offset),
        }
    }

    fn delete_chars(&mut self, count: isize) {
        let Ok(count) = usize::try_from(count) else {
            debug!("Ignoring negative delete count {} at {}", count, self.raw_offset);
            return;
        };
        let start = self.cursor_index();
        if start < self.buffer.len() {
            let end = start.saturating_add(count).min(self.buffer.len());
            self.buffer.drain(start..end);
        }
    }
}

impl TextParser for TerminalParser {
    fn reset(&mut self, raw: &str, initial: Option<AttributeTriple>) {
        self.text = ParsedText::new(raw);

        let initial_attributes = initial.unwrap_or_default();
        let mut state = ParserState::new(&self.table, initial_attributes);
        let mut rest = raw;

        while let Some(c) = rest.chars().next() {
            let consumed = match c {
                ESC => state.escape(rest),
                BS => {
                    state.backspace();
                    c.len_utf8()
                }
                CR => {
                    state.carriage_return();
                    c.len_utf8()
                }
                c if u32::from(c) > 31 => {
                    state.print(c);
                    c.len_utf8()
                }
                _ => {
                    debug!("Ignoring character {} at {}", u32::from(c), state.raw_offset);
                    c.len_utf8()
                }
            };
            state.raw_offset += rest[..consumed].chars().count();
            rest = &rest[consumed..];
        }

        let ParserState {
            attributes,
            cursor,
            offset,
            last_written,
            buffer,
            ..
        } = state;

        // Distance of the cursor from the end of the line
        self.text.cursor = (buffer.len() as isize).saturating_sub(cursor);
        self.text.result = buffer;
        if last_written != attributes {
            self.text.result.push(Record::marker(attributes, offset));
        }
    }

    fn cursor(&self) -> isize {
        self.text.cursor
    }

    /// Rebuild the text as a minimal escape sequence string.
    ///
    /// Rewrites every stored record offset to its position in the returned
    /// string, and stores the string as the new raw text.
    fn normalize(&mut self) -> String {
        let mut canonical = String::new();
        let mut length = 0;
        let mut current = AttributeTriple::unset();

        for record in &mut self.text.result {
            let start = length;
            if current != record.attributes {
                if let Some(sgr) = sgr_transition(&self.table, &current, &record.attributes) {
                    length += sgr.chars().count();
                    canonical.push_str(&sgr);
                }
                current = record.attributes;
            }
            record.offset = start;
            if let Some(glyph) = &record.glyph {
                length += glyph.chars().count();
                canonical.push_str(glyph);
            }
        }

        if self.text.cursor > 0 {
            canonical.push_str(&format!("\x1b[{}D", self.text.cursor));
        }
        self.text.raw.clone_from(&canonical);
        canonical
    }

    fn records(&self) -> &[Record] {
        &self.text.result
    }

    fn raw_text(&self) -> &str {
        &self.text.raw
    }
}
