//! Parser Contract
//!
//! The lifecycle every parser strategy shares: `reset` computes the full
//! record sequence eagerly, `parse` hands out a read-only view of it, and
//! `normalize` re-serializes it.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;
use std::sync::Arc;

use crate::config::AttributeTable;
use crate::core::{rendered_text, AttributeTriple, Record};

use super::markup::MarkupParser;
use super::passthrough::PassthroughParser;
use super::terminal::TerminalParser;

/// Interchangeable text interpretation strategy consumed by the renderer.
///
/// Instances are reusable but not safe for concurrent use; give each text
/// stream its own parser.
pub trait TextParser: fmt::Debug {
    /// Discard all previous state and parse `raw`.
    ///
    /// Never fails: malformed or unsupported sequences degrade gracefully.
    fn reset(&mut self, raw: &str, initial: Option<AttributeTriple>);

    /// Strategy-specific cursor position, valid after `reset`
    fn cursor(&self) -> isize;

    /// Canonical re-serialization of the parsed text.
    ///
    /// Stateful strategies may rewrite stored record offsets to match the
    /// returned string; iterate `parse()` again afterwards to see them.
    fn normalize(&mut self) -> String;

    /// The stored parse result
    fn records(&self) -> &[Record];

    /// The raw text last passed to `reset` (or produced by `normalize`)
    fn raw_text(&self) -> &str;

    /// Restartable view over the stored parse result. Does not recompute.
    fn parse(&self) -> Records<'_> {
        Records {
            inner: self.records().iter(),
        }
    }

    /// The text a renderer would paint, with markers skipped
    fn rendered_text(&self) -> String {
        rendered_text(self.records())
    }
}

/// Borrowing iterator over parsed records
#[derive(Debug, Clone)]
pub struct Records<'a> {
    inner: slice::Iter<'a, Record>,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Records<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}

/// State every strategy keeps between `reset` calls
#[derive(Debug, Clone, Default)]
pub(crate) struct ParsedText {
    /// Raw input (or the canonical string after `normalize`)
    pub raw: String,
    /// Strategy-specific cursor
    pub cursor: isize,
    /// Parse result in rendering order
    pub result: Vec<Record>,
}

impl ParsedText {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            cursor: 0,
            result: Vec::with_capacity(raw.len()),
        }
    }
}

/// The available parser strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserKind {
    /// Make control characters visible (`^G` for BEL)
    Passthrough,
    /// `${c,a,b}` colour markup
    Markup,
    /// ANSI/VT escape sequences
    Terminal,
}

impl ParserKind {
    /// Construct a fresh parser of this kind
    pub fn build(self, table: Arc<AttributeTable>) -> Box<dyn TextParser> {
        match self {
            ParserKind::Passthrough => Box::new(PassthroughParser::new()),
            ParserKind::Markup => Box::new(MarkupParser::with_table(table)),
            ParserKind::Terminal => Box::new(TerminalParser::with_table(table)),
        }
    }
}
