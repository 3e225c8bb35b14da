//! Mochi Text Interpretation Library
//!
//! Converts annotated text into a normalized sequence of records, each a
//! glyph (or an attribute-only marker), its colour/style triple and its
//! offset in the rendered text. A renderer only ever consumes records.
//!
//! - `core`: attribute triple and record types
//! - `parser`: passthrough, markup and terminal escape parsers
//! - `config`: the injected style-name and colour constant table
//! - `error`: configuration errors (parsing itself never fails)

pub mod config;
pub mod core;
pub mod error;
pub mod parser;

pub use crate::config::AttributeTable;
pub use crate::core::{AttributeTriple, Record};
pub use crate::error::{Error, Result};
pub use crate::parser::{
    MarkupParser, ParserKind, PassthroughParser, Records, TerminalParser, TextParser,
};
