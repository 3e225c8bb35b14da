//! Text parsers
//!
//! Three interchangeable strategies that turn raw text into render-ready
//! records behind the [`TextParser`] contract:
//! - [`PassthroughParser`]: shows control characters in caret notation
//! - [`MarkupParser`]: `${c,a,b}` colour markup
//! - [`TerminalParser`]: ANSI/VT escape sequences with cursor editing

mod contract;
mod csi;
mod markup;
mod passthrough;
mod sgr;
mod terminal;

pub use contract::{ParserKind, Records, TextParser};
pub use markup::MarkupParser;
pub use passthrough::PassthroughParser;
pub use terminal::TerminalParser;
