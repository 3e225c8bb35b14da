//! Text Core Module
//!
//! Platform-independent data shared by every parser strategy:
//! - Attribute triple (foreground, style, background) and its update rules
//! - Records: the render-ready output of a parse
//!
//! A renderer only ever consumes records, never raw text.

mod attributes;
mod record;

pub use attributes::{AttributeChange, AttributeTriple, ColourTarget};
pub use record::{rendered_text, Record};
