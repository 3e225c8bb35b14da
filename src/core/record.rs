//! Parse Records
//!
//! A record is one rendered cell (or an attribute-only marker) together
//! with the attributes it is drawn with and its position in the rendered
//! text.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeTriple;

/// A single entry of a parse result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Text to draw. `None` marks an attribute change with no visible output.
    pub glyph: Option<String>,
    /// Colour and style for this record
    pub attributes: AttributeTriple,
    /// Position in the rendered text (markup and escapes stripped)
    pub offset: usize,
}

impl Record {
    /// Create a record that draws `glyph`
    pub fn glyph(glyph: impl Into<String>, attributes: AttributeTriple, offset: usize) -> Self {
        Self {
            glyph: Some(glyph.into()),
            attributes,
            offset,
        }
    }

    /// Create an attribute-only marker
    pub fn marker(attributes: AttributeTriple, offset: usize) -> Self {
        Self {
            glyph: None,
            attributes,
            offset,
        }
    }

    /// Check if this record only carries attributes
    pub fn is_marker(&self) -> bool {
        self.glyph.is_none()
    }

    /// Display width of the glyph in terminal columns.
    ///
    /// Markers advance nothing and are zero wide.
    pub fn width(&self) -> usize {
        use unicode_width::UnicodeWidthStr;
        self.glyph.as_deref().map_or(0, UnicodeWidthStr::width)
    }
}

/// Concatenate the glyphs of `records`, skipping markers
pub fn rendered_text<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .filter_map(|record| record.glyph.as_deref())
        .collect()
}
