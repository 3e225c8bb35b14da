//! Attribute table configuration
//!
//! The static name→code mapping used by `${c,a,b}` markup and the
//! well-known colour/style constants the terminal parser resets to.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::AttributeTriple;
use crate::error::{Error, Result};

/// Standard colour indices
pub const COLOUR_BLACK: i32 = 0;
pub const COLOUR_RED: i32 = 1;
pub const COLOUR_GREEN: i32 = 2;
pub const COLOUR_YELLOW: i32 = 3;
pub const COLOUR_BLUE: i32 = 4;
pub const COLOUR_MAGENTA: i32 = 5;
pub const COLOUR_CYAN: i32 = 6;
pub const COLOUR_WHITE: i32 = 7;

/// Standard style codes
pub const A_BOLD: i32 = 1;
pub const A_NORMAL: i32 = 2;
pub const A_REVERSE: i32 = 3;
pub const A_UNDERLINE: i32 = 4;

/// Attribute table shared read-only by all parsers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeTable {
    /// Foreground restored by SGR 0
    pub default_foreground: i32,
    /// Background restored by SGR 0
    pub default_background: i32,
    /// Style code for bold text
    pub bold: i32,
    /// Style code for normal text
    pub normal: i32,
    /// Style code for reverse video
    pub reverse: i32,
    /// Style code for underlined text
    pub underline: i32,
    /// Markup style names (the `a` in `${c,a,b}`)
    pub styles: HashMap<String, i32>,
}

impl Default for AttributeTable {
    fn default() -> Self {
        let styles = [
            ("1", A_BOLD),
            ("2", A_NORMAL),
            ("3", A_REVERSE),
            ("4", A_UNDERLINE),
            ("bold", A_BOLD),
            ("normal", A_NORMAL),
            ("reverse", A_REVERSE),
            ("underline", A_UNDERLINE),
        ]
        .into_iter()
        .map(|(name, code)| (name.to_string(), code))
        .collect();

        Self {
            default_foreground: COLOUR_WHITE,
            default_background: COLOUR_BLACK,
            bold: A_BOLD,
            normal: A_NORMAL,
            reverse: A_REVERSE,
            underline: A_UNDERLINE,
            styles,
        }
    }
}

impl AttributeTable {
    /// Parse a table from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Check the table can be used to re-serialize styles unambiguously
    pub fn validate(&self) -> Result<()> {
        if self.bold == self.normal || self.bold == self.reverse || self.normal == self.reverse {
            return Err(Error::AmbiguousStyle {
                bold: self.bold,
                normal: self.normal,
                reverse: self.reverse,
            });
        }
        Ok(())
    }

    /// Look up a markup style name
    pub fn style_code(&self, name: &str) -> Option<i32> {
        self.styles.get(name).copied()
    }

    /// The triple SGR 0 resets to
    pub fn reset_attributes(&self) -> AttributeTriple {
        AttributeTriple::new(self.default_foreground, self.normal, self.default_background)
    }
}
