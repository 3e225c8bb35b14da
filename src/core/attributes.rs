//! Attribute Model
//!
//! The colour/style triple attached to every record. Each component is
//! either an explicit code or unset, where unset means "inherit whatever
//! was active before".

use serde::{Deserialize, Serialize};

/// Foreground colour, style and background colour of a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeTriple {
    /// Foreground colour index
    pub foreground: Option<i32>,
    /// Style code (normal, bold, reverse, ...)
    pub style: Option<i32>,
    /// Background colour index
    pub background: Option<i32>,
}

impl AttributeTriple {
    /// Create a fully specified triple
    pub const fn new(foreground: i32, style: i32, background: i32) -> Self {
        Self {
            foreground: Some(foreground),
            style: Some(style),
            background: Some(background),
        }
    }

    /// A triple with every component unset
    pub const fn unset() -> Self {
        Self {
            foreground: None,
            style: None,
            background: None,
        }
    }

    /// Check whether all three components are unset
    pub fn is_unset(&self) -> bool {
        self.foreground.is_none() && self.style.is_none() && self.background.is_none()
    }

    /// Keep the foreground and drop style and background.
    ///
    /// Display-only parsers colour every cell uniformly with this.
    pub fn first_component_only(&self) -> Self {
        Self {
            foreground: self.foreground,
            ..Self::unset()
        }
    }

    /// Set the component addressed by `target`
    pub fn set(&mut self, target: ColourTarget, value: i32) {
        match target {
            ColourTarget::Foreground => self.foreground = Some(value),
            ColourTarget::Background => self.background = Some(value),
        }
    }

    /// Work out which components differ between `self` and `next`
    pub fn diff(&self, next: &AttributeTriple) -> AttributeChange {
        AttributeChange {
            foreground: self.foreground != next.foreground,
            style: self.style != next.style,
            background: self.background != next.background,
        }
    }
}

impl From<(i32, i32, i32)> for AttributeTriple {
    fn from((foreground, style, background): (i32, i32, i32)) -> Self {
        Self::new(foreground, style, background)
    }
}

/// Which colour component an extended colour selector writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourTarget {
    Foreground,
    Background,
}

/// Component-wise change between two triples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeChange {
    pub foreground: bool,
    pub style: bool,
    pub background: bool,
}

impl AttributeChange {
    /// True if any component changed
    pub fn any(&self) -> bool {
        self.foreground || self.style || self.background
    }
}
