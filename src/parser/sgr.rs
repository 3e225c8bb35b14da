//! SGR (Select Graphic Rendition) decoding
//!
//! SGR parameters are a flat `;`-separated stream, but `38`/`48` start
//! multi-parameter colour selectors (`38;5;n` indexed, `38;2;r;g;b` RGB).
//! The decoder is a small state machine consuming one parameter at a time.
//!
//! Supported:
//! - Reset (0)
//! - Bold (1), normal (2, 22, 27), reverse (7)
//! - Standard foreground/background colors (30-37, 40-47)
//! - 256-color mode (38;5;n, 48;5;n)
//! - RGB mode (38;2;r;g;b, 48;2;r;g;b) is skipped without being applied

use tracing::{debug, info, trace};

use crate::config::AttributeTable;
use crate::core::{AttributeTriple, ColourTarget};

/// Number of components in an RGB selector
const RGB_COMPONENTS: u8 = 3;

/// Decoder state between parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SgrState {
    /// Top-level parameter stream
    Normal,
    /// After 38/48, expecting 5 (indexed) or 2 (RGB)
    AwaitingColourKind(ColourTarget),
    /// After 38;5 or 48;5, expecting the palette index
    AwaitingIndex(ColourTarget),
    /// After 38;2 or 48;2, discarding the RGB components
    SkippingRgb { target: ColourTarget, remaining: u8 },
}

/// Applies a stream of SGR parameters to an attribute triple
#[derive(Debug)]
pub(crate) struct SgrDecoder<'t> {
    table: &'t AttributeTable,
    state: SgrState,
}

impl<'t> SgrDecoder<'t> {
    pub fn new(table: &'t AttributeTable) -> Self {
        Self {
            table,
            state: SgrState::Normal,
        }
    }

    pub fn state(&self) -> SgrState {
        self.state
    }

    /// Apply every parameter in `params` to `attributes`
    pub fn apply(&mut self, params: impl IntoIterator<Item = i32>, attributes: &mut AttributeTriple) {
        for param in params {
            self.advance(param, attributes);
        }
    }

    /// Consume a single parameter
    pub fn advance(&mut self, param: i32, attributes: &mut AttributeTriple) {
        self.state = match self.state {
            SgrState::Normal => self.normal(param, attributes),
            SgrState::AwaitingColourKind(target) => match param {
                5 => SgrState::AwaitingIndex(target),
                2 => SgrState::SkippingRgb {
                    target,
                    remaining: RGB_COMPONENTS,
                },
                _ => {
                    info!("Unexpected colour setting: {}", param);
                    SgrState::Normal
                }
            },
            SgrState::AwaitingIndex(target) => {
                attributes.set(target, param);
                SgrState::Normal
            }
            SgrState::SkippingRgb { target, remaining } => {
                if remaining <= 1 {
                    trace!("Skipped RGB colour for {:?}", target);
                    SgrState::Normal
                } else {
                    SgrState::SkippingRgb {
                        target,
                        remaining: remaining - 1,
                    }
                }
            }
        };
    }

    /// Top-level parameter handling
    fn normal(&self, param: i32, attributes: &mut AttributeTriple) -> SgrState {
        match param {
            0 => *attributes = self.table.reset_attributes(),
            1 => attributes.style = Some(self.table.bold),
            // Faint is not supported, treat as normal
            2 | 22 => attributes.style = Some(self.table.normal),
            7 => attributes.style = Some(self.table.reverse),
            // Inverse off
            27 => attributes.style = Some(self.table.normal),
            30..=37 => attributes.foreground = Some(param - 30),
            40..=47 => attributes.background = Some(param - 40),
            38 => return SgrState::AwaitingColourKind(ColourTarget::Foreground),
            48 => return SgrState::AwaitingColourKind(ColourTarget::Background),
            _ => debug!("Ignoring SGR parameter: {}", param),
        }
        SgrState::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{A_BOLD, A_NORMAL, A_REVERSE, COLOUR_BLACK, COLOUR_WHITE};

    fn apply(params: &[i32], attributes: AttributeTriple) -> AttributeTriple {
        let table = AttributeTable::default();
        let mut attributes = attributes;
        SgrDecoder::new(&table).apply(params.iter().copied(), &mut attributes);
        attributes
    }

    #[test]
    fn test_reset() {
        let attrs = apply(&[0], AttributeTriple::new(3, A_BOLD, 5));
        assert_eq!(attrs, AttributeTriple::new(COLOUR_WHITE, A_NORMAL, COLOUR_BLACK));
    }

    #[test]
    fn test_styles() {
        let base = AttributeTriple::unset();
        assert_eq!(apply(&[1], base).style, Some(A_BOLD));
        assert_eq!(apply(&[1, 2], base).style, Some(A_NORMAL));
        assert_eq!(apply(&[1, 22], base).style, Some(A_NORMAL));
        assert_eq!(apply(&[7], base).style, Some(A_REVERSE));
        assert_eq!(apply(&[7, 27], base).style, Some(A_NORMAL));
    }

    #[test]
    fn test_standard_colours() {
        let attrs = apply(&[31], AttributeTriple::new(7, A_NORMAL, 0));
        assert_eq!(attrs, AttributeTriple::new(1, A_NORMAL, 0));

        let attrs = apply(&[37, 44], AttributeTriple::unset());
        assert_eq!(attrs.foreground, Some(7));
        assert_eq!(attrs.background, Some(4));
        assert_eq!(attrs.style, None);
    }

    #[test]
    fn test_indexed_colours() {
        let attrs = apply(&[38, 5, 208, 48, 5, 17], AttributeTriple::unset());
        assert_eq!(attrs.foreground, Some(208));
        assert_eq!(attrs.background, Some(17));
    }

    #[test]
    fn test_rgb_is_skipped() {
        // 38;2;r;g;b leaves the triple alone; the trailing 1 still applies
        let attrs = apply(&[38, 2, 31, 41, 1, 1], AttributeTriple::unset());
        assert_eq!(attrs.foreground, None);
        assert_eq!(attrs.background, None);
        assert_eq!(attrs.style, Some(A_BOLD));
    }

    #[test]
    fn test_unexpected_colour_kind() {
        let attrs = apply(&[38, 9, 31], AttributeTriple::unset());
        assert_eq!(attrs.foreground, Some(1));
    }

    #[test]
    fn test_unknown_parameters_ignored() {
        let base = AttributeTriple::new(1, A_BOLD, 2);
        assert_eq!(apply(&[4, 5, 90, 100, -1], base), base);
    }

    #[test]
    fn test_state_transitions() {
        let table = AttributeTable::default();
        let mut attrs = AttributeTriple::unset();
        let mut decoder = SgrDecoder::new(&table);

        decoder.advance(48, &mut attrs);
        assert_eq!(decoder.state(), SgrState::AwaitingColourKind(ColourTarget::Background));
        decoder.advance(2, &mut attrs);
        assert_eq!(
            decoder.state(),
            SgrState::SkippingRgb {
                target: ColourTarget::Background,
                remaining: 3,
            }
        );
        decoder.advance(10, &mut attrs);
        decoder.advance(20, &mut attrs);
        assert!(matches!(decoder.state(), SgrState::SkippingRgb { remaining: 1, .. }));
        decoder.advance(30, &mut attrs);
        assert_eq!(decoder.state(), SgrState::Normal);
        assert!(attrs.is_unset());
    }
}
