//! CSI sequence matching
//!
//! Recognizes `ESC [ <parameters> <final>` at the head of the remaining
//! input, where the parameters are any run of characters outside the final
//! byte range `@`..=`~`.

use tracing::debug;

/// Final byte range for CSI sequences
const FINAL_BYTES: std::ops::RangeInclusive<char> = '@'..='~';

/// A matched CSI (Control Sequence Introducer) sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CsiSequence<'a> {
    /// Raw parameter field, undecoded
    pub params: &'a str,
    /// Final character that identifies the command
    pub final_char: char,
    /// Length of the whole sequence in bytes
    pub len: usize,
}

impl<'a> CsiSequence<'a> {
    /// Match a CSI sequence at the head of `rest`
    pub fn parse(rest: &'a str) -> Option<Self> {
        let body = rest.strip_prefix("\x1b[")?;
        let end = body.find(|c: char| FINAL_BYTES.contains(&c))?;
        let final_char = body[end..].chars().next()?;
        Some(Self {
            params: &body[..end],
            final_char,
            len: 2 + end + final_char.len_utf8(),
        })
    }

    /// SGR parameters: `;`-separated integers, anything non-numeric is 0
    pub fn sgr_params(&self) -> impl Iterator<Item = i32> + 'a {
        self.params
            .split(';')
            .map(|param| param.trim().parse().unwrap_or(0))
    }

    /// Repeat count for cursor movement and deletion, default 1
    pub fn count(&self) -> isize {
        if self.params.is_empty() {
            return 1;
        }
        match self.params.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                debug!("Invalid CSI count {:?}, using 1", self.params);
                1
            }
        }
    }
}
