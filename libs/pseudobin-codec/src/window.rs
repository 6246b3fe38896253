//! Message windows
//!
//! A window selects `width` characters starting at `start`. Offsets count
//! characters, not bytes, so multi-byte text never splits a code point.

use crate::error::DecodeError;
use serde::Serialize;

/// Contiguous character range of an encoded message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    start: usize,
    width: usize,
}

/// A message split around its window, for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segments<'a> {
    pub before: &'a str,
    pub window: &'a str,
    pub after: &'a str,
}

impl Window {
    pub fn new(start: usize, width: usize) -> Result<Self, DecodeError> {
        if width == 0 {
            return Err(DecodeError::EmptyInput);
        }
        Ok(Self { start, width })
    }

    /// Resolve a possibly end-relative offset against a message length
    ///
    /// A negative `offset` counts back from the end of the message
    /// (`-1` is the last character); a non-negative one is absolute.
    pub fn from_offset(len: usize, offset: i64, width: usize) -> Result<Self, DecodeError> {
        let start = if offset < 0 {
            len as i64 + offset
        } else {
            offset
        };
        let out_of_bounds = DecodeError::WindowOutOfBounds { start, width, len };
        let start = usize::try_from(start).map_err(|_| out_of_bounds.clone())?;
        let window = Self::new(start, width)?;
        if window.end() > len {
            return Err(out_of_bounds);
        }
        Ok(window)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// One past the last character of the window
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.width)
    }

    /// Check the window against a message of `len` characters
    pub fn check(&self, len: usize) -> Result<(), DecodeError> {
        if self.end() > len {
            return Err(DecodeError::WindowOutOfBounds {
                start: self.start as i64,
                width: self.width,
                len,
            });
        }
        Ok(())
    }

    /// The window's text
    pub fn extract<'a>(&self, message: &'a str) -> Result<&'a str, DecodeError> {
        Ok(self.split(message)?.window)
    }

    /// Split `message` into the text before, inside and after the window
    pub fn split<'a>(&self, message: &'a str) -> Result<Segments<'a>, DecodeError> {
        let len = message.chars().count();
        self.check(len)?;

        let begin = byte_offset(message, self.start);
        let end = byte_offset(message, self.end());
        Ok(Segments {
            before: &message[..begin],
            window: &message[begin..end],
            after: &message[end..],
        })
    }
}

/// Byte offset of the `index`-th character (or the end of the string)
fn byte_offset(message: &str, index: usize) -> usize {
    message
        .char_indices()
        .nth(index)
        .map_or(message.len(), |(offset, _)| offset)
}
