//! Source location spans.
//!
//! Compact 8-byte span carried by every IR node. Offsets are byte
//! positions set by the frontend and read-only after construction; the
//! [`Span::UNKNOWN`] sentinel marks synthesized nodes with no source
//! position.

use std::fmt;

use thiserror::Error;

/// Error when creating a span from a range that exceeds `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    #[error("span start {0} exceeds u32::MAX")]
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    #[error("span end {0} exceeds u32::MAX")]
    EndTooLarge(usize),
}

/// Source location span.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive), `end >= start` by construction
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

crate::static_assert_size!(Span, 8);

impl Span {
    /// Sentinel for nodes with no source position (synthesized code).
    pub const UNKNOWN: Span = Span {
        start: u32::MAX,
        end: u32::MAX,
    };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Try to create a span from a byte range.
    ///
    /// Returns an error if the range exceeds `u32::MAX` bytes.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Whether this span carries a real source position.
    #[inline]
    pub const fn is_known(&self) -> bool {
        self.start != u32::MAX || self.end != u32::MAX
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Merge two spans to create one covering both.
    ///
    /// An unknown span never widens the result.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        if !self.is_known() {
            return other;
        }
        if !other.is_known() {
            return self;
        }
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "Span({}..{})", self.start, self.end)
        } else {
            write!(f, "Span(?)")
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}..{}", self.start, self.end)
        } else {
            write!(f, "?")
        }
    }
}
