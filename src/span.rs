//! Start/length spans into an input sequence.
//!
//! Spans are measured in whatever unit the caller scanned: bytes for
//! [`longest_palindrome_bytes`](crate::longest_palindrome_bytes) and
//! [`longest_palindrome_span`](crate::longest_palindrome_span), chars while
//! the finder is running over decoded text.

/// A `(start, len)` window into an input buffer.
///
/// The default span is the empty span at offset 0, which is also the
/// starting value of the finder's accumulator.
///
/// # Example
/// ```
/// use palindrome::Span;
///
/// let input = b"banana";
/// let span = Span::new(1, 5);
/// assert_eq!(span.slice(input), b"anana");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Create an empty span at a position.
    #[inline]
    pub const fn empty_at(pos: usize) -> Self {
        Self { start: pos, len: 0 }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Length of the span in units.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Strictly longer than `other`. Equal lengths are not longer.
    #[inline]
    pub const fn is_longer_than(&self, other: &Span) -> bool {
        self.len > other.len
    }

    /// Get the slice this span refers to.
    #[inline]
    pub fn slice<'a, T>(&self, input: &'a [T]) -> &'a [T] {
        &input[self.start..self.end()]
    }

    /// Get the substring this span refers to, in byte offsets.
    ///
    /// # Panics
    /// Panics if either end of the span is not on a char boundary.
    #[inline]
    pub fn slice_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end()]
    }
}

impl From<std::ops::Range<usize>> for Span {
    #[inline]
    fn from(r: std::ops::Range<usize>) -> Self {
        debug_assert!(r.start <= r.end);
        Self::new(r.start, r.end - r.start)
    }
}

impl From<Span> for std::ops::Range<usize> {
    #[inline]
    fn from(s: Span) -> Self {
        s.start..s.end()
    }
}
