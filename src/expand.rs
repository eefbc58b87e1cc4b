//! Two-pointer widening around a candidate palindrome center.
//!
//! A center is either a single unit (odd-length palindromes) or the gap
//! between two neighbouring units (even-length palindromes). Expansion
//! grows outward while both sides match and stops at the first mismatch
//! or input boundary. Each call is O(n) worst case and allocates nothing.

use crate::Span;

/// A candidate center at index `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Center {
    /// The unit at `i` itself, for odd-length palindromes.
    Odd(usize),
    /// The gap between `i` and `i + 1`, for even-length palindromes.
    Even(usize),
}

impl Center {
    /// The initial `(left, right)` pair compared for this center.
    #[inline]
    pub const fn bounds(self) -> (usize, usize) {
        match self {
            Center::Odd(i) => (i, i),
            Center::Even(i) => (i, i + 1),
        }
    }
}

/// Expand around `center` using `==` on units.
#[inline]
pub fn expand_center<T: PartialEq>(units: &[T], center: Center) -> Span {
    let (left, right) = center.bounds();
    expand(units, left, right)
}

/// Expand outward from `(left, right)` and return the matched span.
///
/// `right` must be `left` or `left + 1`. Starting pairs that fall off the
/// end of the input produce an empty span clamped to `units.len()`.
///
/// # Example
/// ```
/// use palindrome::expand::expand;
///
/// let span = expand(b"banana", 3, 3);
/// assert_eq!((span.start, span.len), (1, 5));
/// ```
#[inline]
pub fn expand<T: PartialEq>(units: &[T], left: usize, right: usize) -> Span {
    expand_by(units, left, right, |a, b| a == b)
}

/// Like [`expand`], with a caller-supplied unit equivalence.
pub fn expand_by<T, F>(units: &[T], left: usize, right: usize, eq: F) -> Span
where
    F: Fn(&T, &T) -> bool,
{
    debug_assert!(right == left || right == left + 1);

    // Matched window is units[start..end]; the next pair compared is
    // (start - 1, end).
    let mut start = left + 1;
    let mut end = right;
    while start > 0 && end < units.len() && eq(&units[start - 1], &units[end]) {
        start -= 1;
        end += 1;
    }

    if end < start {
        // Odd center that never matched itself (out of range).
        return Span::empty_at(right.min(units.len()));
    }
    Span::new(start, end - start)
}
