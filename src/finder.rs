//! Longest palindromic span search over a slice of units.
//!
//! Every index is tried as an odd center and then as an even center, in
//! increasing order. The best span so far lives in a [`BestSpan`] owned by
//! the call, so concurrent searches never share state.

use crate::expand::{Center, expand_by};
use crate::Span;

/// Call-local accumulator for the longest span seen so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BestSpan {
    span: Span,
}

impl BestSpan {
    /// Start at the empty span at offset 0.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt `candidate` if it is strictly longer than the current best.
    ///
    /// Equal-length candidates are dropped, so the earliest maximal span
    /// wins. Returns whether the candidate was adopted.
    #[inline]
    pub fn offer(&mut self, candidate: Span) -> bool {
        if candidate.is_longer_than(&self.span) {
            log::trace!(
                "best span {}..{} -> {}..{}",
                self.span.start,
                self.span.end(),
                candidate.start,
                candidate.end()
            );
            self.span = candidate;
            true
        } else {
            false
        }
    }

    /// The best span seen so far.
    #[inline]
    pub fn get(&self) -> Span {
        self.span
    }
}

/// Find the leftmost longest palindromic span using `==` on units.
///
/// # Example
/// ```
/// use palindrome::{Span, finder::find_longest};
///
/// assert_eq!(find_longest(b"babad"), Span::new(0, 3));
/// ```
#[inline]
pub fn find_longest<T: PartialEq>(units: &[T]) -> Span {
    find_longest_by(units, |a, b| a == b)
}

/// Find the leftmost longest palindromic span under `eq`.
pub fn find_longest_by<T, F>(units: &[T], eq: F) -> Span
where
    F: Fn(&T, &T) -> bool,
{
    let mut best = BestSpan::new();
    for i in 0..units.len() {
        for center in [Center::Odd(i), Center::Even(i)] {
            let (left, right) = center.bounds();
            best.offer(expand_by(units, left, right, &eq));
        }
    }
    best.get()
}
