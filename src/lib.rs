//! palindrome: longest palindromic substring by center expansion
//!
//! Every position in the input is tried as the center of an odd-length and
//! an even-length palindrome, and each center is widened outward while both
//! sides agree. The longest span wins; ties go to the leftmost one.
//!
//! # Design Principles
//! - Total: every input, including empty or absent, has a defined result
//! - No shared state: the best-span accumulator belongs to one call
//! - Zero-copy: results borrow from the input
//! - O(n^2) time worst case, no heap allocation for ASCII input

pub mod expand;
pub mod finder;
pub mod span;
mod text;

pub use finder::BestSpan;
pub use span::Span;

/// Matching options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Treat ASCII letters as equal regardless of case. Non-ASCII chars
    /// still compare exactly.
    pub ignore_ascii_case: bool,
}

/// Return the leftmost longest palindromic substring of `text`.
///
/// This is the primary API for simple use cases. Text is compared one
/// `char` at a time, so the result is always a valid slice of `text`.
///
/// # Example
/// ```
/// assert_eq!(palindrome::longest_palindrome("banana"), "anana");
/// assert_eq!(palindrome::longest_palindrome("babad"), "bab");
/// assert_eq!(palindrome::longest_palindrome(""), "");
/// ```
pub fn longest_palindrome(text: &str) -> &str {
    longest_palindrome_with_options(text, &Options::default())
}

/// Like [`longest_palindrome`], treating absent input as empty.
pub fn longest_palindrome_opt(text: Option<&str>) -> &str {
    text.map_or("", longest_palindrome)
}

/// Return the leftmost longest palindromic substring under `options`.
///
/// The result is always borrowed from `text`, so with
/// `ignore_ascii_case` it keeps the input's original casing.
pub fn longest_palindrome_with_options<'a>(text: &'a str, options: &Options) -> &'a str {
    longest_palindrome_span_with_options(text, options).slice_str(text)
}

/// Byte span of the leftmost longest palindromic substring of `text`.
///
/// # Example
/// ```
/// use palindrome::{Span, longest_palindrome_span};
///
/// assert_eq!(longest_palindrome_span("banana"), Span::new(1, 5));
/// ```
pub fn longest_palindrome_span(text: &str) -> Span {
    longest_palindrome_span_with_options(text, &Options::default())
}

/// Byte span of the leftmost longest palindromic substring under `options`.
pub fn longest_palindrome_span_with_options(text: &str, options: &Options) -> Span {
    let span = text::find_in_str(text, options);
    log::debug!(
        "longest palindrome in {} bytes: {}..{}",
        text.len(),
        span.start,
        span.end()
    );
    span
}

/// Span of the leftmost longest palindrome over raw bytes.
///
/// No UTF-8 interpretation is done; each byte is one unit.
pub fn longest_palindrome_bytes(bytes: &[u8]) -> Span {
    let span = finder::find_longest(bytes);
    log::debug!(
        "longest byte palindrome in {} bytes: {}..{}",
        bytes.len(),
        span.start,
        span.end()
    );
    span
}

/// Check whether `text` reads the same forward and backward, by `char`.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        assert_eq!(longest_palindrome("banana"), "anana");
        assert_eq!(longest_palindrome("babad"), "bab");
        assert_eq!(longest_palindrome("cbbd"), "bb");
        assert_eq!(longest_palindrome("a"), "a");
        assert_eq!(longest_palindrome(""), "");
    }

    #[test]
    fn test_absent_input() {
        assert_eq!(longest_palindrome_opt(None), "");
        assert_eq!(longest_palindrome_opt(Some("")), "");
        assert_eq!(longest_palindrome_opt(Some("cbbd")), "bb");
    }

    #[test]
    fn test_span_of_banana() {
        assert_eq!(longest_palindrome_span("banana"), Span::new(1, 5));
        assert_eq!(longest_palindrome_span(""), Span::default());
    }

    #[test]
    fn test_ignore_ascii_case_keeps_original_slice() {
        let options = Options {
            ignore_ascii_case: true,
        };
        assert_eq!(longest_palindrome_with_options("xRaceCar!", &options), "RaceCar");
        assert_eq!(longest_palindrome_with_options("xAbBay", &options), "AbBa");
        assert_eq!(longest_palindrome("xAbBay"), "x");
    }

    #[test]
    fn test_bytes_mode_splits_chars() {
        // "éé" is C3 A9 C3 A9; C3 A9 C3 is a byte palindrome cutting a char.
        let span = longest_palindrome_bytes("éé".as_bytes());
        assert_eq!(span, Span::new(0, 3));
        assert_eq!(longest_palindrome("éé"), "éé");
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("ésé"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let first = longest_palindrome("forgeeksskeegfor");
        let second = longest_palindrome("forgeeksskeegfor");
        assert_eq!(first, "geeksskeeg");
        assert_eq!(first, second);
    }
}
