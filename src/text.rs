//! Unit decoding for `&str` input.
//!
//! Text is compared one `char` at a time so that every result is a valid
//! `&str` slice. ASCII text is scanned as bytes directly; anything else is
//! decoded into chars alongside their byte offsets, and the winning char
//! span is mapped back to bytes.

use smallvec::SmallVec;

use crate::finder::{find_longest, find_longest_by};
use crate::{Options, Span};

/// Chars kept on the stack before decoding spills to the heap.
const INLINE_CHARS: usize = 64;

/// Decoded chars of a non-ASCII string with their byte offsets.
struct CharUnits<'a> {
    text: &'a str,
    chars: SmallVec<[char; INLINE_CHARS]>,
    offsets: SmallVec<[usize; INLINE_CHARS]>,
}

impl<'a> CharUnits<'a> {
    fn decode(text: &'a str) -> Self {
        let mut chars = SmallVec::new();
        let mut offsets = SmallVec::new();
        for (offset, ch) in text.char_indices() {
            chars.push(ch);
            offsets.push(offset);
        }
        Self { text, chars, offsets }
    }

    /// Byte offset of char index `i`; `i == len` maps to the end of text.
    #[inline]
    fn byte_offset(&self, i: usize) -> usize {
        self.offsets.get(i).copied().unwrap_or(self.text.len())
    }

    fn byte_span(&self, span: Span) -> Span {
        Span::from(self.byte_offset(span.start)..self.byte_offset(span.end()))
    }
}

/// Byte span of the leftmost longest palindrome in `text`.
pub(crate) fn find_in_str(text: &str, options: &Options) -> Span {
    if text.is_ascii() {
        let bytes = text.as_bytes();
        return if options.ignore_ascii_case {
            find_longest_by(bytes, u8::eq_ignore_ascii_case)
        } else {
            find_longest(bytes)
        };
    }

    let units = CharUnits::decode(text);
    let span = if options.ignore_ascii_case {
        find_longest_by(units.chars.as_slice(), char::eq_ignore_ascii_case)
    } else {
        find_longest(units.chars.as_slice())
    };
    units.byte_span(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(text: &str) -> &str {
        find_in_str(text, &Options::default()).slice_str(text)
    }

    #[test]
    fn test_ascii_fast_path() {
        assert_eq!(exact("banana"), "anana");
    }

    #[test]
    fn test_multibyte_result_is_char_aligned() {
        assert_eq!(exact("xéaéy"), "éaé");
        assert_eq!(exact("日本日"), "日本日");
    }

    #[test]
    fn test_multibyte_span_is_in_bytes() {
        let span = find_in_str("aéé", &Options::default());
        assert_eq!(span, Span::new(1, 4));
    }

    #[test]
    fn test_chars_with_shared_lead_bytes_do_not_match() {
        // 'é' (C3 A9) and 'è' (C3 A8) share a lead byte.
        assert_eq!(exact("éè"), "é");
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let text = format!("{}ü{}", "ab".repeat(40), "ba".repeat(40));
        assert_eq!(exact(&text), text.as_str());
    }

    #[test]
    fn test_ignore_ascii_case_on_non_ascii_text() {
        let options = Options {
            ignore_ascii_case: true,
        };
        let text = "ÅbcB!";
        assert_eq!(find_in_str(text, &options).slice_str(text), "bcB");
    }
}
