//! Entry acceptance rules
//!
//! A loaded line becomes a wordlist entry only if it survives strict UTF-8
//! decoding, whitespace trimming and the ASCII-only check.

use std::borrow::Cow;

/// Why a raw line was left out of the wordlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing left after trimming
    Empty,
    /// Contains at least one non-ASCII character
    NonAscii,
    /// Bytes are not valid UTF-8
    Undecodable,
}

/// Decode a raw line strictly as UTF-8.
///
/// Returns `None` on any malformed sequence instead of substituting
/// replacement characters.
#[inline]
pub fn decode_line(bytes: &[u8]) -> Option<Cow<'_, str>> {
    encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
}

/// Check whether an already trimmed word qualifies for the wordlist
#[inline]
pub fn is_accepted(word: &str) -> bool {
    !word.is_empty() && word.is_ascii()
}

/// Whitespace stripped from both ends of a line. Besides Unicode
/// whitespace this covers the ASCII separators `\x1c`..=`\x1f`.
#[inline]
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Run one raw line through decoding, trimming and the ASCII check
pub fn classify(bytes: &[u8]) -> Result<String, Rejection> {
    let decoded = decode_line(bytes).ok_or(Rejection::Undecodable)?;

    let word = decoded.trim_matches(is_strippable);
    if word.is_empty() {
        Err(Rejection::Empty)
    } else if !word.is_ascii() {
        Err(Rejection::NonAscii)
    } else {
        Ok(word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_accepted() {
        assert!(is_accepted("password"));
        assert!(is_accepted("P@ss w0rd!"));
        assert!(!is_accepted(""));
        assert!(!is_accepted("pässwörd"));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert_eq!(decode_line(b"hello").as_deref(), Some("hello"));
        assert!(decode_line(&[0x66, 0x6f, 0xff, 0x6f]).is_none());
        // Latin-1 encoded "pässwörd"
        assert!(decode_line(b"p\xe4ssw\xf6rd").is_none());
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(b"  abc\r\n"), Ok("abc".to_string()));
        assert_eq!(classify(b"\r\n"), Err(Rejection::Empty));
        assert_eq!(classify("pässwörd\n".as_bytes()), Err(Rejection::NonAscii));
        assert_eq!(classify(b"\xc3\x28"), Err(Rejection::Undecodable));
    }

    #[test]
    fn test_classify_strips_separator_controls() {
        assert_eq!(classify(b"abc\x1f\n"), Ok("abc".to_string()));
        assert_eq!(classify(b"\x1c\x1dx\x1ey\x1e"), Ok("x\x1ey".to_string()));
        assert_eq!(classify(b"\x1f\x1c"), Err(Rejection::Empty));
    }

    #[test]
    fn test_classify_keeps_inner_spaces() {
        assert_eq!(classify(b"\tcorrect horse \n"), Ok("correct horse".to_string()));
    }
}
