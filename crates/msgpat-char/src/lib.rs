//! Character classification for the ICU MessageFormat pattern scanner.
//!
//! Patterns are scanned in Unicode scalar units, not bytes, so every index
//! used by this crate (and by `msgpat-parser`/`msgpat-token` downstream)
//! counts `char`s rather than UTF-8 code units. [`PatternChars`] pre-splits
//! a pattern into a `Vec<char>` once so that `charAt`/`len` stay O(1) for the
//! lifetime of a parse, matching the source parser's indexed-access
//! assumption.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

/// Maximum length of the `errorContext` preview, in scalar values.
const ERROR_CONTEXT_MAX_LEN: usize = 24;

/// An indexed, O(1)-random-access view over a pattern's Unicode scalar values.
///
/// Constructed once per parse and never mutated; all parser position
/// bookkeeping is an index into this vector.
#[derive(Debug, Clone)]
pub struct PatternChars {
    chars: Vec<char>,
}

impl PatternChars {
    /// Pre-split `pattern` into scalar values.
    pub fn new(pattern: &str) -> Self {
        PatternChars { chars: pattern.chars().collect() }
    }

    /// Total number of scalar values in the pattern.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the pattern is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character at `pos`, or `None` past the end.
    pub fn at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// Render `[start, limit)` back into a `String`.
    pub fn slice(&self, start: usize, limit: usize) -> String {
        self.chars[start..limit.min(self.chars.len())].iter().collect()
    }

    /// Borrow the full backing scalar-value slice.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

/// Tests whether `c` is Unicode `Pattern_White_Space`.
///
/// This is the fixed fourteen-codepoint set ICU uses, not general
/// [`char::is_whitespace`] — `Pattern_White_Space` deliberately excludes
/// most Unicode space separators so that spaces used as data (e.g. inside
/// identifiers in some scripts) aren't silently skipped.
pub fn is_pattern_white_space(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{0085}'
            | '\u{200E}'
            | '\u{200F}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Tests whether `c` is Unicode `Pattern_Syntax`.
///
/// This mirrors the ranges ICU embeds for `Pattern_Syntax`: ASCII
/// punctuation/symbols plus several supplementary blocks of technical and
/// symbol characters. An identifier run (`skip_identifier`) stops at the
/// first character that is either `Pattern_White_Space` or `Pattern_Syntax`.
pub fn is_pattern_syntax(c: char) -> bool {
    matches!(c,
        '\u{0021}'..='\u{002F}'
        | '\u{003A}'..='\u{0040}'
        | '\u{005B}'..='\u{005E}'
        | '\u{0060}'
        | '\u{007B}'..='\u{007E}'
        | '\u{00A1}'..='\u{00A7}'
        | '\u{00A9}'
        | '\u{00AB}'..='\u{00AC}'
        | '\u{00AE}'
        | '\u{00B0}'..='\u{00B1}'
        | '\u{00B6}'
        | '\u{00BB}'
        | '\u{00BF}'
        | '\u{00D7}'
        | '\u{00F7}'
        | '\u{2010}'..='\u{2027}'
        | '\u{2030}'..='\u{203E}'
        | '\u{2041}'..='\u{2053}'
        | '\u{2055}'..='\u{205E}'
        | '\u{2190}'..='\u{245F}'
        | '\u{2500}'..='\u{2775}'
        | '\u{2794}'..='\u{2BFF}'
        | '\u{2E00}'..='\u{2E7F}'
        | '\u{3001}'..='\u{3003}'
        | '\u{3008}'..='\u{3020}'
        | '\u{3030}'
        | '\u{FD3E}'..='\u{FD3F}'
        | '\u{FE45}'..='\u{FE46}')
}

/// Advance past a run of `Pattern_White_Space` starting at `pos`.
///
/// Returns the index of the first non-whitespace character (or `len()` if
/// the pattern ends in whitespace).
pub fn skip_whitespace(chars: &PatternChars, pos: usize) -> usize {
    let mut i = pos;
    while let Some(c) = chars.at(i) {
        if !is_pattern_white_space(c) {
            break;
        }
        i += 1;
    }
    i
}

/// Advance past a run of identifier characters starting at `pos`.
///
/// An identifier character is any scalar value that is *neither*
/// `Pattern_White_Space` nor `Pattern_Syntax`; argument names and plural/
/// select selector keywords are both scanned with this rule.
pub fn skip_identifier(chars: &PatternChars, pos: usize) -> usize {
    let mut i = pos;
    while let Some(c) = chars.at(i) {
        if is_pattern_white_space(c) || is_pattern_syntax(c) {
            break;
        }
        i += 1;
    }
    i
}

/// Advance past a run of double-literal characters (`[0-9+\-.eE]` or `∞`)
/// starting at `pos`.
pub fn skip_double(chars: &PatternChars, pos: usize) -> usize {
    let mut i = pos;
    while let Some(c) = chars.at(i) {
        if c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E' | '\u{221E}') {
            i += 1;
        } else {
            break;
        }
    }
    i
}

/// True for any ASCII letter; used to recognize the body of an `ARG_TYPE`
/// keyword span once its extent is known.
pub fn is_arg_type_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Case-insensitive match of `keyword` (ASCII-only) against the pattern
/// starting at `pos`, followed by a non-identifier boundary.
///
/// Only used for the fixed literal keywords `choice`, `plural`, `select`,
/// and `ordinal` — general Unicode case-folding is deliberately not
/// attempted here, matching the source parser's ASCII-only keyword compare.
/// Returns the index just past the keyword on match.
pub fn starts_with_ci(chars: &PatternChars, pos: usize, keyword: &str) -> Option<usize> {
    let mut i = pos;
    for kw_ch in keyword.chars() {
        let c = chars.at(i)?;
        if !c.eq_ignore_ascii_case(&kw_ch) {
            return None;
        }
        i += 1;
    }
    Some(i)
}

/// Build a `[at pattern index N] "preview…"` context string for an error
/// message, previewing at most [`ERROR_CONTEXT_MAX_LEN`] scalar values
/// starting at `pos`.
pub fn error_context(chars: &PatternChars, pos: usize) -> String {
    let end = (pos + ERROR_CONTEXT_MAX_LEN).min(chars.len());
    let preview = if pos < chars.len() { chars.slice(pos, end) } else { String::new() };
    if pos > 0 {
        format!("[at pattern index {pos}] \"{preview}\"")
    } else {
        format!("\"{preview}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_set_matches_spec() {
        for c in ['\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ', '\u{85}', '\u{200E}', '\u{200F}', '\u{2028}', '\u{2029}'] {
            assert!(is_pattern_white_space(c), "{c:?} should be whitespace");
        }
        assert!(!is_pattern_white_space('a'));
        assert!(!is_pattern_white_space('\u{00A0}')); // NBSP is not Pattern_White_Space
    }

    #[test]
    fn skip_whitespace_stops_at_first_non_ws() {
        let p = PatternChars::new("   abc");
        assert_eq!(skip_whitespace(&p, 0), 3);
    }

    #[test]
    fn skip_identifier_stops_at_syntax() {
        let p = PatternChars::new("count, plural");
        assert_eq!(skip_identifier(&p, 0), 5); // stops at ','
    }

    #[test]
    fn skip_identifier_empty_at_syntax_char() {
        let p = PatternChars::new(",");
        assert_eq!(skip_identifier(&p, 0), 0);
    }

    #[test]
    fn skip_double_handles_signed_and_infinity() {
        let p = PatternChars::new("-3.14e10 rest");
        assert_eq!(skip_double(&p, 0), 8);
        let p2 = PatternChars::new("+\u{221E} rest");
        assert_eq!(skip_double(&p2, 0), 2);
    }

    #[test]
    fn keyword_match_is_case_insensitive_ascii_only() {
        let p = PatternChars::new("PLURAL, one");
        assert_eq!(starts_with_ci(&p, 0, "plural"), Some(6));
        let p2 = PatternChars::new("plurale");
        assert_eq!(starts_with_ci(&p2, 0, "plural"), Some(6));
        let p3 = PatternChars::new("plura");
        assert_eq!(starts_with_ci(&p3, 0, "plural"), None);
    }

    #[test]
    fn error_context_prefixes_position_when_nonzero() {
        let p = PatternChars::new("hello {name");
        assert_eq!(error_context(&p, 0), "\"hello {name\"");
        assert!(error_context(&p, 6).starts_with("[at pattern index 6] "));
    }

    #[test]
    fn error_context_truncates_to_max_len() {
        let long = "x".repeat(100);
        let p = PatternChars::new(&long);
        let ctx = error_context(&p, 0);
        // "" plus up to 24 chars plus two quotes
        assert_eq!(ctx.chars().count(), 24 + 2);
    }
}
