//! Apostrophe-doubling helpers used by auto-quote repair.
//!
//! When a pattern round-trips through [`crate::parse`] in
//! `DOUBLE_OPTIONAL` mode and is later re-serialized for a context that
//! requires `DOUBLE_REQUIRED`-safe quoting (for example, feeding a
//! previously-unquoted literal back into a stricter consumer), every
//! literal apostrophe must be doubled so it keeps meaning "literal `'`"
//! rather than opening a quoted span.

use msgpat_token::{PartStore, PartType};

/// Collapse every `''` pair in `s[start..limit)` (scalar-value indices) down
/// to a single `'`, appending the result to `out`.
///
/// This is the inverse of the doubling `auto_quote_apostrophe_deep`
/// performs; it is exposed standalone because the parser's own literal-text
/// handling needs the same collapse when consuming a `DOUBLE_REQUIRED`
/// quoted span.
pub fn append_reduced_apostrophes(s: &[char], start: usize, limit: usize, out: &mut String) {
    let mut i = start;
    while i < limit {
        let c = s[i];
        if c == '\'' && i + 1 < limit && s[i + 1] == '\'' {
            out.push('\'');
            i += 2;
        } else {
            out.push(c);
            i += 1;
        }
    }
}

/// Render `store`'s original pattern with every literal apostrophe doubled
/// and every `InsertChar` repair applied, producing a canonical
/// `DOUBLE_REQUIRED`-safe rendering of the parsed message.
///
/// `InsertChar` marks where the parser collapsed a `''` pair (or repaired an
/// unterminated quote) down to one literal `'`; re-doubling at that point
/// restores a `DOUBLE_REQUIRED`-safe span. `SkipSyntax` marks the quote
/// delimiters themselves (opening/closing `'` around a quoted literal) and
/// is copied through verbatim rather than doubled — they are syntax, not a
/// literal apostrophe.
pub fn auto_quote_apostrophe_deep(store: &PartStore) -> String {
    let source: Vec<char> = store.pattern().chars().collect();
    let mut out = String::new();
    let mut cursor = 0usize;

    for part in store.iter() {
        if part.part_type == PartType::InsertChar {
            copy_doubling_apostrophes(&source, cursor, part.index, &mut out);
            out.push('\'');
            cursor = part.index;
        }
    }
    copy_doubling_apostrophes(&source, cursor, source.len(), &mut out);
    out
}

fn copy_doubling_apostrophes(source: &[char], start: usize, limit: usize, out: &mut String) {
    for &c in &source[start.min(source.len())..limit.min(source.len())] {
        out.push(c);
        if c == '\'' {
            out.push('\'');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_doubled_apostrophes() {
        let s: Vec<char> = "it''s fine".chars().collect();
        let mut out = String::new();
        append_reduced_apostrophes(&s, 0, s.len(), &mut out);
        assert_eq!(out, "it's fine");
    }

    #[test]
    fn leaves_lone_apostrophe_when_not_a_pair() {
        let s: Vec<char> = "it's".chars().collect();
        let mut out = String::new();
        append_reduced_apostrophes(&s, 0, s.len(), &mut out);
        assert_eq!(out, "it's");
    }
}
