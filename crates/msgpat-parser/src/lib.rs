//! Recursive-descent parser for ICU MessageFormat patterns.
//!
//! [`parse`] and [`parse_with_limits`] are the top-level entry points,
//! producing a [`PartStore`] from a pattern string. `parse_choice_style`,
//! `parse_plural_style`, and `parse_select_style` additionally expose the
//! sub-style grammars directly, for callers that want to validate a style
//! fragment without a surrounding `{name, type, ...}` argument.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

mod numeric;
mod parser;
mod quote;

use msgpat_error::{ParseError, ParseLimits};
use msgpat_token::{ApostropheMode, ArgType, PartStore};

pub use numeric::{scan_signed_numeric, NumericLiteral};
pub use quote::{append_reduced_apostrophes, auto_quote_apostrophe_deep};

/// Parse `pattern` using [`ParseLimits::default`] and the given apostrophe
/// mode, returning the resulting [`PartStore`].
pub fn parse(pattern: &str, mode: ApostropheMode) -> Result<PartStore, ParseError> {
    parse_with_limits(pattern, mode, ParseLimits::default())
}

/// Parse `pattern` with explicit resource limits.
pub fn parse_with_limits(
    pattern: &str,
    mode: ApostropheMode,
    limits: ParseLimits,
) -> Result<PartStore, ParseError> {
    let mut store = PartStore::with_limits(pattern, mode, limits);
    tracing::debug!(pattern_len = pattern.chars().count(), ?mode, "parsing message pattern");
    match parser::parse(&mut store) {
        Ok(()) => {
            tracing::trace!(parts = store.count(), "parse succeeded");
            Ok(store)
        }
        Err(e) => {
            tracing::debug!(error = %e, "parse failed");
            Err(e)
        }
    }
}

/// Parse a CHOICE style fragment directly (no surrounding `{name, choice,
/// ...}`), for validating or testing a style body in isolation.
pub fn parse_choice_style(pattern: &str) -> Result<PartStore, ParseError> {
    parse_style_fragment(pattern, ArgType::Choice)
}

/// Parse a PLURAL style fragment directly.
pub fn parse_plural_style(pattern: &str) -> Result<PartStore, ParseError> {
    parse_style_fragment(pattern, ArgType::Plural)
}

/// Parse a SELECT style fragment directly.
pub fn parse_select_style(pattern: &str) -> Result<PartStore, ParseError> {
    parse_style_fragment(pattern, ArgType::Select)
}

fn parse_style_fragment(pattern: &str, arg_type: ArgType) -> Result<PartStore, ParseError> {
    let wrapped = format!(
        "{{x, {}, {}}}",
        match arg_type {
            ArgType::Choice => "choice",
            ArgType::Plural => "plural",
            ArgType::Select => "select",
            ArgType::SelectOrdinal => "selectordinal",
            ArgType::Simple | ArgType::None => unreachable!("style fragments are always complex"),
        },
        pattern
    );
    parse(&wrapped, ApostropheMode::DoubleOptional)
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgpat_token::PartType;

    #[test]
    fn plain_text_has_no_parts_besides_msg_bracket() {
        let store = parse("hello world", ApostropheMode::DoubleOptional).unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store.part_type(0), PartType::MsgStart);
        assert_eq!(store.part_type(1), PartType::MsgLimit);
    }

    #[test]
    fn simple_numbered_argument() {
        let store = parse("{0}", ApostropheMode::DoubleOptional).unwrap();
        let types: Vec<_> = store.iter().map(|p| p.part_type).collect();
        assert_eq!(
            types,
            vec![
                PartType::MsgStart,
                PartType::ArgStart,
                PartType::ArgNumber,
                PartType::ArgLimit,
                PartType::MsgLimit,
            ]
        );
    }

    #[test]
    fn simple_named_argument_with_style() {
        let store = parse("{count, number, integer}", ApostropheMode::DoubleOptional).unwrap();
        let types: Vec<_> = store.iter().map(|p| p.part_type).collect();
        assert_eq!(
            types,
            vec![
                PartType::MsgStart,
                PartType::ArgStart,
                PartType::ArgName,
                PartType::ArgType,
                PartType::ArgStyle,
                PartType::ArgLimit,
                PartType::MsgLimit,
            ]
        );
        let style_part = store.part(4);
        assert_eq!(store.substring(style_part), "integer");
    }

    #[test]
    fn plural_argument_with_offset_and_numeric_selector() {
        let store =
            parse("{count, plural, offset:1 =0{none} one{#} other{#}}", ApostropheMode::DoubleOptional)
                .unwrap();
        let types: Vec<_> = store.iter().map(|p| p.part_type).collect();
        assert!(types.contains(&PartType::ArgInt));
        assert!(types.contains(&PartType::ReplaceNumber));
        let arg_start = store.iter_indexed().find(|(_, p)| p.part_type == PartType::ArgStart).unwrap().0;
        assert_eq!(store.plural_offset(arg_start), 1.0);
    }

    #[test]
    fn unmatched_brace_is_an_error() {
        let err = parse("Hi {name", ApostropheMode::DoubleOptional).unwrap_err();
        assert_eq!(err.kind, msgpat_error::ParseErrorKind::UnmatchedBrace);
    }

    #[test]
    fn missing_other_is_an_error() {
        let err = parse("{count, plural, one{#}}", ApostropheMode::DoubleOptional).unwrap_err();
        assert_eq!(err.kind, msgpat_error::ParseErrorKind::MissingOtherKeyword);
    }

    #[test]
    fn doubled_apostrophe_yields_insert_char() {
        let store = parse("it''s fine", ApostropheMode::DoubleOptional).unwrap();
        assert!(store.iter().any(|p| p.part_type == PartType::InsertChar));
    }

    #[test]
    fn lone_apostrophe_before_brace_opens_quoted_literal() {
        let store = parse("text '{literal}' {0}", ApostropheMode::DoubleOptional).unwrap();
        let skip_count = store.iter().filter(|p| p.part_type == PartType::SkipSyntax).count();
        assert_eq!(skip_count, 2);
    }

    #[test]
    fn choice_style_end_to_end() {
        let store = parse("{n, choice, 0#none|1#one|1<many}", ApostropheMode::DoubleOptional).unwrap();
        let selectors: Vec<_> =
            store.iter().filter(|p| p.part_type == PartType::ArgSelector).collect();
        assert_eq!(selectors.len(), 3);
    }
}
