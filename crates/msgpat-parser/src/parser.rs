//! The recursive-descent state machine: `parseMessage`/`parseArg` and the
//! three style sub-grammars (simple, choice, plural/select).

use msgpat_char::{skip_identifier, skip_whitespace};
use msgpat_error::{ParseError, ParseErrorKind};
use msgpat_token::{ApostropheMode, ArgType, Part, PartStore, PartType};

use crate::numeric::{scan_signed_numeric, NumericLiteral};

const APOSTROPHE: i32 = 0x27;

fn err<T>(store: &PartStore, kind: ParseErrorKind, pos: usize) -> Result<T, ParseError> {
    Err(ParseError::new(kind, pos, store.chars()))
}

fn push_numeric_literal(
    store: &mut PartStore,
    lit: NumericLiteral,
    index: usize,
    length: usize,
    at_for_error: usize,
) -> Result<(), ParseError> {
    match lit {
        NumericLiteral::Int(v) => {
            store.push(Part::new(PartType::ArgInt, index, length, v))?;
        }
        NumericLiteral::Double(v) => {
            let didx = store.push_double(v, at_for_error)?;
            store.push(Part::new(PartType::ArgDouble, index, length, didx as i32))?;
        }
    }
    Ok(())
}

fn opens_quote(mode: ApostropheMode, next: Option<char>) -> bool {
    match mode {
        ApostropheMode::DoubleRequired => true,
        ApostropheMode::DoubleOptional => {
            matches!(next, Some('{') | Some('}') | Some('#') | Some('|'))
        }
    }
}

fn enter_nesting(store: &PartStore, next_nesting: usize, pos: usize) -> Result<(), ParseError> {
    if next_nesting > store.limits().max_nesting_depth {
        return err(
            store,
            ParseErrorKind::TooLarge("Nesting level exceeds maximum".to_string()),
            pos,
        );
    }
    Ok(())
}

/// Parse a full message body starting at `pos`. `nesting` is the current
/// brace-nesting depth (shared between argument opens and sub-message
/// opens); `parent` is the enclosing complex argument type, or
/// [`ArgType::None`] at top level.
///
/// Returns the scalar-value position just past the delimiter that ended
/// this message (the matching `}`, a choice `|`, or end-of-string at the
/// top level).
pub fn parse_message(
    store: &mut PartStore,
    mut pos: usize,
    nesting: usize,
    parent: ArgType,
) -> Result<usize, ParseError> {
    store.push(Part::new(PartType::MsgStart, pos, 0, nesting as i32))?;
    let mode = store.apostrophe_mode();

    loop {
        match store.chars().at(pos) {
            None => {
                if nesting > 0 || parent != ArgType::None {
                    return err(store, ParseErrorKind::UnmatchedBrace, pos);
                }
                store.push(Part::new(PartType::MsgLimit, pos, 0, 0))?;
                return Ok(pos);
            }
            Some('\'') if store.chars().at(pos + 1) == Some('\'') => {
                store.push(Part::new(PartType::InsertChar, pos, 1, APOSTROPHE))?;
                pos += 2;
            }
            Some('\'') if opens_quote(mode, store.chars().at(pos + 1)) => {
                store.push(Part::new(PartType::SkipSyntax, pos, 1, 0))?;
                pos += 1;
                pos = scan_quoted_literal(store, pos)?;
                if pos == usize::MAX {
                    // End-of-string inside an unterminated quote never aborts
                    // the parse (the INSERT_CHAR just pushed is the repair);
                    // still close this message's own MsgStart so the store
                    // keeps its start/limit pairing at this level.
                    let eos = store.chars().len();
                    store.push(Part::new(PartType::MsgLimit, eos, 0, nesting as i32))?;
                    return Ok(eos);
                }
            }
            Some('\'') => {
                pos += 1;
            }
            Some('{') => {
                enter_nesting(store, nesting + 1, pos)?;
                pos = parse_argument(store, pos, nesting + 1)?;
            }
            Some('}') if nesting > 0 || parent != ArgType::None => {
                store.push(Part::new(PartType::MsgLimit, pos, 1, nesting as i32))?;
                return Ok(pos + 1);
            }
            Some('}') => {
                // Unmatched top-level close brace: left as literal text, matching ICU.
                pos += 1;
            }
            Some('#') if matches!(parent, ArgType::Plural | ArgType::SelectOrdinal) => {
                store.push(Part::new(PartType::ReplaceNumber, pos, 1, 0))?;
                pos += 1;
            }
            Some('|') if parent == ArgType::Choice => {
                store.push(Part::new(PartType::MsgLimit, pos, 1, nesting as i32))?;
                return Ok(pos + 1);
            }
            Some(_) => {
                pos += 1;
            }
        }
    }
}

/// Scan a quoted literal body after its opening `SKIP_SYNTAX` has already
/// been recorded. Returns the position past the closing quote, or
/// `usize::MAX` if end-of-string was reached (the caller has already
/// returned in that case via the `INSERT_CHAR` auto-repair path).
fn scan_quoted_literal(store: &mut PartStore, mut pos: usize) -> Result<usize, ParseError> {
    loop {
        match store.chars().at(pos) {
            None => {
                store.push(Part::new(PartType::InsertChar, pos, 0, APOSTROPHE))?;
                return Ok(usize::MAX);
            }
            Some('\'') if store.chars().at(pos + 1) == Some('\'') => {
                store.push(Part::new(PartType::InsertChar, pos, 1, APOSTROPHE))?;
                pos += 2;
            }
            Some('\'') => {
                store.push(Part::new(PartType::SkipSyntax, pos, 1, 0))?;
                return Ok(pos + 1);
            }
            Some(_) => {
                pos += 1;
            }
        }
    }
}

/// Parse an argument body starting at `pos`, which points at the opening
/// `{`. `nesting` already accounts for this argument's own brace.
pub fn parse_argument(
    store: &mut PartStore,
    open_brace_pos: usize,
    nesting: usize,
) -> Result<usize, ParseError> {
    let arg_start_index =
        store.push(Part::with_arg_type(PartType::ArgStart, open_brace_pos, 0, 0, ArgType::None))?;
    let mut pos = open_brace_pos + 1;
    pos = skip_whitespace(store.chars(), pos);

    pos = parse_argument_name(store, pos)?;
    pos = skip_whitespace(store.chars(), pos);

    let (arg_type, keyword_span) = match store.chars().at(pos) {
        Some('}') => {
            store.push(Part::with_arg_type(PartType::ArgLimit, pos, 1, 0, ArgType::None))?;
            store.patch_arg_type(arg_start_index, ArgType::None);
            store.patch_value(arg_start_index, 0);
            return Ok(pos + 1);
        }
        Some(',') => {
            pos += 1;
            pos = skip_whitespace(store.chars(), pos);
            let ident_start = pos;
            let ident_end = skip_identifier(store.chars(), pos);
            if ident_end == ident_start {
                return err(
                    store,
                    ParseErrorKind::BadArgumentSyntax("Expected argument type".to_string()),
                    pos,
                );
            }
            let keyword = store.chars().slice(ident_start, ident_end);
            let lower = keyword.to_ascii_lowercase();
            let arg_type = match lower.as_str() {
                "choice" => ArgType::Choice,
                "plural" => ArgType::Plural,
                "select" => ArgType::Select,
                "selectordinal" => ArgType::SelectOrdinal,
                _ => ArgType::Simple,
            };
            (arg_type, (ident_start, ident_end))
        }
        None => return err(store, ParseErrorKind::UnmatchedBrace, pos),
        _ => {
            return err(
                store,
                ParseErrorKind::BadArgumentSyntax("Expected ',' or '}' after argument name".to_string()),
                pos,
            )
        }
    };
    pos = keyword_span.1;

    if arg_type == ArgType::Simple {
        store.push(Part::new(PartType::ArgType, keyword_span.0, keyword_span.1 - keyword_span.0, 0))?;
    }

    pos = skip_whitespace(store.chars(), pos);
    match store.chars().at(pos) {
        Some('}') => {
            if arg_type != ArgType::Simple {
                return err(store, ParseErrorKind::NoStyleForComplexArg, pos);
            }
            store.push(Part::with_arg_type(PartType::ArgLimit, pos, 1, ArgType::Simple as i32, ArgType::Simple))?;
            store.patch_arg_type(arg_start_index, ArgType::Simple);
            store.patch_value(arg_start_index, ArgType::Simple as i32);
            Ok(pos + 1)
        }
        Some(',') => {
            pos += 1;
            match arg_type {
                ArgType::Simple => {
                    let style_start = pos;
                    let style_end = parse_simple_style(store, pos)?;
                    store.push(Part::new(PartType::ArgStyle, style_start, style_end - style_start, 0))?;
                    pos = style_end;
                    if store.chars().at(pos) != Some('}') {
                        return err(store, ParseErrorKind::UnmatchedBrace, pos);
                    }
                    store.push(Part::with_arg_type(PartType::ArgLimit, pos, 1, ArgType::Simple as i32, ArgType::Simple))?;
                    store.patch_arg_type(arg_start_index, ArgType::Simple);
                    store.patch_value(arg_start_index, ArgType::Simple as i32);
                    Ok(pos + 1)
                }
                ArgType::Choice => {
                    let pos_after = parse_choice_style(store, pos, nesting)?;
                    store.push(Part::with_arg_type(
                        PartType::ArgLimit,
                        pos_after - 1,
                        1,
                        ArgType::Choice as i32,
                        ArgType::Choice,
                    ))?;
                    store.patch_arg_type(arg_start_index, ArgType::Choice);
                    store.patch_value(arg_start_index, ArgType::Choice as i32);
                    Ok(pos_after)
                }
                ArgType::Plural | ArgType::Select | ArgType::SelectOrdinal => {
                    let pos_at_close = parse_plural_or_select_style(store, pos, nesting, arg_type)?;
                    if store.chars().at(pos_at_close) != Some('}') {
                        return err(store, ParseErrorKind::UnmatchedBrace, pos_at_close);
                    }
                    store.push(Part::with_arg_type(
                        PartType::ArgLimit,
                        pos_at_close,
                        1,
                        arg_type as i32,
                        arg_type,
                    ))?;
                    store.patch_arg_type(arg_start_index, arg_type);
                    store.patch_value(arg_start_index, arg_type as i32);
                    Ok(pos_at_close + 1)
                }
                ArgType::None => unreachable!("None cannot come from the keyword match above"),
            }
        }
        None => err(store, ParseErrorKind::UnmatchedBrace, pos),
        _ => {
            if arg_type != ArgType::Simple {
                err(store, ParseErrorKind::NoStyleForComplexArg, pos)
            } else {
                err(
                    store,
                    ParseErrorKind::BadArgumentSyntax("Expected ',' or '}' after argument type".to_string()),
                    pos,
                )
            }
        }
    }
}

fn parse_argument_name(store: &mut PartStore, pos: usize) -> Result<usize, ParseError> {
    let ident_start = pos;
    let ident_end = skip_identifier(store.chars(), pos);
    if ident_end == ident_start {
        return err(
            store,
            ParseErrorKind::BadArgumentSyntax("Expected argument name".to_string()),
            pos,
        );
    }
    let span = store.chars().slice(ident_start, ident_end);
    let len = ident_end - ident_start;
    if len > store.limits().max_length {
        return err(
            store,
            ParseErrorKind::TooLarge("Argument name too long".to_string()),
            ident_start,
        );
    }

    let all_digits = span.chars().all(|c| c.is_ascii_digit());
    if !all_digits {
        store.push(Part::new(PartType::ArgName, ident_start, len, 0))?;
        return Ok(ident_end);
    }
    if len > 1 && span.starts_with('0') {
        return err(
            store,
            ParseErrorKind::BadArgumentSyntax("Argument number must not have a leading zero".to_string()),
            ident_start,
        );
    }
    match span.parse::<i64>() {
        Ok(v) if i32::try_from(v).is_ok() => {
            store.push(Part::new(PartType::ArgNumber, ident_start, len, v as i32))?;
            Ok(ident_end)
        }
        _ => err(
            store,
            ParseErrorKind::TooLarge("Argument number too large".to_string()),
            ident_start,
        ),
    }
}

/// Consume a SIMPLE argument's verbatim style text, stopping at (without
/// consuming) the argument's closing `}`. Nested `{...}` increase a local
/// depth counter; `'...'` is a quoted literal (doubling escapes a literal
/// apostrophe, same as in message text).
fn parse_simple_style(store: &mut PartStore, start: usize) -> Result<usize, ParseError> {
    let mut pos = start;
    let mut depth: i32 = 0;
    loop {
        if pos - start > store.limits().max_length {
            return err(
                store,
                ParseErrorKind::TooLarge("Argument style too long".to_string()),
                start,
            );
        }
        match store.chars().at(pos) {
            None => return err(store, ParseErrorKind::UnmatchedBrace, pos),
            Some('\'') => {
                pos += 1;
                loop {
                    match store.chars().at(pos) {
                        None => return err(store, ParseErrorKind::UnterminatedQuotedLiteral, pos),
                        Some('\'') => {
                            pos += 1;
                            break;
                        }
                        Some(_) => pos += 1,
                    }
                }
            }
            Some('{') => {
                depth += 1;
                pos += 1;
            }
            Some('}') => {
                if depth == 0 {
                    return Ok(pos);
                }
                depth -= 1;
                pos += 1;
            }
            Some(_) => pos += 1,
        }
    }
}

/// Parse a CHOICE style body: `number SEP subMessage (| number SEP
/// subMessage)*`. Returns the position just past the outermost closing `}`
/// (CHOICE has no dedicated per-branch brace, so that `}` is consumed here,
/// unlike plural/select).
fn parse_choice_style(store: &mut PartStore, mut pos: usize, nesting: usize) -> Result<usize, ParseError> {
    loop {
        pos = skip_whitespace(store.chars(), pos);
        if matches!(store.chars().at(pos), None | Some('}')) {
            return err(store, ParseErrorKind::UnmatchedBrace, pos);
        }
        let number_start = pos;
        let (lit, new_pos) = scan_signed_numeric(store.chars(), pos, true)
            .map_err(|kind| ParseError::new(kind, pos, store.chars()))?;
        if new_pos - number_start > store.limits().max_length {
            return err(
                store,
                ParseErrorKind::TooLarge("Choice number too long".to_string()),
                number_start,
            );
        }
        push_numeric_literal(store, lit, number_start, new_pos - number_start, number_start)?;
        pos = new_pos;
        pos = skip_whitespace(store.chars(), pos);

        match store.chars().at(pos) {
            Some(c) if c == '#' || c == '<' || c == '\u{2264}' => {
                store.push(Part::new(PartType::ArgSelector, pos, 1, 0))?;
                pos += 1;
            }
            _ => {
                return err(
                    store,
                    ParseErrorKind::BadChoiceSyntax(
                        "Expected choice separator (#<\u{2264}) after choice number".to_string(),
                    ),
                    pos,
                )
            }
        }

        enter_nesting(store, nesting + 1, pos)?;
        pos = parse_message(store, pos, nesting + 1, ArgType::Choice)?;
        match store.chars().at(pos.saturating_sub(1)) {
            Some('|') => {
                pos = skip_whitespace(store.chars(), pos);
                continue;
            }
            Some('}') => return Ok(pos),
            _ => return err(store, ParseErrorKind::BadChoiceSyntax("Malformed choice branch".to_string()), pos),
        }
    }
}

/// Parse a PLURAL/SELECT/SELECTORDINAL style body. Returns the position of
/// the (still unconsumed) outer closing `}`.
fn parse_plural_or_select_style(
    store: &mut PartStore,
    mut pos: usize,
    nesting: usize,
    arg_type: ArgType,
) -> Result<usize, ParseError> {
    let offset_allowed = matches!(arg_type, ArgType::Plural | ArgType::SelectOrdinal);
    let mut seen_selector = false;
    let mut seen_other = false;

    loop {
        pos = skip_whitespace(store.chars(), pos);

        if offset_allowed && !seen_selector && store.chars().slice(pos, pos + 7) == "offset:" {
            let offset_start = pos;
            pos += 7;
            match scan_signed_numeric(store.chars(), pos, false) {
                Ok((lit, new_pos)) => {
                    push_numeric_literal(store, lit, pos, new_pos - pos, pos)?;
                    pos = new_pos;
                }
                Err(_) => {
                    return err(
                        store,
                        ParseErrorKind::BadPluralSyntax("Missing value for plural 'offset:'".to_string()),
                        offset_start,
                    )
                }
            }
            pos = skip_whitespace(store.chars(), pos);
        } else if offset_allowed && seen_selector && store.chars().slice(pos, pos + 7) == "offset:" {
            return err(store, ParseErrorKind::OffsetNotFirst, pos);
        }

        match store.chars().at(pos) {
            None => return err(store, ParseErrorKind::UnmatchedBrace, pos),
            Some('=') if matches!(arg_type, ArgType::Plural | ArgType::SelectOrdinal) => {
                let selector_start = pos;
                let num_pos = pos + 1;
                let (lit, new_pos) = scan_signed_numeric(store.chars(), num_pos, false)
                    .map_err(|kind| ParseError::new(kind, num_pos, store.chars()))?;
                push_numeric_literal(store, lit, num_pos, new_pos - num_pos, num_pos)?;
                let sel_len = new_pos - selector_start;
                if sel_len > store.limits().max_length {
                    return err(
                        store,
                        ParseErrorKind::TooLarge("Argument selector too long".to_string()),
                        selector_start,
                    );
                }
                store.push(Part::new(PartType::ArgSelector, selector_start, sel_len, 0))?;
                pos = new_pos;
            }
            _ => {
                let ident_start = pos;
                let ident_end = skip_identifier(store.chars(), pos);
                if ident_end == ident_start {
                    let kind = if arg_type == ArgType::Select {
                        ParseErrorKind::BadSelectSyntax("Expected selector keyword".to_string())
                    } else {
                        ParseErrorKind::BadPluralSyntax("Expected selector keyword".to_string())
                    };
                    return err(store, kind, pos);
                }
                let len = ident_end - ident_start;
                if len > store.limits().max_length {
                    return err(
                        store,
                        ParseErrorKind::TooLarge("Argument selector too long".to_string()),
                        ident_start,
                    );
                }
                if store.chars().slice(ident_start, ident_end) == "other" {
                    seen_other = true;
                }
                store.push(Part::new(PartType::ArgSelector, ident_start, len, 0))?;
                pos = ident_end;
            }
        }
        seen_selector = true;

        pos = skip_whitespace(store.chars(), pos);
        if store.chars().at(pos) != Some('{') {
            let kind = if arg_type == ArgType::Select {
                ParseErrorKind::BadSelectSyntax("No message fragment after select selector".to_string())
            } else {
                ParseErrorKind::BadPluralSyntax("No message fragment after plural selector".to_string())
            };
            return err(store, kind, pos);
        }
        enter_nesting(store, nesting + 1, pos)?;
        pos = parse_message(store, pos + 1, nesting + 1, arg_type)?;

        if store.chars().at(pos) == Some('}') {
            if !seen_other {
                return err(store, ParseErrorKind::MissingOtherKeyword, pos);
            }
            return Ok(pos);
        }
    }
}

/// Parse `pattern` from scratch into a fresh [`PartStore`].
pub fn parse(store: &mut PartStore) -> Result<(), ParseError> {
    parse_message(store, 0, 0, ArgType::None)?;
    Ok(())
}
