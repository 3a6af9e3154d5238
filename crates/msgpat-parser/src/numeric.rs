//! The signed numeric literal scanner shared by `offset:`, explicit `=N`
//! plural/selectordinal selectors, and CHOICE selectors.

use msgpat_char::PatternChars;
use msgpat_error::ParseErrorKind;

/// The result of scanning a signed numeric literal: either it fit in a
/// bounded integer, or it overflowed / carried a fractional or exponent
/// part and was parsed as a 64-bit float instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericLiteral {
    /// Fits the bounded integer representation used by `ARG_INT`.
    Int(i32),
    /// Overflowed the bounded integer, or had a `.`/`e`/`E` in its span, or
    /// was signed infinity; stored as `ARG_DOUBLE`.
    Double(f64),
}

/// Scan a signed numeric literal starting at `start`.
///
/// Consumes an optional `+`/`-`, then either the `∞` code point (only if
/// `allow_infinity`) or an ASCII-digit run. Returns the literal and the
/// scalar-value position immediately past it.
///
/// An empty digit run (a bare sign, or nothing at all, with no `∞`) is
/// [`ParseErrorKind::InvalidNumericValue`].
pub fn scan_signed_numeric(
    chars: &PatternChars,
    start: usize,
    allow_infinity: bool,
) -> Result<(NumericLiteral, usize), ParseErrorKind> {
    let mut pos = start;
    let negative = match chars.at(pos) {
        Some('+') => {
            pos += 1;
            false
        }
        Some('-') => {
            pos += 1;
            true
        }
        _ => false,
    };

    if allow_infinity && chars.at(pos) == Some('\u{221E}') {
        pos += 1;
        let value = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
        return Ok((NumericLiteral::Double(value), pos));
    }

    let digits_start = pos;
    while matches!(chars.at(pos), Some(c) if c.is_ascii_digit()) {
        pos += 1;
    }
    if pos == digits_start {
        return Err(ParseErrorKind::InvalidNumericValue(
            chars.slice(start, pos.max(start + 1)),
        ));
    }

    let mut limit = pos;
    let mut is_float = false;
    if chars.at(limit) == Some('.') {
        is_float = true;
        limit += 1;
        while matches!(chars.at(limit), Some(c) if c.is_ascii_digit()) {
            limit += 1;
        }
    }
    if matches!(chars.at(limit), Some('e') | Some('E')) {
        is_float = true;
        let mut exp = limit + 1;
        if matches!(chars.at(exp), Some('+') | Some('-')) {
            exp += 1;
        }
        let exp_digits_start = exp;
        while matches!(chars.at(exp), Some(c) if c.is_ascii_digit()) {
            exp += 1;
        }
        if exp > exp_digits_start {
            limit = exp;
        } else {
            is_float = false; // bare trailing 'e' with no exponent digits: not consumed
        }
    }

    let full_span = chars.slice(start, limit);
    if is_float {
        match full_span.parse::<f64>() {
            Ok(v) => Ok((NumericLiteral::Double(v), limit)),
            Err(_) => Err(ParseErrorKind::InvalidNumericValue(full_span)),
        }
    } else {
        let digit_span = chars.slice(digits_start, pos);
        match digit_span.parse::<i64>() {
            Ok(v) => {
                let signed = if negative { -v } else { v };
                if let Ok(as_i32) = i32::try_from(signed) {
                    Ok((NumericLiteral::Int(as_i32), pos))
                } else {
                    full_span
                        .parse::<f64>()
                        .map(|v| (NumericLiteral::Double(v), pos))
                        .map_err(|_| ParseErrorKind::InvalidNumericValue(full_span))
                }
            }
            Err(_) => full_span
                .parse::<f64>()
                .map(|v| (NumericLiteral::Double(v), pos))
                .map_err(|_| ParseErrorKind::InvalidNumericValue(full_span)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer() {
        let chars = PatternChars::new("42");
        let (lit, end) = scan_signed_numeric(&chars, 0, false).unwrap();
        assert_eq!(lit, NumericLiteral::Int(42));
        assert_eq!(end, 2);
    }

    #[test]
    fn parses_signed_integer() {
        let chars = PatternChars::new("-7x");
        let (lit, end) = scan_signed_numeric(&chars, 0, false).unwrap();
        assert_eq!(lit, NumericLiteral::Int(-7));
        assert_eq!(end, 2);
    }

    #[test]
    fn parses_infinity_when_allowed() {
        let chars = PatternChars::new("+\u{221E}");
        let (lit, end) = scan_signed_numeric(&chars, 0, true).unwrap();
        assert_eq!(lit, NumericLiteral::Double(f64::INFINITY));
        assert_eq!(end, 2);
    }

    #[test]
    fn falls_back_to_double_on_fraction() {
        let chars = PatternChars::new("3.5}");
        let (lit, end) = scan_signed_numeric(&chars, 0, false).unwrap();
        assert_eq!(lit, NumericLiteral::Double(3.5));
        assert_eq!(end, 3);
    }

    #[test]
    fn falls_back_to_double_on_overflow() {
        let chars = PatternChars::new("99999999999999999999");
        let (lit, _end) = scan_signed_numeric(&chars, 0, false).unwrap();
        assert!(matches!(lit, NumericLiteral::Double(_)));
    }

    #[test]
    fn bare_sign_is_invalid() {
        let chars = PatternChars::new("-");
        assert!(scan_signed_numeric(&chars, 0, false).is_err());
    }
}
