//! ICU MessageFormat pattern parser, CLDR plural rules, and complex-argument
//! validation, bundled as a single dependency.
//!
//! ```
//! use msgpat::{parse, ApostropheMode};
//!
//! let store = parse("{count, plural, one{# item} other{# items}}", ApostropheMode::DoubleOptional)?;
//! assert!(store.count() > 0);
//! # Ok::<(), msgpat::ParseError>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub use msgpat_char::{error_context, is_pattern_syntax, is_pattern_white_space, PatternChars};
pub use msgpat_error::{ErrorKind, LimitTracker, ParseError, ParseErrorKind, ParseLimits};
pub use msgpat_parser::{
    append_reduced_apostrophes, auto_quote_apostrophe_deep, parse, parse_choice_style,
    parse_plural_style, parse_select_style, parse_with_limits, NumericLiteral,
};
pub use msgpat_plurals::{
    cardinal_categories, cardinal_category_name, cardinal_form_index_for, is_valid_category,
    ordinal_categories, ordinal_category_name, plural_count, PluralCategory,
};
pub use msgpat_token::{ApostropheMode, ArgType, Part, PartStore, PartType, NO_NUMERIC_VALUE};
pub use msgpat_validate::{
    ArgumentWarning, CompareOptions, Comparator, ComparatorError, ComplianceWarning,
    MissingComplexFormError, PluralComplianceError, Validator,
};
