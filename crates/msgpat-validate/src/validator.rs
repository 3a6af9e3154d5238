//! CLDR selector compliance checking for plural/selectordinal arguments.

use std::collections::BTreeSet;

use msgpat_plurals::{cardinal_categories, is_valid_category, ordinal_categories};
use msgpat_token::{ArgType, PartStore, PartType};

use crate::argument_name;
use crate::error::PluralComplianceError;

/// The compliance issues found for a single plural/selectordinal argument.
///
/// Produced only when the argument's selectors are all well-formed (a
/// malformed selector raises [`PluralComplianceError`] instead) but still
/// suspicious: categories borrowed from the wrong locale, or a numeric
/// override masking a missing required category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentWarning {
    /// The argument's name (or stringified index for a numbered argument).
    pub argument_name: String,
    /// Categories this locale's plural rules require but the argument never
    /// declares (excluding `other`, which is always implicitly covered).
    pub missing: Vec<String>,
    /// Selectors that are valid CLDR categories but not expected for this
    /// locale (e.g. `few` in an `en` plural).
    pub wrong_locale: Vec<String>,
    /// Selectors using the numeric `=N` form.
    pub numeric: Vec<String>,
}

/// All per-argument compliance warnings found across one pattern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplianceWarning {
    /// One entry per flagged plural/selectordinal argument.
    pub arguments: Vec<ArgumentWarning>,
}

/// Checks that plural/selectordinal selectors in a parsed pattern match the
/// CLDR plural rules for a given locale.
///
/// Never mutates the [`PartStore`] it inspects.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    /// Construct a validator. Stateless; this is a convenience constructor
    /// matching the other crates' factory style.
    pub fn new() -> Self {
        Validator
    }

    /// Validate every `plural`/`selectordinal` argument in `store` against
    /// `locale`'s CLDR plural rules.
    ///
    /// Returns `Ok(None)` if every argument is fully compliant, `Ok(Some(_))`
    /// with the aggregated warnings if any argument is merely suspicious,
    /// or `Err` if any argument uses a selector that is neither numeric nor
    /// a recognized CLDR category.
    pub fn validate(
        &self,
        store: &PartStore,
        locale: &str,
    ) -> Result<Option<ComplianceWarning>, PluralComplianceError> {
        let mut warnings = Vec::new();

        for (start_idx, part) in store.iter_indexed() {
            if part.part_type != PartType::ArgStart {
                continue;
            }
            if !matches!(part.arg_type, ArgType::Plural | ArgType::SelectOrdinal) {
                continue;
            }

            let limit_idx = store.limit_part_index(start_idx);
            let name = argument_name(store, start_idx);
            let selector_indices = own_selectors(store, start_idx, limit_idx);

            let expected: BTreeSet<String> = if part.arg_type == ArgType::Plural {
                cardinal_categories(locale).into_iter().map(str::to_string).collect()
            } else {
                ordinal_categories(locale).into_iter().map(str::to_string).collect()
            };

            let found: BTreeSet<String> =
                selector_indices.iter().map(|&i| store.substring(store.part(i))).collect();
            let numeric: BTreeSet<String> =
                found.iter().filter(|s| s.starts_with('=')).cloned().collect();
            let invalid: BTreeSet<String> = found
                .iter()
                .filter(|s| !numeric.contains(s.as_str()) && !is_valid_category(s))
                .cloned()
                .collect();

            if !invalid.is_empty() {
                return Err(PluralComplianceError {
                    locale: locale.to_string(),
                    expected: expected.into_iter().collect(),
                    found: found.into_iter().collect(),
                    invalid: invalid.into_iter().collect(),
                });
            }

            // "other" is always ICU's implicit fallback: never missing, never
            // flagged as borrowed from the wrong locale.
            let missing: Vec<String> = expected
                .iter()
                .filter(|c| c.as_str() != "other" && !found.contains(c.as_str()))
                .cloned()
                .collect();
            let wrong_locale: Vec<String> = found
                .iter()
                .filter(|s| is_valid_category(s) && s.as_str() != "other" && !expected.contains(s.as_str()))
                .cloned()
                .collect();
            let numeric_vec: Vec<String> = numeric.into_iter().collect();

            if !wrong_locale.is_empty() || !missing.is_empty() {
                warnings.push(ArgumentWarning {
                    argument_name: name,
                    missing,
                    wrong_locale,
                    numeric: numeric_vec,
                });
            }
        }

        if warnings.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ComplianceWarning { arguments: warnings }))
        }
    }
}

/// Selector parts directly owned by the argument at `start_idx`, skipping
/// over any nested argument's own selectors entirely.
fn own_selectors(store: &PartStore, start_idx: usize, limit_idx: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut i = start_idx + 1;
    while i < limit_idx {
        match store.part_type(i) {
            PartType::ArgStart => {
                i = store.limit_part_index(i) + 1;
                continue;
            }
            PartType::ArgSelector => out.push(i),
            _ => {}
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgpat_parser::parse;
    use msgpat_token::ApostropheMode;

    #[test]
    fn english_plural_with_one_other_is_compliant() {
        let store = parse("{n, plural, one{# item} other{# items}}", ApostropheMode::DoubleOptional).unwrap();
        assert_eq!(Validator::new().validate(&store, "en").unwrap(), None);
    }

    #[test]
    fn borrowed_category_is_flagged_as_wrong_locale() {
        let store =
            parse("{n, plural, few{a} one{b} other{c}}", ApostropheMode::DoubleOptional).unwrap();
        let warning = Validator::new().validate(&store, "en").unwrap().unwrap();
        assert_eq!(warning.arguments.len(), 1);
        assert_eq!(warning.arguments[0].wrong_locale, vec!["few".to_string()]);
    }

    #[test]
    fn invalid_selector_raises_compliance_error() {
        let store =
            parse("{n, plural, bogus{a} other{b}}", ApostropheMode::DoubleOptional).unwrap();
        let err = Validator::new().validate(&store, "en").unwrap_err();
        assert_eq!(err.invalid, vec!["bogus".to_string()]);
    }

    #[test]
    fn numeric_selector_never_satisfies_required_category() {
        let store = parse("{n, plural, =1{a} other{b}}", ApostropheMode::DoubleOptional).unwrap();
        let warning = Validator::new().validate(&store, "en").unwrap().unwrap();
        assert_eq!(warning.arguments[0].missing, vec!["one".to_string()]);
        assert_eq!(warning.arguments[0].numeric, vec!["=1".to_string()]);
    }

    #[test]
    fn nested_complex_argument_selectors_are_not_double_counted() {
        let store = parse(
            "{n, plural, one{{k, select, x{a} other{b}}} other{c}}",
            ApostropheMode::DoubleOptional,
        )
        .unwrap();
        assert_eq!(Validator::new().validate(&store, "en").unwrap(), None);
    }
}
