//! Source/target complex-argument skeleton comparison.

use std::collections::BTreeMap;

use msgpat_token::{ArgType, PartStore, PartType};

use crate::argument_name;
use crate::error::{ComparatorError, MissingComplexFormError};
use crate::validator::{ComplianceWarning, Validator};

/// Controls the optional CLDR-compliance pass [`Comparator::compare`] can
/// run on each side in addition to its structural check.
///
/// A `Some(locale)` runs [`Validator::validate`] against that locale for the
/// corresponding side; `None` skips it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Locale to validate the source pattern against, if any.
    pub validate_source: Option<String>,
    /// Locale to validate the target pattern against, if any.
    pub validate_target: Option<String>,
}

/// The outcome of a successful [`Comparator::compare`] call: the optional
/// compliance warnings from each side's opted-in validation pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonResult {
    /// Source-side warnings, present only if `validate_source` was set and
    /// the source had any.
    pub source_warnings: Option<ComplianceWarning>,
    /// Target-side warnings, present only if `validate_target` was set and
    /// the target had any.
    pub target_warnings: Option<ComplianceWarning>,
}

/// Compares a source and target pattern's complex-argument skeletons.
///
/// A complex argument is any `plural`/`select`/`selectordinal`/`choice`
/// `{name, ...}`. The target may declare extra complex forms the source
/// lacks; it may not omit one the source has, or change its type.
#[derive(Debug, Default, Clone, Copy)]
pub struct Comparator;

impl Comparator {
    /// Construct a comparator. Stateless; a convenience factory matching
    /// [`Validator::new`].
    pub fn new() -> Self {
        Comparator
    }

    /// Compare `source` against `target`'s complex-argument skeleton, and
    /// optionally run CLDR compliance checks per `opts`.
    pub fn compare(
        &self,
        source: &PartStore,
        target: &PartStore,
        opts: &CompareOptions,
    ) -> Result<ComparisonResult, ComparatorError> {
        let source_map = complex_argument_map(source);
        let target_map = complex_argument_map(target);

        for (name, source_type) in &source_map {
            match target_map.get(name) {
                None => {
                    return Err(MissingComplexFormError {
                        name: name.clone(),
                        source_type: *source_type,
                        target_type: None,
                    }
                    .into())
                }
                Some(target_type) if target_type != source_type => {
                    return Err(MissingComplexFormError {
                        name: name.clone(),
                        source_type: *source_type,
                        target_type: Some(*target_type),
                    }
                    .into())
                }
                _ => {}
            }
        }

        let validator = Validator::new();
        let source_warnings = match &opts.validate_source {
            Some(locale) => validator.validate(source, locale)?,
            None => None,
        };
        let target_warnings = match &opts.validate_target {
            Some(locale) => validator.validate(target, locale)?,
            None => None,
        };

        Ok(ComparisonResult { source_warnings, target_warnings })
    }
}

/// `argumentName -> argType` restricted to complex types, for every
/// `ArgStart` in `store` regardless of nesting depth.
fn complex_argument_map(store: &PartStore) -> BTreeMap<String, ArgType> {
    let mut map = BTreeMap::new();
    for (idx, part) in store.iter_indexed() {
        if part.part_type != PartType::ArgStart {
            continue;
        }
        if !matches!(
            part.arg_type,
            ArgType::Plural | ArgType::Select | ArgType::Choice | ArgType::SelectOrdinal
        ) {
            continue;
        }
        map.insert(argument_name(store, idx), part.arg_type);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgpat_parser::parse;
    use msgpat_token::ApostropheMode;

    fn store(pattern: &str) -> PartStore {
        parse(pattern, ApostropheMode::DoubleOptional).unwrap()
    }

    #[test]
    fn identical_skeletons_compare_clean() {
        let source = store("{n, plural, one{a} other{b}}");
        let target = store("{n, plural, one{c} other{d}}");
        let result = Comparator::new().compare(&source, &target, &CompareOptions::default()).unwrap();
        assert_eq!(result, ComparisonResult::default());
    }

    #[test]
    fn missing_form_in_target_is_an_error() {
        let source = store("{n, plural, one{a} other{b}}");
        let target = store("plain text, no plural here");
        let err = Comparator::new().compare(&source, &target, &CompareOptions::default()).unwrap_err();
        assert!(matches!(err, ComparatorError::MissingComplexForm(_)));
    }

    #[test]
    fn type_change_between_plural_and_selectordinal_is_an_error() {
        let source = store("{n, plural, one{a} other{b}}");
        let target = store("{n, selectordinal, one{a} other{b}}");
        let err = Comparator::new().compare(&source, &target, &CompareOptions::default()).unwrap_err();
        assert!(matches!(err, ComparatorError::MissingComplexForm(_)));
    }

    #[test]
    fn extra_complex_forms_in_target_are_allowed() {
        let source = store("plain text");
        let target = store("{n, plural, one{a} other{b}}");
        let result = Comparator::new().compare(&source, &target, &CompareOptions::default()).unwrap();
        assert_eq!(result, ComparisonResult::default());
    }

    #[test]
    fn opted_in_validation_surfaces_source_warnings() {
        let source = store("{n, plural, few{a} other{b}}");
        let target = store("{n, plural, few{a} other{b}}");
        let opts = CompareOptions {
            validate_source: Some("en".to_string()),
            validate_target: None,
        };
        let result = Comparator::new().compare(&source, &target, &opts).unwrap();
        assert!(result.source_warnings.is_some());
        assert!(result.target_warnings.is_none());
    }
}
