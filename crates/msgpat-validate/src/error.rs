//! Error types raised by [`crate::Validator`] and [`crate::Comparator`].

use msgpat_token::ArgType;
use thiserror::Error;

/// A plural/selectordinal argument used a selector that is neither a valid
/// CLDR category for the checked locale's plural rules nor a numeric `=N`
/// form.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "locale '{locale}': selector(s) {invalid:?} are not valid CLDR plural categories \
     (expected one of {expected:?}, found {found:?})"
)]
pub struct PluralComplianceError {
    /// The locale the argument was validated against.
    pub locale: String,
    /// The categories this locale's plural rules require.
    pub expected: Vec<String>,
    /// Every selector substring the argument actually declared.
    pub found: Vec<String>,
    /// The subset of `found` that is neither numeric nor a valid category.
    pub invalid: Vec<String>,
}

/// A source complex argument (`plural`/`select`/`selectordinal`/`choice`)
/// has no matching form in the target, or the target's form uses a
/// different complex type.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("argument '{name}': source is {source_type:?}, target is {target_type:?}")]
pub struct MissingComplexFormError {
    /// The argument name shared by source and (expected) target.
    pub name: String,
    /// The complex type the source argument uses.
    pub source_type: ArgType,
    /// The target's type for the same name, or `None` if absent entirely.
    pub target_type: Option<ArgType>,
}

/// Either failure [`crate::Comparator::compare`] can raise: a plural
/// compliance failure from an opted-in `validate_source`/`validate_target`
/// pass, or a structural mismatch between the source and target skeletons.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparatorError {
    /// See [`MissingComplexFormError`].
    #[error(transparent)]
    MissingComplexForm(#[from] MissingComplexFormError),
    /// See [`PluralComplianceError`].
    #[error(transparent)]
    PluralCompliance(#[from] PluralComplianceError),
}
