//! Static CLDR plural-rules table.
//!
//! Maps `(locale, integer)` to a cardinal/ordinal category name and
//! enumerates the category set a locale requires. Only integer selection is
//! implemented; fractional-operand (`v`/`f`/`t`/`w`) extensions are left to
//! callers that need them.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

mod cardinal;
mod category;
mod locale;
mod ordinal;

pub use category::{is_valid_category, PluralCategory};

use cardinal::{cardinal_form_index, CARDINAL_CATEGORIES};
use locale::lookup;
use ordinal::{ordinal_form_index, ORDINAL_CATEGORIES};

/// The cardinal category `n` resolves to for `locale`.
pub fn cardinal_category_name(locale: &str, n: i64) -> &'static str {
    let (group, _) = lookup(locale);
    let idx = cardinal_form_index(group, n);
    CARDINAL_CATEGORIES[group][idx].name()
}

/// The zero-based index into [`cardinal_categories`] that `n` resolves to
/// for `locale`. Exposed separately from [`cardinal_category_name`] for
/// callers that already hold a `cardinal_categories(locale)` slice and want
/// to avoid a second lookup.
pub fn cardinal_form_index_for(locale: &str, n: i64) -> usize {
    let (group, _) = lookup(locale);
    cardinal_form_index(group, n)
}

/// The ordinal category `n` resolves to for `locale`.
pub fn ordinal_category_name(locale: &str, n: i64) -> &'static str {
    let (_, group) = lookup(locale);
    let idx = ordinal_form_index(group, n);
    ORDINAL_CATEGORIES[group][idx].name()
}

/// The full ordered set of cardinal categories `locale` distinguishes,
/// always ending with `"other"`.
pub fn cardinal_categories(locale: &str) -> Vec<&'static str> {
    let (group, _) = lookup(locale);
    CARDINAL_CATEGORIES[group].iter().map(|c| c.name()).collect()
}

/// The full ordered set of ordinal categories `locale` distinguishes,
/// always ending with `"other"`.
pub fn ordinal_categories(locale: &str) -> Vec<&'static str> {
    let (_, group) = lookup(locale);
    ORDINAL_CATEGORIES[group].iter().map(|c| c.name()).collect()
}

/// Number of distinct cardinal categories `locale` distinguishes (always
/// `>= 1`, since `other` is never omitted).
pub fn plural_count(locale: &str) -> usize {
    let (group, _) = lookup(locale);
    CARDINAL_CATEGORIES[group].len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_distinguishes_one_and_other() {
        assert_eq!(cardinal_category_name("en", 1), "one");
        assert_eq!(cardinal_category_name("en", 2), "other");
        assert_eq!(cardinal_categories("en"), vec!["one", "other"]);
        assert_eq!(plural_count("en"), 2);
    }

    #[test]
    fn russian_distinguishes_one_few_many_other() {
        assert_eq!(cardinal_category_name("ru", 1), "one");
        assert_eq!(cardinal_category_name("ru", 2), "few");
        assert_eq!(cardinal_category_name("ru", 5), "many");
        assert_eq!(cardinal_category_name("ru", 11), "many");
        assert_eq!(cardinal_categories("ru"), vec!["one", "few", "many", "other"]);
    }

    #[test]
    fn arabic_uses_all_six_categories() {
        assert_eq!(
            cardinal_categories("ar"),
            vec!["zero", "one", "two", "few", "many", "other"]
        );
    }

    #[test]
    fn chinese_has_no_cardinal_distinctions() {
        assert_eq!(cardinal_categories("zh"), vec!["other"]);
        assert_eq!(plural_count("zh"), 1);
        assert_eq!(cardinal_category_name("zh", 1), "other");
    }

    #[test]
    fn english_ordinal_distinguishes_one_two_few_other() {
        assert_eq!(ordinal_category_name("en", 1), "one");
        assert_eq!(ordinal_category_name("en", 2), "two");
        assert_eq!(ordinal_category_name("en", 3), "few");
        assert_eq!(ordinal_category_name("en", 4), "other");
        assert_eq!(ordinal_categories("en"), vec!["one", "two", "few", "other"]);
    }

    #[test]
    fn is_valid_category_matches_the_six_keywords() {
        assert!(is_valid_category("few"));
        assert!(!is_valid_category("some"));
    }
}
