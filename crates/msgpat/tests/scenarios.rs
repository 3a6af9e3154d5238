//! End-to-end scenarios matching the worked examples used to validate this
//! workspace's parser, plural rules, and validator/comparator behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use msgpat::{
    parse, parse_choice_style, ApostropheMode, ArgType, CompareOptions, Comparator,
    ComparatorError, PartType, Validator,
};

fn store(pattern: &str) -> msgpat::PartStore {
    parse(pattern, ApostropheMode::DoubleOptional).unwrap()
}

#[test]
fn plain_text_has_msg_start_and_limit_only() {
    let store = store("Hi");
    assert_eq!(store.count(), 2);
    assert_eq!(store.part_type(0), PartType::MsgStart);
    assert_eq!(store.part_type(1), PartType::MsgLimit);
    assert_eq!(store.pattern_index(1), 2);
}

#[test]
fn named_argument_with_no_style() {
    let store = store("Hello, {name}!");
    let types: Vec<_> = store.iter().map(|p| p.part_type).collect();
    assert_eq!(
        types,
        vec![
            PartType::MsgStart,
            PartType::ArgStart,
            PartType::ArgName,
            PartType::ArgLimit,
            PartType::MsgLimit,
        ]
    );
    let arg_start = store.part(1);
    assert_eq!(arg_start.arg_type, ArgType::None);
    let name = store.part(2);
    assert_eq!(store.substring(name), "name");
    assert_eq!(name.index, 8);
}

#[test]
fn choice_style_fragment_has_three_branches() {
    let store = parse_choice_style("0#no|1#one|2#two").unwrap();
    let ints: Vec<_> = store.iter().filter(|p| p.part_type == PartType::ArgInt).collect();
    let selectors: Vec<_> = store.iter().filter(|p| p.part_type == PartType::ArgSelector).collect();
    assert_eq!(ints.len(), 3);
    assert_eq!(selectors.len(), 3);
    assert_eq!(store.numeric_value(ints[0]), 0.0);
}

#[test]
fn english_plural_is_fully_compliant() {
    let pattern = store("{count, plural, one{# item} other{# items}}");
    assert_eq!(Validator::new().validate(&pattern, "en").unwrap(), None);
}

#[test]
fn russian_plural_is_missing_few_and_many() {
    let pattern = store("{count, plural, one{# item} other{# items}}");
    let warning = Validator::new().validate(&pattern, "ru").unwrap().unwrap();
    let missing = &warning.arguments[0].missing;
    assert!(missing.contains(&"few".to_string()));
    assert!(missing.contains(&"many".to_string()));
}

#[test]
fn invalid_selector_raises_plural_compliance_error() {
    let pattern = store("{count, plural, some{# items} other{# items}}");
    let err = Validator::new().validate(&pattern, "en").unwrap_err();
    assert_eq!(err.invalid, vec!["some".to_string()]);
}

#[test]
fn comparator_flags_missing_plural_in_target() {
    let source = store("{count, plural, one{# item} other{# items}}");
    let target = store("Les articles {count}");
    let err =
        Comparator::new().compare(&source, &target, &CompareOptions::default()).unwrap_err();
    match err {
        ComparatorError::MissingComplexForm(e) => {
            assert_eq!(e.name, "count");
            assert_eq!(e.source_type, ArgType::Plural);
            assert_eq!(e.target_type, None);
        }
        other => panic!("expected MissingComplexForm, got {other:?}"),
    }
}

#[test]
fn unmatched_opening_brace_is_invalid_argument() {
    let err = parse("Hi {name", ApostropheMode::DoubleOptional).unwrap_err();
    assert_eq!(err.error_kind(), msgpat::ErrorKind::InvalidArgument);
}
