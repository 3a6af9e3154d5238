//! Ordinal-category predicate groups.
//!
//! CLDR's ordinal rule set has far fewer *distinct* predicate shapes than it
//! has locales: most languages that distinguish ordinal forms at all share
//! one of a handful of shapes, and a large majority of CLDR locales draw no
//! ordinal distinction whatsoever (group 0, `other` only). The relation
//! style here (`n`, `n % 10`, `n % 100` comparisons) follows the
//! operand/modulus modeling in `cldr_pluralrules_parser`'s `Expression`/
//! `Modulo` AST; unlike that crate this table is a fixed, pre-evaluated set
//! of closed-form predicates rather than a parsed-at-runtime rule string.

use crate::category::PluralCategory as C;

/// Per-group ordered category lists for ordinal selection.
pub static ORDINAL_CATEGORIES: [&[C]; 20] = [
    &[C::Other],                                            // 0: no ordinal distinctions
    &[C::One, C::Two, C::Few, C::Other],                     // 1: English
    &[C::One, C::Other],                                     // 2: Swedish
    &[C::Zero, C::One, C::Two, C::Few, C::Many, C::Other],   // 3: Welsh
    &[C::Many, C::Other],                                    // 4: Italian
    &[C::One, C::Many, C::Other],                            // 5: Georgian
    &[C::One, C::Few, C::Many, C::Other],                    // 6: Azerbaijani
    &[C::One, C::Two, C::Many, C::Other],                    // 7: Catalan
    &[C::One, C::Other],                                     // 8: Filipino/Tagalog
    &[C::Few, C::Other],                                     // 9: Ukrainian
    &[C::Few, C::Other],                                     // 10: Belarusian
    &[C::One, C::Other],                                     // 11: Armenian
    &[C::One, C::Other],                                     // 12: French
    &[C::One, C::Two, C::Many, C::Other],                    // 13: Macedonian
    &[C::One, C::Other],                                     // 14: Albanian
    &[C::One, C::Two, C::Few, C::Other],                     // 15: Assamese/Bengali
    &[C::One, C::Two, C::Few, C::Many, C::Other],            // 16: Hindi/Nepali
    &[C::One, C::Two, C::Other],                             // 17: Marathi
    &[C::One, C::Two, C::Many, C::Other],                    // 18: Gujarati
    &[C::Many, C::Other],                                    // 19: Kazakh
];

fn rem(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}

/// Apply ordinal group `group_id`'s predicate to `n`, returning the form
/// index into `ORDINAL_CATEGORIES[group_id]`.
///
/// # Panics
/// Panics if `group_id >= 20`; that indicates a corrupt locale table entry.
#[allow(clippy::panic)] // internal invariant: locale.rs group ids are constructed in-range
pub fn ordinal_form_index(group_id: usize, n: i64) -> usize {
    let mod10 = rem(n, 10);
    let mod100 = rem(n, 100);
    match group_id {
        0 => 0,
        1 => {
            if mod10 == 1 && mod100 != 11 {
                0
            } else if mod10 == 2 && mod100 != 12 {
                1
            } else if mod10 == 3 && mod100 != 13 {
                2
            } else {
                3
            }
        }
        2 => usize::from(!(matches!(mod10, 1 | 2) && !matches!(mod100, 11 | 12))),
        3 => {
            if n == 0 || n == 7 || n == 8 || n == 9 {
                0
            } else if n == 1 {
                1
            } else if n == 2 {
                2
            } else if n == 3 || n == 4 {
                3
            } else if n == 5 || n == 6 {
                4
            } else {
                5
            }
        }
        4 => usize::from(!matches!(n, 8 | 11 | 80 | 800)),
        5 => {
            if n == 1 {
                0
            } else if n == 0 || (2..=20).contains(&mod100) || matches!(mod100, 40 | 60 | 80) {
                1
            } else {
                2
            }
        }
        6 => {
            if matches!(mod10, 1 | 2 | 5 | 7 | 8) || matches!(mod100, 20 | 50 | 70 | 80) {
                0
            } else if matches!(mod10, 3 | 4) || matches!(mod100, 100 | 200 | 300 | 400 | 500 | 600 | 700 | 800 | 900) {
                1
            } else if n == 0 || mod10 == 6 || matches!(mod100, 40 | 60 | 90) {
                2
            } else {
                3
            }
        }
        7 => {
            if matches!(n, 1 | 3) {
                0
            } else if n == 2 {
                1
            } else if n == 4 {
                2
            } else {
                3
            }
        }
        8 => usize::from(!matches!(mod10, 1 | 2 | 3)),
        9 => usize::from(!(mod10 == 3 && mod100 != 13)),
        10 => usize::from(!(matches!(mod10, 2 | 3) && !matches!(mod100, 12 | 13))),
        11 => usize::from(!(matches!(n, 1 | 2 | 3) || mod10 == 0)),
        12 => usize::from(!matches!(n, 0 | 1)),
        13 => {
            if mod10 == 1 && mod100 != 11 {
                0
            } else if mod10 == 2 && mod100 != 12 {
                1
            } else if matches!(mod10, 7 | 8) && !matches!(mod100, 17 | 18) {
                2
            } else {
                3
            }
        }
        14 => usize::from(!(mod10 == 4 && mod100 != 14)),
        15 => {
            if matches!(n, 1 | 5 | 7 | 8 | 9 | 10) {
                0
            } else if matches!(n, 2 | 3) {
                1
            } else if n == 4 {
                2
            } else {
                3
            }
        }
        16 => {
            if n == 1 {
                0
            } else if matches!(n, 2 | 3) {
                1
            } else if n == 4 {
                2
            } else if n == 6 {
                3
            } else {
                4
            }
        }
        17 => {
            if n == 1 {
                0
            } else if matches!(n, 2 | 3) {
                1
            } else {
                2
            }
        }
        18 => {
            if n == 1 {
                0
            } else if matches!(n, 2 | 3) {
                1
            } else if n == 6 {
                2
            } else {
                3
            }
        }
        19 => usize::from(!(matches!(mod10, 6 | 9) || (mod10 == 0 && n != 0))),
        _ => panic!("unknown ordinal group id {group_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_group_matches_familiar_ordinals() {
        assert_eq!(ordinal_form_index(1, 1), 0); // 1st
        assert_eq!(ordinal_form_index(1, 2), 1); // 2nd
        assert_eq!(ordinal_form_index(1, 3), 2); // 3rd
        assert_eq!(ordinal_form_index(1, 4), 3); // 4th
        assert_eq!(ordinal_form_index(1, 11), 3); // 11th, not "1st"
        assert_eq!(ordinal_form_index(1, 21), 0); // 21st
    }

    #[test]
    fn swedish_group_has_teen_exception() {
        assert_eq!(ordinal_form_index(2, 1), 0);
        assert_eq!(ordinal_form_index(2, 2), 0);
        assert_eq!(ordinal_form_index(2, 11), 1);
        assert_eq!(ordinal_form_index(2, 12), 1);
        assert_eq!(ordinal_form_index(2, 21), 0);
    }

    #[test]
    fn catalan_group_distinguishes_one_two_many() {
        assert_eq!(ordinal_form_index(7, 1), 0);
        assert_eq!(ordinal_form_index(7, 3), 0);
        assert_eq!(ordinal_form_index(7, 2), 1);
        assert_eq!(ordinal_form_index(7, 4), 2);
        assert_eq!(ordinal_form_index(7, 5), 3);
    }

    #[test]
    fn ukrainian_group_matches_few_with_teen_exception() {
        assert_eq!(ordinal_form_index(9, 3), 0);
        assert_eq!(ordinal_form_index(9, 13), 1);
        assert_eq!(ordinal_form_index(9, 23), 0);
    }

    #[test]
    fn every_group_category_list_ends_in_other() {
        for categories in ORDINAL_CATEGORIES {
            assert_eq!(*categories.last().unwrap(), C::Other);
        }
    }
}
