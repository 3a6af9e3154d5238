//! The 21 cardinal-category predicate groups.
//!
//! Each group is a pure function of a signed integer `n` returning a *form
//! index* into that group's [`CARDINAL_CATEGORIES`] entry. Every group ends
//! with `other` so `other` is always reachable regardless of `n`. Only
//! integer behavior is implemented; fractional-quantity (`v`/`f`/`t`/`w`
//! decomposition) extensions are out of scope.

use crate::category::PluralCategory as C;

/// Per-group ordered category lists, indexed by the group id a locale maps
/// to and the form index its predicate returns.
pub static CARDINAL_CATEGORIES: [&[C]; 21] = [
    &[C::Other],                                 // 0: no distinctions (CJK, Thai, ...)
    &[C::One, C::Other],                         // 1: Germanic
    &[C::One, C::Other],                         // 2: French/Portuguese-family
    &[C::One, C::Few, C::Many, C::Other],        // 3: East Slavic
    &[C::One, C::Few, C::Other],                 // 4: Czech/Slovak
    &[C::One, C::Two, C::Few, C::Many, C::Other], // 5: Irish
    &[C::One, C::Few, C::Other],                 // 6: Lithuanian
    &[C::One, C::Two, C::Few, C::Other],         // 7: Slovenian
    &[C::One, C::Other],                         // 8: Macedonian (CLDR 48)
    &[C::One, C::Few, C::Many, C::Other],        // 9: Maltese
    &[C::Zero, C::One, C::Other],                // 10: Latvian (CLDR 48)
    &[C::One, C::Few, C::Many, C::Other],        // 11: Polish
    &[C::One, C::Few, C::Other],                 // 12: Romanian
    &[C::Zero, C::One, C::Two, C::Few, C::Many, C::Other], // 13: Arabic
    &[C::Zero, C::One, C::Two, C::Few, C::Many, C::Other], // 14: Welsh (CLDR 48)
    &[C::One, C::Other],                         // 15: Icelandic
    &[C::One, C::Two, C::Few, C::Other],         // 16: Scottish Gaelic
    &[C::One, C::Two, C::Few, C::Many, C::Other], // 17: Breton
    &[C::One, C::Two, C::Few, C::Other],         // 18: Manx
    &[C::One, C::Two, C::Many, C::Other],        // 19: Hebrew
    &[C::One, C::Many, C::Other],                // 20: Italian-family (CLDR 49)
];

fn rem_euclid_i64(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}

/// Apply cardinal group `group_id`'s predicate to `n`, returning the form
/// index into `CARDINAL_CATEGORIES[group_id]`.
///
/// # Panics
/// Panics if `group_id >= 21`; that indicates a corrupt locale table entry.
#[allow(clippy::panic)] // internal invariant: locale.rs group ids are constructed in-range
pub fn cardinal_form_index(group_id: usize, n: i64) -> usize {
    let mod10 = rem_euclid_i64(n, 10);
    let mod100 = rem_euclid_i64(n, 100);
    match group_id {
        0 => 0,
        1 => usize::from(n != 1), // one, other
        2 => usize::from(!(n == 0 || n == 1)),
        3 => {
            if mod10 == 1 && mod100 != 11 {
                0
            } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                1
            } else if mod10 == 0 || (5..=9).contains(&mod10) || (11..=14).contains(&mod100) {
                2
            } else {
                3
            }
        }
        4 => {
            if n == 1 {
                0
            } else if (2..=4).contains(&n) {
                1
            } else {
                2
            }
        }
        5 => {
            if n == 1 {
                0
            } else if n == 2 {
                1
            } else if (3..=6).contains(&n) {
                2
            } else if (7..=10).contains(&n) {
                3
            } else {
                4
            }
        }
        6 => {
            if mod10 == 1 && !(11..=19).contains(&mod100) {
                0
            } else if (2..=9).contains(&mod10) && !(11..=19).contains(&mod100) {
                1
            } else {
                2
            }
        }
        7 => {
            if mod100 == 1 {
                0
            } else if mod100 == 2 {
                1
            } else if (3..=4).contains(&mod100) {
                2
            } else {
                3
            }
        }
        8 => usize::from(!(mod10 == 1 && n != 11)),
        9 => {
            if n == 1 {
                0
            } else if n == 0 || (2..=10).contains(&mod100) {
                1
            } else if (11..=19).contains(&mod100) {
                2
            } else {
                3
            }
        }
        10 => {
            if n == 0 {
                0
            } else if mod10 == 1 && mod100 != 11 {
                1
            } else {
                2
            }
        }
        11 => {
            if n == 1 {
                0
            } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                1
            } else if (n != 1 && (0..=1).contains(&mod10))
                || (5..=9).contains(&mod10)
                || (12..=14).contains(&mod100)
            {
                2
            } else {
                3
            }
        }
        12 => {
            if n == 1 {
                0
            } else if n == 0 || ((1..=19).contains(&mod100) && n != 1) {
                1
            } else {
                2
            }
        }
        13 => {
            if n == 0 {
                0
            } else if n == 1 {
                1
            } else if n == 2 {
                2
            } else if (3..=10).contains(&mod100) {
                3
            } else if (11..=99).contains(&mod100) {
                4
            } else {
                5
            }
        }
        14 => {
            if n == 0 {
                0
            } else if n == 1 {
                1
            } else if n == 2 {
                2
            } else if n == 3 {
                3
            } else if n == 6 {
                4
            } else {
                5
            }
        }
        15 => usize::from(!(mod10 == 1 && mod100 != 11)),
        16 => {
            if n == 1 || n == 11 {
                0
            } else if n == 2 || n == 12 {
                1
            } else if (3..=10).contains(&n) || (13..=19).contains(&n) {
                2
            } else {
                3
            }
        }
        17 => {
            if mod10 == 1 && !matches!(mod100, 11 | 71 | 91) {
                0
            } else if mod10 == 2 && !matches!(mod100, 12 | 72 | 92) {
                1
            } else if matches!(mod10, 3 | 4 | 9)
                && !((10..=19).contains(&mod100) || (70..=79).contains(&mod100) || (90..=99).contains(&mod100))
            {
                2
            } else if n != 0 && n % 1_000_000 == 0 {
                3
            } else {
                4
            }
        }
        18 => {
            if mod10 == 1 {
                0
            } else if mod10 == 2 {
                1
            } else if matches!(mod100, 0 | 20 | 40 | 60 | 80) {
                2
            } else {
                3
            }
        }
        19 => {
            if n == 1 {
                0
            } else if n == 2 {
                1
            } else if n != 0 && mod10 == 0 {
                2
            } else {
                3
            }
        }
        20 => {
            if n == 1 {
                0
            } else if n != 0 && n % 1_000_000 == 0 {
                1
            } else {
                2
            }
        }
        _ => panic!("unknown cardinal group id {group_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn germanic_group_splits_one_other() {
        assert_eq!(cardinal_form_index(1, 1), 0);
        assert_eq!(cardinal_form_index(1, 0), 1);
        assert_eq!(cardinal_form_index(1, 2), 1);
    }

    #[test]
    fn east_slavic_group_matches_russian_shape() {
        assert_eq!(cardinal_form_index(3, 1), 0); // one
        assert_eq!(cardinal_form_index(3, 21), 0); // one (21 % 10 == 1)
        assert_eq!(cardinal_form_index(3, 11), 2); // many (teen exception)
        assert_eq!(cardinal_form_index(3, 2), 1); // few
        assert_eq!(cardinal_form_index(3, 5), 2); // many
    }

    #[test]
    fn arabic_group_covers_all_six_categories() {
        assert_eq!(cardinal_form_index(13, 0), 0);
        assert_eq!(cardinal_form_index(13, 1), 1);
        assert_eq!(cardinal_form_index(13, 2), 2);
        assert_eq!(cardinal_form_index(13, 5), 3);
        assert_eq!(cardinal_form_index(13, 99), 4);
        assert_eq!(cardinal_form_index(13, 100), 5);
    }

    #[test]
    fn every_group_category_list_ends_in_other() {
        for categories in CARDINAL_CATEGORIES {
            assert_eq!(*categories.last().unwrap(), C::Other);
        }
    }
}
