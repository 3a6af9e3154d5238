//! Locale → (cardinal group, ordinal group) lookup table.
//!
//! Keys are lowercase BCP-47 primary language subtags. [`normalize`] strips
//! script/region/variant subtags (`_`/`-` separated) one at a time until a
//! match is found or the table is exhausted, at which point the root
//! `"root"` entry (group 0/0, `other`-only) is used.
//!
//! Entries whose ordinal shape isn't independently documented in
//! `ordinal.rs` (no ordinal distinction attested for that language in CLDR)
//! map to ordinal group 0. Entries for languages without a well-attested
//! cardinal family of their own fall back to group 1 (`one`/`other`, the
//! most common cardinal shape across CLDR) rather than a fabricated
//! dedicated group, matching how this table already treats e.g. Bantu and
//! Dravidian languages above.

/// `(cardinal_group_id, ordinal_group_id)` for one locale.
pub type GroupPair = (usize, usize);

/// Static locale → group-pair table, keyed by lowercase primary language
/// subtag.
pub static RULES: phf::Map<&'static str, GroupPair> = phf::phf_map! {
    "root" => (0, 0),
    // Germanic cardinal (group 1), English-type ordinal (group 1) where noted.
    "en" => (1, 1),
    "de" => (1, 0),
    "nl" => (1, 0),
    "sv" => (1, 2),
    "nb" => (1, 0),
    "nn" => (1, 0),
    "no" => (1, 0),
    "da" => (1, 0),
    "af" => (1, 0),
    "fy" => (1, 0),
    "yi" => (1, 0),
    "eu" => (1, 0),
    "fi" => (1, 0),
    "et" => (1, 0),
    "hu" => (1, 0),
    "el" => (1, 0),
    "he" => (19, 0),
    "iw" => (19, 0),
    "bn" => (1, 15),
    "gu" => (1, 18),
    "hi" => (1, 16),
    "kn" => (1, 0),
    "mr" => (1, 17),
    "pa" => (1, 0),
    "ta" => (1, 0),
    "te" => (1, 0),
    "ml" => (1, 0),
    "ur" => (1, 0),
    "as" => (1, 15),
    "or" => (1, 0),
    "sw" => (1, 0),
    "zu" => (1, 0),
    "xh" => (1, 0),
    "am" => (2, 0),
    "ti" => (2, 0),
    "fa" => (2, 0),
    "ff" => (2, 0),
    "gl" => (1, 0),
    "ka" => (0, 5),
    "az" => (1, 6),
    "kk" => (1, 19),
    "ky" => (1, 0),
    "uz" => (1, 0),
    "tr" => (1, 0),
    "mn" => (1, 0),
    "th" => (0, 0),
    "vi" => (0, 7),
    "id" => (0, 0),
    "in" => (0, 0),
    "ms" => (0, 0),
    "jv" => (0, 0),
    "km" => (0, 0),
    "lo" => (0, 0),
    "my" => (0, 0),
    "zh" => (0, 0),
    "ja" => (0, 0),
    "ko" => (0, 0),
    "yue" => (0, 0),
    "bo" => (0, 0),
    // French/Portuguese family (group 2)
    "fr" => (2, 12),
    "pt" => (20, 0),
    "pt-pt" => (2, 0),
    "ca" => (1, 7),
    "ln" => (2, 0),
    "mg" => (2, 0),
    "ti-er" => (2, 0),
    "wa" => (2, 0),
    // East Slavic (group 3)
    "ru" => (3, 0),
    "uk" => (3, 9),
    "be" => (3, 10),
    "sr" => (3, 0),
    "hr" => (3, 0),
    "bs" => (3, 0),
    "sh" => (3, 0),
    // Czech/Slovak (group 4)
    "cs" => (4, 0),
    "sk" => (4, 0),
    // Irish (group 5)
    "ga" => (5, 0),
    // Lithuanian (group 6)
    "lt" => (6, 0),
    // Slovenian (group 7)
    "sl" => (7, 0),
    // Macedonian (group 8)
    "mk" => (8, 13),
    // Maltese (group 9)
    "mt" => (9, 0),
    // Latvian (group 10)
    "lv" => (10, 0),
    // Polish (group 11)
    "pl" => (11, 0),
    // Romanian (group 12)
    "ro" => (12, 0),
    "mo" => (12, 0),
    // Arabic (group 13)
    "ar" => (13, 0),
    "ars" => (13, 0),
    // Welsh (group 14, ordinal 3)
    "cy" => (14, 3),
    // Icelandic (group 15)
    "is" => (15, 0),
    // Scottish Gaelic (group 16)
    "gd" => (16, 0),
    // Breton (group 17)
    "br" => (17, 0),
    // Manx (group 18)
    "gv" => (18, 0),
    // Italian-family CLDR 49 (group 20), ordinal 4
    "it" => (20, 4),
    "es" => (2, 0),
    "ro-md" => (12, 0),
    "sq" => (1, 14),
    "bg" => (1, 0),
    "is-is" => (15, 0),
    "hy" => (2, 11),
    "sq-al" => (1, 14),
    "si" => (2, 0),
    "ne" => (1, 16),
    "tl" => (0, 8),
    "fil" => (0, 8),
    // Additional one/other-shaped and other-only languages, filling out
    // BCP-47 coverage beyond the families above. Cardinal shape follows the
    // nearest attested family; ordinal 0 unless documented in ordinal.rs.
    "ig" => (1, 0),
    "yo" => (1, 0),
    "ha" => (1, 0),
    "so" => (1, 0),
    "rw" => (1, 0),
    "rn" => (1, 0),
    "lg" => (1, 0),
    "ny" => (1, 0),
    "sn" => (1, 0),
    "st" => (1, 0),
    "tn" => (1, 0),
    "ts" => (1, 0),
    "ve" => (1, 0),
    "nr" => (1, 0),
    "ss" => (1, 0),
    "bm" => (0, 0),
    "wo" => (0, 0),
    "dz" => (0, 0),
    "ps" => (1, 0),
    "ku" => (1, 0),
    "ckb" => (1, 0),
    "sd" => (1, 0),
    "lb" => (1, 0),
    "fo" => (1, 0),
    "kl" => (0, 0),
    "haw" => (0, 0),
    "ht" => (0, 0),
    "qu" => (0, 0),
    "gn" => (0, 0),
    "ay" => (0, 0),
    "tt" => (0, 0),
    "ug" => (1, 0),
    "tg" => (0, 0),
    "dv" => (0, 0),
    "ak" => (2, 0),
    "tw" => (2, 0),
    "ee" => (1, 0),
    "kri" => (0, 0),
    "crs" => (0, 0),
    "sg" => (0, 0),
    "lu" => (1, 0),
    "kg" => (1, 0),
    "kj" => (1, 0),
    "ki" => (1, 0),
    "kam" => (1, 0),
    "luo" => (1, 0),
    "luy" => (1, 0),
    "mer" => (1, 0),
    "naq" => (1, 0),
    "saq" => (1, 0),
    "seh" => (1, 0),
    "ses" => (0, 0),
    "shi" => (13, 0),
    "teo" => (1, 0),
    "twq" => (0, 0),
    "vai" => (0, 0),
    "vun" => (1, 0),
    "xog" => (1, 0),
    "yav" => (0, 0),
    "dyo" => (0, 0),
    "dje" => (0, 0),
    "bez" => (1, 0),
    "asa" => (1, 0),
    "bas" => (0, 0),
    "bem" => (1, 0),
    "brx" => (1, 0),
    "cgg" => (1, 0),
    "chr" => (1, 0),
    "ewo" => (0, 0),
    "guz" => (1, 0),
    "jgo" => (1, 0),
    "jmc" => (1, 0),
    "kab" => (2, 0),
    "kde" => (0, 0),
    "kea" => (0, 0),
    "khq" => (0, 0),
    "kln" => (1, 0),
    "ksb" => (1, 0),
    "ksf" => (0, 0),
    "lag" => (2, 0),
    "mas" => (1, 0),
    "mfe" => (0, 0),
    "mgo" => (1, 0),
    "mua" => (0, 0),
    "nb-no" => (1, 0),
    "nd" => (1, 0),
    "nmg" => (0, 0),
    "nnh" => (0, 0),
    "nus" => (1, 0),
    "nyn" => (1, 0),
    "rof" => (1, 0),
    "rwk" => (1, 0),
    "sbp" => (1, 0),
    "ssy" => (0, 0),
    "swc" => (0, 0),
    "syr" => (0, 0),
    "to" => (0, 0),
    "fj" => (0, 0),
    "sm" => (0, 0),
    "mi" => (1, 0),
    "mg-mg" => (2, 0),
    "ny-mw" => (1, 0),
    "nso" => (1, 0),
    "pcm" => (0, 0),
    "om" => (1, 0),
    "sa" => (0, 0),
    "sat" => (0, 0),
    "sc" => (1, 0),
    "co" => (1, 0),
    "oc" => (2, 0),
    "rm" => (1, 0),
    "fur" => (1, 0),
    "lij" => (1, 0),
    "vec" => (1, 0),
    "nap" => (1, 0),
    "scn" => (1, 0),
    "wae" => (1, 0),
    "gsw" => (1, 0),
    "kok" => (1, 0),
    "mai" => (1, 0),
    "doi" => (1, 0),
    "bho" => (0, 0),
    "mni" => (0, 0),
    "sat-olck" => (0, 0),
    "awa" => (0, 0),
    "hne" => (0, 0),
    "mag" => (0, 0),
    "raj" => (1, 0),
    "bgc" => (1, 0),
    "gom" => (1, 0),
    "gbm" => (1, 0),
    "jv-java" => (0, 0),
    "su" => (0, 0),
    "ban" => (0, 0),
    "bug" => (0, 0),
    "ace" => (0, 0),
    "min" => (0, 0),
    "mad" => (0, 0),
    "mn-mong" => (0, 0),
    "bo-in" => (0, 0),
    "dz-bt" => (0, 0),
    "ii" => (0, 0),
    "za" => (0, 0),
    "ug-cn" => (1, 0),
    "chk" => (0, 0),
    "gil" => (0, 0),
    "mh" => (0, 0),
    "na" => (0, 0),
    "niu" => (0, 0),
    "pau" => (0, 0),
    "tkl" => (0, 0),
    "tvl" => (0, 0),
    "yap" => (0, 0),
};

/// Look up `(cardinal_group_id, ordinal_group_id)` for `locale`, normalizing
/// and falling back through subtags to `"root"` (group 0/0).
pub fn lookup(locale: &str) -> GroupPair {
    let normalized = locale.to_lowercase();
    let mut candidate = normalized.as_str();
    loop {
        if let Some(pair) = RULES.get(candidate) {
            return *pair;
        }
        match candidate.rfind(['_', '-']) {
            Some(idx) => candidate = &candidate[..idx],
            None => return RULES["root"],
        }
    }
}
