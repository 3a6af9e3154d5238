//! The append-only [`PartStore`] the parser writes `Part`s into.

use msgpat_char::PatternChars;
use msgpat_error::{LimitTracker, ParseError, ParseErrorKind, ParseLimits};

use crate::part::{ArgType, Part, PartType};
use crate::ApostropheMode;

/// Sentinel returned by [`PartStore::numeric_value`] for a part that carries
/// no numeric payload, matching the ICU4J convention of signalling "not a
/// number" with `NaN` rather than an `Option`. Callers must test with
/// [`f64::is_nan`] rather than equality.
pub const NO_NUMERIC_VALUE: f64 = f64::NAN;

/// The append-only sequence of [`Part`]s produced by a single parse, plus
/// the out-of-line double-value side table and the original pattern text.
///
/// See the crate-level docs for the structural invariants this store is
/// expected to satisfy once a parse completes successfully.
#[derive(Debug, Clone)]
pub struct PartStore {
    pattern: String,
    chars: PatternChars,
    mode: ApostropheMode,
    parts: Vec<Part>,
    doubles: Vec<f64>,
    limits: ParseLimits,
    tracker: LimitTracker,
}

impl PartStore {
    /// Start an empty store over `pattern`, using `limits` to bound part and
    /// double-table growth.
    pub fn with_limits(pattern: &str, mode: ApostropheMode, limits: ParseLimits) -> Self {
        PartStore {
            pattern: pattern.to_string(),
            chars: PatternChars::new(pattern),
            mode,
            parts: Vec::new(),
            doubles: Vec::new(),
            limits,
            tracker: LimitTracker::new(),
        }
    }

    /// Start an empty store using [`ParseLimits::default`].
    pub fn new(pattern: &str, mode: ApostropheMode) -> Self {
        Self::with_limits(pattern, mode, ParseLimits::default())
    }

    /// Discard all parts/doubles so the store can be reused for a new parse
    /// over the same (or a fresh) pattern.
    pub fn clear(&mut self, pattern: &str) {
        self.pattern = pattern.to_string();
        self.chars = PatternChars::new(pattern);
        self.parts.clear();
        self.doubles.clear();
        self.tracker = LimitTracker::new();
    }

    /// The apostrophe-quoting mode this store was constructed with.
    pub fn apostrophe_mode(&self) -> ApostropheMode {
        self.mode
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pre-split scalar-value view of the pattern.
    pub fn chars(&self) -> &PatternChars {
        &self.chars
    }

    /// Resource limits this store enforces.
    pub fn limits(&self) -> &ParseLimits {
        &self.limits
    }

    /// Append a part, enforcing the configured part-count and length caps.
    /// Returns the new part's stable index.
    pub fn push(&mut self, part: Part) -> Result<usize, ParseError> {
        if self.tracker.parts_would_exceed(&self.limits) {
            return Err(ParseError::new(
                ParseErrorKind::TooLarge(format!(
                    "Too many parts (max {})",
                    self.limits.max_value
                )),
                part.index,
                &self.chars,
            ));
        }
        if part.length > self.limits.max_length {
            return Err(ParseError::new(
                ParseErrorKind::TooLarge(format!(
                    "Token span too long (max {})",
                    self.limits.max_length
                )),
                part.index,
                &self.chars,
            ));
        }
        self.tracker.record_part();
        self.parts.push(part);
        Ok(self.parts.len() - 1)
    }

    /// Append a double to the out-of-line value table, enforcing the
    /// configured cap on stored-double count. Returns the new double's index.
    pub fn push_double(&mut self, value: f64, at: usize) -> Result<usize, ParseError> {
        if self.tracker.doubles_would_exceed(&self.limits) {
            return Err(ParseError::new(
                ParseErrorKind::TooLarge("Too many numeric values".to_string()),
                at,
                &self.chars,
            ));
        }
        self.tracker.record_double();
        self.doubles.push(value);
        Ok(self.doubles.len() - 1)
    }

    /// Borrow the limit tracker so the parser can account for nesting depth
    /// alongside part/double counts.
    pub fn tracker_mut(&mut self) -> &mut LimitTracker {
        &mut self.tracker
    }

    /// Number of parts appended so far.
    pub fn count(&self) -> usize {
        self.parts.len()
    }

    /// Borrow the part at `i`.
    ///
    /// # Panics
    /// Panics if `i >= count()`; this indicates an internal parser bug, not
    /// a malformed pattern (which is always rejected before any out-of-range
    /// index could be constructed).
    pub fn part(&self, i: usize) -> &Part {
        &self.parts[i]
    }

    /// The `PartType` of the part at `i`. See [`PartStore::part`] for panics.
    pub fn part_type(&self, i: usize) -> PartType {
        self.parts[i].part_type
    }

    /// The source text `[part.index, part.index+part.length)` spans.
    pub fn substring(&self, part: &Part) -> String {
        self.chars.slice(part.index, part.index + part.length)
    }

    /// True if `part`'s source span equals `s` exactly.
    pub fn part_substring_matches(&self, part: &Part, s: &str) -> bool {
        part.length == s.chars().count() && self.substring(part) == s
    }

    /// The numeric value an `ArgInt`/`ArgDouble` part carries, or
    /// [`NO_NUMERIC_VALUE`] (`NaN`) for any other part type.
    pub fn numeric_value(&self, part: &Part) -> f64 {
        match part.part_type {
            PartType::ArgInt => f64::from(part.value),
            PartType::ArgDouble => self.doubles[part.value as usize],
            _ => NO_NUMERIC_VALUE,
        }
    }

    /// The plural `offset:` value declared for the plural/selectordinal
    /// argument whose `ArgStart` is at `arg_start_index`, or `0.0` if none
    /// was declared.
    ///
    /// Reads the part immediately following the argument's name part
    /// (`arg_start_index + 2`); this mirrors the source parser's own
    /// position-based lookup and shares its documented quirk: a `plural`
    /// argument whose *first* selector is an explicit `=N` form with no
    /// declared `offset:` will report `N` here, matching upstream behavior.
    pub fn plural_offset(&self, arg_start_index: usize) -> f64 {
        match self.parts.get(arg_start_index + 2) {
            Some(p) if matches!(p.part_type, PartType::ArgInt | PartType::ArgDouble) => {
                self.numeric_value(p)
            }
            _ => 0.0,
        }
    }

    /// The scalar-value pattern index the part at `part_index` begins at.
    pub fn pattern_index(&self, part_index: usize) -> usize {
        self.parts[part_index].index
    }

    /// Given the index of an `ArgStart` or `MsgStart` part, find the index
    /// of its matching `ArgLimit`/`MsgLimit`.
    ///
    /// # Panics
    /// Panics if `start_index` is not an `ArgStart`/`MsgStart` part, or if
    /// the store is internally inconsistent (no matching limit exists) —
    /// both indicate a parser bug, since a completed parse always produces
    /// balanced part sequences.
    #[allow(clippy::panic)] // internal invariant: callers only pass indices of *Start parts from a balanced store
    pub fn limit_part_index(&self, start_index: usize) -> usize {
        let start = &self.parts[start_index];
        match start.part_type {
            PartType::MsgStart => {
                let depth = start.value;
                let mut i = start_index + 1;
                while i < self.parts.len() {
                    let p = &self.parts[i];
                    if p.part_type == PartType::MsgLimit && p.value == depth {
                        return i;
                    }
                    i += 1;
                }
                panic!("unmatched MsgStart at {start_index}");
            }
            PartType::ArgStart => {
                let arg_type = start.arg_type;
                let mut depth = 0i32;
                let mut i = start_index + 1;
                while i < self.parts.len() {
                    let p = &self.parts[i];
                    match p.part_type {
                        PartType::ArgStart if p.arg_type == arg_type => depth += 1,
                        PartType::ArgLimit if p.arg_type == arg_type => {
                            if depth == 0 {
                                return i;
                            }
                            depth -= 1;
                        }
                        _ => {}
                    }
                    i += 1;
                }
                panic!("unmatched ArgStart at {start_index}");
            }
            other => panic!("limit_part_index called on {other:?}, not a *Start part"),
        }
    }

    /// Iterate over all parts in order.
    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Iterate over `(index, part)` pairs.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &Part)> {
        self.parts.iter().enumerate()
    }

    /// Patch a previously-appended part's `value` field in place.
    ///
    /// Used for forward references: `MsgStart`/`MsgLimit` depth and
    /// `ArgStart` argument-type classification are both known only after
    /// the fact.
    pub fn patch_value(&mut self, part_index: usize, value: i32) {
        self.parts[part_index].value = value;
    }

    /// Patch a previously-appended part's `arg_type` field in place.
    pub fn patch_arg_type(&mut self, part_index: usize, arg_type: ArgType) {
        self.parts[part_index].arg_type = arg_type;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Part;

    fn msg_start(depth: i32, index: usize) -> Part {
        Part::new(PartType::MsgStart, index, 0, depth)
    }

    fn msg_limit(depth: i32, index: usize) -> Part {
        Part::new(PartType::MsgLimit, index, 0, depth)
    }

    #[test]
    fn push_and_read_back() {
        let mut store = PartStore::new("Hi", ApostropheMode::DoubleOptional);
        let s = store.push(msg_start(0, 0)).unwrap();
        let l = store.push(msg_limit(0, 2)).unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store.part_type(s), PartType::MsgStart);
        assert_eq!(store.part_type(l), PartType::MsgLimit);
    }

    #[test]
    fn limit_lookup_finds_matching_depth() {
        let mut store = PartStore::new("{a{b}c}", ApostropheMode::DoubleOptional);
        let outer_start = store.push(msg_start(0, 0)).unwrap();
        store.push(msg_start(1, 2)).unwrap();
        store.push(msg_limit(1, 4)).unwrap();
        let outer_limit = store.push(msg_limit(0, 7)).unwrap();
        assert_eq!(store.limit_part_index(outer_start), outer_limit);
    }

    #[test]
    fn numeric_value_reads_int_and_double() {
        let mut store = PartStore::new("3 3.5", ApostropheMode::DoubleOptional);
        let int_part = store.push(Part::new(PartType::ArgInt, 0, 1, 3)).unwrap();
        let dbl_idx = store.push_double(3.5, 2).unwrap();
        let dbl_part = store.push(Part::new(PartType::ArgDouble, 2, 3, dbl_idx as i32)).unwrap();
        assert_eq!(store.numeric_value(store.part(int_part)), 3.0);
        assert_eq!(store.numeric_value(store.part(dbl_part)), 3.5);
        let other = store.push(msg_start(0, 5)).unwrap();
        assert!(store.numeric_value(store.part(other)).is_nan());
    }

    #[test]
    fn substring_reads_back_original_span() {
        let mut store = PartStore::new("{name}", ApostropheMode::DoubleOptional);
        let p = store.push(Part::new(PartType::ArgName, 1, 4, 0)).unwrap();
        assert_eq!(store.substring(store.part(p)), "name");
        assert!(store.part_substring_matches(store.part(p), "name"));
        assert!(!store.part_substring_matches(store.part(p), "other"));
    }

    #[test]
    fn push_respects_part_count_cap() {
        let limits = ParseLimits { max_value: 1, ..ParseLimits::default() };
        let mut store = PartStore::with_limits("x", ApostropheMode::DoubleOptional, limits);
        store.push(msg_start(0, 0)).unwrap();
        let err = store.push(msg_limit(0, 1)).unwrap_err();
        assert_eq!(err.error_kind(), msgpat_error::ErrorKind::OutOfBounds);
    }
}
