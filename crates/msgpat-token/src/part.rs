//! The `Part` token/AST node and its type tags.

/// Classification of a [`Part`] emitted by the parser.
///
/// Fourteen variants map one-to-one onto the token/structural-bracket kinds
/// the source parser distinguishes. See the crate-level docs for how these
/// compose into matched pairs and selector/sub-message triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartType {
    /// Opens a message or sub-message; `value` carries nesting depth.
    MsgStart,
    /// Closes a message or sub-message; `value` carries nesting depth.
    MsgLimit,
    /// A `'` (or `''`) consumed as quoting syntax rather than literal text.
    SkipSyntax,
    /// A character a consumer must insert (used by auto-quote repair).
    InsertChar,
    /// A `#` inside a plural/selectordinal sub-message, replaced by the
    /// (offset-adjusted) argument value at format time.
    ReplaceNumber,
    /// Opens an argument (`{`); `value` carries the argument-type tag.
    ArgStart,
    /// Closes an argument (`}`); `value` carries the argument-type tag.
    ArgLimit,
    /// A numeric argument name (`{0}`); `value` is the index.
    ArgNumber,
    /// A named argument name (`{name}`).
    ArgName,
    /// The `ARG_TYPE` keyword span of a simple argument (e.g. `number`).
    ArgType,
    /// The style span of a simple argument (verbatim, after the comma).
    ArgStyle,
    /// A plural/select/selectordinal/choice selector keyword or `=N` span.
    ArgSelector,
    /// A signed integer literal; `value` is the literal itself.
    ArgInt,
    /// A signed floating-point literal; `value` indexes the double side table.
    ArgDouble,
}

/// The five argument classifications a `{…}` argument can resolve to.
///
/// Meaningful only on [`PartType::ArgStart`]/[`PartType::ArgLimit`] parts;
/// all other part types carry [`ArgType::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgType {
    /// No style: `{name}`.
    #[default]
    None,
    /// `{n, choice, ...}`.
    Choice,
    /// `{name, number}`, `{name, date, long}`, or any other simple style.
    Simple,
    /// `{name, plural, ...}`.
    Plural,
    /// `{name, select, ...}`.
    Select,
    /// `{name, selectordinal, ...}`.
    SelectOrdinal,
}

/// The apostrophe-quoting regime a parser instance is constructed with.
///
/// Immutable for the parser's lifetime; see crate-level docs for the
/// per-character disambiguation rules each mode implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApostropheMode {
    /// MessageFormat-compatible default: a lone `'` is literal unless
    /// immediately followed by `{`, `}`, `#`, or `|`.
    #[default]
    DoubleOptional,
    /// A lone `'` always opens a quoted literal; the only way to produce a
    /// literal apostrophe is `''`.
    DoubleRequired,
}

/// A single token/AST node in the flat, linearly-indexed `Part` sequence.
///
/// `index`/`length` are scalar-value (not byte) offsets into the original
/// pattern; `length` is `0` for purely structural markers. `value`'s meaning
/// depends on `part_type` — see the variant docs on [`PartType`] and the
/// crate-level payload table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Part {
    /// This part's classification.
    pub part_type: PartType,
    /// Scalar-value offset where this token's source span begins.
    pub index: usize,
    /// Scalar-value length of the source span (`0` for structural markers).
    pub length: usize,
    /// Type-specific payload; see [`PartType`] variant docs.
    pub value: i32,
    /// Argument classification; only meaningful on `ArgStart`/`ArgLimit`.
    pub arg_type: ArgType,
}

impl Part {
    /// Construct a part with `arg_type` defaulted to `None`.
    pub fn new(part_type: PartType, index: usize, length: usize, value: i32) -> Self {
        Part { part_type, index, length, value, arg_type: ArgType::None }
    }

    /// Construct an `ArgStart`/`ArgLimit` part carrying an argument type tag.
    pub fn with_arg_type(
        part_type: PartType,
        index: usize,
        length: usize,
        value: i32,
        arg_type: ArgType,
    ) -> Self {
        Part { part_type, index, length, value, arg_type }
    }

    /// The half-open `[index, index+length)` span this part covers.
    pub fn span(&self) -> (usize, usize) {
        (self.index, self.index + self.length)
    }
}
