//! Token/AST data model for parsed MessageFormat patterns.
//!
//! A flat, linearly-indexed sequence of [`Part`] *is* the AST here — there
//! is no separate tree type. [`PartStore`] is the append-only sequence a
//! parser writes into; matched `MsgStart`/`MsgLimit` and `ArgStart`/`ArgLimit`
//! pairs (and the selector/sub-message triples inside plural/select/choice
//! arguments) give it its structure.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

mod part;
mod store;

pub use part::{ApostropheMode, ArgType, Part, PartType};
pub use store::{PartStore, NO_NUMERIC_VALUE};
