//! Error taxonomy for row-to-document conversion.
//!
//! Every error aborts the conversion of the single row that raised it.
//! Nothing is recovered, defaulted, or retried internally; the caller decides
//! whether to skip the row, abort the batch, or report per-row diagnostics.

use thiserror::Error;

use crate::assemble::DistributionKind;

/// A syntax error in a packed weighted-list string.
///
/// Raised during parsing; the whole list is rejected, never a prefix of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightedListError {
    /// An entry did not split into exactly a value and a weight.
    #[error("weighted list entry {entry:?} is not a value,weight pair")]
    MalformedPair {
        /// The offending entry, whitespace already removed.
        entry: String,
    },

    /// The weight half of an entry is not a floating-point literal.
    #[error("weighted list entry {entry:?} has non-numeric weight {weight:?}")]
    NonNumericWeight {
        /// The offending entry, whitespace already removed.
        entry: String,
        /// The part that failed to parse as a number.
        weight: String,
    },
}

/// An error while assembling one distribution element tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// The row has no usable `name`. Every distribution must be named.
    #[error("distribution has no name; every distribution must be named")]
    MissingName,

    /// The `inherits` value is not one of the engine's preset identifiers.
    #[error("unknown inheritance preset {0:?}")]
    UnknownPreset(String),

    /// The `color` value is not six hexadecimal digits.
    #[error("color {0:?} is not 6 hexadecimal digits (example of correct format: 3366FF)")]
    InvalidColor(String),

    /// Debug display attributes were applied to an element kind that does
    /// not support them.
    #[error("debug display attributes are not valid on <{0}> elements")]
    WrongElementKind(String),

    /// A weighted-list cell failed to parse; `column` names the cell.
    #[error("column {column:?}: {source}")]
    WeightedList {
        /// The row column holding the malformed list.
        column: String,
        /// The underlying syntax error.
        #[source]
        source: WeightedListError,
    },

    /// The discriminator column that selects the kind is missing or null.
    #[error("column {column:?} is required to select the distribution kind")]
    MissingKind {
        /// The discriminator column that was expected.
        column: &'static str,
    },

    /// The discriminator column holds a value outside the closed kind set.
    #[error("unrecognized distribution kind {value:?} in column {column:?}")]
    UnknownKind {
        /// The discriminator column that was read.
        column: &'static str,
        /// The unrecognized value.
        value: String,
    },

    /// The kind is recognized but its assembler is not implemented yet.
    ///
    /// A hard stop: the caller must not fall back to a partially built tree.
    #[error("the {0} distribution kind is not supported yet")]
    Unsupported(DistributionKind),
}
