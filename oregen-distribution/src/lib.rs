//! Parameter-to-document engine for ore distribution markup.
//!
//! Takes flat table rows — one row per named ore distribution, produced by an
//! external tabular-data reader — and assembles the element tree the game
//! engine's world-generation config expects. Each row is converted
//! independently: the assembler validates and normalizes the row's
//! parameters, synthesizes `Setting` children from suffix-grouped columns,
//! expands packed weighted-list cells into ordered child elements, and
//! returns one [`oregen_document::Element`] tree per row.
//!
//! Conversion is pure and fail-fast: a failing row never yields a partial
//! tree, and rows may be processed in parallel with no shared state.

pub mod assemble;
pub mod attributes;
pub mod error;
pub mod params;
pub mod schema;
pub mod settings;
pub mod weighted_list;

pub use assemble::{DistributionKind, assemble, assemble_veins};
pub use error::{DistributionError, WeightedListError};
pub use params::{Params, Row, Scalar};
