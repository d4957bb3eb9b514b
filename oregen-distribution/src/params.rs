//! Row and parameter-lookup types.
//!
//! A [`Row`] is one table row as delivered by the external tabular reader:
//! column name to optional cell value. [`Params`] is the default-null view
//! the engine reads through — an unknown column reads as absent, never as an
//! error, and a null cell is indistinguishable from a missing one.

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// One cell value from a table row.
///
/// Numbers and booleans are rendered to their attribute string form on
/// demand; text passes through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A text cell.
    Text(String),
    /// A numeric cell.
    Number(f64),
    /// A boolean cell.
    Bool(bool),
}

impl Scalar {
    /// The attribute string form of this value.
    #[must_use]
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One table row: column name to optional cell value.
///
/// Deserializes from a JSON object; explicit `null` cells deserialize to
/// absent values, so a reader may pass headers through for blank cells
/// without changing behavior.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: FxHashMap<String, Option<Scalar>>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Scalar>) {
        self.cells.insert(column.into(), Some(value.into()));
    }

    /// Set a cell to null. Reads back exactly like a missing column.
    pub fn insert_null(&mut self, column: impl Into<String>) {
        self.cells.insert(column.into(), None);
    }

    /// Whether every cell in the row is null.
    ///
    /// Completely blank spreadsheet rows are expected to be skipped by the
    /// caller before assembly; this is the check for that.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(Option::is_none)
    }
}

/// Default-null read view over a [`Row`].
///
/// Every read site treats an absent column as a distinct, always-legal case.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    row: &'a Row,
}

impl<'a> Params<'a> {
    /// Wrap a row.
    #[must_use]
    pub fn new(row: &'a Row) -> Self {
        Self { row }
    }

    /// Look up a column. Missing columns and null cells both read as `None`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&'a Scalar> {
        self.row.cells.get(column).and_then(Option::as_ref)
    }

    /// Look up a column and render it to its attribute string form.
    #[must_use]
    pub fn text(&self, column: &str) -> Option<Cow<'a, str>> {
        self.get(column).map(Scalar::render)
    }
}
