//! Raw table input: index tables or label tables.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::CayleyTable;
use crate::elements::Elements;
use crate::error::Result;

/// An operation table as supplied by a caller or a stored record.
///
/// Tables may be written with element indices or with element labels. Both
/// are normalized to a [`CayleyTable`] by [`TableInput::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum TableInput {
    /// Entries are indices into the element sequence.
    Index(Vec<Vec<usize>>),
    /// Entries are element labels.
    Label(Vec<Vec<String>>),
}

impl TableInput {
    /// The element order implied by a label table: its first row.
    #[must_use]
    pub fn first_row_labels(&self) -> Option<Vec<String>> {
        match self {
            Self::Label(rows) => rows.first().cloned(),
            Self::Index(_) => None,
        }
    }

    /// Normalize to an index table against an element registry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownElement`] for unregistered labels, and
    /// the shape/range errors of [`CayleyTable::new`].
    pub fn resolve(self, elements: &Elements) -> Result<CayleyTable> {
        match self {
            Self::Index(rows) => CayleyTable::new(rows),
            Self::Label(rows) => {
                let indexed = rows
                    .iter()
                    .map(|row| row.iter().map(|l| elements.require(l)).collect())
                    .collect::<Result<Vec<Vec<usize>>>>()?;
                CayleyTable::new(indexed)
            }
        }
    }
}

/// Build the element registry for a table.
///
/// When no labels are given and the table is written with labels, the first
/// row of the table defines the element order.
pub(crate) fn registry_for(labels: Vec<String>, table: &TableInput) -> Result<Elements> {
    match (labels.is_empty(), table.first_row_labels()) {
        (true, Some(first_row)) => Elements::new(first_row),
        _ => Elements::new(labels),
    }
}

impl From<Vec<Vec<usize>>> for TableInput {
    fn from(rows: Vec<Vec<usize>>) -> Self {
        Self::Index(rows)
    }
}

impl From<Vec<Vec<String>>> for TableInput {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::Label(rows)
    }
}

impl From<Vec<Vec<&str>>> for TableInput {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        Self::Label(
            rows.into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        )
    }
}

impl From<&CayleyTable> for TableInput {
    fn from(table: &CayleyTable) -> Self {
        Self::Index(table.to_rows())
    }
}

impl From<CayleyTable> for TableInput {
    fn from(table: CayleyTable) -> Self {
        Self::Index(table.to_rows())
    }
}
