//! JSON persistence of algebras.
//!
//! An algebra is stored as a flat record:
//!
//! ```json
//! {
//!   "type": "Group",
//!   "name": "Z2",
//!   "description": "Cyclic group of order 2",
//!   "elements": ["e", "a"],
//!   "op_table": [[0, 1], [1, 0]]
//! }
//! ```
//!
//! Rings and fields add a `mult_table`. Records written by older tools may
//! name the first table `add_table`, `addition_table` or `table`, and may
//! write tables with element labels instead of indices; all of these load.
//!
//! Loading honours the declared `type`: a weaker declared type yields that
//! weaker variant, while a declared type the tables do not satisfy fails
//! with [`crate::Error::KindMismatch`] naming the law that broke.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algebra::{AlgebraKind, FiniteAlgebra, DEFAULT_DELIMITER};
use crate::builder::AlgebraBuilder;
use crate::error::Result;
use crate::table::TableInput;

/// The stored form of an algebra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgebraRecord {
    /// Variant name, one of [`AlgebraKind::name`].
    #[serde(rename = "type")]
    pub kind: String,
    /// Algebra name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Element labels; may be empty when the tables use labels.
    #[serde(default)]
    pub elements: Vec<String>,
    /// The first (additive) operation table.
    #[serde(alias = "add_table", alias = "addition_table", alias = "table")]
    pub op_table: TableInput,
    /// The multiplication table of a ring or field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mult_table: Option<TableInput>,
    /// Product-label delimiter, when it differs from the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl AlgebraRecord {
    /// Rebuild the algebra, validated as the declared type.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidParams`] for an unknown type name,
    /// [`crate::Error::KindMismatch`] if the tables do not form the declared type,
    /// and the registry and table errors of [`AlgebraBuilder`].
    pub fn into_algebra(self) -> Result<FiniteAlgebra> {
        let kind: AlgebraKind = self.kind.parse()?;
        let mut builder = AlgebraBuilder::new()
            .name(self.name)
            .description(self.description)
            .elements(self.elements)
            .table(self.op_table);
        if let Some(mult) = self.mult_table {
            builder = builder.mult_table(mult);
        }
        if let Some(delimiter) = self.delimiter {
            builder = builder.delimiter(delimiter);
        }
        builder.build_as(kind)
    }
}

impl From<&FiniteAlgebra> for AlgebraRecord {
    fn from(algebra: &FiniteAlgebra) -> Self {
        let delimiter = algebra.magma().delimiter();
        Self {
            kind: algebra.kind().name().to_string(),
            name: algebra.name().to_string(),
            description: algebra.description().to_string(),
            elements: algebra.elements().as_slice().to_vec(),
            op_table: algebra.op_table().into(),
            mult_table: algebra.mult_table().map(Into::into),
            delimiter: (delimiter != DEFAULT_DELIMITER).then(|| delimiter.to_string()),
        }
    }
}

/// Serialize an algebra to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if serialization fails.
pub fn to_json(algebra: &FiniteAlgebra) -> Result<String> {
    Ok(serde_json::to_string_pretty(&AlgebraRecord::from(algebra))?)
}

/// Parse an algebra from JSON.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] for malformed JSON and the errors of
/// [`AlgebraRecord::into_algebra`].
///
/// # Example
///
/// ```
/// use finite_algebras::{io::from_json, AlgebraKind};
///
/// let json = r#"{
///     "type": "Group",
///     "name": "Z2",
///     "elements": ["e", "a"],
///     "add_table": [["e", "a"], ["a", "e"]]
/// }"#;
/// let z2 = from_json(json).unwrap();
/// assert_eq!(z2.kind(), AlgebraKind::Group);
/// assert_eq!(z2.op_table().get(1, 1), 0);
/// ```
pub fn from_json(json: &str) -> Result<FiniteAlgebra> {
    let record: AlgebraRecord = serde_json::from_str(json)?;
    debug!(name = %record.name, kind = %record.kind, "loading algebra record");
    record.into_algebra()
}

/// Write an algebra as JSON to `path`.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if serialization fails and
/// [`crate::Error::Io`] if the file cannot be written.
pub fn save(algebra: &FiniteAlgebra, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_json(algebra)?)?;
    debug!(name = algebra.name(), path = %path.display(), "saved algebra");
    Ok(())
}

/// Read an algebra from a JSON file.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the file cannot be read,
/// [`crate::Error::Json`] for parse failures and the errors of [`from_json`].
pub fn load(path: impl AsRef<Path>) -> Result<FiniteAlgebra> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    debug!(path = %path.display(), "read algebra file");
    from_json(&json)
}
