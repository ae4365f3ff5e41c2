//! Builder pattern for constructing finite algebras.
//!
//! The builder collects the raw parts of an algebra and classifies them,
//! so callers need not know in advance which variant the tables define.
//!
//! # Example
//!
//! ```
//! use finite_algebras::{AlgebraBuilder, AlgebraKind};
//!
//! // Automatically selects the strongest variant
//! let z3 = AlgebraBuilder::new()
//!     .name("Z3")
//!     .elements(["0", "1", "2"])
//!     .table(vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]])
//!     .mult_table(vec![vec![0, 0, 0], vec![0, 1, 2], vec![0, 2, 1]])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(z3.kind(), AlgebraKind::Field);
//! ```
//!
//! # Variant Selection
//!
//! The first table is checked for associativity, an identity and inverses;
//! a multiplication table then lifts an abelian group to a ring or field.
//! [`AlgebraBuilder::build_as`] asks for a specific variant instead and
//! reports why a stronger request cannot be met.

use tracing::debug;

use crate::algebra::{classify, AlgebraKind, Classification, FiniteAlgebra, Magma, Semigroup};
use crate::error::{Error, Result};
use crate::table::{registry_for, CayleyTable, TableInput};

/// Builder for constructing finite algebras from raw parts.
///
/// # Example
///
/// ```
/// use finite_algebras::{AlgebraBuilder, AlgebraKind};
///
/// // Label tables define the element order by their first row
/// let v4 = AlgebraBuilder::new()
///     .name("V4")
///     .description("Klein four-group")
///     .table(vec![
///         vec!["e", "h", "v", "r"],
///         vec!["h", "e", "r", "v"],
///         vec!["v", "r", "e", "h"],
///         vec!["r", "v", "h", "e"],
///     ])
///     .build_as(AlgebraKind::Monoid)
///     .unwrap();
///
/// assert_eq!(v4.kind(), AlgebraKind::Monoid);
/// assert_eq!(v4.inv(3), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlgebraBuilder {
    name: Option<String>,
    description: String,
    elements: Vec<String>,
    table: Option<TableInput>,
    mult_table: Option<TableInput>,
    delimiter: Option<String>,
}

impl AlgebraBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description. Defaults to empty.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the element labels.
    ///
    /// May be omitted when the table is written with labels; its first row
    /// then defines the element order.
    #[must_use]
    pub fn elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements = elements.into_iter().map(Into::into).collect();
        self
    }

    /// Set the first (additive) operation table.
    #[must_use]
    pub fn table(mut self, table: impl Into<TableInput>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Set the multiplication table.
    #[must_use]
    pub fn mult_table(mut self, table: impl Into<TableInput>) -> Self {
        self.mult_table = Some(table.into());
        self
    }

    /// Set the delimiter used when forming direct-product labels.
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Validate the parts into a magma and an optional multiplication table.
    fn into_parts(self) -> Result<(Magma, Option<CayleyTable>)> {
        let name = self
            .name
            .ok_or_else(|| Error::invalid_params("name must be specified"))?;
        let table = self
            .table
            .ok_or_else(|| Error::invalid_params("table must be specified"))?;

        let elements = registry_for(self.elements, &table)?;
        let op = table.resolve(&elements)?;
        let mult = self
            .mult_table
            .map(|m| m.resolve(&elements))
            .transpose()?;

        let mut magma = Magma::from_parts(name, self.description, elements, op)?;
        if let Some(delimiter) = self.delimiter {
            magma = magma.with_delimiter(delimiter);
        }
        Ok((magma, mult))
    }

    /// Classify the parts, keeping the reason the next variant failed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if the name or table is missing, and
    /// the registry and table errors of [`crate::make_finite_algebra`].
    pub fn build_with_reason(self) -> Result<Classification> {
        let (magma, mult) = self.into_parts()?;
        classify(magma, mult)
    }

    /// Build the strongest variant the tables satisfy.
    ///
    /// # Errors
    ///
    /// See [`AlgebraBuilder::build_with_reason`].
    pub fn build(self) -> Result<FiniteAlgebra> {
        self.build_with_reason().map(|c| c.algebra)
    }

    /// Build a specific variant, viewing a stronger result as `kind`.
    ///
    /// A magma or semigroup keeps the given element order; stronger variants
    /// move the identity to the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] with the failing law when the tables
    /// do not reach `kind`, plus the errors of [`AlgebraBuilder::build`].
    pub fn build_as(self, kind: AlgebraKind) -> Result<FiniteAlgebra> {
        let (magma, mult) = self.into_parts()?;
        match kind {
            AlgebraKind::Magma => return Ok(magma.into()),
            AlgebraKind::Semigroup => {
                return Semigroup::from_magma(magma)
                    .map(Into::into)
                    .map_err(|e| mismatch(kind, AlgebraKind::Magma, e.to_string()));
            }
            _ => {}
        }

        let Classification { algebra, limit } = classify(magma, mult)?;
        let achieved = algebra.kind();
        if achieved < kind {
            debug!(name = algebra.name(), %kind, %achieved, "requested variant not reached");
            let reason = limit.map_or_else(
                || format!("a {kind} needs a multiplication table"),
                |e| e.to_string(),
            );
            return Err(mismatch(kind, achieved, reason));
        }
        algebra.into_kind(kind)
    }
}

fn mismatch(declared: AlgebraKind, achieved: AlgebraKind, reason: String) -> Error {
    Error::KindMismatch {
        declared: declared.to_string(),
        achieved: achieved.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z4_rows() -> Vec<Vec<usize>> {
        (0..4).map(|i| (0..4).map(|j| (i + j) % 4).collect()).collect()
    }

    #[test]
    fn test_builder_basic() {
        let g = AlgebraBuilder::new()
            .name("Z4")
            .elements(["0", "1", "2", "3"])
            .table(z4_rows())
            .build()
            .unwrap();
        assert_eq!(g.kind(), AlgebraKind::Group);
        assert_eq!(g.order(), 4);
        assert_eq!(g.description(), "");
    }

    #[test]
    fn test_builder_ring() {
        let r = AlgebraBuilder::new()
            .name("R4")
            .description("integers mod 4")
            .elements(["0", "1", "2", "3"])
            .table(z4_rows())
            .mult_table(
                (0..4)
                    .map(|i| (0..4).map(|j| (i * j) % 4).collect())
                    .collect::<Vec<Vec<usize>>>(),
            )
            .build_with_reason()
            .unwrap();
        assert_eq!(r.kind(), AlgebraKind::Ring);
        assert!(matches!(r.limit, Some(Error::NoInverse(ref x)) if x == "2"));
    }

    #[test]
    fn test_builder_delimiter() {
        let g = AlgebraBuilder::new()
            .name("Z2")
            .elements(["0", "1"])
            .table(vec![vec![0, 1], vec![1, 0]])
            .delimiter("|")
            .build()
            .unwrap();
        assert_eq!(g.magma().delimiter(), "|");
        let p = g.direct_product(&g).unwrap();
        assert_eq!(p.elements().get(1), Some("0|1"));
    }

    #[test]
    fn test_builder_missing_parts() {
        assert!(AlgebraBuilder::new().table(z4_rows()).build().is_err());
        assert!(AlgebraBuilder::new().name("x").build().is_err());
    }

    #[test]
    fn test_build_as_weaker_and_stronger() {
        let monoid = AlgebraBuilder::new()
            .name("Z4")
            .elements(["0", "1", "2", "3"])
            .table(z4_rows())
            .build_as(AlgebraKind::Semigroup)
            .unwrap();
        assert_eq!(monoid.kind(), AlgebraKind::Semigroup);

        let err = AlgebraBuilder::new()
            .name("Z4")
            .elements(["0", "1", "2", "3"])
            .table(z4_rows())
            .build_as(AlgebraKind::Ring)
            .unwrap_err();
        assert!(matches!(err, Error::KindMismatch { ref achieved, .. } if achieved == "Group"));
    }

    #[test]
    fn test_build_as_keeps_order_below_monoid() {
        // identity "e" is listed last
        let table = vec![
            vec!["a", "e", "b"],
            vec!["e", "b", "a"],
            vec!["b", "a", "e"],
        ];
        let s = AlgebraBuilder::new()
            .name("Z3")
            .elements(["b", "a", "e"])
            .table(table.clone())
            .build_as(AlgebraKind::Semigroup)
            .unwrap();
        assert_eq!(s.elements().as_slice(), &["b", "a", "e"]);

        let g = AlgebraBuilder::new()
            .name("Z3")
            .elements(["b", "a", "e"])
            .table(table)
            .build()
            .unwrap();
        assert_eq!(g.elements().get(0), Some("e"));
    }

    #[test]
    fn test_build_as_reports_law() {
        // max(a, b) on {0, 1}: a semigroup with identity 0 but no inverse for 1
        let err = AlgebraBuilder::new()
            .name("max")
            .elements(["0", "1"])
            .table(vec![vec![0, 1], vec![1, 1]])
            .build_as(AlgebraKind::Group)
            .unwrap_err();
        match err {
            Error::KindMismatch { achieved, reason, .. } => {
                assert_eq!(achieved, "Monoid");
                assert!(reason.contains('1'), "{reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
