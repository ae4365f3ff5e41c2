//! Classification of raw tables into the strongest variant that validates.

use tracing::{debug, trace};

use super::group::Group;
use super::magma::{identity_first, Magma, Monoid, Semigroup};
use super::ring::{Field, Ring};
use super::{AlgebraKind, FiniteAlgebra};
use crate::error::{Error, Result};
use crate::table::{registry_for, CayleyTable, TableInput};

/// The strongest variant reached, and why the next level was not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The validated algebra.
    pub algebra: FiniteAlgebra,
    /// The reason the next variant up failed; `None` when nothing stronger
    /// is possible from the given tables.
    pub limit: Option<Error>,
}

impl Classification {
    fn reached(algebra: impl Into<FiniteAlgebra>, limit: Option<Error>) -> Self {
        let algebra = algebra.into();
        match &limit {
            Some(reason) => debug!(
                name = algebra.name(),
                kind = %algebra.kind(),
                %reason,
                "classification stopped"
            ),
            None => debug!(name = algebra.name(), kind = %algebra.kind(), "classified"),
        }
        Self { algebra, limit }
    }

    /// The variant reached.
    #[must_use]
    pub fn kind(&self) -> AlgebraKind {
        self.algebra.kind()
    }
}

/// Classify a magma, with an optional multiplication table over the same
/// elements.
///
/// Walks Magma → Semigroup → Monoid → Group on the first table, then, when
/// a multiplication table is given and addition is abelian, Ring → Field.
/// An identity found away from index 0 is moved to the front in both tables.
///
/// # Errors
///
/// Returns [`Error::SizeMismatch`] if the multiplication table has a
/// different order. Structural failures are not errors; they are reported in
/// [`Classification::limit`].
pub fn classify(magma: Magma, mult: Option<CayleyTable>) -> Result<Classification> {
    if let Some(m) = &mult {
        if m.order() != magma.order() {
            return Err(Error::SizeMismatch {
                elements: magma.order(),
                order: m.order(),
            });
        }
    }

    if let Err(reason) = magma.check_associative() {
        return Ok(Classification::reached(magma, Some(reason)));
    }
    trace!(name = magma.name(), "associative");

    let Some(id) = magma.identity() else {
        let semigroup = Semigroup::from_magma(magma)?;
        return Ok(Classification::reached(semigroup, Some(Error::NoIdentity)));
    };
    trace!(name = magma.name(), identity = id, "identity found");

    let (magma, mult) = if id == 0 {
        (magma, mult)
    } else {
        let order = identity_first(magma.order(), id);
        (magma.reorder(&order)?, mult.map(|m| m.permuted(&order)))
    };

    let group = match Group::from_monoid_table(magma.clone()) {
        Ok(group) => group,
        Err(reason) => {
            return Ok(Classification::reached(
                Monoid::from_trusted(magma),
                Some(reason),
            ))
        }
    };

    let Some(mult) = mult else {
        return Ok(Classification::reached(group, None));
    };

    let ring = match Ring::from_group(group.clone(), mult) {
        Ok(ring) => ring,
        Err(reason) => return Ok(Classification::reached(group, Some(reason))),
    };

    Ok(match Field::from_ring(ring.clone()) {
        Ok(field) => Classification::reached(field, None),
        Err(reason) => Classification::reached(ring, Some(reason)),
    })
}

/// Build the strongest variant from raw input, with the reason the next
/// level failed.
///
/// # Errors
///
/// Returns registry and table errors (duplicate or unknown labels, shape,
/// range, size mismatch). Structural failures only lower the variant.
pub fn make_finite_algebra_with_reason<I, S>(
    name: impl Into<String>,
    description: impl Into<String>,
    elements: I,
    table: impl Into<TableInput>,
    mult_table: Option<impl Into<TableInput>>,
) -> Result<Classification>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let table = table.into();
    let labels: Vec<String> = elements.into_iter().map(Into::into).collect();
    let elements = registry_for(labels, &table)?;
    let op = table.resolve(&elements)?;
    let mult = mult_table
        .map(|m| Into::<TableInput>::into(m).resolve(&elements))
        .transpose()?;
    let magma = Magma::from_parts(name, description, elements, op)?;
    classify(magma, mult)
}

/// Build the strongest variant from raw input.
///
/// # Errors
///
/// See [`make_finite_algebra_with_reason`].
///
/// # Example
///
/// ```
/// use finite_algebras::{make_finite_algebra, AlgebraKind};
///
/// let v4 = make_finite_algebra(
///     "V4",
///     "Klein-4 group",
///     ["e", "h", "v", "r"],
///     vec![vec![0, 1, 2, 3], vec![1, 0, 3, 2], vec![2, 3, 0, 1], vec![3, 2, 1, 0]],
///     None::<Vec<Vec<usize>>>,
/// )
/// .unwrap();
/// assert_eq!(v4.kind(), AlgebraKind::Group);
/// ```
pub fn make_finite_algebra<I, S>(
    name: impl Into<String>,
    description: impl Into<String>,
    elements: I,
    table: impl Into<TableInput>,
    mult_table: Option<impl Into<TableInput>>,
) -> Result<FiniteAlgebra>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    make_finite_algebra_with_reason(name, description, elements, table, mult_table)
        .map(|c| c.algebra)
}
