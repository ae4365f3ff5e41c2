//! Direct products.
//!
//! The product of algebras of orders n and m has n·m elements; the pair
//! (i, j) is stored at index `i * m + j` and labelled `"a{delim}b"` with the
//! left operand's delimiter.

use super::group::Group;
use super::magma::Magma;
use super::ring::Ring;
use crate::elements::Elements;
use crate::error::Result;
use crate::table::CayleyTable;

fn product_elements(left: &Magma, right: &Magma) -> Result<Elements> {
    let delim = left.delimiter();
    Elements::new(
        left.elements()
            .iter()
            .flat_map(|a| right.elements().iter().map(move |b| format!("{a}{delim}{b}"))),
    )
}

fn product_table(left: &CayleyTable, right: &CayleyTable) -> CayleyTable {
    let m = right.order();
    CayleyTable::from_fn(left.order() * m, |p, q| {
        left.get(p / m, q / m) * m + right.get(p % m, q % m)
    })
}

/// The projection maps of a product of orders `left` and `right`:
/// `(i, j) ↦ i` and `(i, j) ↦ j`, indexed by product element.
///
/// Both are homomorphisms onto the factors.
///
/// ```
/// use finite_algebras::{generate::cyclic, is_homomorphism, product_projections};
///
/// let z2 = cyclic(2).unwrap();
/// let z3 = cyclic(3).unwrap();
/// let p = z2.direct_product(&z3).unwrap();
/// let (to_z2, to_z3) = product_projections(2, 3);
/// assert!(is_homomorphism(p.table(), z2.table(), &to_z2));
/// assert!(is_homomorphism(p.table(), z3.table(), &to_z3));
/// ```
#[must_use]
pub fn product_projections(left: usize, right: usize) -> (Vec<usize>, Vec<usize>) {
    let n = left * right;
    (
        (0..n).map(|p| p / right).collect(),
        (0..n).map(|p| p % right).collect(),
    )
}

impl Magma {
    /// The direct product `self × other` with componentwise operation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DuplicateLabel`] if joined labels collide,
    /// which can happen when labels contain the delimiter.
    pub fn direct_product(&self, other: &Magma) -> Result<Magma> {
        let magma = Magma::from_parts(
            format!("{}_x_{}", self.name(), other.name()),
            format!("Direct product of {} and {}", self.name(), other.name()),
            product_elements(self, other)?,
            product_table(self.table(), other.table()),
        )?;
        Ok(magma.with_delimiter(self.delimiter().to_string()))
    }
}

impl Group {
    /// The direct product `self × other`; the identity pair is index 0.
    ///
    /// # Errors
    ///
    /// See [`Magma::direct_product`].
    pub fn direct_product(&self, other: &Group) -> Result<Group> {
        Group::from_monoid_table(self.magma().direct_product(other.magma())?)
    }
}

impl Ring {
    /// The direct product `self × other`, componentwise in both operations.
    ///
    /// # Errors
    ///
    /// See [`Magma::direct_product`].
    pub fn direct_product(&self, other: &Ring) -> Result<Ring> {
        let add = self.additive_group().direct_product(other.additive_group())?;
        let mult = product_table(self.mult_table(), other.mult_table());
        Ok(Ring::from_trusted(add, mult))
    }
}
