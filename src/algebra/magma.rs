//! Single-operation algebras below groups: magmas, semigroups and monoids.

use std::fmt;

use super::AlgebraKind;
use crate::elements::Elements;
use crate::error::{Error, Result};
use crate::table::{check_permutation, registry_for, CayleyTable, TableInput};

/// Default delimiter joining component labels of direct-product elements.
pub const DEFAULT_DELIMITER: &str = ":";

/// A finite set closed under one binary operation.
///
/// A magma owns its element registry and Cayley table. It is immutable once
/// constructed; every derived structure (subalgebras, reorderings, products)
/// is a fresh value.
///
/// # Example
///
/// ```
/// use finite_algebras::Magma;
///
/// let rps = Magma::new(
///     "RPS",
///     "Rock, paper, scissors",
///     ["r", "p", "s"],
///     vec![vec!["r", "p", "r"], vec!["p", "p", "s"], vec!["r", "s", "s"]],
/// )
/// .unwrap();
///
/// assert_eq!(rps.apply("r", "s").unwrap(), "r");
/// assert!(!rps.is_associative());
/// ```
#[derive(Debug, Clone)]
pub struct Magma {
    name: String,
    description: String,
    elements: Elements,
    table: CayleyTable,
    delimiter: String,
}

impl Magma {
    /// Create a magma from element labels and an index or label table.
    ///
    /// When `elements` is empty and the table is written with labels, the
    /// first row of the table defines the element order.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate labels, unknown labels in a label
    /// table, a non-square table, out-of-range entries, or a size mismatch
    /// between the labels and the table.
    pub fn new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: impl Into<TableInput>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = table.into();
        let labels: Vec<String> = elements.into_iter().map(Into::into).collect();
        let elements = registry_for(labels, &table)?;
        let table = table.resolve(&elements)?;
        Self::from_parts(name, description, elements, table)
    }

    /// Create a magma from an already validated registry and table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the registry and table disagree.
    pub fn from_parts(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: Elements,
        table: CayleyTable,
    ) -> Result<Self> {
        elements.check_order(table.order())?;
        Ok(Self {
            name: name.into(),
            description: description.into(),
            elements,
            table,
            delimiter: DEFAULT_DELIMITER.to_string(),
        })
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the element registry.
    #[must_use]
    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Get the number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.table.order()
    }

    /// Get the operation table.
    #[must_use]
    pub fn table(&self) -> &CayleyTable {
        &self.table
    }

    /// Get the delimiter used for direct-product labels.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Replace the direct-product label delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Replace the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Compute `a · b` on indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn op(&self, a: usize, b: usize) -> usize {
        self.table.get(a, b)
    }

    /// Get the label of an index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        &self.elements[index]
    }

    /// Find the index of a label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if the label is not an element.
    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.elements.require(label)
    }

    /// Compute `a · b` on labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if either label is not an element.
    pub fn apply(&self, a: &str, b: &str) -> Result<&str> {
        let ab = self.op(self.index_of(a)?, self.index_of(b)?);
        Ok(self.label(ab))
    }

    /// Check whether the operation is associative.
    #[must_use]
    pub fn is_associative(&self) -> bool {
        self.table.is_associative()
    }

    /// Check whether the operation is commutative.
    #[must_use]
    pub fn is_commutative(&self) -> bool {
        self.table.is_commutative()
    }

    /// The index of the two-sided identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<usize> {
        self.table.identity()
    }

    /// The strongest single-table variant this magma satisfies.
    #[must_use]
    pub fn kind(&self) -> AlgebraKind {
        if !self.is_associative() {
            AlgebraKind::Magma
        } else if let Some(id) = self.identity() {
            if self.table.inverse_lookup(id).len() == self.order() {
                AlgebraKind::Group
            } else {
                AlgebraKind::Monoid
            }
        } else {
            AlgebraKind::Semigroup
        }
    }

    /// Extract the sub-magma on a closed subset of indices.
    ///
    /// Indices are sorted into parent order and deduplicated; the result is
    /// re-indexed to {0, …, m−1} and owns its own table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubalgebra`] if the subset is empty, out of range,
    /// or not closed under the operation.
    pub fn subalgebra(&self, indices: &[usize]) -> Result<Magma> {
        let subset = self.normalize_subset(indices)?;
        let table = self.table.restricted(&subset).ok_or_else(|| {
            Error::not_subalgebra(format!(
                "{} is not closed under the operation",
                self.elements.describe(&subset)
            ))
        })?;
        let magma = Self::from_parts(
            format!("{}_sub", self.name),
            format!("Subalgebra of {}", self.name),
            self.elements.subset(&subset),
            table,
        )?;
        Ok(magma.with_delimiter(self.delimiter.clone()))
    }

    /// Produce an equivalent magma with elements in a new order.
    ///
    /// `order[k]` is the index (in this magma) of the element placed at
    /// position k of the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPermutation`] if `order` is not a permutation
    /// of the element indices.
    pub fn reorder(&self, order: &[usize]) -> Result<Magma> {
        check_permutation(order, self.order())?;
        Ok(Self {
            name: self.name.clone(),
            description: self.description.clone(),
            elements: self.elements.permuted(order),
            table: self.table.permuted(order),
            delimiter: self.delimiter.clone(),
        })
    }

    /// Produce an equivalent magma with elements in the given label order.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown labels or if the labels are not a
    /// permutation of the elements.
    pub fn reorder_by_labels<S: AsRef<str>>(&self, labels: &[S]) -> Result<Magma> {
        let order = labels
            .iter()
            .map(|l| self.index_of(l.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.reorder(&order)
    }

    /// Sort, deduplicate and range-check a subset of indices.
    pub(crate) fn normalize_subset(&self, indices: &[usize]) -> Result<Vec<usize>> {
        let mut subset = indices.to_vec();
        subset.sort_unstable();
        subset.dedup();
        if subset.is_empty() {
            return Err(Error::not_subalgebra("subset is empty"));
        }
        if let Some(&bad) = subset.iter().find(|&&i| i >= self.order()) {
            return Err(Error::not_subalgebra(format!(
                "index {bad} out of range for order {}",
                self.order()
            )));
        }
        Ok(subset)
    }

    /// Fail with the first associativity witness, labelled.
    pub(crate) fn check_associative(&self) -> Result<()> {
        match self.table.associativity_witness() {
            None => Ok(()),
            Some((a, b, c)) => Err(Error::Associativity {
                a: self.label(a).to_string(),
                b: self.label(b).to_string(),
                c: self.label(c).to_string(),
            }),
        }
    }

    /// Fail with the first commutativity witness, labelled.
    pub(crate) fn check_commutative(&self) -> Result<()> {
        match self.table.commutativity_witness() {
            None => Ok(()),
            Some((a, b)) => Err(Error::NonCommutative {
                a: self.label(a).to_string(),
                b: self.label(b).to_string(),
            }),
        }
    }

    /// Swap in a new table over the same elements.
    pub(crate) fn with_table(&self, table: CayleyTable) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            elements: self.elements.clone(),
            table,
            delimiter: self.delimiter.clone(),
        }
    }
}

/// Order placing `id` first and keeping the others in their current order.
pub(crate) fn identity_first(n: usize, id: usize) -> Vec<usize> {
    std::iter::once(id).chain((0..n).filter(|&i| i != id)).collect()
}

/// `a^k` for k ≥ 1 by square-and-multiply; valid in any associative table.
pub(crate) fn power(table: &CayleyTable, a: usize, k: u64) -> usize {
    debug_assert!(k >= 1);
    let mut result = a;
    let mut base = a;
    let mut e = k - 1;
    while e > 0 {
        if e & 1 == 1 {
            result = table.get(result, base);
        }
        base = table.get(base, base);
        e >>= 1;
    }
    result
}

impl PartialEq for Magma {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.elements == other.elements
            && self.table == other.table
    }
}

impl Eq for Magma {}

impl fmt::Display for Magma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magma {:?} of order {}", self.name, self.order())
    }
}

/// An associative magma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semigroup {
    magma: Magma,
}

impl Semigroup {
    /// Create a semigroup from element labels and a table.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Magma::new`], or [`Error::Associativity`]
    /// with a witness triple.
    pub fn new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: impl Into<TableInput>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_magma(Magma::new(name, description, elements, table)?)
    }

    /// Promote a magma whose operation is associative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Associativity`] with a witness triple.
    pub fn from_magma(magma: Magma) -> Result<Self> {
        magma.check_associative()?;
        Ok(Self { magma })
    }

    /// Get the underlying magma.
    #[must_use]
    pub fn magma(&self) -> &Magma {
        &self.magma
    }

    /// Consume and return the underlying magma.
    #[must_use]
    pub fn into_magma(self) -> Magma {
        self.magma
    }

    /// Compute `a^k` for k ≥ 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] for k = 0, which needs an identity.
    pub fn pow(&self, a: usize, k: u64) -> Result<usize> {
        if k == 0 {
            return Err(Error::invalid_params("a semigroup has no zeroth power"));
        }
        Ok(power(self.magma.table(), a, k))
    }
}

impl fmt::Display for Semigroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Semigroup {:?} of order {}",
            self.magma.name(),
            self.magma.order()
        )
    }
}

/// A semigroup with a two-sided identity, stored at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monoid {
    magma: Magma,
}

impl Monoid {
    /// Create a monoid from element labels and a table.
    ///
    /// If the identity is not the first element it is moved to the front,
    /// keeping the other elements in order.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Semigroup::new`], or [`Error::NoIdentity`].
    pub fn new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: impl Into<TableInput>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_magma(Magma::new(name, description, elements, table)?)
    }

    /// Promote an associative magma with identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Associativity`] or [`Error::NoIdentity`].
    pub fn from_magma(magma: Magma) -> Result<Self> {
        magma.check_associative()?;
        let id = magma.identity().ok_or(Error::NoIdentity)?;
        let magma = if id == 0 {
            magma
        } else {
            magma.reorder(&identity_first(magma.order(), id))?
        };
        Ok(Self { magma })
    }

    /// Wrap a magma already known to be a monoid with identity at 0.
    pub(crate) fn from_trusted(magma: Magma) -> Self {
        Self { magma }
    }

    /// Get the underlying magma.
    #[must_use]
    pub fn magma(&self) -> &Magma {
        &self.magma
    }

    /// Consume and return the underlying magma.
    #[must_use]
    pub fn into_magma(self) -> Magma {
        self.magma
    }

    /// The identity index (always 0).
    #[must_use]
    pub fn identity(&self) -> usize {
        0
    }

    /// Compute `a^k`, with `a^0` the identity.
    #[must_use]
    pub fn pow(&self, a: usize, k: u64) -> usize {
        if k == 0 {
            0
        } else {
            power(self.magma.table(), a, k)
        }
    }

    /// The two-sided inverse of `a`, if it has one.
    #[must_use]
    pub fn inverse(&self, a: usize) -> Option<usize> {
        let t = self.magma.table();
        (0..self.magma.order()).find(|&y| t.get(a, y) == 0 && t.get(y, a) == 0)
    }

    /// Indices of the invertible elements, in order.
    #[must_use]
    pub fn units(&self) -> Vec<usize> {
        self.magma.table().inverse_lookup(0).into_keys().collect()
    }
}

impl fmt::Display for Monoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monoid {:?} of order {}",
            self.magma.name(),
            self.magma.order()
        )
    }
}
