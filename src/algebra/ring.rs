//! Rings and fields: an abelian group with a second, distributive operation.

use std::fmt;

use super::group::Group;
use super::magma::{identity_first, Magma};
use crate::elements::Elements;
use crate::error::{Error, Result};
use crate::table::{registry_for, CayleyTable, TableInput};

/// A finite ring: an abelian group under addition with an associative
/// multiplication that distributes over addition on both sides.
///
/// The additive identity (zero) is index 0. A multiplicative identity is
/// optional and reported by [`Ring::one`].
///
/// # Example
///
/// ```
/// use finite_algebras::Ring;
///
/// let z4 = Ring::new(
///     "Z4",
///     "integers mod 4",
///     ["0", "1", "2", "3"],
///     vec![vec![0, 1, 2, 3], vec![1, 2, 3, 0], vec![2, 3, 0, 1], vec![3, 0, 1, 2]],
///     vec![vec![0, 0, 0, 0], vec![0, 1, 2, 3], vec![0, 2, 0, 2], vec![0, 3, 2, 1]],
/// )
/// .unwrap();
///
/// assert_eq!(z4.one(), Some(1));
/// assert_eq!(z4.zero_divisors(), vec![2]);
/// assert!(z4.to_field().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    add: Group,
    mult: CayleyTable,
    one: Option<usize>,
}

impl Ring {
    /// Create a ring from element labels and addition/multiplication tables.
    ///
    /// # Errors
    ///
    /// Returns the table and registry errors of [`Magma::new`],
    /// [`Error::SizeMismatch`] if the tables differ in order, the group errors
    /// of [`Group::from_magma`] for the addition, [`Error::NonCommutative`]
    /// if addition is not abelian, [`Error::Associativity`] for the
    /// multiplication, or [`Error::Distributivity`].
    pub fn new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        add_table: impl Into<TableInput>,
        mult_table: impl Into<TableInput>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let add_table = add_table.into();
        let labels: Vec<String> = elements.into_iter().map(Into::into).collect();
        let elements = registry_for(labels, &add_table)?;
        let add = add_table.resolve(&elements)?;
        let mult = Into::<TableInput>::into(mult_table).resolve(&elements)?;
        Self::from_tables(name, description, elements, add, mult)
    }

    /// Create a ring from a registry and two index tables.
    ///
    /// An additive identity found away from index 0 is moved to the front in
    /// both tables.
    ///
    /// # Errors
    ///
    /// See [`Ring::new`].
    pub fn from_tables(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: Elements,
        add: CayleyTable,
        mult: CayleyTable,
    ) -> Result<Self> {
        if mult.order() != add.order() {
            return Err(Error::SizeMismatch {
                elements: add.order(),
                order: mult.order(),
            });
        }
        let magma = Magma::from_parts(name, description, elements, add)?;
        let (magma, mult) = match magma.identity() {
            Some(id) if id != 0 => {
                let order = identity_first(magma.order(), id);
                (magma.reorder(&order)?, mult.permuted(&order))
            }
            _ => (magma, mult),
        };
        Self::from_group(Group::from_magma(magma)?, mult)
    }

    /// Pair an additive group with a multiplication table over its elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`], [`Error::NonCommutative`],
    /// [`Error::Associativity`] or [`Error::Distributivity`].
    pub fn from_group(add: Group, mult: CayleyTable) -> Result<Self> {
        if mult.order() != add.order() {
            return Err(Error::SizeMismatch {
                elements: add.order(),
                order: mult.order(),
            });
        }
        add.magma().check_commutative()?;
        add.magma().with_table(mult.clone()).check_associative()?;
        if let Some(fail) = mult.distributivity_failure(add.table()) {
            return Err(Error::Distributivity {
                side: fail.side,
                a: add.label(fail.a).to_string(),
                b: add.label(fail.b).to_string(),
                c: add.label(fail.c).to_string(),
            });
        }
        Ok(Self::from_trusted(add, mult))
    }

    /// Wrap tables whose ring axioms hold by construction.
    pub(crate) fn from_trusted(add: Group, mult: CayleyTable) -> Self {
        let one = mult.identity();
        Self { add, mult, one }
    }

    /// The additive group.
    #[must_use]
    pub fn additive_group(&self) -> &Group {
        &self.add
    }

    /// Consume and return the additive group.
    #[must_use]
    pub fn into_additive_group(self) -> Group {
        self.add
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.add.name()
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.add.magma().description()
    }

    /// Get the element registry.
    #[must_use]
    pub fn elements(&self) -> &Elements {
        self.add.elements()
    }

    /// Get the number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.add.order()
    }

    /// Get the addition table.
    #[must_use]
    pub fn add_table(&self) -> &CayleyTable {
        self.add.table()
    }

    /// Get the multiplication table.
    #[must_use]
    pub fn mult_table(&self) -> &CayleyTable {
        &self.mult
    }

    /// Get the label of an index.
    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        self.add.label(index)
    }

    /// Find the index of a label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if the label is not an element.
    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.add.index_of(label)
    }

    /// Replace the name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            add: self.add.with_name(name),
            ..self
        }
    }

    /// Replace the direct-product label delimiter.
    #[must_use]
    pub fn with_delimiter(self, delimiter: impl Into<String>) -> Self {
        Self {
            add: self.add.with_delimiter(delimiter),
            ..self
        }
    }

    /// The additive identity (always 0).
    #[must_use]
    pub fn zero(&self) -> usize {
        0
    }

    /// The multiplicative identity, if the ring has one.
    #[must_use]
    pub fn one(&self) -> Option<usize> {
        self.one
    }

    /// Check whether the ring has a multiplicative identity.
    #[must_use]
    pub fn has_mult_identity(&self) -> bool {
        self.one.is_some()
    }

    /// Compute `a + b`.
    #[must_use]
    pub fn add(&self, a: usize, b: usize) -> usize {
        self.add.op(a, b)
    }

    /// Compute `−a`.
    #[must_use]
    pub fn neg(&self, a: usize) -> usize {
        self.add.inv(a)
    }

    /// Compute `a − b`.
    #[must_use]
    pub fn sub(&self, a: usize, b: usize) -> usize {
        self.add(a, self.neg(b))
    }

    /// Compute `a × b`.
    #[must_use]
    pub fn mult(&self, a: usize, b: usize) -> usize {
        self.mult.get(a, b)
    }

    /// Compute `a × b` on labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if either label is not an element.
    pub fn apply_mult(&self, a: &str, b: &str) -> Result<&str> {
        let ab = self.mult(self.index_of(a)?, self.index_of(b)?);
        Ok(self.label(ab))
    }

    /// Check whether multiplication is commutative.
    #[must_use]
    pub fn is_commutative(&self) -> bool {
        self.mult.is_commutative()
    }

    /// The multiplicative inverse of `a`, when the ring has a one and `a` is
    /// a unit.
    #[must_use]
    pub fn mult_inverse(&self, a: usize) -> Option<usize> {
        let one = self.one?;
        (0..self.order()).find(|&y| self.mult(a, y) == one && self.mult(y, a) == one)
    }

    /// Indices of the multiplicative units, in order.
    #[must_use]
    pub fn units(&self) -> Vec<usize> {
        match self.one {
            Some(one) => self.mult.inverse_lookup(one).into_keys().collect(),
            None => Vec::new(),
        }
    }

    /// Non-zero `x` with some non-zero `y` such that `x × y = 0`.
    #[must_use]
    pub fn zero_divisors(&self) -> Vec<usize> {
        let n = self.order();
        (1..n)
            .filter(|&x| (1..n).any(|y| self.mult(x, y) == 0))
            .collect()
    }

    /// Check whether the ring has zero divisors.
    #[must_use]
    pub fn has_zero_divisors(&self) -> bool {
        !self.zero_divisors().is_empty()
    }

    /// Check whether a subset is a two-sided ideal: an additive subgroup
    /// absorbing multiplication from both sides.
    #[must_use]
    pub fn is_ideal(&self, indices: &[usize]) -> bool {
        let Ok(subset) = self.add.magma().normalize_subset(indices) else {
            return false;
        };
        if self.add.closure(&subset) != subset {
            return false;
        }
        let mut inside = vec![false; self.order()];
        for &x in &subset {
            inside[x] = true;
        }
        (0..self.order()).all(|r| {
            subset
                .iter()
                .all(|&i| inside[self.mult(r, i)] && inside[self.mult(i, r)])
        })
    }

    /// The quotient ring R/I by a two-sided ideal given as indices.
    ///
    /// Elements are the additive cosets, ordered by smallest member.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubalgebra`] if the subset is not an ideal.
    pub fn quotient(&self, ideal: &[usize]) -> Result<Ring> {
        let subset = self.add.magma().normalize_subset(ideal)?;
        if !self.is_ideal(&subset) {
            return Err(Error::not_subalgebra(format!(
                "{} is not an ideal of {}",
                self.elements().describe(&subset),
                self.name()
            )));
        }
        let add = self.add.quotient_by(&subset)?;

        let cosets = self.add.left_cosets(&subset);
        let mut coset_of = vec![0; self.order()];
        for (i, coset) in cosets.iter().enumerate() {
            for &x in coset {
                coset_of[x] = i;
            }
        }
        let mult = CayleyTable::from_fn(cosets.len(), |i, j| {
            coset_of[self.mult(cosets[i][0], cosets[j][0])]
        });
        Ok(Self::from_trusted(add, mult))
    }

    /// Check whether the field axioms hold.
    #[must_use]
    pub fn is_field(&self) -> bool {
        self.clone().to_field().is_ok()
    }

    /// Upgrade to a field.
    ///
    /// # Errors
    ///
    /// See [`Field::from_ring`].
    pub fn to_field(self) -> Result<Field> {
        Field::from_ring(self)
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring {:?} of order {}", self.name(), self.order())
    }
}

/// A finite field: a commutative ring with unity in which every non-zero
/// element has a multiplicative inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    ring: Ring,
    one: usize,
    inverses: Vec<Option<usize>>,
}

impl Field {
    /// Create a field from element labels and addition/multiplication tables.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Ring::new`] and [`Field::from_ring`].
    pub fn new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        add_table: impl Into<TableInput>,
        mult_table: impl Into<TableInput>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_ring(Ring::new(name, description, elements, add_table, mult_table)?)
    }

    /// Promote a ring satisfying the field axioms.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] for a ring with fewer than two
    /// elements, [`Error::NonCommutative`] if multiplication is not
    /// commutative, [`Error::NoIdentity`] without a multiplicative identity,
    /// or [`Error::NoInverse`] for the first non-invertible non-zero element.
    pub fn from_ring(ring: Ring) -> Result<Self> {
        if ring.order() < 2 {
            return Err(Error::invalid_params("a field needs at least two elements"));
        }
        ring.additive_group()
            .magma()
            .with_table(ring.mult_table().clone())
            .check_commutative()?;
        let one = ring.one().ok_or(Error::NoIdentity)?;

        let lookup = ring.mult_table().inverse_lookup(one);
        let mut inverses = vec![None; ring.order()];
        for (x, slot) in inverses.iter_mut().enumerate().skip(1) {
            match lookup.get(&x) {
                Some(&y) => *slot = Some(y),
                None => return Err(Error::NoInverse(ring.label(x).to_string())),
            }
        }
        Ok(Self {
            ring,
            one,
            inverses,
        })
    }

    /// The underlying ring.
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Consume and return the underlying ring.
    #[must_use]
    pub fn into_ring(self) -> Ring {
        self.ring
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.ring.name()
    }

    /// Get the number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.ring.order()
    }

    /// Get the label of an index.
    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        self.ring.label(index)
    }

    /// The additive identity (always 0).
    #[must_use]
    pub fn zero(&self) -> usize {
        0
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one(&self) -> usize {
        self.one
    }

    /// Compute `a + b`.
    #[must_use]
    pub fn add(&self, a: usize, b: usize) -> usize {
        self.ring.add(a, b)
    }

    /// Compute `a × b`.
    #[must_use]
    pub fn mult(&self, a: usize, b: usize) -> usize {
        self.ring.mult(a, b)
    }

    /// The multiplicative inverse of `a`; `None` for zero.
    #[must_use]
    pub fn mult_inv(&self, a: usize) -> Option<usize> {
        self.inverses.get(a).copied().flatten()
    }

    /// Compute `a / b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDivision`] if `b` is zero.
    pub fn div(&self, a: usize, b: usize) -> Result<usize> {
        let inv = self.mult_inv(b).ok_or(Error::ZeroDivision)?;
        Ok(self.mult(a, inv))
    }

    /// The additive order of one: the characteristic, a prime.
    #[must_use]
    pub fn characteristic(&self) -> usize {
        self.ring.additive_group().order_of(self.one)
    }

    /// The non-zero elements as a group under multiplication, with one at
    /// index 0.
    ///
    /// # Errors
    ///
    /// Never fails for a valid field; the error type is shared with
    /// [`Group::from_magma`].
    pub fn mult_group(&self) -> Result<Group> {
        let nonzero: Vec<usize> = (1..self.order()).collect();
        let magma = self
            .ring
            .additive_group()
            .magma()
            .with_table(self.ring.mult_table().clone())
            .subalgebra(&nonzero)?
            .with_name(format!("{}*", self.name()))
            .with_description(format!("Multiplicative group of {}", self.name()));
        Group::from_magma(magma)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field {:?} of order {}", self.name(), self.order())
    }
}
