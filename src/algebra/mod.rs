//! The finite algebra tower: magma, semigroup, monoid, group, ring, field.
//!
//! Each variant is its own type carrying exactly the invariants it has
//! validated. [`FiniteAlgebra`] is the tagged union returned by the
//! classifier; callers dispatch on [`FiniteAlgebra::kind`] or use the
//! capability methods, which return `None` when a variant lacks the
//! capability.
//!
//! ```
//! use finite_algebras::{make_finite_algebra, AlgebraKind};
//!
//! let z3 = make_finite_algebra(
//!     "Z3",
//!     "integers mod 3",
//!     ["0", "1", "2"],
//!     vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]],
//!     Some(vec![vec![0, 0, 0], vec![0, 1, 2], vec![0, 2, 1]]),
//! )
//! .unwrap();
//!
//! assert_eq!(z3.kind(), AlgebraKind::Field);
//! assert_eq!(z3.mult_inv(2), Some(2));
//! assert_eq!(z3.inv(1), Some(2));
//! ```

mod classify;
mod group;
mod iso;
mod magma;
mod module;
mod product;
mod ring;

use std::fmt;
use std::str::FromStr;

pub use classify::{classify, make_finite_algebra, make_finite_algebra_with_reason, Classification};
pub use group::Group;
pub use iso::{find_isomorphism, is_homomorphism};
#[cfg(feature = "parallel")]
pub(crate) use iso::IsoSearch;
pub use magma::{Magma, Monoid, Semigroup, DEFAULT_DELIMITER};
pub use module::{Module, ScalarRing, VectorSpace};
pub use product::product_projections;
pub use ring::{Field, Ring};

use crate::elements::Elements;
use crate::error::{Error, Result};
use crate::table::CayleyTable;

/// The variants of the tower, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlgebraKind {
    /// A set with one closed binary operation.
    Magma,
    /// An associative magma.
    Semigroup,
    /// A semigroup with identity.
    Monoid,
    /// A monoid with inverses.
    Group,
    /// An abelian group with a distributive associative multiplication.
    Ring,
    /// A commutative ring with unity whose non-zero elements are invertible.
    Field,
}

impl AlgebraKind {
    /// All variants, weakest first.
    pub const ALL: [AlgebraKind; 6] = [
        Self::Magma,
        Self::Semigroup,
        Self::Monoid,
        Self::Group,
        Self::Ring,
        Self::Field,
    ];

    /// The variant name as used in stored records.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Magma => "Magma",
            Self::Semigroup => "Semigroup",
            Self::Monoid => "Monoid",
            Self::Group => "Group",
            Self::Ring => "Ring",
            Self::Field => "Field",
        }
    }

    /// Check whether the variant has a second (multiplicative) table.
    #[must_use]
    pub fn has_mult_table(self) -> bool {
        self >= Self::Ring
    }
}

impl fmt::Display for AlgebraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgebraKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_params(format!("unknown algebra type {s:?}")))
    }
}

/// A finite algebra of any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiniteAlgebra {
    /// See [`Magma`].
    Magma(Magma),
    /// See [`Semigroup`].
    Semigroup(Semigroup),
    /// See [`Monoid`].
    Monoid(Monoid),
    /// See [`Group`].
    Group(Group),
    /// See [`Ring`].
    Ring(Ring),
    /// See [`Field`].
    Field(Field),
}

impl FiniteAlgebra {
    /// The variant tag.
    #[must_use]
    pub fn kind(&self) -> AlgebraKind {
        match self {
            Self::Magma(_) => AlgebraKind::Magma,
            Self::Semigroup(_) => AlgebraKind::Semigroup,
            Self::Monoid(_) => AlgebraKind::Monoid,
            Self::Group(_) => AlgebraKind::Group,
            Self::Ring(_) => AlgebraKind::Ring,
            Self::Field(_) => AlgebraKind::Field,
        }
    }

    /// The magma of the first (additive) operation.
    #[must_use]
    pub fn magma(&self) -> &Magma {
        match self {
            Self::Magma(m) => m,
            Self::Semigroup(s) => s.magma(),
            Self::Monoid(m) => m.magma(),
            Self::Group(g) => g.magma(),
            Self::Ring(r) => r.additive_group().magma(),
            Self::Field(f) => f.ring().additive_group().magma(),
        }
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.magma().name()
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.magma().description()
    }

    /// Get the element registry.
    #[must_use]
    pub fn elements(&self) -> &Elements {
        self.magma().elements()
    }

    /// Get the number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.magma().order()
    }

    /// The first operation table (`op_table`).
    #[must_use]
    pub fn op_table(&self) -> &CayleyTable {
        self.magma().table()
    }

    /// The multiplication table, for rings and fields.
    #[must_use]
    pub fn mult_table(&self) -> Option<&CayleyTable> {
        self.as_ring().map(Ring::mult_table)
    }

    /// Compute `a · b` (or `a + b` for rings) on indices.
    #[must_use]
    pub fn op(&self, a: usize, b: usize) -> usize {
        self.magma().op(a, b)
    }

    /// Compute `a × b` for rings and fields.
    #[must_use]
    pub fn mult(&self, a: usize, b: usize) -> Option<usize> {
        self.as_ring().map(|r| r.mult(a, b))
    }

    /// The identity of the first operation, if there is one.
    #[must_use]
    pub fn identity(&self) -> Option<usize> {
        match self {
            Self::Magma(_) | Self::Semigroup(_) => self.magma().identity(),
            _ => Some(0),
        }
    }

    /// The multiplicative identity of a ring with unity or a field.
    #[must_use]
    pub fn mult_identity(&self) -> Option<usize> {
        self.as_ring().and_then(Ring::one)
    }

    /// The inverse of `a` under the first operation.
    #[must_use]
    pub fn inv(&self, a: usize) -> Option<usize> {
        match self {
            Self::Magma(_) | Self::Semigroup(_) => None,
            Self::Monoid(m) => m.inverse(a),
            _ => self.as_group().map(|g| g.inv(a)),
        }
    }

    /// The multiplicative inverse of `a`, for rings and fields.
    #[must_use]
    pub fn mult_inv(&self, a: usize) -> Option<usize> {
        match self {
            Self::Field(f) => f.mult_inv(a),
            Self::Ring(r) => r.mult_inverse(a),
            _ => None,
        }
    }

    /// The (additive) group, when the variant has one.
    #[must_use]
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(g) => Some(g),
            Self::Ring(r) => Some(r.additive_group()),
            Self::Field(f) => Some(f.ring().additive_group()),
            _ => None,
        }
    }

    /// The ring, when the variant has one.
    #[must_use]
    pub fn as_ring(&self) -> Option<&Ring> {
        match self {
            Self::Ring(r) => Some(r),
            Self::Field(f) => Some(f.ring()),
            _ => None,
        }
    }

    /// The field, if this is one.
    #[must_use]
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Self::Field(f) => Some(f),
            _ => None,
        }
    }

    /// View this algebra as a weaker (or the same) variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if `kind` is stronger than this
    /// algebra's variant.
    pub fn into_kind(self, kind: AlgebraKind) -> Result<FiniteAlgebra> {
        let achieved = self.kind();
        if kind > achieved {
            return Err(Error::KindMismatch {
                declared: kind.to_string(),
                achieved: achieved.to_string(),
                reason: format!("a {achieved} cannot be viewed as a {kind}"),
            });
        }
        if kind == achieved {
            return Ok(self);
        }
        Ok(match kind {
            AlgebraKind::Magma => Self::Magma(self.magma().clone()),
            AlgebraKind::Semigroup => Self::Semigroup(Semigroup::from_magma(self.magma().clone())?),
            AlgebraKind::Monoid => Self::Monoid(Monoid::from_trusted(self.magma().clone())),
            AlgebraKind::Group => match self {
                Self::Ring(r) => Self::Group(r.into_additive_group()),
                Self::Field(f) => Self::Group(f.into_ring().into_additive_group()),
                other => other,
            },
            AlgebraKind::Ring => match self {
                Self::Field(f) => Self::Ring(f.into_ring()),
                other => other,
            },
            AlgebraKind::Field => self,
        })
    }

    /// The direct product with another algebra, classified.
    ///
    /// Two rings give a ring, two groups a group; anything weaker is
    /// classified from the product table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLabel`] if product labels collide.
    pub fn direct_product(&self, other: &FiniteAlgebra) -> Result<FiniteAlgebra> {
        if let (Some(a), Some(b)) = (self.as_ring(), other.as_ring()) {
            return a.direct_product(b).map(Self::Ring);
        }
        if let (Some(a), Some(b)) = (self.as_group(), other.as_group()) {
            return a.direct_product(b).map(Self::Group);
        }
        let product = self.magma().direct_product(other.magma())?;
        Ok(classify(product, None)?.algebra)
    }

    /// Find an isomorphism to an algebra of the same variant.
    ///
    /// Returns `map` with `map[a]` the index in `other` that `a` maps to.
    #[must_use]
    pub fn isomorphism(&self, other: &FiniteAlgebra) -> Option<Vec<usize>> {
        if self.kind() != other.kind() {
            return None;
        }
        match (self.as_ring(), other.as_ring()) {
            (Some(a), Some(b)) => a.isomorphism(b),
            _ => match (self.as_group(), other.as_group()) {
                (Some(a), Some(b)) => a.isomorphism(b),
                _ => self.magma().isomorphism(other.magma()),
            },
        }
    }
}

impl fmt::Display for FiniteAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Magma(m) => m.fmt(f),
            Self::Semigroup(s) => s.fmt(f),
            Self::Monoid(m) => m.fmt(f),
            Self::Group(g) => g.fmt(f),
            Self::Ring(r) => r.fmt(f),
            Self::Field(x) => x.fmt(f),
        }
    }
}

impl From<Magma> for FiniteAlgebra {
    fn from(m: Magma) -> Self {
        Self::Magma(m)
    }
}

impl From<Semigroup> for FiniteAlgebra {
    fn from(s: Semigroup) -> Self {
        Self::Semigroup(s)
    }
}

impl From<Monoid> for FiniteAlgebra {
    fn from(m: Monoid) -> Self {
        Self::Monoid(m)
    }
}

impl From<Group> for FiniteAlgebra {
    fn from(g: Group) -> Self {
        Self::Group(g)
    }
}

impl From<Ring> for FiniteAlgebra {
    fn from(r: Ring) -> Self {
        Self::Ring(r)
    }
}

impl From<Field> for FiniteAlgebra {
    fn from(f: Field) -> Self {
        Self::Field(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{cyclic, mod_n_ring, powerset_ring};

    #[test]
    fn test_kind_ordering_and_parse() {
        assert!(AlgebraKind::Magma < AlgebraKind::Field);
        assert!(AlgebraKind::Group < AlgebraKind::Ring);
        assert_eq!("group".parse::<AlgebraKind>().unwrap(), AlgebraKind::Group);
        assert_eq!(" Field ".parse::<AlgebraKind>().unwrap(), AlgebraKind::Field);
        assert!("lattice".parse::<AlgebraKind>().is_err());
        assert_eq!(AlgebraKind::Semigroup.to_string(), "Semigroup");
        assert!(AlgebraKind::Ring.has_mult_table());
        assert!(!AlgebraKind::Group.has_mult_table());
    }

    #[test]
    fn test_capabilities_by_variant() {
        let g: FiniteAlgebra = cyclic(4).unwrap().into();
        assert_eq!(g.kind(), AlgebraKind::Group);
        assert_eq!(g.inv(1), Some(3));
        assert_eq!(g.mult(1, 1), None);
        assert!(g.as_ring().is_none());

        let f: FiniteAlgebra = mod_n_ring(5).unwrap().to_field().unwrap().into();
        assert_eq!(f.kind(), AlgebraKind::Field);
        assert_eq!(f.mult(2, 3), Some(1));
        assert_eq!(f.mult_inv(2), Some(3));
        assert_eq!(f.mult_inv(0), None);
        assert_eq!(f.mult_identity(), Some(1));
        assert!(f.as_group().is_some());
    }

    #[test]
    fn test_into_kind() {
        let f: FiniteAlgebra = mod_n_ring(3).unwrap().to_field().unwrap().into();
        let g = f.clone().into_kind(AlgebraKind::Group).unwrap();
        assert_eq!(g.kind(), AlgebraKind::Group);
        assert_eq!(g.order(), 3);
        let m = f.into_kind(AlgebraKind::Monoid).unwrap();
        assert_eq!(m.kind(), AlgebraKind::Monoid);

        let r: FiniteAlgebra = powerset_ring(2).unwrap().into();
        assert!(matches!(
            r.into_kind(AlgebraKind::Field),
            Err(Error::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_direct_product_dispatch() {
        let z2: FiniteAlgebra = cyclic(2).unwrap().into();
        let z3: FiniteAlgebra = cyclic(3).unwrap().into();
        let p = z2.direct_product(&z3).unwrap();
        assert_eq!(p.kind(), AlgebraKind::Group);
        assert_eq!(p.order(), 6);

        let r2: FiniteAlgebra = mod_n_ring(2).unwrap().into();
        let rp = r2.direct_product(&r2).unwrap();
        assert_eq!(rp.kind(), AlgebraKind::Ring);
        assert_eq!(rp.order(), 4);
    }

    #[test]
    fn test_isomorphism_requires_same_kind() {
        let z2g: FiniteAlgebra = cyclic(2).unwrap().into();
        let z2r: FiniteAlgebra = mod_n_ring(2).unwrap().into();
        assert!(z2g.isomorphism(&z2r).is_none());
        assert_eq!(z2g.isomorphism(&z2g), Some(vec![0, 1]));
    }
}
