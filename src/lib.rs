//! # Finite Algebras
//!
//! Finite magmas, semigroups, monoids, groups, rings and fields defined by
//! Cayley tables, together with exact Gaussian integer arithmetic.
//!
//! ## Overview
//!
//! A finite algebra is a finite set of labelled elements with one or two
//! binary operations given as tables. This library provides:
//! - Validation of operation tables and classification into the strongest
//!   variant of the magma → semigroup → monoid → group → ring → field tower
//! - Structural algorithms: element orders, subgroups, normality, quotients,
//!   direct products, isomorphism search, zero divisors and ideals
//! - Canonical constructions: cyclic, symmetric and powerset groups, the
//!   integers mod n and finite fields from the Gaussian integers
//! - Gaussian integers ℤ[i] with Euclidean division, gcd and Bézout
//!   coefficients, and Gaussian rationals ℚ[i]
//! - Modules over finite rings and vector spaces over finite fields
//!
//! ## Quick Start
//!
//! The easiest way to create an algebra is with the builder:
//!
//! ```rust
//! use finite_algebras::{AlgebraBuilder, AlgebraKind};
//!
//! // Automatically selects the strongest variant
//! let v4 = AlgebraBuilder::new()
//!     .name("V4")
//!     .elements(["e", "h", "v", "r"])
//!     .table(vec![
//!         vec![0, 1, 2, 3],
//!         vec![1, 0, 3, 2],
//!         vec![2, 3, 0, 1],
//!         vec![3, 2, 1, 0],
//!     ])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(v4.kind(), AlgebraKind::Group);
//! assert_eq!(v4.inv(2), Some(2));
//! ```
//!
//! Or use a generator directly:
//!
//! ```rust
//! use finite_algebras::generate::{cyclic, symmetric};
//!
//! let s3 = symmetric(3).unwrap();
//! let rotations = s3
//!     .proper_subgroups()
//!     .into_iter()
//!     .find(|h| s3.is_normal(h).unwrap())
//!     .unwrap();
//! let quotient = s3.quotient(&rotations).unwrap();
//!
//! assert!(quotient.is_isomorphic(&cyclic(2).unwrap()));
//! ```
//!
//! ## Conventions
//!
//! - Elements are addressed by index; index 0 holds the identity of every
//!   monoid, group, ring and field.
//! - Every algebra is immutable; subgroups, quotients, products and
//!   reorderings are new values.
//! - Direct-product labels join the factor labels with a per-algebra
//!   delimiter, `":"` by default.
//!
//! ## Features
//!
//! - `serde` (default): JSON load/save of algebras
//! - `parallel`: Enable parallel isomorphism and subgroup search using rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod builder;
pub mod catalogue;
pub mod elements;
pub mod error;
pub mod gaussian;
pub mod generate;
#[cfg(feature = "serde")]
pub mod io;
pub mod perm;
pub mod table;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::algebra::{
        classify, make_finite_algebra, make_finite_algebra_with_reason, AlgebraKind,
        Classification, Field, FiniteAlgebra, Group, Magma, Module, Monoid, Ring, ScalarRing,
        Semigroup, VectorSpace,
    };
    pub use crate::builder::AlgebraBuilder;
    pub use crate::elements::Elements;
    pub use crate::error::{Error, Result};
    pub use crate::gaussian::{GaussianInt, GaussianRat};
    pub use crate::generate::{
        cyclic, gaussian_integers_mod, gaussian_residue_field, mod_n_ring, powerset_group,
        powerset_ring, symmetric,
    };
    pub use crate::perm::Permutation;
    pub use crate::table::{CayleyTable, TableInput};

    #[cfg(feature = "parallel")]
    pub use crate::parallel::{
        par_find_isomorphism, par_group_isomorphism, par_proper_subgroup_sets,
    };
}

// Re-export commonly used items at crate root
pub use algebra::{
    classify, find_isomorphism, is_homomorphism, make_finite_algebra,
    make_finite_algebra_with_reason, product_projections, AlgebraKind, Classification, Field,
    FiniteAlgebra, Group, Magma, Module, Monoid, Ring, Semigroup, VectorSpace, DEFAULT_DELIMITER,
};
pub use builder::AlgebraBuilder;
pub use catalogue::get_by_name as get_named_algebra;
pub use elements::Elements;
pub use error::{Error, Result};
pub use gaussian::{GaussianInt, GaussianRat};
pub use perm::Permutation;
pub use table::{CayleyTable, TableInput};

#[cfg(feature = "parallel")]
pub use parallel::{par_find_isomorphism, par_group_isomorphism, par_proper_subgroup_sets};
