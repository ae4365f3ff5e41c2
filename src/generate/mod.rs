//! Canonical constructions of small algebras.
//!
//! Every generator returns a fully validated value with the identity at
//! index 0 and a fixed, documented element order:
//!
//! | Generator | Algebra | Order | Labels |
//! |-----------|---------|-------|--------|
//! | [`cyclic`] | Group Zₙ | n | `e`, `a`, `a^2`, … |
//! | [`symmetric`] | Group Sₙ | n! | one-line permutations `(0, 2, 1)`, lexicographic |
//! | [`powerset_group`] | Group (P(S), Δ) | 2ⁿ | `{}`, `{0}`, …, `{0, 1}`, … |
//! | [`powerset_ring`] | Ring (P(S), Δ, ∩) | 2ⁿ | as above |
//! | [`mod_n_ring`] | Ring ℤ/nℤ | n | `0`, `1`, … |
//! | [`gaussian_integers_mod`] | Ring ℤ[i]/nℤ[i] | n² | `0`, `i`, …, `1`, `1+i`, … |
//!
//! ## Example
//!
//! ```
//! use finite_algebras::generate::{cyclic, mod_n_ring};
//!
//! let z4 = cyclic(4).unwrap();
//! assert_eq!(z4.order_of(1), 4);
//! assert_eq!(z4.label(3), "a^3");
//!
//! let f5 = mod_n_ring(5).unwrap().to_field().unwrap();
//! assert_eq!(f5.mult_inv(2), Some(3));
//! ```

mod gaussian;

pub use gaussian::{gaussian_integers_mod, gaussian_residue_field};

use std::collections::HashMap;

use tracing::debug;

use crate::algebra::{Group, Magma, Ring};
use crate::elements::Elements;
use crate::error::{Error, Result};
use crate::perm::Permutation;
use crate::table::CayleyTable;
use crate::utils::factorial;

/// Largest order accepted by [`cyclic`] and [`mod_n_ring`] (a 1024×1024
/// table).
pub const MAX_MODULUS: usize = 1024;

/// Largest n accepted by [`symmetric`] (|S₆| = 720).
pub const MAX_SYMMETRIC_DEGREE: usize = 6;

/// Largest n accepted by the powerset generators (2¹⁰ = 1024 elements).
pub const MAX_POWERSET_SIZE: usize = 10;

/// The cyclic group Zₙ, `aⁱ · aʲ = aⁱ⁺ʲ mod n`.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] unless `1 <= n <= 1024`.
pub fn cyclic(n: usize) -> Result<Group> {
    if n == 0 || n > MAX_MODULUS {
        return Err(Error::invalid_params(format!(
            "cyclic group order must be in 1..={MAX_MODULUS}, got {n}"
        )));
    }
    let labels = (0..n).map(|k| match k {
        0 => "e".to_string(),
        1 => "a".to_string(),
        _ => format!("a^{k}"),
    });
    let table = CayleyTable::from_fn(n, |i, j| (i + j) % n);
    let magma = Magma::from_parts(
        format!("Z{n}"),
        format!("Cyclic group of order {n}"),
        Elements::new(labels)?,
        table,
    )?;
    Group::from_monoid_table(magma)
}

/// The symmetric group Sₙ of all permutations of `{0, …, n−1}`.
///
/// Elements are listed in lexicographic order of their one-line notation,
/// so the identity comes first. The product of row `p` and column `q` is
/// `p ∘ q`: apply `q` first, then `p`.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] unless `1 <= n <= 6`.
pub fn symmetric(n: usize) -> Result<Group> {
    if n == 0 || n > MAX_SYMMETRIC_DEGREE {
        return Err(Error::invalid_params(format!(
            "symmetric group degree must be in 1..={MAX_SYMMETRIC_DEGREE}, got {n}"
        )));
    }
    let order = factorial(n as u64)
        .and_then(|f| usize::try_from(f).ok())
        .ok_or_else(|| Error::invalid_params(format!("{n}! does not fit in usize")))?;
    let mut perms: Vec<Permutation> = Vec::with_capacity(order);
    perms.extend(Permutation::all(n, 0));
    let index: HashMap<&[usize], usize> = perms
        .iter()
        .enumerate()
        .map(|(k, p)| (p.images(), k))
        .collect();

    let mut rows = Vec::with_capacity(order);
    for p in &perms {
        let row = perms
            .iter()
            .map(|q| {
                let pq = p.compose(q)?;
                index
                    .get(pq.images())
                    .copied()
                    .ok_or_else(|| Error::InvalidPermutation(pq.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }
    debug!(degree = n, order, "built symmetric group");

    let magma = Magma::from_parts(
        format!("S{n}"),
        format!("Symmetric group on {n} letters"),
        Elements::new(perms.iter().map(ToString::to_string))?,
        CayleyTable::new(rows)?,
    )?;
    Group::from_monoid_table(magma)
}

/// Subsets of `{0, …, n−1}` as bitmasks, ordered by size and then
/// lexicographically by their sorted members.
fn subsets(n: usize) -> Vec<u32> {
    let members = |mask: u32| -> Vec<usize> { (0..n).filter(|&b| mask & (1 << b) != 0).collect() };
    let mut masks: Vec<u32> = (0..1u32 << n).collect();
    masks.sort_by_cached_key(|&m| (m.count_ones(), members(m)));
    masks
}

fn subset_label(mask: u32, n: usize) -> String {
    let members: Vec<String> = (0..n)
        .filter(|&b| mask & (1 << b) != 0)
        .map(|b| b.to_string())
        .collect();
    format!("{{{}}}", members.join(", "))
}

/// Masks, labels and the mask-to-index map for the powerset of n.
fn powerset_parts(n: usize) -> Result<(Vec<u32>, Elements, HashMap<u32, usize>)> {
    if n > MAX_POWERSET_SIZE {
        return Err(Error::invalid_params(format!(
            "powerset base size must be at most {MAX_POWERSET_SIZE}, got {n}"
        )));
    }
    let masks = subsets(n);
    let position = masks.iter().enumerate().map(|(k, &m)| (m, k)).collect();
    let elements = Elements::new(masks.iter().map(|&m| subset_label(m, n)))?;
    Ok((masks, elements, position))
}

fn mask_table(masks: &[u32], position: &HashMap<u32, usize>, f: impl Fn(u32, u32) -> u32) -> CayleyTable {
    CayleyTable::from_fn(masks.len(), |i, j| position[&f(masks[i], masks[j])])
}

/// The powerset of `{0, …, n−1}` under symmetric difference, an elementary
/// abelian 2-group of order 2ⁿ with identity `{}`.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] for `n > 10`.
pub fn powerset_group(n: usize) -> Result<Group> {
    let (masks, elements, position) = powerset_parts(n)?;
    let table = mask_table(&masks, &position, |a, b| a ^ b);
    let magma = Magma::from_parts(
        format!("PS{n}"),
        format!("Powerset of {n} elements under symmetric difference"),
        elements,
        table,
    )?;
    Group::from_monoid_table(magma)
}

/// The Boolean ring on the powerset of `{0, …, n−1}`: symmetric difference
/// as addition and intersection as multiplication. Its one is the full set.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] for `n > 10`.
pub fn powerset_ring(n: usize) -> Result<Ring> {
    let (masks, elements, position) = powerset_parts(n)?;
    let add = mask_table(&masks, &position, |a, b| a ^ b);
    let mult = mask_table(&masks, &position, |a, b| a & b);
    let magma = Magma::from_parts(
        format!("PR{n}"),
        format!("Boolean ring on the powerset of {n} elements"),
        elements,
        add,
    )?;
    Ok(Ring::from_trusted(Group::from_monoid_table(magma)?, mult))
}

/// The integers modulo n; a field exactly when n is prime.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] unless `1 <= n <= 1024`.
pub fn mod_n_ring(n: usize) -> Result<Ring> {
    if n == 0 || n > MAX_MODULUS {
        return Err(Error::invalid_params(format!(
            "modulus must be in 1..={MAX_MODULUS}, got {n}"
        )));
    }
    let magma = Magma::from_parts(
        format!("R{n}"),
        format!("Integers modulo {n}"),
        Elements::new((0..n).map(|k| k.to_string()))?,
        CayleyTable::from_fn(n, |i, j| (i + j) % n),
    )?;
    let mult = CayleyTable::from_fn(n, |i, j| (i * j) % n);
    Ok(Ring::from_trusted(Group::from_monoid_table(magma)?, mult))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic() {
        let z5 = cyclic(5).unwrap();
        assert_eq!(z5.name(), "Z5");
        assert_eq!(z5.elements().as_slice(), &["e", "a", "a^2", "a^3", "a^4"]);
        assert_eq!(z5.op(3, 4), 2);
        assert_eq!(z5.inv(2), 3);
        assert_eq!(cyclic(1).unwrap().order(), 1);
        assert!(matches!(cyclic(0), Err(Error::InvalidParams(_))));
    }

    #[test]
    fn test_symmetric_three() {
        let s3 = symmetric(3).unwrap();
        assert_eq!(s3.order(), 6);
        assert_eq!(s3.label(0), "(0, 1, 2)");
        assert_eq!(s3.label(3), "(1, 2, 0)");
        assert!(!s3.is_abelian());
        // (1, 2, 0) ∘ (0, 2, 1) = (1, 0, 2)
        assert_eq!(s3.magma().apply("(1, 2, 0)", "(0, 2, 1)").unwrap(), "(1, 0, 2)");
        let orders = s3.element_orders();
        assert_eq!(orders, vec![1, 2, 2, 3, 3, 2]);
    }

    #[test]
    fn test_symmetric_bounds() {
        assert_eq!(symmetric(1).unwrap().order(), 1);
        assert_eq!(symmetric(4).unwrap().order(), 24);
        assert!(symmetric(0).is_err());
        assert!(symmetric(7).is_err());
    }

    #[test]
    fn test_powerset_order() {
        let ps = powerset_group(3).unwrap();
        assert_eq!(
            ps.elements().as_slice(),
            &["{}", "{0}", "{1}", "{2}", "{0, 1}", "{0, 2}", "{1, 2}", "{0, 1, 2}"]
        );
        assert!(ps.is_abelian());
        assert!(ps.element_orders().iter().skip(1).all(|&k| k == 2));
        // {0, 1} Δ {1, 2} = {0, 2}
        assert_eq!(ps.op(4, 6), 5);
        assert!(powerset_group(11).is_err());
        assert_eq!(powerset_group(0).unwrap().order(), 1);
    }

    #[test]
    fn test_powerset_ring() {
        let pr = powerset_ring(2).unwrap();
        assert_eq!(pr.one(), Some(3));
        // {0} ∩ {1} = {}
        assert_eq!(pr.mult(1, 2), 0);
        assert!(pr.is_commutative());
        // the multiplication must pass the full ring checks
        let checked = Ring::from_group(pr.additive_group().clone(), pr.mult_table().clone());
        assert!(checked.is_ok());
    }

    #[test]
    fn test_mod_n_ring() {
        let r = mod_n_ring(5).unwrap();
        assert_eq!(r.name(), "R5");
        assert_eq!(r.mult(3, 4), 2);
        assert!(r.is_field());
        assert!(!mod_n_ring(4).unwrap().is_field());
        assert!(mod_n_ring(0).is_err());
    }

    #[test]
    fn test_modulus_bound() {
        assert_eq!(mod_n_ring(MAX_MODULUS).unwrap().order(), MAX_MODULUS);
        assert!(matches!(
            mod_n_ring(MAX_MODULUS + 1),
            Err(Error::InvalidParams(_))
        ));
        assert!(matches!(mod_n_ring(100_000), Err(Error::InvalidParams(_))));
        assert!(matches!(
            cyclic(MAX_MODULUS + 1),
            Err(Error::InvalidParams(_))
        ));
    }
}
