//! Catalogue of small named algebras.
//!
//! This module gives access to the standard constructions by their common
//! short names, which is convenient for examples, tests and interactive use.

use crate::algebra::{FiniteAlgebra, Group};
use crate::error::{Error, Result};
use crate::generate::{
    cyclic, gaussian_integers_mod, mod_n_ring, powerset_group, powerset_ring, symmetric,
};
use crate::utils::is_prime;

/// The Klein four-group, `{e, h, v, r}` with every element its own inverse.
///
/// # Errors
///
/// Never fails; the table is a valid group table.
pub fn klein_four() -> Result<Group> {
    Group::new(
        "V4",
        "Klein four-group",
        ["e", "h", "v", "r"],
        vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 3, 2],
            vec![2, 3, 0, 1],
            vec![3, 2, 1, 0],
        ],
    )
}

fn parse_order(name: &str, digits: &str) -> Result<usize> {
    digits
        .parse()
        .map_err(|_| Error::invalid_params(format!("Unknown algebra: {name}")))
}

/// The finite field of order q, for q prime or q = p² with p ≡ 3 (mod 4).
fn field_of_order(q: usize) -> Result<FiniteAlgebra> {
    if is_prime(q as u64) {
        let field = mod_n_ring(q)?.with_name(format!("F{q}")).to_field()?;
        return Ok(field.into());
    }
    let p = (2..=q).take_while(|p| p * p <= q).find(|p| p * p == q);
    match p {
        Some(p) if is_prime(p as u64) && p % 4 == 3 => {
            let field = gaussian_integers_mod(p)?.with_name(format!("F{q}")).to_field()?;
            Ok(field.into())
        }
        _ => Err(Error::invalid_params(format!(
            "no field of order {q} in the catalogue"
        ))),
    }
}

/// Retrieve an algebra by its short name.
///
/// Names are case-insensitive:
/// - **Z<n>**: cyclic group of order n
/// - **S<n>**: symmetric group on n letters (n ≤ 6)
/// - **V4**: Klein four-group
/// - **PS<n>**: powerset group of an n-set under symmetric difference
/// - **PR<n>**: Boolean ring on the powerset of an n-set
/// - **R<n>**: integers modulo n as a ring
/// - **Z<n>[i]**: Gaussian integers modulo n as a ring
/// - **F<q>**: field of order q, for q prime, or q = p² with p ≡ 3 (mod 4)
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] for an unknown name or unsupported size.
///
/// # Example
///
/// ```
/// use finite_algebras::{catalogue::get_by_name, AlgebraKind};
///
/// let s3 = get_by_name("S3").unwrap();
/// assert_eq!(s3.kind(), AlgebraKind::Group);
/// assert_eq!(s3.order(), 6);
///
/// let f9 = get_by_name("f9").unwrap();
/// assert_eq!(f9.kind(), AlgebraKind::Field);
/// ```
pub fn get_by_name(name: &str) -> Result<FiniteAlgebra> {
    let key = name.trim().to_uppercase();
    if key == "V4" {
        return Ok(klein_four()?.into());
    }
    if let Some(n) = key.strip_prefix('Z').and_then(|rest| rest.strip_suffix("[I]")) {
        return Ok(gaussian_integers_mod(parse_order(name, n)?)?.into());
    }
    if let Some(n) = key.strip_prefix("PS") {
        return Ok(powerset_group(parse_order(name, n)?)?.into());
    }
    if let Some(n) = key.strip_prefix("PR") {
        return Ok(powerset_ring(parse_order(name, n)?)?.into());
    }
    let mut chars = key.chars();
    let prefix = chars.next();
    let n = parse_order(name, chars.as_str())?;
    match prefix {
        Some('Z') => Ok(cyclic(n)?.into()),
        Some('S') => Ok(symmetric(n)?.into()),
        Some('R') => Ok(mod_n_ring(n)?.into()),
        Some('F') => field_of_order(n),
        _ => Err(Error::invalid_params(format!("Unknown algebra: {name}"))),
    }
}

/// List representative names accepted by [`get_by_name`].
pub fn list_named_algebras() -> Vec<&'static str> {
    vec![
        "Z2", "Z3", "Z4", "Z6", "Z12", "V4", "S3", "S4", "PS2", "PS3", "PR2", "PR3", "R4", "R6",
        "F2", "F3", "F5", "F7", "F9", "Z2[i]", "Z3[i]",
    ]
}
