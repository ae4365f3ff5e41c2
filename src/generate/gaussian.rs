//! Finite rings and fields built from the Gaussian integers.

use tracing::debug;

use super::mod_n_ring;
use crate::algebra::{Field, Group, Magma, Ring};
use crate::elements::Elements;
use crate::error::{Error, Result};
use crate::gaussian::GaussianInt;
use crate::table::CayleyTable;
use crate::utils::is_prime;

/// Largest modulus accepted by [`gaussian_integers_mod`] (32² = 1024 elements).
pub const MAX_GAUSSIAN_MODULUS: usize = 32;

/// The ring ℤ[i]/nℤ[i] of Gaussian integers modulo a rational integer.
///
/// The element at index `a·n + b` is the residue of `a + bi` with
/// `0 <= a, b < n`, labelled by its Gaussian integer form (`0`, `1`, `i`,
/// `1+i`, `2i`, …). The ring is a field exactly when n is a rational prime
/// congruent to 3 mod 4.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] unless `2 <= n <= 32`.
///
/// # Example
///
/// ```
/// use finite_algebras::generate::gaussian_integers_mod;
///
/// let f9 = gaussian_integers_mod(3).unwrap();
/// assert_eq!(f9.order(), 9);
/// assert!(f9.is_field());
/// assert!(!gaussian_integers_mod(5).unwrap().is_field());
/// ```
pub fn gaussian_integers_mod(n: usize) -> Result<Ring> {
    if !(2..=MAX_GAUSSIAN_MODULUS).contains(&n) {
        return Err(Error::invalid_params(format!(
            "Gaussian modulus must be in 2..={MAX_GAUSSIAN_MODULUS}, got {n}"
        )));
    }
    let order = n * n;
    let split = |x: usize| (x / n, x % n);
    let join = |re: usize, im: usize| (re % n) * n + im % n;

    let labels = (0..order).map(|x| {
        let (a, b) = split(x);
        // a, b < 32
        GaussianInt::new(a as i64, b as i64).to_string()
    });
    let add = CayleyTable::from_fn(order, |x, y| {
        let ((a, b), (c, d)) = (split(x), split(y));
        join(a + c, b + d)
    });
    let mult = CayleyTable::from_fn(order, |x, y| {
        let ((a, b), (c, d)) = (split(x), split(y));
        // ac − bd taken mod n without leaving usize
        join(a * c + (n - 1) * (b * d % n), a * d + b * c)
    });

    let magma = Magma::from_parts(
        format!("Z{n}[i]"),
        format!("Gaussian integers modulo {n}"),
        Elements::new(labels)?,
        add,
    )?;
    Ok(Ring::from_trusted(Group::from_monoid_table(magma)?, mult))
}

/// The residue field ℤ[i]/(π) of a Gaussian prime π.
///
/// When π is an associate of a rational prime p (so p ≡ 3 mod 4) the field
/// has p² elements and is [`gaussian_integers_mod`]`(p)`. Otherwise N(π) is
/// a rational prime p, every residue has an integer representative, and
/// the field is the integers modulo p.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] if π is not a Gaussian prime or the
/// field would be too large to tabulate.
///
/// # Example
///
/// ```
/// use finite_algebras::{generate::gaussian_residue_field, GaussianInt};
///
/// assert_eq!(gaussian_residue_field(GaussianInt::new(2, 1)).unwrap().order(), 5);
/// assert_eq!(gaussian_residue_field(GaussianInt::new(0, 3)).unwrap().order(), 9);
/// assert!(gaussian_residue_field(GaussianInt::new(5, 0)).is_err());
/// ```
pub fn gaussian_residue_field(pi: GaussianInt) -> Result<Field> {
    if !pi.is_gaussian_prime() {
        return Err(Error::invalid_params(format!("{pi} is not a Gaussian prime")));
    }
    let name = format!("Z[i]/({pi})");
    let inert = pi.re() == 0 || pi.im() == 0;
    let ring = if inert {
        let p = usize::try_from(pi.re().unsigned_abs().max(pi.im().unsigned_abs()))
            .map_err(|_| Error::invalid_params(format!("{pi} is too large")))?;
        gaussian_integers_mod(p)?
    } else {
        let norm = pi.norm();
        debug_assert!(norm > 0 && is_prime(norm.unsigned_abs()));
        let p = usize::try_from(norm)
            .ok()
            .filter(|&p| p <= MAX_GAUSSIAN_MODULUS * MAX_GAUSSIAN_MODULUS)
            .ok_or_else(|| Error::invalid_params(format!("N({pi}) = {norm} is too large")))?;
        mod_n_ring(p)?
    };
    debug!(%pi, order = ring.order(), inert, "built Gaussian residue field");
    ring.with_name(name).to_field()
}
