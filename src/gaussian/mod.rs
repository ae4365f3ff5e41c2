//! Gaussian integers ℤ[i] and Gaussian rationals ℚ[i].
//!
//! ## Division in ℤ[i]
//!
//! ℤ[i] is Euclidean under the norm N(a+bi) = a² + b². Division rounds the
//! exact complex quotient componentwise to the nearest integer, with ties
//! going to the even integer, so the remainder always satisfies
//! N(r) ≤ N(b)/2. That bound drives [`GaussianInt::gcd`] and
//! [`GaussianInt::xgcd`] to termination.
//!
//! Exact division lands in ℚ[i], where every non-zero element is invertible.
//!
//! ```
//! use finite_algebras::GaussianInt;
//!
//! let a = GaussianInt::new(4, 5);
//! let b = GaussianInt::new(1, -2);
//! let (q, r) = a.mod_divmod(b).unwrap();
//! assert_eq!(q, GaussianInt::new(-1, 3));
//! assert_eq!(r, GaussianInt::new(-1, 0));
//! assert!(2 * r.norm() <= b.norm());
//! ```

mod int;
mod rat;

pub use int::GaussianInt;
pub use rat::GaussianRat;

/// Round `num / den` to the nearest integer, ties to even. `den` must be
/// positive.
pub(crate) fn round_half_even(num: i128, den: i128) -> i128 {
    debug_assert!(den > 0);
    let q = num.div_euclid(den);
    let r = num.rem_euclid(den);
    match (2 * r).cmp(&den) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => q + (q & 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(7, 5), 1);
        assert_eq!(round_half_even(8, 5), 2);
        assert_eq!(round_half_even(-6, 5), -1);
        assert_eq!(round_half_even(13, 5), 3);
        // ties
        assert_eq!(round_half_even(1, 2), 0);
        assert_eq!(round_half_even(3, 2), 2);
        assert_eq!(round_half_even(5, 2), 2);
        assert_eq!(round_half_even(-1, 2), 0);
        assert_eq!(round_half_even(-3, 2), -2);
        assert_eq!(round_half_even(-30, 20), -2);
    }
}
