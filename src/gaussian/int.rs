//! Gaussian integers a + bi with a, b ∈ ℤ.

use std::fmt;

use num_traits::{One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{round_half_even, GaussianRat};
use crate::error::{Error, Result};
use crate::utils::is_prime;

/// A Gaussian integer `re + im·i`.
///
/// Components are `i64`; norms are computed in `i64` as well, so inputs
/// are expected to stay well below 2³¹ in magnitude. Division internals use
/// 128-bit intermediates.
///
/// # Example
///
/// ```
/// use finite_algebras::GaussianInt;
///
/// let (g, x, y) = GaussianInt::new(11, 3).xgcd(GaussianInt::new(1, 8)).unwrap();
/// assert_eq!(g, GaussianInt::new(1, -2));
/// assert_eq!(GaussianInt::new(11, 3) * x + GaussianInt::new(1, 8) * y, g);
/// assert_eq!(g.to_string(), "1-2i");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaussianInt {
    re: i64,
    im: i64,
}

impl GaussianInt {
    /// Zero.
    pub const ZERO: Self = Self::new(0, 0);
    /// One.
    pub const ONE: Self = Self::new(1, 0);
    /// The imaginary unit.
    pub const I: Self = Self::new(0, 1);

    /// Create `re + im·i`.
    #[must_use]
    pub const fn new(re: i64, im: i64) -> Self {
        Self { re, im }
    }

    /// The real part.
    #[must_use]
    pub fn re(self) -> i64 {
        self.re
    }

    /// The imaginary part.
    #[must_use]
    pub fn im(self) -> i64 {
        self.im
    }

    /// The norm `re² + im²`.
    #[must_use]
    pub fn norm(self) -> i64 {
        self.re * self.re + self.im * self.im
    }

    /// The complex conjugate.
    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// The four units: 1, −1, i, −i.
    #[must_use]
    pub fn units() -> [Self; 4] {
        [Self::ONE, -Self::ONE, Self::I, -Self::I]
    }

    /// Check whether this is a unit (norm 1).
    #[must_use]
    pub fn is_unit(self) -> bool {
        self.norm() == 1
    }

    /// The associates `u·z` for the units u, excluding `z` itself.
    #[must_use]
    pub fn associates(self) -> Vec<Self> {
        Self::units()
            .into_iter()
            .map(|u| u * self)
            .filter(|&w| w != self)
            .collect()
    }

    /// Check whether `self = u·other` for a unit u.
    #[must_use]
    pub fn is_associate(self, other: Self) -> bool {
        !other.is_zero() && Self::units().into_iter().any(|u| u * other == self)
    }

    /// Compute `self^exp` by repeated squaring.
    #[must_use]
    pub fn pow(self, mut exp: u32) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }
        result
    }

    /// Modified division: `q` rounds `self / b` componentwise (ties to
    /// even) and `r = self − b·q`, so that `N(r) ≤ N(b)/2`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDivision`] if `b` is zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn mod_divmod(self, b: Self) -> Result<(Self, Self)> {
        if b.is_zero() {
            return Err(Error::ZeroDivision);
        }
        let (ar, ai) = (i128::from(self.re), i128::from(self.im));
        let (br, bi) = (i128::from(b.re), i128::from(b.im));
        let n = br * br + bi * bi;
        // self · conj(b)
        let x = ar * br + ai * bi;
        let y = ai * br - ar * bi;
        let q = Self::new(round_half_even(x, n) as i64, round_half_even(y, n) as i64);
        Ok((q, self - b * q))
    }

    /// The rounded quotient of [`GaussianInt::mod_divmod`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDivision`] if `b` is zero.
    pub fn checked_div(self, b: Self) -> Result<Self> {
        self.mod_divmod(b).map(|(q, _)| q)
    }

    /// The remainder of [`GaussianInt::mod_divmod`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDivision`] if `b` is zero.
    pub fn checked_rem(self, b: Self) -> Result<Self> {
        self.mod_divmod(b).map(|(_, r)| r)
    }

    /// Exact division into ℚ[i].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDivision`] if `b` is zero.
    pub fn div_exact(self, b: Self) -> Result<GaussianRat> {
        GaussianRat::from(self).checked_div(GaussianRat::from(b))
    }

    /// Check whether `self` divides `other` in ℤ[i].
    #[must_use]
    pub fn divides(self, other: Self) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }
        let n = self.norm();
        let p = other * self.conj();
        p.re % n == 0 && p.im % n == 0
    }

    /// Greatest common divisor by the Euclidean algorithm.
    ///
    /// The result is determined up to a unit; no normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroGcd`] if either operand is zero.
    pub fn gcd(self, other: Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Err(Error::ZeroGcd);
        }
        let (mut a, mut b) = (self, other);
        while !b.is_zero() {
            let r = a.checked_rem(b)?;
            a = b;
            b = r;
        }
        Ok(a)
    }

    /// Extended gcd: `(g, x, y)` with `g = self·x + other·y`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroGcd`] if either operand is zero.
    pub fn xgcd(self, other: Self) -> Result<(Self, Self, Self)> {
        if self.is_zero() || other.is_zero() {
            return Err(Error::ZeroGcd);
        }
        let (mut old_r, mut r) = (self, other);
        let (mut old_s, mut s) = (Self::ONE, Self::ZERO);
        let (mut old_t, mut t) = (Self::ZERO, Self::ONE);
        while !r.is_zero() {
            let q = old_r.checked_div(r)?;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
            (old_t, t) = (t, old_t - q * t);
        }
        Ok((old_r, old_s, old_t))
    }

    /// Check whether the gcd with `other` is a unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroGcd`] if either operand is zero.
    pub fn is_relatively_prime(self, other: Self) -> Result<bool> {
        self.gcd(other).map(Self::is_unit)
    }

    /// Check whether `self ≡ other (mod m)`.
    #[must_use]
    pub fn congruent_mod(self, other: Self, m: Self) -> bool {
        m.divides(self - other)
    }

    /// Gaussian primality.
    ///
    /// `a + bi` with a·b ≠ 0 is prime iff its norm is a rational prime;
    /// `a` or `bi` alone is prime iff |a| (or |b|) is a rational prime
    /// congruent to 3 mod 4.
    #[must_use]
    pub fn is_gaussian_prime(self) -> bool {
        let prime_3_mod_4 = |x: i64| {
            let x = x.unsigned_abs();
            x % 4 == 3 && is_prime(x)
        };
        match (self.re, self.im) {
            (0, b) => prime_3_mod_4(b),
            (a, 0) => prime_3_mod_4(a),
            _ => is_prime(self.norm().unsigned_abs()),
        }
    }
}

impl fmt::Display for GaussianInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let imag = |b: i64| match b {
            1 => "i".to_string(),
            -1 => "-i".to_string(),
            b => format!("{b}i"),
        };
        match (self.re, self.im) {
            (a, 0) => write!(f, "{a}"),
            (0, b) => f.write_str(&imag(b)),
            (a, b) if b > 0 => write!(f, "{a}+{}", imag(b)),
            (a, b) => write!(f, "{a}{}", imag(b)),
        }
    }
}

impl From<i64> for GaussianInt {
    fn from(re: i64) -> Self {
        Self::new(re, 0)
    }
}

impl From<(i64, i64)> for GaussianInt {
    fn from((re, im): (i64, i64)) -> Self {
        Self::new(re, im)
    }
}

impl Zero for GaussianInt {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0 && self.im == 0
    }
}

impl One for GaussianInt {
    fn one() -> Self {
        Self::ONE
    }
}

// Implement standard operators
impl std::ops::Add for GaussianInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl std::ops::Sub for GaussianInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl std::ops::Mul for GaussianInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl std::ops::Mul<GaussianInt> for i64 {
    type Output = GaussianInt;

    fn mul(self, rhs: GaussianInt) -> Self::Output {
        GaussianInt::new(self * rhs.re, self * rhs.im)
    }
}

impl std::ops::Neg for GaussianInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

/// Rounded division; see [`GaussianInt::mod_divmod`].
///
/// # Panics
///
/// Panics on division by zero, like integer division.
impl std::ops::Div for GaussianInt {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(_) => panic!("attempt to divide a Gaussian integer by zero"),
        }
    }
}

/// Remainder of the rounded division; see [`GaussianInt::mod_divmod`].
///
/// # Panics
///
/// Panics on division by zero, like integer remainder.
impl std::ops::Rem for GaussianInt {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(r) => r,
            Err(_) => panic!("attempt to take a Gaussian remainder with a divisor of zero"),
        }
    }
}

impl std::ops::AddAssign for GaussianInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for GaussianInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::MulAssign for GaussianInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(re: i64, im: i64) -> GaussianInt {
        GaussianInt::new(re, im)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(g(1, 2) + g(3, -1), g(4, 1));
        assert_eq!(g(1, 2) - g(3, -1), g(-2, 3));
        assert_eq!(g(1, 2) * g(3, -1), g(5, 5));
        assert_eq!(-g(1, -2), g(-1, 2));
        assert_eq!(GaussianInt::I * GaussianInt::I, -GaussianInt::ONE);
        assert_eq!(3 * g(1, -1), g(3, -3));
        assert_eq!(g(1, 1).pow(4), g(-4, 0));
        assert_eq!(g(2, 3).pow(0), GaussianInt::ONE);

        let mut z = g(1, 1);
        z *= g(1, -1);
        z += g(0, 1);
        z -= g(1, 0);
        assert_eq!(z, g(1, 1));
    }

    #[test]
    fn test_norm_conj_units() {
        assert_eq!(g(3, -4).norm(), 25);
        assert_eq!(g(3, -4).conj(), g(3, 4));
        assert_eq!(g(3, 4) * g(3, 4).conj(), g(25, 0));
        for u in GaussianInt::units() {
            assert!(u.is_unit());
        }
        assert!(!g(1, 1).is_unit());
    }

    #[test]
    fn test_associates() {
        let z = g(2, 1);
        let assoc = z.associates();
        assert_eq!(assoc.len(), 3);
        assert!(assoc.contains(&g(-2, -1)));
        assert!(assoc.contains(&g(-1, 2)));
        assert!(assoc.contains(&g(1, -2)));
        assert!(g(1, -2).is_associate(z));
        assert!(!g(2, -1).is_associate(z));
        assert!(!z.is_associate(GaussianInt::ZERO));
    }

    #[test]
    fn test_mod_divmod_scenario() {
        let (q, r) = g(4, 5).mod_divmod(g(1, -2)).unwrap();
        assert_eq!(q, g(-1, 3));
        assert_eq!(r, g(-1, 0));
        assert_eq!(r.norm(), 1);
        assert_eq!(g(4, 5) / g(1, -2), g(-1, 3));
        assert_eq!(g(4, 5) % g(1, -2), g(-1, 0));
    }

    #[test]
    fn test_division_ties_to_even() {
        // (1+8i)/(2-4i) = -1.5 + i, rounds to -2 + i
        assert_eq!(g(1, 8).checked_div(g(2, -4)).unwrap(), g(-2, 1));
        // 1/2 and 3/2 round to 0 and 2
        assert_eq!(g(1, 3).checked_div(g(2, 0)).unwrap(), g(0, 2));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(g(1, 1).mod_divmod(GaussianInt::ZERO), Err(Error::ZeroDivision));
        assert_eq!(g(1, 1).div_exact(GaussianInt::ZERO), Err(Error::ZeroDivision));
    }

    #[test]
    fn test_gcd_scenario() {
        let d = g(32, 9).gcd(g(4, 11)).unwrap();
        assert_eq!(d, g(0, -1));
        assert!(d.is_unit());
        assert!(g(32, 9).is_relatively_prime(g(4, 11)).unwrap());
        assert_eq!(g(0, 0).gcd(g(1, 0)), Err(Error::ZeroGcd));
        assert_eq!(g(1, 0).xgcd(g(0, 0)), Err(Error::ZeroGcd));
    }

    #[test]
    fn test_gcd_common_factor() {
        let p = g(2, 1);
        let a = p * g(3, -2);
        let b = p * g(1, 4);
        let d = a.gcd(b).unwrap();
        assert!(p.divides(d));
        assert!(d.divides(a) && d.divides(b));
    }

    #[test]
    fn test_xgcd_scenario() {
        let (a, b) = (g(11, 3), g(1, 8));
        let (d, x, y) = a.xgcd(b).unwrap();
        assert_eq!((d, x, y), (g(1, -2), g(2, -1), g(0, 3)));
        assert_eq!(a * x + b * y, d);
        assert!(d.divides(a) && d.divides(b));
    }

    #[test]
    fn test_divides_and_congruence() {
        assert!(g(1, 1).divides(g(2, 0)));
        assert!(!g(1, 1).divides(g(1, 0)));
        assert!(GaussianInt::ZERO.divides(GaussianInt::ZERO));
        assert!(!GaussianInt::ZERO.divides(g(1, 0)));
        assert!(g(5, 2).congruent_mod(g(2, 2), g(3, 0)));
        assert!(!g(5, 2).congruent_mod(g(2, 1), g(3, 0)));
    }

    #[test]
    fn test_gaussian_primes() {
        for p in [g(1, 1), g(2, 1), g(1, 2), g(3, 0), g(0, 7), g(-3, 0), g(0, -11), g(4, 5)] {
            assert!(p.is_gaussian_prime(), "{p} should be prime");
        }
        for c in [g(0, 0), g(1, 0), g(0, 1), g(2, 0), g(5, 0), g(3, 3), g(0, 13), g(4, 6)] {
            assert!(!c.is_gaussian_prime(), "{c} should be composite");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(g(0, 0).to_string(), "0");
        assert_eq!(g(-3, 0).to_string(), "-3");
        assert_eq!(g(0, 1).to_string(), "i");
        assert_eq!(g(0, -1).to_string(), "-i");
        assert_eq!(g(0, 4).to_string(), "4i");
        assert_eq!(g(2, 1).to_string(), "2+i");
        assert_eq!(g(2, -1).to_string(), "2-i");
        assert_eq!(g(-1, 3).to_string(), "-1+3i");
        assert_eq!(g(1, -2).to_string(), "1-2i");
    }

    #[test]
    fn test_div_exact() {
        let q = g(1, 0).div_exact(g(1, 1)).unwrap();
        assert_eq!(q * GaussianRat::from(g(1, 1)), GaussianRat::from(g(1, 0)));
        assert_eq!(g(4, 2).div_exact(g(2, 0)).unwrap().to_gaussian_int(), Some(g(2, 1)));
    }
}
