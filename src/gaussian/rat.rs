//! Gaussian rationals a + bi with a, b ∈ ℚ.

use std::fmt;

use num_rational::Rational64;
use num_traits::{One, Zero};

use super::GaussianInt;
use crate::error::{Error, Result};

/// A Gaussian rational `re + im·i` with exact `Rational64` components.
///
/// # Example
///
/// ```
/// use finite_algebras::{GaussianInt, GaussianRat};
///
/// let z = GaussianRat::from(GaussianInt::new(1, 1));
/// let inv = z.inverse().unwrap();
/// assert_eq!(inv.to_string(), "1/2-1/2i");
/// assert_eq!(z * inv, GaussianRat::from(GaussianInt::ONE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GaussianRat {
    re: Rational64,
    im: Rational64,
}

impl GaussianRat {
    /// Create `re + im·i`.
    #[must_use]
    pub fn new(re: Rational64, im: Rational64) -> Self {
        Self { re, im }
    }

    /// Create `(re_num/re_den) + (im_num/im_den)·i`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDivision`] if a denominator is zero.
    pub fn from_fractions(re_num: i64, re_den: i64, im_num: i64, im_den: i64) -> Result<Self> {
        if re_den == 0 || im_den == 0 {
            return Err(Error::ZeroDivision);
        }
        Ok(Self::new(
            Rational64::new(re_num, re_den),
            Rational64::new(im_num, im_den),
        ))
    }

    /// The real part.
    #[must_use]
    pub fn re(self) -> Rational64 {
        self.re
    }

    /// The imaginary part.
    #[must_use]
    pub fn im(self) -> Rational64 {
        self.im
    }

    /// The norm `re² + im²`.
    #[must_use]
    pub fn norm(self) -> Rational64 {
        self.re * self.re + self.im * self.im
    }

    /// The complex conjugate.
    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// The multiplicative inverse `conj(z) / N(z)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDivision`] for zero.
    pub fn inverse(self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::ZeroDivision);
        }
        let n = self.norm();
        Ok(Self::new(self.re / n, -self.im / n))
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDivision`] if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs.inverse()?)
    }

    /// Compute `self^exp`; negative exponents go through the inverse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDivision`] for zero raised to a negative power.
    pub fn pow(self, exp: i32) -> Result<Self> {
        let base = if exp < 0 { self.inverse()? } else { self };
        let mut e = exp.unsigned_abs();
        let mut result = Self::one();
        let mut b = base;
        while e > 0 {
            if e & 1 == 1 {
                result = result * b;
            }
            b = b * b;
            e >>= 1;
        }
        Ok(result)
    }

    /// Convert back to ℤ[i] when both components are integers.
    #[must_use]
    pub fn to_gaussian_int(self) -> Option<GaussianInt> {
        (self.re.is_integer() && self.im.is_integer())
            .then(|| GaussianInt::new(self.re.to_integer(), self.im.to_integer()))
    }
}

impl fmt::Display for GaussianRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zero = Rational64::zero();
        let one = Rational64::one();
        let imag = |b: Rational64| {
            if b == one {
                "i".to_string()
            } else if b == -one {
                "-i".to_string()
            } else {
                format!("{b}i")
            }
        };
        if self.im == zero {
            write!(f, "{}", self.re)
        } else if self.re == zero {
            f.write_str(&imag(self.im))
        } else if self.im > zero {
            write!(f, "{}+{}", self.re, imag(self.im))
        } else {
            write!(f, "{}{}", self.re, imag(self.im))
        }
    }
}

impl From<GaussianInt> for GaussianRat {
    fn from(z: GaussianInt) -> Self {
        Self::new(Rational64::from_integer(z.re()), Rational64::from_integer(z.im()))
    }
}

impl From<Rational64> for GaussianRat {
    fn from(re: Rational64) -> Self {
        Self::new(re, Rational64::zero())
    }
}

impl Zero for GaussianRat {
    fn zero() -> Self {
        Self::new(Rational64::zero(), Rational64::zero())
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl One for GaussianRat {
    fn one() -> Self {
        Self::new(Rational64::one(), Rational64::zero())
    }
}

// Implement standard operators
impl std::ops::Add for GaussianRat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl std::ops::Sub for GaussianRat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl std::ops::Mul for GaussianRat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Exact division.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl std::ops::Div for GaussianRat {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(_) => panic!("attempt to divide a Gaussian rational by zero"),
        }
    }
}

impl std::ops::Neg for GaussianRat {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(a: i64, b: i64, c: i64, d: i64) -> GaussianRat {
        GaussianRat::from_fractions(a, b, c, d).unwrap()
    }

    #[test]
    fn test_field_operations() {
        let a = q(1, 2, 1, 3);
        let b = q(2, 1, -1, 4);
        assert_eq!(a + b, q(5, 2, 1, 12));
        assert_eq!(a - b, q(-3, 2, 7, 12));
        // (1/2 + i/3)(2 - i/4) = 1 + 1/12 + (2/3 - 1/8)i
        assert_eq!(a * b, q(13, 12, 13, 24));
        assert_eq!((a / b) * b, a);
        assert_eq!(-a, q(-1, 2, -1, 3));
    }

    #[test]
    fn test_inverse() {
        let z = q(3, 1, 4, 1);
        let inv = z.inverse().unwrap();
        assert_eq!(inv, q(3, 25, -4, 25));
        assert_eq!(z * inv, GaussianRat::one());
        assert_eq!(GaussianRat::zero().inverse(), Err(Error::ZeroDivision));
        assert!(GaussianRat::from_fractions(1, 0, 0, 1).is_err());
    }

    #[test]
    fn test_norm_conj() {
        let z = q(1, 2, -1, 2);
        assert_eq!(z.norm(), Rational64::new(1, 2));
        assert_eq!(z.conj(), q(1, 2, 1, 2));
    }

    #[test]
    fn test_pow() {
        let i = GaussianRat::from(GaussianInt::I);
        assert_eq!(i.pow(2).unwrap(), -GaussianRat::one());
        assert_eq!(i.pow(-1).unwrap(), -i);
        assert_eq!(q(2, 1, 0, 1).pow(-2).unwrap(), q(1, 4, 0, 1));
        assert_eq!(i.pow(0).unwrap(), GaussianRat::one());
        assert_eq!(GaussianRat::zero().pow(-1), Err(Error::ZeroDivision));
    }

    #[test]
    fn test_promotion_round_trip() {
        let z = GaussianInt::new(-3, 7);
        assert_eq!(GaussianRat::from(z).to_gaussian_int(), Some(z));
        assert_eq!(q(1, 2, 0, 1).to_gaussian_int(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(q(1, 2, 0, 1).to_string(), "1/2");
        assert_eq!(q(0, 1, 1, 1).to_string(), "i");
        assert_eq!(q(0, 1, -3, 4).to_string(), "-3/4i");
        assert_eq!(q(2, 1, -1, 1).to_string(), "2-i");
        assert_eq!(q(-1, 3, 5, 2).to_string(), "-1/3+5/2i");
    }
}
