//! Rational primality testing.
//!
//! Gaussian primality reduces to primality of rational integers (norms and
//! the absolute values of pure real or imaginary parts), so this module
//! provides a deterministic Miller-Rabin test over `u64`.

use super::mod_pow;

/// Test if a number is prime using the Miller-Rabin primality test.
///
/// Deterministic for every `u64`: the first twelve primes are a complete
/// witness set below 3.3 * 10^24.
///
/// # Examples
///
/// ```
/// use finite_algebras::utils::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(3));
/// assert!(!is_prime(4));
/// assert!(is_prime(7));
/// assert!(!is_prime(9));
/// assert!(is_prime(97));
/// assert!(!is_prime(100));
/// ```
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    if n < 9 {
        return true;
    }
    if n % 3 == 0 {
        return false;
    }

    let witnesses: &[u64] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    // Write n-1 as 2^r * d where d is odd
    let n_minus_1 = n - 1;
    let r = n_minus_1.trailing_zeros();
    let d = n_minus_1 >> r;

    'witness: for &a in witnesses {
        if a >= n {
            continue;
        }

        let mut x = mod_pow(a, d, n);

        if x == 1 || x == n_minus_1 {
            continue 'witness;
        }

        for _ in 0..(r - 1) {
            x = mod_pow(x, 2, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}
