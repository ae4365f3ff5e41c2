//! Utility functions for primality testing and permutation enumeration.
//!
//! This module provides the integer helpers used throughout the library,
//! particularly rational primality for Gaussian prime tests and the
//! lexicographic permutation walk behind symmetric groups and isomorphism
//! search.

mod primality;

pub use primality::is_prime;

/// Compute the power of a base modulo a modulus using binary exponentiation.
///
/// Computes `base^exp mod modulus` in O(log exp) multiplications, using
/// 128-bit intermediates so that any `u64` modulus is safe.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// # Examples
///
/// ```
/// use finite_algebras::utils::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);  // 2^10 = 1024, 1024 mod 1000 = 24
/// assert_eq!(mod_pow(3, 5, 7), 5);       // 3^5 = 243, 243 mod 7 = 5
/// ```
#[must_use]
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");

    if modulus == 1 {
        return 0;
    }

    let m = u128::from(modulus);
    let mut result = 1u128;
    let mut base = u128::from(base) % m;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        exp >>= 1;
        base = base * base % m;
    }

    result as u64
}

/// Generate all permutations of `0..n` in lexicographic order.
///
/// The first permutation is always the identity.
///
/// # Examples
///
/// ```
/// use finite_algebras::utils::permutations;
///
/// let perms: Vec<Vec<usize>> = permutations(3).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![0, 1, 2]);
/// assert_eq!(perms[1], vec![0, 2, 1]);
/// assert_eq!(perms[5], vec![2, 1, 0]);
/// ```
pub fn permutations(n: usize) -> impl Iterator<Item = Vec<usize>> {
    PermutationIterator::new(n)
}

/// Iterator over permutations of 0..n (next-permutation walk).
struct PermutationIterator {
    current: Vec<usize>,
    finished: bool,
}

impl PermutationIterator {
    fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            finished: false,
        }
    }
}

impl Iterator for PermutationIterator {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.current.clone();
        let n = self.current.len();

        // Find the rightmost ascent
        let mut i = n.saturating_sub(1);
        while i > 0 && self.current[i - 1] >= self.current[i] {
            i -= 1;
        }

        if i == 0 {
            self.finished = true;
            return Some(result);
        }

        // Swap the pivot with the rightmost larger element, then reverse the suffix
        let pivot = i - 1;
        let mut j = n - 1;
        while self.current[j] <= self.current[pivot] {
            j -= 1;
        }
        self.current.swap(pivot, j);
        self.current[i..].reverse();

        Some(result)
    }
}

/// Compute n! if it fits in a `u64`.
#[must_use]
pub fn factorial(n: u64) -> Option<u64> {
    (1..=n).try_fold(1u64, u64::checked_mul)
}
