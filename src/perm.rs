//! Permutations of a contiguous base set `{b, b+1, …, b+n−1}`.

use std::fmt;

use crate::error::{Error, Result};

/// A permutation in one-line notation over a base set starting at `base`.
///
/// Composition follows function application: `(π ∘ σ)(i) = π(σ(i))`.
///
/// # Example
///
/// ```
/// use finite_algebras::Permutation;
///
/// let p = Permutation::new(vec![1, 2, 0]).unwrap();
/// let q = Permutation::new(vec![0, 2, 1]).unwrap();
/// assert_eq!(p.compose(&q).unwrap().images(), &[1, 0, 2]);
/// assert_eq!(p.order(), 3);
/// assert!(p.is_even());
/// assert_eq!(p.to_string(), "(1, 2, 0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    base: usize,
    images: Vec<usize>,
}

impl Permutation {
    /// Create a permutation of `{0, …, n−1}` from its images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPermutation`] if `images` is not a permutation.
    pub fn new(images: Vec<usize>) -> Result<Self> {
        Self::with_base(images, 0)
    }

    /// Create a permutation of `{base, …, base+n−1}` from its images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPermutation`] if `images` is not a permutation
    /// of the base set.
    pub fn with_base(images: Vec<usize>, base: usize) -> Result<Self> {
        let n = images.len();
        let mut seen = vec![false; n];
        for &x in &images {
            let slot = x
                .checked_sub(base)
                .filter(|&i| i < n)
                .ok_or_else(|| Error::InvalidPermutation(format!("{x} is outside the base set")))?;
            if seen[slot] {
                return Err(Error::InvalidPermutation(format!("{x} appears twice")));
            }
            seen[slot] = true;
        }
        Ok(Self { base, images })
    }

    /// The identity permutation on `n` points starting at `base`.
    #[must_use]
    pub fn identity(n: usize, base: usize) -> Self {
        Self {
            base,
            images: (base..base + n).collect(),
        }
    }

    /// Number of points moved or fixed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Check whether this is the permutation of the empty set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The first point of the base set.
    #[must_use]
    pub fn base(&self) -> usize {
        self.base
    }

    /// The images in one-line notation.
    #[must_use]
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    /// The image of point `i`, or `None` outside the base set.
    #[must_use]
    pub fn apply(&self, i: usize) -> Option<usize> {
        i.checked_sub(self.base)
            .and_then(|k| self.images.get(k))
            .copied()
    }

    fn slot(&self, i: usize) -> usize {
        i - self.base
    }

    /// Compose as functions: `self ∘ other`, applying `other` first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedAlgebra`] if the base sets differ.
    pub fn compose(&self, other: &Permutation) -> Result<Permutation> {
        if self.base != other.base || self.len() != other.len() {
            return Err(Error::mismatched(format!(
                "permutations of {}..{} and {}..{}",
                self.base,
                self.base + self.len(),
                other.base,
                other.base + other.len()
            )));
        }
        let images = other
            .images
            .iter()
            .map(|&x| self.images[self.slot(x)])
            .collect();
        Ok(Self {
            base: self.base,
            images,
        })
    }

    /// The inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Permutation {
        let mut images = vec![0; self.len()];
        for (k, &x) in self.images.iter().enumerate() {
            images[self.slot(x)] = self.base + k;
        }
        Self {
            base: self.base,
            images,
        }
    }

    /// Disjoint cycles of length at least 2, each starting at its smallest
    /// point, ordered by that point.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.len()];
        let mut cycles = Vec::new();
        for start in 0..self.len() {
            if seen[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut k = start;
            while !seen[k] {
                seen[k] = true;
                cycle.push(self.base + k);
                k = self.slot(self.images[k]);
            }
            if cycle.len() > 1 {
                cycles.push(cycle);
            }
        }
        cycles
    }

    /// The order: lcm of the cycle lengths.
    #[must_use]
    pub fn order(&self) -> usize {
        self.cycles()
            .iter()
            .fold(1, |acc, c| num_integer::lcm(acc, c.len()))
    }

    /// Number of inversions: pairs i < j with π(i) > π(j).
    #[must_use]
    pub fn inversions(&self) -> usize {
        let n = self.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.images[i] > self.images[j])
            .count()
    }

    /// Check whether the permutation has an even number of inversions.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// The sign: `1` for even, `-1` for odd.
    #[must_use]
    pub fn sign(&self) -> i8 {
        if self.is_even() {
            1
        } else {
            -1
        }
    }

    /// All permutations of `{base, …, base+n−1}` in lexicographic order.
    pub fn all(n: usize, base: usize) -> impl Iterator<Item = Permutation> {
        crate::utils::permutations(n).map(move |p| Self {
            base,
            images: p.into_iter().map(|x| x + base).collect(),
        })
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.images.iter().map(ToString::to_string).collect();
        write!(f, "({})", parts.join(", "))
    }
}
