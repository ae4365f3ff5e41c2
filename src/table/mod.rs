//! Cayley tables: validated square operation tables.
//!
//! A [`CayleyTable`] of order n is an n×n matrix whose entries are indices
//! into the carrier set {0, …, n−1}. Construction checks the shape and the
//! range of every entry; the structural predicates (associativity,
//! commutativity, identities, inverses, Latin-square and distributivity)
//! live here so that every algebra variant can share them.
//!
//! Raw user input arrives as a [`TableInput`], which may hold either indices
//! or element labels and is normalized to a `CayleyTable` before storage.

mod input;

pub use input::TableInput;
pub(crate) use input::registry_for;

use ndarray::Array2;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// A square operation table over the indices {0, …, n−1}.
///
/// Entry `(a, b)` holds the index of `a · b`.
///
/// # Example
///
/// ```
/// use finite_algebras::table::CayleyTable;
///
/// let z3 = CayleyTable::new(vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]).unwrap();
/// assert_eq!(z3.get(2, 2), 1);
/// assert!(z3.is_associative());
/// assert_eq!(z3.identity(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CayleyTable {
    data: Array2<usize>,
}

/// Which side of a distributive law failed, with its witness indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributivityFailure {
    /// Either `"left"` (`a(b+c)`) or `"right"` (`(b+c)a`).
    pub side: &'static str,
    /// Witness `a`.
    pub a: usize,
    /// Witness `b`.
    pub b: usize,
    /// Witness `c`.
    pub c: usize,
}

impl CayleyTable {
    /// Create a table from rows of indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTable`] for zero rows, [`Error::Shape`] when a row
    /// length differs from the number of rows, and [`Error::Range`] when an
    /// entry is not below the order.
    pub fn new(rows: Vec<Vec<usize>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::EmptyTable);
        }

        let mut flat = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(Error::Shape {
                    row,
                    expected: n,
                    actual: values.len(),
                });
            }
            flat.extend(values);
        }

        let data = Array2::from_shape_vec((n, n), flat)
            .map_err(|e| Error::invalid_params(e.to_string()))?;
        Self::from_array(data)
    }

    /// Create a table from an existing 2D array.
    ///
    /// # Errors
    ///
    /// Returns an error if the array is empty, not square, or has an entry
    /// outside `[0, n)`.
    pub fn from_array(data: Array2<usize>) -> Result<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 {
            return Err(Error::EmptyTable);
        }
        if rows != cols {
            return Err(Error::Shape {
                row: 0,
                expected: rows,
                actual: cols,
            });
        }

        for ((row, col), &value) in data.indexed_iter() {
            if value >= rows {
                return Err(Error::Range {
                    row,
                    col,
                    value,
                    order: rows,
                });
            }
        }

        Ok(Self { data })
    }

    /// Build a table of order `n` from a closure that is known to stay in range.
    pub(crate) fn from_fn(n: usize, f: impl Fn(usize, usize) -> usize) -> Self {
        let data = Array2::from_shape_fn((n, n), |(a, b)| f(a, b));
        debug_assert!(data.iter().all(|&v| v < n), "generated entry out of range");
        Self { data }
    }

    /// Get the order (number of rows) of the table.
    #[must_use]
    pub fn order(&self) -> usize {
        self.data.nrows()
    }

    /// Look up `a · b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, a: usize, b: usize) -> usize {
        self.data[[a, b]]
    }

    /// Get a reference to the underlying data.
    #[must_use]
    pub fn data(&self) -> &Array2<usize> {
        &self.data
    }

    /// Copy the table out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.data.rows().into_iter().map(|r| r.to_vec()).collect()
    }

    /// First triple `(a, b, c)` with `(ab)c != a(bc)`, scanning in natural order.
    #[must_use]
    pub fn associativity_witness(&self) -> Option<(usize, usize, usize)> {
        let n = self.order();
        for a in 0..n {
            for b in 0..n {
                let ab = self.get(a, b);
                for c in 0..n {
                    if self.get(ab, c) != self.get(a, self.get(b, c)) {
                        return Some((a, b, c));
                    }
                }
            }
        }
        None
    }

    /// Check `(ab)c = a(bc)` for all a, b, c. O(n³).
    #[must_use]
    pub fn is_associative(&self) -> bool {
        self.associativity_witness().is_none()
    }

    /// First pair `a < b` with `ab != ba`.
    #[must_use]
    pub fn commutativity_witness(&self) -> Option<(usize, usize)> {
        let n = self.order();
        (0..n)
            .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
            .find(|&(a, b)| self.get(a, b) != self.get(b, a))
    }

    /// Check `ab = ba` for all a < b.
    #[must_use]
    pub fn is_commutative(&self) -> bool {
        self.commutativity_witness().is_none()
    }

    /// First x with `xy = y` for all y.
    #[must_use]
    pub fn left_identity(&self) -> Option<usize> {
        let n = self.order();
        (0..n).find(|&x| (0..n).all(|y| self.get(x, y) == y))
    }

    /// First x with `yx = y` for all y.
    #[must_use]
    pub fn right_identity(&self) -> Option<usize> {
        let n = self.order();
        (0..n).find(|&x| (0..n).all(|y| self.get(y, x) == y))
    }

    /// The two-sided identity, if the left and right identities exist and agree.
    #[must_use]
    pub fn identity(&self) -> Option<usize> {
        match (self.left_identity(), self.right_identity()) {
            (Some(l), Some(r)) if l == r => Some(l),
            _ => None,
        }
    }

    /// Map each element to its first two-sided inverse with respect to `id`.
    ///
    /// Elements without an inverse are absent from the map.
    #[must_use]
    pub fn inverse_lookup(&self, id: usize) -> BTreeMap<usize, usize> {
        let n = self.order();
        (0..n)
            .filter_map(|x| {
                (0..n)
                    .find(|&y| self.get(x, y) == id && self.get(y, x) == id)
                    .map(|y| (x, y))
            })
            .collect()
    }

    /// Verify that every row and every column is a permutation of {0, …, n−1}.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLatinSquare`] naming the first offending row, or
    /// column if all rows pass.
    pub fn check_latin_square(&self) -> Result<()> {
        let n = self.order();
        let mut seen = vec![false; n];

        for row in 0..n {
            seen.fill(false);
            for col in 0..n {
                let v = self.get(row, col);
                if seen[v] {
                    return Err(Error::NotLatinSquare { line: "row", index: row });
                }
                seen[v] = true;
            }
        }

        for col in 0..n {
            seen.fill(false);
            for row in 0..n {
                let v = self.get(row, col);
                if seen[v] {
                    return Err(Error::NotLatinSquare {
                        line: "column",
                        index: col,
                    });
                }
                seen[v] = true;
            }
        }

        Ok(())
    }

    /// Check whether the table is a Latin square.
    #[must_use]
    pub fn is_latin_square(&self) -> bool {
        self.check_latin_square().is_ok()
    }

    /// Check that this table (as multiplication) distributes over `add`.
    ///
    /// Tests `a(b+c) = ab + ac` and `(b+c)a = ba + ca` for all a, b, c and
    /// returns the first failure. O(n³).
    #[must_use]
    pub fn distributivity_failure(&self, add: &CayleyTable) -> Option<DistributivityFailure> {
        let n = self.order();
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    let bc = add.get(b, c);
                    if self.get(a, bc) != add.get(self.get(a, b), self.get(a, c)) {
                        return Some(DistributivityFailure {
                            side: "left",
                            a,
                            b,
                            c,
                        });
                    }
                    if self.get(bc, a) != add.get(self.get(b, a), self.get(c, a)) {
                        return Some(DistributivityFailure {
                            side: "right",
                            a,
                            b,
                            c,
                        });
                    }
                }
            }
        }
        None
    }

    /// Rewrite the table for a new element order.
    ///
    /// `order[k]` is the old index of the element placed at position k. The
    /// caller guarantees `order` is a permutation of 0..n.
    #[must_use]
    pub(crate) fn permuted(&self, order: &[usize]) -> Self {
        let mut position = vec![0; order.len()];
        for (new, &old) in order.iter().enumerate() {
            position[old] = new;
        }
        Self::from_fn(order.len(), |a, b| position[self.get(order[a], order[b])])
    }

    /// Restrict the table to a subset of indices, re-indexed to {0, …, m−1}.
    ///
    /// Returns `None` if the subset is not closed under the operation.
    #[must_use]
    pub(crate) fn restricted(&self, subset: &[usize]) -> Option<Self> {
        let mut position = vec![None; self.order()];
        for (new, &old) in subset.iter().enumerate() {
            position[old] = Some(new);
        }

        let m = subset.len();
        let mut flat = Vec::with_capacity(m * m);
        for &a in subset {
            for &b in subset {
                flat.push(position[self.get(a, b)]?);
            }
        }
        Array2::from_shape_vec((m, m), flat)
            .ok()
            .map(|data| Self { data })
    }
}

/// Validate that `order` is a permutation of 0..n.
pub(crate) fn check_permutation(order: &[usize], n: usize) -> Result<()> {
    if order.len() != n {
        return Err(Error::InvalidPermutation(format!(
            "expected {} indices, got {}",
            n,
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for &i in order {
        if i >= n {
            return Err(Error::InvalidPermutation(format!(
                "index {i} out of range for order {n}"
            )));
        }
        if seen[i] {
            return Err(Error::InvalidPermutation(format!("index {i} repeated")));
        }
        seen[i] = true;
    }
    Ok(())
}

impl fmt::Display for CayleyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.order().saturating_sub(1).to_string().len();
        for row in self.data.rows() {
            let row_str: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
            writeln!(f, "{}", row_str.join(" "))?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<usize>>> for CayleyTable {
    type Error = Error;

    fn try_from(rows: Vec<Vec<usize>>) -> Result<Self> {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn klein() -> CayleyTable {
        CayleyTable::new(vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 3, 2],
            vec![2, 3, 0, 1],
            vec![3, 2, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_shape_errors() {
        assert_eq!(CayleyTable::new(vec![]), Err(Error::EmptyTable));
        assert_eq!(
            CayleyTable::new(vec![vec![0, 1], vec![1]]),
            Err(Error::Shape {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            CayleyTable::new(vec![vec![0, 1, 0], vec![1, 0, 1]]),
            Err(Error::Shape {
                row: 0,
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_range_error() {
        assert_eq!(
            CayleyTable::new(vec![vec![0, 1], vec![1, 2]]),
            Err(Error::Range {
                row: 1,
                col: 1,
                value: 2,
                order: 2
            })
        );
    }

    #[test]
    fn test_klein_predicates() {
        let t = klein();
        assert_eq!(t.order(), 4);
        assert!(t.is_associative());
        assert!(t.is_commutative());
        assert_eq!(t.identity(), Some(0));
        assert!(t.is_latin_square());

        let inv = t.inverse_lookup(0);
        assert_eq!(inv.len(), 4);
        for (x, y) in inv {
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_non_associative() {
        // Rock-paper-scissors: commutative, idempotent, not associative
        let rps = CayleyTable::new(vec![vec![0, 1, 0], vec![1, 1, 2], vec![0, 2, 2]]).unwrap();
        assert!(rps.is_commutative());
        assert!(!rps.is_associative());
        assert!(rps.associativity_witness().is_some());
        assert_eq!(rps.identity(), None);
    }

    #[test]
    fn test_one_sided_identity() {
        // Left-zero semigroup: xy = x, every element is a right identity
        let t = CayleyTable::new(vec![vec![0, 0], vec![1, 1]]).unwrap();
        assert_eq!(t.left_identity(), None);
        assert_eq!(t.right_identity(), Some(0));
        assert_eq!(t.identity(), None);
        assert!(t.is_associative());
        assert_eq!(t.commutativity_witness(), Some((0, 1)));
    }

    #[test]
    fn test_partial_inverse_lookup() {
        // Multiplication mod 4 has identity 1; only 1 and 3 are invertible
        let t = CayleyTable::from_fn(4, |a, b| (a * b) % 4);
        let inv = t.inverse_lookup(1);
        assert_eq!(inv.get(&1), Some(&1));
        assert_eq!(inv.get(&3), Some(&3));
        assert!(!inv.contains_key(&0));
        assert!(!inv.contains_key(&2));
    }

    #[test]
    fn test_latin_square_reports_line() {
        let t = CayleyTable::new(vec![vec![0, 1], vec![0, 1]]).unwrap();
        assert_eq!(
            t.check_latin_square(),
            Err(Error::NotLatinSquare {
                line: "column",
                index: 0
            })
        );
        let t = CayleyTable::new(vec![vec![0, 0], vec![1, 1]]).unwrap();
        assert_eq!(
            t.check_latin_square(),
            Err(Error::NotLatinSquare { line: "row", index: 0 })
        );
    }

    #[test]
    fn test_distributivity() {
        let add = CayleyTable::from_fn(6, |a, b| (a + b) % 6);
        let mul = CayleyTable::from_fn(6, |a, b| (a * b) % 6);
        assert!(mul.distributivity_failure(&add).is_none());

        // Using addition as "multiplication" does not distribute
        let failure = add.distributivity_failure(&add).unwrap();
        assert_eq!(failure.side, "left");
    }

    #[test]
    fn test_permuted_and_restricted() {
        let t = klein();
        // Swap h and v
        let p = t.permuted(&[0, 2, 1, 3]);
        assert_eq!(p.get(1, 3), 2);
        assert!(p.is_associative());

        let sub = t.restricted(&[0, 3]).unwrap();
        assert_eq!(sub.to_rows(), vec![vec![0, 1], vec![1, 0]]);
        assert!(t.restricted(&[1, 2]).is_none());
    }

    #[test]
    fn test_check_permutation() {
        assert!(check_permutation(&[2, 0, 1], 3).is_ok());
        assert!(check_permutation(&[0, 0, 1], 3).is_err());
        assert!(check_permutation(&[0, 1], 3).is_err());
        assert!(check_permutation(&[0, 1, 3], 3).is_err());
    }

    #[test]
    fn test_display() {
        let t = CayleyTable::from_fn(2, |a, b| (a + b) % 2);
        assert_eq!(format!("{t}"), "0 1\n1 0\n");
    }
}
