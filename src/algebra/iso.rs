//! Homomorphism checks and isomorphism search.
//!
//! The search assigns source elements in index order and tries target
//! candidates in increasing order, so the map returned is the
//! lexicographically first isomorphism. Candidates are pruned by an
//! invariant signature per element, and every partial assignment is checked
//! against the operation tables before extending it.

use tracing::{debug, trace};

use super::group::Group;
use super::magma::Magma;
use super::ring::Ring;
use crate::table::CayleyTable;

/// Check whether `map` is a homomorphism from `src` to `dst`:
/// `map[a·b] = map[a]·map[b]` for all a, b.
///
/// Returns `false` if `map` has the wrong length or leaves `dst`.
#[must_use]
pub fn is_homomorphism(src: &CayleyTable, dst: &CayleyTable, map: &[usize]) -> bool {
    let n = src.order();
    if map.len() != n || map.iter().any(|&y| y >= dst.order()) {
        return false;
    }
    (0..n).all(|a| (0..n).all(|b| map[src.get(a, b)] == dst.get(map[a], map[b])))
}

/// Find a bijection preserving every table pair `src[t] → dst[t]`.
///
/// `fixed` lists pairs `(x, y)` the map must contain, such as identities.
/// Returns `None` when the orders differ or no isomorphism exists.
///
/// ```
/// use finite_algebras::{find_isomorphism, generate::cyclic};
///
/// let a = cyclic(5).unwrap();
/// let map = find_isomorphism(&[a.table()], &[a.table()], &[(0, 0)]).unwrap();
/// assert_eq!(map, vec![0, 1, 2, 3, 4]);
/// ```
#[must_use]
pub fn find_isomorphism(
    src: &[&CayleyTable],
    dst: &[&CayleyTable],
    fixed: &[(usize, usize)],
) -> Option<Vec<usize>> {
    IsoSearch::new(src, dst, fixed)?.search()
}

/// Invariants of `x` under isomorphism, one block per table.
fn signature(tables: &[&CayleyTable], x: usize) -> Vec<usize> {
    let mut sig = Vec::with_capacity(tables.len() * 6);
    for t in tables {
        let n = t.order();
        sig.push(usize::from(t.get(x, x) == x));
        sig.push((0..n).filter(|&y| t.get(y, y) == x).count());
        sig.push((0..n).filter(|&y| t.get(x, y) == t.get(y, x)).count());
        sig.push((0..n).filter(|&y| t.get(x, y) == x).count());
        sig.push((0..n).filter(|&y| t.get(y, x) == x).count());

        // length of the right-power orbit x, x·x, (x·x)·x, ...
        let mut seen = vec![false; n];
        let mut p = x;
        let mut len = 0;
        while !seen[p] {
            seen[p] = true;
            len += 1;
            p = t.get(p, x);
        }
        sig.push(len);
    }
    sig
}

/// Partial assignment: `map[x]` in the target, `rev[y]` in the source.
#[derive(Clone)]
struct State {
    map: Vec<Option<usize>>,
    rev: Vec<Option<usize>>,
}

impl State {
    fn assign(&mut self, x: usize, y: usize) {
        self.map[x] = Some(y);
        self.rev[y] = Some(x);
    }

    fn unassign(&mut self, x: usize, y: usize) {
        self.map[x] = None;
        self.rev[y] = None;
    }
}

/// A prepared isomorphism search between two lists of tables.
pub(crate) struct IsoSearch<'a> {
    src: Vec<&'a CayleyTable>,
    dst: Vec<&'a CayleyTable>,
    sig_src: Vec<Vec<usize>>,
    sig_dst: Vec<Vec<usize>>,
    start: State,
    free: Vec<usize>,
}

impl<'a> IsoSearch<'a> {
    /// Prepare a search, or `None` if the inputs are already ruled out.
    pub(crate) fn new(
        src: &[&'a CayleyTable],
        dst: &[&'a CayleyTable],
        fixed: &[(usize, usize)],
    ) -> Option<Self> {
        let n = src.first()?.order();
        if src.len() != dst.len() || src.iter().chain(dst).any(|t| t.order() != n) {
            debug!(n, "isomorphism ruled out by shape");
            return None;
        }

        let sig_src: Vec<Vec<usize>> = (0..n).map(|x| signature(src, x)).collect();
        let sig_dst: Vec<Vec<usize>> = (0..n).map(|y| signature(dst, y)).collect();
        let mut a = sig_src.clone();
        let mut b = sig_dst.clone();
        a.sort_unstable();
        b.sort_unstable();
        if a != b {
            debug!(n, "isomorphism ruled out by element invariants");
            return None;
        }

        let mut start = State {
            map: vec![None; n],
            rev: vec![None; n],
        };
        let mut search = Self {
            src: src.to_vec(),
            dst: dst.to_vec(),
            sig_src,
            sig_dst,
            start: start.clone(),
            free: Vec::new(),
        };

        for &(x, y) in fixed {
            if x >= n || y >= n || search.sig_src[x] != search.sig_dst[y] {
                return None;
            }
            match (start.map[x], start.rev[y]) {
                (None, None) => start.assign(x, y),
                (Some(prev), _) if prev == y => {}
                _ => return None,
            }
            if !search.consistent(&start, x) {
                return None;
            }
        }
        search.free = (0..n).filter(|&x| start.map[x].is_none()).collect();
        search.start = start;
        Some(search)
    }

    /// Candidate images for the first free element, in search order.
    #[cfg(feature = "parallel")]
    pub(crate) fn first_candidates(&self) -> Vec<usize> {
        match self.free.first() {
            Some(&x) => self.candidates(&self.start, x).collect(),
            None => Vec::new(),
        }
    }

    /// Run the whole search.
    pub(crate) fn search(&self) -> Option<Vec<usize>> {
        let mut state = self.start.clone();
        let found = self.extend(&mut state, 0);
        debug!(n = self.sig_src.len(), found, "isomorphism search finished");
        found.then(|| Self::finish(&state))
    }

    /// Run the search with the first free element mapped to `y`.
    #[cfg(feature = "parallel")]
    pub(crate) fn search_from(&self, y: usize) -> Option<Vec<usize>> {
        let Some(&x) = self.free.first() else {
            return self.search();
        };
        let mut state = self.start.clone();
        state.assign(x, y);
        if !self.consistent(&state, x) {
            return None;
        }
        self.extend(&mut state, 1).then(|| Self::finish(&state))
    }

    fn finish(state: &State) -> Vec<usize> {
        state.map.iter().map(|y| y.unwrap_or_default()).collect()
    }

    fn candidates<'s>(&'s self, state: &'s State, x: usize) -> impl Iterator<Item = usize> + 's {
        (0..self.sig_dst.len())
            .filter(move |&y| state.rev[y].is_none() && self.sig_src[x] == self.sig_dst[y])
    }

    fn extend(&self, state: &mut State, pos: usize) -> bool {
        let Some(&x) = self.free.get(pos) else {
            return self.verify(state);
        };
        let candidates: Vec<usize> = self.candidates(state, x).collect();
        for y in candidates {
            state.assign(x, y);
            if self.consistent(state, x) && self.extend(state, pos + 1) {
                return true;
            }
            state.unassign(x, y);
        }
        trace!(x, pos, "backtrack");
        false
    }

    /// Check every product involving `x` and an assigned element.
    fn consistent(&self, state: &State, x: usize) -> bool {
        let Some(fx) = state.map[x] else {
            return true;
        };
        for (s, d) in self.src.iter().zip(&self.dst) {
            for z in 0..self.sig_src.len() {
                let Some(fz) = state.map[z] else {
                    continue;
                };
                for (p, v) in [(s.get(x, z), d.get(fx, fz)), (s.get(z, x), d.get(fz, fx))] {
                    match (state.map[p], state.rev[v]) {
                        (Some(fp), _) if fp != v => return false,
                        (None, Some(_)) => return false,
                        _ => {}
                    }
                }
            }
        }
        true
    }

    fn verify(&self, state: &State) -> bool {
        let map = Self::finish(state);
        self.src
            .iter()
            .zip(&self.dst)
            .all(|(s, d)| is_homomorphism(s, d, &map))
    }
}

impl Magma {
    /// Find an isomorphism to another magma.
    ///
    /// When both magmas have an identity it is required to map to the other
    /// identity; when only one does, there is none.
    #[must_use]
    pub fn isomorphism(&self, other: &Magma) -> Option<Vec<usize>> {
        let fixed = match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => vec![(a, b)],
            (None, None) => Vec::new(),
            _ => return None,
        };
        find_isomorphism(&[self.table()], &[other.table()], &fixed)
    }

    /// Check whether an isomorphism to `other` exists.
    #[must_use]
    pub fn is_isomorphic(&self, other: &Magma) -> bool {
        self.isomorphism(other).is_some()
    }
}

impl Group {
    /// Find an isomorphism to another group, mapping identity to identity.
    #[must_use]
    pub fn isomorphism(&self, other: &Group) -> Option<Vec<usize>> {
        find_isomorphism(&[self.table()], &[other.table()], &[(0, 0)])
    }

    /// Check whether an isomorphism to `other` exists.
    #[must_use]
    pub fn is_isomorphic(&self, other: &Group) -> bool {
        self.isomorphism(other).is_some()
    }
}

impl Ring {
    /// Find a map preserving both addition and multiplication.
    #[must_use]
    pub fn isomorphism(&self, other: &Ring) -> Option<Vec<usize>> {
        let mut fixed = vec![(0, 0)];
        match (self.one(), other.one()) {
            (Some(a), Some(b)) => fixed.push((a, b)),
            (None, None) => {}
            _ => return None,
        }
        find_isomorphism(
            &[self.add_table(), self.mult_table()],
            &[other.add_table(), other.mult_table()],
            &fixed,
        )
    }

    /// Check whether an isomorphism to `other` exists.
    #[must_use]
    pub fn is_isomorphic(&self, other: &Ring) -> bool {
        self.isomorphism(other).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{cyclic, mod_n_ring, powerset_group, symmetric};

    fn klein() -> Group {
        Group::new(
            "V4",
            "",
            ["e", "h", "v", "r"],
            vec![
                vec![0, 1, 2, 3],
                vec![1, 0, 3, 2],
                vec![2, 3, 0, 1],
                vec![3, 2, 1, 0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_z4_not_v4() {
        assert!(cyclic(4).unwrap().isomorphism(&klein()).is_none());
    }

    #[test]
    fn test_v4_is_powerset_group() {
        let ps = powerset_group(2).unwrap();
        let map = klein().isomorphism(&ps).unwrap();
        assert_eq!(map[0], 0);
        assert!(is_homomorphism(klein().table(), ps.table(), &map));
    }

    #[test]
    fn test_lexicographically_first_map() {
        let z5 = cyclic(5).unwrap();
        assert_eq!(z5.isomorphism(&z5), Some(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_relabelled_s3() {
        let s3 = symmetric(3).unwrap();
        let shuffled = s3
            .magma()
            .reorder(&[0, 4, 2, 5, 1, 3])
            .map(Group::from_magma)
            .unwrap()
            .unwrap();
        let map = s3.isomorphism(&shuffled).unwrap();
        assert!(is_homomorphism(s3.table(), shuffled.table(), &map));
        let mut sorted = map.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..6).collect::<Vec<_>>());

        assert!(!s3.is_isomorphic(&cyclic(6).unwrap()));
    }

    #[test]
    fn test_ring_isomorphism_needs_both_tables() {
        // Z4 and Z2 x Z2 have different additive groups
        let z4 = mod_n_ring(4).unwrap();
        let z2 = mod_n_ring(2).unwrap();
        let z2z2 = z2.direct_product(&z2).unwrap();
        assert!(!z4.is_isomorphic(&z2z2));
        assert!(z2z2.is_isomorphic(&z2z2));
    }

    #[test]
    fn test_homomorphism_shape_checks() {
        let z4 = cyclic(4).unwrap();
        let z2 = cyclic(2).unwrap();
        // reduction mod 2
        assert!(is_homomorphism(z4.table(), z2.table(), &[0, 1, 0, 1]));
        assert!(!is_homomorphism(z4.table(), z2.table(), &[0, 1, 1, 0]));
        assert!(!is_homomorphism(z4.table(), z2.table(), &[0, 1]));
        assert!(!is_homomorphism(z4.table(), z2.table(), &[0, 1, 2, 3]));
    }

    #[test]
    fn test_magma_identity_mismatch() {
        let lz = Magma::new("LZ", "", ["x", "y"], vec![vec![0, 0], vec![1, 1]]).unwrap();
        let z2 = cyclic(2).unwrap();
        assert!(lz.isomorphism(z2.magma()).is_none());
        assert!(lz.is_isomorphic(&lz));
    }
}
