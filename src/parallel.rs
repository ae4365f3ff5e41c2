//! Parallel structural searches.
//!
//! This module provides parallel versions of the exhaustive algorithms using Rayon.
//! Enable with the `parallel` feature flag.
//!
//! Each function partitions its search space with no shared mutable state
//! and returns exactly what the sequential version returns: the
//! isomorphism search splits on the image of the first unassigned element
//! and keeps the first success in candidate order, and subgroup enumeration
//! grows one frontier of subgroups at a time.
//!
//! # Usage
//!
//! ```ignore
//! use finite_algebras::generate::symmetric;
//! use finite_algebras::parallel::par_group_isomorphism;
//!
//! let s4 = symmetric(4).unwrap();
//! assert!(par_group_isomorphism(&s4, &s4).is_some());
//! ```
//!
//! # Performance
//!
//! Parallel search is most beneficial for:
//! - Isomorphism tests between groups of order 16 or more
//! - Subgroup enumeration of groups with many subgroups
//! - Associativity checks of large tables
//!
//! For small algebras, the sequential versions may be faster due to parallelization overhead.

use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::debug;

use crate::algebra::{Group, IsoSearch, Ring};
use crate::table::CayleyTable;

/// Parallel [`crate::find_isomorphism`].
///
/// Returns the same map as the sequential search.
#[must_use]
pub fn par_find_isomorphism(
    src: &[&CayleyTable],
    dst: &[&CayleyTable],
    fixed: &[(usize, usize)],
) -> Option<Vec<usize>> {
    let search = IsoSearch::new(src, dst, fixed)?;
    let candidates = search.first_candidates();
    if candidates.len() < 2 {
        return search.search();
    }
    debug!(branches = candidates.len(), "splitting isomorphism search");
    candidates
        .into_par_iter()
        .find_map_first(|y| search.search_from(y))
}

/// Parallel [`Group::isomorphism`].
#[must_use]
pub fn par_group_isomorphism(a: &Group, b: &Group) -> Option<Vec<usize>> {
    par_find_isomorphism(&[a.table()], &[b.table()], &[(0, 0)])
}

/// Parallel [`Ring::isomorphism`].
#[must_use]
pub fn par_ring_isomorphism(a: &Ring, b: &Ring) -> Option<Vec<usize>> {
    let mut fixed = vec![(0, 0)];
    match (a.one(), b.one()) {
        (Some(x), Some(y)) => fixed.push((x, y)),
        (None, None) => {}
        _ => return None,
    }
    par_find_isomorphism(
        &[a.add_table(), a.mult_table()],
        &[b.add_table(), b.mult_table()],
        &fixed,
    )
}

/// Parallel [`CayleyTable::associativity_witness`]; returns the same
/// (first) witness.
#[must_use]
pub fn par_associativity_witness(table: &CayleyTable) -> Option<(usize, usize, usize)> {
    let n = table.order();
    (0..n).into_par_iter().find_map_first(|a| {
        for b in 0..n {
            let ab = table.get(a, b);
            for c in 0..n {
                if table.get(ab, c) != table.get(a, table.get(b, c)) {
                    return Some((a, b, c));
                }
            }
        }
        None
    })
}

/// Parallel [`CayleyTable::is_associative`].
#[must_use]
pub fn par_is_associative(table: &CayleyTable) -> bool {
    par_associativity_witness(table).is_none()
}

/// Parallel [`Group::proper_subgroup_sets`], in the same order.
#[must_use]
pub fn par_proper_subgroup_sets(group: &Group) -> Vec<Vec<usize>> {
    let n = group.order();
    let mut found: BTreeSet<Vec<usize>> = BTreeSet::new();

    let cyclic: Vec<Vec<usize>> = (1..n)
        .into_par_iter()
        .map(|a| group.closure(&[a]))
        .filter(|h| h.len() < n)
        .collect();
    let mut frontier: Vec<Vec<usize>> = cyclic
        .into_iter()
        .filter(|h| found.insert(h.clone()))
        .collect();

    while !frontier.is_empty() {
        let grown: Vec<Vec<usize>> = frontier
            .par_iter()
            .flat_map_iter(|h| {
                (0..n)
                    .filter(move |g| h.binary_search(g).is_err())
                    .map(move |g| {
                        let mut gens = h.clone();
                        gens.push(g);
                        group.closure(&gens)
                    })
            })
            .filter(|k| k.len() < n)
            .collect();
        frontier = grown
            .into_iter()
            .filter(|k| found.insert(k.clone()))
            .collect();
    }

    let mut subgroups: Vec<Vec<usize>> = found.into_iter().collect();
    subgroups.sort_by_key(Vec::len);
    debug!(group = group.name(), count = subgroups.len(), "enumerated proper subgroups in parallel");
    subgroups
}
