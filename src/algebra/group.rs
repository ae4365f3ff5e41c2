//! Finite groups and their structural algorithms.
//!
//! ## Overview
//!
//! - element orders and powers (negative powers through inverses)
//! - closure of a subset and the subgroups it generates
//! - enumeration of proper subgroups
//! - normality, cosets and quotient groups
//! - center, conjugacy classes and the commutator subgroup
//!
//! Subgroups and quotients are fresh [`Group`] values re-indexed to
//! {0, …, m−1}; their elements follow the parent's order.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use super::magma::{identity_first, power, Magma, Monoid};
use crate::elements::Elements;
use crate::error::{Error, Result};
use crate::table::{CayleyTable, TableInput};

/// A finite group: a monoid in which every element has a two-sided inverse.
///
/// The identity is stored at index 0. Inverses are computed once at
/// construction.
///
/// # Example
///
/// ```
/// use finite_algebras::Group;
///
/// let v4 = Group::new(
///     "V4",
///     "Klein-4 group",
///     ["e", "h", "v", "r"],
///     vec![vec![0, 1, 2, 3], vec![1, 0, 3, 2], vec![2, 3, 0, 1], vec![3, 2, 1, 0]],
/// )
/// .unwrap();
///
/// assert!(v4.is_abelian());
/// assert_eq!(v4.order_of(3), 2);
/// assert_eq!(v4.proper_subgroups().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    magma: Magma,
    inverses: Vec<usize>,
}

impl Group {
    /// Create a group from element labels and a table.
    ///
    /// The table is first checked to be a Latin square, then for an identity
    /// and associativity. An identity that is not the first element is moved
    /// to the front.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Magma::new`], then [`Error::NotLatinSquare`],
    /// [`Error::NoIdentity`] or [`Error::Associativity`].
    pub fn new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: impl Into<TableInput>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_magma(Magma::new(name, description, elements, table)?)
    }

    /// Promote a magma whose table is a group table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLatinSquare`], [`Error::NoIdentity`] or
    /// [`Error::Associativity`].
    pub fn from_magma(magma: Magma) -> Result<Self> {
        magma.table().check_latin_square()?;
        let id = magma.identity().ok_or(Error::NoIdentity)?;
        magma.check_associative()?;
        let magma = if id == 0 {
            magma
        } else {
            magma.reorder(&identity_first(magma.order(), id))?
        };
        Self::from_monoid_table(magma)
    }

    /// Wrap a magma known to be a monoid with identity at 0, computing inverses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoInverse`] for the first element without an inverse.
    pub(crate) fn from_monoid_table(magma: Magma) -> Result<Self> {
        let lookup = magma.table().inverse_lookup(0);
        let inverses = (0..magma.order())
            .map(|x| {
                lookup
                    .get(&x)
                    .copied()
                    .ok_or_else(|| Error::NoInverse(magma.label(x).to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { magma, inverses })
    }

    /// Get the underlying magma.
    #[must_use]
    pub fn magma(&self) -> &Magma {
        &self.magma
    }

    /// Consume and return the underlying magma.
    #[must_use]
    pub fn into_magma(self) -> Magma {
        self.magma
    }

    /// Forget the inverses.
    #[must_use]
    pub fn into_monoid(self) -> Monoid {
        Monoid::from_trusted(self.magma)
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.magma.name()
    }

    /// Get the element registry.
    #[must_use]
    pub fn elements(&self) -> &Elements {
        self.magma.elements()
    }

    /// Get the number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.magma.order()
    }

    /// Get the operation table.
    #[must_use]
    pub fn table(&self) -> &CayleyTable {
        self.magma.table()
    }

    /// Get the label of an index.
    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        self.magma.label(index)
    }

    /// Find the index of a label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if the label is not an element.
    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.magma.index_of(label)
    }

    /// The identity index (always 0).
    #[must_use]
    pub fn identity(&self) -> usize {
        0
    }

    /// Compute `a · b` on indices.
    #[must_use]
    pub fn op(&self, a: usize, b: usize) -> usize {
        self.magma.op(a, b)
    }

    /// The inverse of `a`.
    #[must_use]
    pub fn inv(&self, a: usize) -> usize {
        self.inverses[a]
    }

    /// Replace the direct-product label delimiter.
    #[must_use]
    pub fn with_delimiter(self, delimiter: impl Into<String>) -> Self {
        Self {
            magma: self.magma.with_delimiter(delimiter),
            inverses: self.inverses,
        }
    }

    /// Replace the name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            magma: self.magma.with_name(name),
            inverses: self.inverses,
        }
    }

    /// Check whether the group is abelian.
    #[must_use]
    pub fn is_abelian(&self) -> bool {
        self.magma.is_commutative()
    }

    /// Compute `a^k` for any integer k.
    #[must_use]
    pub fn pow(&self, a: usize, k: i64) -> usize {
        let base = if k < 0 { self.inv(a) } else { a };
        match k.unsigned_abs() {
            0 => 0,
            e => power(self.table(), base, e),
        }
    }

    /// The order of `a`: the least k ≥ 1 with `a^k = e`.
    #[must_use]
    pub fn order_of(&self, a: usize) -> usize {
        let mut x = a;
        let mut k = 1;
        while x != 0 {
            x = self.op(x, a);
            k += 1;
        }
        k
    }

    /// The order of every element, by index.
    #[must_use]
    pub fn element_orders(&self) -> Vec<usize> {
        (0..self.order()).map(|a| self.order_of(a)).collect()
    }

    /// Check whether some element generates the whole group.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        (0..self.order()).any(|a| self.order_of(a) == self.order())
    }

    /// The smallest subset containing `subset` that is closed under the
    /// operation and inversion, as sorted indices.
    ///
    /// The closure of the empty set is the trivial subgroup.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn closure(&self, subset: &[usize]) -> Vec<usize> {
        let n = self.order();
        let mut member = vec![false; n];
        let mut members: Vec<usize> = Vec::with_capacity(n);
        for &x in subset.iter().chain(std::iter::once(&0)) {
            if !member[x] {
                member[x] = true;
                members.push(x);
            }
        }

        loop {
            let before = members.len();

            for i in 0..members.len() {
                let inv = self.inv(members[i]);
                if !member[inv] {
                    member[inv] = true;
                    members.push(inv);
                }
            }

            let snapshot = members.clone();
            for &a in &snapshot {
                for &b in &snapshot {
                    let ab = self.op(a, b);
                    if !member[ab] {
                        member[ab] = true;
                        members.push(ab);
                    }
                }
            }

            if members.len() == before {
                break;
            }
        }

        members.sort_unstable();
        members
    }

    /// Extract the subgroup on a subset of indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubalgebra`] if the subset is empty, out of range
    /// or not a subgroup.
    pub fn subgroup(&self, indices: &[usize]) -> Result<Group> {
        let subset = self.magma.normalize_subset(indices)?;
        if subset[0] != 0 || self.closure(&subset) != subset {
            return Err(Error::not_subalgebra(format!(
                "{} is not a subgroup of {}",
                self.elements().describe(&subset),
                self.name()
            )));
        }
        let magma = self.magma.subalgebra(&subset)?;
        Self::from_monoid_table(magma)
    }

    /// The subgroup generated by a set of elements.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range.
    pub fn generated_subgroup(&self, generators: &[usize]) -> Result<Group> {
        if let Some(&bad) = generators.iter().find(|&&g| g >= self.order()) {
            return Err(Error::not_subalgebra(format!(
                "index {bad} out of range for order {}",
                self.order()
            )));
        }
        self.subgroup(&self.closure(generators))
    }

    /// The cyclic subgroup generated by `a`.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` is out of range.
    pub fn cyclic_subgroup(&self, a: usize) -> Result<Group> {
        self.generated_subgroup(&[a])
    }

    /// Index sets of all proper, non-trivial subgroups.
    ///
    /// Subgroups are found by growing cyclic subgroups one generator at a
    /// time until no new subgroup appears. Results are ordered by size, then
    /// lexicographically by index.
    #[must_use]
    pub fn proper_subgroup_sets(&self) -> Vec<Vec<usize>> {
        let n = self.order();
        let mut found: BTreeSet<Vec<usize>> = BTreeSet::new();
        let mut pending: Vec<Vec<usize>> = Vec::new();

        for a in 1..n {
            let h = self.closure(&[a]);
            if h.len() < n && found.insert(h.clone()) {
                pending.push(h);
            }
        }

        while let Some(h) = pending.pop() {
            let mut inside = vec![false; n];
            for &x in &h {
                inside[x] = true;
            }
            for g in (0..n).filter(|&g| !inside[g]) {
                let mut gens = h.clone();
                gens.push(g);
                let k = self.closure(&gens);
                if k.len() < n && found.insert(k.clone()) {
                    pending.push(k);
                }
            }
        }

        let mut subgroups: Vec<Vec<usize>> = found.into_iter().collect();
        subgroups.sort_by_key(Vec::len);
        debug!(group = self.name(), count = subgroups.len(), "enumerated proper subgroups");
        subgroups
    }

    /// All proper, non-trivial subgroups as groups.
    #[must_use]
    pub fn proper_subgroups(&self) -> Vec<Group> {
        self.proper_subgroup_sets()
            .iter()
            .enumerate()
            .filter_map(|(i, set)| {
                self.subgroup(set)
                    .ok()
                    .map(|g| g.with_name(format!("{}_sub_{}", self.name(), i)))
            })
            .collect()
    }

    /// Locate the elements of `sub` inside this group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedAlgebra`] if an element of `sub` is not an
    /// element of this group, or if the operations disagree.
    pub fn embed(&self, sub: &Group) -> Result<Vec<usize>> {
        let map = sub
            .elements()
            .iter()
            .map(|label| {
                self.elements().index_of(label).ok_or_else(|| {
                    Error::mismatched(format!(
                        "element {label:?} of {} is not in {}",
                        sub.name(),
                        self.name()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for a in 0..sub.order() {
            for b in 0..sub.order() {
                if map[sub.op(a, b)] != self.op(map[a], map[b]) {
                    return Err(Error::mismatched(format!(
                        "{} and {} disagree on {} * {}",
                        sub.name(),
                        self.name(),
                        sub.label(a),
                        sub.label(b)
                    )));
                }
            }
        }

        let mut indices = map;
        indices.sort_unstable();
        Ok(indices)
    }

    /// Check normality of a subgroup given as parent indices:
    /// `g·h·g⁻¹ ∈ H` for all g ∈ G, h ∈ H.
    ///
    /// A subset with an out-of-range index is not normal.
    #[must_use]
    pub fn is_normal_subset(&self, subset: &[usize]) -> bool {
        if subset.iter().any(|&h| h >= self.order()) {
            return false;
        }
        let mut inside = vec![false; self.order()];
        for &h in subset {
            inside[h] = true;
        }
        (0..self.order()).all(|g| {
            subset
                .iter()
                .all(|&h| inside[self.op(self.op(g, h), self.inv(g))])
        })
    }

    /// Check whether `sub` is a normal subgroup of this group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedAlgebra`] if `sub` is not drawn from this group.
    pub fn is_normal(&self, sub: &Group) -> Result<bool> {
        Ok(self.is_normal_subset(&self.embed(sub)?))
    }

    /// The left coset `gH`, sorted.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn left_coset(&self, g: usize, subset: &[usize]) -> Vec<usize> {
        let mut coset: Vec<usize> = subset.iter().map(|&h| self.op(g, h)).collect();
        coset.sort_unstable();
        coset
    }

    /// The right coset `Hg`, sorted.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn right_coset(&self, g: usize, subset: &[usize]) -> Vec<usize> {
        let mut coset: Vec<usize> = subset.iter().map(|&h| self.op(h, g)).collect();
        coset.sort_unstable();
        coset
    }

    /// The distinct left cosets of a subgroup, ordered by smallest member.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn left_cosets(&self, subset: &[usize]) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.order()];
        let mut cosets = Vec::new();
        for g in 0..self.order() {
            if seen[g] {
                continue;
            }
            let coset = self.left_coset(g, subset);
            for &x in &coset {
                seen[x] = true;
            }
            cosets.push(coset);
        }
        cosets
    }

    /// The quotient group G/H for a normal subgroup H.
    ///
    /// Elements are the cosets, ordered by smallest member, so the identity
    /// coset H comes first. Each coset is labelled by its member labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedAlgebra`] if `sub` is not drawn from this
    /// group and [`Error::NotASubalgebra`] if it is not normal.
    pub fn quotient(&self, sub: &Group) -> Result<Group> {
        let subset = self.embed(sub)?;
        self.quotient_named(&subset, sub.name())
    }

    /// The quotient group by a normal subgroup given as parent indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubalgebra`] if the subset is not a normal subgroup.
    pub fn quotient_by(&self, subset: &[usize]) -> Result<Group> {
        let subset = self.magma.normalize_subset(subset)?;
        let label = self.elements().describe(&subset);
        self.quotient_named(&subset, &label)
    }

    fn quotient_named(&self, subset: &[usize], sub_name: &str) -> Result<Group> {
        if self.closure(subset) != subset {
            return Err(Error::not_subalgebra(format!(
                "{sub_name} is not a subgroup of {}",
                self.name()
            )));
        }
        if !self.is_normal_subset(subset) {
            return Err(Error::not_subalgebra(format!(
                "{sub_name} is not normal in {}",
                self.name()
            )));
        }

        let cosets = self.left_cosets(subset);
        let mut coset_of = vec![0; self.order()];
        for (i, coset) in cosets.iter().enumerate() {
            for &x in coset {
                coset_of[x] = i;
            }
        }

        let table = CayleyTable::from_fn(cosets.len(), |i, j| {
            coset_of[self.op(cosets[i][0], cosets[j][0])]
        });
        let elements = Elements::new(cosets.iter().map(|c| self.elements().describe(c)))?;
        let magma = Magma::from_parts(
            format!("{}/{}", self.name(), sub_name),
            format!("Quotient of {} by {}", self.name(), sub_name),
            elements,
            table,
        )?;
        Self::from_monoid_table(magma.with_delimiter(self.magma.delimiter().to_string()))
    }

    /// The center: elements commuting with every element.
    #[must_use]
    pub fn center_indices(&self) -> Vec<usize> {
        let n = self.order();
        (0..n)
            .filter(|&z| (0..n).all(|g| self.op(z, g) == self.op(g, z)))
            .collect()
    }

    /// The center as a subgroup.
    ///
    /// # Errors
    ///
    /// Never fails for a valid group; the error type is shared with
    /// [`Group::subgroup`].
    pub fn center(&self) -> Result<Group> {
        self.subgroup(&self.center_indices())
            .map(|g| g.with_name(format!("Z({})", self.name())))
    }

    /// Conjugacy classes `{g x g⁻¹}`, ordered by smallest member.
    #[must_use]
    pub fn conjugacy_classes(&self) -> Vec<Vec<usize>> {
        let n = self.order();
        let mut seen = vec![false; n];
        let mut classes = Vec::new();
        for x in 0..n {
            if seen[x] {
                continue;
            }
            let class: BTreeSet<usize> = (0..n)
                .map(|g| self.op(self.op(g, x), self.inv(g)))
                .collect();
            for &y in &class {
                seen[y] = true;
            }
            classes.push(class.into_iter().collect());
        }
        classes
    }

    /// The commutator subgroup, generated by all `a⁻¹b⁻¹ab`.
    ///
    /// # Errors
    ///
    /// Never fails for a valid group; the error type is shared with
    /// [`Group::subgroup`].
    pub fn commutator_subgroup(&self) -> Result<Group> {
        let n = self.order();
        let commutators: BTreeSet<usize> = (0..n)
            .flat_map(|a| (0..n).map(move |b| (a, b)))
            .map(|(a, b)| self.op(self.op(self.inv(a), self.inv(b)), self.op(a, b)))
            .collect();
        let gens: Vec<usize> = commutators.into_iter().collect();
        self.generated_subgroup(&gens)
            .map(|g| g.with_name(format!("[{0}, {0}]", self.name())))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {:?} of order {}", self.name(), self.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{cyclic, symmetric};

    fn klein() -> Group {
        Group::new(
            "V4",
            "Klein-4 group",
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
    fn test_klein_four() {
        let v4 = klein();
        assert!(v4.is_abelian());
        for x in 0..4 {
            assert_eq!(v4.inv(x), x);
        }
        assert_eq!(v4.element_orders(), vec![1, 2, 2, 2]);
        assert!(!v4.is_cyclic());

        let subs = v4.proper_subgroups();
        assert_eq!(subs.len(), 3);
        for h in &subs {
            assert_eq!(h.order(), 2);
            assert_eq!(h.label(0), "e");
        }
        assert_eq!(
            v4.proper_subgroup_sets(),
            vec![vec![0, 1], vec![0, 2], vec![0, 3]]
        );
    }

    #[test]
    fn test_not_latin_checked_first() {
        // Not a Latin square and not associative: the Latin check reports
        let err = Group::new(
            "bad",
            "",
            ["a", "b", "c"],
            vec![vec![0, 1, 2], vec![1, 1, 0], vec![2, 0, 1]],
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotLatinSquare { .. }));
    }

    #[test]
    fn test_latin_but_not_associative() {
        // A loop of order 5 that is not a group
        let err = Group::new(
            "loop",
            "",
            ["e", "a", "b", "c", "d"],
            vec![
                vec![0, 1, 2, 3, 4],
                vec![1, 0, 3, 4, 2],
                vec![2, 4, 0, 1, 3],
                vec![3, 2, 4, 0, 1],
                vec![4, 3, 1, 2, 0],
            ],
        )
        .unwrap_err();
        assert!(matches!(err, Error::Associativity { .. }));
    }

    #[test]
    fn test_identity_moved_to_front() {
        let g = Group::new("Z2", "", ["a", "e"], vec![vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(g.label(0), "e");
        assert_eq!(g.op(1, 1), 0);
    }

    #[test]
    fn test_cyclic_orders_and_powers() {
        let z6 = cyclic(6).unwrap();
        assert_eq!(z6.order_of(1), 6);
        assert_eq!(z6.order_of(2), 3);
        assert_eq!(z6.order_of(3), 2);
        assert_eq!(z6.pow(1, 4), 4);
        assert_eq!(z6.pow(1, -1), 5);
        assert_eq!(z6.pow(2, 0), 0);
        assert!(z6.is_cyclic());
    }

    #[test]
    fn test_closure() {
        let z6 = cyclic(6).unwrap();
        assert_eq!(z6.closure(&[2]), vec![0, 2, 4]);
        assert_eq!(z6.closure(&[2, 3]), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(z6.closure(&[]), vec![0]);
    }

    #[test]
    fn test_lagrange() {
        for g in [cyclic(12).unwrap(), symmetric(4).unwrap()] {
            for h in g.proper_subgroups() {
                assert_eq!(g.order() % h.order(), 0, "{} in {}", h.order(), g.order());
                assert!(h.order() > 1 && h.order() < g.order());
            }
        }
    }

    #[test]
    fn test_subgroup_counts() {
        // Z12 has one subgroup per divisor: 2, 3, 4, 6
        assert_eq!(cyclic(12).unwrap().proper_subgroups().len(), 4);
        // S3: three of order 2, one of order 3
        let s3 = symmetric(3).unwrap();
        let sizes: Vec<usize> = s3.proper_subgroups().iter().map(Group::order).collect();
        assert_eq!(sizes, vec![2, 2, 2, 3]);
        // S4 has 28 proper non-trivial subgroups
        assert_eq!(symmetric(4).unwrap().proper_subgroup_sets().len(), 28);
    }

    #[test]
    fn test_s3_normal_subgroup_and_quotient() {
        let s3 = symmetric(3).unwrap();
        assert!(!s3.is_abelian());

        let subs = s3.proper_subgroups();
        let normal: Vec<&Group> = subs
            .iter()
            .filter(|h| s3.is_normal(h).unwrap())
            .collect();
        assert_eq!(normal.len(), 1);
        assert_eq!(normal[0].order(), 3);

        let q = s3.quotient(normal[0]).unwrap();
        assert_eq!(q.order(), 2);
        assert!(q.isomorphism(&cyclic(2).unwrap()).is_some());

        // An order-2 subgroup is not normal
        let err = s3.quotient(&subs[0]).unwrap_err();
        assert!(matches!(err, Error::NotASubalgebra(_)));
    }

    #[test]
    fn test_embed_rejects_foreign_group() {
        let v4 = klein();
        let z2 = cyclic(2).unwrap();
        assert!(matches!(v4.is_normal(&z2), Err(Error::MismatchedAlgebra(_))));
    }

    #[test]
    fn test_normal_subset_out_of_range() {
        let z4 = cyclic(4).unwrap();
        assert!(z4.is_normal_subset(&[0, 2]));
        assert!(!z4.is_normal_subset(&[0, 7]));
        assert!(matches!(z4.quotient_by(&[0, 7]), Err(Error::NotASubalgebra(_))));
    }

    #[test]
    fn test_cosets() {
        let z6 = cyclic(6).unwrap();
        let h = z6.closure(&[3]);
        assert_eq!(z6.left_coset(1, &h), vec![1, 4]);
        assert_eq!(z6.right_coset(1, &h), vec![1, 4]);
        assert_eq!(z6.left_cosets(&h), vec![vec![0, 3], vec![1, 4], vec![2, 5]]);

        let q = z6.quotient_by(&h).unwrap();
        assert_eq!(q.order(), 3);
        assert!(q.is_cyclic());
        assert_eq!(q.label(0), "{e, a^3}");
    }

    #[test]
    fn test_center_classes_commutators() {
        let s3 = symmetric(3).unwrap();
        assert_eq!(s3.center().unwrap().order(), 1);
        let sizes: Vec<usize> = s3.conjugacy_classes().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 3, 2]);
        assert_eq!(s3.commutator_subgroup().unwrap().order(), 3);

        let v4 = klein();
        assert_eq!(v4.center().unwrap().order(), 4);
        assert_eq!(v4.commutator_subgroup().unwrap().order(), 1);
    }

    #[test]
    fn test_subgroup_rejects_non_subgroup() {
        let z6 = cyclic(6).unwrap();
        assert!(z6.subgroup(&[0, 1]).is_err());
        assert!(z6.subgroup(&[2, 4]).is_err()); // missing identity
        assert_eq!(z6.subgroup(&[0, 2, 4]).unwrap().order(), 3);
    }
}
