use proptest::prelude::*;

use finite_algebras::generate::{cyclic, mod_n_ring, powerset_ring, symmetric};
use finite_algebras::utils::is_prime;
use finite_algebras::{is_homomorphism, product_projections, Group, Ring};

fn arb_cyclic() -> impl Strategy<Value = Group> {
    (1usize..=24).prop_map(|n| cyclic(n).unwrap())
}

fn arb_mod_ring() -> impl Strategy<Value = Ring> {
    (1usize..=20).prop_map(|n| mod_n_ring(n).unwrap())
}

/// A group with three of its elements.
fn arb_group_triple() -> impl Strategy<Value = (Group, usize, usize, usize)> {
    prop_oneof![arb_cyclic(), (1usize..=4).prop_map(|n| symmetric(n).unwrap())].prop_flat_map(|g| {
        let n = g.order();
        (Just(g), 0..n, 0..n, 0..n)
    })
}

fn arb_ring_triple() -> impl Strategy<Value = (Ring, usize, usize, usize)> {
    prop_oneof![arb_mod_ring(), (0usize..=4).prop_map(|n| powerset_ring(n).unwrap())].prop_flat_map(|r| {
        let n = r.order();
        (Just(r), 0..n, 0..n, 0..n)
    })
}

// ===== Group laws =====

proptest! {
    #[test]
    fn group_associative((g, a, b, c) in arb_group_triple()) {
        prop_assert_eq!(g.op(g.op(a, b), c), g.op(a, g.op(b, c)));
    }

    #[test]
    fn group_identity_and_inverse((g, a, _b, _c) in arb_group_triple()) {
        prop_assert_eq!(g.op(0, a), a);
        prop_assert_eq!(g.op(a, 0), a);
        prop_assert_eq!(g.op(a, g.inv(a)), 0);
        prop_assert_eq!(g.op(g.inv(a), a), 0);
    }

    #[test]
    fn element_order_divides_group_order((g, a, _b, _c) in arb_group_triple()) {
        let k = g.order_of(a);
        prop_assert_eq!(g.order() % k, 0);
        prop_assert_eq!(g.pow(a, k as i64), 0);
    }

    #[test]
    fn lagrange(g in arb_cyclic()) {
        let n = g.order();
        let subgroups = g.proper_subgroup_sets();
        for h in &subgroups {
            prop_assert_eq!(n % h.len(), 0);
        }
        // one subgroup per divisor other than 1 and n
        let divisors = (2..n).filter(|d| n % d == 0).count();
        prop_assert_eq!(subgroups.len(), divisors);
    }
}

// ===== Ring laws =====

proptest! {
    #[test]
    fn ring_laws((r, a, b, c) in arb_ring_triple()) {
        prop_assert_eq!(r.add(a, b), r.add(b, a));
        prop_assert_eq!(r.mult(r.mult(a, b), c), r.mult(a, r.mult(b, c)));
        prop_assert_eq!(r.mult(a, r.add(b, c)), r.add(r.mult(a, b), r.mult(a, c)));
        prop_assert_eq!(r.mult(r.add(b, c), a), r.add(r.mult(b, a), r.mult(c, a)));
    }

    #[test]
    fn mod_n_is_field_iff_prime(r in arb_mod_ring()) {
        prop_assert_eq!(r.is_field(), is_prime(r.order() as u64));
    }

    #[test]
    fn field_inverses(p in prop::sample::select(vec![2usize, 3, 5, 7, 11, 13, 17, 19])) {
        let f = mod_n_ring(p).unwrap().to_field().unwrap();
        for a in 1..p {
            let inv = f.mult_inv(a).unwrap();
            prop_assert_eq!(f.mult(a, inv), f.one());
        }
    }
}

// ===== Products and isomorphisms =====

proptest! {
    #[test]
    fn projections_are_homomorphisms(m in 1usize..=6, n in 1usize..=6) {
        let (a, b) = (cyclic(m).unwrap(), cyclic(n).unwrap());
        let p = a.direct_product(&b).unwrap();
        let (left, right) = product_projections(m, n);
        prop_assert!(is_homomorphism(p.table(), a.table(), &left));
        prop_assert!(is_homomorphism(p.table(), b.table(), &right));
    }

    #[test]
    fn chinese_remainder(m in 1usize..=6, n in 1usize..=6) {
        let p = cyclic(m).unwrap().direct_product(&cyclic(n).unwrap()).unwrap();
        let z = cyclic(m * n).unwrap();
        let map = p.isomorphism(&z);
        prop_assert_eq!(map.is_some(), num_integer::gcd(m, n) == 1);
        if let Some(map) = map {
            prop_assert_eq!(map[0], 0);
            prop_assert!(is_homomorphism(p.table(), z.table(), &map));
        }
    }
}

#[cfg(feature = "serde")]
proptest! {
    #[test]
    fn json_round_trip(r in arb_mod_ring()) {
        let a = finite_algebras::FiniteAlgebra::from(r);
        let json = finite_algebras::io::to_json(&a).unwrap();
        prop_assert_eq!(finite_algebras::io::from_json(&json).unwrap(), a);
    }
}
