use proptest::prelude::*;

use finite_algebras::{GaussianInt, GaussianRat};
use num_traits::{One, Zero};

fn arb_gaussian() -> impl Strategy<Value = GaussianInt> {
    (-1000i64..=1000, -1000i64..=1000).prop_map(|(re, im)| GaussianInt::new(re, im))
}

fn arb_gaussian_nonzero() -> impl Strategy<Value = GaussianInt> {
    arb_gaussian().prop_filter("non-zero", |z| !z.is_zero())
}

// ===== Ring laws =====

proptest! {
    #[test]
    fn multiplication_distributes(a in arb_gaussian(), b in arb_gaussian(), c in arb_gaussian()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn norm_is_multiplicative(a in arb_gaussian(), b in arb_gaussian()) {
        prop_assert_eq!((a * b).norm(), a.norm() * b.norm());
    }

    #[test]
    fn conjugate_product_is_norm(a in arb_gaussian()) {
        prop_assert_eq!(a * a.conj(), GaussianInt::from(a.norm()));
    }
}

// ===== Modified division =====

proptest! {
    #[test]
    fn euclidean_bound(a in arb_gaussian(), b in arb_gaussian_nonzero()) {
        let (q, r) = a.mod_divmod(b).unwrap();
        prop_assert_eq!(b * q + r, a);
        prop_assert!(2 * r.norm() <= b.norm(), "N({}) > N({})/2", r, b);
    }

    #[test]
    fn operators_match_divmod(a in arb_gaussian(), b in arb_gaussian_nonzero()) {
        let (q, r) = a.mod_divmod(b).unwrap();
        prop_assert_eq!(a / b, q);
        prop_assert_eq!(a % b, r);
    }

    #[test]
    fn exact_multiples_divide_cleanly(a in arb_gaussian(), b in arb_gaussian_nonzero()) {
        let (q, r) = (a * b).mod_divmod(b).unwrap();
        prop_assert_eq!(q, a);
        prop_assert!(r.is_zero());
        prop_assert!(b.divides(a * b));
    }
}

// ===== gcd and Bézout =====

proptest! {
    #[test]
    fn bezout_identity(a in arb_gaussian_nonzero(), b in arb_gaussian_nonzero()) {
        let (g, x, y) = a.xgcd(b).unwrap();
        prop_assert_eq!(a * x + b * y, g);
        prop_assert!(g.divides(a));
        prop_assert!(g.divides(b));
    }

    #[test]
    fn gcd_agrees_with_xgcd(a in arb_gaussian_nonzero(), b in arb_gaussian_nonzero()) {
        let g = a.gcd(b).unwrap();
        let (h, _, _) = a.xgcd(b).unwrap();
        prop_assert!(g.is_associate(h) || g == h);
        prop_assert!(g.is_associate(b.gcd(a).unwrap()) || g == b.gcd(a).unwrap());
    }

    #[test]
    fn common_factor_divides_gcd(
        a in arb_gaussian_nonzero(),
        b in arb_gaussian_nonzero(),
        c in (-30i64..=30, -30i64..=30).prop_map(|(x, y)| GaussianInt::new(x, y)),
    ) {
        prop_assume!(!c.is_zero());
        let g = (a * c).gcd(b * c).unwrap();
        prop_assert!(c.divides(g));
    }
}

// ===== Primality =====

proptest! {
    #[test]
    fn primality_invariant_under_associates(a in arb_gaussian_nonzero()) {
        let prime = a.is_gaussian_prime();
        for u in GaussianInt::units() {
            prop_assert_eq!((u * a).is_gaussian_prime(), prime);
        }
        prop_assert_eq!(a.conj().is_gaussian_prime(), prime);
    }

    #[test]
    fn products_of_non_units_are_composite(
        a in arb_gaussian_nonzero(),
        b in arb_gaussian_nonzero(),
    ) {
        prop_assume!(!a.is_unit() && !b.is_unit());
        prop_assert!(!(a * b).is_gaussian_prime());
    }
}

// ===== Gaussian rationals =====

proptest! {
    #[test]
    fn field_inverse(a in arb_gaussian_nonzero()) {
        let z = GaussianRat::from(a);
        prop_assert_eq!(z * z.inverse().unwrap(), GaussianRat::one());
    }

    #[test]
    fn exact_division_round_trip(a in arb_gaussian(), b in arb_gaussian_nonzero()) {
        let q = a.div_exact(b).unwrap();
        prop_assert_eq!(q * GaussianRat::from(b), GaussianRat::from(a));
        prop_assert_eq!((a * b).div_exact(b).unwrap().to_gaussian_int(), Some(a));
    }

    #[test]
    fn rational_norm_matches_integer_norm(a in arb_gaussian()) {
        let n = GaussianRat::from(a).norm();
        prop_assert!(n.is_integer());
        prop_assert_eq!(n.to_integer(), a.norm());
    }
}

#[test]
fn worked_examples() {
    let g = GaussianInt::new(32, 9).gcd(GaussianInt::new(4, 11)).unwrap();
    assert!(g.is_unit());

    let (q, r) = GaussianInt::new(4, 5).mod_divmod(GaussianInt::new(1, -2)).unwrap();
    assert_eq!((q, r), (GaussianInt::new(-1, 3), GaussianInt::new(-1, 0)));

    let (g, x, y) = GaussianInt::new(11, 3).xgcd(GaussianInt::new(1, 8)).unwrap();
    assert_eq!(g, GaussianInt::new(1, -2));
    assert_eq!(x, GaussianInt::new(2, -1));
    assert_eq!(y, GaussianInt::new(0, 3));

    assert!(GaussianInt::ZERO.gcd(GaussianInt::ONE).is_err());
    assert!(GaussianRat::zero().inverse().is_err());
}
