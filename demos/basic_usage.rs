//! Basic usage example for the finite-algebras library.
//!
//! This example builds algebras from tables, inspects the canonical
//! generators and works with Gaussian integers.

use finite_algebras::generate::{cyclic, gaussian_residue_field, mod_n_ring, symmetric};
use finite_algebras::{catalogue, AlgebraBuilder, GaussianInt, VectorSpace};

fn main() {
    println!("Finite Algebras - Basic Usage Example\n");

    // Classify a table: the Klein-4 group
    println!("Building V4 from its Cayley table...");
    let v4 = AlgebraBuilder::new()
        .name("V4")
        .description("Klein-4 group")
        .elements(["e", "h", "v", "r"])
        .table(vec![
            vec!["e", "h", "v", "r"],
            vec!["h", "e", "r", "v"],
            vec!["v", "r", "e", "h"],
            vec!["r", "v", "h", "e"],
        ])
        .build()
        .expect("Failed to build V4");
    println!("{v4}");
    println!();

    // A table that stops short of a group reports why
    let rps = AlgebraBuilder::new()
        .name("RPS")
        .elements(["r", "p", "s"])
        .table(vec![vec![0, 1, 0], vec![1, 1, 2], vec![0, 2, 2]])
        .build_with_reason()
        .expect("Failed to build RPS");
    println!("RPS is a {}", rps.kind());
    if let Some(reason) = &rps.limit {
        println!("  Stopped at: {reason}");
    }
    println!();

    // Symmetric group S3: subgroups and the quotient by the rotations
    let s3 = symmetric(3).expect("Failed to build S3");
    println!("S3 elements: {}", s3.elements());
    for h in s3.proper_subgroups() {
        let normal = s3.is_normal(&h).unwrap_or(false);
        println!(
            "  subgroup {} of order {}{}",
            h.elements(),
            h.order(),
            if normal { " (normal)" } else { "" }
        );
    }
    if let Some(rotations) = s3
        .proper_subgroups()
        .into_iter()
        .find(|h| s3.is_normal(h).unwrap_or(false))
    {
        let q = s3.quotient(&rotations).expect("Quotient failed");
        println!(
            "  S3 / {} ≅ Z2: {}",
            rotations.name(),
            q.is_isomorphic(&cyclic(2).expect("Failed to build Z2"))
        );
    }
    println!();

    // Integers mod n: fields exactly when n is prime
    for n in [5usize, 6, 7] {
        let r = mod_n_ring(n).expect("Failed to build ring");
        println!(
            "R{n}: field = {}, zero divisors = {:?}",
            r.is_field(),
            r.zero_divisors()
        );
    }
    println!();

    // Gaussian integers
    let a = GaussianInt::new(11, 3);
    let b = GaussianInt::new(1, 8);
    let (g, x, y) = a.xgcd(b).expect("xgcd failed");
    println!("gcd({a}, {b}) = {g}");
    println!("  ({a})({x}) + ({b})({y}) = {}", a * x + b * y);

    let (q, r) = GaussianInt::new(4, 5)
        .mod_divmod(GaussianInt::new(1, -2))
        .expect("Division failed");
    println!("(4+5i) = (1-2i)({q}) + ({r})");
    println!();

    // Finite fields from Gaussian primes
    let f13 = gaussian_residue_field(GaussianInt::new(3, -2)).expect("Not a Gaussian prime");
    println!("{} has {} elements", f13.name(), f13.order());

    let f9 = catalogue::get_by_name("F9")
        .expect("F9 missing")
        .as_field()
        .expect("F9 is not a field")
        .clone();
    let plane = VectorSpace::coordinate_space(&f9, 2).expect("Failed to build F9^2");
    println!(
        "F9^2 has {} vectors and dimension {}",
        plane.vectors().order(),
        plane.dimension()
    );

    #[cfg(feature = "serde")]
    {
        println!();
        let json = finite_algebras::io::to_json(&v4).expect("Serialization failed");
        println!("V4 as JSON:\n{json}");
    }
}
