//! Modules over finite rings, and vector spaces over finite fields.
//!
//! The scalar action is stored as an |R|×|V| table, so unlike a Cayley table
//! it need not be square.

use std::fmt;

use ndarray::Array2;

use super::group::Group;
use super::ring::{Field, Ring};
use crate::error::{Error, Result};

/// Scalars acting on a module: a ring, or a field for vector spaces.
pub trait ScalarRing {
    /// The ring structure of the scalars.
    fn ring(&self) -> &Ring;
}

impl ScalarRing for Ring {
    fn ring(&self) -> &Ring {
        self
    }
}

impl ScalarRing for Field {
    fn ring(&self) -> &Ring {
        Field::ring(self)
    }
}

/// An abelian group of vectors with a scalar action satisfying
///
/// - `1·v = v` (when the ring has a one)
/// - `(s₁ + s₂)·v = s₁·v + s₂·v`
/// - `s·(v₁ + v₂) = s·v₁ + s·v₂`
/// - `(s₁ × s₂)·v = s₁·(s₂·v)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module<R: ScalarRing = Ring> {
    scalars: R,
    vectors: Group,
    action: Array2<usize>,
}

/// A module over a field.
pub type VectorSpace = Module<Field>;

impl<R: ScalarRing> Module<R> {
    /// Create a module, tabulating the scalar action `op(s, v)` on indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonCommutative`] if the vectors are not abelian,
    /// [`Error::Range`] if the action leaves the vectors, or
    /// [`Error::ModuleAxiom`] with a witness for the first failing axiom.
    pub fn new(scalars: R, vectors: Group, op: impl Fn(usize, usize) -> usize) -> Result<Self> {
        let shape = (scalars.ring().order(), vectors.order());
        Self::from_table(scalars, vectors, Array2::from_shape_fn(shape, |(s, v)| op(s, v)))
    }

    /// Create a module from a tabulated action, `table[[s, v]] = s·v`.
    ///
    /// # Errors
    ///
    /// See [`Module::new`]; additionally [`Error::SizeMismatch`] if the table
    /// shape is not |R|×|V|.
    pub fn from_table(scalars: R, vectors: Group, action: Array2<usize>) -> Result<Self> {
        let (r, n) = (scalars.ring().order(), vectors.order());
        if action.nrows() != r {
            return Err(Error::SizeMismatch {
                elements: r,
                order: action.nrows(),
            });
        }
        if action.ncols() != n {
            return Err(Error::SizeMismatch {
                elements: n,
                order: action.ncols(),
            });
        }
        vectors.magma().check_commutative()?;
        if let Some(((row, col), &value)) = action.indexed_iter().find(|(_, &v)| v >= n) {
            return Err(Error::Range {
                row,
                col,
                value,
                order: n,
            });
        }

        let module = Self {
            scalars,
            vectors,
            action,
        };
        module.check_axioms()?;
        Ok(module)
    }

    fn axiom_error(&self, axiom: &'static str, scalars: &[usize], vectors: &[usize]) -> Error {
        let ring = self.scalars.ring();
        let s: Vec<&str> = scalars.iter().map(|&x| ring.label(x)).collect();
        let v: Vec<&str> = vectors.iter().map(|&x| self.vectors.label(x)).collect();
        Error::ModuleAxiom {
            axiom,
            witness: format!("s = ({}), v = ({})", s.join(", "), v.join(", ")),
        }
    }

    fn check_axioms(&self) -> Result<()> {
        let ring = self.scalars.ring();
        let (r, n) = (ring.order(), self.vectors.order());
        let add = |a, b| self.vectors.op(a, b);

        if let Some(one) = ring.one() {
            if let Some(v) = (0..n).find(|&v| self.act(one, v) != v) {
                return Err(self.axiom_error("1v = v", &[one], &[v]));
            }
        }

        for s1 in 0..r {
            for s2 in 0..r {
                for v in 0..n {
                    if self.act(ring.add(s1, s2), v) != add(self.act(s1, v), self.act(s2, v)) {
                        return Err(self.axiom_error("(s1 + s2)v = s1v + s2v", &[s1, s2], &[v]));
                    }
                }
            }
        }

        for s in 0..r {
            for v1 in 0..n {
                for v2 in 0..n {
                    if self.act(s, add(v1, v2)) != add(self.act(s, v1), self.act(s, v2)) {
                        return Err(self.axiom_error("s(v1 + v2) = sv1 + sv2", &[s], &[v1, v2]));
                    }
                }
            }
        }

        for s1 in 0..r {
            for s2 in 0..r {
                for v in 0..n {
                    if self.act(ring.mult(s1, s2), v) != self.act(s1, self.act(s2, v)) {
                        return Err(self.axiom_error("(s1 s2)v = s1(s2 v)", &[s1, s2], &[v]));
                    }
                }
            }
        }
        Ok(())
    }

    /// The scalars.
    pub fn scalars(&self) -> &R {
        &self.scalars
    }

    /// The group of vectors.
    pub fn vectors(&self) -> &Group {
        &self.vectors
    }

    /// The action table, `[[s, v]] = s·v`.
    pub fn action_table(&self) -> &Array2<usize> {
        &self.action
    }

    /// Compute `s·v` on indices.
    pub fn act(&self, s: usize, v: usize) -> usize {
        self.action[[s, v]]
    }

    /// Compute `v₁ + v₂` on indices.
    pub fn add(&self, v1: usize, v2: usize) -> usize {
        self.vectors.op(v1, v2)
    }

    /// Compute `s·v` on labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] for an unknown label.
    pub fn scale(&self, s: &str, v: &str) -> Result<&str> {
        let s = self.scalars.ring().index_of(s)?;
        let v = self.vectors.index_of(v)?;
        Ok(self.vectors.label(self.act(s, v)))
    }

    /// The submodule spanned by `generators`: the smallest set containing
    /// them that is closed under addition and the scalar action. Returns
    /// sorted indices; out-of-range generators are ignored.
    pub fn span(&self, generators: &[usize]) -> Vec<usize> {
        let n = self.vectors.order();
        let mut member = vec![false; n];
        member[0] = true;
        let mut members = vec![0];
        let mut pending: Vec<usize> = generators.iter().copied().filter(|&g| g < n).collect();

        while let Some(x) = pending.pop() {
            if member[x] {
                continue;
            }
            member[x] = true;
            members.push(x);
            let sums = members.iter().map(|&m| self.add(m, x));
            let scaled = (0..self.scalars.ring().order()).map(|s| self.act(s, x));
            pending.extend(sums.chain(scaled).filter(|&y| !member[y]));
        }
        members.sort_unstable();
        members
    }
}

impl Module<Field> {
    /// The coordinate space Fᵈ with componentwise addition and scaling.
    ///
    /// Vectors are labelled by their coordinates joined with the field's
    /// delimiter; index `x₁·qᵈ⁻¹ + … + x_d` holds `(x₁, …, x_d)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] for `dim == 0`.
    pub fn coordinate_space(field: &Field, dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::invalid_params("dimension must be at least 1"));
        }
        let base = field.ring().additive_group();
        let mut vectors = base.clone();
        for _ in 1..dim {
            vectors = vectors.direct_product(base)?;
        }
        let vectors = vectors.with_name(format!("{}^{dim}", field.name()));

        let q = field.order();
        let scale = |s: usize, v: usize| {
            let mut digits = Vec::with_capacity(dim);
            let mut rest = v;
            for _ in 0..dim {
                digits.push(rest % q);
                rest /= q;
            }
            digits
                .iter()
                .rev()
                .fold(0, |acc, &x| acc * q + field.mult(s, x))
        };
        Self::new(field.clone(), vectors, scale)
    }

    /// The dimension over the field: log base |F| of |V|.
    pub fn dimension(&self) -> usize {
        let q = self.scalars.order();
        let mut size = self.vectors.order();
        let mut dim = 0;
        while size > 1 {
            size /= q;
            dim += 1;
        }
        dim
    }
}

impl<R: ScalarRing> fmt::Display for Module<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Module {:?} over {:?}",
            self.vectors.name(),
            self.scalars.ring().name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{cyclic, mod_n_ring};

    #[test]
    fn test_group_as_z_module() {
        // Z6 acting on Z3 by s·v = s v mod 3
        let z6 = mod_n_ring(6).unwrap();
        let z3 = cyclic(3).unwrap();
        let m = Module::new(z6, z3, |s, v| (s * v) % 3).unwrap();
        assert_eq!(m.act(4, 2), 2);
        assert_eq!(m.scale("5", "a").unwrap(), "a^2");
        assert_eq!(m.span(&[1]), vec![0, 1, 2]);
    }

    #[test]
    fn test_bad_action_reports_axiom() {
        let z3 = mod_n_ring(3).unwrap();
        let g = cyclic(3).unwrap();
        // constant action breaks 1v = v
        let err = Module::new(z3.clone(), g.clone(), |_, _| 0).unwrap_err();
        assert!(matches!(err, Error::ModuleAxiom { axiom: "1v = v", .. }));

        // squaring the scalar breaks additivity in the scalar
        let err = Module::new(z3, g, |s, v| (s * s * v) % 3).unwrap_err();
        assert!(matches!(
            err,
            Error::ModuleAxiom {
                axiom: "(s1 + s2)v = s1v + s2v",
                ..
            }
        ));
    }

    #[test]
    fn test_action_out_of_range() {
        let z2 = mod_n_ring(2).unwrap();
        let err = Module::new(z2, cyclic(2).unwrap(), |_, _| 5).unwrap_err();
        assert!(matches!(err, Error::Range { value: 5, .. }));
    }

    #[test]
    fn test_non_abelian_vectors() {
        let z2 = mod_n_ring(2).unwrap();
        let s3 = crate::generate::symmetric(3).unwrap();
        let err = Module::new(z2, s3, |s, v| if s == 0 { 0 } else { v }).unwrap_err();
        assert!(matches!(err, Error::NonCommutative { .. }));
    }

    #[test]
    fn test_coordinate_space() {
        let f3 = mod_n_ring(3).unwrap().to_field().unwrap();
        let v = VectorSpace::coordinate_space(&f3, 2).unwrap();
        assert_eq!(v.vectors().order(), 9);
        assert_eq!(v.dimension(), 2);
        assert_eq!(v.vectors().label(5), "1:2");
        // 2·(1, 2) = (2, 1)
        assert_eq!(v.scale("2", "1:2").unwrap(), "2:1");
        assert_eq!(v.span(&[5]).len(), 3);
        assert_eq!(v.span(&[1, 3]).len(), 9);
        assert!(VectorSpace::coordinate_space(&f3, 0).is_err());
    }
}
