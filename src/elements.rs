//! Element registry: ordered, distinct element labels.
//!
//! The registry is the bijection between an element's label and its
//! row/column index in every Cayley table of an algebra. Lookup is a linear
//! scan; carrier sets are small.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An ordered sequence of unique element labels.
///
/// # Example
///
/// ```
/// use finite_algebras::Elements;
///
/// let elems = Elements::new(["e", "a", "b"]).unwrap();
/// assert_eq!(elems.index_of("b"), Some(2));
/// assert_eq!(&elems[1], "a");
/// assert!(Elements::new(["e", "e"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct Elements {
    labels: Vec<String>,
}

impl Elements {
    /// Create a registry, rejecting duplicate labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLabel`] for the first repeated label.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(Error::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self { labels })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get the label at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Find the index of a label.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Find the index of a label, failing with [`Error::UnknownElement`].
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not registered.
    pub fn require(&self, label: &str) -> Result<usize> {
        self.index_of(label)
            .ok_or_else(|| Error::UnknownElement(label.to_string()))
    }

    /// Iterate over the labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Get all labels as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    /// Check that the registry matches a table order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the counts differ.
    pub fn check_order(&self, order: usize) -> Result<()> {
        if self.len() == order {
            Ok(())
        } else {
            Err(Error::SizeMismatch {
                elements: self.len(),
                order,
            })
        }
    }

    /// Reorder labels; `order[k]` is the old index placed at position k.
    pub(crate) fn permuted(&self, order: &[usize]) -> Self {
        Self {
            labels: order.iter().map(|&i| self.labels[i].clone()).collect(),
        }
    }

    /// Copy out the labels at the given indices.
    pub(crate) fn subset(&self, indices: &[usize]) -> Self {
        self.permuted(indices)
    }

    /// Format a set of indices as `{a, b, c}`.
    pub(crate) fn describe(&self, indices: &[usize]) -> String {
        let parts: Vec<&str> = indices.iter().map(|&i| self.labels[i].as_str()).collect();
        format!("{{{}}}", parts.join(", "))
    }
}

impl Index<usize> for Elements {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.labels[index]
    }
}

impl TryFrom<Vec<String>> for Elements {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

impl From<Elements> for Vec<String> {
    fn from(elements: Elements) -> Self {
        elements.labels
    }
}

impl fmt::Display for Elements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.labels.join(", "))
    }
}
