//! Persistence Pairs
//!
//! Read off a reduced boundary matrix:
//!
//! - column j non-empty: simplex j destroys the class created by low(j)
//! - column j empty and j never a low: simplex j creates an essential class
//!
//! Every index plays exactly one role, which [`PersistencePairs::validate`]
//! checks after the fact.

use crate::boundary::{BoundaryMatrix, Representation};
use crate::error::{Error, Result};

/// Creator/destroyer index pairs plus unpaired (essential) creators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistencePairs {
    /// `(creator, destroyer)`, sorted by creator
    pairs: Vec<(usize, usize)>,
    /// Creators without destroyer, ascending
    essential: Vec<usize>,
}

impl PersistencePairs {
    /// Extract the pairing of a reduced matrix.
    ///
    /// Pairs of a dualized matrix are mapped back to the indices of the
    /// original filtration.
    pub fn from_reduced<R: Representation>(matrix: &BoundaryMatrix<R>) -> Self {
        let n = matrix.num_columns();
        let mut paired = vec![false; n];
        let mut pairs = Vec::new();

        for j in 0..n {
            if let Some(i) = matrix.low(j) {
                pairs.push((i, j));
                paired[i] = true;
                paired[j] = true;
            }
        }

        let mut essential: Vec<usize> = (0..n)
            .filter(|&j| !paired[j] && matrix.is_empty(j))
            .collect();

        if matrix.is_dualized() {
            for pair in pairs.iter_mut() {
                let (i, j) = *pair;
                *pair = (n - 1 - j, n - 1 - i);
            }
            for e in essential.iter_mut() {
                *e = n - 1 - *e;
            }
            essential.reverse();
        }

        pairs.sort_unstable();

        Self { pairs, essential }
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn essential(&self) -> &[usize] {
        &self.essential
    }

    /// Number of finite pairs. Essential creators are not counted, see
    /// [`essential`](Self::essential).
    pub fn num_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// No pairs and no essential creators, i.e. the pairing of an empty
    /// complex
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.essential.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (usize, usize)> {
        self.pairs.iter()
    }

    pub fn contains(&self, creator: usize, destroyer: usize) -> bool {
        self.pairs.binary_search(&(creator, destroyer)).is_ok()
    }

    pub fn is_essential(&self, creator: usize) -> bool {
        self.essential.binary_search(&creator).is_ok()
    }

    /// Check that creators, destroyers and essential creators partition
    /// `0..n`, and that every creator precedes its destroyer.
    pub fn validate(&self, n: usize) -> Result<()> {
        let mut roles = vec![0u8; n];

        let mut assign = |index: usize| -> Result<()> {
            match roles.get_mut(index) {
                Some(count) => {
                    *count += 1;
                    Ok(())
                }
                None => Err(Error::InvariantViolation(format!(
                    "index {} is outside of the complex of size {}",
                    index, n
                ))),
            }
        };

        for &(creator, destroyer) in &self.pairs {
            if creator >= destroyer {
                return Err(Error::InvariantViolation(format!(
                    "creator {} does not precede destroyer {}",
                    creator, destroyer
                )));
            }
            assign(creator)?;
            assign(destroyer)?;
        }
        for &creator in &self.essential {
            assign(creator)?;
        }

        if let Some(index) = roles.iter().position(|&count| count != 1) {
            return Err(Error::InvariantViolation(format!(
                "simplex {} has {} roles in the pairing, expected exactly one",
                index, roles[index]
            )));
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a PersistencePairs {
    type Item = &'a (usize, usize);
    type IntoIter = std::slice::Iter<'a, (usize, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
