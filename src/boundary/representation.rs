//! Column Representations
//!
//! A column of a GF(2) matrix is a set of row indices: adding two columns
//! is their symmetric difference. How the set is stored only affects
//! performance, never the result of a reduction.
//!
//! | Variant        | Storage                 | Addition                  |
//! |----------------|-------------------------|---------------------------|
//! | `VectorColumn` | sorted `Vec<usize>`     | linear two-way merge      |
//! | `SetColumn`    | `BTreeSet<usize>`       | per-element toggle        |
//! | `ListColumn`   | sorted `LinkedList`     | linear two-way merge      |
//!
//! The vector is the default: merges are linear and cache friendly. The
//! set wins when a long column repeatedly receives short ones, since only
//! the short column is walked.

use std::collections::{btree_set, linked_list, BTreeSet, LinkedList};
use std::fmt::Debug;
use std::iter::{Copied, Peekable};

/// Storage strategy for one column of a boundary matrix.
///
/// Implementors hold a duplicate-free set of row indices and iterate it in
/// ascending order.
pub trait Representation: Clone + Debug + Default {
    /// Ascending iterator over the row indices
    type Iter<'a>: Iterator<Item = usize> + 'a
    where
        Self: 'a;

    /// Build a column from row indices. Indices occurring an even number
    /// of times cancel, as coefficients are taken mod 2.
    fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self;

    fn is_empty(&self) -> bool;

    /// Largest row index (the pivot), or `None` for an empty column
    fn low(&self) -> Option<usize>;

    /// Symmetric difference with `other`, in place
    fn add(&mut self, other: &Self);

    /// Number of non-zero entries
    fn len(&self) -> usize;

    fn iter(&self) -> Self::Iter<'_>;

    fn clear(&mut self);

    fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

/// Sort and cancel duplicate pairs
fn reduce_mod2(indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut sorted: Vec<usize> = indices.into_iter().collect();
    sorted.sort_unstable();

    let mut result: Vec<usize> = Vec::with_capacity(sorted.len());
    for index in sorted {
        if result.last() == Some(&index) {
            result.pop();
        } else {
            result.push(index);
        }
    }
    result
}

/// Merge two ascending sequences, dropping elements present in both
fn symmetric_merge<A, B, E>(a: A, b: B, out: &mut E)
where
    A: Iterator<Item = usize>,
    B: Iterator<Item = usize>,
    E: Extend<usize>,
{
    let mut a: Peekable<A> = a.peekable();
    let mut b: Peekable<B> = b.peekable();

    loop {
        let next = match (a.peek(), b.peek()) {
            (Some(&x), Some(&y)) if x < y => a.next(),
            (Some(&x), Some(&y)) if x > y => b.next(),
            (Some(_), Some(_)) => {
                a.next();
                b.next();
                continue;
            }
            (Some(_), None) => a.next(),
            (None, Some(_)) => b.next(),
            (None, None) => break,
        };
        out.extend(next);
    }
}

/// Sorted vector of row indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorColumn {
    rows: Vec<usize>,
}

impl Representation for VectorColumn {
    type Iter<'a> = Copied<std::slice::Iter<'a, usize>>;

    fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        Self { rows: reduce_mod2(indices) }
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn low(&self) -> Option<usize> {
        self.rows.last().copied()
    }

    fn add(&mut self, other: &Self) {
        let mut merged = Vec::with_capacity(self.rows.len() + other.rows.len());
        symmetric_merge(self.rows.iter().copied(), other.rows.iter().copied(), &mut merged);
        self.rows = merged;
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.rows.iter().copied()
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}

/// Ordered set of row indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetColumn {
    rows: BTreeSet<usize>,
}

impl Representation for SetColumn {
    type Iter<'a> = Copied<btree_set::Iter<'a, usize>>;

    fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let mut rows = BTreeSet::new();
        for index in indices {
            if !rows.remove(&index) {
                rows.insert(index);
            }
        }
        Self { rows }
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn low(&self) -> Option<usize> {
        self.rows.last().copied()
    }

    fn add(&mut self, other: &Self) {
        for &row in &other.rows {
            if !self.rows.remove(&row) {
                self.rows.insert(row);
            }
        }
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.rows.iter().copied()
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}

/// Sorted linked list of row indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListColumn {
    rows: LinkedList<usize>,
}

impl Representation for ListColumn {
    type Iter<'a> = Copied<linked_list::Iter<'a, usize>>;

    fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        Self { rows: reduce_mod2(indices).into_iter().collect() }
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn low(&self) -> Option<usize> {
        self.rows.back().copied()
    }

    fn add(&mut self, other: &Self) {
        let mut merged = LinkedList::new();
        symmetric_merge(self.rows.iter().copied(), other.rows.iter().copied(), &mut merged);
        self.rows = merged;
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.rows.iter().copied()
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}
