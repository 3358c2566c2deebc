use std::collections::btree_map;
use std::collections::btree_set;
use std::collections::{BTreeMap, BTreeSet};
use std::iter;
use std::slice;

/// A vector with at least one element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

/// A set with at least one element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptySet<T: Ord> {
    items: BTreeSet<T>,
}

/// A multiset (bag) with at least one element. Every element present has a
/// multiplicity of at least one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyMultiSet<T: Ord> {
    counts: BTreeMap<T, u64>,
}

impl<T> NonEmptyVec<T> {
    pub fn new(head: T, tail: Vec<T>) -> Self {
        NonEmptyVec { head, tail }
    }

    pub fn singleton(head: T) -> Self {
        NonEmptyVec::new(head, Vec::new())
    }

    /// Returns `None` when `items` is empty.
    pub fn from_vec(mut items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let tail = items.split_off(1);
        items.pop().map(|head| NonEmptyVec { head, tail })
    }

    pub fn first(&self) -> &T {
        &self.head
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    pub fn iter(&self) -> iter::Chain<iter::Once<&T>, slice::Iter<'_, T>> {
        iter::once(&self.head).chain(self.tail.iter())
    }

    pub fn push(&mut self, item: T) {
        self.tail.push(item)
    }

    pub fn into_vec(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.push(self.head);
        out.extend(self.tail);
        out
    }
}

impl<T: Ord> NonEmptySet<T> {
    /// Adds `head` to `rest`.
    pub fn new(head: T, mut rest: BTreeSet<T>) -> Self {
        rest.insert(head);
        NonEmptySet { items: rest }
    }

    pub fn singleton(item: T) -> Self {
        NonEmptySet::new(item, BTreeSet::new())
    }

    /// Returns `None` when `items` is empty.
    pub fn from_set(items: BTreeSet<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(NonEmptySet { items })
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_set(self) -> BTreeSet<T> {
        self.items
    }
}

impl<T: Ord> NonEmptyMultiSet<T> {
    /// A multiset holding `count` copies of `item`; a count of zero is
    /// treated as one.
    pub fn singleton(item: T, count: u64) -> Self {
        let mut counts = BTreeMap::new();
        counts.insert(item, count.max(1));
        NonEmptyMultiSet { counts }
    }

    /// Drops zero counts; returns `None` if nothing is left.
    pub fn from_counts(counts: BTreeMap<T, u64>) -> Option<Self> {
        let counts = counts
            .into_iter()
            .filter(|&(_, n)| n > 0)
            .collect::<BTreeMap<_, _>>();
        if counts.is_empty() {
            None
        } else {
            Some(NonEmptyMultiSet { counts })
        }
    }

    /// Adds `count` more copies of `item`.
    pub fn add(&mut self, item: T, count: u64) {
        if count > 0 {
            *self.counts.entry(item).or_insert(0) += count;
        }
    }

    /// How many copies of `item` we hold.
    pub fn count_of(&self, item: &T) -> u64 {
        self.counts.get(item).cloned().unwrap_or(0)
    }

    /// The number of distinct elements.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The total number of elements, counting duplicates.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, T, u64> {
        self.counts.iter()
    }
}
