//! Insertion-ordered set with uniform random pick.

use std::collections::HashMap;
use std::hash::Hash;

use rand::{Rng, RngExt};

/// A set that remembers insertion order and can hand out a uniformly random
/// element in O(1).
///
/// Values live in a dense `Vec`; a value→index map makes membership O(1).
/// [`remove`](Self::remove) keeps the remaining order (O(n));
/// [`swap_remove`](Self::swap_remove) is O(1) but moves the last element
/// into the hole.
///
/// An optional capacity limit silently drops inserts once reached.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    index: HashMap<T, usize>,
    limit: Option<usize>,
}

impl<T: Hash + Eq + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> OrderedSet<T> {
    /// Create an unbounded set.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            limit: None,
        }
    }

    /// Create a set that holds at most `limit` elements.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            items: Vec::with_capacity(limit.min(1024)),
            index: HashMap::new(),
            limit: Some(limit),
        }
    }

    /// Add `value` at the end. Returns `false` if it was already present or
    /// the set is full.
    pub fn insert(&mut self, value: T) -> bool {
        if self.index.contains_key(&value) || self.limit.is_some_and(|l| self.items.len() >= l) {
            return false;
        }
        self.index.insert(value.clone(), self.items.len());
        self.items.push(value);
        true
    }

    /// Remove `value`, shifting later elements down to keep their order.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(i) = self.index.remove(value) else {
            return false;
        };
        self.items.remove(i);
        for (j, v) in self.items.iter().enumerate().skip(i) {
            self.index.insert(v.clone(), j);
        }
        true
    }

    /// Remove `value` by moving the last element into its slot.
    pub fn swap_remove(&mut self, value: &T) -> bool {
        let Some(i) = self.index.remove(value) else {
            return false;
        };
        self.items.swap_remove(i);
        if let Some(moved) = self.items.get(i) {
            self.index.insert(moved.clone(), i);
        }
        true
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Element at position `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.items.get(i)
    }

    /// Position of `value`, if present.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.index.get(value).copied()
    }

    /// A uniformly random element, or `None` when empty.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(rng.random_range(0..self.items.len()))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The maximum number of elements, if bounded.
    #[inline]
    pub fn capacity_limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}
