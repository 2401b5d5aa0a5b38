//! Indexed binary min-heap with decrease-key and delete-by-key.
//!
//! Entries are `(value, priority, key)` triples. A key→slot map is kept in
//! sync on every swap so that [`MinPriorityQueue::decrease_priority`] and
//! [`MinPriorityQueue::delete`] can find their entry in O(1) and restore the
//! heap in O(log n).
//!
//! Order among entries of equal priority is unspecified. It is however
//! deterministic: the same sequence of operations always yields the same
//! extraction order.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// An entry owned by a [`MinPriorityQueue`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueueNode<T, P, K> {
    pub value: T,
    pub priority: P,
    pub key: K,
}

/// Binary min-heap addressable by key.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T, P, K> {
    data: Vec<QueueNode<T, P, K>>,
    index: HashMap<K, usize>,
}

impl<T, P, K> Default for MinPriorityQueue<T, P, K>
where
    P: PartialOrd + Copy,
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, K> MinPriorityQueue<T, P, K>
where
    P: PartialOrd + Copy,
    K: Hash + Eq + Clone,
{
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert `value` under `key`.
    ///
    /// If `key` is already queued this behaves exactly like
    /// [`decrease_priority`](Self::decrease_priority): the stored priority is
    /// lowered when `priority` is smaller, and nothing happens otherwise. The
    /// stored value is kept in both cases.
    pub fn insert(&mut self, value: T, priority: P, key: K) {
        if self.index.contains_key(&key) {
            self.decrease_priority(&key, priority);
            return;
        }
        let i = self.data.len();
        self.index.insert(key.clone(), i);
        self.data.push(QueueNode {
            value,
            priority,
            key,
        });
        self.sift_up(i);
    }

    /// Remove and return the entry with the lowest priority, or `None` when
    /// the queue is empty.
    pub fn extract_min(&mut self) -> Option<QueueNode<T, P, K>> {
        if self.data.is_empty() {
            return None;
        }
        let root = self.data.swap_remove(0);
        self.index.remove(&root.key);
        if let Some(first) = self.data.first() {
            self.index.insert(first.key.clone(), 0);
            self.sift_down(0);
        }
        Some(root)
    }

    /// Lower the priority of `key` to `priority`.
    ///
    /// No-op when the key is absent or `priority` is not strictly lower than
    /// the stored one. Returns whether the priority changed.
    pub fn decrease_priority(&mut self, key: &K, priority: P) -> bool {
        let Some(&i) = self.index.get(key) else {
            return false;
        };
        if priority.partial_cmp(&self.data[i].priority) != Some(Ordering::Less) {
            return false;
        }
        self.data[i].priority = priority;
        // Priority only went down, so only the path to the root can be violated.
        self.sift_up(i);
        true
    }

    /// Remove the entry for `key`. Returns `false` when it was not queued.
    pub fn delete(&mut self, key: &K) -> bool {
        let Some(i) = self.index.remove(key) else {
            return false;
        };
        let last = self.data.len() - 1;
        if i == last {
            self.data.pop();
            return true;
        }
        self.data.swap_remove(i);
        self.index.insert(self.data[i].key.clone(), i);
        if i > 0 && self.data[parent(i)].priority > self.data[i].priority {
            self.sift_up(i);
        } else {
            self.sift_down(i);
        }
        true
    }

    /// The lowest-priority entry, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&QueueNode<T, P, K>> {
        self.data.first()
    }

    /// Whether `key` is queued.
    #[inline]
    pub fn has(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Current priority of `key`, if queued.
    pub fn priority(&self, key: &K) -> Option<P> {
        self.index.get(key).map(|&i| self.data[i].priority)
    }

    /// Number of queued entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Keys of every queued entry, in heap order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.data.iter().map(|n| &n.key)
    }

    /// Every queued entry, in heap order.
    pub fn iter(&self) -> impl Iterator<Item = &QueueNode<T, P, K>> {
        self.data.iter()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
        self.index.insert(self.data[i].key.clone(), i);
        self.index.insert(self.data[j].key.clone(), j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 && self.data[parent(i)].priority > self.data[i].priority {
            let p = parent(i);
            self.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.data[left].priority < self.data[smallest].priority {
                smallest = left;
            }
            if right < len && self.data[right].priority < self.data[smallest].priority {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}
