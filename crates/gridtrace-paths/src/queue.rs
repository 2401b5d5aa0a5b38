//! FIFO queue backed by a singly linked list.
//!
//! Nodes live in a slot arena and link to each other by index. Keeping both
//! a `head` and a `tail` index makes [`Queue::enqueue`] and
//! [`Queue::dequeue`] O(1). Slots freed by `dequeue` are reused by later
//! enqueues, so a queue that is drained and refilled does not grow.

#[derive(Debug, Clone)]
struct Node<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// A first-in first-out queue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Append `value` at the back.
    pub fn enqueue(&mut self, value: T) {
        let node = Node {
            value: Some(value),
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Remove and return the front value, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let node = &mut self.nodes[head];
        let value = node.value.take();
        self.head = node.next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.free.push(head);
        self.len -= 1;
        value
    }

    /// The front value, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.and_then(|h| self.nodes[h].value.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.enqueue(v);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_in_first_out() {
        let mut q = Queue::new();
        q.enqueue("a");
        q.enqueue("b");
        q.enqueue("c");
        assert_eq!(q.len(), 3);
        assert_eq!(q.peek(), Some(&"a"));
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.dequeue(), Some("b"));
        assert_eq!(q.dequeue(), Some("c"));
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn interleaved_operations_keep_order() {
        let mut q: Queue<u32> = (0..3).collect();
        assert_eq!(q.dequeue(), Some(0));
        q.enqueue(3);
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert!(q.is_empty());
        // Emptied queue accepts new values and keeps a consistent tail.
        q.enqueue(4);
        q.enqueue(5);
        assert_eq!(q.dequeue(), Some(4));
        assert_eq!(q.dequeue(), Some(5));
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn slots_are_recycled() {
        let mut q = Queue::new();
        for round in 0..10 {
            for i in 0..8 {
                q.enqueue(round * 8 + i);
            }
            for i in 0..8 {
                assert_eq!(q.dequeue(), Some(round * 8 + i));
            }
        }
        assert_eq!(q.nodes.len(), 8);
    }
}
