//! Singly linked list used as a small deduplicating set
//!
//! Front insertion is O(1); membership is a linear scan. The keyword index
//! keeps one list per token and one per file, and those lists stay short
//! enough for the scan to win over hashing.

/// Node of a [`LinkedList`]
struct ListNode<T> {
    data: T,
    next: Option<Box<ListNode<T>>>,
}

/// Head-owned singly linked list
pub struct LinkedList<T> {
    head: Option<Box<ListNode<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Push an element to the front of the list
    pub fn push_front(&mut self, data: T) {
        let node = Box::new(ListNode {
            data,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Does any element satisfy `equal(element, probe)`?
    pub fn contains_by<Q: ?Sized>(&self, probe: &Q, equal: impl Fn(&T, &Q) -> bool) -> bool {
        self.iter().any(|element| equal(element, probe))
    }

    /// Iterate from the most recently pushed element to the oldest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Does this list contain an element equal to `data`?
    pub fn contains(&self, data: &T) -> bool {
        self.contains_by(data, |a, b| a == b)
    }

    /// Push `data` unless an equal element is already present.
    ///
    /// Returns `true` if the element was inserted.
    pub fn insert_unique(&mut self, data: T) -> bool {
        if self.contains(&data) {
            return false;
        }
        self.push_front(data);
        true
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop overflows on long chains
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`LinkedList`]
pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
