use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-queue of `(key, vertex)` pairs
///
/// Pairs compare lexicographically, so among equal keys the smallest vertex
/// is popped first. Both path engines lean on that for repeatable output.
#[derive(Debug, Clone)]
pub struct MinQueue<K: Ord, V: Ord>(BinaryHeap<Reverse<(K, V)>>);

impl<K: Ord, V: Ord> Default for MinQueue<K, V> {
    fn default() -> Self {
        MinQueue(BinaryHeap::new())
    }
}

impl<K: Ord, V: Ord> MinQueue<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, key: K, vertex: V) {
        self.0.push(Reverse((key, vertex)));
    }

    /// Takes the pair with the smallest key
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        self.0.pop().map(|Reverse(entry)| entry)
    }
}

impl<K: Ord, V: Ord> FromIterator<(K, V)> for MinQueue<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MinQueue(iter.into_iter().map(Reverse).collect())
    }
}
