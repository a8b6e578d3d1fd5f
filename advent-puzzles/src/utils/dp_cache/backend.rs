//! Storage backends for the DP cache.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Storage for computed values
pub trait Backend<I, K> {
    /// The stored value for `index`, if it has been computed.
    fn get(&self, index: &I) -> Option<&K>;

    /// Store the value for `index`, replacing any previous one.
    fn insert(&mut self, index: I, value: K);

    /// Number of stored values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed storage for dense `usize` indices, grown on demand.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
    filled: usize,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            filled: 0,
        }
    }

    /// Pre-size for indices `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        let mut data = Vec::with_capacity(capacity);
        data.resize_with(capacity, || None);
        Self { data, filled: 0 }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn insert(&mut self, index: usize, value: K) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        if self.data[index].replace(value).is_none() {
            self.filled += 1;
        }
    }

    fn len(&self) -> usize {
        self.filled
    }
}

/// Hash map storage for sparse or composite indices.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: FxHashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: K) {
        self.data.insert(index, value);
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
