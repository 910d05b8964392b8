use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};

use crate::{Error, Result};

const INITIAL_BUCKETS: usize = 16;
const MAX_LOAD_FACTOR: f64 = 0.75;

/// Hash table with separate chaining
///
/// Every bucket is a short vector of key/value pairs. The bucket array doubles
/// once the number of entries exceeds three quarters of the bucket count.
/// Iteration order follows bucket layout and carries no meaning.
#[derive(Clone)]
pub struct AssociativeMap<K, V, S = RandomState> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: S,
}

impl<K, V> AssociativeMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    /// Creates an empty map
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_BUCKETS)
    }

    /// Creates an empty map with at least `buckets` buckets
    pub fn with_capacity(buckets: usize) -> Self {
        Self::with_hasher(buckets, RandomState::new())
    }
}

impl<K, V, S> AssociativeMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map using the given hasher
    pub fn with_hasher(buckets: usize, hasher: S) -> Self {
        let buckets = buckets.max(1);
        AssociativeMap {
            buckets: (0..buckets).map(|_| Vec::new()).collect(),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Inserts a value, returning the one it replaced
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        if let Some(slot) = self.buckets[idx].iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.insert_new(key, value);
        None
    }

    /// Appends an entry known to be absent and returns its bucket index
    fn insert_new(&mut self, key: K, value: V) -> usize {
        if (self.len + 1) as f64 > self.buckets.len() as f64 * MAX_LOAD_FACTOR {
            self.rehash(self.buckets.len() * 2);
        }
        let idx = self.bucket_index(&key);
        self.buckets[idx].push((key, value));
        self.len += 1;
        idx
    }

    /// Looks up a key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Looks up a key, failing with `KeyNotFound` when it is absent
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToString + ?Sized,
    {
        self.get(key).ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Looks up a key for mutation
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns the value for `key`, inserting `default()` first if absent
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let idx = self.bucket_index(&key);
        let (idx, pos) = match self.buckets[idx].iter().position(|(k, _)| *k == key) {
            Some(pos) => (idx, pos),
            None => {
                let idx = self.insert_new(key, default());
                (idx, self.buckets[idx].len() - 1)
            }
        };
        &mut self.buckets[idx][pos].1
    }

    /// Returns true if the key is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Iterates over all keys in unspecified order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterates over all values in unspecified order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Iterates over all entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    fn rehash(&mut self, bucket_count: usize) {
        let old = std::mem::replace(
            &mut self.buckets,
            (0..bucket_count).map(|_| Vec::new()).collect(),
        );
        for (key, value) in old.into_iter().flatten() {
            let idx = self.bucket_index(&key);
            self.buckets[idx].push((key, value));
        }
    }
}

impl<K, V> Default for AssociativeMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for AssociativeMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AssociativeMap::new();
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}

impl<K, V, S> PartialEq for AssociativeMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(k, v)| other.get(k).map_or(false, |ov| ov == v))
    }
}

impl<K, V, S> Debug for AssociativeMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().flatten().map(|(k, v)| (k, v)))
            .finish()
    }
}
