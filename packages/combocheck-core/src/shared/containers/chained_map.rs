//! Resizable open-chaining hash map
//!
//! Buckets are singly linked chains. The map starts with 10 buckets and
//! doubles whenever an insert of a new key would push the load factor above
//! 0.75; the rehash happens inside that `put`, so the load factor never exceeds
//! the threshold once `put` returns.
//!
//! Hashing and key equality are plain function pointers chosen at creation,
//! which keeps the map `Sync` for the read-only scoring phase.

use std::hash::{Hash, Hasher};

/// Bucket count of a freshly created map
pub const INITIAL_BUCKETS: usize = 10;

/// Load factor above which an insert triggers a resize
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Hash function for keys; only the low 31 bits are significant by convention
pub type HashFn<K> = fn(&K) -> u32;

/// Key equality function
pub type EqualFn<K> = fn(&K, &K) -> bool;

/// Hook invoked with every entry the map releases
pub type ReleaseFn<K, V> = Box<dyn Fn(K, V) + Send + Sync>;

/// What `put` does when the key is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Overwrite the value, keep the stored key; the incoming key is dropped
    ReplaceInPlace,
    /// Release the stored key and value, then store the incoming pair
    FreeOldOnCollision,
}

struct Bucket<K, V> {
    key: K,
    value: V,
    next: Option<Box<Bucket<K, V>>>,
}

/// Chained hash map with pluggable hash/equality and a collision policy
pub struct ChainedHashMap<K, V> {
    buckets: Vec<Option<Box<Bucket<K, V>>>>,
    len: usize,
    load_factor: f64,
    hash: HashFn<K>,
    equal: EqualFn<K>,
    policy: CollisionPolicy,
    release: Option<ReleaseFn<K, V>>,
}

impl<K, V> ChainedHashMap<K, V> {
    /// Create an empty map with [`INITIAL_BUCKETS`] buckets
    pub fn new(hash: HashFn<K>, equal: EqualFn<K>, policy: CollisionPolicy) -> Self {
        Self {
            buckets: empty_buckets(INITIAL_BUCKETS),
            len: 0,
            load_factor: 0.0,
            hash,
            equal,
            policy,
            release: None,
        }
    }

    /// Install a destructor hook, called for entries discarded by
    /// `FreeOldOnCollision` and for every entry still held when the map is destroyed
    pub fn with_release(mut self, release: impl Fn(K, V) + Send + Sync + 'static) -> Self {
        self.release = Some(Box::new(release));
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Live entries divided by bucket count, as of the last insert
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    fn bucket_index(&self, key: &K) -> usize {
        (self.hash)(key) as usize % self.buckets.len()
    }

    /// Put a key-value pair into the map.
    ///
    /// Returns `true` if the key already existed (a collision), `false` for a new key.
    pub fn put(&mut self, key: K, value: V) -> bool {
        let index = self.bucket_index(&key);
        let equal = self.equal;

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if equal(&key, &entry.key) {
                match self.policy {
                    CollisionPolicy::ReplaceInPlace => {
                        entry.value = value;
                    }
                    CollisionPolicy::FreeOldOnCollision => {
                        let old_key = std::mem::replace(&mut entry.key, key);
                        let old_value = std::mem::replace(&mut entry.value, value);
                        if let Some(release) = &self.release {
                            release(old_key, old_value);
                        }
                    }
                }
                return true;
            }
            cursor = entry.next.as_deref_mut();
        }

        let head = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Bucket {
            key,
            value,
            next: head,
        }));
        self.len += 1;

        if self.len as f64 / self.buckets.len() as f64 > LOAD_FACTOR_THRESHOLD {
            self.resize();
        }
        self.load_factor = self.len as f64 / self.buckets.len() as f64;
        false
    }

    /// Double the bucket count and relink every entry
    fn resize(&mut self) {
        let new_count = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_count));

        for mut chain in old {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let index = self.bucket_index(&entry.key);
                entry.next = self.buckets[index].take();
                self.buckets[index] = Some(entry);
            }
        }
    }

    fn find(&self, key: &K) -> Option<&Bucket<K, V>> {
        let mut cursor = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(entry) = cursor {
            if (self.equal)(key, &entry.key) {
                return Some(entry);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Get the value stored under `key`, or `None` if absent
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|entry| &entry.value)
    }

    /// Mutable access to the value stored under `key`
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        let equal = self.equal;
        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if equal(key, &entry.key) {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Iterate over every entry, in bucket order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// Release every entry through the configured hook, then the map itself
    pub fn destroy(self) {
        drop(self);
    }

    fn release_all(&mut self) {
        for slot in self.buckets.iter_mut() {
            let mut chain = slot.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let Bucket { key, value, .. } = *entry;
                if let Some(release) = &self.release {
                    release(key, value);
                }
            }
        }
        self.len = 0;
        self.load_factor = 0.0;
    }
}

impl<K, V> Drop for ChainedHashMap<K, V> {
    fn drop(&mut self) {
        self.release_all();
    }
}

fn empty_buckets<K, V>(count: usize) -> Vec<Option<Box<Bucket<K, V>>>> {
    std::iter::repeat_with(|| None).take(count).collect()
}

/// Borrowing iterator over a [`ChainedHashMap`]
pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, Option<Box<Bucket<K, V>>>>,
    chain: Option<&'a Bucket<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                return Some((&entry.key, &entry.value));
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Hash and equality functions
// ═══════════════════════════════════════════════════════════════════════════

/// djb2 string hash (`hash * 33 + byte`, seeded with 5381), masked to 31 bits
pub fn djb2<K: AsRef<[u8]> + ?Sized>(key: &K) -> u32 {
    let hash = key
        .as_ref()
        .iter()
        .fold(5381u32, |hash, &b| hash.wrapping_add(hash << 5).wrapping_add(b as u32));
    hash & 0x7FFF_FFFF
}

/// Hash for integer keys such as file indices
pub fn index_hash(key: &usize) -> u32 {
    let wide = *key as u64;
    ((wide ^ (wide >> 32)) as u32) & 0x7FFF_FFFF
}

/// Hash any `Hash` key through the standard SipHash hasher
pub fn std_hash<K: Hash>(key: &K) -> u32 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() as u32) & 0x7FFF_FFFF
}

/// Equality through `PartialEq`
pub fn key_equal<K: PartialEq>(a: &K, b: &K) -> bool {
    a == b
}
