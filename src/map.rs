use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

pub(crate) type RandomState = ahash::RandomState;

/// Thread-safe hash map guarded by a single reader/writer lock.
///
/// Reads ([`get`](Self::get), [`len`](Self::len), [`for_each`](Self::for_each), ...) take the
/// lock in shared mode, writes ([`insert`](Self::insert), [`remove`](Self::remove), ...) take it
/// in exclusive mode. The internal map is never handed out, so every access goes through the
/// lock.
///
/// Wrap the map in a [`std::sync::Arc`] to share it between threads. Both reads and writes only
/// require shared references to the map.
#[derive(Debug)]
pub struct ConcurrentMap<K, V, S = RandomState> {
    items: RwLock<HashMap<K, V, S>>,
}

impl<K, V> ConcurrentMap<K, V, RandomState> {
    /// Creates an empty map.
    pub fn new() -> ConcurrentMap<K, V, RandomState> {
        ConcurrentMap::with_hasher(Default::default())
    }

    /// Creates an empty map with space for at least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> ConcurrentMap<K, V, RandomState> {
        ConcurrentMap::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V, S> ConcurrentMap<K, V, S> {
    /// Creates an empty map which will use `hash_builder` to hash the keys.
    pub fn with_hasher(hash_builder: S) -> ConcurrentMap<K, V, S> {
        Self {
            items: RwLock::new(HashMap::with_hasher(hash_builder)),
        }
    }

    /// Creates an empty map with space for at least `capacity` entries, using `hash_builder` to
    /// hash the keys.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> ConcurrentMap<K, V, S> {
        Self {
            items: RwLock::new(HashMap::with_capacity_and_hasher(capacity, hash_builder)),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// The count is a snapshot; concurrent writers may change it right after it was taken.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.items.write().clear();
    }

    /// Calls `visit` for each entry in the map, in no particular order.
    ///
    /// The read lock is held for the whole traversal, so the visitor sees a consistent snapshot
    /// and writers wait until the traversal is done. If `visit` returns an error the traversal
    /// stops and the error is discarded; use [`try_for_each`](Self::try_for_each) to get it
    /// back.
    ///
    /// The visitor must not call back into the same map. Writes from within `visit` deadlock,
    /// and reads may deadlock as soon as a writer is waiting for the lock.
    pub fn for_each<F, E>(&self, visit: F)
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        if self.try_for_each(visit).is_err() {
            log::trace!("visitor stopped iteration early");
        }
    }

    /// Calls `visit` for each entry in the map, in no particular order, stopping at the first
    /// error and returning it.
    ///
    /// Locking behaves exactly like [`for_each`](Self::for_each).
    pub fn try_for_each<F, E>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        let items = self.items.read();

        for (key, value) in items.iter() {
            visit(key, value)?;
        }

        Ok(())
    }
}

impl<K, V, S> ConcurrentMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, [`None`] is returned.
    ///
    /// If the map did have this key present, the value is updated, and the old value is returned.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.items.write().insert(key, value)
    }

    /// Removes a key from the map, returning the value if the key was present.
    ///
    /// Removing an absent key leaves the map untouched.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.items.write().remove(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.items.read().contains_key(key)
    }
}

impl<K, V, S> ConcurrentMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    /// Returns the value corresponding to the key.
    ///
    /// This method clones the value when returning the item. Consider wrapping your values in
    /// [`std::sync::Arc`] if cloning is too expensive for your use-case.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.items.read().get(key).cloned()
    }
}

impl<K, V, S> Default for ConcurrentMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V, S> FromIterator<(K, V)> for ConcurrentMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let items = HashMap::from_iter(iter);

        Self {
            items: RwLock::new(items),
        }
    }
}
