//! # Common Types

/// An ordered pair of adjacent symbols: ``(left, right)``.
pub type Pair<S> = (S, S);

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type CommonHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CommonHashMap<K, V> {
            CommonHashMap::with_capacity(capacity)
        }
    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type CommonHashSet<V> = foldhash::HashSet<V>;

        /// Create a new hash map with the given capacity.
        ///
        /// Note: `foldhash::HashMap` is a specialization of `std::collections::HashMap`.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CommonHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type CommonHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CommonHashMap<K, V> {
            CommonHashMap::with_capacity(capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_with_capacity() {
        let mut map: CommonHashMap<Pair<&str>, u32> = hash_map_with_capacity(8);
        *map.entry(("a", "b")).or_default() += 2;
        *map.entry(("a", "b")).or_default() += 3;
        assert_eq!(map.get(&("a", "b")), Some(&5));
        assert!(map.capacity() >= 8);

        let set: CommonHashSet<&str> = ["a", "b", "a"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
