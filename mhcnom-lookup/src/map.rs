use std::collections::BTreeSet;
use std::collections::HashMap as StdHashMap;
use std::collections::hash_map::Entry;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use fxhash::FxHashMap as HashMap;

use super::error::LookupError;
use super::invert::InvertValue;
use super::normalize::KeyNormalize;

///
/// A key-value store that normalizes every key on the way in while
/// remembering each original spelling. Two keys with the same normalized
/// form share one value slot.
///
/// Caution: [`NormalizingMap::keys`] may yield more entries than
/// [`NormalizingMap::len`], because distinct spellings collapse onto one
/// normalized key. Use [`NormalizingMap::iter`] when iteration size must
/// match the number of stored values.
///
#[derive(Clone)]
pub struct NormalizingMap<K, V> {
    store: HashMap<K, V>,
    original_to_normalized: HashMap<K, K>,
    normalized_to_originals: HashMap<K, BTreeSet<K>>,
    normalize: fn(&K) -> K,
    default_fn: Option<fn() -> V>,
}

impl<K: KeyNormalize, V> NormalizingMap<K, V> {
    /// Create an empty map using the key type's default normalizer.
    pub fn new() -> Self {
        Self::with_config(K::normalize, None)
    }

    ///
    /// Create an empty map that builds a value with `default_fn` on the
    /// first read of a missing key.
    ///
    pub fn with_default_factory(default_fn: fn() -> V) -> Self {
        Self::with_config(K::normalize, Some(default_fn))
    }

    ///
    /// Build a map from (key, value) pairs, inserting in order: when two
    /// keys share a normalized form, the later value wins.
    ///
    pub fn from_pairs(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }
}

impl<K, V> NormalizingMap<K, V>
where
    K: Clone + Eq + Hash + Ord,
{
    /// Create an empty map with a custom normalizer.
    pub fn with_normalizer(normalize: fn(&K) -> K) -> Self {
        Self::with_config(normalize, None)
    }

    /// Create an empty map with an explicit normalizer and default factory.
    pub fn with_config(normalize: fn(&K) -> K, default_fn: Option<fn() -> V>) -> Self {
        NormalizingMap {
            store: HashMap::default(),
            original_to_normalized: HashMap::default(),
            normalized_to_originals: HashMap::default(),
            normalize,
            default_fn,
        }
    }

    /// Configure the factory used to build a value on the first read of a
    /// missing key.
    pub fn set_default_factory(&mut self, default_fn: fn() -> V) {
        self.default_fn = Some(default_fn);
    }

    ///
    /// Insert a value under the normalized form of `key`, recording `key`
    /// as one of its original spellings. Returns the value the write
    /// displaced, if any.
    ///
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let normalized = (self.normalize)(&key);
        self.original_to_normalized
            .insert(key.clone(), normalized.clone());
        self.normalized_to_originals
            .entry(normalized.clone())
            .or_default()
            .insert(key);
        self.store.insert(normalized, value)
    }

    /// Look up the value stored under the normalized form of `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.store.get(&(self.normalize)(key))
    }

    /// Like [`NormalizingMap::get`] but returns `fallback` on a miss.
    pub fn get_or<'a>(&'a self, key: &K, fallback: &'a V) -> &'a V {
        self.get(key).unwrap_or(fallback)
    }

    ///
    /// Look up the value stored under the normalized form of `key`,
    /// building one with the default factory on a miss. The created entry
    /// is stored and `key` is recorded as its original spelling, so this
    /// is a mutating read. Without a configured factory a miss fails with
    /// [`LookupError::KeyNotFound`].
    ///
    pub fn get_or_create(&mut self, key: &K) -> Result<&mut V, LookupError>
    where
        K: Debug,
    {
        let normalized = (self.normalize)(key);
        match self.store.entry(normalized) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => match self.default_fn {
                Some(default_fn) => {
                    self.original_to_normalized
                        .insert(key.clone(), slot.key().clone());
                    self.normalized_to_originals
                        .entry(slot.key().clone())
                        .or_default()
                        .insert(key.clone());
                    Ok(slot.insert(default_fn()))
                }
                None => Err(LookupError::key_not_found(key)),
            },
        }
    }

    /// Whether a value is stored under the normalized form of `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.store.contains_key(&(self.normalize)(key))
    }

    ///
    /// The set of original spellings whose normalized form matches the
    /// given key's. Empty when no matching key was ever inserted.
    ///
    pub fn original_keys(&self, key: &K) -> BTreeSet<K> {
        self.normalized_to_originals
            .get(&(self.normalize)(key))
            .cloned()
            .unwrap_or_default()
    }

    ///
    /// The single original spelling matching the given key's normalized
    /// form. Fails with [`LookupError::KeyNotFound`] when nothing matches
    /// and with [`LookupError::AmbiguousKey`] when several spellings do;
    /// disambiguate the latter with [`NormalizingMap::original_keys`].
    ///
    pub fn original_key(&self, key: &K) -> Result<K, LookupError>
    where
        K: Debug,
    {
        let originals = self.original_keys(key);
        let mut candidates = originals.iter();
        match (candidates.next(), candidates.next()) {
            (None, _) => Err(LookupError::key_not_found(key)),
            (Some(single), None) => Ok(single.clone()),
            (Some(_), Some(_)) => Err(LookupError::ambiguous_key(key, &originals)),
        }
    }

    /// Every original key ever inserted. May yield more entries than `len()`.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.original_to_normalized.keys()
    }

    /// The deduplicated normalized keys, one per stored value.
    pub fn normalized_keys(&self) -> impl Iterator<Item = &K> {
        self.store.keys()
    }

    /// The stored values, one per normalized key.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.store.values()
    }

    ///
    /// The full set of original spellings behind each stored value, in the
    /// same order as [`NormalizingMap::values`].
    ///
    pub fn key_sets_aligned_with_values(&self) -> impl Iterator<Item = &BTreeSet<K>> {
        self.store
            .keys()
            .map(|normalized| &self.normalized_to_originals[normalized])
    }

    ///
    /// One original spelling per stored value: the smallest in each
    /// spelling set, so the choice is deterministic.
    ///
    pub fn keys_aligned_with_values(&self) -> impl Iterator<Item = &K> {
        self.key_sets_aligned_with_values()
            .filter_map(|originals| originals.first())
    }

    ///
    /// Pairs one representative original spelling with each stored value,
    /// so iteration size matches [`NormalizingMap::len`] rather than the
    /// number of spellings ever inserted.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.store.iter().filter_map(|(normalized, value)| {
            self.normalized_to_originals
                .get(normalized)
                .and_then(|originals| originals.first())
                .map(|key| (key, value))
        })
    }

    /// Number of distinct normalized keys, not of original spellings.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    ///
    /// Rebuild the map with `f` applied to every value. Surprising but
    /// kept on purpose: only the representative spelling of each entry
    /// seeds the new map's key index, so alternate spellings are not
    /// carried over. The default factory cannot cross a value-type change;
    /// use [`NormalizingMap::set_default_factory`] on the result when one
    /// is needed.
    ///
    pub fn map_values<W>(&self, f: impl Fn(&V) -> W) -> NormalizingMap<K, W> {
        let mut mapped = NormalizingMap::with_config(self.normalize, None);
        for (key, value) in self.iter() {
            mapped.insert(key.clone(), f(value));
        }
        mapped
    }

    ///
    /// Rebuild the map with `f` applied to one representative spelling per
    /// entry, re-normalizing the produced keys. As with
    /// [`NormalizingMap::map_values`], alternate spellings are not carried
    /// over.
    ///
    pub fn map_keys(&self, f: impl Fn(&K) -> K) -> Self
    where
        V: Clone,
    {
        let mut mapped = Self::with_config(self.normalize, self.default_fn);
        for (key, value) in self.iter() {
            mapped.insert(f(key), value.clone());
        }
        mapped
    }

    ///
    /// Build the reverse lookup table: every element of every value
    /// becomes a key mapped to the set of spellings that held it, with
    /// scalar values counting as a single element (see
    /// [`InvertValue`]). The inverted table normalizes with its key
    /// type's default normalizer and grows an empty set on missing reads,
    /// so entries accumulate with
    /// `inverted.get_or_create(&key)?.insert(name)`. Only representative
    /// spellings of the receiver survive the trip.
    ///
    pub fn invert(&self) -> NormalizingMap<V::Key, BTreeSet<K>>
    where
        V: InvertValue,
    {
        let mut inverted: NormalizingMap<V::Key, BTreeSet<K>> =
            NormalizingMap::with_config(V::Key::normalize, Some(BTreeSet::new));
        for (key, value) in self.iter() {
            for target in value.invert_keys() {
                let normalized = (inverted.normalize)(&target);
                inverted
                    .original_to_normalized
                    .insert(target.clone(), normalized.clone());
                inverted
                    .normalized_to_originals
                    .entry(normalized.clone())
                    .or_default()
                    .insert(target);
                inverted
                    .store
                    .entry(normalized)
                    .or_default()
                    .insert(key.clone());
            }
        }
        inverted
    }
}

impl<K: KeyNormalize, V> Default for NormalizingMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for NormalizingMap<K, V>
where
    K: Clone + Eq + Hash + Ord,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, pairs: T) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }
}

impl<K: KeyNormalize, V> FromIterator<(K, V)> for NormalizingMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(pairs: T) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: KeyNormalize, V> From<StdHashMap<K, V>> for NormalizingMap<K, V> {
    fn from(map: StdHashMap<K, V>) -> Self {
        Self::from_pairs(map)
    }
}

impl<'a, K, V> IntoIterator for &'a NormalizingMap<K, V>
where
    K: Clone + Eq + Hash + Ord,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<K, V> Display for NormalizingMap<K, V>
where
    K: Clone + Eq + Hash + Ord + Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<NormalizingMap with {} unique items>", self.len())?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 10 {
                write!(f, "\n...")?;
                break;
            }
            write!(f, "\n\t{key:?}: {value:?}")?;
        }
        Ok(())
    }
}
