//! Key/value information attached to a failure.
//!
//! [`Info`] maps string keys to arbitrary `Debug` values. Values are shared
//! behind `Arc`, so cloning an `Info` never clones the values themselves.
//!
//! # Examples
//!
//! ```
//! use failure_rail::Info;
//!
//! let info = Info::new().with("user_id", 42_u64).with("path", "/tmp/x");
//!
//! assert_eq!(info.get::<u64>("user_id"), Some(&42));
//! assert_eq!(info.get::<&str>("path"), Some(&"/tmp/x"));
//! assert_eq!(info.get::<u32>("user_id"), None);
//! ```
use core::any::Any;
use core::fmt::{self, Debug};
use std::collections::btree_map::{self, BTreeMap};
use std::sync::Arc;

/// Any value that can be stored in an [`Info`].
pub trait InfoValue: Debug + Send + Sync + 'static {
    /// Upcasts the value for typed retrieval.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Debug + Send + Sync + 'static> InfoValue for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Information on why an error occurred.
#[derive(Clone, Default)]
pub struct Info {
    entries: BTreeMap<String, Arc<dyn InfoValue>>,
}

impl Info {
    /// Creates an empty info map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[inline]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: InfoValue,
    {
        self.insert(key, value);
        self
    }

    /// Inserts a value, replacing any previous value under the same key.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: InfoValue,
    {
        self.entries.insert(key.into(), Arc::new(value));
    }

    /// Returns the value under `key` if it is of type `T`.
    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        let value: &dyn InfoValue = &**self.entries.get(key)?;
        value.as_any().downcast_ref::<T>()
    }

    /// Returns the value under `key` regardless of its type.
    #[inline]
    pub fn get_dyn(&self, key: &str) -> Option<&dyn InfoValue> {
        self.entries.get(key).map(|value| &**value)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }
}

impl Debug for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Info
where
    K: Into<String>,
    V: InfoValue,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut info = Info::new();
        for (key, value) in iter {
            info.insert(key, value);
        }
        info
    }
}

impl<K, V> Extend<(K, V)> for Info
where
    K: Into<String>,
    V: InfoValue,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a Info {
    type Item = (&'a str, &'a dyn InfoValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of an [`Info`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Arc<dyn InfoValue>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a dyn InfoValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), &**value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
