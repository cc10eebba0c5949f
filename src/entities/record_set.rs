//! Ordered keyed collections of input records
//!
//! Upstream exports are mappings (qualified name → record). Evaluation
//! depends on the document order of those mappings: the requirement lookup
//! keeps the last record per name while the mass roll-up takes the first
//! one. [`RecordSet`] preserves that order through deserialization.

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Records keyed by an arbitrary string, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for RecordSet<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> RecordSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Append a record; a repeated key replaces the earlier record in place
    pub fn insert(&mut self, key: impl Into<String>, record: T) {
        self.entries.insert(key.into(), record);
    }

    /// Iterate `(key, record)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Iterate records in document order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for RecordSet<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut set = RecordSet::new();
        for (key, record) in iter {
            set.insert(key, record);
        }
        set
    }
}

impl<T: Serialize> Serialize for RecordSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

struct RecordSetVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for RecordSetVisitor<T> {
    type Value = RecordSet<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of keyed records")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(RecordSet::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = RecordSet::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some((key, record)) = access.next_entry::<String, T>()? {
            set.insert(key, record);
        }
        Ok(set)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RecordSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordSetVisitor {
            marker: PhantomData,
        })
    }
}
