//! Collection wrappers used throughout the save format
//!
//! ```text
//! ModelList<T>              {"target": ["{..T..}", "{..T..}"]}
//! PrimitiveList<T>          {"target": [1, 2, 3]}
//! ModelKeyValueList<K, V>   {"keys": [k0, k1], "values": ["{..V..}", "{..V..}"]}
//! PrimitiveKeyValueList<K, V> {"keys": [k0, k1], "values": [v0, v1]}
//! ```
//!
//! Maps travel as two parallel arrays. Position `i` of `keys` belongs to
//! position `i` of `values`, and the order is kept exactly as decoded.

use std::ops::{Deref, DerefMut};

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::embedded::EmbeddedSeq;

/// List of records, each element an embedded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    deny_unknown_fields,
    bound(serialize = "T: Serialize", deserialize = "T: DeserializeOwned")
)]
pub struct ModelList<T> {
    #[serde(rename = "target", with = "crate::embedded::seq")]
    pub items: Vec<T>,
}

/// List of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimitiveList<T> {
    #[serde(rename = "target")]
    pub items: Vec<T>,
}

macro_rules! list_impls {
    ($list:ident) => {
        impl<T> $list<T> {
            pub fn new() -> Self {
                Self { items: Vec::new() }
            }
        }

        impl<T> Default for $list<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Deref for $list<T> {
            type Target = Vec<T>;

            fn deref(&self) -> &Vec<T> {
                &self.items
            }
        }

        impl<T> DerefMut for $list<T> {
            fn deref_mut(&mut self) -> &mut Vec<T> {
                &mut self.items
            }
        }

        impl<T> From<Vec<T>> for $list<T> {
            fn from(items: Vec<T>) -> Self {
                Self { items }
            }
        }

        impl<T> FromIterator<T> for $list<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                Self {
                    items: iter.into_iter().collect(),
                }
            }
        }

        impl<'a, T> IntoIterator for &'a $list<T> {
            type Item = &'a T;
            type IntoIter = std::slice::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.iter()
            }
        }
    };
}

list_impls!(ModelList);
list_impls!(PrimitiveList);

/// `keys` and `values` arrays of different lengths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key-value list has {keys} keys but {values} values")]
pub struct LengthMismatch {
    pub keys: usize,
    pub values: usize,
}

/// Ordered key → value view over two parallel arrays.
///
/// Lookups return the first matching key; duplicate keys are kept as decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValues<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> KeyValues<K, V> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn from_parts(keys: Vec<K>, values: Vec<V>) -> Result<Self, LengthMismatch> {
        if keys.len() != values.len() {
            return Err(LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(Self { keys, values })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys.iter().zip(&self.values)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.keys.iter().zip(self.values.iter_mut())
    }

    /// Append without looking for an existing key.
    pub fn push(&mut self, key: K, value: V) {
        self.keys.push(key);
        self.values.push(value);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }
}

impl<K: PartialEq, V> KeyValues<K, V> {
    fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|i| &self.values[i])
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.position(key).map(|i| &mut self.values[i])
    }

    /// Replace the value under `key` in place, or append a new pair.
    /// Returns the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.values[i], value)),
            None => {
                self.push(key, value);
                None
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.position(key)?;
        self.keys.remove(i);
        Some(self.values.remove(i))
    }
}

impl<K, V> Default for KeyValues<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for KeyValues<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let (keys, values) = iter.into_iter().unzip();
        Self { keys, values }
    }
}

/// Key-value list whose values are embedded documents.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelKeyValueList<K, V>(KeyValues<K, V>);

/// Key-value list of scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveKeyValueList<K, V>(KeyValues<K, V>);

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PrimitiveWire<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

#[derive(Deserialize)]
#[serde(
    deny_unknown_fields,
    bound(deserialize = "K: Deserialize<'de>, V: DeserializeOwned")
)]
struct ModelWire<K, V> {
    keys: Vec<K>,
    #[serde(deserialize_with = "crate::embedded::seq::deserialize")]
    values: Vec<V>,
}

macro_rules! key_value_impls {
    ($list:ident) => {
        impl<K, V> $list<K, V> {
            pub fn new() -> Self {
                Self(KeyValues::new())
            }

            pub fn from_parts(keys: Vec<K>, values: Vec<V>) -> Result<Self, LengthMismatch> {
                KeyValues::from_parts(keys, values).map(Self)
            }
        }

        impl<K, V> Default for $list<K, V> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<K, V> Deref for $list<K, V> {
            type Target = KeyValues<K, V>;

            fn deref(&self) -> &KeyValues<K, V> {
                &self.0
            }
        }

        impl<K, V> DerefMut for $list<K, V> {
            fn deref_mut(&mut self) -> &mut KeyValues<K, V> {
                &mut self.0
            }
        }

        impl<K, V> From<KeyValues<K, V>> for $list<K, V> {
            fn from(inner: KeyValues<K, V>) -> Self {
                Self(inner)
            }
        }

        impl<K, V> FromIterator<(K, V)> for $list<K, V> {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }
    };
}

key_value_impls!(ModelKeyValueList);
key_value_impls!(PrimitiveKeyValueList);

impl<K: Serialize, V: Serialize> Serialize for PrimitiveKeyValueList<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("PrimitiveKeyValueList", 2)?;
        st.serialize_field("keys", &self.0.keys)?;
        st.serialize_field("values", &self.0.values)?;
        st.end()
    }
}

impl<'de, K, V> Deserialize<'de> for PrimitiveKeyValueList<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = PrimitiveWire::<K, V>::deserialize(deserializer)?;
        Self::from_parts(wire.keys, wire.values).map_err(D::Error::custom)
    }
}

impl<K: Serialize, V: Serialize> Serialize for ModelKeyValueList<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("ModelKeyValueList", 2)?;
        st.serialize_field("keys", &self.0.keys)?;
        st.serialize_field("values", &EmbeddedSeq(&self.0.values))?;
        st.end()
    }
}

impl<'de, K, V> Deserialize<'de> for ModelKeyValueList<K, V>
where
    K: Deserialize<'de>,
    V: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = ModelWire::<K, V>::deserialize(deserializer)?;
        Self::from_parts(wire.keys, wire.values).map_err(D::Error::custom)
    }
}
