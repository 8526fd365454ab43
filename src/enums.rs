//! Named enumerations used to label subfield values.

use std::collections::HashMap;

use crate::errors::LookupError;

/// Mapping from an extracted field value to its display name.
pub type Enum = HashMap<u64, String>;

/// Enumerations addressed by key. Fields refer to an entry through their enum key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumTable {
    enums: HashMap<String, Enum>,
}

/// Outcome of resolving a value through an [EnumTable].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The value has a name.
    Named(&'a str),
    /// No enum applies: the key is empty or not in the table.
    Unmapped,
    /// The enum exists but does not name this value.
    Missing(LookupError),
}

impl EnumTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the enum stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, values: Enum) -> Option<Enum> {
        self.enums.insert(key.into(), values)
    }

    /// Builder-style [EnumTable::insert].
    pub fn with(mut self, key: impl Into<String>, values: Enum) -> Self {
        self.insert(key, values);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Enum> {
        self.enums.get(key)
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    /// Looks `value` up in the enum stored under `key`. Matching is exact.
    pub fn resolve(&self, key: &str, value: u64) -> Resolution<'_> {
        if key.is_empty() {
            return Resolution::Unmapped;
        }

        match self.enums.get(key) {
            None => Resolution::Unmapped,
            Some(values) => match values.get(&value) {
                Some(name) => Resolution::Named(name),
                None => Resolution::Missing(LookupError::UnknownEnumValue {
                    value,
                    key: key.to_string(),
                }),
            },
        }
    }

    /// Reverse lookup: the value named `name` in the enum under `key`.
    pub fn value_of(&self, key: &str, name: &str) -> Option<u64> {
        self.enums
            .get(key)?
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(&v, _)| v)
    }
}

impl<K: Into<String>> FromIterator<(K, Enum)> for EnumTable {
    fn from_iter<I: IntoIterator<Item = (K, Enum)>>(iter: I) -> Self {
        EnumTable {
            enums: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
