//! Ordered request parameters: the [`ParamsMap`] handed to the executor.

/// Ordered name/value parameters for a single API call.
///
/// Keys are unique and keep the position of their first insertion. A `None`
/// value marks a parameter that is left off the wire entirely, while
/// `Some("")` is still sent as `key=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamsMap {
    entries: Vec<(String, Option<String>)>,
}

impl ParamsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter with a value, replacing any existing value for the key.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_param(key, Some(value.into()));
        self
    }

    /// Adds a parameter that may be absent. `None` values are not sent.
    pub fn with_optional_param<V: Into<String>>(
        mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.add_param(key, value.map(Into::into));
        self
    }

    /// Sets `key` to `value`. Re-adding a key updates it in place.
    pub fn add_param(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Appends `key` only when no entry exists for it. Returns whether it was added.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, Some(value.into())));
        true
    }

    /// Returns the stored value for `key`; the inner `None` is an omitted parameter.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of entries, including those with a `None` value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Entries that go on the wire, in insertion order.
    pub fn present_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for ParamsMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut params = ParamsMap::new();
        for (key, value) in iter {
            params.add_param(key, value.map(Into::into));
        }
        params
    }
}
