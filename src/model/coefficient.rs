use std::collections::BTreeMap;

/// Namespace shared by every coefficient key (`urgency.<category>.<name>`)
pub const KEY_PREFIX: &str = "urgency.";

/// Build the coefficient key for a user-defined attribute
pub fn key_for_uda(name: &str) -> String {
    format!("{}uda.{}", KEY_PREFIX, name)
}

/// Named integer weights, keyed by their full `urgency.*` name.
///
/// Iteration is in lexicographic key order. A value of zero means "use the
/// default" and is never persisted to the override layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoefficientSet {
    values: BTreeMap<String, i64>,
}

impl CoefficientSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Set a value, replacing any previous one
    pub fn insert(&mut self, key: impl Into<String>, value: i64) {
        self.values.insert(key.into(), value);
    }

    /// Insert `key` with value 0 unless it already has a value.
    /// Returns true if the key was added.
    pub fn insert_default(&mut self, key: &str) -> bool {
        if self.values.contains_key(key) {
            return false;
        }
        self.values.insert(key.to_string(), 0);
        true
    }

    /// Apply every entry of `other` on top of this set (other wins on collision)
    pub fn overlay(&mut self, other: &CoefficientSet) {
        for (key, value) in other.iter() {
            self.values.insert(key.to_string(), value);
        }
    }

    /// Keep only keys starting with `urgency.<c>` for some category `c`.
    /// This is a plain prefix test: `pro` keeps `urgency.project.x`.
    /// An empty category list keeps everything.
    pub fn retain_categories(&mut self, categories: &[String]) {
        if categories.is_empty() {
            return;
        }
        let prefixes: Vec<String> = categories
            .iter()
            .map(|c| format!("{}{}", KEY_PREFIX, c))
            .collect();
        self.values
            .retain(|key, _| prefixes.iter().any(|p| key.starts_with(p.as_str())));
    }

    /// Add `delta` to the value for `key`, saturating at the i64 bounds.
    /// Returns the new value, or None if the key is unknown.
    pub fn adjust(&mut self, key: &str, delta: i64) -> Option<i64> {
        let value = self.values.get_mut(key)?;
        *value = value.saturating_add(delta);
        Some(*value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries whose value differs from the zero default, in key order
    pub fn non_default(&self) -> impl Iterator<Item = (&str, i64)> {
        self.iter().filter(|(_, v)| *v != 0)
    }

    /// Keys sorted by descending value. Equal values keep lexicographic key
    /// order, so the result depends only on the current values.
    pub fn ordered_keys(&self) -> Vec<String> {
        let mut entries: Vec<(&String, i64)> = self.values.iter().map(|(k, v)| (k, *v)).collect();
        // Stable sort over lexicographically ordered input
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().map(|(k, _)| k.clone()).collect()
    }

    /// Number of keys whose value differs from `baseline` (missing counts as 0)
    pub fn diff_count(&self, baseline: &CoefficientSet) -> usize {
        self.iter()
            .filter(|(k, v)| baseline.get(k).unwrap_or(0) != *v)
            .count()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for CoefficientSet {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut set = CoefficientSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
