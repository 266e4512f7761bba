use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered label map
///
/// Re-inserting an existing key replaces its value but keeps its position,
/// so later dimensions with the same lowercased name overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    entries: Vec<(String, String)>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a label, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl Serialize for LabelSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut labels = LabelSet::new();
        labels.insert("severity", "warning");
        labels.insert("source", "cloudwatch");
        labels.insert("namespace", "AWS/EC2");

        let keys: Vec<&str> = labels.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["severity", "source", "namespace"]);
    }

    #[test]
    fn test_reinsert_overwrites_in_place() {
        let mut labels = LabelSet::new();
        labels.insert("instanceid", "i-first");
        labels.insert("zone", "us-west-2a");
        let previous = labels.insert("instanceid", "i-second");

        assert_eq!(previous.as_deref(), Some("i-first"));
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("instanceid"), Some("i-second"));
        assert_eq!(labels.iter().next(), Some(("instanceid", "i-second")));
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut labels = LabelSet::new();
        labels.insert("source", "cloudwatch");
        labels.insert("metric", "CPUUtilization");

        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"{"source":"cloudwatch","metric":"CPUUtilization"}"#);
    }

    #[test]
    fn test_empty() {
        let labels = LabelSet::new();
        assert!(labels.is_empty());
        assert!(!labels.contains_key("severity"));
    }
}
