use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

/// VS Code extension entries, in file order.
///
/// Entries are kept exactly as they appear in the source file, duplicates and
/// non-string values included. Only string entries are treated as identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionList(Vec<Value>);

impl ExtensionList {
    pub fn new(entries: Vec<Value>) -> Self {
        Self(entries)
    }

    /// Number of entries, whatever their type
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String identifiers in file order; non-string entries are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(Value::as_str)
    }

    /// Check whether an extension is listed. Identifiers are matched case-insensitively,
    /// the same way the marketplace treats `publisher.name`.
    pub fn contains(&self, id: &str) -> bool {
        self.iter().any(|e| e.eq_ignore_ascii_case(id))
    }
}

impl From<Vec<String>> for ExtensionList {
    fn from(ids: Vec<String>) -> Self {
        Self(ids.into_iter().map(Value::String).collect())
    }
}
