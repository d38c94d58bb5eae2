use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

/// Product section holding the IntelliJ IDEA settings.
pub const INTELLIJ: &str = "intellij";

/// JetBrains configuration from the `jetbrains` key of `jetbrains.yml`
///
/// Maps product names (`intellij`, `goland`, `pycharm`, ...) to whatever nested
/// settings the file holds for them. No schema is enforced: keys of any YAML
/// type are kept, and lookups fall back to empty values at every level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JetBrainsConfig(IndexMap<Value, Value>);

impl JetBrainsConfig {
    pub fn new(sections: IndexMap<Value, Value>) -> Self {
        Self(sections)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Product section names in file order; non-string keys are skipped.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.0.keys().filter_map(Value::as_str)
    }

    pub fn section(&self, product: &str) -> Option<&Value> {
        self.0.get(&Value::from(product))
    }

    /// Number of entries under `<product>.plugins`.
    ///
    /// Returns 0 when the product section or its `plugins` key is missing, or
    /// when either is not the expected mapping/sequence.
    pub fn plugin_count(&self, product: &str) -> usize {
        self.plugin_entries(product).map_or(0, Vec::len)
    }

    /// String plugin identifiers under `<product>.plugins`; non-string entries are skipped.
    pub fn plugins(&self, product: &str) -> Vec<&str> {
        self.plugin_entries(product)
            .map(|entries| entries.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn intellij_plugin_count(&self) -> usize {
        self.plugin_count(INTELLIJ)
    }

    fn plugin_entries(&self, product: &str) -> Option<&Vec<Value>> {
        self.section(product)?
            .as_mapping()?
            .get("plugins")?
            .as_sequence()
    }
}
