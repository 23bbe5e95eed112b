//! Layer merging.
//!
//! The defaults and the project file are merged as raw TOML tables before
//! they are decoded, so a project file only has to mention the keys it
//! changes.

use toml::{Table, Value};

/// Merges a higher-precedence TOML layer into a lower one.
///
/// # Examples
///
/// ```
/// use devstack::config::ConfigMerger;
///
/// let mut base: toml::Table = toml::from_str("[api]\nport = 1\nmax_rows = 10").unwrap();
/// let user: toml::Table = toml::from_str("[api]\nport = 2").unwrap();
///
/// ConfigMerger::merge_into(&mut base, user);
/// assert_eq!(base["api"]["port"].as_integer(), Some(2));
/// assert_eq!(base["api"]["max_rows"].as_integer(), Some(10));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `source` into `target` (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Tables present on both sides: merged key by key, recursively
    /// - Arrays: complete replacement
    /// - Scalars: complete replacement, including a change of type
    pub fn merge_into(target: &mut Table, source: Table) {
        for (key, value) in source {
            let Value::Table(incoming) = value else {
                target.insert(key, value);
                continue;
            };
            if let Some(Value::Table(existing)) = target.get_mut(&key) {
                Self::merge_into(existing, incoming);
            } else {
                target.insert(key, Value::Table(incoming));
            }
        }
    }

    /// Merge layers from lowest to highest precedence.
    #[must_use]
    pub fn merge(layers: impl IntoIterator<Item = Table>) -> Table {
        let mut result = Table::new();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }
}
