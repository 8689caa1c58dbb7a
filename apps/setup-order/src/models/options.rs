//! Rule options controlling declaration order.
//!
//! Loaded from the `[order]` table of the config file:
//! - `sectionOrder`: section labels, primary sort key.
//! - `lifecycleOrder`: hook name -> priority inside the `lifecycle` section.
//!
//! Either field falls back to its built-in default independently. Unknown
//! keys are rejected at deserialization time.

use crate::error::ConfigError;
use crate::sections;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct OrderOptions {
    pub section_order: Vec<String>,
    pub lifecycle_order: HashMap<String, i64>,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            section_order: sections::default_section_order(),
            lifecycle_order: sections::default_lifecycle_order(),
        }
    }
}

impl OrderOptions {
    pub fn new(section_order: Vec<String>, lifecycle_order: HashMap<String, i64>) -> Self {
        Self {
            section_order,
            lifecycle_order,
        }
    }

    /// Reject a section order that could not sort anything sensibly.
    ///
    /// Labels the classifier can produce may be omitted; those sections sort
    /// after every listed one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.section_order.is_empty() {
            return Err(ConfigError::EmptySectionOrder);
        }
        let known = sections::known_sections();
        let mut seen: HashSet<&str> = HashSet::new();
        for label in &self.section_order {
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicateSection(label.clone()));
            }
            if !known.contains(&label.as_str()) {
                return Err(ConfigError::UnknownSection {
                    label: label.clone(),
                    known: known.join(", "),
                });
            }
        }
        Ok(())
    }

    /// Position of `section` in the order; unlisted sections go last.
    pub fn section_rank(&self, section: &str) -> usize {
        self.section_order
            .iter()
            .position(|s| s == section)
            .unwrap_or(self.section_order.len())
    }

    /// Whether `name` is a lifecycle hook, built-in or configured.
    pub fn is_lifecycle_hook(&self, name: &str) -> bool {
        sections::LIFECYCLE_HOOKS.contains(&name) || self.lifecycle_order.contains_key(name)
    }

    pub fn hook_priority(&self, name: &str) -> i64 {
        self.lifecycle_order
            .get(name)
            .copied()
            .unwrap_or(sections::UNCONFIGURED_HOOK_PRIORITY)
    }
}
