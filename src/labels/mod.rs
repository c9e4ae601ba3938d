pub mod defs;
pub mod loader;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use defs::LabelVersion;
pub use loader::{builtin_label_set, load_label_set};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelClass {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub precursor: bool,
}

/// Versioned mapping from model class index to short code, full cell-type
/// name and precursor membership. Position in `classes` is the class index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    pub version: String,
    pub classes: Vec<LabelClass>,
}

impl LabelSet {
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn class(&self, index: i64) -> Option<&LabelClass> {
        usize::try_from(index)
            .ok()
            .and_then(|idx| self.classes.get(idx))
    }

    pub fn code(&self, index: i64) -> Option<&str> {
        self.class(index).map(|c| c.code.as_str())
    }

    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.classes.iter().position(|c| c.code == code)
    }

    pub fn full_name(&self, code: &str) -> Option<&str> {
        self.index_of(code).map(|idx| self.classes[idx].name.as_str())
    }

    /// Resolves a grouping key to a class index. Accepts either a short code
    /// or a decimal class index that lies inside the set.
    pub fn resolve_key(&self, key: &str) -> Option<usize> {
        if let Some(idx) = self.index_of(key) {
            return Some(idx);
        }
        if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
            let idx = key.parse::<usize>().ok()?;
            if idx < self.classes.len() {
                return Some(idx);
            }
        }
        None
    }

    pub fn precursor_indices(&self) -> BTreeSet<i64> {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.precursor)
            .map(|(idx, _)| idx as i64)
            .collect()
    }

    pub fn precursor_codes(&self) -> Vec<&str> {
        self.classes
            .iter()
            .filter(|c| c.precursor)
            .map(|c| c.code.as_str())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/labels/tests.rs"]
mod tests;
