use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Result, ScreenError};
use crate::labels::defs::{LabelVersion, builtin_classes};
use crate::labels::{LabelClass, LabelSet};

pub fn builtin_label_set(version: LabelVersion) -> LabelSet {
    let classes = builtin_classes(version)
        .iter()
        .map(|def| LabelClass {
            code: def.code.to_string(),
            name: def.name.to_string(),
            precursor: def.precursor,
        })
        .collect();
    LabelSet {
        version: version.as_str().to_string(),
        classes,
    }
}

pub fn load_label_set(path: &Path) -> Result<LabelSet> {
    let raw = std::fs::read_to_string(path)?;
    let set: LabelSet = serde_json::from_str(&raw)?;
    validate_label_set(&set)?;
    tracing::info!(
        path = %path.display(),
        version = %set.version,
        n_classes = set.n_classes(),
        "loaded label set"
    );
    Ok(set)
}

pub fn validate_label_set(set: &LabelSet) -> Result<()> {
    if set.version.trim().is_empty() {
        return Err(ScreenError::label_config("version is empty"));
    }
    if set.classes.is_empty() {
        return Err(ScreenError::label_config(format!(
            "label set {} has no classes",
            set.version
        )));
    }

    let mut seen = BTreeSet::new();
    for (idx, class) in set.classes.iter().enumerate() {
        let code = class.code.as_str();
        if code.trim().is_empty() {
            return Err(ScreenError::label_config(format!(
                "class {idx} has an empty code"
            )));
        }
        if code.trim() != code || code.contains('_') {
            return Err(ScreenError::label_config(format!(
                "class {idx} code {code:?} contains whitespace or '_'"
            )));
        }
        // Numeric codes would collide with raw class indices in the table.
        if code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScreenError::label_config(format!(
                "class {idx} code {code:?} is numeric"
            )));
        }
        if class.name.trim().is_empty() {
            return Err(ScreenError::label_config(format!(
                "class {idx} ({code}) has no full name"
            )));
        }
        if !seen.insert(code.to_string()) {
            return Err(ScreenError::label_config(format!(
                "duplicate code {code}"
            )));
        }
    }
    Ok(())
}
