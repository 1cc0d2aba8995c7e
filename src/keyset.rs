//! Reference locale loading.
//!
//! The reference locale file is the ground truth for valid translation keys.
//! Its nested JSON structure is flattened into dot-joined key paths; the
//! translated values themselves are discarded.

use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Set of fully-qualified translation keys, e.g. `"Common.buttons.submit"`.
pub type KeySet = HashSet<String>;

/// Load and flatten the reference locale file into a [`KeySet`].
///
/// Fails if the file is absent or not valid JSON. Both are fatal to the
/// whole run: no audit is meaningful without the reference key set.
pub fn load_key_set(path: &Path) -> Result<KeySet> {
    if !path.exists() {
        bail!("Reference file '{}' not found", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference file: {}", path.display()))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse reference file: {}", path.display()))?;

    let mut keys = KeySet::new();
    flatten_keys(&json, String::new(), &mut keys);
    Ok(keys)
}

/// Recursively flatten nested JSON into dot-joined key paths.
///
/// Objects recurse with an extended prefix. Any other value (string, number,
/// bool, null, array) is a terminal leaf and records the accumulated path.
/// Empty objects contribute no keys.
fn flatten_keys(value: &Value, prefix: String, out: &mut KeySet) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_keys(val, new_prefix, out);
            }
        }
        _ => {
            if !prefix.is_empty() {
                out.insert(prefix);
            }
        }
    }
}
