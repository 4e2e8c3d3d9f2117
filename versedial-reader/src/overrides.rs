//! Local verse text overrides
//!
//! A user-supplied JSON file mapping `"surah:verse"` keys to replacement
//! text. Validation is all-or-nothing: a single bad key or value rejects
//! the whole file and the previously loaded table stays in effect.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{VerseKey, VerseText};

/// Validated override table
#[derive(Debug, Clone, Default)]
pub struct LocalOverrides {
    entries: HashMap<VerseKey, VerseText>,
}

impl LocalOverrides {
    /// Load and validate an override file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let overrides = Self::from_json_str(&raw)?;
        info!(path = %path.display(), entries = overrides.len(), "loaded local overrides");
        Ok(overrides)
    }

    /// Parse and validate override JSON.
    ///
    /// The document must be an object. Keys must be `"surah:verse"` with
    /// digits on both sides. Values must be a string (primary text only)
    /// or an array of strings `[primary, secondary]`; entries past the
    /// second are ignored.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| Error::Override(format!("not valid JSON: {e}")))?;
        let map = value
            .as_object()
            .ok_or_else(|| Error::Override("top level must be a JSON object".into()))?;

        let mut entries = HashMap::with_capacity(map.len());
        for (key, value) in map {
            let verse_key: VerseKey = key.parse().map_err(|_| {
                Error::Override(format!("key \"{key}\" must be \"surah:verse\" with digits"))
            })?;
            let text = match value {
                Value::String(s) => VerseText::new(s.clone(), ""),
                Value::Array(parts) => {
                    let mut strings = Vec::with_capacity(parts.len());
                    for part in parts {
                        let s = part.as_str().ok_or_else(|| {
                            Error::Override(format!(
                                "key \"{key}\": array entries must all be strings"
                            ))
                        })?;
                        strings.push(s);
                    }
                    let primary = *strings.first().ok_or_else(|| {
                        Error::Override(format!("key \"{key}\": array must not be empty"))
                    })?;
                    let secondary = strings.get(1).copied().unwrap_or("");
                    VerseText::new(primary, secondary)
                }
                _ => {
                    return Err(Error::Override(format!(
                        "key \"{key}\": value must be a string or array of strings"
                    )))
                }
            };
            entries.insert(verse_key, text);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: VerseKey) -> Option<&VerseText> {
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
