use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const SOUND_ENABLED_KEY: &str = "soundEnabled";

/// Key-value port the controller persists user preferences through.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Reads a stored flag. Anything other than the literal `"true"` counts as
/// false once a value is present.
pub fn read_flag<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<bool> {
    store.get(key).map(|value| value == "true")
}

pub fn write_flag<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, value: bool) {
    store.set(key, if value { "true" } else { "false" });
}

/// In-memory preference map, serialized as a flat JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Preferences {
    entries: BTreeMap<String, String>,
}

impl PreferenceStore for Preferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
