//! Player preferences and key bindings
//!
//! Persisted separately from tuning in LocalStorage.

use serde::{Deserialize, Serialize};

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputAction {
    Throw,
    Reset,
    ToggleIdle,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Controls ===
    /// `KeyboardEvent.key` values that throw
    pub throw_keys: Vec<String>,
    /// Keys that restart the round
    pub reset_keys: Vec<String>,
    /// Toggles the autopilot demo
    pub idle_key: String,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            throw_keys: vec![" ".to_string()],
            reset_keys: vec!["r".to_string(), "R".to_string()],
            idle_key: "i".to_string(),
            show_fps: false,
        }
    }
}

impl Settings {
    /// Map a key to its action. Unbound keys are ignored.
    pub fn action_for_key(&self, key: &str) -> Option<InputAction> {
        if self.throw_keys.iter().any(|k| k == key) {
            Some(InputAction::Throw)
        } else if self.reset_keys.iter().any(|k| k == key) {
            Some(InputAction::Reset)
        } else if self.idle_key.eq_ignore_ascii_case(key) {
            Some(InputAction::ToggleIdle)
        } else {
            None
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "eternal_edge_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let settings = Settings::default();
        assert_eq!(settings.action_for_key(" "), Some(InputAction::Throw));
        assert_eq!(settings.action_for_key("r"), Some(InputAction::Reset));
        assert_eq!(settings.action_for_key("R"), Some(InputAction::Reset));
        assert_eq!(settings.action_for_key("I"), Some(InputAction::ToggleIdle));
        assert_eq!(settings.action_for_key("Escape"), None);
        assert_eq!(settings.action_for_key(""), None);
    }

    #[test]
    fn test_rebinding_from_json() {
        let settings: Settings =
            serde_json::from_str(r#"{ "throw_keys": ["ArrowUp", "Enter"] }"#).expect("parses");
        assert_eq!(settings.action_for_key("Enter"), Some(InputAction::Throw));
        assert_eq!(settings.action_for_key(" "), None);
        // Unspecified fields keep their defaults
        assert_eq!(settings.action_for_key("r"), Some(InputAction::Reset));
    }
}
