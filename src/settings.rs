//! Player preferences
//!
//! Persisted to LocalStorage as JSON, separately from anything the
//! simulation owns. Missing or malformed stored values fall back to
//! defaults silently.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "meteor_guard_settings";

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub volume: f32,
    /// Mute all audio
    pub muted: bool,
    /// Render the scrolling starfield
    pub starfield: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: 0.8,
            muted: false,
            starfield: true,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Settings {
    /// Load from LocalStorage, falling back to defaults
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok())
            .flatten();
        match stored {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => Self::default(),
        }
    }

    /// Persist to LocalStorage; failures are logged and ignored
    pub fn save(&self) {
        let Ok(json) = serde_json::to_string(self) else {
            return;
        };
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                log::warn!("failed to persist settings");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.volume, 0.8);
        assert!(!s.muted);
        assert!(s.starfield);
    }

    #[test]
    fn test_roundtrip_json() {
        let s = Settings {
            volume: 0.25,
            muted: true,
            starfield: false,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.volume, 0.25);
        assert!(back.muted);
        assert!(!back.starfield);
    }
}
