use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Application settings. Defaults reproduce the stock behavior: sweep
/// elements marked `alert` five seconds after the page is ready.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Delay between page ready and the dismissal sweep, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Class token that marks an element as a dismissible banner.
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_delay_ms() -> u64 {
    5000
}

fn default_marker() -> String {
    "alert".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            marker: default_marker(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.delay_ms, 5000);
        assert_eq!(settings.marker, "alert");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        let default = manager.load();
        assert_eq!(default.delay_ms, 5000);

        let new_settings = Settings {
            delay_ms: 2500,
            marker: "notice".to_string(),
        };

        manager.save(&new_settings).unwrap();
        let loaded = manager.load();

        assert_eq!(loaded.delay_ms, 2500);
        assert_eq!(loaded.marker, "notice");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        fs::write(dir.path().join("settings.json"), "{}").unwrap();
        let loaded = manager.load();
        assert_eq!(loaded.delay_ms, 5000);
        assert_eq!(loaded.marker, "alert");
    }
}
