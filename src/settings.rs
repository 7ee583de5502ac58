use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_FOLDER_NAME: &str = "SurakshaKavach";

/// UI preferences only. Profiles and sessions are deliberately not
/// persisted; each launch starts signed out.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UiSettings {
    #[serde(default)]
    pub last_theme: Option<String>,
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    pub version: String,
    pub base_path: String,
    #[serde(default)]
    pub ui: UiSettings,
}

pub fn default_base_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    if let Some(dir) = exe_dir {
        return dir.join("data");
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER_NAME)
}

pub fn ensure_base_folders(base: &Path) -> io::Result<()> {
    for d in [base.to_path_buf(), base.join("config"), base.join("themes")] {
        if !d.exists() {
            fs::create_dir_all(&d)?;
        }
    }
    Ok(())
}

pub fn settings_path(base: &Path) -> PathBuf {
    base.join("config").join("settings.json")
}

pub fn load_or_init_settings(base: &Path) -> io::Result<Settings> {
    let config_path = settings_path(base);

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        match serde_json::from_str::<Settings>(&contents) {
            Ok(mut settings) => {
                // Keep base_path in sync when the folder was moved or overridden.
                if settings.base_path != base.to_string_lossy() {
                    settings.base_path = base.to_string_lossy().to_string();
                }
                return Ok(settings);
            }
            Err(e) => {
                log::warn!("settings.json is unreadable ({e}); rewriting defaults");
            }
        }
    }

    let settings = Settings {
        version: env!("CARGO_PKG_VERSION").to_string(),
        base_path: base.to_string_lossy().to_string(),
        ui: UiSettings::default(),
    };
    save_settings(&settings, base)?;
    Ok(settings)
}

pub fn save_settings(settings: &Settings, base: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(settings_path(base), json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_defaults_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        ensure_base_folders(dir.path()).unwrap();

        let mut settings = load_or_init_settings(dir.path()).unwrap();
        assert!(settings_path(dir.path()).exists());
        assert!(settings.ui.last_theme.is_none());

        settings.ui.last_theme = Some("slate_night".to_string());
        save_settings(&settings, dir.path()).unwrap();

        let reloaded = load_or_init_settings(dir.path()).unwrap();
        assert_eq!(reloaded.ui.last_theme.as_deref(), Some("slate_night"));
    }

    #[test]
    fn corrupt_settings_file_is_replaced_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        ensure_base_folders(dir.path()).unwrap();
        fs::write(settings_path(dir.path()), "{not json").unwrap();

        let settings = load_or_init_settings(dir.path()).unwrap();
        assert_eq!(settings.base_path, dir.path().to_string_lossy());
    }
}
