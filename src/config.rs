//! Persisted settings (lives in the OS config directory).
//!
//! The selected preset is never written back; `initial_preset` is only the
//! view the window opens on.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::model::ViewPreset;
use crate::pipeline::series::{LabelOptions, LabelOrder, DEFAULT_LABEL_FORMAT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Dataset JSON (`{"layers": [...]}`). Sample data is used when unset.
    pub data_file: Option<PathBuf>,
    /// Roster JSON (`{"users": [...]}`).
    pub users_file: Option<PathBuf>,
    /// strftime pattern for day labels.
    pub label_format: String,
    pub label_order: LabelOrder,
    pub initial_preset: ViewPreset,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_file: None,
            users_file: None,
            label_format: DEFAULT_LABEL_FORMAT.to_string(),
            label_order: LabelOrder::default(),
            initial_preset: ViewPreset::Month,
        }
    }
}

impl AppSettings {
    /// Label options from the settings, falling back to the default format
    /// when the configured one is invalid.
    pub fn label_options(&self) -> LabelOptions {
        match LabelOptions::new(self.label_format.clone(), self.label_order) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("{}, using '{}'", e, DEFAULT_LABEL_FORMAT);
                let mut options = LabelOptions::default();
                options.order = self.label_order;
                options
            }
        }
    }

    /// Initial preset, replaced by `Month` when it has no range to show.
    pub fn startup_preset(&self) -> ViewPreset {
        if self.initial_preset.has_range() {
            self.initial_preset
        } else {
            log::warn!(
                "initial_preset '{}' has no date range, starting on Month",
                self.initial_preset
            );
            ViewPreset::Month
        }
    }

    /// Resolve relative data paths against the settings directory.
    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.data_file, &mut self.users_file].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Read a settings file. A missing file yields defaults; partial files are
/// filled in from defaults.
pub fn load_settings(path: &Path) -> AppResult<AppSettings> {
    let contents = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppSettings::default()),
        Err(e) => return Err(AppError::io(path, e)),
    };
    let mut settings: AppSettings =
        serde_json::from_str(&contents).map_err(|e| AppError::json(path, e))?;
    if let Some(base) = path.parent() {
        settings.resolve_paths(base);
    }
    Ok(settings)
}

pub fn save_settings(settings: &AppSettings, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| AppError::Config(e.to_string()))?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| AppError::io(dir, e))?;
    }
    std::fs::write(path, json).map_err(|e| AppError::io(path, e))
}

/// Settings plus the location they were read from.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    pub settings: AppSettings,
    config_dir: PathBuf,
}

impl SettingsStore {
    /// Locate the config directory, load settings, and write a default
    /// settings file on first run so users have something to edit.
    pub fn load() -> Self {
        let config_dir = Self::config_dir_path();
        let settings_path = config_dir.join("settings.json");

        if !settings_path.exists() {
            if let Err(e) = save_settings(&AppSettings::default(), &settings_path) {
                log::warn!("Could not write default settings: {}", e);
            }
        }

        let settings = load_settings(&settings_path).unwrap_or_else(|e| {
            log::error!("{}; using default settings", e);
            AppSettings::default()
        });
        log::debug!("settings from {:?}: {:?}", settings_path, settings);

        Self {
            settings,
            config_dir,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn config_dir_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "RustTimelineChart") {
            proj_dirs.config_dir().to_path_buf()
        } else {
            PathBuf::from(".")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn partial_file_is_filled_from_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"label_order": "first_seen"}"#).unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.label_order, LabelOrder::FirstSeen);
        assert_eq!(settings.label_format, DEFAULT_LABEL_FORMAT);
        assert_eq!(settings.initial_preset, ViewPreset::Month);
    }

    #[test]
    fn relative_paths_resolve_against_settings_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"data_file": "data.json", "users_file": "/abs/users.json"}"#,
        )
        .unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.data_file, Some(dir.path().join("data.json")));
        assert_eq!(settings.users_file, Some(PathBuf::from("/abs/users.json")));
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            label_format: "%d.%m.%Y".into(),
            initial_preset: ViewPreset::OneWeek,
            ..AppSettings::default()
        };
        save_settings(&settings, &path).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn invalid_label_format_falls_back() {
        let settings = AppSettings {
            label_format: "%Q".into(),
            label_order: LabelOrder::FirstSeen,
            ..AppSettings::default()
        };
        let options = settings.label_options();
        assert_eq!(options.format(), DEFAULT_LABEL_FORMAT);
        assert_eq!(options.order, LabelOrder::FirstSeen);
    }

    #[test]
    fn month_level_label_format_falls_back() {
        for format in ["%B %Y", "%Y-%m"] {
            let settings = AppSettings {
                label_format: format.into(),
                ..AppSettings::default()
            };
            assert_eq!(settings.label_options().format(), DEFAULT_LABEL_FORMAT);
        }
    }

    #[test]
    fn unbounded_initial_preset_starts_on_month() {
        let settings = AppSettings {
            initial_preset: ViewPreset::TwoDays,
            ..AppSettings::default()
        };
        assert_eq!(settings.startup_preset(), ViewPreset::Month);
    }

    #[test]
    fn broken_json_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{").unwrap();
        assert!(matches!(load_settings(&path), Err(AppError::Json { .. })));
    }
}
