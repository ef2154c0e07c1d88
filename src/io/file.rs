use std::path::Path;

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::model::sample::{sample_dataset, sample_roster};
use crate::model::{Dataset, Roster};

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let json = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    serde_json::from_str(&json).map_err(|e| AppError::json(path, e))
}

/// Load a `{"layers": [...]}` dataset from a JSON file.
///
/// Entries with unparseable `startDate` values are kept but reported once;
/// they never fall inside any range.
pub fn load_dataset(path: &Path) -> AppResult<Dataset> {
    let dataset: Dataset = read_json(path)?;
    let malformed = dataset.malformed_count();
    if malformed > 0 {
        log::warn!(
            "{} of {} entries in {:?} have an unreadable startDate and will never be shown",
            malformed,
            dataset.entry_count(),
            path
        );
    }
    log::info!(
        "Loaded {} groups / {} entries from {:?}",
        dataset.groups().len(),
        dataset.entry_count(),
        path
    );
    Ok(dataset)
}

/// Load a `{"users": [...]}` roster from a JSON file.
pub fn load_roster(path: &Path) -> AppResult<Roster> {
    let roster: Roster = read_json(path)?;
    log::info!("Loaded {} users from {:?}", roster.len(), path);
    Ok(roster)
}

/// Dataset and roster in use, plus a note on where they came from.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub dataset: Dataset,
    pub roster: Roster,
    pub notice: String,
}

/// Load the configured files, falling back to the built-in sample when a
/// path is missing or unreadable.
pub fn load_or_sample(
    data_file: Option<&Path>,
    users_file: Option<&Path>,
    now: NaiveDateTime,
) -> LoadedData {
    let (Some(data_path), Some(users_path)) = (data_file, users_file) else {
        log::info!("No dataset configured, using sample data");
        return LoadedData {
            dataset: sample_dataset(now),
            roster: sample_roster(),
            notice: "Showing sample data".to_string(),
        };
    };

    match (load_dataset(data_path), load_roster(users_path)) {
        (Ok(dataset), Ok(roster)) => {
            let notice = format!(
                "Loaded {} entries for {} users",
                dataset.entry_count(),
                roster.len()
            );
            LoadedData {
                dataset,
                roster,
                notice,
            }
        }
        (Err(e), _) | (_, Err(e)) => {
            log::error!("{}", e);
            LoadedData {
                dataset: sample_dataset(now),
                roster: sample_roster(),
                notice: format!("{} (showing sample data)", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    const DATA: &str = r#"{
        "layers": [
            {
                "name": "Design",
                "layers": [
                    {"userId": 1, "startDate": "2024-06-15T10:00:00"},
                    {"userId": 2, "startDate": "bad"}
                ]
            },
            {"name": "Empty", "layers": []}
        ]
    }"#;

    const USERS: &str = r#"{"users": [{"id": 1, "name": "Alice"}, {"id": "2", "name": "Bob"}]}"#;

    #[test]
    fn loads_dataset_and_roster() {
        let dir = TempDir::new().unwrap();
        let dataset = load_dataset(&write(&dir, "data.json", DATA)).unwrap();
        assert_eq!(dataset.groups().len(), 2);
        assert_eq!(dataset.entry_count(), 2);
        assert_eq!(dataset.malformed_count(), 1);

        let roster = load_roster(&write(&dir, "users.json", USERS)).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.users()[1].id.as_str(), "2");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_dataset(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn bad_json_is_a_json_error() {
        let dir = TempDir::new().unwrap();
        let err = load_roster(&write(&dir, "users.json", "{ users: ")).unwrap_err();
        assert!(matches!(err, AppError::Json { .. }));
    }

    #[test]
    fn falls_back_to_sample_without_paths() {
        let loaded = load_or_sample(None, None, now());
        assert_eq!(loaded.roster, sample_roster());
        assert_eq!(loaded.dataset, sample_dataset(now()));
    }

    #[test]
    fn falls_back_to_sample_on_error() {
        let dir = TempDir::new().unwrap();
        let users = write(&dir, "users.json", USERS);
        let missing = dir.path().join("data.json");
        let loaded = load_or_sample(Some(&missing), Some(&users), now());
        assert_eq!(loaded.roster, sample_roster());
        assert!(loaded.notice.contains("sample data"));
    }

    #[test]
    fn uses_configured_files() {
        let dir = TempDir::new().unwrap();
        let data = write(&dir, "data.json", DATA);
        let users = write(&dir, "users.json", USERS);
        let loaded = load_or_sample(Some(&data), Some(&users), now());
        assert_eq!(loaded.roster.len(), 2);
        assert_eq!(loaded.notice, "Loaded 2 entries for 2 users");
    }
}
