use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::timestamp::parse_timestamp;

/// Identifier linking an entry to a roster user.
///
/// Source files use both JSON numbers and strings for ids; both are
/// normalized to the same text so `1` and `"1"` refer to the same user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawUserId", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl From<RawUserId> for UserId {
    fn from(raw: RawUserId) -> Self {
        match raw {
            RawUserId::Int(n) => UserId(n.to_string()),
            RawUserId::Uint(n) => UserId(n.to_string()),
            RawUserId::Float(n) => UserId(n.to_string()),
            RawUserId::Text(s) => UserId(s),
        }
    }
}

/// One recorded event attributed to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Raw ISO-8601 timestamp as found in the source file.
    #[serde(rename = "startDate")]
    pub start_date: String,
    /// Remaining source fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    pub fn new(user_id: impl Into<UserId>, start_date: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            start_date: start_date.into(),
            extra: Map::new(),
        }
    }

    /// Parsed start instant in local time, `None` when malformed.
    pub fn start(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.start_date)
    }
}

/// A named bucket of entries (a "layer" in the source data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub layers: Vec<Entry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Group {
    pub fn new(name: impl Into<String>, layers: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            layers,
            extra: Map::new(),
        }
    }

    /// Copy of this group's metadata holding only the given entries.
    pub fn with_entries(&self, layers: Vec<Entry>) -> Self {
        Self {
            name: self.name.clone(),
            layers,
            extra: self.extra.clone(),
        }
    }
}

/// The full set of groups loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub layers: Vec<Group>,
}

impl Dataset {
    pub fn new(layers: Vec<Group>) -> Self {
        Self { layers }
    }

    pub fn groups(&self) -> &[Group] {
        &self.layers
    }

    pub fn entry_count(&self) -> usize {
        self.layers.iter().map(|g| g.layers.len()).sum()
    }

    /// Number of entries whose `startDate` cannot be parsed.
    pub fn malformed_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|g| g.layers.iter())
            .filter(|e| e.start().is_none())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_normalize() {
        let a: Entry =
            serde_json::from_str(r#"{"userId": 7, "startDate": "2024-06-15T10:00:00"}"#).unwrap();
        let b: Entry =
            serde_json::from_str(r#"{"userId": "7", "startDate": "2024-06-15T10:00:00"}"#).unwrap();
        assert_eq!(a.user_id, b.user_id);
        assert_eq!(a.user_id.as_str(), "7");
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let json = r#"{
            "name": "Design",
            "color": "red",
            "layers": [
                {"userId": 1, "startDate": "2024-06-15T10:00:00", "endDate": "2024-06-16T10:00:00"}
            ]
        }"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.name, "Design");
        assert_eq!(group.extra.get("color"), Some(&Value::from("red")));
        assert_eq!(
            group.layers[0].extra.get("endDate"),
            Some(&Value::from("2024-06-16T10:00:00"))
        );

        let trimmed = group.with_entries(Vec::new());
        assert_eq!(trimmed.extra, group.extra);
        assert!(trimmed.layers.is_empty());
    }

    #[test]
    fn missing_group_name_defaults_to_empty() {
        let group: Group = serde_json::from_str(r#"{"layers": []}"#).unwrap();
        assert_eq!(group.name, "");
    }

    #[test]
    fn malformed_entries_are_counted() {
        let dataset = Dataset::new(vec![Group::new(
            "g",
            vec![
                Entry::new("1", "2024-06-15T10:00:00"),
                Entry::new("1", "not a date"),
                Entry::new("2", ""),
            ],
        )]);
        assert_eq!(dataset.entry_count(), 3);
        assert_eq!(dataset.malformed_count(), 2);
    }
}
