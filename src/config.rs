use crate::{
    domain::ColumnKey,
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};

/// Heading for one board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub key: ColumnKey,
    pub title: String,
}

impl ColumnConfig {
    pub fn new(key: ColumnKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    /// Key the serialized board is stored under
    pub storage_key: String,
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Board".to_string(),
            storage_key: "dnd-board-state".to_string(),
            columns: ColumnKey::ALL
                .into_iter()
                .map(|key| ColumnConfig::new(key, key.default_title()))
                .collect(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig =
            serde_json::from_str(json).map_err(|e| BoardError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "storage_key must not be empty".to_string(),
            ));
        }

        for key in ColumnKey::ALL {
            let count = self.columns.iter().filter(|c| c.key == key).count();
            if count != 1 {
                return Err(BoardError::ConfigError(format!(
                    "column '{}' must be configured exactly once (found {})",
                    key, count
                )));
            }
        }

        Ok(())
    }

    /// Title shown above a column
    pub fn title_for(&self, column: ColumnKey) -> &str {
        self.columns
            .iter()
            .find(|c| c.key == column)
            .map(|c| c.title.as_str())
            .unwrap_or_else(|| column.default_title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.storage_key, "dnd-board-state");
        assert_eq!(config.title_for(ColumnKey::Todo), "To Do");
        assert_eq!(config.title_for(ColumnKey::InProgress), "In Progress");
        assert_eq!(config.title_for(ColumnKey::Done), "Done");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "name": "Sprint",
            "storage_key": "sprint-board",
            "columns": [
                {"key": "todo", "title": "Backlog"},
                {"key": "inprogress", "title": "Doing"},
                {"key": "done", "title": "Shipped"}
            ]
        }"#;

        let config = BoardConfig::from_json(json).unwrap();
        assert_eq!(config.name, "Sprint");
        assert_eq!(config.title_for(ColumnKey::Todo), "Backlog");
        assert_eq!(config.title_for(ColumnKey::Done), "Shipped");
    }

    #[test]
    fn test_missing_column_rejected() {
        let json = r#"{
            "name": "Sprint",
            "storage_key": "sprint-board",
            "columns": [{"key": "todo", "title": "Backlog"}]
        }"#;

        let err = BoardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let config = BoardConfig {
            storage_key: "  ".to_string(),
            ..BoardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = BoardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));
    }
}
