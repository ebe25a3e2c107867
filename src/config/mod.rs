use crate::core::normalizer::{
    Classifier, DEFAULT_ENTRANCE_KEYWORD, DEFAULT_EXIT_KEYWORD, DEFAULT_TIMESTAMP_FORMAT,
    NormalizerSettings,
};
use crate::db::db_utils::quote_ident;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_input_table")]
    pub input_table: String,
    #[serde(default = "default_output_table")]
    pub output_table: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_entrance_keyword")]
    pub entrance_keyword: String,
    #[serde(default = "default_exit_keyword")]
    pub exit_keyword: String,
    /// Number of summaries echoed after a report run.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_input_table() -> String {
    "Raw".to_string()
}
fn default_output_table() -> String {
    "InFloor_Summary".to_string()
}
fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}
fn default_entrance_keyword() -> String {
    DEFAULT_ENTRANCE_KEYWORD.to_string()
}
fn default_exit_keyword() -> String {
    DEFAULT_EXIT_KEYWORD.to_string()
}
fn default_preview_rows() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            input_table: default_input_table(),
            output_table: default_output_table(),
            timestamp_format: default_timestamp_format(),
            entrance_keyword: default_entrance_keyword(),
            exit_keyword: default_exit_keyword(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("infloor")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".infloor")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("infloor.conf")
    }

    /// Return the full path of the SQLite store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("infloor.sqlite")
    }

    /// Load configuration from the standard file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        quote_ident(&self.input_table)?;
        quote_ident(&self.output_table)?;

        if self.input_table == self.output_table {
            return Err(AppError::Config(
                "input_table and output_table must differ".into(),
            ));
        }
        if self.entrance_keyword.trim().is_empty() || self.exit_keyword.trim().is_empty() {
            return Err(AppError::Config("device keywords cannot be empty".into()));
        }
        Ok(())
    }

    pub fn normalizer_settings(&self) -> NormalizerSettings {
        NormalizerSettings {
            timestamp_format: self.timestamp_format.clone(),
            classifier: Classifier::new(&self.entrance_keyword, &self.exit_keyword),
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory, write the config file (unless `is_test`)
    /// and return the database path to initialize.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\nexit_keyword: OUT\n").unwrap();

        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.input_table, "Raw");
        assert_eq!(cfg.output_table, "InFloor_Summary");
        assert_eq!(cfg.timestamp_format, "%d-%m-%Y %H:%M");
        assert_eq!(cfg.exit_keyword, "OUT");
        assert_eq!(cfg.preview_rows, 10);
    }

    #[test]
    fn validate_rejects_same_input_and_output_table() {
        let cfg = Config {
            output_table: "Raw".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn validate_rejects_unsafe_table_names() {
        let cfg = Config {
            output_table: "out; DROP TABLE log".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::InvalidIdentifier(_))));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = Config::load_from(Path::new("/no/such/dir/infloor.conf")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
