use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::StorePaths;
use crate::error::{Result, RosterError};

pub const PROJECT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Resolve configuration.
    ///
    /// An explicit path (argument or `ROSTER_CONFIG`) is the only file read
    /// when given. Otherwise the global file is applied, then
    /// `roster.toml` in `project_dir`. Environment overrides go last.
    pub fn load(explicit_path: Option<&Path>, project_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("ROSTER_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_dir.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Document and row file paths for a [`crate::core::RecordStore`].
    #[must_use]
    pub fn store_paths(&self) -> StorePaths {
        StorePaths {
            document: self.storage.document_path.clone(),
            rows: self.storage.rows_path.clone(),
        }
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("roster/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| RosterError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| RosterError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("ROSTER_DOCUMENT_PATH") {
            self.storage.document_path = PathBuf::from(value);
        }
        if let Some(value) = env_string("ROSTER_ROWS_PATH") {
            self.storage.rows_path = PathBuf::from(value);
        }
        if let Some(value) = env_string("ROSTER_COLOR") {
            self.display.color = parse_color_mode(&value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_document_path")]
    pub document_path: PathBuf,
    #[serde(default = "default_rows_path")]
    pub rows_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            document_path: default_document_path(),
            rows_path: default_rows_path(),
        }
    }
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(value) = patch.document_path {
            self.document_path = value;
        }
        if let Some(value) = patch.rows_path {
            self.rows_path = value;
        }
    }
}

fn default_document_path() -> PathBuf {
    PathBuf::from("students.json")
}

fn default_rows_path() -> PathBuf {
    PathBuf::from("students.csv")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: ColorMode,
}

impl DisplayConfig {
    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.color {
            self.color = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub storage: Option<StoragePatch>,
    pub display: Option<DisplayPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoragePatch {
    pub document_path: Option<PathBuf>,
    pub rows_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayPatch {
    pub color: Option<ColorMode>,
}

fn parse_color_mode(value: &str) -> Result<ColorMode> {
    match value.to_lowercase().as_str() {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(RosterError::Config(format!(
            "invalid color mode {value} (expected auto|always|never)"
        ))),
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::UnitTestFixture;
    use crate::test_utils::{TestCase, run_table_tests};

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.document_path, PathBuf::from("students.json"));
        assert_eq!(config.storage.rows_path, PathBuf::from("students.csv"));
        assert_eq!(config.display.color, ColorMode::Auto);
    }

    #[test]
    fn test_patch_overrides_only_given_keys() {
        let mut config = Config::default();
        let patch: ConfigPatch = toml::from_str("[storage]\nrows_path = \"data/roll.csv\"\n").unwrap();
        config.merge_patch(patch);

        assert_eq!(config.storage.document_path, PathBuf::from("students.json"));
        assert_eq!(config.storage.rows_path, PathBuf::from("data/roll.csv"));
    }

    #[test]
    fn test_missing_explicit_file_yields_defaults() {
        let fixture = UnitTestFixture::new();
        let patch = Config::load_patch(&fixture.data_path.join("absent.toml")).unwrap();
        assert!(patch.is_none());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let fixture = UnitTestFixture::new();
        let path = fixture.create_file("bad.toml", "[storage\n");
        let err = Config::load_patch(&path).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn test_store_paths_follow_storage_section() {
        let config: Config = toml::from_str(
            "[storage]\ndocument_path = \"a.json\"\nrows_path = \"b.csv\"\n",
        )
        .unwrap();
        let paths = config.store_paths();
        assert_eq!(paths.document, PathBuf::from("a.json"));
        assert_eq!(paths.rows, PathBuf::from("b.csv"));
    }

    #[test]
    fn test_parse_color_mode() -> std::result::Result<(), String> {
        let cases = vec![
            TestCase {
                name: "lowercase",
                input: "never",
                expected: Some(ColorMode::Never),
            },
            TestCase {
                name: "mixed case",
                input: "Always",
                expected: Some(ColorMode::Always),
            },
            TestCase {
                name: "unknown",
                input: "sometimes",
                expected: None,
            },
        ];
        run_table_tests(cases, |input| parse_color_mode(input).ok())
    }
}
