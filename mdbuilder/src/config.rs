//! Index configuration from mdbuilder.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the indexed directory when no `--config` is given
pub const CONFIG_FILE: &str = "mdbuilder.toml";

/// Settings for `mdbuilder index`
///
/// ```toml
/// title = "Documentation"
/// description = ["Generated index", "Do not edit"]
/// output = "docs/index.md"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Index title, written as an H2 heading
    pub title: Option<String>,

    /// Lines written below the title
    pub description: Vec<String>,

    /// Output file; relative paths resolve against the working directory
    pub output: Option<PathBuf>,
}

impl IndexConfig {
    /// Load configuration from a TOML file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(IndexConfig)` - Successfully loaded configuration
    /// * `Err(ConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `{dir}/mdbuilder.toml` if it exists
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        log::info!("Using configuration: {}", path.display());
        Self::load(path).map(Some)
    }

    /// Apply command-line values on top of the file values
    ///
    /// Flags that were given replace the file values; a non-empty
    /// description list replaces the whole file list.
    pub fn merge(
        mut self,
        title: Option<String>,
        description: Vec<String>,
        output: Option<PathBuf>,
    ) -> Self {
        if title.is_some() {
            self.title = title;
        }
        if !description.is_empty() {
            self.description = description;
        }
        if output.is_some() {
            self.output = output;
        }
        self
    }
}

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error when reading the file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Error parsing TOML
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config: IndexConfig = toml::from_str(
            r#"
title = "Documentation"
description = ["Generated index", "Do not edit"]
output = "out/index.md"
"#,
        )
        .unwrap();

        assert_eq!(config.title.as_deref(), Some("Documentation"));
        assert_eq!(config.description, ["Generated index", "Do not edit"]);
        assert_eq!(config.output, Some(PathBuf::from("out/index.md")));
    }

    #[test]
    fn test_missing_fields_default() {
        let config: IndexConfig = toml::from_str("title = \"Only title\"").unwrap();
        assert!(config.description.is_empty());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_flags_override_file() {
        let file = IndexConfig {
            title: Some("File".to_string()),
            description: vec!["from file".to_string()],
            output: Some(PathBuf::from("file.md")),
        };

        let merged = file.clone().merge(Some("Flag".to_string()), Vec::new(), None);
        assert_eq!(merged.title.as_deref(), Some("Flag"));
        assert_eq!(merged.description, ["from file"]);
        assert_eq!(merged.output, Some(PathBuf::from("file.md")));

        let merged = file.merge(None, vec!["from flag".to_string()], Some(PathBuf::from("flag.md")));
        assert_eq!(merged.title.as_deref(), Some("File"));
        assert_eq!(merged.description, ["from flag"]);
        assert_eq!(merged.output, Some(PathBuf::from("flag.md")));
    }

    #[test]
    fn test_discover() {
        let tmp = TempDir::new().unwrap();
        assert!(IndexConfig::discover(tmp.path()).unwrap().is_none());

        fs::write(tmp.path().join(CONFIG_FILE), "title = \"Found\"").unwrap();
        let config = IndexConfig::discover(tmp.path()).unwrap().unwrap();
        assert_eq!(config.title.as_deref(), Some("Found"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "title = [").unwrap();

        let err = IndexConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
