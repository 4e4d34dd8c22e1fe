#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Weft Configuration
//!
//! This crate provides configuration management for Weft.
//! It handles loading, saving, and managing configuration files that specify:
//! - Where external tools (spec compiler, translator) live
//! - Logging configuration
//! - Code generation parameters (output directory, discovery windows)
//!
//! Configuration is stored in TOML format and can be loaded from files or created
//! with sensible defaults for development and testing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool locations
    pub tools: ToolsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Code generation settings
    pub generation: GenerationConfig,
}

/// External tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Root of the conventional tools tree (`<root>/<compiler>/<platform>/<binary>`)
    pub root: PathBuf,
    /// Explicit spec compiler path, tried before the tools tree
    pub compiler: Option<PathBuf>,
    /// IDL-to-common translator executable
    pub translator: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    pub level: String,
    /// Log file path (optional)
    pub file: Option<PathBuf>,
}

/// Code generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Where generated files are written
    pub output_dir: PathBuf,
    /// Extension of the translator's common-representation files
    pub common_extension: String,
    /// Recency window, in seconds, for common-representation output
    pub common_window_secs: u64,
    /// Recency window, in seconds, for generated client sources
    pub client_window_secs: u64,
}

impl GenerationConfig {
    /// Recency window for common-representation output.
    pub fn common_window(&self) -> Duration { Duration::from_secs(self.common_window_secs) }

    /// Recency window for generated client sources.
    pub fn client_window(&self) -> Duration { Duration::from_secs(self.client_window_secs) }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path` if given (it must exist), else from the default
    /// location when a file is there, else fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Ok(default) if default.exists() => Self::from_file(default),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/weft/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("weft");
        Ok(config_dir.join("config.toml"))
    }

    /// Get the default output directory for generated code
    pub fn default_output_dir() -> PathBuf {
        Self::default_output_dir_internal(
            std::env::var("OUT_DIR").ok(),
            std::env::current_dir().ok(),
        )
    }

    /// Internal function for testing - allows injection of environment values
    fn default_output_dir_internal(
        out_dir: Option<String>,
        current_dir: Option<PathBuf>,
    ) -> PathBuf {
        // First try to get OUT_DIR environment variable
        if let Some(out_dir) = out_dir {
            return PathBuf::from(out_dir);
        }

        // Fallback to current directory
        if let Some(current_dir) = current_dir {
            return current_dir;
        }

        // Last resort - use current directory as string
        PathBuf::from(".")
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { root: path::default_tools_root(), compiler: None, translator: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string(), file: None } }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            output_dir: Config::default_output_dir(),
            common_extension: "cs".to_string(),
            common_window_secs: 30,
            client_window_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_file() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let toml_content = r#"
            [tools]
            root = "/opt/weft/external"
            compiler = "/opt/thrift/bin/thrift"
            translator = "/opt/weft/idl2common"

            [logging]
            level = "debug"
            file = "weft.log"

            [generation]
            output_dir = "generated"
            common_extension = "cs"
            common_window_secs = 20
            client_window_secs = 45
        "#;
        fs::write(&temp_file, toml_content)
            .expect("Failed to write TOML content to temporary file");

        let loaded =
            Config::from_file(&temp_file).expect("Failed to load config from temporary file");
        assert_eq!(loaded.tools.root, PathBuf::from("/opt/weft/external"));
        assert_eq!(loaded.tools.compiler, Some(PathBuf::from("/opt/thrift/bin/thrift")));
        assert_eq!(loaded.tools.translator, Some(PathBuf::from("/opt/weft/idl2common")));
        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.logging.file, Some(PathBuf::from("weft.log")));
        assert_eq!(loaded.generation.output_dir, PathBuf::from("generated"));
        assert_eq!(loaded.generation.common_window(), Duration::from_secs(20));
        assert_eq!(loaded.generation.client_window(), Duration::from_secs(45));

        // Test file not found error
        let result = Config::from_file("nonexistent_file.toml");
        match result.expect_err("Expected error for nonexistent file") {
            ConfigError::FileRead(_) => {}
            other => panic!("Expected FileRead error, got {:?}", other),
        }

        // Test parse error
        let bad = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&bad, "invalid toml content").expect("Failed to write invalid TOML content");
        match Config::from_file(&bad).expect_err("Expected parse error for invalid TOML") {
            ConfigError::Parse(_) => {}
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&temp_file, "[logging]\nlevel = \"warn\"\n").expect("Failed to write TOML");

        let loaded = Config::from_file(&temp_file).expect("Failed to load partial config");
        assert_eq!(loaded.logging.level, "warn");
        assert_eq!(loaded.tools.compiler, None);
        assert_eq!(loaded.generation.common_window_secs, 30);
        assert_eq!(loaded.generation.client_window_secs, 60);
        assert_eq!(loaded.generation.common_extension, "cs");
    }

    #[test]
    fn test_load_or_default() {
        let missing = std::env::temp_dir().join("weft-definitely-missing-config.toml");
        match Config::load_or_default(Some(&missing)) {
            Err(ConfigError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("Expected NotFound error, got {:?}", other),
        }

        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&temp_file, "[generation]\nclient_window_secs = 90\n")
            .expect("Failed to write TOML");
        let loaded =
            Config::load_or_default(Some(temp_file.path())).expect("Failed to load config");
        assert_eq!(loaded.generation.client_window_secs, 90);
    }

    #[test]
    fn test_save() {
        let config = Config::default();
        let temp_file =
            NamedTempFile::new().expect("Failed to create temporary file for save test");

        config.save(&temp_file).expect("Failed to save config");

        let contents = fs::read_to_string(&temp_file).expect("Failed to read saved config file");
        assert!(contents.contains("[tools]"));
        assert!(contents.contains("common_window_secs = 30"));
        assert!(contents.contains("info"));

        let reloaded = Config::from_file(&temp_file).expect("Failed to reload saved config");
        assert_eq!(reloaded.generation.client_window_secs, 60);

        // Test file write error - try to save to a non-existent directory
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let non_existent_subdir = temp_dir.path().join("nonexistent").join("config.toml");
        match config.save(&non_existent_subdir).expect_err("Expected file write error") {
            ConfigError::FileRead(_) => (),
            other => panic!("Expected FileRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path().expect("Failed to get default config path");
        let path_str = path.to_str().expect("Path should be valid UTF-8");
        assert!(path_str.contains("weft"));
        assert!(path_str.ends_with("config.toml"));
    }

    #[test]
    fn test_default_output_dir_internal() {
        // Test OUT_DIR takes precedence
        let dir = Config::default_output_dir_internal(
            Some("/tmp/out_dir".to_string()),
            Some(PathBuf::from("/tmp/current")),
        );
        assert_eq!(dir, PathBuf::from("/tmp/out_dir"));

        // Test current_dir fallback when OUT_DIR is None
        let dir = Config::default_output_dir_internal(None, Some(PathBuf::from("/tmp/current")));
        assert_eq!(dir, PathBuf::from("/tmp/current"));

        // Test the fallback case by passing None for both parameters
        let dir = Config::default_output_dir_internal(None, None);
        assert_eq!(dir, PathBuf::from("."));
    }

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);
        assert!(config.tools.root.ends_with("external"));
        assert_eq!(config.generation.common_window(), Duration::from_secs(30));
        assert!(config.generation.client_window() > config.generation.common_window());
    }
}
