//! Configuration file loading for chibi.
//!
//! Reads `chibi.config.json` from a project directory.
//! Also provides the JSON Schema for editor autocompletion.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use chibi_relief::CodegenOptions;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "chibi.config.json";

/// Top-level chibi configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChibiConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Code generation settings.
    #[serde(default)]
    pub compiler: CodegenOptions,
}

/// Error loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid configuration.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load `chibi.config.json` from `dir`.
///
/// A missing file is not an error and yields the default configuration.
pub fn load_config(dir: &Path) -> Result<ChibiConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(ChibiConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}

/// Like [`load_config`], but logs a warning and falls back to the defaults
/// when the file cannot be read or parsed.
pub fn load_config_or_default(dir: &Path) -> ChibiConfig {
    load_config(dir).unwrap_or_else(|error| {
        tracing::warn!(%error, "using default configuration");
        ChibiConfig::default()
    })
}

/// JSON Schema for `chibi.config.json`.
pub const CHIBI_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Chibi Configuration",
  "description": "Configuration file for chibi - a tiny Vue-style template compiler",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "compiler": {
      "type": "object",
      "description": "Render function code generation",
      "properties": {
        "isBrowser": {
          "type": "boolean",
          "default": false,
          "description": "Emit `return function render(..)` so the host can evaluate the output as an expression"
        },
        "runtimeGlobalName": {
          "type": "string",
          "default": "ChibiVue",
          "description": "Global the render function preamble destructures runtime helpers from"
        },
        "sourceMap": {
          "type": "boolean",
          "default": false,
          "description": "Record generated-to-template position mappings"
        }
      },
      "additionalProperties": false
    }
  },
  "additionalProperties": false
}"#;

/// Write the JSON Schema to `node_modules/.chibi/chibi.config.schema.json`
/// under `dir`, returning the written path.
pub fn write_schema(dir: &Path) -> Result<PathBuf, ConfigError> {
    let schema_dir = dir.join("node_modules/.chibi");
    let schema_path = schema_dir.join("chibi.config.schema.json");
    std::fs::create_dir_all(&schema_dir)
        .and_then(|()| std::fs::write(&schema_path, CHIBI_CONFIG_SCHEMA))
        .map_err(|source| ConfigError::Io {
            path: schema_path.clone(),
            source,
        })?;
    Ok(schema_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config, ChibiConfig::default());
        assert_eq!(config.compiler.runtime_global_name, "ChibiVue");
    }

    #[test]
    fn test_load_compiler_options() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{
  "$schema": "./node_modules/.chibi/chibi.config.schema.json",
  "compiler": { "isBrowser": true, "runtimeGlobalName": "Vue" }
}"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(
            config.schema.as_deref(),
            Some("./node_modules/.chibi/chibi.config.schema.json")
        );
        assert!(config.compiler.is_browser);
        assert_eq!(config.compiler.runtime_global_name, "Vue");
        assert!(!config.compiler.source_map);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{ compiler: }").unwrap();

        let error = load_config(dir.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
        assert!(error.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_fallback_on_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "compiler": { "isBrowser": "yes" } }"#,
        )
        .unwrap();
        assert_eq!(load_config_or_default(dir.path()), ChibiConfig::default());
    }

    #[test]
    fn test_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(CHIBI_CONFIG_SCHEMA).unwrap();
        let compiler = &schema["properties"]["compiler"]["properties"];
        assert!(compiler.get("isBrowser").is_some());
        assert!(compiler.get("runtimeGlobalName").is_some());
        assert!(compiler.get("sourceMap").is_some());
    }

    #[test]
    fn test_write_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), CHIBI_CONFIG_SCHEMA);
    }
}
