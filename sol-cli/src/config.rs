//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sol_analyzer::AnalyzerConfig;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Analysis service settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl CliConfig {
    /// Load configuration from file; a missing file yields the defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_owned(),
            None => match Self::default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(config)
    }

    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sol-ide").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.analyzer, AnalyzerConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[analyzer]\nmodel = \"test-model\"\nmax_tokens = 512").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.analyzer.model, "test-model");
        assert_eq!(config.analyzer.max_tokens, 512);
        assert_eq!(config.analyzer.api_key_env, "ANTHROPIC_API_KEY");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[analyzer]\nmax_tokens = \"many\"").unwrap();
        let err = CliConfig::load(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }
}
