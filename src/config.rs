use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logic::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Emoji dataset JSON; the bundled sample table is used when unset
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    /// Where exported favicons are written
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub vim_mode: bool,
    /// Command that receives the copied emoji on stdin (e.g. `pbcopy`, `wl-copy`)
    #[serde(default)]
    pub clipboard_command: Option<String>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            output_dir: None,
            page_size: DEFAULT_PAGE_SIZE,
            vim_mode: false,
            clipboard_command: None,
        }
    }
}

impl Config {
    /// Parse YAML config text
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(text).context("Invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse the config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("In config file {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be greater than zero");
        }
        Ok(())
    }

    /// Output directory, falling back to the user's download directory and
    /// then the current directory
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `<config_dir>/emojifav/config.yaml`
/// and then `./config.yaml` are tried; finding neither is fine and means
/// defaults apply.
pub fn find_config_path(cli_path: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(Some(path.to_path_buf()));
        }
        anyhow::bail!("Config file not found at specified path: {}", path.display());
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("emojifav").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from_yaml("vim_mode: true\n").unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_yaml(
            "dataset_path: /data/emoji.json\n\
             output_dir: /tmp/icons\n\
             page_size: 12\n\
             clipboard_command: wl-copy\n",
        )
        .unwrap();
        assert_eq!(config.dataset_path, Some(PathBuf::from("/data/emoji.json")));
        assert_eq!(config.resolved_output_dir(), PathBuf::from("/tmp/icons"));
        assert_eq!(config.page_size, 12);
        assert_eq!(config.clipboard_command.as_deref(), Some("wl-copy"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(Config::from_yaml("page_size: 0\n").is_err());
    }

    #[test]
    fn test_bad_yaml_rejected() {
        assert!(Config::from_yaml("page_size: [1, 2").is_err());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.yaml");
        assert!(find_config_path(Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_path_found() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let found = find_config_path(Some(file.path())).unwrap();
        assert_eq!(found.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "page_size: 8\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().page_size, 8);
    }
}
