//! Tree settings: built-in defaults, optional TOML file, then CLI flags.
//!
//! ```toml
//! height = 12
//! source = "tree.qs"
//! backend = "titan"
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{BackendKind, TreeCli};

pub const DEFAULT_HEIGHT: usize = 12;
pub const DEFAULT_SOURCE: &str = "tree.qs";

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.quantum-tree/config.toml
    dirs_next::home_dir().map(|h| h.join(".quantum-tree").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub height: Option<usize>,
    pub source: Option<PathBuf>,
    pub backend: Option<BackendKind>,
}

impl FileConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        toml::from_str(txt).context("Parse tree config TOML")
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("Read config {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("in {}", path.display()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    pub height: usize,
    pub source: PathBuf,
    pub backend: BackendKind,
    pub color: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            source: PathBuf::from(DEFAULT_SOURCE),
            backend: BackendKind::Titan,
            color: true,
        }
    }
}

impl TreeConfig {
    /// CLI flags win over the file, the file over built-in defaults.
    pub fn merge(file: FileConfig, cli: &TreeCli) -> Result<Self> {
        let base = Self::default();
        let cfg = Self {
            height: cli.height.or(file.height).unwrap_or(base.height),
            source: cli.source.clone().or(file.source).unwrap_or(base.source),
            backend: cli.backend.or(file.backend).unwrap_or(base.backend),
            color: !cli.no_color && std::env::var_os("NO_COLOR").is_none(),
        };
        if cfg.height == 0 {
            bail!("tree height must be a positive integer");
        }
        Ok(cfg)
    }

    /// Explicit `--config` must exist; the default location is optional.
    pub fn load(cli: &TreeCli) -> Result<Self> {
        let file = match resolve_config_path(&cli.config) {
            Some(p) if cli.config.is_some() || p.is_file() => FileConfig::from_toml_file(&p)?,
            _ => FileConfig::default(),
        };
        Self::merge(file, cli)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file_or_flags() {
        let cfg = TreeConfig::merge(FileConfig::default(), &TreeCli::default()).unwrap();
        assert_eq!(cfg.height, 12);
        assert_eq!(cfg.source, PathBuf::from("tree.qs"));
        assert_eq!(cfg.backend, BackendKind::Titan);
    }

    #[test]
    fn file_values_apply() {
        let file = FileConfig::from_toml_str("height = 5\nsource = \"x.qs\"\nbackend = \"aer\"\n").unwrap();
        let cfg = TreeConfig::merge(file, &TreeCli::default()).unwrap();
        assert_eq!(cfg.height, 5);
        assert_eq!(cfg.source, PathBuf::from("x.qs"));
        assert_eq!(cfg.backend, BackendKind::Aer);
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig::from_toml_str("height = 5").unwrap();
        let cli = TreeCli { height: Some(8), ..TreeCli::default() };
        assert_eq!(TreeConfig::merge(file, &cli).unwrap().height, 8);
    }

    #[test]
    fn zero_height_is_rejected() {
        let cli = TreeCli { height: Some(0), ..TreeCli::default() };
        assert!(TreeConfig::merge(FileConfig::default(), &cli).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml_str("chunk = 3").is_err());
    }
}
