use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::size::units::UnitBase;

/// Label used for packages whose derived name is empty.
pub const DEFAULT_FALLBACK_PACKAGE: &str = "Unknown";

/// Global configuration loaded from `~/.config/dlparse/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Unit convention for byte sizes: "binary" (1 KB = 1024 B, default) or "decimal".
    #[serde(default)]
    pub unit_base: UnitBase,
    /// Package label used when a name reduces to nothing.
    #[serde(default = "default_fallback_package")]
    pub fallback_package: String,
    /// Word-for-word translations applied before number and duration parsing
    /// (e.g. `stunden = "hours"`). Keys are matched lower-cased.
    #[serde(default)]
    pub glossary: BTreeMap<String, String>,
}

fn default_fallback_package() -> String {
    DEFAULT_FALLBACK_PACKAGE.to_string()
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            unit_base: UnitBase::default(),
            fallback_package: default_fallback_package(),
            glossary: BTreeMap::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlparse")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ParseConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ParseConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<ParseConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ParseConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!(glossary_words = cfg.glossary.len(), "loaded config");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = ParseConfig::default();
        assert_eq!(cfg.unit_base, UnitBase::Binary);
        assert_eq!(cfg.fallback_package, "Unknown");
        assert!(cfg.glossary.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ParseConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ParseConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.unit_base, cfg.unit_base);
        assert_eq!(parsed.fallback_package, cfg.fallback_package);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: ParseConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.unit_base, UnitBase::Binary);
        assert_eq!(cfg.fallback_package, "Unknown");
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            unit_base = "decimal"
            fallback_package = "Misc"

            [glossary]
            stunden = "hours"
            heute = "today"
        "#;
        let cfg: ParseConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.unit_base, UnitBase::Decimal);
        assert_eq!(cfg.fallback_package, "Misc");
        assert_eq!(cfg.glossary.get("stunden").map(String::as_str), Some("hours"));
        assert_eq!(cfg.glossary.len(), 2);
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"unit_base = \"decimal\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.unit_base, UnitBase::Decimal);
    }

    #[test]
    fn load_from_rejects_bad_unit_base() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"unit_base = \"octal\"\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
