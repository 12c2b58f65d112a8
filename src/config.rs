use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use typikon_bible::MemoryBible;
use typikon_computus::Calendar;
use typikon_records::MemoryStore;

/// Top-level typikon configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TypikonConfig {
    /// Data fixture paths.
    #[serde(default)]
    pub data: DataConfig,

    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Paths to the JSON fixtures backing the in-memory stores.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    pub commemorations: Option<PathBuf>,
    pub readings: Option<PathBuf>,
    pub supplemental: Option<PathBuf>,
    pub verses: Option<PathBuf>,
    pub composites: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Fixed-cycle reckoning: "gregorian" or "julian".
    #[serde(default = "default_kind")]
    pub kind: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
        }
    }
}

fn default_kind() -> String {
    "gregorian".to_string()
}

impl TypikonConfig {
    /// Loads the TOML config file, or the defaults when the default path
    /// does not exist.
    pub fn load(path: &Path, path_is_default: bool) -> Result<Self> {
        if path_is_default && !path.exists() {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Resolves the fixed-cycle reckoning, with the CLI flag overriding
    /// the config file.
    pub fn calendar(&self, julian_flag: bool) -> Result<Calendar> {
        if julian_flag {
            return Ok(Calendar::Julian);
        }
        match self.calendar.kind.as_str() {
            "gregorian" => Ok(Calendar::Gregorian),
            "julian" => Ok(Calendar::Julian),
            other => bail!("unknown calendar kind: {other} (expected gregorian or julian)"),
        }
    }
}

/// Builds the record store from the configured fixture files.
pub fn build_store(data: &DataConfig) -> Result<MemoryStore> {
    let mut store = MemoryStore::new();
    if let Some(path) = &data.commemorations {
        let json = read(path)?;
        let count = store
            .load_commemorations_json(&json)
            .with_context(|| format!("bad commemoration data: {}", path.display()))?;
        info!(count, path = %path.display(), "commemorations loaded");
    }
    if let Some(path) = &data.readings {
        let json = read(path)?;
        let count = store
            .load_readings_json(&json)
            .with_context(|| format!("bad reading data: {}", path.display()))?;
        info!(count, path = %path.display(), "readings loaded");
    }
    if let Some(path) = &data.supplemental {
        let json = read(path)?;
        let count = store
            .load_supplemental_json(&json)
            .with_context(|| format!("bad supplemental data: {}", path.display()))?;
        info!(count, path = %path.display(), "supplemental commemorations loaded");
    }
    Ok(store)
}

/// Builds the verse store from the configured fixture files.
pub fn build_bible(data: &DataConfig) -> Result<MemoryBible> {
    let mut bible = MemoryBible::new();
    if let Some(path) = &data.verses {
        let json = read(path)?;
        let count = bible
            .load_verses_json(&json)
            .with_context(|| format!("bad verse data: {}", path.display()))?;
        info!(count, path = %path.display(), "verses loaded");
    }
    if let Some(path) = &data.composites {
        let json = read(path)?;
        let count = bible
            .load_composites_json(&json)
            .with_context(|| format!("bad composite data: {}", path.display()))?;
        info!(count, path = %path.display(), "composite passages loaded");
    }
    Ok(bible)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read data file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config: TypikonConfig = toml::from_str("").unwrap();
        assert_eq!(config.calendar.kind, "gregorian");
        assert!(config.data.commemorations.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config: TypikonConfig = toml::from_str(
            r#"
            [data]
            commemorations = "data/commemorations.json"
            readings = "data/readings.json"
            supplemental = "data/lives.json"
            verses = "data/verses.json"
            composites = "data/composites.json"

            [calendar]
            kind = "julian"
            "#,
        )
        .unwrap();
        assert_eq!(config.calendar.kind, "julian");
        assert_eq!(
            config.data.readings.as_deref(),
            Some(Path::new("data/readings.json"))
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<TypikonConfig, _> = toml::from_str("[calendar]\ntongue = \"el\"");
        assert!(result.is_err());
    }

    #[test]
    fn cli_flag_overrides_config_kind() {
        let config = TypikonConfig::default();
        assert_eq!(config.calendar(false).unwrap(), Calendar::Gregorian);
        assert_eq!(config.calendar(true).unwrap(), Calendar::Julian);

        let config: TypikonConfig = toml::from_str("[calendar]\nkind = \"julian\"").unwrap();
        assert_eq!(config.calendar(false).unwrap(), Calendar::Julian);

        let config: TypikonConfig = toml::from_str("[calendar]\nkind = \"metonic\"").unwrap();
        assert!(config.calendar(false).is_err());
    }
}
