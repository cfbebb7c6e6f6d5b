use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Runtime configuration, read from a JSON file (default `fleetview.json` in
/// the working directory). The file is optional; every field has a default.
///
/// ```json
/// {
///   "workbook": "Cleaned_Vehicle_Deployment.xlsx",
///   "sheet": "Sheet1",
///   "always_show_unfiltered": true
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the source workbook.
    pub workbook: PathBuf,
    /// Named sheet holding the deployment table.
    pub sheet: String,
    /// Display-mode fork: `true` shows the full dataset when no filter is
    /// set; `false` shows a prompt until the user supplies one.
    pub always_show_unfiltered: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workbook: PathBuf::from("Cleaned_Vehicle_Deployment.xlsx"),
            sheet: "Sheet1".to_string(),
            always_show_unfiltered: true,
        }
    }
}

impl Config {
    /// Read the config file, falling back to defaults when it does not
    /// exist. A file that exists but fails to parse is an error.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_production_workbook() {
        let config = Config::default();
        assert_eq!(config.workbook, PathBuf::from("Cleaned_Vehicle_Deployment.xlsx"));
        assert_eq!(config.sheet, "Sheet1");
        assert!(config.always_show_unfiltered);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("no/such/fleetview.json")).unwrap();
        assert_eq!(config.sheet, "Sheet1");
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleetview.json");
        std::fs::write(&path, r#"{ "always_show_unfiltered": false }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.always_show_unfiltered);
        assert_eq!(config.sheet, "Sheet1");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleetview.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
