use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use serde::{Deserialize, Serialize};
use viewer_engine::StoreSettings;

use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "viewer_app",
    version,
    about = "Load a simulation output and browse its visualisations"
)]
pub struct Cli {
    /// RON settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Directory holding the stored output between sessions.
    #[arg(long)]
    pub storage_dir: Option<PathBuf>,
    /// Output JSON file to upload after start-up.
    #[arg(long)]
    pub upload: Option<PathBuf>,
    /// Location to open after start-up, e.g. /visualisations/roles.
    #[arg(long)]
    pub path: Option<String>,
    /// Forget the stored output before doing anything else.
    #[arg(long)]
    pub reset: bool,
    /// Keep the stored output in memory for this session only.
    #[arg(long)]
    pub ephemeral: bool,
    /// Render once and exit instead of reading commands from stdin.
    #[arg(long)]
    pub once: bool,
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub storage_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./viewer_state"),
            log_destination: LogDestination::File,
            log_file: PathBuf::from("./viewer.log"),
        }
    }
}

impl ViewerSettings {
    /// Defaults when no file is given; a given file must exist and parse.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        ron::from_str(&text).with_context(|| format!("parsing settings in {}", path.display()))
    }

    /// Command-line flags win over the settings file.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.storage_dir {
            self.storage_dir = dir.clone();
        }
        if let Some(destination) = cli.log {
            self.log_destination = destination;
        }
        if let Some(file) = &cli.log_file {
            self.log_file = file.clone();
        }
        self
    }

    pub fn store_settings(&self) -> StoreSettings {
        let mut settings = StoreSettings::default_with_dir(&self.storage_dir);
        settings.stored_utc = Arc::new(|| Utc::now().to_rfc3339());
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_path_yields_defaults() {
        assert_eq!(ViewerSettings::load(None).unwrap(), ViewerSettings::default());
    }

    #[test]
    fn partial_ron_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("viewer.ron");
        fs::write(&path, "(storage_dir: \"/tmp/elsewhere\", log_destination: Both)").unwrap();

        let settings = ViewerSettings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.storage_dir, PathBuf::from("/tmp/elsewhere"));
        assert_eq!(settings.log_destination, LogDestination::Both);
        assert_eq!(settings.log_file, PathBuf::from("./viewer.log"));
    }

    #[test]
    fn unreadable_settings_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(ViewerSettings::load(Some(temp.path().join("absent.ron").as_path())).is_err());

        let path = temp.path().join("broken.ron");
        fs::write(&path, "(storage_dir: ").unwrap();
        assert!(ViewerSettings::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn cli_flags_override_file_values() {
        let cli = Cli::parse_from([
            "viewer_app",
            "--storage-dir",
            "/data/viewer",
            "--log",
            "off",
        ]);
        let settings = ViewerSettings::default().apply_cli(&cli);
        assert_eq!(settings.storage_dir, PathBuf::from("/data/viewer"));
        assert_eq!(settings.log_destination, LogDestination::Off);
    }

    #[test]
    fn store_settings_point_into_storage_dir() {
        let settings = ViewerSettings::default().store_settings();
        assert!(settings.record_path().starts_with("./viewer_state"));
        assert!(!(settings.stored_utc)().is_empty());
    }
}
