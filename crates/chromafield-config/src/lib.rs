//! Configuration for the chromafield palette viewer.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/chromafield/` on Linux). Every field is optional; a missing
//! file yields the defaults. Animation constants of the particle background
//! are deliberately not configurable.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the log file inside the log directory.
pub const LOG_FILE_NAME: &str = "chromafield.log";

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 240;

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target frame rate of the background animation.
    pub fps: u32,
    /// Fixed seed for the particle layout; random when unset.
    pub seed: Option<u32>,
    /// Show the palette overlay on startup.
    pub show_overlay: bool,
    /// Palette JSON file loaded on startup.
    pub palette: Option<PathBuf>,
    /// Directory exports are written to.
    pub export_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is unset (e.g. `warn`, `chromafield=debug`).
    pub log_level: String,
    /// Directory the log file is written to.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 60,
            seed: None,
            show_overlay: true,
            palette: None,
            export_dir: PathBuf::from("."),
            log_level: "warn".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Platform-specific project directories.
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "chromafield")
    }

    /// Default location of the configuration file.
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when the
    /// file or the config directory does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Time budget of one animation frame.
    pub fn frame_interval(&self) -> Duration {
        let fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        Duration::from_micros(1_000_000 / fps as u64)
    }

    /// Directory for the log file: the configured one, else the platform
    /// data directory, else the system temp directory.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf()))
            .unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.fps, 60);
        assert_eq!(config.seed, None);
        assert!(config.show_overlay);
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "fps = 30\nseed = 42\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.seed, Some(42));
        assert!(config.show_overlay);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "fps = \"fast\"").unwrap();

        match Config::load_from(&path) {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn full_file_sets_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
fps = 24
seed = 4294967295
show_overlay = false
palette = "palette.json"
export_dir = "exports"
log_level = "debug"
log_dir = "/tmp/logs"
"#,
        )
        .unwrap();

        let expected = Config {
            fps: 24,
            seed: Some(u32::MAX),
            show_overlay: false,
            palette: Some(PathBuf::from("palette.json")),
            export_dir: PathBuf::from("exports"),
            log_level: "debug".to_string(),
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        assert_eq!(Config::load_from(&path).unwrap(), expected);
    }

    #[test]
    fn seed_out_of_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "seed = 4294967296\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn frame_interval_is_clamped() {
        let mut config = Config::default();
        assert_eq!(config.frame_interval(), Duration::from_micros(16_666));
        config.fps = 0;
        assert_eq!(config.frame_interval(), Duration::from_secs(1));
        config.fps = 10_000;
        assert_eq!(config.frame_interval(), Duration::from_micros(4_166));
    }

    #[test]
    fn explicit_log_dir_wins() {
        let config = Config {
            log_dir: Some(PathBuf::from("/var/log/chromafield")),
            ..Config::default()
        };
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/chromafield"));
    }
}
