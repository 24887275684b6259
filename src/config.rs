use browser::ViewportConfig;
use serde::Deserialize;
use smooth_scroll::ScrollConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of the TOML config file. Every table and key is optional.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub viewport: ViewportConfig,
    pub smooth_scroll: ScrollConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smooth_scroll::HistoryMode;
    use std::io::Write;

    #[test]
    fn loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[smooth_scroll]\noffset = 64.0\nhistory = \"push\"\n\n[viewport]\nheight = 600.0"
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.smooth_scroll.offset, 64.0);
        assert_eq!(config.smooth_scroll.duration, 800.0);
        assert_eq!(config.smooth_scroll.history, HistoryMode::Push);
        assert_eq!(config.viewport.height, 600.0);
        assert_eq!(config.viewport.width, 1024.0);
    }

    #[test]
    fn empty_file_means_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.smooth_scroll.offset, 80.0);
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            AppConfig::load(&missing),
            Err(ConfigError::Read { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[smooth_scroll]\noffset = \"far\"").unwrap();
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse config"));
    }
}
