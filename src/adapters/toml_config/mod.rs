// TOML config adapter - Optional settings file

use std::path::Path;

use serde::Deserialize;

use crate::domain::errors::*;

/// Contents of a `--config` settings file
///
/// Every key is optional; missing keys fall through to environment
/// variables and built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub tools: ToolsSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// `[tools]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    pub ffmpeg: Option<String>,
    pub ffprobe: Option<String>,
}

/// `[logging]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl FileConfig {
    /// Load and parse a settings file
    pub fn load(file_path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            DomainError::Config(format!(
                "Failed to read config file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            DomainError::Config(msg) => {
                DomainError::Config(format!("{}: {}", file_path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        toml::from_str(content)
            .map_err(|e| DomainError::Config(format!("Failed to parse TOML config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::from_toml_str(
            r#"
            [tools]
            ffmpeg = "/opt/ffmpeg/bin/ffmpeg"
            ffprobe = "/opt/ffmpeg/bin/ffprobe"

            [logging]
            level = "debug"
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.tools.ffmpeg.as_deref(), Some("/opt/ffmpeg/bin/ffmpeg"));
        assert_eq!(config.tools.ffprobe.as_deref(), Some("/opt/ffmpeg/bin/ffprobe"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.json, Some(true));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(FileConfig::from_toml_str("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = FileConfig::from_toml_str("[tools]\nffplay = \"ffplay\"\n").unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tools]\nffmpeg = \"my-ffmpeg\"").unwrap();

        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.tools.ffmpeg.as_deref(), Some("my-ffmpeg"));
        assert_eq!(config.tools.ffprobe, None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = FileConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
