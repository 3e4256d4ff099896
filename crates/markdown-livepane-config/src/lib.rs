use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Visual style for one semantic tag. Colours are `#rrggbb` strings or
/// terminal colour names; the host decides how to paint them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    pub bold: bool,
    pub italic: bool,
}

impl TagStyle {
    fn fg(colour: &str) -> Self {
        Self {
            fg: Some(colour.to_string()),
            ..Self::default()
        }
    }
}

const TEXT_COLOUR: &str = "#a9b7c6";
const HEADING_COLOUR: &str = "#61afef";
const CODE_BACKGROUND: &str = "#45494c";

/// One style per render tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub plain: TagStyle,
    pub heading1: TagStyle,
    pub heading2: TagStyle,
    pub heading3: TagStyle,
    pub bold: TagStyle,
    pub italic: TagStyle,
    pub code: TagStyle,
}

impl Default for Palette {
    fn default() -> Self {
        let heading = TagStyle {
            bold: true,
            ..TagStyle::fg(HEADING_COLOUR)
        };
        Self {
            plain: TagStyle::fg(TEXT_COLOUR),
            heading1: heading.clone(),
            heading2: heading.clone(),
            heading3: heading,
            bold: TagStyle {
                bold: true,
                ..TagStyle::fg(TEXT_COLOUR)
            },
            italic: TagStyle {
                italic: true,
                ..TagStyle::fg(TEXT_COLOUR)
            },
            code: TagStyle {
                bg: Some(CODE_BACKGROUND.to_string()),
                ..TagStyle::fg(TEXT_COLOUR)
            },
        }
    }
}

impl Palette {
    /// Look a style up by tag name (`"plain"`, `"heading1"`, ..., `"code"`)
    pub fn get(&self, tag: &str) -> Option<&TagStyle> {
        match tag {
            "plain" => Some(&self.plain),
            "heading1" => Some(&self.heading1),
            "heading2" => Some(&self.heading2),
            "heading3" => Some(&self.heading3),
            "bold" => Some(&self.bold),
            "italic" => Some(&self.italic),
            "code" => Some(&self.code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: Palette,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-livepane");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
