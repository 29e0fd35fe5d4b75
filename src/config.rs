use crate::error::{PgnError, Result};
use crate::export::{BodyStyle, PgnOptions, RatingTags};
use crate::extractor::SheetLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional settings file. Command line flags take precedence.
///
/// ```json
/// {
///   "rating_tags": "elo",
///   "body": "placeholder",
///   "layout": { "columns": { "result": "Puan" } }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub rating_tags: Option<RatingTags>,
    pub body: Option<BodyStyle>,
    pub layout: SheetLayout,
}

impl Config {
    /// Load `explicit` if given (it must exist), else the default config
    /// file if present, else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(PgnError::Config(format!("file not found: {}", path.display())));
            }
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Ok(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        tracing::debug!("loading config from {}", path.display());
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PgnError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PgnError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("tournament-pgn").join("config.json"))
    }

    /// Emitter options: flag value, then config value, then default.
    pub fn pgn_options(
        &self,
        rating_tags: Option<RatingTags>,
        body: Option<BodyStyle>,
    ) -> PgnOptions {
        PgnOptions {
            rating_tags: rating_tags.or(self.rating_tags).unwrap_or_default(),
            body: body.or(self.body).unwrap_or_default(),
        }
    }
}
