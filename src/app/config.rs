use crate::app::error::Result;
use crate::core::grid::Grid;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "pixart.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    Brush,
    Eraser,
    ToggleGrid,
    Undo,
    Replay,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub default_width: u32,
    pub default_height: u32,
    pub max_dimension: u32,
    pub history_capacity: usize,
    pub replay_interval_ms: u64,
    pub cell_size: u32,
    pub caption: String,
    pub locale: String,
    pub shortcuts: HashMap<String, ShortcutAction>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_width: 16,
            default_height: 16,
            max_dimension: 128,
            history_capacity: 50,
            replay_interval_ms: 250,
            cell_size: 20,
            caption: "Made with PixArt".to_string(),
            locale: "en".to_string(),
            shortcuts: HashMap::new(),
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(text)?;
        Ok(config.sanitized())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Missing file → defaults; unreadable or malformed file → warning + defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.max_dimension = self.max_dimension.max(1);
        if Grid::validate_dimensions(self.default_width, self.default_height, self.max_dimension).is_err() {
            self.default_width = self.default_width.clamp(1, self.max_dimension);
            self.default_height = self.default_height.clamp(1, self.max_dimension);
        }
        self.history_capacity = self.history_capacity.max(1);
        self.cell_size = self.cell_size.max(1);
        self
    }
}
