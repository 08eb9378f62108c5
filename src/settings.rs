use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::apple::ApplePlacement;
use crate::config::{
    APP_DIR_NAME, CELL_SIZE_PX, DEFAULT_CANVAS_HEIGHT_PX, DEFAULT_CANVAS_WIDTH_PX,
    DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
};
use crate::error::ConfigError;
use crate::game::Rules;
use crate::grid::Grid;
use crate::snake::TailRule;

const SETTINGS_FILE_NAME: &str = "settings.json";

/// User-tunable options. Every field is optional in the file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub tick_interval_ms: u64,
    pub tail_rule: TailRule,
    pub apple_placement: ApplePlacement,
    pub bell: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH_PX,
            canvas_height: DEFAULT_CANVAS_HEIGHT_PX,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            tail_rule: TailRule::default(),
            apple_placement: ApplePlacement::default(),
            bell: false,
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Overrides {
    pub canvas_width: Option<u32>,
    pub canvas_height: Option<u32>,
    pub tick_interval_ms: Option<u64>,
    pub strict_tail: bool,
    pub apple_avoids_snake: bool,
    pub bell: bool,
}

impl Settings {
    /// Applies `overrides` on top of these settings and validates the result.
    ///
    /// Flags only ever switch options on; a flag left off keeps the file value.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(width) = overrides.canvas_width {
            self.canvas_width = width;
        }
        if let Some(height) = overrides.canvas_height {
            self.canvas_height = height;
        }
        if let Some(tick_ms) = overrides.tick_interval_ms {
            self.tick_interval_ms = tick_ms;
        }
        if overrides.strict_tail {
            self.tail_rule = TailRule::Blocks;
        }
        if overrides.apple_avoids_snake {
            self.apple_placement = ApplePlacement::AvoidSnake;
        }
        self.bell |= overrides.bell;

        self.validate()?;
        Ok(self)
    }

    /// Checks every value derived from the raw settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid()?;
        self.tick_interval()?;
        Ok(())
    }

    /// Grid derived from the canvas size.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::from_canvas(self.canvas_width, self.canvas_height, CELL_SIZE_PX)
    }

    pub fn tick_interval(&self) -> Result<Duration, ConfigError> {
        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(ConfigError::TickTooShort {
                got_ms: self.tick_interval_ms,
                min_ms: MIN_TICK_INTERVAL_MS,
            });
        }

        Ok(Duration::from_millis(self.tick_interval_ms))
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        Rules {
            tail_rule: self.tail_rule,
            apple_placement: self.apple_placement,
        }
    }
}

/// Returns the platform-correct settings file path, if the platform has a
/// config directory.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    Some(base)
}

/// Loads settings from `path`.
///
/// A missing file yields the defaults. A file that exists but cannot be read
/// or parsed is an error, so a typo does not silently change the game.
pub fn load_settings_from_path(path: &Path) -> Result<Settings, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::ReadSettings {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseSettings {
        path: path.to_path_buf(),
        source,
    })
}
