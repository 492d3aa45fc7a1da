//! Generation options
//!
//! Options can be built in code, deserialized with serde, or read from an
//! rc-style config file:
//!
//! ```text
//! # floorplanrc
//! OPTIONS=max_rooms:15,min_rooms:7
//! OPTIONS=max_attempts=500
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FloorplanError, OptionsError};
use crate::generation::MIN_FEASIBLE_ROOMS;
use crate::grid::GRID_LEN;

/// Knobs for [`generate_floorplan`](crate::generate_floorplan)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Cap on total rooms, start and secret room included
    pub max_rooms: usize,
    /// Fewest rooms an accepted floor may have
    pub min_rooms: usize,
    /// Generation attempts before giving up
    pub max_attempts: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_rooms: 15,
            min_rooms: 7,
            max_attempts: 10_000,
        }
    }
}

impl GenerateOptions {
    /// Check the options can ever produce a floor
    pub fn validate(&self) -> Result<(), FloorplanError> {
        if self.min_rooms == 0 {
            return Err(FloorplanError::ZeroMinRooms);
        }
        if self.min_rooms > self.max_rooms {
            return Err(FloorplanError::RoomBoundsInverted {
                min_rooms: self.min_rooms,
                max_rooms: self.max_rooms,
            });
        }
        if self.max_rooms < MIN_FEASIBLE_ROOMS {
            return Err(FloorplanError::MaxRoomsTooSmall {
                max_rooms: self.max_rooms,
                minimum: MIN_FEASIBLE_ROOMS,
            });
        }
        if self.max_rooms > GRID_LEN {
            return Err(FloorplanError::MaxRoomsTooLarge {
                max_rooms: self.max_rooms,
                cells: GRID_LEN,
            });
        }
        if self.max_attempts == 0 {
            return Err(FloorplanError::ZeroAttempts);
        }
        Ok(())
    }

    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::Io(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string, starting from the defaults
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();
        options.apply_config(contents)?;
        Ok(options)
    }

    /// Apply `OPTIONS=` lines from a config string on top of these options
    pub fn apply_config(&mut self, contents: &str) -> Result<(), OptionsError> {
        for line in contents.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    self.parse_option(opt.trim())?;
                }
            }
        }

        Ok(())
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if opt.is_empty() {
            return Ok(());
        }
        let (key, value) = match opt.split_once(':').or_else(|| opt.split_once('=')) {
            Some((key, value)) => (key.trim(), Some(value.trim())),
            None => (opt, None),
        };
        self.set_option(key, value)
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionsError> {
        let slot = match name {
            "max_rooms" | "maxrooms" => &mut self.max_rooms,
            "min_rooms" | "minrooms" => &mut self.min_rooms,
            "max_attempts" | "attempts" => &mut self.max_attempts,
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        };
        let value = value.ok_or_else(|| OptionsError::MissingValue(name.to_string()))?;
        *slot = value
            .parse()
            .map_err(|_| OptionsError::InvalidValue(name.to_string(), value.to_string()))?;
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string()).map_err(|e| OptionsError::Io(e.to_string()))
    }

    /// Render as a config string `parse_config` reads back
    pub fn to_config_string(&self) -> String {
        format!(
            "# floorplan options\nOPTIONS=max_rooms:{},min_rooms:{},max_attempts:{}\n",
            self.max_rooms, self.min_rooms, self.max_attempts
        )
    }
}
