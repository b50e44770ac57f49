//! Generator tunables
//!
//! Every knob of the room-addition generator lives in [`GeneratorConfig`].
//! Missing JSON fields fall back to the defaults below.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// Default map width
pub const DEFAULT_MAP_WIDTH: usize = 80;

/// Default map height
pub const DEFAULT_MAP_HEIGHT: usize = 50;

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub map_width: usize,
    pub map_height: usize,

    /// Width and height of cellular-automata cave rooms
    pub room_max_size: usize,
    /// Minimum number of connected floor cells a cave region must have
    pub room_min_size: usize,
    pub max_num_rooms: usize,

    pub square_room_min_size: usize,
    pub square_room_max_size: usize,

    pub cross_room_min_size: usize,
    pub cross_room_max_size: usize,

    /// Probability that the first room is a cavern
    pub cavern_chance: f64,
    /// Width and height of cavern rooms
    pub cavern_max_size: usize,

    /// Probability that a cave cell starts out as wall
    pub wall_probability: f64,
    /// Wall-neighbour threshold for cave smoothing
    pub neighbors: usize,

    pub square_room_chance: f64,
    pub cross_room_chance: f64,

    pub build_room_attempts: usize,
    pub place_rooms_attempts: usize,
    pub max_tunnel_length: usize,

    pub include_shortcuts: bool,
    pub shortcut_attempts: usize,
    pub shortcut_length: usize,
    pub min_path_finding_distance: usize,

    /// Open the anchor wall tile after carving each tunnel.
    ///
    /// When false the anchor stays wall so a door can be placed there later.
    pub open_doorways: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            room_max_size: 18,
            room_min_size: 16,
            max_num_rooms: 30,
            square_room_min_size: 6,
            square_room_max_size: 12,
            cross_room_min_size: 6,
            cross_room_max_size: 12,
            cavern_chance: 0.40,
            cavern_max_size: 35,
            wall_probability: 0.45,
            neighbors: 4,
            square_room_chance: 0.2,
            cross_room_chance: 0.15,
            build_room_attempts: 500,
            place_rooms_attempts: 20,
            max_tunnel_length: 12,
            include_shortcuts: true,
            shortcut_attempts: 500,
            shortcut_length: 5,
            min_path_finding_distance: 50,
            open_doorways: true,
        }
    }
}

fn check_probability(field: &'static str, p: f64) -> Result<(), GenError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GenError::invalid(field, format!("{p} is not a probability")))
    }
}

impl GeneratorConfig {
    /// Config with the default tunables on a `width × height` map
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            map_width: width,
            map_height: height,
            ..Self::default()
        }
    }

    /// Largest pattern the first room can produce
    pub fn first_room_extent(&self) -> usize {
        let square = self.square_room_max_size.saturating_sub(2);
        if self.cavern_chance > 0.0 {
            square.max(self.cavern_max_size)
        } else {
            square
        }
    }

    /// Extent of the smallest cellular room the generator can ask for
    fn smallest_cave_extent(&self) -> usize {
        if self.cavern_chance > 0.0 {
            self.room_max_size.min(self.cavern_max_size)
        } else {
            self.room_max_size
        }
    }

    /// Check that the tunables describe a generator that can run
    pub fn validate(&self) -> Result<(), GenError> {
        if self.map_width < 3 || self.map_height < 3 {
            return Err(GenError::invalid(
                "map_width",
                format!("map {}x{} is smaller than 3x3", self.map_width, self.map_height),
            ));
        }
        let extent = self.first_room_extent();
        if extent + 2 > self.map_width || extent + 2 > self.map_height {
            return Err(GenError::invalid(
                "cavern_max_size",
                format!(
                    "first room of up to {extent}x{extent} does not fit a {}x{} map",
                    self.map_width, self.map_height
                ),
            ));
        }
        if self.square_room_min_size < 3 {
            return Err(GenError::invalid(
                "square_room_min_size",
                "square rooms need at least 3 cells to leave an interior",
            ));
        }
        if self.square_room_min_size > self.square_room_max_size {
            return Err(GenError::invalid(
                "square_room_min_size",
                "minimum exceeds square_room_max_size",
            ));
        }
        if self.cross_room_min_size == 0
            || self.cross_room_min_size + 2 > self.cross_room_max_size
        {
            return Err(GenError::invalid(
                "cross_room_min_size",
                "cross rooms need cross_room_min_size + 2 <= cross_room_max_size",
            ));
        }
        if self.room_min_size == 0 {
            return Err(GenError::invalid("room_min_size", "must be at least 1"));
        }
        if self.room_max_size < 5 || (self.cavern_chance > 0.0 && self.cavern_max_size < 5) {
            return Err(GenError::invalid(
                "room_max_size",
                "cave extents below 5 leave no interior to fill",
            ));
        }
        let fillable = (self.smallest_cave_extent() - 4).pow(2);
        if self.room_min_size > fillable {
            return Err(GenError::invalid(
                "room_min_size",
                format!("caves can hold at most {fillable} floor cells"),
            ));
        }
        if self.wall_probability >= 1.0 {
            return Err(GenError::invalid(
                "wall_probability",
                "caves would never contain floor",
            ));
        }
        if self.max_tunnel_length == 0 {
            return Err(GenError::invalid("max_tunnel_length", "must be at least 1"));
        }
        check_probability("cavern_chance", self.cavern_chance)?;
        check_probability("wall_probability", self.wall_probability)?;
        check_probability("square_room_chance", self.square_room_chance)?;
        check_probability("cross_room_chance", self.cross_room_chance)?;
        if self.square_room_chance + self.cross_room_chance > 1.0 {
            return Err(GenError::invalid(
                "cross_room_chance",
                "square_room_chance + cross_room_chance exceeds 1",
            ));
        }
        Ok(())
    }

    /// Parse a JSON config; absent fields take their defaults
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> Result<Self, GenError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    #[cfg(feature = "std")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, GenError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GenError::ConfigNotFound {
                path: path.display().to_string(),
            },
            _ => GenError::Io(e),
        })?;
        Self::from_json_str(&json)
    }
}
