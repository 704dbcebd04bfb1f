//! Engine constants and board configuration.
//!
//! The constants fix the level and the input ranges every calculation
//! assumes. `BoardConfig` describes how a fresh board is laid out and can
//! be loaded from JSON.

use crate::board::{Side, Slot};
use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// The level every stat is derived at.
pub const LEVEL: u32 = 50;

/// Highest base stat a catalog record may carry.
pub const MAX_BASE_STAT: u32 = 255;

/// Highest individual value.
pub const MAX_IV: u32 = 31;

/// Highest effort value for a single stat.
pub const MAX_EV: u32 = 252;

/// Granularity of the effort value slider.
pub const EV_STEP: u32 = 4;

/// Individual value given to every stat when a species is resolved.
pub const DEFAULT_IV: u32 = MAX_IV;

/// Effort value given to every stat when a species is resolved.
pub const DEFAULT_EV: u32 = 0;

pub const DEFAULT_MOVE_POWER: u32 = 50;

/// Move widgets shown in each sidebar. They all edit the same move.
pub const MOVE_SLOTS_PER_SIDE: usize = 4;

pub const DEFAULT_ICON_BASE: &str = "PokemonIcons/Big/";

/// Initial species and selection for one side of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideConfig {
    pub left: String,
    pub right: String,
    pub selected: Slot,
}

impl SideConfig {
    pub fn name(&self, slot: Slot) -> &str {
        match slot {
            Slot::Left => &self.left,
            Slot::Right => &self.right,
        }
    }
}

/// Layout of a freshly created board.
///
/// Missing keys fall back to the defaults, so a partial JSON document
/// only overrides what it names.
///
/// # Examples
///
/// ```rust
/// use monstat::{BoardConfig, Side, Slot};
///
/// let config = BoardConfig::from_json_str(r#"{ "sideB": { "left": "Eevee", "right": "Snorlax", "selected": "Left" } }"#).unwrap();
/// assert_eq!(config.side(Side::A).name(Slot::Left), "Charmander");
/// assert_eq!(config.side(Side::B).name(Slot::Right), "Snorlax");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub side_a: SideConfig,
    pub side_b: SideConfig,
    /// Prefix joined with a species' picture id to locate its icon.
    pub icon_base: String,
}

impl BoardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, CalcError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn side(&self, side: Side) -> &SideConfig {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            side_a: SideConfig {
                left: "Charmander".to_string(),
                right: "Bulbasaur".to_string(),
                selected: Slot::Left,
            },
            side_b: SideConfig {
                left: "Pikachu".to_string(),
                right: "Squirtle".to_string(),
                selected: Slot::Right,
            },
            icon_base: DEFAULT_ICON_BASE.to_string(),
        }
    }
}
