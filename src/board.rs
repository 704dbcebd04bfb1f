//! Battle board module.
//!
//! The board is the state a front end renders: two sides with two creature
//! slots each, the slot currently selected on each side, and the one move
//! every move widget edits. Side A's selected creature attacks side B's
//! selected creature.

use crate::calculator::StatCalculator;
use crate::catalog::SpeciesCatalog;
use crate::config::{BoardConfig, MOVE_SLOTS_PER_SIDE};
use crate::creature::CreatureConfiguration;
use crate::damage::{DamageEstimate, DamageEstimator};
use crate::error::CalcError;
use crate::moves::SharedMove;
use crate::numeric::Estimate;
use crate::resolved::ResolvedStats;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The attacking team.
    A,
    /// The defending team.
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Left,
    Right,
}

#[derive(Debug)]
struct Team {
    left: CreatureConfiguration,
    right: CreatureConfiguration,
    selected: Slot,
}

impl Team {
    fn slot(&self, slot: Slot) -> &CreatureConfiguration {
        match slot {
            Slot::Left => &self.left,
            Slot::Right => &self.right,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut CreatureConfiguration {
        match slot {
            Slot::Left => &mut self.left,
            Slot::Right => &mut self.right,
        }
    }
}

/// The line shown under the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    pub attacker: String,
    pub defender: String,
    pub damage: Estimate,
    pub health_percent: Estimate,
    pub hits_to_ko: Estimate,
}

impl DamageReport {
    pub fn new(attacker: &str, defender: &str, estimate: DamageEstimate) -> Self {
        Self {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            damage: estimate.damage,
            health_percent: estimate.health_percent,
            hits_to_ko: estimate.hits_to_ko,
        }
    }
}

impl fmt::Display for DamageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} will do approx. {} Hit Points to {} ({:.1}%) - {}HKO",
            self.attacker, self.damage, self.defender, self.health_percent, self.hits_to_ko
        )
    }
}

/// Two teams of two, one shared move.
///
/// # Examples
///
/// ```rust
/// use monstat::{Board, BoardConfig, MoveCategory, Side, Slot, SpeciesCatalog};
///
/// let catalog = SpeciesCatalog::bundled().unwrap();
/// let mut board = Board::new(&catalog, &BoardConfig::default());
///
/// assert_eq!(
///     board.report().to_string(),
///     "Charmander will do approx. 18 Hit Points to Squirtle (40.9%) - 3HKO"
/// );
///
/// // Every move widget edits the same move.
/// board.move_slot(Side::B, 3).unwrap().set_category(MoveCategory::Special);
/// assert_eq!(board.move_slot(Side::A, 0).unwrap().get().category, MoveCategory::Special);
/// assert!(board.move_slot(Side::A, 4).is_none());
///
/// board.select(Side::B, Slot::Left);
/// assert_eq!(board.report().defender, "Pikachu");
/// ```
#[derive(Debug)]
pub struct Board {
    side_a: Team,
    side_b: Team,
    shared_move: SharedMove,
    icon_base: String,
}

impl Board {
    /// Lays out a board, resolving every slot's default species.
    ///
    /// A default that is missing from the catalog leaves its slot
    /// unresolved; estimates involving it are placeholders.
    pub fn new(catalog: &SpeciesCatalog, config: &BoardConfig) -> Self {
        let team = |side: Side| {
            let side_config = config.side(side);
            let resolve_slot = |slot: Slot| {
                let name = side_config.name(slot);
                CreatureConfiguration::resolve(name, catalog).unwrap_or_else(|err| {
                    warn!("{side:?} {slot:?} left unresolved: {err}");
                    CreatureConfiguration::unresolved(name)
                })
            };
            Team {
                left: resolve_slot(Slot::Left),
                right: resolve_slot(Slot::Right),
                selected: side_config.selected,
            }
        };

        Self {
            side_a: team(Side::A),
            side_b: team(Side::B),
            shared_move: SharedMove::default(),
            icon_base: config.icon_base.clone(),
        }
    }

    fn team(&self, side: Side) -> &Team {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::A => &mut self.side_a,
            Side::B => &mut self.side_b,
        }
    }

    pub fn slot(&self, side: Side, slot: Slot) -> &CreatureConfiguration {
        self.team(side).slot(slot)
    }

    pub fn slot_mut(&mut self, side: Side, slot: Slot) -> &mut CreatureConfiguration {
        self.team_mut(side).slot_mut(slot)
    }

    /// Changes a slot's species. On error the slot is unchanged.
    pub fn set_species(
        &mut self,
        side: Side,
        slot: Slot,
        name: &str,
        catalog: &SpeciesCatalog,
    ) -> Result<(), CalcError> {
        self.slot_mut(side, slot).set_name(name, catalog)
    }

    /// Makes `slot` the active creature of `side`.
    pub fn select(&mut self, side: Side, slot: Slot) {
        debug!("side {side:?} selects {slot:?}");
        self.team_mut(side).selected = slot;
    }

    pub fn selected(&self, side: Side) -> Slot {
        self.team(side).selected
    }

    /// The creature shown in `side`'s sidebar.
    pub fn active(&self, side: Side) -> &CreatureConfiguration {
        let team = self.team(side);
        team.slot(team.selected)
    }

    pub fn attacker(&self) -> &CreatureConfiguration {
        self.active(Side::A)
    }

    pub fn defender(&self) -> &CreatureConfiguration {
        self.active(Side::B)
    }

    /// The handle behind move widget `index` of `side`'s sidebar.
    ///
    /// Every index on both sides returns a handle to the same move.
    /// Returns `None` if `index` is not below `MOVE_SLOTS_PER_SIDE`.
    pub fn move_slot(&self, side: Side, index: usize) -> Option<SharedMove> {
        if index >= MOVE_SLOTS_PER_SIDE {
            debug!("side {side:?} has no move slot {index}");
            return None;
        }
        Some(self.shared_move.clone())
    }

    /// Handles for all move widgets of `side`.
    pub fn move_slots(&self, side: Side) -> Vec<SharedMove> {
        (0..MOVE_SLOTS_PER_SIDE)
            .filter_map(|index| self.move_slot(side, index))
            .collect()
    }

    /// Derived stats of the active creature on `side`, if resolved.
    pub fn stats(&self, side: Side) -> Option<ResolvedStats> {
        StatCalculator::derive(self.active(side))
    }

    /// The current damage estimate.
    pub fn estimate(&self) -> DamageEstimate {
        let move_config = self.shared_move.get();
        let attacker = self.stats(Side::A);
        let defender = self.stats(Side::B);
        DamageEstimator::estimate(&move_config, attacker.as_ref(), defender.as_ref())
    }

    pub fn report(&self) -> DamageReport {
        DamageReport::new(self.attacker().name(), self.defender().name(), self.estimate())
    }

    /// Icon location of a slot's species, if resolved.
    pub fn icon_path(&self, side: Side, slot: Slot) -> Option<String> {
        self.slot(side, slot)
            .species()
            .map(|species| species.icon_path(&self.icon_base))
    }
}
