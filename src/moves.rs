//! Move configuration module.
//!
//! A board has exactly one `MoveConfiguration`. Every move widget holds a
//! `SharedMove` handle to that same instance, so an edit made through any
//! handle is what every other handle and the damage estimate read next.

use crate::catalog::Type;
use crate::config::DEFAULT_MOVE_POWER;
use crate::numeric::NumericInput;
use crate::stat::Stat;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Which stat pair a move uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    #[default]
    Physical,
    Special,
}

impl MoveCategory {
    /// Reads a selector value. Anything other than `"Physical"` is special.
    pub fn from_selector(value: &str) -> Self {
        if value == "Physical" {
            MoveCategory::Physical
        } else {
            MoveCategory::Special
        }
    }

    /// The attacker's offensive stat for this category.
    pub fn attacking_stat(self) -> Stat {
        match self {
            MoveCategory::Physical => Stat::Atk,
            MoveCategory::Special => Stat::SpAtk,
        }
    }

    /// The defender's defensive stat for this category.
    pub fn defending_stat(self) -> Stat {
        match self {
            MoveCategory::Physical => Stat::Def,
            MoveCategory::Special => Stat::SpDef,
        }
    }
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The move being estimated.
///
/// `name` and `move_type` are collected but do not affect damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveConfiguration {
    pub name: String,
    pub power: NumericInput,
    pub move_type: Type,
    pub category: MoveCategory,
}

impl MoveConfiguration {
    /// Stores power field text. Negative values clamp to 0.
    pub fn set_power(&mut self, raw: &str) {
        self.power = NumericInput::parse_field("power", raw, None);
    }

    /// Power used for estimation; invalid text counts as 0.
    pub fn effective_power(&self) -> u32 {
        self.power.value_or_zero()
    }
}

impl Default for MoveConfiguration {
    fn default() -> Self {
        Self {
            name: String::new(),
            power: NumericInput::new(DEFAULT_MOVE_POWER),
            move_type: Type::Normal,
            category: MoveCategory::Physical,
        }
    }
}

/// A handle to the board's single move.
///
/// Cloning a `SharedMove` clones the handle, not the move.
///
/// # Examples
///
/// ```rust
/// use monstat::{MoveCategory, SharedMove};
///
/// let left_widget = SharedMove::default();
/// let right_widget = left_widget.clone();
///
/// right_widget.update(|m| m.category = MoveCategory::Special);
/// assert_eq!(left_widget.get().category, MoveCategory::Special);
/// assert!(left_widget.same_move(&right_widget));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedMove(Rc<RefCell<MoveConfiguration>>);

impl SharedMove {
    pub fn new(config: MoveConfiguration) -> Self {
        Self(Rc::new(RefCell::new(config)))
    }

    /// A snapshot of the current move.
    pub fn get(&self) -> MoveConfiguration {
        self.0.borrow().clone()
    }

    /// Edits the move in place.
    pub fn update<R>(&self, edit: impl FnOnce(&mut MoveConfiguration) -> R) -> R {
        edit(&mut self.0.borrow_mut())
    }

    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.update(|m| m.name = name);
    }

    pub fn set_power(&self, raw: &str) {
        self.update(|m| m.set_power(raw));
    }

    pub fn set_type(&self, move_type: Type) {
        self.update(|m| m.move_type = move_type);
    }

    pub fn set_category(&self, category: MoveCategory) {
        self.update(|m| m.category = category);
    }

    /// True if both handles point at the same move.
    pub fn same_move(&self, other: &SharedMove) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_defaults() {
        let m = MoveConfiguration::default();
        assert_eq!(m.name, "");
        assert_eq!(m.effective_power(), 50);
        assert_eq!(m.move_type, Type::Normal);
        assert_eq!(m.category, MoveCategory::Physical);
    }

    #[test]
    fn test_category_stat_pairs() {
        assert_eq!(MoveCategory::Physical.attacking_stat(), Stat::Atk);
        assert_eq!(MoveCategory::Physical.defending_stat(), Stat::Def);
        assert_eq!(MoveCategory::Special.attacking_stat(), Stat::SpAtk);
        assert_eq!(MoveCategory::Special.defending_stat(), Stat::SpDef);
    }

    #[test]
    fn test_non_physical_selector_is_special() {
        assert_eq!(MoveCategory::from_selector("Physical"), MoveCategory::Physical);
        assert_eq!(MoveCategory::from_selector("Special"), MoveCategory::Special);
        assert_eq!(MoveCategory::from_selector("Status"), MoveCategory::Special);
    }

    #[test]
    fn test_invalid_power_keeps_text_and_counts_as_zero() {
        let mut m = MoveConfiguration::default();
        m.set_power("");
        assert_eq!(m.power.raw(), "");
        assert_eq!(m.effective_power(), 0);

        m.set_power("-20");
        assert_eq!(m.effective_power(), 0);
        assert_eq!(m.power.raw(), "0");
    }

    #[test]
    fn test_last_writer_wins_across_handles() {
        let a = SharedMove::default();
        let b = a.clone();
        let c = b.clone();

        a.set_power("80");
        c.set_power("120");
        b.set_name("Tackle");
        a.set_type(Type::Fire);

        for handle in [&a, &b, &c] {
            let m = handle.get();
            assert_eq!(m.effective_power(), 120);
            assert_eq!(m.name, "Tackle");
            assert_eq!(m.move_type, Type::Fire);
        }
    }

    #[test]
    fn test_separate_moves_are_independent() {
        let a = SharedMove::default();
        let b = SharedMove::new(MoveConfiguration::default());
        a.set_power("90");

        assert!(!a.same_move(&b));
        assert_eq!(b.get().effective_power(), 50);
    }
}
