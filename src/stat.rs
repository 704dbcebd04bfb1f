//! Stat category module.
//!
//! Provides the `Stat` enum naming the six stat categories and `StatMap`,
//! a fixed-shape table holding one value per category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six stat categories.
///
/// Serialized with the same keys the species catalog uses
/// (`Hp`, `Atk`, `Def`, `SpAtk`, `SpDef`, `Speed`).
///
/// # Examples
///
/// ```rust
/// use monstat::Stat;
///
/// assert_eq!(Stat::ALL.len(), 6);
/// assert_eq!(Stat::SpAtk.key(), "SpAtk");
/// assert_eq!("Def".parse::<Stat>(), Ok(Stat::Def));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    SpAtk,
    SpDef,
    Speed,
}

impl Stat {
    /// All six categories, in display order.
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Speed,
    ];

    /// The catalog key for this category.
    pub fn key(self) -> &'static str {
        match self {
            Stat::Hp => "Hp",
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::SpAtk => "SpAtk",
            Stat::SpDef => "SpDef",
            Stat::Speed => "Speed",
        }
    }
}

impl std::str::FromStr for Stat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .iter()
            .copied()
            .find(|stat| stat.key() == s)
            .ok_or(())
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// A table holding exactly one value per stat category.
///
/// Every category is always present, so lookups cannot fail.
///
/// # Examples
///
/// ```rust
/// use monstat::{Stat, StatMap};
///
/// let mut ivs = StatMap::splat(31u32);
/// ivs.set(Stat::Speed, 0);
///
/// assert_eq!(*ivs.get(Stat::Atk), 31);
/// assert_eq!(*ivs.get(Stat::Speed), 0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatMap<T> {
    pub hp: T,
    pub atk: T,
    pub def: T,
    pub sp_atk: T,
    pub sp_def: T,
    pub speed: T,
}

impl<T> StatMap<T> {
    /// Builds a table by evaluating `f` for every category.
    pub fn from_fn(mut f: impl FnMut(Stat) -> T) -> Self {
        Self {
            hp: f(Stat::Hp),
            atk: f(Stat::Atk),
            def: f(Stat::Def),
            sp_atk: f(Stat::SpAtk),
            sp_def: f(Stat::SpDef),
            speed: f(Stat::Speed),
        }
    }

    /// Fallible version of [`StatMap::from_fn`]; stops at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(Stat) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            hp: f(Stat::Hp)?,
            atk: f(Stat::Atk)?,
            def: f(Stat::Def)?,
            sp_atk: f(Stat::SpAtk)?,
            sp_def: f(Stat::SpDef)?,
            speed: f(Stat::Speed)?,
        })
    }

    pub fn get(&self, stat: Stat) -> &T {
        match stat {
            Stat::Hp => &self.hp,
            Stat::Atk => &self.atk,
            Stat::Def => &self.def,
            Stat::SpAtk => &self.sp_atk,
            Stat::SpDef => &self.sp_def,
            Stat::Speed => &self.speed,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut T {
        match stat {
            Stat::Hp => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.sp_atk,
            Stat::SpDef => &mut self.sp_def,
            Stat::Speed => &mut self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: T) {
        *self.get_mut(stat) = value;
    }

    /// Iterates over `(category, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, &T)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Maps every value, keeping the category layout.
    pub fn map<U>(&self, mut f: impl FnMut(Stat, &T) -> U) -> StatMap<U> {
        StatMap::from_fn(|stat| f(stat, self.get(stat)))
    }
}

impl<T: Clone> StatMap<T> {
    /// A table with the same value in every category.
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}
