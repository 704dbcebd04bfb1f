//! Derived stat results module.
//!
//! Contains `ResolvedStat`, one derived stat together with the inputs that
//! produced it, and `ResolvedStats`, the full six-row table shown for a
//! creature.

use crate::stat::{Stat, StatMap};
use serde::{Deserialize, Serialize};

/// A derived stat with its inputs.
///
/// `iv` and `ev` are the values actually used in the calculation.
/// `ev_fallback` is set when the effort value field held invalid text and
/// 0 was used in its place.
///
/// # Examples
///
/// ```rust
/// use monstat::{ResolvedStat, Stat};
///
/// let atk = ResolvedStat::new(Stat::Atk, 52, 31, 0, 72);
/// assert_eq!(atk.value, 72);
/// assert!(!atk.ev_fallback);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStat {
    pub stat: Stat,
    pub base: u32,
    pub iv: u32,
    pub ev: u32,
    /// The derived value.
    pub value: u32,
    pub ev_fallback: bool,
}

impl ResolvedStat {
    pub fn new(stat: Stat, base: u32, iv: u32, ev: u32, value: u32) -> Self {
        Self {
            stat,
            base,
            iv,
            ev,
            value,
            ev_fallback: false,
        }
    }

    /// Marks this stat as computed with a substituted effort value.
    pub fn with_ev_fallback(mut self) -> Self {
        self.ev_fallback = true;
        self
    }
}

/// All six derived stats of a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStats(StatMap<ResolvedStat>);

impl ResolvedStats {
    pub fn new(stats: StatMap<ResolvedStat>) -> Self {
        Self(stats)
    }

    pub fn get(&self, stat: Stat) -> &ResolvedStat {
        self.0.get(stat)
    }

    /// The derived value of `stat`.
    pub fn value(&self, stat: Stat) -> u32 {
        self.0.get(stat).value
    }

    /// Rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedStat> + '_ {
        self.0.iter().map(|(_, resolved)| resolved)
    }

    /// Just the derived values.
    pub fn values(&self) -> StatMap<u32> {
        self.0.map(|_, resolved| resolved.value)
    }
}
