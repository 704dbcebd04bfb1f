//! Stat derivation module.
//!
//! `compute_stat` is the level 50 stat formula. `StatCalculator` applies it
//! to a creature configuration, substituting 0 for unusable field text so
//! a derived stat is always a number.

use crate::config::LEVEL;
use crate::creature::CreatureConfiguration;
use crate::resolved::{ResolvedStat, ResolvedStats};
use crate::stat::{Stat, StatMap};
use log::warn;

/// Derives a stat at level 50.
///
/// `floor(floor((2 * base + iv + floor(ev / 4)) * 50 / 100) + 5)`, with
/// every division truncating. Inputs are not clamped; callers keep `iv`
/// in `[0, 31]` and `ev` in `[0, 252]`. Out-of-range inputs saturate at
/// `u32::MAX` rather than overflow.
///
/// # Examples
///
/// ```rust
/// use monstat::compute_stat;
///
/// assert_eq!(compute_stat(0, 0, 0), 5);
/// assert_eq!(compute_stat(31, 0, 100), 120);
/// assert_eq!(compute_stat(31, 252, 100), 152);
/// ```
pub fn compute_stat(iv: u32, ev: u32, base: u32) -> u32 {
    let sum = 2 * u64::from(base) + u64::from(iv) + u64::from(ev / 4);
    let value = sum * u64::from(LEVEL) / 100 + 5;
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Derives the full stat table of a creature.
///
/// # Examples
///
/// ```rust
/// use monstat::{CreatureConfiguration, SpeciesCatalog, Stat, StatCalculator};
///
/// let catalog = SpeciesCatalog::bundled().unwrap();
/// let charmander = CreatureConfiguration::resolve("Charmander", &catalog).unwrap();
///
/// let stats = StatCalculator::derive(&charmander).unwrap();
/// assert_eq!(stats.value(Stat::Atk), 72);
///
/// let empty = CreatureConfiguration::unresolved("Charmander");
/// assert!(StatCalculator::derive(&empty).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StatCalculator;

impl StatCalculator {
    /// Derives one stat. Returns `None` for an unresolved slot.
    pub fn derive_stat(config: &CreatureConfiguration, stat: Stat) -> Option<ResolvedStat> {
        let base = config.species()?.base_stat(stat);
        let iv_input = config.iv(stat);
        let ev_input = config.ev(stat);

        let iv = iv_input.value().unwrap_or_else(|| {
            warn!(
                "{} {stat}: IV {:?} is not a number, using 0",
                config.name(),
                iv_input.raw()
            );
            0
        });

        let resolved = match ev_input.value() {
            Some(ev) => ResolvedStat::new(stat, base, iv, ev, compute_stat(iv, ev, base)),
            None => {
                warn!(
                    "{} {stat}: EV {:?} is not a number, retrying with 0",
                    config.name(),
                    ev_input.raw()
                );
                ResolvedStat::new(stat, base, iv, 0, compute_stat(iv, 0, base)).with_ev_fallback()
            }
        };
        Some(resolved)
    }

    /// Derives all six stats. Returns `None` for an unresolved slot.
    pub fn derive(config: &CreatureConfiguration) -> Option<ResolvedStats> {
        StatMap::try_from_fn(|stat| Self::derive_stat(config, stat).ok_or(()))
            .ok()
            .map(ResolvedStats::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpeciesCatalog;
    use proptest::prelude::*;

    #[test]
    fn test_formula_vectors() {
        assert_eq!(compute_stat(0, 0, 0), 5);
        assert_eq!(compute_stat(31, 0, 100), 120);
        assert_eq!(compute_stat(31, 252, 100), 152);
        assert_eq!(compute_stat(31, 0, 52), 72);
        assert_eq!(compute_stat(31, 0, 49), 69);
    }

    #[test]
    fn test_large_inputs_do_not_overflow() {
        assert_eq!(compute_stat(31, 0, 50_000_000), 50_000_020);
        assert_eq!(compute_stat(u32::MAX, u32::MAX, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_ev_contributes_in_steps_of_four() {
        assert_eq!(compute_stat(31, 3, 52), compute_stat(31, 0, 52));
        // 8 EVs add 2 to the sum, which is 1 point after halving.
        assert_eq!(compute_stat(31, 8, 52), compute_stat(31, 0, 52) + 1);
    }

    #[test]
    fn test_derive_default_charmander() {
        let catalog = SpeciesCatalog::bundled().unwrap();
        let charmander = CreatureConfiguration::resolve("Charmander", &catalog).unwrap();
        let stats = StatCalculator::derive(&charmander).unwrap();

        // Base 39/52/43/60/50/65 with 31 IVs and no EVs.
        let values: Vec<u32> = stats.iter().map(|row| row.value).collect();
        assert_eq!(values, vec![59, 72, 63, 80, 70, 85]);
    }

    #[test]
    fn test_invalid_ev_falls_back_to_zero() {
        let catalog = SpeciesCatalog::bundled().unwrap();
        let mut pikachu = CreatureConfiguration::resolve("Pikachu", &catalog).unwrap();
        pikachu.set_ev(Stat::Speed, "fast");

        let speed = StatCalculator::derive_stat(&pikachu, Stat::Speed).unwrap();
        assert_eq!(speed.value, compute_stat(31, 0, 90));
        assert_eq!(speed.ev, 0);
        assert!(speed.ev_fallback);
    }

    #[test]
    fn test_invalid_iv_counts_as_zero() {
        let catalog = SpeciesCatalog::bundled().unwrap();
        let mut pikachu = CreatureConfiguration::resolve("Pikachu", &catalog).unwrap();
        pikachu.set_iv(Stat::Atk, "");

        let atk = StatCalculator::derive_stat(&pikachu, Stat::Atk).unwrap();
        assert_eq!(atk.value, compute_stat(0, 0, 55));
        assert!(!atk.ev_fallback);
    }

    #[test]
    fn test_decimal_field_text_uses_integer_part() {
        let catalog = SpeciesCatalog::bundled().unwrap();
        let mut charmander = CreatureConfiguration::resolve("Charmander", &catalog).unwrap();
        charmander.set_iv(Stat::Atk, "30.5");
        charmander.set_ev(Stat::Atk, "100.0");

        let atk = StatCalculator::derive_stat(&charmander, Stat::Atk).unwrap();
        assert_eq!((atk.iv, atk.ev), (30, 100));
        assert_eq!(atk.value, compute_stat(30, 100, 52));
        assert_eq!(atk.value, 84);
        assert!(!atk.ev_fallback);
    }

    #[test]
    fn test_unresolved_slot_derives_nothing() {
        let slot = CreatureConfiguration::unresolved("Pikachu");
        assert!(StatCalculator::derive_stat(&slot, Stat::Hp).is_none());
    }

    proptest! {
        #[test]
        fn prop_monotonic_in_iv(iv in 0u32..31, ev in 0u32..=252, base in 0u32..=255) {
            prop_assert!(compute_stat(iv, ev, base) <= compute_stat(iv + 1, ev, base));
        }

        #[test]
        fn prop_monotonic_in_ev(iv in 0u32..=31, ev in 0u32..252, base in 0u32..=255) {
            prop_assert!(compute_stat(iv, ev, base) <= compute_stat(iv, ev + 1, base));
        }

        #[test]
        fn prop_monotonic_in_base(iv in 0u32..=31, ev in 0u32..=252, base in 0u32..255) {
            prop_assert!(compute_stat(iv, ev, base) <= compute_stat(iv, ev, base + 1));
        }
    }
}
