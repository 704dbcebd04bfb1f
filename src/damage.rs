//! Damage estimation module.
//!
//! Damage is computed in `f64` so that unavailable inputs and division by
//! zero follow floating point rules: a missing stat gives `NaN`, a zero
//! divisor gives an infinity, and both flow unchanged into the health
//! percentage and hits-to-KO figures.

use crate::moves::{MoveCategory, MoveConfiguration};
use crate::numeric::Estimate;
use crate::resolved::ResolvedStats;
use crate::stat::Stat;
use serde::{Deserialize, Serialize};

/// Estimates the damage of one hit.
///
/// `floor(floor(22 * power * (attacking / defending)) / 50)`, where the
/// stat ratio is real-valued.
///
/// # Examples
///
/// ```rust
/// use monstat::compute_damage;
///
/// assert_eq!(compute_damage(50, 100, 100).as_integer(), Some(22));
/// assert_eq!(compute_damage(50, 72, 69).as_integer(), Some(22));
/// assert!(!compute_damage(50, 100, 0).is_numeric());
/// ```
pub fn compute_damage(power: u32, attacking_stat: u32, defending_stat: u32) -> Estimate {
    let ratio = f64::from(attacking_stat) / f64::from(defending_stat);
    let scaled = (22.0 * f64::from(power) * ratio).floor();
    Estimate::new((scaled / 50.0).floor())
}

/// Like [`compute_damage`], but either stat may be unavailable, in which
/// case the estimate is [`Estimate::UNDEFINED`].
pub fn estimate_damage(
    power: u32,
    attacking_stat: Option<u32>,
    defending_stat: Option<u32>,
) -> Estimate {
    match (attacking_stat, defending_stat) {
        (Some(attacking), Some(defending)) => compute_damage(power, attacking, defending),
        _ => Estimate::UNDEFINED,
    }
}

/// Damage of one hit and what it means for the defender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageEstimate {
    pub damage: Estimate,
    /// Damage as a percentage of the defender's Health, one decimal place.
    pub health_percent: Estimate,
    /// Identical hits needed to take the defender's Health to zero.
    pub hits_to_ko: Estimate,
}

impl DamageEstimate {
    /// Relates `damage` to the defender's Health.
    ///
    /// Nothing is guarded: zero or non-numeric damage yields whatever the
    /// floating point division yields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monstat::{DamageEstimate, Estimate};
    ///
    /// let hit = DamageEstimate::new(Estimate::from(22), Some(45));
    /// assert_eq!(format!("{:.1}", hit.health_percent), "48.9");
    /// assert_eq!(hit.hits_to_ko.as_integer(), Some(3));
    ///
    /// let nothing = DamageEstimate::new(Estimate::UNDEFINED, Some(45));
    /// assert!(!nothing.health_percent.is_numeric());
    /// assert!(!nothing.hits_to_ko.is_numeric());
    /// ```
    pub fn new(damage: Estimate, defender_health: Option<u32>) -> Self {
        let health = defender_health.map_or(f64::NAN, f64::from);
        let damage_value = damage.value();
        Self {
            damage,
            health_percent: Estimate::new(damage_value / health * 100.0).round_to(1),
            hits_to_ko: Estimate::new((health / damage_value).ceil()),
        }
    }
}

/// Feeds derived stats into the damage formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamageEstimator;

impl DamageEstimator {
    /// The (attacking, defending) stat pair used by `category`.
    pub fn stat_pair(category: MoveCategory) -> (Stat, Stat) {
        (category.attacking_stat(), category.defending_stat())
    }

    /// Estimates `attacker` hitting `defender` with `move_config`.
    ///
    /// Either side may be missing (an unresolved slot); the estimate is
    /// then a placeholder rather than an error. The health figures use
    /// the defender's base Health.
    pub fn estimate(
        move_config: &MoveConfiguration,
        attacker: Option<&ResolvedStats>,
        defender: Option<&ResolvedStats>,
    ) -> DamageEstimate {
        let (attacking, defending) = Self::stat_pair(move_config.category);
        let damage = estimate_damage(
            move_config.effective_power(),
            attacker.map(|stats| stats.value(attacking)),
            defender.map(|stats| stats.value(defending)),
        );
        DamageEstimate::new(damage, defender.map(|stats| stats.get(Stat::Hp).base))
    }
}
