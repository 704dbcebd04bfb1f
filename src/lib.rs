//! # monstat - Stat Derivation and Damage Estimation
//!
//! A small, deterministic engine behind a two-creature matchup calculator:
//! - **Stat derivation** from base stat, individual value and effort value
//!   at a fixed level of 50
//! - **Damage estimation** from move power and the attacker's and
//!   defender's derived stats
//! - **Health figures**: damage as a percentage of the defender's Health
//!   and the number of hits to knock it out
//!
//! ## Core Concepts
//!
//! ```text
//! [SpeciesCatalog] → [CreatureConfiguration] → [StatCalculator] → [DamageEstimator]
//! ```
//!
//! 1. The **catalog** holds normalized species records, loaded once
//! 2. A **creature configuration** is one board slot: species, type,
//!    ability, individual values and effort values
//! 3. The **stat calculator** turns a configuration into six derived stats
//! 4. The **damage estimator** combines two stat tables with the move
//!
//! A [`Board`] wires four slots and a single shared move together the way
//! a front end displays them.
//!
//! ## Example
//!
//! ```rust
//! use monstat::*;
//!
//! let catalog = SpeciesCatalog::bundled()?;
//! let charmander = CreatureConfiguration::resolve("Charmander", &catalog)?;
//! let bulbasaur = CreatureConfiguration::resolve("Bulbasaur", &catalog)?;
//!
//! let attacker = StatCalculator::derive(&charmander);
//! let defender = StatCalculator::derive(&bulbasaur);
//!
//! let hit = DamageEstimator::estimate(
//!     &MoveConfiguration::default(),
//!     attacker.as_ref(),
//!     defender.as_ref(),
//! );
//! assert_eq!(hit.damage.as_integer(), Some(22));
//! assert_eq!(hit.hits_to_ko.as_integer(), Some(3));
//! # Ok::<(), CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`stat`] - Stat categories and per-stat tables
//! - [`catalog`] - Species records and the catalog
//! - [`creature`] - Per-slot creature configuration
//! - [`moves`] - The shared move configuration
//! - [`calculator`] - Stat derivation
//! - [`resolved`] - Derived stat results
//! - [`damage`] - Damage estimation
//! - [`board`] - Slots, selection and the damage report
//! - [`numeric`] - Field inputs and possibly non-numeric estimates
//! - [`config`] - Constants and board layout
//! - [`error`] - Error types

pub mod board;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod creature;
pub mod damage;
pub mod error;
pub mod moves;
pub mod numeric;
pub mod resolved;
pub mod stat;

// Re-export main types for convenience
pub use board::{Board, DamageReport, Side, Slot};
pub use calculator::{compute_stat, StatCalculator};
pub use catalog::{Species, SpeciesCatalog, SpeciesRecord, Type};
pub use config::{BoardConfig, SideConfig};
pub use creature::CreatureConfiguration;
pub use damage::{compute_damage, estimate_damage, DamageEstimate, DamageEstimator};
pub use error::CalcError;
pub use moves::{MoveCategory, MoveConfiguration, SharedMove};
pub use numeric::{Estimate, NumericInput};
pub use resolved::{ResolvedStat, ResolvedStats};
pub use stat::{Stat, StatMap};
