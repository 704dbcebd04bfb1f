//! Creature configuration module.
//!
//! A `CreatureConfiguration` is the state behind one board slot. Changing
//! its species always rebuilds it from the new species' defaults; edits
//! made to the previous species never carry over.

use crate::catalog::{Species, SpeciesCatalog, Type};
use crate::config::{DEFAULT_EV, DEFAULT_IV, EV_STEP, MAX_EV, MAX_IV};
use crate::error::CalcError;
use crate::numeric::NumericInput;
use crate::stat::{Stat, StatMap};
use log::debug;
use serde::{Deserialize, Serialize};

/// The configuration of one creature slot.
///
/// # Examples
///
/// ```rust
/// use monstat::{CreatureConfiguration, SpeciesCatalog, Stat};
///
/// let catalog = SpeciesCatalog::bundled().unwrap();
/// let mut slot = CreatureConfiguration::resolve("Charmander", &catalog).unwrap();
/// slot.set_ev(Stat::Atk, "252");
///
/// // A species change is a full reset, not a merge.
/// slot.set_name("Squirtle", &catalog).unwrap();
/// assert_eq!(slot.ev(Stat::Atk).value(), Some(0));
///
/// // An unknown species leaves the slot as it was.
/// assert!(slot.set_name("Missingno", &catalog).is_err());
/// assert_eq!(slot.name(), "Squirtle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureConfiguration {
    name: String,
    species: Option<Species>,
    creature_type: Option<Type>,
    ability: Option<String>,
    ivs: StatMap<NumericInput>,
    evs: StatMap<NumericInput>,
}

impl CreatureConfiguration {
    /// A slot that names a species but has not looked it up yet.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: None,
            creature_type: None,
            ability: None,
            ivs: StatMap::splat(NumericInput::new(DEFAULT_IV)),
            evs: StatMap::splat(NumericInput::new(DEFAULT_EV)),
        }
    }

    /// Builds the default configuration for `species`.
    pub fn from_species(species: &Species) -> Self {
        Self {
            name: species.name.clone(),
            species: Some(species.clone()),
            creature_type: Some(species.primary_type()),
            ability: Some(species.default_ability().to_string()),
            ivs: StatMap::splat(NumericInput::new(DEFAULT_IV)),
            evs: StatMap::splat(NumericInput::new(DEFAULT_EV)),
        }
    }

    /// Looks `name` up and builds its default configuration.
    ///
    /// # Errors
    ///
    /// `SpeciesNotFound` if the catalog has no such species.
    pub fn resolve(name: &str, catalog: &SpeciesCatalog) -> Result<Self, CalcError> {
        let species = catalog.resolve(name)?;
        debug!("resolved species {name}");
        let mut config = Self::from_species(species);
        config.name = name.to_string();
        Ok(config)
    }

    /// Switches to another species, discarding every per-species edit.
    ///
    /// On error the configuration is unchanged.
    pub fn set_name(&mut self, name: &str, catalog: &SpeciesCatalog) -> Result<(), CalcError> {
        *self = Self::resolve(name, catalog)?;
        Ok(())
    }

    pub fn set_type(&mut self, creature_type: Type) {
        self.creature_type = Some(creature_type);
    }

    /// Picks one of the species' abilities.
    ///
    /// # Errors
    ///
    /// * `SpeciesNotFound` if the slot is unresolved
    /// * `UnknownAbility` if the species cannot have `ability`
    pub fn set_ability(&mut self, ability: &str) -> Result<(), CalcError> {
        let species = self
            .species
            .as_ref()
            .ok_or_else(|| CalcError::SpeciesNotFound(self.name.clone()))?;
        if !species.has_ability(ability) {
            return Err(CalcError::UnknownAbility {
                species: species.name.clone(),
                ability: ability.to_string(),
            });
        }
        self.ability = Some(ability.to_string());
        Ok(())
    }

    /// Stores individual value field text, clamped to `[0, 31]`.
    pub fn set_iv(&mut self, stat: Stat, raw: &str) {
        let field = format!("{} {stat} IV", self.name);
        self.ivs.set(stat, NumericInput::parse_field(&field, raw, Some(MAX_IV)));
    }

    /// Stores effort value field text, capped at 252.
    pub fn set_ev(&mut self, stat: Stat, raw: &str) {
        let field = format!("{} {stat} EV", self.name);
        self.evs.set(stat, NumericInput::parse_field(&field, raw, Some(MAX_EV)));
    }

    /// Stores an effort value slider position, snapped down to the
    /// slider step.
    pub fn set_ev_slider(&mut self, stat: Stat, position: u32) {
        let value = position.min(MAX_EV) / EV_STEP * EV_STEP;
        self.evs.set(stat, NumericInput::new(value));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved species, if any.
    pub fn species(&self) -> Option<&Species> {
        self.species.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.species.is_some()
    }

    pub fn creature_type(&self) -> Option<Type> {
        self.creature_type
    }

    pub fn ability(&self) -> Option<&str> {
        self.ability.as_deref()
    }

    pub fn iv(&self, stat: Stat) -> &NumericInput {
        self.ivs.get(stat)
    }

    pub fn ev(&self, stat: Stat) -> &NumericInput {
        self.evs.get(stat)
    }

    pub fn ivs(&self) -> &StatMap<NumericInput> {
        &self.ivs
    }

    pub fn evs(&self) -> &StatMap<NumericInput> {
        &self.evs
    }
}
