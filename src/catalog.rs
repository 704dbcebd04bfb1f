//! Species catalog module.
//!
//! The catalog is a static name → record mapping loaded once at startup.
//! Records arrive in the catalog's JSON shape (`SpeciesRecord`, base stats
//! as text) and are normalized into `Species` while loading, so a catalog
//! that loads successfully only holds well-formed species.

use crate::config::MAX_BASE_STAT;
use crate::error::CalcError;
use crate::stat::{Stat, StatMap};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../data/pokemon.json");

/// Elemental type identifier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    #[default]
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    /// Every type, in selector order.
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A base stat as written in the catalog: decimal text or a bare number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawBaseStat {
    Number(i64),
    Text(String),
}

impl RawBaseStat {
    fn parse(&self) -> Option<u32> {
        let value = match self {
            RawBaseStat::Number(n) => u32::try_from(*n).ok(),
            RawBaseStat::Text(text) => text.trim().parse::<u32>().ok(),
        };
        value.filter(|base| *base <= MAX_BASE_STAT)
    }

    fn as_text(&self) -> String {
        match self {
            RawBaseStat::Number(n) => n.to_string(),
            RawBaseStat::Text(text) => text.clone(),
        }
    }
}

/// A species exactly as the catalog describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub name: String,
    pub base_stats: StatMap<RawBaseStat>,
    pub types: Vec<Type>,
    pub abilities: Vec<String>,
    #[serde(rename = "pictureID")]
    pub picture_id: String,
}

impl SpeciesRecord {
    /// Checks the record and parses its base stats.
    ///
    /// # Errors
    ///
    /// * `InvalidBaseStat` if a base stat is not an integer in
    ///   `[0, MAX_BASE_STAT]`
    /// * `InvalidTypes` if the record has no types or more than two
    /// * `NoAbilities` if the ability list is empty
    pub fn normalize(&self) -> Result<Species, CalcError> {
        let base_stats = StatMap::try_from_fn(|stat| {
            let raw = self.base_stats.get(stat);
            raw.parse().ok_or_else(|| CalcError::InvalidBaseStat {
                species: self.name.clone(),
                stat,
                raw: raw.as_text(),
            })
        })?;

        if !(1..=2).contains(&self.types.len()) {
            return Err(CalcError::InvalidTypes {
                species: self.name.clone(),
                count: self.types.len(),
            });
        }
        if self.abilities.is_empty() {
            return Err(CalcError::NoAbilities(self.name.clone()));
        }

        Ok(Species {
            name: self.name.clone(),
            base_stats,
            types: self.types.clone(),
            abilities: self.abilities.clone(),
            picture_id: self.picture_id.clone(),
        })
    }
}

/// A normalized species: integer base stats, one or two types and at
/// least one ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub base_stats: StatMap<u32>,
    types: Vec<Type>,
    abilities: Vec<String>,
    pub picture_id: String,
}

impl Species {
    pub fn base_stat(&self, stat: Stat) -> u32 {
        *self.base_stats.get(stat)
    }

    /// One or two types, primary first.
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn primary_type(&self) -> Type {
        self.types.first().copied().unwrap_or_default()
    }

    pub fn secondary_type(&self) -> Option<Type> {
        self.types.get(1).copied()
    }

    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    pub fn default_ability(&self) -> &str {
        self.abilities.first().map(String::as_str).unwrap_or_default()
    }

    pub fn has_ability(&self, ability: &str) -> bool {
        self.abilities.iter().any(|a| a == ability)
    }

    /// Location of the species' icon under `base`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monstat::SpeciesCatalog;
    ///
    /// let catalog = SpeciesCatalog::bundled().unwrap();
    /// let pikachu = catalog.get("Pikachu").unwrap();
    /// assert_eq!(pikachu.icon_path("PokemonIcons/Big/"), "PokemonIcons/Big/pm025_big.png");
    /// ```
    pub fn icon_path(&self, base: &str) -> String {
        format!("{base}pm{}_big.png", self.picture_id)
    }
}

/// The read-only species catalog, in file order.
///
/// # Examples
///
/// ```rust
/// use monstat::{SpeciesCatalog, Stat};
///
/// let catalog = SpeciesCatalog::from_json_str(r#"{
///     "Charmander": {
///         "name": "Charmander",
///         "baseStats": { "Hp": "39", "Atk": "52", "Def": "43", "SpAtk": "60", "SpDef": "50", "Speed": "65" },
///         "types": ["Fire"],
///         "abilities": ["Blaze"],
///         "pictureID": "004"
///     }
/// }"#).unwrap();
///
/// let charmander = catalog.resolve("Charmander").unwrap();
/// assert_eq!(charmander.base_stat(Stat::Atk), 52);
/// assert!(catalog.resolve("Mew").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    species: IndexMap<String, Species>,
}

impl SpeciesCatalog {
    /// Builds a catalog from records keyed by species name.
    pub fn from_records(records: IndexMap<String, SpeciesRecord>) -> Result<Self, CalcError> {
        let species = records
            .into_iter()
            .map(|(key, record)| Ok((key, record.normalize()?)))
            .collect::<Result<IndexMap<_, _>, CalcError>>()?;
        debug!("loaded species catalog with {} entries", species.len());
        Ok(Self { species })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CalcError> {
        Self::from_records(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CalcError> {
        Self::from_records(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CalcError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// The catalog shipped inside the crate.
    pub fn bundled() -> Result<Self, CalcError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn get(&self, name: &str) -> Option<&Species> {
        self.species.get(name)
    }

    /// Looks a species up by name.
    ///
    /// # Errors
    ///
    /// `SpeciesNotFound` if `name` is not a catalog key.
    pub fn resolve(&self, name: &str) -> Result<&Species, CalcError> {
        self.get(name)
            .ok_or_else(|| CalcError::SpeciesNotFound(name.to_string()))
    }

    /// Species names in catalog order, as offered by the species selector.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.species.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> + '_ {
        self.species.values()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
