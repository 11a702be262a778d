use std::fs;
use std::io::{self, Write};
use std::path::Path;

use itertools::Itertools;
use serde::Deserialize;

use crate::behaviour::{FlyKind, QuackKind};
use crate::duck::Duck;
use crate::ducks::DuckVariant;
use crate::error::PondError;

// =============================================================================
// Roster file
// =============================================================================

/// One `[[duck]]` entry. Missing behaviours keep the variant's defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DuckEntry {
    pub variant: DuckVariant,
    pub quack: Option<QuackKind>,
    pub fly: Option<FlyKind>,
}

impl DuckEntry {
    pub fn new(variant: DuckVariant) -> Self {
        Self {
            variant,
            quack: None,
            fly: None,
        }
    }

    pub fn with_quack(mut self, quack: QuackKind) -> Self {
        self.quack = Some(quack);
        self
    }

    pub fn with_fly(mut self, fly: FlyKind) -> Self {
        self.fly = Some(fly);
        self
    }

    pub fn hatch(&self) -> Box<dyn Duck> {
        let mut duck = self.variant.hatch();
        if let Some(quack) = self.quack {
            duck.set_quack_behaviour(quack.into_behaviour());
        }
        if let Some(fly) = self.fly {
            duck.set_fly_behaviour(fly.into_behaviour());
        }
        duck
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterConfig {
    pub ducks: Vec<DuckEntry>,
}

// Names stay strings on the way in so they go through the same `FromStr`
// impls as everything else and keep their specific error variants.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDuckEntry {
    variant: String,
    #[serde(default)]
    quack: Option<String>,
    #[serde(default)]
    fly: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRoster {
    #[serde(rename = "duck", default)]
    ducks: Vec<RawDuckEntry>,
}

impl TryFrom<RawDuckEntry> for DuckEntry {
    type Error = PondError;

    fn try_from(raw: RawDuckEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            variant: raw.variant.parse()?,
            quack: raw.quack.as_deref().map(str::parse).transpose()?,
            fly: raw.fly.as_deref().map(str::parse).transpose()?,
        })
    }
}

impl TryFrom<RawRoster> for RosterConfig {
    type Error = PondError;

    fn try_from(raw: RawRoster) -> Result<Self, Self::Error> {
        let ducks = raw
            .ducks
            .into_iter()
            .map(DuckEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ducks })
    }
}

pub struct RosterParser;

impl RosterParser {
    pub fn parse_toml(content: &str) -> Result<RosterConfig, PondError> {
        let raw: RawRoster = toml::from_str(content)?;
        RosterConfig::try_from(raw)
    }

    pub fn parse_json(content: &str) -> Result<RosterConfig, PondError> {
        let raw: RawRoster = serde_json::from_str(content)?;
        RosterConfig::try_from(raw)
    }

    pub fn parse_file(path: &Path) -> Result<RosterConfig, PondError> {
        let content = fs::read_to_string(path).map_err(|err| PondError::io(path, err))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::parse_json(&content),
            Some("toml") => Self::parse_toml(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::parse_json(&content)
                } else {
                    Self::parse_toml(&content)
                }
            }
        }
    }
}

// =============================================================================
// Pond
// =============================================================================

#[derive(Default)]
pub struct Pond {
    ducks: Vec<Box<dyn Duck>>,
}

impl Pond {
    pub fn new() -> Self {
        Self { ducks: Vec::new() }
    }

    /// One duck of every variant, in declaration order.
    pub fn default_flock() -> Self {
        Self {
            ducks: DuckVariant::ALL.into_iter().map(DuckVariant::hatch).collect(),
        }
    }

    pub fn from_config(config: &RosterConfig) -> Result<Self, PondError> {
        if config.ducks.is_empty() {
            return Err(PondError::EmptyRoster);
        }
        Ok(Self {
            ducks: config.ducks.iter().map(DuckEntry::hatch).collect(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, PondError> {
        Self::from_config(&RosterParser::parse_file(path)?)
    }

    pub fn add(&mut self, duck: Box<dyn Duck>) {
        self.ducks.push(duck);
    }

    pub fn len(&self) -> usize {
        self.ducks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ducks.is_empty()
    }

    pub fn ducks(&self) -> impl Iterator<Item = &dyn Duck> {
        self.ducks.iter().map(|duck| duck.as_ref())
    }

    pub fn ducks_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Duck>> {
        self.ducks.iter_mut()
    }

    /// First duck with the given variant name.
    pub fn find(&self, name: &str) -> Option<&dyn Duck> {
        self.ducks().find(|duck| duck.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Box<dyn Duck>> {
        self.ducks.iter_mut().find(|duck| duck.name() == name)
    }

    /// Comma-separated variant names, e.g. "redhead, decoy".
    pub fn names(&self) -> String {
        self.ducks().map(|duck| duck.name()).join(", ")
    }

    /// Display, quack, fly and swim every duck in order.
    pub fn perform_all(&self, out: &mut dyn Write) -> io::Result<()> {
        for duck in self.ducks() {
            duck.display(out)?;
            duck.perform_quack(out)?;
            duck.perform_fly(out)?;
            duck.swim(out)?;
        }
        Ok(())
    }
}
