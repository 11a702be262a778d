//! The two capabilities a duck delegates to.

mod fly;
mod quack;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::PondError;

pub use fly::{FlyNoWay, FlyRocketPowered, FlyWithWings};
pub use quack::{MuteQuack, Quack, Squeak};

/// How a duck sounds.
pub trait QuackBehaviour: Send + Sync {
    /// Emit the sound to `out`.
    fn quack(&self, out: &mut dyn Write) -> io::Result<()>;

    fn kind(&self) -> QuackKind;
}

/// How a duck gets (or fails to get) off the ground.
pub trait FlyBehaviour: Send + Sync {
    /// Describe the flight to `out`.
    fn fly(&self, out: &mut dyn Write) -> io::Result<()>;

    fn kind(&self) -> FlyKind;
}

// =============================================================================
// Behaviour tags
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuackKind {
    Quack,
    Squeak,
    Mute,
}

impl QuackKind {
    pub const ALL: [QuackKind; 3] = [QuackKind::Quack, QuackKind::Squeak, QuackKind::Mute];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuackKind::Quack => "quack",
            QuackKind::Squeak => "squeak",
            QuackKind::Mute => "mute",
        }
    }

    pub fn into_behaviour(self) -> Box<dyn QuackBehaviour> {
        match self {
            QuackKind::Quack => Box::new(Quack),
            QuackKind::Squeak => Box::new(Squeak),
            QuackKind::Mute => Box::new(MuteQuack),
        }
    }
}

impl fmt::Display for QuackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuackKind {
    type Err = PondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quack" => Ok(QuackKind::Quack),
            "squeak" => Ok(QuackKind::Squeak),
            "mute" | "mute-quack" => Ok(QuackKind::Mute),
            _ => Err(PondError::UnknownQuack(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlyKind {
    WithWings,
    NoWay,
    RocketPowered,
}

impl FlyKind {
    pub const ALL: [FlyKind; 3] = [FlyKind::WithWings, FlyKind::NoWay, FlyKind::RocketPowered];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlyKind::WithWings => "with-wings",
            FlyKind::NoWay => "no-way",
            FlyKind::RocketPowered => "rocket-powered",
        }
    }

    pub fn into_behaviour(self) -> Box<dyn FlyBehaviour> {
        match self {
            FlyKind::WithWings => Box::new(FlyWithWings),
            FlyKind::NoWay => Box::new(FlyNoWay),
            FlyKind::RocketPowered => Box::new(FlyRocketPowered),
        }
    }
}

impl fmt::Display for FlyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlyKind {
    type Err = PondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "with-wings" => Ok(FlyKind::WithWings),
            "no-way" => Ok(FlyKind::NoWay),
            "rocket-powered" => Ok(FlyKind::RocketPowered),
            _ => Err(PondError::UnknownFly(s.to_string())),
        }
    }
}
