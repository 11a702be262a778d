//! Concrete ducks. Each one picks its default pair of behaviours at
//! construction and supplies its own identification text.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::behaviour::{FlyKind, FlyNoWay, FlyWithWings, MuteQuack, Quack, QuackKind, Squeak};
use crate::duck::{Behaviours, Duck};
use crate::error::PondError;

// Every variant stores its behaviours the same way; only the name and the
// display text differ.
macro_rules! impl_duck {
    ($ty:ident, $name:literal, $text:literal) => {
        impl Duck for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn display(&self, out: &mut dyn Write) -> io::Result<()> {
                writeln!(out, $text)
            }

            fn behaviours(&self) -> &Behaviours {
                &self.behaviours
            }

            fn behaviours_mut(&mut self) -> &mut Behaviours {
                &mut self.behaviours
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("behaviours", &self.behaviours)
                    .finish()
            }
        }
    };
}

/// Quacks and flies with wings.
pub struct RedheadDuck {
    behaviours: Behaviours,
}

impl RedheadDuck {
    pub fn new() -> Self {
        Self {
            behaviours: Behaviours::new(Box::new(Quack), Box::new(FlyWithWings)),
        }
    }
}

impl Default for RedheadDuck {
    fn default() -> Self {
        Self::new()
    }
}

impl_duck!(RedheadDuck, "redhead", "Looks like a Redhead Duck");

pub struct MallardDuck {
    behaviours: Behaviours,
}

impl MallardDuck {
    pub fn new() -> Self {
        Self {
            behaviours: Behaviours::new(Box::new(Quack), Box::new(FlyWithWings)),
        }
    }
}

impl Default for MallardDuck {
    fn default() -> Self {
        Self::new()
    }
}

impl_duck!(MallardDuck, "mallard", "I'm a real Mallard duck");

pub struct RubberDuck {
    behaviours: Behaviours,
}

impl RubberDuck {
    pub fn new() -> Self {
        Self {
            behaviours: Behaviours::new(Box::new(Squeak), Box::new(FlyNoWay)),
        }
    }
}

impl Default for RubberDuck {
    fn default() -> Self {
        Self::new()
    }
}

impl_duck!(RubberDuck, "rubber", "I'm a rubber duckie");

/// Silent and grounded.
pub struct DecoyDuck {
    behaviours: Behaviours,
}

impl DecoyDuck {
    pub fn new() -> Self {
        Self {
            behaviours: Behaviours::new(Box::new(MuteQuack), Box::new(FlyNoWay)),
        }
    }
}

impl Default for DecoyDuck {
    fn default() -> Self {
        Self::new()
    }
}

impl_duck!(DecoyDuck, "decoy", "I'm a duck Decoy");

/// Starts grounded; the usual candidate for a rocket at runtime.
pub struct ModelDuck {
    behaviours: Behaviours,
}

impl ModelDuck {
    pub fn new() -> Self {
        Self {
            behaviours: Behaviours::new(Box::new(Quack), Box::new(FlyNoWay)),
        }
    }
}

impl Default for ModelDuck {
    fn default() -> Self {
        Self::new()
    }
}

impl_duck!(ModelDuck, "model", "I'm a model duck");

// =============================================================================
// Variant tags
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuckVariant {
    Redhead,
    Mallard,
    Rubber,
    Decoy,
    Model,
}

impl DuckVariant {
    pub const ALL: [DuckVariant; 5] = [
        DuckVariant::Redhead,
        DuckVariant::Mallard,
        DuckVariant::Rubber,
        DuckVariant::Decoy,
        DuckVariant::Model,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DuckVariant::Redhead => "redhead",
            DuckVariant::Mallard => "mallard",
            DuckVariant::Rubber => "rubber",
            DuckVariant::Decoy => "decoy",
            DuckVariant::Model => "model",
        }
    }

    /// Build the variant with its default behaviours.
    pub fn hatch(self) -> Box<dyn Duck> {
        match self {
            DuckVariant::Redhead => Box::new(RedheadDuck::new()),
            DuckVariant::Mallard => Box::new(MallardDuck::new()),
            DuckVariant::Rubber => Box::new(RubberDuck::new()),
            DuckVariant::Decoy => Box::new(DecoyDuck::new()),
            DuckVariant::Model => Box::new(ModelDuck::new()),
        }
    }

    pub fn default_kinds(&self) -> (QuackKind, FlyKind) {
        match self {
            DuckVariant::Redhead | DuckVariant::Mallard => (QuackKind::Quack, FlyKind::WithWings),
            DuckVariant::Rubber => (QuackKind::Squeak, FlyKind::NoWay),
            DuckVariant::Decoy => (QuackKind::Mute, FlyKind::NoWay),
            DuckVariant::Model => (QuackKind::Quack, FlyKind::NoWay),
        }
    }
}

impl fmt::Display for DuckVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuckVariant {
    type Err = PondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == wanted)
            .ok_or_else(|| PondError::UnknownVariant(s.to_string()))
    }
}
