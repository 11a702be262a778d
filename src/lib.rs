//! Ducks whose quacking and flying are pluggable strategy objects.
//!
//! A [`Duck`] owns one [`QuackBehaviour`] and one [`FlyBehaviour`] and
//! delegates `perform_quack` / `perform_fly` to them. Either slot can be
//! swapped at runtime through the setters.

pub mod behaviour;
pub mod duck;
pub mod ducks;
pub mod error;
pub mod pond;

pub use behaviour::{FlyBehaviour, FlyKind, QuackBehaviour, QuackKind};
pub use duck::{Behaviours, Duck};
pub use ducks::{DecoyDuck, DuckVariant, MallardDuck, ModelDuck, RedheadDuck, RubberDuck};
pub use error::PondError;
pub use pond::{DuckEntry, Pond, RosterConfig, RosterParser};
