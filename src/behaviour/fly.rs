use std::io::{self, Write};

use super::{FlyBehaviour, FlyKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyWithWings;

impl FlyBehaviour for FlyWithWings {
    fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I'm flying!!")
    }

    fn kind(&self) -> FlyKind {
        FlyKind::WithWings
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyNoWay;

impl FlyBehaviour for FlyNoWay {
    fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I can't fly")
    }

    fn kind(&self) -> FlyKind {
        FlyKind::NoWay
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyRocketPowered;

impl FlyBehaviour for FlyRocketPowered {
    fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I'm flying with a rocket!")
    }

    fn kind(&self) -> FlyKind {
        FlyKind::RocketPowered
    }
}
