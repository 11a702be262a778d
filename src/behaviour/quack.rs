use std::io::{self, Write};

use super::{QuackBehaviour, QuackKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct Quack;

impl QuackBehaviour for Quack {
    fn quack(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Quack")
    }

    fn kind(&self) -> QuackKind {
        QuackKind::Quack
    }
}

/// Rubber ducks squeak instead of quacking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Squeak;

impl QuackBehaviour for Squeak {
    fn quack(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Squeak")
    }

    fn kind(&self) -> QuackKind {
        QuackKind::Squeak
    }
}

/// Makes no sound; only a silence marker is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct MuteQuack;

impl QuackBehaviour for MuteQuack {
    fn quack(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<< Silence >>")
    }

    fn kind(&self) -> QuackKind {
        QuackKind::Mute
    }
}
