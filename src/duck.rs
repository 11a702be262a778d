use std::fmt;
use std::io::{self, Write};

use crate::behaviour::{FlyBehaviour, FlyKind, QuackBehaviour, QuackKind};

/// The two strategy slots every duck owns.
///
/// Both slots are required at construction, so a duck can never be left
/// without a behaviour.
pub struct Behaviours {
    quack: Box<dyn QuackBehaviour>,
    fly: Box<dyn FlyBehaviour>,
}

impl Behaviours {
    pub fn new(quack: Box<dyn QuackBehaviour>, fly: Box<dyn FlyBehaviour>) -> Self {
        Self { quack, fly }
    }

    pub fn from_kinds(quack: QuackKind, fly: FlyKind) -> Self {
        Self::new(quack.into_behaviour(), fly.into_behaviour())
    }

    pub fn quack(&self) -> &dyn QuackBehaviour {
        self.quack.as_ref()
    }

    pub fn fly(&self) -> &dyn FlyBehaviour {
        self.fly.as_ref()
    }

    pub fn set_quack(&mut self, quack: Box<dyn QuackBehaviour>) {
        self.quack = quack;
    }

    pub fn set_fly(&mut self, fly: Box<dyn FlyBehaviour>) {
        self.fly = fly;
    }
}

impl fmt::Debug for Behaviours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behaviours")
            .field("quack", &self.quack.kind())
            .field("fly", &self.fly.kind())
            .finish()
    }
}

/// A duck delegates quacking and flying to its [`Behaviours`] and only
/// decides for itself how it looks.
pub trait Duck: Send + Sync {
    /// Short, lowercase variant name ("redhead", "mallard", ...).
    fn name(&self) -> &str;

    /// Identification text for this kind of duck.
    fn display(&self, out: &mut dyn Write) -> io::Result<()>;

    fn behaviours(&self) -> &Behaviours;

    fn behaviours_mut(&mut self) -> &mut Behaviours;

    fn perform_quack(&self, out: &mut dyn Write) -> io::Result<()> {
        self.behaviours().quack().quack(out)
    }

    fn perform_fly(&self, out: &mut dyn Write) -> io::Result<()> {
        self.behaviours().fly().fly(out)
    }

    fn swim(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "All ducks float, even decoys!")
    }

    fn set_quack_behaviour(&mut self, quack: Box<dyn QuackBehaviour>) {
        self.behaviours_mut().set_quack(quack);
    }

    fn set_fly_behaviour(&mut self, fly: Box<dyn FlyBehaviour>) {
        self.behaviours_mut().set_fly(fly);
    }

    fn quack_kind(&self) -> QuackKind {
        self.behaviours().quack().kind()
    }

    fn fly_kind(&self) -> FlyKind {
        self.behaviours().fly().kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviour::{FlyNoWay, FlyWithWings, MuteQuack, Squeak};

    struct TestDuck {
        behaviours: Behaviours,
    }

    impl Duck for TestDuck {
        fn name(&self) -> &str {
            "test"
        }

        fn display(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "A test duck")
        }

        fn behaviours(&self) -> &Behaviours {
            &self.behaviours
        }

        fn behaviours_mut(&mut self) -> &mut Behaviours {
            &mut self.behaviours
        }
    }

    fn capture(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        let sink: &mut dyn Write = &mut out;
        f(sink).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_delegates_to_held_behaviours() {
        let duck = TestDuck {
            behaviours: Behaviours::new(Box::new(Squeak), Box::new(FlyWithWings)),
        };
        assert_eq!(capture(|out| duck.perform_quack(out)), "Squeak\n");
        assert_eq!(capture(|out| duck.perform_fly(out)), "I'm flying!!\n");
        assert_eq!(capture(|out| duck.swim(out)), "All ducks float, even decoys!\n");
    }

    #[test]
    fn test_swapping_fly_leaves_quack_alone() {
        let mut duck = TestDuck {
            behaviours: Behaviours::from_kinds(QuackKind::Quack, FlyKind::WithWings),
        };
        let quack_before = capture(|out| duck.perform_quack(out));

        duck.set_fly_behaviour(Box::new(FlyNoWay));

        assert_eq!(capture(|out| duck.perform_fly(out)), "I can't fly\n");
        assert_eq!(capture(|out| duck.perform_quack(out)), quack_before);
        assert_eq!(duck.fly_kind(), FlyKind::NoWay);
        assert_eq!(duck.quack_kind(), QuackKind::Quack);
        assert_eq!(duck.name(), "test");
    }

    #[test]
    fn test_swapping_quack_leaves_fly_alone() {
        let mut duck = TestDuck {
            behaviours: Behaviours::from_kinds(QuackKind::Quack, FlyKind::WithWings),
        };

        duck.set_quack_behaviour(Box::new(MuteQuack));

        assert_eq!(capture(|out| duck.perform_quack(out)), "<< Silence >>\n");
        assert_eq!(capture(|out| duck.perform_fly(out)), "I'm flying!!\n");
    }

    #[test]
    fn test_behaviours_debug_shows_kinds() {
        let behaviours = Behaviours::from_kinds(QuackKind::Mute, FlyKind::RocketPowered);
        let debug = format!("{behaviours:?}");
        assert!(debug.contains("Mute"));
        assert!(debug.contains("RocketPowered"));
    }
}
