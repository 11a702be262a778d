use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use duck_strategy::behaviour::FlyRocketPowered;
use duck_strategy::{Duck, ModelDuck, Pond, PondError, RedheadDuck};

fn should_use_colors() -> bool {
    env::var("NO_COLOR").is_err()
}

fn section(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("=== {title} ===").cyan().bold())
}

// =============================================================================
// Built-in scenario: one redhead, then a model duck strapped to a rocket
// =============================================================================

fn run_scenario(out: &mut dyn Write) -> io::Result<()> {
    section(out, "Redhead duck")?;
    let redhead = RedheadDuck::new();
    redhead.display(out)?;
    redhead.perform_quack(out)?;
    redhead.perform_fly(out)?;

    section(out, "Model duck, before and after the rocket")?;
    let mut model = ModelDuck::new();
    model.display(out)?;
    model.perform_fly(out)?;
    model.set_fly_behaviour(Box::new(FlyRocketPowered));
    model.perform_fly(out)?;

    let pond = Pond::default_flock();
    section(out, &format!("Default flock ({})", pond.names()))?;
    pond.perform_all(out)
}

fn run_roster(path: &Path, out: &mut dyn Write) -> Result<(), PondError> {
    let pond = Pond::from_file(path)?;
    section(out, &format!("{} ({})", path.display(), pond.names()))?;
    pond.perform_all(out)?;
    Ok(())
}

fn main() -> ExitCode {
    if !should_use_colors() {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match env::args().nth(1) {
        Some(path) => run_roster(Path::new(&path), &mut out),
        None => run_scenario(&mut out).map_err(PondError::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_color_environment() {
        env::set_var("NO_COLOR", "1");
        assert!(!should_use_colors());
        env::remove_var("NO_COLOR");
        assert!(should_use_colors());
    }

    #[test]
    fn test_scenario_output() {
        let mut out = Vec::new();
        run_scenario(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Looks like a Redhead Duck\nQuack\nI'm flying!!\n"));
        assert!(text.contains("I can't fly\nI'm flying with a rocket!\n"));
        assert!(text.contains("redhead, mallard, rubber, decoy, model"));
    }

    #[test]
    fn test_roster_playback() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[[duck]]\nvariant = \"decoy\"").unwrap();

        let mut out = Vec::new();
        run_roster(file.path(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("I'm a duck Decoy\n<< Silence >>\nI can't fly\n"));
    }

    #[test]
    fn test_roster_errors_are_reported() {
        let file = NamedTempFile::new().unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            run_roster(file.path(), &mut out),
            Err(PondError::EmptyRoster)
        ));
    }
}
