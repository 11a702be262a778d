use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PondError {
    #[error("Unknown quack behaviour: '{0}' (expected quack, squeak or mute)")]
    UnknownQuack(String),

    #[error("Unknown fly behaviour: '{0}' (expected with-wings, no-way or rocket-powered)")]
    UnknownFly(String),

    #[error("Unknown duck variant: '{0}'")]
    UnknownVariant(String),

    #[error("Failed to parse {format} roster: {message}")]
    Parse { format: &'static str, message: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Roster contains no ducks")]
    EmptyRoster,

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl PondError {
    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for PondError {
    fn from(err: toml::de::Error) -> Self {
        PondError::parse("TOML", err.to_string().trim_end())
    }
}

impl From<serde_json::Error> for PondError {
    fn from(err: serde_json::Error) -> Self {
        PondError::parse("JSON", err.to_string())
    }
}
