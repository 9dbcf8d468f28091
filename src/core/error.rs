use thiserror::Error;

use crate::combat::{ActionType, Area};

#[derive(Error, Debug)]
pub enum StrikeError {
    #[error("Missing {kind:?} base value for area {area:?}")]
    MissingBaseValue { kind: ActionType, area: Area },

    #[error("Missing {kind:?} energy cost for area {area:?}")]
    MissingEnergyCost { kind: ActionType, area: Area },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown fighter: {0}")]
    UnknownFighter(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StrikeError>;
