pub mod config;
pub mod error;
pub mod types;

pub use config::{load_engine_config, load_named_config, EngineConfig};
pub use error::{Result, StrikeError};
pub use types::{Round, RoundClock};
