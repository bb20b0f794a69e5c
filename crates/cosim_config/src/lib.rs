//! Parsing and validation of the optional `cosim.toml` generator configuration.
//!
//! Every key has a built-in default matching the stock co-simulation setup, so
//! a missing file yields [`GeneratorConfig::default`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, load_for_sim_dir, CONFIG_FILE_NAME};
pub use types::*;
