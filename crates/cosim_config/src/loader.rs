//! Configuration file lookup, loading and validation.

use crate::error::ConfigError;
use crate::types::GeneratorConfig;
use std::path::Path;

/// Name of the configuration file looked up in the simulation directory.
pub const CONFIG_FILE_NAME: &str = "cosim.toml";

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates configuration text.
pub fn load_config_from_str(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolves the configuration for a run.
///
/// An explicit path must exist. Without one, `<sim_dir>/cosim.toml` is used
/// when present, otherwise the built-in defaults.
pub fn load_for_sim_dir(
    sim_dir: &Path,
    explicit: Option<&Path>,
) -> Result<GeneratorConfig, ConfigError> {
    if let Some(path) = explicit {
        log::debug!("loading configuration from {}", path.display());
        return load_config(path);
    }
    let candidate = sim_dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        log::debug!("loading configuration from {}", candidate.display());
        load_config(&candidate)
    } else {
        log::debug!("no {CONFIG_FILE_NAME} in {}, using defaults", sim_dir.display());
        Ok(GeneratorConfig::default())
    }
}

/// Largest value a VHDL `integer` generic is guaranteed to hold.
const VHDL_INTEGER_MAX: u32 = i32::MAX as u32;

fn validate_config(config: &GeneratorConfig) -> Result<(), ConfigError> {
    check_integer_generic("qemu.sync_quantum", config.qemu.sync_quantum)?;
    check_integer_generic("clocks.period_ns", config.clocks.period_ns)?;
    check_file_name("output.compile_script", &config.output.compile_script)?;
    check_file_name("output.top_script", &config.output.top_script)?;
    if config.output.compile_script == config.output.top_script {
        return Err(invalid(
            "output.top_script",
            "must differ from output.compile_script",
        ));
    }
    if config.output.elaborate_suffix.is_empty() {
        return Err(invalid("output.elaborate_suffix", "must not be empty"));
    }
    if config.output.library.trim().is_empty() {
        return Err(invalid("output.library", "must not be empty"));
    }
    Ok(())
}

fn check_integer_generic(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(invalid(field, "must be greater than zero"));
    }
    if value > VHDL_INTEGER_MAX {
        return Err(invalid(
            field,
            &format!("must not exceed {VHDL_INTEGER_MAX}, the VHDL integer limit"),
        ));
    }
    Ok(())
}

fn check_file_name(field: &'static str, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    if name.contains(['/', '\\']) {
        return Err(invalid(field, "must be a bare file name"));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
