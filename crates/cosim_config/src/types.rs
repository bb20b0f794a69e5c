//! Configuration types deserialized from `cosim.toml`.

use serde::Deserialize;

/// Default QEMU remote-port socket placed in the wrapper's generics.
pub const DEFAULT_SOCKET_PATH: &str = "unix:/path";

/// Default QEMU synchronisation quantum.
pub const DEFAULT_SYNC_QUANTUM: u32 = 10_000;

/// Default period, in nanoseconds, given to every clock present in the stub.
pub const DEFAULT_CLOCK_PERIOD_NS: u32 = 10_000;

/// The complete generator configuration.
///
/// Every table and key is optional; omitted values take the stock defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Defaults for the QEMU co-simulation generics.
    #[serde(default)]
    pub qemu: QemuConfig,
    /// Fabric clock settings.
    #[serde(default)]
    pub clocks: ClockConfig,
    /// Names of the generated scripts and the files they refer to.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults written into the `QEMU_*` generics of the wrapper.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QemuConfig {
    /// Default of `QEMU_PATH_TO_SOCKET_G`.
    pub socket_path: String,
    /// Default of `QEMU_SYNC_QUANTUM_G`.
    pub sync_quantum: u32,
}

impl Default for QemuConfig {
    fn default() -> Self {
        Self {
            socket_path: DEFAULT_SOCKET_PATH.to_string(),
            sync_quantum: DEFAULT_SYNC_QUANTUM,
        }
    }
}

/// Fabric clock settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClockConfig {
    /// Period in nanoseconds assigned to clocks present in the stub. Absent
    /// clocks always get the disabled sentinel `-1`.
    pub period_ns: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            period_ns: DEFAULT_CLOCK_PERIOD_NS,
        }
    }
}

/// Output naming.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// File name of the generated compilation script.
    pub compile_script: String,
    /// File name of the generated top-level driver script.
    pub top_script: String,
    /// Suffix of the vendor elaborate script used to discover the top design.
    pub elaborate_suffix: String,
    /// Simulation library the wrapper and co-simulation models compile into.
    pub library: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            compile_script: "zynq7_compile_cosim.do".to_string(),
            top_script: "all.do".to_string(),
            elaborate_suffix: "_elaborate.do".to_string(),
            library: "xil_defaultlib".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_setup() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.qemu.socket_path, "unix:/path");
        assert_eq!(cfg.qemu.sync_quantum, 10_000);
        assert_eq!(cfg.clocks.period_ns, 10_000);
        assert_eq!(cfg.output.compile_script, "zynq7_compile_cosim.do");
        assert_eq!(cfg.output.top_script, "all.do");
        assert_eq!(cfg.output.elaborate_suffix, "_elaborate.do");
        assert_eq!(cfg.output.library, "xil_defaultlib");
    }
}
