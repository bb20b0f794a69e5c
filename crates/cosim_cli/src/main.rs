//! cosim-gen: turns a Zynq-7000 processing system stub into a QEMU
//! co-simulation wrapper plus the QuestaSim scripts that build and run it.

#![warn(missing_docs)]

mod generate;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

/// Generate the co-simulation wrapper, compile script and top script.
#[derive(Parser, Debug)]
#[command(name = "cosim-gen", version, about = "PS7 co-simulation file generator")]
pub struct Cli {
    /// Path to the vendor-generated processing system VHDL stub.
    pub stub: PathBuf,

    /// Simulation directory the files are written to. Must contain the
    /// vendor `<top>_elaborate.do` script.
    pub sim_dir: PathBuf,

    /// Path to a `cosim.toml` file (default: `<SIM_DIR>/cosim.toml` if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render everything but only list the files that would be written.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
}

impl GlobalArgs {
    fn from_cli(cli: &Cli) -> Self {
        let color = match cli.color {
            ColorChoice::Auto => std::io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Self {
            quiet: cli.quiet,
            verbose: cli.verbose,
            color,
        }
    }

    /// Default log filter; `RUST_LOG` takes precedence.
    fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let global = GlobalArgs::from_cli(&cli);

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(global.log_filter()),
    )
    .try_init();

    colored::control::set_override(global.color);

    process::exit(generate::run(&cli, &global));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_positional_arguments() {
        let cli = Cli::parse_from(["cosim-gen", "ip/ps7_stub.vhdl", "sim/questa"]);
        assert_eq!(cli.stub, PathBuf::from("ip/ps7_stub.vhdl"));
        assert_eq!(cli.sim_dir, PathBuf::from("sim/questa"));
        assert!(cli.config.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn missing_sim_dir_is_usage_error() {
        let err = Cli::try_parse_from(["cosim-gen", "stub.vhdl"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_everything_is_usage_error() {
        let err = Cli::try_parse_from(["cosim-gen"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::parse_from([
            "cosim-gen",
            "--dry-run",
            "--quiet",
            "--color",
            "never",
            "--config",
            "cfg/cosim.toml",
            "stub.vhdl",
            "sim",
        ]);
        assert!(cli.dry_run);
        assert!(cli.quiet);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.config, Some(PathBuf::from("cfg/cosim.toml")));
    }

    #[test]
    fn verbose_short_flag() {
        let cli = Cli::parse_from(["cosim-gen", "-v", "stub.vhdl", "sim"]);
        assert!(cli.verbose);
    }

    #[test]
    fn color_always_and_never() {
        let always = Cli::parse_from(["cosim-gen", "--color", "always", "a", "b"]);
        assert!(GlobalArgs::from_cli(&always).color);
        let never = Cli::parse_from(["cosim-gen", "--color", "never", "a", "b"]);
        assert!(!GlobalArgs::from_cli(&never).color);
    }

    #[test]
    fn log_filter_follows_flags() {
        let quiet = Cli::parse_from(["cosim-gen", "-q", "a", "b"]);
        assert_eq!(GlobalArgs::from_cli(&quiet).log_filter(), "error");
        let verbose = Cli::parse_from(["cosim-gen", "-q", "-v", "a", "b"]);
        assert_eq!(GlobalArgs::from_cli(&verbose).log_filter(), "debug");
        let plain = Cli::parse_from(["cosim-gen", "a", "b"]);
        assert_eq!(GlobalArgs::from_cli(&plain).log_filter(), "warn");
    }
}
