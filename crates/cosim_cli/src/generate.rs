//! The generation pipeline: load, parse, resolve, render, commit.

use cosim_config::ConfigError;
use cosim_diagnostics::{
    Diagnostic, DiagnosticCode, DiagnosticRenderer, DiagnosticSink, TerminalRenderer,
};
use cosim_emit::build_artifacts;
use cosim_source::{SourceDb, Span};
use cosim_template::TemplateEngine;

use crate::{Cli, GlobalArgs};

/// Runs one generation.
///
/// Returns exit code 0 when all files were written (or listed, with
/// `--dry-run`) and 1 when a diagnostic error stopped the run. No file is
/// written unless every document rendered.
pub fn run(cli: &Cli, global: &GlobalArgs) -> i32 {
    let mut source_db = SourceDb::new();
    let sink = DiagnosticSink::new();
    let renderer = TerminalRenderer::new(global.color);

    let outcome = generate(cli, global, &mut source_db, &sink);

    for diag in sink.take_all() {
        eprint!("{}", renderer.render(&diag, &source_db));
    }
    match outcome {
        Ok(()) => 0,
        Err(diag) => {
            eprint!("{}", renderer.render(&diag, &source_db));
            1
        }
    }
}

fn generate(
    cli: &Cli,
    global: &GlobalArgs,
    source_db: &mut SourceDb,
    sink: &DiagnosticSink,
) -> Result<(), Diagnostic> {
    let config = cosim_config::load_for_sim_dir(&cli.sim_dir, cli.config.as_deref())
        .map_err(|e| config_diagnostic(&e))?;

    let file_id = source_db.load_file(&cli.stub).map_err(|e| {
        Diagnostic::error(
            DiagnosticCode::error(401),
            format!("cannot read stub {}: {e}", cli.stub.display()),
            Span::DUMMY,
        )
    })?;
    let source = source_db.get_file(file_id);
    log::debug!(
        "loaded {} ({} bytes, {})",
        source.path.display(),
        source.content.len(),
        source.content_hash.short()
    );

    let stub = cosim_stub::parse(source, sink).map_err(|e| e.to_diagnostic())?;
    if !global.quiet {
        eprintln!("   Generating co-simulation files for {}", stub.name());
    }
    let resolved = cosim_stub::resolve_all(source, &stub).map_err(|e| e.to_diagnostic())?;

    let engine = TemplateEngine::new();
    let artifacts = build_artifacts(&engine, &stub, &resolved, &cli.sim_dir, &config)
        .map_err(|e| e.to_diagnostic())?;

    if cli.dry_run {
        for (artifact, path) in artifacts.iter().zip(artifacts.plan(&cli.sim_dir)) {
            println!(
                "{} ({}, {} bytes, {})",
                path.display(),
                artifact.kind,
                artifact.contents.len(),
                artifact.hash.short()
            );
        }
        return Ok(());
    }

    let written = artifacts
        .commit(&cli.sim_dir)
        .map_err(|e| e.to_diagnostic())?;
    if !global.quiet {
        for path in &written {
            eprintln!("      Wrote {}", path.display());
        }
    }
    Ok(())
}

fn config_diagnostic(err: &ConfigError) -> Diagnostic {
    let code = match err {
        ConfigError::Io { .. } => DiagnosticCode::error(401),
        ConfigError::ParseError(_) | ConfigError::Invalid { .. } => DiagnosticCode::error(402),
    };
    Diagnostic::error(code, err.to_string(), Span::DUMMY)
}
