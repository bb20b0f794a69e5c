//! Assembly of the three output documents.

use crate::artifact::{Artifact, ArtifactKind, ArtifactSet};
use crate::discover::discover_top_name;
use crate::error::EmitError;
use cosim_config::GeneratorConfig;
use cosim_stub::{ResolvedInterfaces, StubDescriptor};
use cosim_template::{wrapper_file_name, TemplateEngine};
use std::path::Path;

/// Renders the wrapper, written as `<entity>.vhd`.
pub fn emit_wrapper(
    engine: &TemplateEngine,
    stub: &StubDescriptor,
    resolved: &ResolvedInterfaces,
    config: &GeneratorConfig,
) -> Result<Artifact, EmitError> {
    let contents = engine.render_wrapper(stub, resolved, config)?;
    Ok(Artifact::new(
        ArtifactKind::Wrapper,
        wrapper_file_name(stub),
        contents,
    ))
}

/// Renders the co-simulation compile script.
pub fn emit_compile_script(
    engine: &TemplateEngine,
    stub: &StubDescriptor,
    resolved: &ResolvedInterfaces,
    config: &GeneratorConfig,
) -> Result<Artifact, EmitError> {
    let contents = engine.render_compile_script(stub, resolved, config)?;
    Ok(Artifact::new(
        ArtifactKind::CompileScript,
        config.output.compile_script.as_str(),
        contents,
    ))
}

/// Renders the top-level script for the design found in `sim_dir`.
pub fn emit_top_script(
    engine: &TemplateEngine,
    sim_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Artifact, EmitError> {
    let top = discover_top_name(sim_dir, &config.output.elaborate_suffix)?;
    let contents = engine.render_top_script(&top, config)?;
    Ok(Artifact::new(
        ArtifactKind::TopScript,
        config.output.top_script.as_str(),
        contents,
    ))
}

/// Renders all three documents. Nothing is written; see
/// [`ArtifactSet::commit`].
pub fn build_artifacts(
    engine: &TemplateEngine,
    stub: &StubDescriptor,
    resolved: &ResolvedInterfaces,
    sim_dir: &Path,
    config: &GeneratorConfig,
) -> Result<ArtifactSet, EmitError> {
    ArtifactSet::new(vec![
        emit_wrapper(engine, stub, resolved, config)?,
        emit_compile_script(engine, stub, resolved, config)?,
        emit_top_script(engine, sim_dir, config)?,
    ])
}
