//! Conformance test helpers for the co-simulation generator.
//!
//! [`StubBuilder`] writes processing system stubs laid out the way the
//! vendor tool writes them, [`SimDir`] stands in for a simulation export
//! directory, and [`run_pipeline`] drives parse, resolve and render exactly
//! as the command-line tool does.

#![warn(missing_docs)]

use std::path::{Path, PathBuf};

use cosim_common::{AxiParams, AxiPort, AxiRole};
use cosim_config::GeneratorConfig;
use cosim_diagnostics::{Diagnostic, DiagnosticSink};
use cosim_emit::{build_artifacts, ArtifactKind, ArtifactSet};
use cosim_source::SourceDb;
use cosim_stub::{ResolvedInterfaces, StubDescriptor};
use cosim_template::TemplateEngine;

/// Entity name used by default in built stubs.
pub const DEFAULT_ENTITY: &str = "design_1_processing_system7_0_0";

/// Direction of a signal as seen from an AXI master.
#[derive(Clone, Copy)]
enum Dir {
    MasterOut,
    MasterIn,
    Input,
    Output,
}

/// Builds a processing system stub in the vendor's layout.
#[derive(Clone, Debug)]
pub struct StubBuilder {
    entity: String,
    clocks: Vec<u8>,
    axi: Vec<(AxiPort, AxiParams)>,
    interrupt: bool,
    omitted: Vec<String>,
    terminated: bool,
}

impl StubBuilder {
    /// A stub for `entity` with only the fixed PS pins.
    pub fn new(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            clocks: Vec::new(),
            axi: Vec::new(),
            interrupt: false,
            omitted: Vec::new(),
            terminated: true,
        }
    }

    /// Adds fabric clock `index` and its reset.
    pub fn clock(mut self, index: u8) -> Self {
        self.clocks.push(index);
        self
    }

    /// Adds `port` with its default widths.
    pub fn axi(self, port: AxiPort) -> Self {
        let params = *port.default_params();
        self.axi_with(port, params)
    }

    /// Adds `port` with explicit widths.
    pub fn axi_with(mut self, port: AxiPort, params: AxiParams) -> Self {
        self.axi.push((port, params));
        self
    }

    /// Adds the `IRQ_F2P` interrupt vector.
    pub fn interrupt(mut self) -> Self {
        self.interrupt = true;
        self
    }

    /// Drops the declaration of `signal` from the port list.
    pub fn without_signal(mut self, signal: &str) -> Self {
        self.omitted.push(signal.to_string());
        self
    }

    /// Drops the closing `);` line of the port list.
    pub fn unterminated(mut self) -> Self {
        self.terminated = false;
        self
    }

    /// Port declarations in stub order, without trailing separators.
    fn declarations(&self) -> Vec<(String, String)> {
        let mut decls = Vec::new();
        for &(port, params) in &self.axi {
            for (suffix, dir, ty) in axi_signals(&params) {
                let dir = match (dir, port.role()) {
                    (Dir::MasterOut, AxiRole::Master) | (Dir::MasterIn, AxiRole::Slave) => "out",
                    (Dir::MasterIn, AxiRole::Master) | (Dir::MasterOut, AxiRole::Slave) => "in",
                    (Dir::Input, _) => "in",
                    (Dir::Output, _) => "out",
                };
                decls.push((format!("{port}_{suffix}"), format!("{dir} {ty}")));
            }
        }
        if self.interrupt {
            decls.push((
                "IRQ_F2P".to_string(),
                "in STD_LOGIC_VECTOR ( 0 to 0 )".to_string(),
            ));
        }
        for &index in &self.clocks {
            decls.push((format!("FCLK_CLK{index}"), "out STD_LOGIC".to_string()));
            decls.push((format!("FCLK_RESET{index}_N"), "out STD_LOGIC".to_string()));
        }
        for (name, ty) in [
            ("MIO", "inout STD_LOGIC_VECTOR ( 53 downto 0 )"),
            ("DDR_CAS_n", "inout STD_LOGIC"),
            ("DDR_Addr", "inout STD_LOGIC_VECTOR ( 14 downto 0 )"),
            ("DDR_DQ", "inout STD_LOGIC_VECTOR ( 31 downto 0 )"),
            ("PS_SRSTB", "inout STD_LOGIC"),
            ("PS_CLK", "inout STD_LOGIC"),
            ("PS_PORB", "inout STD_LOGIC"),
        ] {
            decls.push((name.to_string(), ty.to_string()));
        }
        decls.retain(|(name, _)| !self.omitted.contains(name));
        decls
    }

    /// The verbatim port list the generator is expected to copy.
    pub fn port_block(&self) -> String {
        let decls = self.declarations();
        let mut out = String::from("  Port ( \n");
        for (i, (name, ty)) in decls.iter().enumerate() {
            let sep = if i + 1 == decls.len() { "" } else { ";" };
            out.push_str(&format!("    {name} : {ty}{sep}\n"));
        }
        if self.terminated {
            out.push_str("  );\n");
        }
        out
    }

    /// Renders the whole stub file.
    pub fn build(&self) -> String {
        let entity = &self.entity;
        let pins: Vec<String> = self
            .declarations()
            .into_iter()
            .map(|(name, ty)| match ty.split_once("( ") {
                Some((_, range)) => {
                    let high = range.split_whitespace().next().unwrap_or("0");
                    format!("{name}[{high}:0]")
                }
                None => name,
            })
            .collect();
        format!(
            "-- Stub declaration of {entity}.\n\
             -- Synthesis black box; do not modify.\n\
             library IEEE;\n\
             use IEEE.STD_LOGIC_1164.ALL;\n\
             \n\
             entity {entity} is\n\
             {ports}\n\
             end {entity};\n\
             \n\
             architecture stub of {entity} is\n\
             attribute syn_black_box : boolean;\n\
             attribute black_box_pad_pin : string;\n\
             attribute syn_black_box of stub : architecture is true;\n\
             attribute black_box_pad_pin of stub : architecture is \"{pins}\";\n\
             attribute X_CORE_INFO : string;\n\
             attribute X_CORE_INFO of stub : architecture is \"processing_system7_v5_5_processing_system7,Vivado 2019.2\";\n\
             begin\n\
             end;\n",
            ports = self.port_block(),
            pins = pins.join(","),
        )
    }
}

impl Default for StubBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ENTITY)
    }
}

fn vector(width: u32) -> String {
    format!("STD_LOGIC_VECTOR ( {} downto 0 )", width.saturating_sub(1))
}

fn axi_signals(p: &AxiParams) -> Vec<(&'static str, Dir, String)> {
    let bit = || "STD_LOGIC".to_string();
    vec![
        ("ARVALID", Dir::MasterOut, bit()),
        ("AWVALID", Dir::MasterOut, bit()),
        ("BREADY", Dir::MasterOut, bit()),
        ("RREADY", Dir::MasterOut, bit()),
        ("WLAST", Dir::MasterOut, bit()),
        ("WVALID", Dir::MasterOut, bit()),
        ("ARID", Dir::MasterOut, vector(p.id_width)),
        ("AWID", Dir::MasterOut, vector(p.id_width)),
        ("WID", Dir::MasterOut, vector(p.id_width)),
        ("ARBURST", Dir::MasterOut, vector(2)),
        ("ARLOCK", Dir::MasterOut, vector(p.axlock_width)),
        ("ARSIZE", Dir::MasterOut, vector(3)),
        ("AWBURST", Dir::MasterOut, vector(2)),
        ("AWLOCK", Dir::MasterOut, vector(p.axlock_width)),
        ("AWSIZE", Dir::MasterOut, vector(3)),
        ("ARPROT", Dir::MasterOut, vector(3)),
        ("AWPROT", Dir::MasterOut, vector(3)),
        ("ARADDR", Dir::MasterOut, vector(p.addr_width)),
        ("AWADDR", Dir::MasterOut, vector(p.addr_width)),
        ("WDATA", Dir::MasterOut, vector(p.data_width)),
        ("ARCACHE", Dir::MasterOut, vector(4)),
        ("ARLEN", Dir::MasterOut, vector(p.axlen_width)),
        ("ARQOS", Dir::MasterOut, vector(4)),
        ("AWCACHE", Dir::MasterOut, vector(4)),
        ("AWLEN", Dir::MasterOut, vector(p.axlen_width)),
        ("AWQOS", Dir::MasterOut, vector(4)),
        ("WSTRB", Dir::MasterOut, vector(p.data_width / 8)),
        ("ACLK", Dir::Input, bit()),
        ("ARESETN", Dir::Output, bit()),
        ("ARREADY", Dir::MasterIn, bit()),
        ("AWREADY", Dir::MasterIn, bit()),
        ("BVALID", Dir::MasterIn, bit()),
        ("RLAST", Dir::MasterIn, bit()),
        ("RVALID", Dir::MasterIn, bit()),
        ("WREADY", Dir::MasterIn, bit()),
        ("BID", Dir::MasterIn, vector(p.id_width)),
        ("RID", Dir::MasterIn, vector(p.id_width)),
        ("BRESP", Dir::MasterIn, vector(2)),
        ("RRESP", Dir::MasterIn, vector(2)),
        ("RDATA", Dir::MasterIn, vector(p.data_width)),
    ]
}

/// A temporary simulation directory.
pub struct SimDir {
    dir: tempfile::TempDir,
}

impl SimDir {
    /// An empty directory.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temporary directory"),
        }
    }

    /// A directory holding the vendor scripts of design `top`.
    pub fn with_top(top: &str) -> Self {
        let sim = Self::empty();
        for suffix in ["_compile.do", "_elaborate.do", "_simulate.do"] {
            sim.touch(&format!("{top}{suffix}"));
        }
        sim
    }

    /// Creates an empty file named `name`.
    pub fn touch(&self, name: &str) {
        std::fs::write(self.dir.path().join(name), "").expect("create file");
    }

    /// The directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the directory.
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Sorted names of the files in the directory.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("read directory")
            .filter_map(|e| e.ok()?.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }

    /// Reads `name` as text.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.join(name)).expect("read file")
    }
}

/// Everything a successful run produced.
pub struct Generated {
    /// The parsed stub.
    pub descriptor: StubDescriptor,
    /// Resolved AXI widths.
    pub resolved: ResolvedInterfaces,
    /// The rendered documents.
    pub artifacts: ArtifactSet,
    /// Warnings raised along the way.
    pub warnings: Vec<Diagnostic>,
}

impl Generated {
    /// Text of the artifact of `kind`.
    pub fn text(&self, kind: ArtifactKind) -> &str {
        self.artifacts
            .get(kind)
            .map_or("", |a| a.contents.as_str())
    }

    /// The wrapper document.
    pub fn wrapper(&self) -> &str {
        self.text(ArtifactKind::Wrapper)
    }

    /// The compile script.
    pub fn compile_script(&self) -> &str {
        self.text(ArtifactKind::CompileScript)
    }

    /// The top-level script.
    pub fn top_script(&self) -> &str {
        self.text(ArtifactKind::TopScript)
    }
}

/// Parses, resolves and renders `stub_text` for `sim_dir` without writing
/// anything. A failure is returned as the diagnostic the tool would print.
pub fn run_pipeline(
    stub_text: &str,
    sim_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Generated, Diagnostic> {
    let mut db = SourceDb::new();
    let id = db.add_source("design_1_processing_system7_0_0_stub.vhdl", stub_text.to_string());
    let source = db.get_file(id);
    let sink = DiagnosticSink::new();

    let descriptor = cosim_stub::parse(source, &sink).map_err(|e| e.to_diagnostic())?;
    let resolved =
        cosim_stub::resolve_all(source, &descriptor).map_err(|e| e.to_diagnostic())?;
    let artifacts = build_artifacts(
        &TemplateEngine::new(),
        &descriptor,
        &resolved,
        sim_dir,
        config,
    )
    .map_err(|e| e.to_diagnostic())?;

    Ok(Generated {
        descriptor,
        resolved,
        artifacts,
        warnings: sink.take_all(),
    })
}

/// Runs the pipeline with default settings against a directory exported
/// for design `top`. Panics if generation fails.
pub fn generate(stub_text: &str, top: &str) -> Generated {
    let sim = SimDir::with_top(top);
    match run_pipeline(stub_text, sim.path(), &GeneratorConfig::default()) {
        Ok(generated) => generated,
        Err(diag) => panic!("generation failed: {}", diag.message),
    }
}

/// Returns the default value of generic `name` in a wrapper document.
pub fn generic_value<'a>(wrapper: &'a str, name: &str) -> Option<&'a str> {
    wrapper.lines().find_map(|line| {
        let (lhs, rhs) = line.split_once(":=")?;
        let (generic, _) = lhs.split_once(':')?;
        (generic.trim() == name).then(|| rhs.trim().trim_end_matches(';'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_terminates_port_list() {
        let stub = StubBuilder::default().clock(0).build();
        assert!(stub.contains("entity design_1_processing_system7_0_0 is\n  Port ( \n"));
        assert!(stub.contains("    PS_PORB : inout STD_LOGIC\n  );\n\nend design_1"));
    }

    #[test]
    fn builder_directions_follow_role() {
        let stub = StubBuilder::default()
            .axi(AxiPort::MGp0)
            .axi(AxiPort::SHp0)
            .build();
        assert!(stub.contains("    M_AXI_GP0_ARADDR : out STD_LOGIC_VECTOR ( 31 downto 0 );\n"));
        assert!(stub.contains("    S_AXI_HP0_ARADDR : in STD_LOGIC_VECTOR ( 31 downto 0 );\n"));
        assert!(stub.contains("    S_AXI_HP0_RDATA : out STD_LOGIC_VECTOR ( 63 downto 0 );\n"));
        assert!(stub.contains("M_AXI_GP0_RID[11:0]"));
    }

    #[test]
    fn generic_value_lookup() {
        let text = "        M_AXI_GP0_ENABLE_G       : integer := 1;\n        S_AXI_HP3_AXLOCK_WIDTH_G : integer := 2\n";
        assert_eq!(generic_value(text, "M_AXI_GP0_ENABLE_G"), Some("1"));
        assert_eq!(generic_value(text, "S_AXI_HP3_AXLOCK_WIDTH_G"), Some("2"));
        assert_eq!(generic_value(text, "M_AXI_GP1_ENABLE_G"), None);
    }
}
