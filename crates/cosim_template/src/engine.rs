//! Composition of the wrapper and the two simulation scripts.

use crate::error::TemplateError;
use crate::template::{RenderContext, Template};
use crate::vocabulary;
use cosim_common::{AxiPort, ClockIndex, WidthField};
use cosim_config::GeneratorConfig;
use cosim_stub::{ResolvedInterfaces, StubDescriptor};

/// Period generic value of a clock the stub does not expose.
pub const DISABLED_CLOCK_PERIOD: i64 = -1;

/// The wrapper document split into its generated parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedWrapper {
    /// Banner and library clauses.
    pub header: String,
    /// Entity opening and the full generic list.
    pub generics: String,
    /// The stub's port list, copied verbatim.
    pub ports: String,
    /// Entity end, architecture declarations and the core's generic map.
    pub architecture_body: String,
    /// The port map with one connection fragment per present element.
    pub port_map_body: String,
    /// Clock and AXI reset assignments and the architecture end.
    pub architecture_tail: String,
}

impl RenderedWrapper {
    /// Stitches the parts into the final document.
    pub fn document(&self) -> String {
        [
            self.header.as_str(),
            &self.generics,
            &self.ports,
            &self.architecture_body,
            &self.port_map_body,
            &self.architecture_tail,
        ]
        .concat()
    }
}

/// Renders the generated documents from the fixed vocabulary.
pub struct TemplateEngine {
    header: Template,
    generics: Template,
    architecture: Template,
    port_map: Template,
    clock_connection: Template,
    clock_reset: Template,
    axi_connection: Template,
    irq_connection: Template,
    architecture_tail: Template,
    compile_script: Template,
    top_script: Template,
}

impl TemplateEngine {
    /// Builds the engine and indexes the placeholders of every template.
    pub fn new() -> Self {
        Self {
            header: Template::new("wrapper header", vocabulary::HEADER),
            generics: Template::new("wrapper generics", vocabulary::GENERICS),
            architecture: Template::new("wrapper architecture", vocabulary::ARCHITECTURE),
            port_map: Template::new("wrapper port map", vocabulary::PORT_MAP),
            clock_connection: Template::new("clock connection", vocabulary::CLOCK_CONNECTION),
            clock_reset: Template::new("clock reset", vocabulary::CLOCK_RESET),
            axi_connection: Template::new("AXI connection", vocabulary::AXI_CONNECTION),
            irq_connection: Template::new("interrupt connection", vocabulary::IRQ_CONNECTION),
            architecture_tail: Template::new("architecture tail", vocabulary::ARCHITECTURE_TAIL),
            compile_script: Template::new("compile script", vocabulary::COMPILE_SCRIPT),
            top_script: Template::new("top script", vocabulary::TOP_SCRIPT),
        }
    }

    /// Renders the wrapper parts for a parsed stub.
    ///
    /// Connection fragments are appended in a fixed order: clocks 0 to 3,
    /// AXI interfaces in canonical order, then the interrupt.
    pub fn render(
        &self,
        stub: &StubDescriptor,
        resolved: &ResolvedInterfaces,
        config: &GeneratorConfig,
    ) -> Result<RenderedWrapper, TemplateError> {
        let entity = RenderContext::new().with("ENTITY", stub.name());
        let header = self.header.render(&entity)?;
        let generics = self
            .generics
            .render(&generics_context(stub, resolved, config))?;
        let architecture_body = self.architecture.render(&entity)?;

        let mut connections = String::new();
        let mut resets = String::new();
        for clock in stub.clocks() {
            let ctx = RenderContext::new().with("INDEX", clock.index().to_string());
            connections.push_str(&self.clock_connection.render(&ctx)?);
            resets.push_str(&self.clock_reset.render(&ctx)?);
        }
        for detected in stub.axi_ports() {
            let ctx = RenderContext::new()
                .with("PORT", detected.port.name())
                .with("port", detected.port.lower_name());
            connections.push_str(&self.axi_connection.render(&ctx)?);
        }
        if stub.has_interrupt() {
            connections.push_str(&self.irq_connection.render(&RenderContext::new())?);
        }
        log::debug!(
            "wrapper {}: {} clock, {} AXI and {} interrupt fragments",
            stub.name(),
            stub.clocks().count(),
            stub.axi_ports().len(),
            u8::from(stub.has_interrupt()),
        );

        let port_map_body = self
            .port_map
            .render(&RenderContext::new().with("CONNECTIONS", connections))?;
        let architecture_tail = self
            .architecture_tail
            .render(&RenderContext::new().with("CLOCK_RESETS", resets))?;

        Ok(RenderedWrapper {
            header,
            generics,
            ports: stub.port_block().to_string(),
            architecture_body,
            port_map_body,
            architecture_tail,
        })
    }

    /// Renders the complete wrapper document.
    pub fn render_wrapper(
        &self,
        stub: &StubDescriptor,
        resolved: &ResolvedInterfaces,
        config: &GeneratorConfig,
    ) -> Result<String, TemplateError> {
        Ok(self.render(stub, resolved, config)?.document())
    }

    /// Renders the co-simulation compile script.
    ///
    /// The SystemC compile line carries the enable flag and widths of every
    /// present AXI interface as `-D` definitions.
    pub fn render_compile_script(
        &self,
        stub: &StubDescriptor,
        resolved: &ResolvedInterfaces,
        config: &GeneratorConfig,
    ) -> Result<String, TemplateError> {
        let defines: String = resolved
            .build_defines()
            .iter()
            .map(|d| format!(" {d}"))
            .collect();
        let ctx = RenderContext::new()
            .with("LIBRARY", config.output.library.as_str())
            .with("CXX_DEFINES", defines)
            .with("WRAPPER_FILE", wrapper_file_name(stub))
            .with("QEMU_SYNC_QUANTUM", config.qemu.sync_quantum.to_string());
        self.compile_script.render(&ctx)
    }

    /// Renders the top-level simulation script for design `top`.
    pub fn render_top_script(
        &self,
        top: &str,
        config: &GeneratorConfig,
    ) -> Result<String, TemplateError> {
        let ctx = RenderContext::new()
            .with("TOP", top)
            .with("COMPILE_SCRIPT", config.output.compile_script.as_str())
            .with("ELABORATE_SUFFIX", config.output.elaborate_suffix.as_str())
            .with("LIBRARY", config.output.library.as_str());
        self.top_script.render(&ctx)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// File name of the generated wrapper, `<entity>.vhd`.
pub fn wrapper_file_name(stub: &StubDescriptor) -> String {
    format!("{}.vhd", stub.name())
}

fn generics_context(
    stub: &StubDescriptor,
    resolved: &ResolvedInterfaces,
    config: &GeneratorConfig,
) -> RenderContext {
    let mut ctx = RenderContext::new()
        .with("ENTITY", stub.name())
        .with("QEMU_SOCKET_PATH", config.qemu.socket_path.replace('"', "\"\""))
        .with("QEMU_SYNC_QUANTUM", config.qemu.sync_quantum.to_string());

    for clock in ClockIndex::ALL {
        let period = if stub.has_clock(clock) {
            i64::from(config.clocks.period_ns)
        } else {
            DISABLED_CLOCK_PERIOD
        };
        ctx.set(format!("FCLK_CLK{}_PERIOD", clock.index()), period.to_string());
    }

    for port in AxiPort::ALL {
        let enabled = u8::from(resolved.is_enabled(port));
        ctx.set(format!("{port}_ENABLE"), enabled.to_string());
        let params = resolved.params_for(port);
        for field in WidthField::ALL {
            ctx.set(
                format!("{port}_{}", field.suffix()),
                params.get(field).to_string(),
            );
        }
    }
    ctx
}
