//! The immutable summary of a parsed stub.

use cosim_common::{AxiPort, ClockIndex};
use cosim_source::{FileId, Span};
use std::collections::BTreeSet;

/// An AXI interface found in the stub, with the location of its first
/// mention for diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DetectedPort {
    /// The interface.
    pub port: AxiPort,
    /// Where the interface name first appears.
    pub first_mention: Span,
}

/// What a stub declares.
///
/// Built once by [`parse`](crate::parse) and read-only afterwards. The AXI
/// interfaces are kept in canonical order regardless of where they appear
/// in the stub text.
#[derive(Clone, Debug)]
pub struct StubDescriptor {
    pub(crate) file: FileId,
    pub(crate) name: String,
    pub(crate) entity_span: Span,
    pub(crate) port_block: String,
    pub(crate) clocks: BTreeSet<ClockIndex>,
    pub(crate) axi_ports: Vec<DetectedPort>,
    pub(crate) has_interrupt: bool,
}

impl StubDescriptor {
    /// The file this descriptor was parsed from.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// The PS7 entity name, e.g. `design_1_processing_system7_0_0`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entity declaration line.
    pub fn entity_span(&self) -> Span {
        self.entity_span
    }

    /// The port list, line by line up to and including its closing `);`
    /// line. Each line ends in `\n`.
    pub fn port_block(&self) -> &str {
        &self.port_block
    }

    /// Whether the stub exposes fabric clock `clock`.
    pub fn has_clock(&self, clock: ClockIndex) -> bool {
        self.clocks.contains(&clock)
    }

    /// The present fabric clocks in ascending order.
    pub fn clocks(&self) -> impl Iterator<Item = ClockIndex> + '_ {
        self.clocks.iter().copied()
    }

    /// The present AXI interfaces in canonical order.
    pub fn axi_ports(&self) -> &[DetectedPort] {
        &self.axi_ports
    }

    /// Whether the stub exposes `port`.
    pub fn has_axi(&self, port: AxiPort) -> bool {
        self.axi_ports.iter().any(|d| d.port == port)
    }

    /// Whether the stub exposes the `IRQ_F2P` interrupt vector.
    pub fn has_interrupt(&self) -> bool {
        self.has_interrupt
    }
}
