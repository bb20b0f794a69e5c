//! Structural scan of a PS7 stub.

use crate::descriptor::{DetectedPort, StubDescriptor};
use crate::error::StubError;
use cosim_common::{AxiPort, ClockIndex};
use cosim_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Label};
use cosim_source::{SourceFile, Span};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Substring every PS7 stub contains in its entity name.
pub const PS7_MARKER: &str = "system7_0_0";

const INTERRUPT_SIGNAL: &str = "IRQ_F2P";

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bentity\s+([A-Za-z0-9_]*7_0_0)\s+is\b").expect("entity pattern is valid")
});

static ENTITY_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*entity\s+([A-Za-z0-9_]*7_0_0)\s+is\b").expect("entity pattern is valid")
});

static AXI_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[MS]_AXI_[GH]P[0-3]").expect("interface pattern is valid"));

static PORT_LIST_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+\);").expect("terminator pattern is valid"));

/// Parses a stub into a [`StubDescriptor`].
///
/// Names that look like AXI interfaces but are not one of the eight PS7
/// interfaces (`M_AXI_HP0`, `S_AXI_GP3`, ...) are reported to `sink` as
/// warnings and otherwise ignored.
pub fn parse(source: &SourceFile, sink: &DiagnosticSink) -> Result<StubDescriptor, StubError> {
    let text = source.content.as_str();

    if !text.contains(PS7_MARKER) {
        return Err(StubError::MissingMarker {
            path: source.path.clone(),
        });
    }

    let caps = ENTITY_RE
        .captures(text)
        .ok_or_else(|| StubError::MissingEntity {
            path: source.path.clone(),
        })?;
    let name = caps[1].to_string();
    let (entity_span, port_block) = extract_port_block(source, &name)?;

    let clocks: BTreeSet<ClockIndex> = ClockIndex::ALL
        .into_iter()
        .filter(|c| text.contains(&c.signal_name()))
        .collect();
    let has_interrupt = text.contains(INTERRUPT_SIGNAL);

    let mut found: BTreeMap<AxiPort, Span> = BTreeMap::new();
    let mut unknown: BTreeMap<&str, Span> = BTreeMap::new();
    for m in AXI_NAME_RE.find_iter(text) {
        let span = Span::from_range(source.id, m.range());
        match AxiPort::from_name(m.as_str()) {
            Some(port) => {
                found.entry(port).or_insert(span);
            }
            None => {
                unknown.entry(m.as_str()).or_insert(span);
            }
        }
    }
    let entity = name.as_str();
    for (name, span) in unknown {
        log::warn!("ignoring unknown interface name {name}");
        sink.emit(
            Diagnostic::warning(
                DiagnosticCode::warning(201),
                format!("`{name}` is not a processing system AXI interface"),
                span,
            )
            .with_label(Label::primary(span, "ignored"))
            .with_label(Label::secondary(
                entity_span,
                format!("while scanning the ports of `{entity}`"),
            ))
            .with_note("known interfaces are M_AXI_GP0-1, S_AXI_GP0-1 and S_AXI_HP0-3"),
        );
    }
    let axi_ports: Vec<DetectedPort> = found
        .into_iter()
        .map(|(port, first_mention)| DetectedPort {
            port,
            first_mention,
        })
        .collect();

    log::debug!(
        "stub entity {name}: clocks {:?}, interrupt {has_interrupt}, axi {:?}",
        clocks.iter().map(|c| c.index()).collect::<Vec<_>>(),
        axi_ports.iter().map(|d| d.port.name()).collect::<Vec<_>>(),
    );

    Ok(StubDescriptor {
        file: source.id,
        name,
        entity_span,
        port_block,
        clocks,
        axi_ports,
        has_interrupt,
    })
}

/// Collects the lines after the entity declaration up to and including the
/// first indented `);` line.
fn extract_port_block(source: &SourceFile, name: &str) -> Result<(Span, String), StubError> {
    let mut lines = source.content.split_inclusive('\n').scan(0usize, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        Some((start, raw.trim_end_matches(['\n', '\r'])))
    });

    let entity_span = lines
        .by_ref()
        .find(|(_, line)| {
            ENTITY_LINE_RE
                .captures(line)
                .is_some_and(|caps| &caps[1] == name)
        })
        .map(|(start, line)| Span::from_range(source.id, start..start + line.len()))
        .ok_or_else(|| StubError::MissingEntity {
            path: source.path.clone(),
        })?;

    let mut block = String::new();
    for (_, line) in lines {
        block.push_str(line);
        block.push('\n');
        if PORT_LIST_END_RE.is_match(line) {
            return Ok((entity_span, block));
        }
    }

    Err(StubError::UnterminatedPortList {
        entity: name.to_string(),
        span: entity_span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{load, GP0_STUB};
    use pretty_assertions::assert_eq;

    fn parse_text(text: &str) -> (Result<StubDescriptor, StubError>, DiagnosticSink) {
        let (db, id) = load(text);
        let sink = DiagnosticSink::new();
        let result = parse(db.get_file(id), &sink);
        (result, sink)
    }

    #[test]
    fn parses_gp0_stub() {
        let (result, sink) = parse_text(GP0_STUB);
        let desc = result.unwrap();
        assert_eq!(desc.name(), "design_1_processing_system7_0_0");
        assert!(desc.has_interrupt());
        assert_eq!(desc.clocks().collect::<Vec<_>>(), vec![ClockIndex::ALL[0]]);
        assert_eq!(
            desc.axi_ports().iter().map(|d| d.port).collect::<Vec<_>>(),
            vec![AxiPort::MGp0]
        );
        assert!(!sink.has_errors());
        assert_eq!(sink.warning_count(), 0);
    }

    #[test]
    fn port_block_is_verbatim_through_terminator() {
        let (result, _) = parse_text(GP0_STUB);
        let desc = result.unwrap();
        let block = desc.port_block();
        assert!(block.starts_with("  Port ( \n    M_AXI_GP0_ARVALID : out STD_LOGIC;\n"));
        assert!(block.ends_with("    PS_PORB : inout STD_LOGIC\n  );\n"));
        assert!(!block.contains("end design_1"));
    }

    #[test]
    fn crlf_lines_are_normalized() {
        let text = GP0_STUB.replace('\n', "\r\n");
        let (result, _) = parse_text(&text);
        let desc = result.unwrap();
        assert!(!desc.port_block().contains('\r'));
        assert!(desc.port_block().ends_with("  );\n"));
    }

    #[test]
    fn entity_span_covers_declaration_line() {
        let (db, id) = load(GP0_STUB);
        let sink = DiagnosticSink::new();
        let desc = parse(db.get_file(id), &sink).unwrap();
        assert_eq!(
            db.snippet(desc.entity_span()),
            "entity design_1_processing_system7_0_0 is"
        );
    }

    #[test]
    fn axi_ports_sorted_canonically() {
        let text = GP0_STUB.replace(
            "    FCLK_CLK0 : out STD_LOGIC;\n",
            "    FCLK_CLK0 : out STD_LOGIC;\n    S_AXI_HP2_RREADY : in STD_LOGIC;\n    S_AXI_GP1_ACLK : in STD_LOGIC;\n",
        );
        let (result, _) = parse_text(&text);
        let ports: Vec<AxiPort> = result.unwrap().axi_ports().iter().map(|d| d.port).collect();
        assert_eq!(ports, vec![AxiPort::MGp0, AxiPort::SGp1, AxiPort::SHp2]);
    }

    #[test]
    fn first_mention_is_recorded() {
        let (db, id) = load(GP0_STUB);
        let sink = DiagnosticSink::new();
        let desc = parse(db.get_file(id), &sink).unwrap();
        let span = desc.axi_ports()[0].first_mention;
        assert_eq!(db.snippet(span), "M_AXI_GP0");
        assert_eq!(db.resolve_span(span).start_line, 6);
    }

    #[test]
    fn clocks_detected_by_substring() {
        let text = GP0_STUB.replace(
            "    FCLK_CLK0 : out STD_LOGIC;\n",
            "    FCLK_CLK3 : out STD_LOGIC;\n    FCLK_CLK1 : out STD_LOGIC;\n",
        );
        let (result, _) = parse_text(&text);
        let desc = result.unwrap();
        let clocks: Vec<u8> = desc.clocks().map(|c| c.index()).collect();
        assert_eq!(clocks, vec![1, 3]);
    }

    #[test]
    fn interrupt_absent() {
        let text = GP0_STUB.replace("    IRQ_F2P : in STD_LOGIC_VECTOR ( 0 to 0 );\n", "");
        let (result, _) = parse_text(&text);
        assert!(!result.unwrap().has_interrupt());
    }

    #[test]
    fn unknown_interface_warns_once() {
        let text = GP0_STUB.replace(
            "    FCLK_CLK0 : out STD_LOGIC;\n",
            "    FCLK_CLK0 : out STD_LOGIC;\n    M_AXI_HP0_ACLK : in STD_LOGIC;\n    M_AXI_HP0_RREADY : out STD_LOGIC;\n",
        );
        let (result, sink) = parse_text(&text);
        let desc = result.unwrap();
        assert_eq!(desc.axi_ports().len(), 1);
        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.to_string(), "W201");
        assert!(diags[0].message.contains("M_AXI_HP0"));
    }

    #[test]
    fn missing_marker() {
        let text = GP0_STUB.replace("system7_0_0", "system8_1_0");
        let (result, _) = parse_text(&text);
        assert!(matches!(result, Err(StubError::MissingMarker { .. })));
    }

    #[test]
    fn marker_without_entity() {
        let (result, _) = parse_text("-- wraps design_1_processing_system7_0_0\n");
        assert!(matches!(result, Err(StubError::MissingEntity { .. })));
    }

    #[test]
    fn unterminated_port_list() {
        let text = GP0_STUB.replace("  );\n", "");
        let (result, _) = parse_text(&text);
        match result {
            Err(StubError::UnterminatedPortList { entity, .. }) => {
                assert_eq!(entity, "design_1_processing_system7_0_0");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
