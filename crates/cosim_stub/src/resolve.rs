//! AXI width resolution from the stub's vector declarations.

use crate::descriptor::StubDescriptor;
use crate::error::StubError;
use cosim_common::{AxiParams, AxiPort, WidthField};
use cosim_source::{SourceFile, Span};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// `<NAME> : in|out <type> ( <high> downto ...` within one declaration.
static VECTOR_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z][A-Za-z0-9_]*)\s*:\s*(?:in|out)\s+[^;\n]*?\(\s*([0-9]+)\s+downto")
        .expect("vector declaration pattern is valid")
});

/// The width parameters of one interface as read from the stub.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AxiInterfaceParams {
    /// The interface.
    pub port: AxiPort,
    /// Its widths.
    pub params: AxiParams,
}

/// A `-D<flag>=<value>` definition passed to the SystemC compile.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BuildDefine {
    /// The macro name, e.g. `__S_AXI_HP0_DATA_WIDTH__`.
    pub flag: String,
    /// The macro value.
    pub value: u32,
}

impl fmt::Display for BuildDefine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-D{}={}", self.flag, self.value)
    }
}

/// Descending vector declarations of a stub, keyed by signal name.
struct VectorIndex<'a> {
    decls: BTreeMap<&'a str, (&'a str, Span)>,
}

impl<'a> VectorIndex<'a> {
    fn build(source: &'a SourceFile) -> Self {
        let mut decls = BTreeMap::new();
        for caps in VECTOR_DECL_RE.captures_iter(&source.content) {
            let (Some(name), Some(high), Some(whole)) = (caps.get(1), caps.get(2), caps.get(0))
            else {
                continue;
            };
            decls
                .entry(name.as_str())
                .or_insert((high.as_str(), Span::from_range(source.id, whole.range())));
        }
        Self { decls }
    }

    fn width(&self, port: AxiPort, field: WidthField, mention: Span) -> Result<u32, StubError> {
        let signal = format!("{}_{}", port.name(), field.signal());
        let Some(&(high, span)) = self.decls.get(signal.as_str()) else {
            return Err(StubError::MissingWidth {
                port,
                signal,
                span: mention,
            });
        };
        high.parse::<u32>()
            .ok()
            .and_then(|h| h.checked_add(1))
            .ok_or_else(|| StubError::InvalidWidth {
                signal,
                value: high.to_string(),
                span,
            })
    }

    fn resolve(&self, port: AxiPort, mention: Span) -> Result<AxiInterfaceParams, StubError> {
        let w = |field| self.width(port, field, mention);
        let params = AxiParams {
            addr_width: w(WidthField::Addr)?,
            data_width: w(WidthField::Data)?,
            id_width: w(WidthField::Id)?,
            axlen_width: w(WidthField::AxLen)?,
            axlock_width: w(WidthField::AxLock)?,
        };
        log::debug!("{port}: {params:?}");
        Ok(AxiInterfaceParams { port, params })
    }
}

/// Reads the five widths of `port` from `source`.
///
/// Each width is one more than the high index of the matching
/// `<PORT>_<SIGNAL> : in|out ... ( <high> downto ...` declaration.
pub fn resolve(source: &SourceFile, port: AxiPort) -> Result<AxiInterfaceParams, StubError> {
    let mention = source
        .content
        .find(port.name())
        .map_or(Span::DUMMY, |start| {
            Span::from_range(source.id, start..start + port.name().len())
        });
    VectorIndex::build(source).resolve(port, mention)
}

/// Resolves every interface the descriptor lists, failing on the first
/// interface with an incomplete declaration set.
pub fn resolve_all(
    source: &SourceFile,
    descriptor: &StubDescriptor,
) -> Result<ResolvedInterfaces, StubError> {
    let index = VectorIndex::build(source);
    let resolved = descriptor
        .axi_ports()
        .iter()
        .map(|d| index.resolve(d.port, d.first_mention))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ResolvedInterfaces { resolved })
}

/// Build definitions for one resolved interface: the enable flag followed
/// by the five widths in field order.
pub fn describe_for_build(params: &AxiInterfaceParams) -> Vec<BuildDefine> {
    let name = params.port.name();
    std::iter::once(BuildDefine {
        flag: format!("__{name}_ENABLE__"),
        value: 1,
    })
    .chain(WidthField::ALL.into_iter().map(|field| BuildDefine {
        flag: format!("__{name}_{}__", field.suffix()),
        value: params.params.get(field),
    }))
    .collect()
}

/// The resolved widths of every present interface, in canonical order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedInterfaces {
    resolved: Vec<AxiInterfaceParams>,
}

impl ResolvedInterfaces {
    /// Whether `port` is present in the stub.
    pub fn is_enabled(&self, port: AxiPort) -> bool {
        self.resolved.iter().any(|r| r.port == port)
    }

    /// The widths of `port`: read from the stub when present, the fixed
    /// defaults otherwise.
    pub fn params_for(&self, port: AxiPort) -> AxiParams {
        self.resolved
            .iter()
            .find(|r| r.port == port)
            .map_or(*port.default_params(), |r| r.params)
    }

    /// The present interfaces in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &AxiInterfaceParams> {
        self.resolved.iter()
    }

    /// Build definitions for all present interfaces, in canonical order.
    pub fn build_defines(&self) -> Vec<BuildDefine> {
        self.resolved.iter().flat_map(describe_for_build).collect()
    }
}
