//! Diagnostic rendering for the terminal.

use crate::diagnostic::Diagnostic;
use crate::label::{Label, LabelStyle};
use colored::Colorize;
use cosim_source::SourceDb;

/// Formats a diagnostic into a printable string.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// Renders diagnostics in a rustc-like layout:
///
/// ```text
/// error[E104]: interface S_AXI_HP0 has no width declaration for S_AXI_HP0_RID
///   --> design_1_processing_system7_0_0_stub.vhdl:41:5
///    |
/// 41 |     S_AXI_HP0_ARREADY : out STD_LOGIC;
///    |     ^^^^^^^^^ interface detected here
///    |
///    = note: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to style the severity header. The terminal escapes come from
    /// `colored`, whose global override the binary sets from `--color`.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        if self.color {
            let tag = format!("{}[{}]", diag.severity, diag.code);
            format!(
                "{}{}\n",
                diag.severity.paint(&tag),
                format!(": {}", diag.message).bold()
            )
        } else {
            format!("{}[{}]: {}\n", diag.severity, diag.code, diag.message)
        }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = self.header(diag);

        if !diag.primary_span.is_dummy() {
            let resolved = source_db.resolve_span(diag.primary_span);
            out.push_str(&format!("  --> {resolved}\n"));

            let file = source_db.get_file(diag.primary_span.file);
            let line_num = resolved.start_line.to_string();
            let padding = " ".repeat(line_num.len());

            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!(
                "{line_num} | {}\n",
                file.line_text(resolved.start_line)
            ));

            let primary = diag
                .labels
                .iter()
                .find(|l| l.style == LabelStyle::Primary && l.span == diag.primary_span);
            out.push_str(&format!(
                "{padding} | {}\n",
                underline(resolved.start_col, diag.primary_span.len(), '^', primary)
            ));

            for label in diag
                .labels
                .iter()
                .filter(|l| l.style == LabelStyle::Secondary && !l.span.is_dummy())
            {
                let at = source_db.resolve_span(label.span);
                out.push_str(&format!("{padding} = {}: {}\n", at, label.message));
            }
            out.push_str(&format!("{padding} |\n"));
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

fn underline(col: u32, len: u32, mark: char, label: Option<&Label>) -> String {
    let offset = " ".repeat((col as usize).saturating_sub(1));
    let marks = mark.to_string().repeat(len.max(1) as usize);
    match label {
        Some(l) => format!("{offset}{marks} {}", l.message),
        None => format!("{offset}{marks}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::DiagnosticCode;
    use cosim_source::Span;

    #[test]
    fn render_error_with_span() {
        let mut source_db = SourceDb::new();
        let file = source_db.add_source(
            "ps7_stub.vhd",
            "entity x is\n    S_AXI_HP0_ARREADY : out STD_LOGIC;\n".to_string(),
        );
        let span = Span::new(file, 16, 25);
        let diag = Diagnostic::error(DiagnosticCode::error(104), "missing width", span)
            .with_label(Label::primary(span, "interface detected here"));

        let output = TerminalRenderer::new(false).render(&diag, &source_db);

        assert!(output.contains("error[E104]: missing width"));
        assert!(output.contains("--> ps7_stub.vhd:2:5"));
        assert!(output.contains("2 |     S_AXI_HP0_ARREADY : out STD_LOGIC;"));
        assert!(output.contains("  |     ^^^^^^^^^ interface detected here"));
    }

    #[test]
    fn render_warning_with_notes() {
        let source_db = SourceDb::new();
        let diag = Diagnostic::warning(DiagnosticCode::warning(201), "ignored", Span::DUMMY)
            .with_note("not a PS7 interface")
            .with_help("check the stub");

        let output = TerminalRenderer::new(false).render(&diag, &source_db);

        assert!(output.starts_with("warning[W201]: ignored\n"));
        assert!(output.contains("   = note: not a PS7 interface"));
        assert!(output.contains("   = help: check the stub"));
        assert!(!output.contains("-->"));
    }

    #[test]
    fn color_styles_header() {
        colored::control::set_override(true);
        let source_db = SourceDb::new();
        let diag = Diagnostic::error(DiagnosticCode::error(301), "no top", Span::DUMMY);
        let output = TerminalRenderer::new(true).render(&diag, &source_db);
        let expected = format!(
            "{}{}\n",
            "error[E301]".red().bold(),
            ": no top".bold()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn plain_header_has_no_escapes() {
        colored::control::set_override(true);
        let source_db = SourceDb::new();
        let diag = Diagnostic::warning(DiagnosticCode::warning(201), "ignored", Span::DUMMY);
        let output = TerminalRenderer::new(false).render(&diag, &source_db);
        assert_eq!(output, "warning[W201]: ignored\n");
    }
}
