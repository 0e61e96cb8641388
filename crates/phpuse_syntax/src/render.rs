use std::fmt::Write as _;

use crate::{Diagnostic, Severity, SourceFile, Span};

fn severity_name(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

fn push_caret(out: &mut String, source: &SourceFile, span: Span, gutter: &str) {
    let (_, col) = source.text.line_col(span.start.0);
    out.push_str(gutter);
    out.push_str(source.text.line_text(span.start.0));
    out.push('\n');
    out.push_str(gutter);
    out.extend(std::iter::repeat_n(' ', col as usize));
    out.push('^');
}

pub fn render_diagnostic(source: &SourceFile, diag: &Diagnostic) -> String {
    let code_str = diag.code.map(|c| format!("[{c}]")).unwrap_or_default();
    let mut out = String::new();
    match diag.span {
        Some(span) => {
            let (line, col) = source.text.line_col(span.start.0);
            let _ = write!(
                out,
                "{}{}: {}:{}:{}: {}",
                severity_name(diag.severity),
                code_str,
                source.name,
                line + 1,
                col + 1,
                diag.message
            );
            out.push('\n');
            push_caret(&mut out, source, span, "  | ");
        }
        None => {
            let _ = write!(
                out,
                "{}{}: {}: {}",
                severity_name(diag.severity),
                code_str,
                source.name,
                diag.message
            );
        }
    }
    for label in &diag.labels {
        let (ll, lc) = source.text.line_col(label.span.start.0);
        out.push('\n');
        out.push_str("  = note: ");
        out.push_str(&label.message);
        out.push('\n');
        push_caret(&mut out, source, label.span, "    | ");
        let _ = write!(out, "  ({}:{}:{})", source.name, ll + 1, lc + 1);
    }
    if let Some(h) = &diag.help {
        out.push('\n');
        out.push_str("  = help: ");
        out.push_str(h);
    }
    out
}
