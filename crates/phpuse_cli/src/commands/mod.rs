use serde_json::json;
use phpuse_syntax::{Diagnostic, Severity, SourceFile, Span, render_diagnostic};

pub(crate) mod check;
pub(crate) mod common;
pub(crate) mod tokens;
pub(crate) mod uses;

pub(crate) fn diagnostic_json(source: &SourceFile, d: &Diagnostic) -> serde_json::Value {
    let span_json = |s: Span| {
        let (line, col) = source.text.line_col(s.start.0);
        json!({ "start": s.start.0, "end": s.end.0, "line": line + 1, "column": col + 1 })
    };
    let labels: Vec<serde_json::Value> = d
        .labels
        .iter()
        .map(|l| json!({ "message": l.message, "span": span_json(l.span) }))
        .collect();
    json!({
        "severity": match d.severity { Severity::Error => "error", Severity::Warning => "warning" },
        "code": d.code,
        "message": d.message,
        "help": d.help,
        "span": d.span.map(span_json),
        "labels": labels,
        "file": source.name,
    })
}

/// Human-readable diagnostics go to stderr; JSON lines go to stdout.
pub(crate) fn emit_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic], json_out: bool) {
    for d in diagnostics {
        if json_out {
            common::print_json(&diagnostic_json(source, d));
        } else {
            eprintln!("{}", render_diagnostic(source, d));
        }
    }
}
