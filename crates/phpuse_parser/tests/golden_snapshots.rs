use std::fs;
use std::path::PathBuf;

use phpuse_lexer::{Lexer, normalize_source};
use phpuse_parser::{ScanResult, UseScanner, strip_marker};
use phpuse_syntax::{Diagnostic, SourceFile};

fn input_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("inputs")
        .join(name)
}

fn golden_path(kind: &str, name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join(kind)
        .join(format!("{name}.txt"))
}

fn load_source(path: &PathBuf) -> SourceFile {
    let input = fs::read_to_string(path).unwrap();
    SourceFile::new(path.to_string_lossy(), normalize_source(&input))
}

fn format_diagnostics(source: &SourceFile, mut diagnostics: Vec<Diagnostic>) -> String {
    diagnostics.sort_by_key(|d| d.span.map(|sp| sp.start.0).unwrap_or(0));
    let mut s = String::new();
    for d in diagnostics {
        match d.span {
            Some(span) => {
                let (line, col) = source.text.line_col(span.start.0);
                s.push_str(&format!(
                    "{:?}:{}:{}: {}\n",
                    d.severity,
                    line + 1,
                    col + 1,
                    d.message
                ));
            }
            None => {
                s.push_str(&format!("{:?}: {}\n", d.severity, d.message));
            }
        }
    }
    s
}

fn format_scan(source: &SourceFile, result: ScanResult) -> String {
    let mut uses: Vec<_> = result.uses.into_iter().collect();
    uses.sort();
    let mut s = String::from("uses:\n");
    for (alias, fqn) in uses {
        s.push_str(&format!("{alias} => {fqn}\n"));
    }
    s.push_str("diagnostics:\n");
    s.push_str(&format_diagnostics(source, result.diagnostics));
    s
}

fn golden_update_enabled() -> bool {
    std::env::var("PHPUSE_UPDATE_GOLDEN").is_ok_and(|v| v == "1" || v == "true")
}

fn assert_or_update(path: PathBuf, actual: &str) {
    if golden_update_enabled() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, actual).unwrap();
        return;
    }
    let expected = fs::read_to_string(&path).unwrap();
    assert_eq!(actual.trim_end(), expected.trim_end());
}

fn check_golden(name: &str) {
    let source = load_source(&input_path(&format!("{name}.php")));
    let lex = Lexer::new(source.text.as_str()).lex();
    assert!(lex.diagnostics.is_empty(), "{:?}", lex.diagnostics);
    let result =
        UseScanner::new(source.text.as_str(), strip_marker(&lex.tokens)).scan_with_diagnostics();
    let actual = format_scan(&source, result);
    assert_or_update(golden_path("uses", name), &actual);
}

#[test]
fn golden_uses_01_class_file() {
    check_golden("01_class_file");
}

#[test]
fn golden_uses_02_mixed_html() {
    check_golden("02_mixed_html");
}

#[test]
fn golden_uses_03_degraded() {
    check_golden("03_degraded");
}
