#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    // Lexer
    UnterminatedBlockComment,
    UnterminatedString,
    UnterminatedHeredoc(String),
    UnexpectedChar(char),

    // Use scanner
    UnterminatedUseStatement,
    NestedGroupImport,
    EmptyImportAlias(String),
    TrailingSeparatorImport(String),
    DuplicateImportAlias(String),
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    pub fn format(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::UnterminatedBlockComment => "Unterminated block comment".into(),
            DiagnosticKind::UnterminatedString => "Unterminated string literal".into(),
            DiagnosticKind::UnterminatedHeredoc(label) => {
                format!("Unterminated heredoc; missing closing marker '{}'", label)
            }
            DiagnosticKind::UnexpectedChar(c) => format!("Unexpected character: {}", c),

            DiagnosticKind::UnterminatedUseStatement => {
                "Use statement is not terminated by ';'".into()
            }
            DiagnosticKind::NestedGroupImport => {
                "Nested group imports are not supported; result may be wrong".into()
            }
            DiagnosticKind::EmptyImportAlias(name) => {
                format!("Import '{}' has no alias and was skipped", name)
            }
            DiagnosticKind::TrailingSeparatorImport(name) => {
                format!("Import '{}' ends with a namespace separator and was skipped", name)
            }
            DiagnosticKind::DuplicateImportAlias(alias) => {
                format!("Alias '{}' is imported more than once; the last one wins", alias)
            }
        }
    }
}
