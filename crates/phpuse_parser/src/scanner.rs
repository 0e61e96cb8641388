//! Token scanner.
//!
//! Walks a file's token stream once and hands the remainder after every `use` keyword to the
//! statement normalizer, merging each statement's imports into one alias map.
use hashbrown::HashMap;
use phpuse_syntax::{Diagnostic, Token, TokenKind};
use tracing::{debug, trace};

use crate::normalize::normalize_use;

/// alias -> fully-qualified name. Later imports overwrite earlier ones with the same alias.
pub type UseMap = HashMap<String, String>;

/// Scan result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub uses: UseMap,
    /// Warnings about statements that were only partly understood.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of `use` keywords seen.
    pub statements: usize,
}

/// Finds `use` statements in a token stream.
///
/// `tokens` is the stream without its leading marker token; see [`strip_marker`].
pub struct UseScanner<'a> {
    input: &'a str,
    tokens: &'a [Token],
}

impl<'a> UseScanner<'a> {
    pub fn new(input: &'a str, tokens: &'a [Token]) -> Self {
        Self { input, tokens }
    }

    /// Best-effort alias map. Never fails; unusual syntax yields a partial or empty map.
    pub fn scan(&self) -> UseMap {
        self.scan_with_diagnostics().uses
    }

    /// Like [`scan`](Self::scan), also reporting what was skipped.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = self.tokens.len()))]
    pub fn scan_with_diagnostics(&self) -> ScanResult {
        let mut result = ScanResult::default();
        for (i, token) in self.tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Unknown => continue,
                TokenKind::KwUse => {
                    let stmt = normalize_use(self.input, &self.tokens[i + 1..]);
                    trace!(
                        offset = token.span.start.0,
                        imports = stmt.entries.len(),
                        terminated = stmt.terminated,
                        "use statement"
                    );
                    result.statements += 1;
                    result.uses.extend(stmt.entries);
                    result.diagnostics.extend(stmt.diagnostics);
                }
                _ => {}
            }
        }
        debug!(
            statements = result.statements,
            aliases = result.uses.len(),
            "scan complete"
        );
        result
    }
}

/// Drops the first token, which is the open-tag (or inline HTML) marker every PHP token stream
/// starts with.
pub fn strip_marker(tokens: &[Token]) -> &[Token] {
    tokens.get(1..).unwrap_or(&[])
}
