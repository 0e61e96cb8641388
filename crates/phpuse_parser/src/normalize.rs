//! Statement normalizer.
//!
//! Interprets the tokens following one `use` keyword: plain imports, comma lists, braced group
//! imports and `as` aliases. The walk is a fold of [`UseState`] over the token slice that stops
//! at the first `;`. Nothing here fails; odd input yields fewer entries and, at most, warnings.
use std::ops::ControlFlow;

use indexmap::IndexMap;
use phpuse_syntax::{Diagnostic, DiagnosticKind, Span, Token, TokenKind, codes};

pub const NS_SEPARATOR: char = '\\';

/// One import whose alias has not been resolved yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingImport {
    /// Fully-qualified name, always with exactly one leading separator.
    pub name: String,
    /// Text after `as`, if the import had one.
    pub alias: Option<String>,
    pub span: Span,
}

impl PendingImport {
    /// Explicit alias, or else the last path segment of the name.
    pub fn resolved_alias(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => self.name.rsplit(NS_SEPARATOR).next().unwrap_or(""),
        }
    }
}

/// Running state of one statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UseState {
    /// Shared prefix of a group import; `\` until a `{` is seen.
    pub common_namespace: String,
    /// Name being accumulated.
    pub current: String,
    /// `Some` once `as` was seen for the current import.
    pub alias: Option<String>,
    pub current_span: Option<Span>,
    pub pending: Vec<PendingImport>,
    pub groups_opened: u32,
    /// The first `{` of the statement.
    pub outer_group: Option<Span>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for UseState {
    fn default() -> Self {
        Self::new()
    }
}

impl UseState {
    pub fn new() -> Self {
        Self {
            common_namespace: NS_SEPARATOR.to_string(),
            current: String::new(),
            alias: None,
            current_span: None,
            pending: Vec::new(),
            groups_opened: 0,
            outer_group: None,
            diagnostics: Vec::new(),
        }
    }

    /// Feeds one token. `Break` means the statement ended at a `;`.
    pub fn step(mut self, token: &Token, input: &str) -> ControlFlow<Self, Self> {
        match token.kind {
            kind if kind.is_name_part() => {
                let text = token.text(input);
                match self.alias.as_mut() {
                    Some(alias) => alias.push_str(text),
                    None => self.current.push_str(text),
                }
                self.current_span = Some(match self.current_span {
                    Some(span) => span.merge(token.span),
                    None => token.span,
                });
            }
            TokenKind::KwAs => {
                if self.alias.is_none() {
                    self.alias = Some(String::new());
                }
            }
            TokenKind::Comma => self.finish_import(),
            TokenKind::Semicolon => {
                self.finish_import();
                return ControlFlow::Break(self);
            }
            TokenKind::LBrace => {
                match self.outer_group {
                    Some(outer) => self.diagnostics.push(
                        Diagnostic::warning_kind(DiagnosticKind::NestedGroupImport, Some(token.span))
                            .with_code(codes::NESTED_GROUP_IMPORT)
                            .with_label("outer group opened here", outer),
                    ),
                    None => self.outer_group = Some(token.span),
                }
                self.groups_opened += 1;
                let prefix = std::mem::take(&mut self.current);
                append_path(&mut self.common_namespace, &prefix);
                self.current_span = None;
            }
            _ => {}
        }
        ControlFlow::Continue(self)
    }

    /// Moves the accumulated name into `pending`. An empty name produces nothing.
    fn finish_import(&mut self) {
        let alias = self.alias.take();
        let span = self.current_span.take().unwrap_or_default();
        if self.current.is_empty() {
            return;
        }
        let mut name = self.common_namespace.clone();
        append_path(&mut name, &self.current);
        self.current.clear();
        self.pending.push(PendingImport { name, alias, span });
    }

    /// Resolves aliases of everything collected so far.
    pub fn finish(mut self, terminated: bool, end: Span) -> StatementImports {
        if !terminated {
            let dropped = (!self.current.is_empty()).then(|| self.current.clone());
            let mut diag = Diagnostic::warning_kind(
                DiagnosticKind::UnterminatedUseStatement,
                Some(self.current_span.unwrap_or(end)),
            )
            .with_code(codes::UNTERMINATED_USE);
            if let Some(name) = dropped {
                diag = diag.with_help(format!("trailing import '{name}' was ignored"));
            }
            self.diagnostics.push(diag);
        }

        let mut entries: IndexMap<String, String> = IndexMap::with_capacity(self.pending.len());
        for import in &self.pending {
            let alias = import.resolved_alias();
            if import.name.ends_with(NS_SEPARATOR) {
                self.diagnostics.push(
                    Diagnostic::warning_kind(
                        DiagnosticKind::TrailingSeparatorImport(import.name.clone()),
                        Some(import.span),
                    )
                    .with_code(codes::TRAILING_SEPARATOR_IMPORT),
                );
                continue;
            }
            // `use A\B as ;` would map the empty string.
            if alias.is_empty() {
                self.diagnostics.push(
                    Diagnostic::warning_kind(
                        DiagnosticKind::EmptyImportAlias(import.name.clone()),
                        Some(import.span),
                    )
                    .with_code(codes::EMPTY_IMPORT_ALIAS),
                );
                continue;
            }
            if entries.contains_key(alias) {
                self.diagnostics.push(
                    Diagnostic::warning_kind(
                        DiagnosticKind::DuplicateImportAlias(alias.to_string()),
                        Some(import.span),
                    )
                    .with_code(codes::DUPLICATE_IMPORT_ALIAS),
                );
            }
            entries.insert(alias.to_string(), import.name.clone());
        }

        StatementImports {
            entries,
            terminated,
            diagnostics: self.diagnostics,
        }
    }
}

/// Imports declared by one `use` statement, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatementImports {
    /// alias -> fully-qualified name.
    pub entries: IndexMap<String, String>,
    /// Whether a `;` ended the statement.
    pub terminated: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Appends `segment` to a path without doubling the separator at the seam.
fn append_path(path: &mut String, segment: &str) {
    if path.ends_with(NS_SEPARATOR) {
        path.push_str(segment.trim_start_matches(NS_SEPARATOR));
    } else {
        path.push_str(segment);
    }
}

/// Normalizes the statement starting right after a `use` keyword. `tokens` may run to the end
/// of the file; everything after the first `;` is ignored.
pub fn normalize_use(input: &str, tokens: &[Token]) -> StatementImports {
    let end = tokens
        .last()
        .map(|t| Span::new(t.span.end.0, t.span.end.0))
        .unwrap_or_default();
    match tokens
        .iter()
        .try_fold(UseState::new(), |state, token| state.step(token, input))
    {
        ControlFlow::Break(state) => state.finish(true, end),
        ControlFlow::Continue(state) => state.finish(false, end),
    }
}
