//! phpuse_syntax: shared vocabulary for the lexer, the use-statement scanner and the driver.
//!
//! Spans, classified PHP tokens, source text with line lookup, and diagnostics.
mod diagnostic;
mod loc;
mod render;
mod source;
mod span;
mod token;
mod util;

pub use diagnostic::{Diagnostic, Label, Severity, codes};
pub use loc::{DiagnosticKind, DiagnosticsFormatter};
pub use render::render_diagnostic;
pub use source::{SourceFile, SourceText};
pub use span::{ByteIndex, Span};
pub use token::{Token, TokenKind};
pub use util::{is_ident_continue, is_ident_start};
