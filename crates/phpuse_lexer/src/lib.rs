//! phpuse_lexer: PHP tokenizer.
//!
//! Normalizes line endings, splits PHP source into classified tokens, and collects diagnostics.
//! Entry points: `Lexer::new(input).lex()` and `normalize_source`.
mod keywords;
mod lexer;
mod normalize;

pub use lexer::{LexOptions, LexResult, Lexer};
pub use normalize::normalize_source;
