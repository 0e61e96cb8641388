//! phpuse_parser: finds `use` imports in a PHP token stream.
//!
//! [`UseScanner`] locates every `use` keyword; [`normalize_use`] turns the tokens after it into
//! alias -> fully-qualified name pairs.
mod normalize;
mod scanner;

pub use normalize::{NS_SEPARATOR, PendingImport, StatementImports, UseState, normalize_use};
pub use scanner::{ScanResult, UseMap, UseScanner, strip_marker};
