//! phpuse_driver: reads PHP files and runs lexer + use scanner over them.
mod error;
mod frontend;

pub use error::FailedReadFile;
pub use frontend::{Driver, LexedFile, ScannedFile, Timings};
pub use phpuse_parser::UseMap;
