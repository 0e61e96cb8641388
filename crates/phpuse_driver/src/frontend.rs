//! File front end: read, normalize, lex, scan.
//!
//! Reading is the only step that can fail. Everything after it reports problems as diagnostics
//! and returns whatever imports it could resolve.

use std::borrow::Cow;
use std::fs;
use std::time::Instant;

use phpuse_lexer::{LexOptions, Lexer, normalize_source};
use phpuse_parser::{UseMap, UseScanner, strip_marker};
use phpuse_syntax::{Diagnostic, SourceFile, Token};
use tracing::debug;

use crate::FailedReadFile;

#[derive(Clone, Debug, Default)]
pub struct Driver {
    pub options: LexOptions,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LexOptions) -> Self {
        Self { options }
    }

    /// Alias map of every `use` import in the file at `path`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn from_file(&self, path: &str) -> Result<UseMap, FailedReadFile> {
        Ok(self.scan_file(path)?.uses)
    }

    /// Reads `path` as source text. Bytes that are not UTF-8 are replaced, so legacy-encoded
    /// files still scan; import names are ASCII.
    pub fn read_source(&self, path: &str) -> Result<SourceFile, FailedReadFile> {
        if fs::metadata(path).is_ok_and(|m| m.is_dir()) {
            debug!(path, "path is a directory");
            return Err(FailedReadFile::unreadable(path));
        }
        let bytes = fs::read(path).map_err(|e| {
            debug!(path, error = %e, "read failed");
            FailedReadFile::io(path, e)
        })?;
        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            debug!(path, "replaced invalid UTF-8 sequences");
        }
        Ok(SourceFile::new(path, normalize_source(&text)))
    }

    pub fn lex_file(&self, path: &str) -> Result<LexedFile, FailedReadFile> {
        let source = self.read_source(path)?;
        Ok(self.lex_source(source))
    }

    pub fn lex_text(&self, path: &str, input: &str) -> LexedFile {
        self.lex_source(SourceFile::new(path, normalize_source(input)))
    }

    fn lex_source(&self, source: SourceFile) -> LexedFile {
        let lex = Lexer::with_options(source.text.as_str(), self.options).lex();
        LexedFile {
            path: source.name.clone(),
            source,
            tokens: lex.tokens,
            diagnostics: lex.diagnostics,
        }
    }

    pub fn scan_file(&self, path: &str) -> Result<ScannedFile, FailedReadFile> {
        let source = self.read_source(path)?;
        Ok(self.scan_source(source))
    }

    pub fn scan_text(&self, path: &str, input: &str) -> ScannedFile {
        self.scan_source(SourceFile::new(path, normalize_source(input)))
    }

    fn scan_source(&self, source: SourceFile) -> ScannedFile {
        let t1 = Instant::now();
        let lex = Lexer::with_options(source.text.as_str(), self.options).lex();
        let t2 = Instant::now();
        let scan =
            UseScanner::new(source.text.as_str(), strip_marker(&lex.tokens)).scan_with_diagnostics();
        let t3 = Instant::now();

        let mut diagnostics = lex.diagnostics;
        diagnostics.extend(scan.diagnostics);
        debug!(
            path = %source.name,
            tokens = lex.tokens.len(),
            statements = scan.statements,
            aliases = scan.uses.len(),
            diagnostics = diagnostics.len(),
            "scanned"
        );

        ScannedFile {
            path: source.name.clone(),
            source,
            tokens: lex.tokens,
            uses: scan.uses,
            diagnostics,
            timings: Timings {
                lex_us: (t2 - t1).as_micros(),
                scan_us: (t3 - t2).as_micros(),
            },
        }
    }
}

pub struct LexedFile {
    pub path: String,
    pub source: SourceFile,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct ScannedFile {
    pub path: String,
    pub source: SourceFile,
    pub tokens: Vec<Token>,
    pub uses: UseMap,
    pub diagnostics: Vec<Diagnostic>,
    pub timings: Timings,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Timings {
    pub lex_us: u128,
    pub scan_us: u128,
}
