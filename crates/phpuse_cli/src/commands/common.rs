use std::io::Write;

use phpuse_driver::{Driver, ScannedFile};

use crate::args::CliArgs;

/// The single `<file>` argument, or exit 2.
pub(crate) fn require_path(args: &CliArgs) -> &str {
    if args.positional.len() != 1 {
        eprintln!("Missing <file>");
        std::process::exit(2);
    }
    args.positional[0].as_str()
}

pub(crate) fn scan_or_exit(args: &CliArgs, driver: &Driver) -> ScannedFile {
    let path = require_path(args);
    match driver.scan_file(path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

pub(crate) fn print_json(obj: &serde_json::Value) {
    write_line(&obj.to_string());
}

/// Writes one line to stdout; a closed pipe ends the process quietly.
pub(crate) fn write_line(line: &str) {
    let mut out = std::io::stdout().lock();
    if let Err(e) = writeln!(out, "{line}") {
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("stdout error: {e}");
        std::process::exit(2);
    }
}

pub(crate) fn escape_visible(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
