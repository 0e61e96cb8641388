use phpuse_driver::Driver;

use crate::args::CliArgs;
use crate::commands::common::scan_or_exit;
use crate::commands::emit_diagnostics;

pub(crate) fn run(args: &CliArgs, driver: &Driver) {
    let scanned = scan_or_exit(args, driver);
    emit_diagnostics(&scanned.source, &scanned.diagnostics, args.json_out);
    if scanned.diagnostics.iter().any(|d| d.is_error()) {
        std::process::exit(1);
    }
}
