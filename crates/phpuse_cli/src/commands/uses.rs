use serde_json::{Map, Value, json};
use phpuse_driver::Driver;

use crate::args::CliArgs;
use crate::commands::common::{print_json, scan_or_exit, write_line};
use crate::commands::{diagnostic_json, emit_diagnostics};

pub(crate) fn run(args: &CliArgs, driver: &Driver) {
    let scanned = scan_or_exit(args, driver);
    let mut uses: Vec<(&String, &String)> = scanned.uses.iter().collect();
    uses.sort();

    if args.json_out {
        let map: Map<String, Value> = uses
            .iter()
            .map(|(alias, fqn)| ((*alias).clone(), Value::String((*fqn).clone())))
            .collect();
        let diagnostics: Vec<Value> = if args.no_diags {
            Vec::new()
        } else {
            scanned
                .diagnostics
                .iter()
                .map(|d| diagnostic_json(&scanned.source, d))
                .collect()
        };
        let mut obj = json!({
            "file": scanned.path,
            "uses": map,
            "diagnostics": diagnostics,
        });
        if args.timing {
            obj["timing"] = json!({
                "lex_us": scanned.timings.lex_us as u64,
                "scan_us": scanned.timings.scan_us as u64,
            });
        }
        print_json(&obj);
        return;
    }

    for (alias, fqn) in uses {
        write_line(&format!("{alias} => {fqn}"));
    }
    if !args.no_diags {
        emit_diagnostics(&scanned.source, &scanned.diagnostics, false);
    }
    if args.timing {
        eprintln!(
            "TIMING lex={:.3}ms scan={:.3}ms",
            (scanned.timings.lex_us as f64) / 1000.0,
            (scanned.timings.scan_us as f64) / 1000.0,
        );
    }
}
