use serde_json::json;
use phpuse_driver::Driver;

use crate::args::CliArgs;
use crate::commands::common::{escape_visible, print_json, require_path, write_line};

pub(crate) fn run(args: &CliArgs, driver: &Driver) {
    let path = require_path(args);
    let lexed = match driver.lex_file(path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    for t in &lexed.tokens {
        let text = lexed.source.text.slice(t.span);
        if args.json_out {
            print_json(&json!({
                "kind": format!("{:?}", t.kind),
                "start": t.span.start.0,
                "end": t.span.end.0,
                "text": text,
            }));
        } else {
            write_line(&format!(
                "{:?}\t{}..{}\t{}",
                t.kind,
                t.span.start.0,
                t.span.end.0,
                escape_visible(text)
            ));
        }
    }
    if !args.no_diags {
        crate::commands::emit_diagnostics(&lexed.source, &lexed.diagnostics, args.json_out);
    }
}
