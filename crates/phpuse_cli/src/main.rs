mod args;
mod commands;

use phpuse_driver::Driver;
use phpuse_lexer::LexOptions;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Installs a stderr subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();
    let args = match args::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let driver = Driver::with_options(LexOptions {
        short_open_tag: args.short_tags,
    });

    match args.cmd.as_str() {
        "tokens" => commands::tokens::run(&args, &driver),
        "uses" => commands::uses::run(&args, &driver),
        "check" => commands::check::run(&args, &driver),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("{}", args::usage());
            std::process::exit(2);
        }
    }
}
