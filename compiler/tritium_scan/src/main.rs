//! Tritium lexeme dumper.

use std::sync::Once;

use tritium_scan::{parse_args, run, Command, USAGE};

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=tritium_lexer=trace tritium-scan script.ts`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

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
    });
}

fn main() {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Scan(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            println!();
            println!("Options:");
            println!("  --comments          Emit comments as COMMENT lexemes");
            println!("  --interpolate       Lex #{{...}} inside strings as one region");
            println!("  --no-import-paths   Lex an @import operand as ordinary lexemes");
            println!("  --time              Print tokenization time per input to stderr");
            println!();
            println!("With no FILE, reads standard input.");
            return;
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    std::process::exit(run(&options));
}
