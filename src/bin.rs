#![deny(warnings)]

use std::io::{self, Write};

mod cli;
pub(crate) use cli::Cli;

#[allow(unused_must_use)]
#[cfg(not(tarpaulin_include))]
fn main() {
    // The actual victor executable (main fn) doesn't seem to be reachable via Tarpaulin.
    // We put as little as possible into this function so we can reach the rest via
    // other test coverage.

    let arg_matches = cli::app().get_matches();

    let log_level = arg_matches.value_of("log-level").unwrap_or("warn");
    if let Err(err) = cli::logging::init(log_level) {
        eprintln!("WARNING: logging unavailable: {}", err);
    }

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut cli = Cli {
        arg_matches,
        stdin: &mut stdin,
        stdout: &mut stdout,
    };

    let r = cli.run();

    cli.flush();
    // Intentionally ignoring the result of this flush.

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}
