mod cmdline;
mod ctype;
mod environment;
mod error;
mod families;
mod float;
mod layout;
mod machine;
mod report;

#[cfg(test)]
mod test;

#[macro_use]
extern crate static_assertions;

use std::io;
use std::process::exit;

use crate::{cmdline::Cli, environment::HOST, layout::Layout};

/**
 * Diagnostics go to stderr and only when `RUST_LOG` asks for them, so the report
 * on stdout is never affected.
 */
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = report::run(&mut out, &HOST, &cli, &Layout::default()) {
        if !e.is_broken_pipe() {
            eprintln!("{}", e);
            exit(1);
        }
    }
}
