//! Command-line front-end: reads protocol lines from stdin, writes trades
//! and snapshots to stdout.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`; configuration
//! comes from `MATCHBOOK_DEPTH` and `MATCHBOOK_STRICT`.

use std::io;

use tracing_subscriber::EnvFilter;

use matchbook::{Config, Session};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(Config::from_env());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = session.run(stdin.lock(), &mut out) {
        tracing::error!(%err, "session aborted");
        std::process::exit(1);
    }
}
