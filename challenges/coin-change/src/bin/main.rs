use std::io;

use log::error;

fn main() {
    // install global collector configured based on RUST_LOG env var.
    // Logs go to stderr; stdout carries only the response payload.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = coin_change::contract::run(stdin.lock(), stdout.lock()) {
        // Failures are encoded in the payload, never in the exit status.
        // A broken stdout is the one fault that cannot be reported there.
        error!("failed to write response: {err}");
    }
}
