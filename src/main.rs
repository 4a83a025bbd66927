//! Record service entry point
//!
//! Parses arguments and delegates to the CLI module. Errors are printed to
//! stderr and the process exits non-zero.

use record_service::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
