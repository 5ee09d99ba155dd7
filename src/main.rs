//! Launchpad - terminal starter app

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = launchpad::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
