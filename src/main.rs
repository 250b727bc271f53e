//! docshelf - In-memory document filing console

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = docshelf::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
