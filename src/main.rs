// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    match gloc::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
