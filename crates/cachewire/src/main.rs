//! cachewire - Entry Point
//!
//! Binary entry point for the cachewire CLI. Lives in the facade crate so
//! the library surface and the binary share one public API.

use std::process::ExitCode;

use clap::Parser;

use cachewire::cli::{run, Cli};

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
