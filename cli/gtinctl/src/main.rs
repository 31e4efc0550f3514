//! gtinctl (gtin) - command-line front end for the `gtin` library.
//!
//! Parses, validates, formats, and compares Global Trade Item Numbers from
//! arguments or standard input.

use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_json()) {
        error::print_error(&e);
        std::process::exit(1);
    }

    // Run the command
    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }
}
