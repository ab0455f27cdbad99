//! Command-line front end.
//!
//! Each subcommand reads its inputs, hands in-memory buffers to the library and
//! writes the results:
//! - `makehex`: binary file to Intel HEX
//! - `makeuser`: serial number and boot pin to a user-page `.hex` (and optionally `.bin`)
//! - `cfgword`: boot pin to a standalone 4-byte configuration word
//! - `parsecfg`: show the boot pin stored in a configuration word file

mod error;
mod execute;
mod io;
mod parse_util;
mod types;

use std::process::ExitCode;

use clap::Parser;

use avr32_hex::ErrorKind;

use crate::logging::setup_logging;
pub use types::Args;

pub fn run() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.log_level);

    if let Err(e) = args.execute() {
        eprintln!("Error: {e}");
        if e.kind() == ErrorKind::InvalidArgument {
            eprintln!("Run `avr32 {} --help` for usage.", args.command.name());
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
