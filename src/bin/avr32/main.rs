mod args;
mod logging;

use std::process::ExitCode;

fn main() -> ExitCode {
    args::run()
}
