//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use palooza_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    match palooza_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("palooza: {err}");
            std::process::exit(1);
        }
    }
}
