//! Command-line interface.
//!
//! Parsed before the TUI starts. Informational flags print and exit; the
//! rest adjust the [`AppConfig`](crate::config::AppConfig).
//!
//! ```ignore
//! use todo_tui::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(options) = run_cli_command(command) {
//!     // start the TUI with `options`
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{handle_version_command, VERSION};

/// Handle informational commands.
///
/// Returns the run options when the TUI should start. `Version` and `Help`
/// print and exit the process.
pub fn run_cli_command(command: CliCommand) -> Option<RunOptions> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            std::process::exit(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            std::process::exit(2)
        }
        CliCommand::Run(options) => Some(options),
    }
}
