//! Command-line argument parsing.

use std::path::PathBuf;

use crate::config::{AppConfig, StoreBackend};

/// Help text for `--help`.
pub const USAGE: &str = "\
Usage: todo-tui [OPTIONS]

Options:
  --data <PATH>   Store todos in PATH (default: <data dir>/todo-tui/todos.json)
  --memory        Keep todos in memory only
  -h, --help      Print this help
  -V, --version   Print version";

/// Options that shape a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Use the in-memory store
    pub memory: bool,
    /// Data file override
    pub data: Option<PathBuf>,
}

impl RunOptions {
    /// Overlay these options on `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = &self.data {
            config = config.with_data_file(path).with_store(StoreBackend::File);
        }
        if self.memory {
            config = config.with_store(StoreBackend::Memory);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Bad arguments, with the reason
    Invalid(String),
    /// Run the TUI (default)
    Run(RunOptions),
}

/// Parse command-line arguments.
///
/// The first item is the program name and is skipped. `--version` and
/// `--help` win over everything else.
///
/// # Examples
///
/// ```
/// use todo_tui::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["todo-tui".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--memory" => options.memory = true,
            "--data" => match args.next() {
                Some(path) if !path.is_empty() => options.data = Some(PathBuf::from(path)),
                _ => return CliCommand::Invalid("--data requires a path".to_string()),
            },
            other => {
                if let Some(path) = other.strip_prefix("--data=") {
                    if path.is_empty() {
                        return CliCommand::Invalid("--data requires a path".to_string());
                    }
                    options.data = Some(PathBuf::from(path));
                } else {
                    return CliCommand::Invalid(format!("unknown argument '{}'", other));
                }
            }
        }
    }

    CliCommand::Run(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut full = vec!["todo-tui".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        parse_args(full.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run(RunOptions::default()));
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
        assert_eq!(parse(&["--memory", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_memory_and_data() {
        let command = parse(&["--memory", "--data", "/tmp/t.json"]);
        assert_eq!(
            command,
            CliCommand::Run(RunOptions {
                memory: true,
                data: Some(PathBuf::from("/tmp/t.json")),
            })
        );
        assert_eq!(
            parse(&["--data=/tmp/u.json"]),
            CliCommand::Run(RunOptions {
                memory: false,
                data: Some(PathBuf::from("/tmp/u.json")),
            })
        );
    }

    #[test]
    fn test_parse_missing_data_path() {
        assert!(matches!(parse(&["--data"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--data="]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert!(matches!(parse(&["--unknown"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_options_override_config() {
        let base = AppConfig::default().with_store(StoreBackend::Memory);

        let config = RunOptions {
            memory: false,
            data: Some(PathBuf::from("/tmp/x.json")),
        }
        .apply(base.clone());
        assert_eq!(config.store, StoreBackend::File);
        assert_eq!(config.data_file, PathBuf::from("/tmp/x.json"));

        let config = RunOptions {
            memory: true,
            data: None,
        }
        .apply(AppConfig::default());
        assert_eq!(config.store, StoreBackend::Memory);
    }
}
