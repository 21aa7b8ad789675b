//! Runtime configuration.
//!
//! Built from defaults, then the environment, then command-line flags.

use std::path::PathBuf;

/// Environment variable naming the data file.
pub const ENV_DATA: &str = "TODO_TUI_DATA";
/// Environment variable selecting the store backend (`file` or `memory`).
pub const ENV_STORE: &str = "TODO_TUI_STORE";
/// Environment variable overriding width units per terminal column.
pub const ENV_CELL_WIDTH: &str = "TODO_TUI_CELL_WIDTH";
/// Environment variable naming the log file.
pub const ENV_LOG_FILE: &str = "TODO_TUI_LOG_FILE";

/// Width units per terminal column.
pub const DEFAULT_CELL_WIDTH: u32 = 8;

const APP_DIR: &str = "todo-tui";

/// Which [`ToDoStore`](crate::traits::ToDoStore) the app runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// `todos.json` on disk
    #[default]
    File,
    /// Process memory, lost on exit
    Memory,
}

impl StoreBackend {
    /// Parse a backend name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" | "json" => Some(StoreBackend::File),
            "memory" | "mem" => Some(StoreBackend::Memory),
            _ => None,
        }
    }
}

/// Application configuration.
///
/// # Example
///
/// ```ignore
/// use todo_tui::config::{AppConfig, StoreBackend};
///
/// let config = AppConfig::from_env()
///     .with_store(StoreBackend::Memory)
///     .with_cell_width(10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Data file used by the file backend
    pub data_file: PathBuf,
    pub store: StoreBackend,
    /// Width units per terminal column (default: 8)
    pub cell_width: u32,
    /// Where tracing output goes
    pub log_file: PathBuf,
    /// Filter used when `TODO_TUI_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            store: StoreBackend::File,
            cell_width: DEFAULT_CELL_WIDTH,
            log_file: default_log_file(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    pub fn with_store(mut self, store: StoreBackend) -> Self {
        self.store = store;
        self
    }

    /// Set width units per column. Zero is clamped to 1.
    pub fn with_cell_width(mut self, cell_width: u32) -> Self {
        self.cell_width = cell_width.max(1);
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Defaults overlaid with `TODO_TUI_*` environment variables.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = non_empty_var(ENV_DATA) {
            config = config.with_data_file(path);
        }
        if let Some(store) = non_empty_var(ENV_STORE).and_then(|v| StoreBackend::parse(&v)) {
            config = config.with_store(store);
        }
        if let Some(width) = non_empty_var(ENV_CELL_WIDTH).and_then(|v| v.trim().parse().ok()) {
            config = config.with_cell_width(width);
        }
        if let Some(path) = non_empty_var(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }

        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn app_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// `<data dir>/todo-tui/todos.json`
pub fn default_data_file() -> PathBuf {
    app_dir().join("todos.json")
}

/// `<data dir>/todo-tui/todo-tui.log`
pub fn default_log_file() -> PathBuf {
    app_dir().join("todo-tui.log")
}
