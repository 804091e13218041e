//! Support for application configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use once_cell::sync::Lazy;

/// The storage slot the task list is persisted under
pub const STORAGE_KEY: &str = "tasks";

/// How often the displayed date is refreshed
pub const CLOCK_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Name of the log file, inside the data folder
pub const LOG_FILE_NAME: &str = "day-tracker.log";

/// Environment variable that overrides the data folder
pub const DATA_DIR_ENV_VAR: &str = "DAY_TRACKER_DIR";

/// Title of the task panel.
/// Feel free to override it before starting the UI.
pub static HEADING: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Important Tasks".to_string())));

/// Title of the footer of the task panel.
/// Feel free to override it before starting the UI.
pub static FOOTER_TITLE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Special message".to_string())));

/// Content of the footer of the task panel.
/// Feel free to override it before starting the UI.
pub static FOOTER_MESSAGE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Make today count! Focus on what matters most.".to_string())));

/// Returns the current value of one of the overridable strings above
pub fn current(setting: &Lazy<Arc<Mutex<String>>>) -> String {
    match setting.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}


/// Runtime settings, resolved from the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Where the task list and the log file are stored
    pub data_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var_os(DATA_DIR_ENV_VAR).map(PathBuf::from),
            std::env::var_os("HOME").map(PathBuf::from),
        )
    }

    fn resolve(data_dir: Option<PathBuf>, home: Option<PathBuf>) -> Self {
        let data_dir = match (data_dir, home) {
            (Some(dir), _) if dir.as_os_str().is_empty() == false => dir,
            (_, Some(home)) if home.as_os_str().is_empty() == false => home.join(".config").join("day-tracker"),
            _ => PathBuf::from(".day-tracker"),
        };
        Self { data_dir }
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}
