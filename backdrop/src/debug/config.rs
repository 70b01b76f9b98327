//! Debug configuration from environment variables

use lib_utils::envs::{get_env, get_env_flag};
use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: &str = "backdrop=info,lib_core=info,warn";

/// Debug system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log file name inside `log_dir` (rotated daily)
    pub log_file: PathBuf,
    /// Log level filter (e.g., "backdrop=debug,lib_core=trace")
    pub log_level: String,
    /// Show the in-UI debug overlay at startup
    pub show_debug_ui: bool,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Enable realtime debug log (separate from main log, truncated per session)
    pub enable_realtime_log: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        let log_dir = PathBuf::from("logs");
        Self {
            log_file: log_dir.join("backdrop-debug.log"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            show_debug_ui: cfg!(feature = "debug-mode"),
            log_dir,
            enable_realtime_log: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let log_dir = get_env("BACKDROP_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        Self {
            log_file: log_dir.join("backdrop-debug.log"),
            log_level: get_env("RUST_LOG").unwrap_or(defaults.log_level),
            show_debug_ui: get_env_flag("BACKDROP_DEBUG_UI", defaults.show_debug_ui),
            log_dir,
            enable_realtime_log: get_env_flag("BACKDROP_DEBUG_REALTIME", defaults.enable_realtime_log),
        }
    }
}
