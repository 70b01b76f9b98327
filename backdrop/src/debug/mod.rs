//! # Debugging and Tracing Infrastructure
//!
//! File-based logging and in-UI diagnostics for the backdrop host.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/backdrop-debug.log` (daily rotation)
//! - **Frame metrics**: Engine tick and paint times, rolling FPS, slow-frame detection
//! - **Memory metrics**: Process memory via `sysinfo`
//! - **In-UI debug overlay**: Real-time diagnostics (toggle with Ctrl+D)
//!
//! ## Usage
//!
//! ```rust,no_run
//! let config = backdrop::debug::init();
//! tracing::info!(debug_ui = config.show_debug_ui, "Starting");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `backdrop=debug,lib_core=trace`)
//! - `BACKDROP_LOG_DIR`: Log directory (default: `logs`)
//! - `BACKDROP_DEBUG_UI`: Show the debug overlay at startup (1=on, 0=off)
//! - `BACKDROP_DEBUG_REALTIME`: Also write a per-session pretty log (1=on)

pub mod config;
pub mod logger;
pub mod metrics;

pub use config::DebugConfig;
pub use logger::init as init_logger;
pub use metrics::{
    get_frame_metrics, get_memory_metrics, init_metrics, record_frame_time,
    update_memory_metrics, FrameMetrics, MemoryMetrics,
};

/// Initialize the debugging system
///
/// Sets up file-based logging and the global metrics. Call this at
/// application startup, before any other operations.
pub fn init() -> DebugConfig {
    let config = DebugConfig::from_env();
    init_logger(&config);
    init_metrics();
    config
}
