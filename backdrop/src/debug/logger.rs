//! File-based logging initialization

use super::config::DebugConfig;
use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "backdrop-debug.log";
const REALTIME_LOG_NAME: &str = "debug-realtime.log";

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation for the main debug log
/// - Optional realtime debug log (truncated on startup, pretty format)
/// - Non-blocking writes so logging never stalls a frame
/// - Panic hook that records crashes in the log
///
/// Logs go to `logs/backdrop-debug.log` unless `BACKDROP_LOG_DIR` is set.
pub fn init(config: &DebugConfig) {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking_main, guard_main) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("backdrop=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_main)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    let realtime_path = config.log_dir.join(REALTIME_LOG_NAME);
    let realtime_file = if config.enable_realtime_log {
        // Truncate so each session starts with a fresh file
        match fs::File::create(&realtime_path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Failed to create realtime log file: {}", e);
                None
            }
        }
    } else {
        None
    };

    if let Some(file) = realtime_file {
        let (non_blocking_realtime, guard_realtime) = tracing_appender::non_blocking(file);

        let realtime_layer = fmt::layer()
            .with_writer(non_blocking_realtime)
            .with_target(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .pretty();

        subscriber.with(realtime_layer).init();

        // Writer threads must outlive the program
        std::mem::forget(guard_realtime);
        tracing::info!(
            realtime_log_path = %realtime_path.display(),
            "Realtime debug log ready"
        );
    } else {
        subscriber.init();
    }

    tracing::info!(
        log_file = %config.log_file.display(),
        log_level = %config.log_level,
        debug_ui = config.show_debug_ui,
        realtime_log = config.enable_realtime_log,
        "Debug logging initialized"
    );

    setup_panic_hook();

    std::mem::forget(guard_main);
}

/// Set up panic hook to log panics with location and backtrace
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        eprintln!("\n!!!!! PANIC at {}: {} !!!!!", location, message);

        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!(
            location = %location,
            message = %message,
            "!!!!! APPLICATION PANIC !!!!!"
        );
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}
