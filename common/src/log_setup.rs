use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Where log output goes.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Filter used when `RUST_LOG` is unset, e.g. `"info"` or `"digiscan=debug"`.
    pub base_level: String,
    /// Directory for daily rolling log files. `None` logs to the console only.
    pub log_dir: Option<PathBuf>,
    /// Log file name prefix.
    pub file_prefix: String,
}

impl LogOptions {
    pub fn new(base_level: &str, file_prefix: &str) -> Self {
        Self {
            base_level: base_level.to_string(),
            log_dir: None,
            file_prefix: file_prefix.to_string(),
        }
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }
}

/// Installs console logging on stderr plus an optional daily rolling file log.
///
/// stdout is left to the program's own output. `RUST_LOG` overrides
/// `base_level` when set. Panics if called twice.
pub fn setup_logging(options: &LogOptions) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&options.base_level))
        .unwrap_or_else(|e| panic!("Invalid log filter: {}", e));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    let file_layer = options.log_dir.as_ref().map(|log_dir| {
        std::fs::create_dir_all(log_dir)
            .unwrap_or_else(|e| panic!("Failed to create logs directory: {}", e));

        let file_appender = tracing_appender::rolling::Builder::new()
            .rotation(tracing_appender::rolling::Rotation::DAILY)
            .filename_prefix(&options.file_prefix)
            .filename_suffix("log")
            .max_log_files(5)
            .build(log_dir)
            .unwrap_or_else(|e| panic!("Failed to create log file appender: {}", e));

        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        LOG_GUARD.set(guard).expect("Logging already initialized");

        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_file(true)
            .with_ansi(false)
            .with_writer(file_writer)
            .boxed()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .unwrap_or_else(|e| panic!("Logger initialization failed: {}", e));
}
