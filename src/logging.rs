use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "rendezvous.log";

/// Directive used when `RUST_LOG` is not set.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("rendezvous={}", level)
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Split a log file path into the directory and file name prefix used by
/// the daily rolling appender.
fn appender_parts(log_path: &Path) -> (PathBuf, PathBuf) {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file = log_path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    (dir, file)
}

/// Initialize the logging system
///
/// Logs go to stderr in compact form. With `log_file`, a JSON copy is also
/// written to a daily-rotated file next to that path.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        let _ = subscriber.try_init();
        return;
    };

    let (dir, file) = appender_parts(&log_path);
    let _ = std::fs::create_dir_all(&dir);
    let file_layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(dir, file))
        .with_ansi(false)
        .json();

    let _ = subscriber.with(file_layer).try_init();
}
