use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "ojou_core=warn,ojou_cli=warn";
const FILE_FILTER: &str = "ojou_core=debug,ojou_cli=debug";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// With `log_dir`, events are written as JSON lines to `ojou-trace.jsonl`
/// in that directory; otherwise human-readable output goes to stderr.
/// `RUST_LOG` overrides the default filter either way. Keep the returned
/// guard alive until exit or buffered file events are lost.
pub fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "ojou-trace.jsonl");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            // A second install (tests, embedding) keeps the first subscriber.
            let _ = tracing_subscriber::fmt()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                .with_env_filter(env_filter(FILE_FILTER))
                .try_init();
            Some(guard)
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_env_filter(env_filter(DEFAULT_FILTER))
                .try_init();
            None
        }
    }
}
