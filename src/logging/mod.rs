use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "versions=info";
const VERBOSE_DIRECTIVES: &str = "versions=debug";

/// Filter for this crate's events. Verbose mode ignores `RUST_LOG`.
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_DIRECTIVES)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
    }
}

/// Compact fmt subscriber writing through `writer`.
pub fn build_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(false)
        .compact()
        .finish()
}

/// Install the global subscriber for a binary embedding this crate.
///
/// Fails if a global subscriber is already set; the existing one is kept.
pub fn init_logging(verbose: bool) -> Result<(), TryInitError> {
    build_subscriber(build_filter(verbose), std::io::stdout).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_rejection(filter: EnvFilter, input: &str) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = build_subscriber(filter, move || writer.clone());
        tracing::subscriber::with_default(subscriber, || {
            assert!(Version::parse(input).is_err());
        });
        captured.contents()
    }

    #[test]
    fn verbose_filter_logs_rejected_versions() {
        let out = capture_rejection(build_filter(true), "1--x");
        assert!(out.contains("Rejected version \"1--x\": 2 suffix separators"), "got: {}", out);
    }

    #[test]
    fn verbose_filter_names_bad_component() {
        let out = capture_rejection(build_filter(true), "1.x");
        assert!(out.contains("component \"x\""), "got: {}", out);
    }

    #[test]
    fn default_directives_hide_debug_events() {
        let out = capture_rejection(EnvFilter::new(DEFAULT_DIRECTIVES), "1.1.1.1.1");
        assert!(out.is_empty(), "got: {}", out);
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init_logging(false);
        assert!(init_logging(true).is_err());
    }
}
