//! Structured logging with environment variable configuration.
//!
//! Logs are written to stderr so they never mix with results on stdout. Only
//! this crate's events pass the filter; each evaluation runs inside an
//! `evaluate` span whose close event reports how long it took.

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter,
    fmt::{MakeWriter, format::FmtSpan},
};

use crate::config::Config;

fn filter_from_config(config: &Config) -> EnvFilter {
    EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), config.log_level.as_filter_str()))
}

fn build_subscriber<W>(config: &Config, writer: W) -> impl Subscriber + Send + Sync + use<W>
    where W: for<'w> MakeWriter<'w> + Send + Sync + 'static
{
    tracing_subscriber::fmt().with_env_filter(filter_from_config(config))
                             .with_writer(writer)
                             .with_span_events(FmtSpan::CLOSE)
                             .finish()
}

/// Installs a stderr subscriber filtered at the configured level.
///
/// Only the first call installs anything; later calls keep the existing
/// subscriber.
pub fn init_logging(config: &Config) {
    let subscriber = build_subscriber(config, std::io::stderr);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;
    use crate::config::LogLevel;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn init_logging_is_idempotent() {
        let config = Config::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn filter_is_scoped_to_the_crate() {
        let config = Config::default().apply_overrides(Some(LogLevel::Debug), None);
        assert_eq!(filter_from_config(&config).to_string(), "bitexpr=debug");
    }

    #[test]
    fn evaluation_span_is_closed() {
        let captured = Captured::default();
        let writer = {
            let captured = captured.clone();
            move || captured.clone()
        };
        let config = Config::default().apply_overrides(Some(LogLevel::Debug), None);

        tracing::subscriber::with_default(build_subscriber(&config, writer), || {
            crate::evaluate("5 & 3").unwrap();
        });

        let output = captured.text();
        assert!(output.contains("evaluate"), "{output}");
        assert!(output.contains("close"), "{output}");
        assert!(output.contains("evaluated expression"), "{output}");
    }

    #[test]
    fn warn_level_hides_debug_events() {
        let captured = Captured::default();
        let writer = {
            let captured = captured.clone();
            move || captured.clone()
        };

        tracing::subscriber::with_default(build_subscriber(&Config::default(), writer), || {
            crate::evaluate("5 & 3").unwrap();
        });

        assert_eq!(captured.text(), "");
    }
}
