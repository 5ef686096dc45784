//! Telemetry initialization - tracing setup.

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Service name recorded at startup.
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            service_name: "blog-api".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(defaults.json_logs),
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
        }
    }
}

/// Build the subscriber: `EnvFilter` plus a JSON or pretty `fmt` layer
/// writing to `writer`.
fn subscriber<W>(config: &TelemetryConfig, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,blog_infra=debug"));

    let json = config
        .json_logs
        .then(|| fmt::layer().json().with_writer(writer.clone()));
    let pretty = (!config.json_logs).then(|| fmt::layer().pretty().with_writer(writer));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
}

/// Initialize the global tracing subscriber. Logs go to stderr.
pub fn init_telemetry(config: &TelemetryConfig) {
    subscriber(config, std::io::stderr).init();

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use actix_web::ResponseError;

    use super::*;
    use crate::middleware::error::AppError;

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
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_failure_events_reach_the_writer() {
        let captured = Captured::default();
        let config = TelemetryConfig {
            json_logs: true,
            ..Default::default()
        };
        let writer = captured.clone();

        tracing::subscriber::with_default(subscriber(&config, move || writer.clone()), || {
            AppError::Internal("storage unavailable".to_string()).error_response();
        });

        let logs = captured.contents();
        assert!(logs.contains("storage unavailable"));
        assert!(logs.contains("ERROR"));
    }
}
