use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

pub fn init_logger(
    sdk_logger_provider: Option<&SdkLoggerProvider>,
    component: &str,
    is_dev: bool,
    enable_file: bool,
) {
    let default_level = if is_dev { "info" } else { "off" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(true)
        .with_filter(console_filter)
        .boxed();

    let mut layers = vec![console_layer];

    if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        layers.push(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .json()
                .with_filter(EnvFilter::new("info"))
                .boxed(),
        );

        std::mem::forget(guard);
    }

    if let Some(provider) = sdk_logger_provider {
        let otel_filter = ["hyper", "opentelemetry", "tonic", "h2", "reqwest"]
            .iter()
            .filter_map(|target| format!("{target}=off").parse().ok())
            .fold(EnvFilter::new("info"), |filter, directive| {
                filter.add_directive(directive)
            });

        layers.push(
            OpenTelemetryTracingBridge::new(provider)
                .with_filter(otel_filter)
                .boxed(),
        );
    }

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(layers).try_init();
}
