use std::sync::OnceLock;

use crate::utils::metrics::{Method, Metrics, Status};
use anyhow::Result;
use opentelemetry::{
    Context, KeyValue, global,
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use opentelemetry_otlp::{LogExporter, MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource, logs::SdkLoggerProvider, metrics::SdkMeterProvider, trace::SdkTracerProvider,
};
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info};

/// OTLP providers, installed only when an exporter endpoint is configured.
#[derive(Clone)]
pub struct Telemetry {
    service_name: String,
    otel_endpoint: Option<String>,
    tracer: Option<SdkTracerProvider>,
    meter: Option<SdkMeterProvider>,
    logger: Option<SdkLoggerProvider>,
}

pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}

impl Telemetry {
    pub fn new(service_name: impl Into<String>, otel_endpoint: Option<String>) -> Self {
        Self {
            service_name: service_name.into(),
            otel_endpoint,
            tracer: None,
            meter: None,
            logger: None,
        }
    }

    fn get_resource(&self) -> Resource {
        static RESOURCE: OnceLock<Resource> = OnceLock::new();
        RESOURCE
            .get_or_init(|| {
                Resource::builder()
                    .with_service_name(self.service_name.clone())
                    .build()
            })
            .clone()
    }

    /// Builds tracer, meter and logger providers. Returns the logger provider
    /// for the tracing bridge when exporting is enabled.
    pub fn init(&mut self) -> Result<Option<SdkLoggerProvider>> {
        let Some(endpoint) = self.otel_endpoint.clone() else {
            return Ok(None);
        };

        let span_exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint.clone())
            .build()?;
        let tracer = SdkTracerProvider::builder()
            .with_resource(self.get_resource())
            .with_batch_exporter(span_exporter)
            .build();
        global::set_tracer_provider(tracer.clone());

        let metric_exporter = MetricExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint.clone())
            .build()?;
        let meter = SdkMeterProvider::builder()
            .with_resource(self.get_resource())
            .with_periodic_exporter(metric_exporter)
            .build();
        global::set_meter_provider(meter.clone());

        let log_exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()?;
        let logger = SdkLoggerProvider::builder()
            .with_resource(self.get_resource())
            .with_batch_exporter(log_exporter)
            .build();

        self.tracer = Some(tracer);
        self.meter = Some(meter);
        self.logger = Some(logger.clone());

        Ok(Some(logger))
    }

    pub async fn shutdown(self) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(tracer) = self.tracer {
            if let Err(e) = tracer.shutdown() {
                errors.push(format!("tracer provider: {e}"));
            }
        }
        if let Some(meter) = self.meter {
            if let Err(e) = meter.shutdown() {
                errors.push(format!("meter provider: {e}"));
            }
        }
        if let Some(logger) = self.logger {
            if let Err(e) = logger.shutdown() {
                errors.push(format!("logger provider: {e}"));
            }
        }

        if !errors.is_empty() {
            anyhow::bail!("Failed to shutdown providers:\n{}", errors.join("\n"));
        }

        Ok(())
    }
}

/// Span plus request metrics around one service operation.
#[derive(Clone, Debug)]
pub struct ServiceTracer {
    tracer_name: &'static str,
    metrics: Metrics,
}

impl ServiceTracer {
    pub fn new(tracer_name: &'static str, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(&tracer_name.replace('-', "_"), registry);
        Self {
            tracer_name,
            metrics,
        }
    }

    pub fn start(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = global::tracer(self.tracer_name);
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    pub fn success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, true, message);
    }

    pub fn failure(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, false, message);
    }

    fn complete(&self, tracing_ctx: &TracingContext, method: Method, is_success: bool, message: &str) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}
