mod gracefullshutdown;
mod logs;
mod metrics;
mod otel;
mod whatsapp;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::otel::{ServiceTracer, Telemetry, TracingContext};
pub use self::whatsapp::{encode_uri_component, format_brl, phone_digits, whatsapp_link};
