use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use opentelemetry::{KeyValue, global, trace::TraceError};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    runtime,
    trace::{RandomIdGenerator, Sampler, Tracer},
};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs one line per request.
///
/// Client errors are expected traffic (missing `class_id`, uncached weeks) and
/// stay at `debug`.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    debug!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status();

    match status.as_u16() {
        400..=499 => {
            debug!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Client error"
            );
        }
        _ => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Request completed"
            );
        }
    }

    response
}

fn init_tracer(otlp_endpoint: &str) -> Result<Tracer, TraceError> {
    // Set up trace context propagator for distributed tracing
    global::set_text_map_propagator(TraceContextPropagator::new());

    let resource = Resource::new(vec![
        KeyValue::new(SERVICE_NAME, env!("CARGO_PKG_NAME")),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        KeyValue::new(
            "environment",
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        ),
    ]);

    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(otlp_endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(
            opentelemetry_sdk::trace::Config::default()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)
}

fn default_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{krate}={level},isitcancelled_cache={level},tower_http=warn,hyper=warn,h2=warn,tonic=warn,redis=warn",
            krate = env!("CARGO_CRATE_NAME"),
            level = log_level
        ))
    })
}

/// Installs the global subscriber.
///
/// # Environment Variables
///
/// - `RUST_LOG` / `LOG_LEVEL`: console filter (default `info`)
/// - `LOG_DIR`: when set, JSON logs are appended to a daily rolling file there
/// - `OTEL_EXPORTER_OTLP_ENDPOINT`: when set, spans are exported over OTLP
pub fn init_tracing() {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(default_filter());

    // JSON file layer for structured logs (can be ingested by Loki)
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());
    let json_appender = log_dir.as_deref().map(|dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("isitcancelled")
            .filename_suffix("json")
            .build(dir)
    });
    let (json_layer, appender_error) = match json_appender {
        Some(Ok(appender)) => (
            Some(
                fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new("info")),
            ),
            None,
        ),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let otlp_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .ok()
        .filter(|e| !e.is_empty());
    let (otel_layer, otel_error) = match otlp_endpoint.as_deref().map(init_tracer) {
        Some(Ok(tracer)) => (
            Some(tracing_opentelemetry::layer().with_tracer(tracer)),
            None,
        ),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .with(otel_layer)
        .init();

    match (&log_dir, appender_error) {
        (Some(dir), None) => info!(log_dir = %dir, "JSON file logging enabled"),
        (Some(dir), Some(e)) => warn!(
            log_dir = %dir,
            error = %e,
            "Failed to open log directory, continuing with console logging only"
        ),
        (None, _) => {}
    }
    match (&otlp_endpoint, otel_error) {
        (Some(endpoint), None) => info!(otlp.endpoint = %endpoint, "OpenTelemetry tracer initialized"),
        (Some(endpoint), Some(e)) => warn!(
            otlp.endpoint = %endpoint,
            error = %e,
            "Failed to initialize OpenTelemetry, continuing without it"
        ),
        (None, _) => {}
    }
}
