use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace::Tracer, trace::TracerProvider};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const REQUEST_DURATION: &str = "http_request_duration_seconds";
const REQUEST_DURATION_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0];

/// Installs the log subscriber (with an OTLP span layer when an endpoint is
/// configured) and the global Prometheus recorder.
pub fn init() -> Result<PrometheusHandle, Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let otlp_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();
    let tracer = otlp_endpoint.as_deref().and_then(otlp_tracer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(tracer.map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer)))
        .try_init()?;

    match otlp_endpoint {
        Some(endpoint) => tracing::info!(%endpoint, "Exporting spans over OTLP"),
        None => tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, spans stay local"),
    }

    let handle = prometheus_builder()?.install_recorder()?;
    describe_metrics();
    Ok(handle)
}

fn otlp_tracer(endpoint: &str) -> Option<Tracer> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .inspect_err(|e| eprintln!("OTLP exporter unavailable: {e}"))
        .ok()?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .build();
    let tracer = provider.tracer("sentiment-gateway");
    opentelemetry::global::set_tracer_provider(provider);
    Some(tracer)
}

fn prometheus_builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full(REQUEST_DURATION.to_string()),
        REQUEST_DURATION_BUCKETS,
    )
}

fn describe_metrics() {
    metrics::describe_counter!("http_requests_total", "Requests served, by route and status");
    metrics::describe_histogram!(REQUEST_DURATION, "Request latency in seconds, by route");
    metrics::describe_counter!(
        "predictor_fallback_total",
        "Predictor calls answered with the fallback record"
    );
}

/// Per-request counter and latency histogram, labelled by route template.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;
    record_request(&method, &route, response.status().as_u16(), start.elapsed().as_secs_f64());
    response
}

fn record_request(method: &str, route: &str, status: u16, seconds: f64) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(REQUEST_DURATION,
        "method" => method.to_string(),
        "path" => route.to_string()
    )
    .record(seconds);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_labelled_by_route_and_status() {
        let recorder = prometheus_builder().unwrap().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_request("GET", "/sentiment/{id}", 200, 0.02);
            record_request("GET", "/sentiment/{id}", 200, 0.03);
            record_request("PUT", "/sentiment/{id}", 400, 0.001);
        });

        let rendered = handle.render();
        assert!(rendered.contains(
            r#"http_requests_total{method="GET",path="/sentiment/{id}",status="200"} 2"#
        ));
        assert!(rendered.contains(
            r#"http_requests_total{method="PUT",path="/sentiment/{id}",status="400"} 1"#
        ));
        assert!(rendered.contains(
            r#"http_request_duration_seconds_bucket{method="GET",path="/sentiment/{id}",le="0.025"} 1"#
        ));
    }
}
