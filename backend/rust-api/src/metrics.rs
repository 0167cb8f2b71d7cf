use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .unwrap();

    // Tutoring Metrics
    pub static ref TUTOR_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "tutor_requests_total",
        "Total number of tutoring requests by mode and outcome",
        &["mode", "outcome"]
    )
    .unwrap();

    pub static ref GATEWAY_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "gateway_request_duration_seconds",
        "AI gateway call duration in seconds",
        &["outcome"],
        vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 20.0, 30.0, 60.0]
    )
    .unwrap();

    pub static ref PRONUNCIATION_SCORES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "pronunciation_scores_total",
        "Total number of scored pronunciation attempts",
        &["verdict"]
    )
    .unwrap();
}

/// Renders every registered metric in the Prometheus text format.
pub fn render_metrics() -> Result<String, String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| format!("Failed to encode metrics: {}", e))?;

    String::from_utf8(buffer).map_err(|e| format!("Failed to convert metrics to string: {}", e))
}
