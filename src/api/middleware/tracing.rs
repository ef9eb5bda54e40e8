//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::{Level, Span};

type MakeSpanFn = fn(&Request<Body>) -> Span;
type OnResponseFn = fn(&Response<Body>, Duration, &Span);
type OnFailureFn = fn(ServerErrorsFailureClass, Duration, &Span);

/// Creates the tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span carrying method and path. Responses are
/// logged at `INFO` with status and latency in milliseconds; 5xx responses
/// additionally emit an `ERROR` event.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/api/create-link}: status=201 latency_ms=4 Response sent
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeSpanFn,
    (),
    OnResponseFn,
    (),
    (),
    OnFailureFn,
> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_request(())
        .on_response(on_response as OnResponseFn)
        .on_body_chunk(())
        .on_eos(())
        .on_failure(on_failure as OnFailureFn)
}

fn make_span(request: &Request<Body>) -> Span {
    tracing::span!(
        Level::INFO,
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    tracing::info!(
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "Response sent"
    );
}

fn on_failure(class: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        classification = %class,
        latency_ms = latency.as_millis() as u64,
        "Request failed"
    );
}
