use std::{net::SocketAddr, time::Duration};

use axum::{
    extract::{ConnectInfo, Request},
    response::Response,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, field, Span};

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    let layer = TraceLayer::new_for_http()
        .make_span_with(request_span)
        .on_request(|_: &Request, _: &Span| debug!("request received"))
        .on_response(log_response)
        .on_body_chunk(())
        .on_eos(())
        .on_failure(());
    router.layer(layer)
}

/// `request_id` is filled in by the request id middleware.
fn request_span(request: &Request) -> Span {
    let method = request.method();
    let uri = request.uri();
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    tracing::debug_span!(
        "http-request",
        %method,
        %uri,
        ?peer,
        request_id = field::Empty,
    )
}

fn log_response(response: &Response, latency: Duration, _span: &Span) {
    debug!(status = %response.status(), ?latency, "response sent");
}
