//! Tag each request with a unique id, echoed back in the `X-Request-Id`
//! response header and recorded on the `http-request` span.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use base64::{display::Base64Display, engine::general_purpose::URL_SAFE_NO_PAD};
use tracing::{field, Span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Must be added before [`trace::add`](super::trace::add) so that it runs
/// inside the request span.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(tag_request))
}

async fn tag_request(request: Request, next: Next) -> Response {
    let request_id = RequestId::generate();
    Span::current().record("request_id", field::display(request_id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Time ordered, so ids of later requests sort after earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestId(Uuid);

impl RequestId {
    fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Base64Display::new(self.0.as_bytes(), &URL_SAFE_NO_PAD).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = RequestId::generate().to_string();
        let b = RequestId::generate().to_string();

        assert_ne!(a, b);
        assert_eq!(a.len(), 22);
        assert!(HeaderValue::from_str(&a).is_ok());
    }
}
