use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{info_span, Instrument};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request id, stored in the request extensions by
/// [`request_id_middleware`] and echoed back in `x-request-id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// The id a client or proxy already sent, else a fresh UUID v4
    pub fn for_request(headers: &HeaderMap) -> Self {
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| Self(v.to_string()))
            .unwrap_or_else(|| Self(Uuid::new_v4().to_string()))
    }
}

pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = RequestId::for_request(req.headers());

    let span = info_span!(
        "request",
        request_id = %request_id.0,
        method = %req.method(),
        path = %req.uri().path(),
    );

    req.extensions_mut().insert(request_id.clone());
    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.0) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Fails with 500 when the middleware is not installed on the router
#[axum::async_trait]
impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestId>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "Missing request ID"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> Parts {
        let (parts, _) = axum::http::Request::builder().body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn incoming_header_is_reused() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(RequestId::for_request(&headers), RequestId("abc-123".to_string()));
    }

    #[test]
    fn missing_or_empty_header_gets_a_uuid() {
        let RequestId(fresh) = RequestId::for_request(&HeaderMap::new());
        assert!(Uuid::parse_str(&fresh).is_ok());

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(""));
        let RequestId(replaced) = RequestId::for_request(&headers);
        assert!(Uuid::parse_str(&replaced).is_ok());
    }

    #[tokio::test]
    async fn extractor_reads_the_extension() {
        let mut parts = parts();
        parts.extensions.insert(RequestId("req-7".to_string()));

        let id = RequestId::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(id, RequestId("req-7".to_string()));
    }

    #[tokio::test]
    async fn extractor_rejects_without_middleware() {
        let mut parts = parts();

        let (status, _) = RequestId::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
