use axum::{
    Json,
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use intake_core::ErrorBody;

/// Header carrying the service API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// API Key authentication state
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// True when the request may proceed. With no key configured the
    /// check always passes.
    fn allows(&self, headers: &HeaderMap) -> bool {
        match &self.api_key {
            None => true,
            Some(expected) => headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|provided| provided == expected),
        }
    }
}

/// API key authentication middleware
pub async fn auth_middleware(request: Request, next: Next) -> Response {
    let auth = request.extensions().get::<ApiKeyAuth>().cloned();

    if let Some(auth) = auth {
        if !auth.allows(request.headers()) {
            let body = ErrorBody::unauthenticated("missing or invalid API key");
            return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
        }
    }

    next.run(request).await
}
