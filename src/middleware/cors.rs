//! Cross-origin headers for every response, and preflight answers.
//!
//! `OPTIONS` requests are answered here with `200` and an empty body before
//! routing, so preflights succeed on guarded routes regardless of whether
//! the browser could attach credentials.

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
            ORIGIN, VARY,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use interntrack_config::CorsConfig;

pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS, PATCH";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization, Accept, X-Requested-With";
pub const MAX_AGE_SECONDS: &str = "86400";

pub async fn cors_middleware(
    State(config): State<CorsConfig>,
    req: Request,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    apply_cors_headers(response.headers_mut(), &config, origin.as_deref());
    response
}

/// Writes the cross-origin headers for a request from `origin`.
pub fn apply_cors_headers(headers: &mut HeaderMap, config: &CorsConfig, origin: Option<&str>) {
    match config
        .allow_origin_for(origin)
        .and_then(|allowed| HeaderValue::from_str(&allowed).ok())
    {
        Some(value) => {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
        None => {
            headers.remove(ACCESS_CONTROL_ALLOW_ORIGIN);
        }
    }

    // Every outcome above depends on the request origin.
    headers.append(VARY, HeaderValue::from_static("Origin"));

    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(MAX_AGE_SECONDS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use interntrack_config::CorsMode;

    fn config(mode: CorsMode) -> CorsConfig {
        CorsConfig {
            allowed_origins: vec!["https://dashboard.example.com".to_string()],
            mode,
        }
    }

    #[test]
    fn test_listed_origin_echoed_with_vary() {
        let mut headers = HeaderMap::new();
        apply_cors_headers(
            &mut headers,
            &config(CorsMode::Production),
            Some("https://dashboard.example.com"),
        );

        assert_eq!(
            headers[ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://dashboard.example.com"
        );
        assert_eq!(headers[VARY], "Origin");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], ALLOWED_METHODS);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[ACCESS_CONTROL_MAX_AGE], "86400");
    }

    #[test]
    fn test_production_omits_unknown_origin() {
        let mut headers = HeaderMap::new();
        apply_cors_headers(
            &mut headers,
            &config(CorsMode::Production),
            Some("https://elsewhere.example.com"),
        );

        assert!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        assert_eq!(headers[VARY], "Origin");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], ALLOWED_METHODS);
    }

    #[test]
    fn test_development_wildcards_unknown_origin() {
        let mut headers = HeaderMap::new();
        apply_cors_headers(
            &mut headers,
            &config(CorsMode::Development),
            Some("https://elsewhere.example.com"),
        );

        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[VARY], "Origin");
    }
}
