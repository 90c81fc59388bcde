use axum::http::request::Parts;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Local frontend dev server, always allowed.
const LOCAL_DEV_ORIGIN: &str = "http://localhost:5173";

/// Cross-origin allow-list for the API.
///
/// Holds the production frontend origin (when configured) plus the local dev
/// origin. Entries are stored with any trailing slash stripped and incoming
/// origins are normalized the same way before comparison.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Vec<String>,
}

impl OriginPolicy {
    pub fn new(frontend_url: Option<&str>) -> Self {
        let mut allowed = Vec::with_capacity(2);
        if let Some(url) = frontend_url {
            let url = url.trim_end_matches('/');
            if !url.is_empty() {
                allowed.push(url.to_string());
            }
        }
        allowed.push(LOCAL_DEV_ORIGIN.to_string());
        Self { allowed }
    }

    /// Whether a request declaring `origin` may proceed.
    ///
    /// Requests without an `Origin` header (same-origin navigation, curl,
    /// Postman) are always allowed; browsers enforce nothing for them anyway.
    pub fn allows(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => {
                let origin = origin.trim_end_matches('/');
                self.allowed.iter().any(|allowed| allowed == origin)
            }
        }
    }

    /// Build the CORS middleware for the router. Also answers preflight
    /// OPTIONS requests, so no explicit OPTIONS route is needed.
    pub fn into_layer(self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
                let ok = self.allows(origin.to_str().ok());
                if !ok {
                    warn!("blocked by CORS: {origin:?}");
                }
                ok
            }))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_origin_is_allowed() {
        let policy = OriginPolicy::new(Some("https://app.propertyhub.example"));
        assert!(policy.allows(None));
    }

    #[test]
    fn configured_frontend_is_allowed() {
        let policy = OriginPolicy::new(Some("https://app.propertyhub.example"));
        assert!(policy.allows(Some("https://app.propertyhub.example")));
    }

    #[test]
    fn local_dev_origin_is_always_allowed() {
        let policy = OriginPolicy::new(None);
        assert!(policy.allows(Some("http://localhost:5173")));
    }

    #[test]
    fn trailing_slash_is_normalized_on_both_sides() {
        let policy = OriginPolicy::new(Some("https://app.propertyhub.example/"));
        assert!(policy.allows(Some("https://app.propertyhub.example")));
        assert!(policy.allows(Some("https://app.propertyhub.example/")));
    }

    #[test]
    fn unknown_origin_is_rejected() {
        let policy = OriginPolicy::new(Some("https://app.propertyhub.example"));
        assert!(!policy.allows(Some("https://evil.example")));
    }

    #[test]
    fn empty_frontend_url_adds_no_entry() {
        let policy = OriginPolicy::new(Some(""));
        assert!(!policy.allows(Some("")));
        assert!(policy.allows(Some("http://localhost:5173")));
    }

    #[test]
    fn scheme_must_match_exactly() {
        let policy = OriginPolicy::new(Some("https://app.propertyhub.example"));
        assert!(!policy.allows(Some("http://app.propertyhub.example")));
    }
}
