//! Integration tests for the webenv servers.
//!
//! Each server's `app()` router is driven in-process with
//! `tower::ServiceExt::oneshot`; no sockets or running servers are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p webenv-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping` - View-state redirects, purchase modal and cart flows
//! - `recipe` - Landing content, filters, step navigation, static files
//! - `home` - Landing tiles and wiki frame

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;
use url::form_urlencoded;

/// Largest response body the helpers will read.
const BODY_LIMIT: usize = 4 * 1024 * 1024;

/// Response with its body read into a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub request_id: Option<String>,
    pub body: String,
}

/// In-process client replaying the session cookie like a browser would.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    #[must_use]
    pub const fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// `GET uri`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::get(uri)
            .body(Body::empty())
            .expect("Failed to build GET request");
        self.send(request).await
    }

    /// `POST uri` with an urlencoded form body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build POST request");
        self.send(request).await
    }

    /// `GET` the `Location` of a redirect.
    ///
    /// # Panics
    ///
    /// Panics if `response` is not a redirect.
    pub async fn follow(&mut self, response: &TestResponse) -> TestResponse {
        assert!(
            response.status.is_redirection(),
            "expected redirect, got {}",
            response.status
        );
        let location = response
            .location
            .clone()
            .expect("Redirect without Location header");
        self.get(&location).await
    }

    async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request.headers_mut().insert(
                header::COOKIE,
                cookie.parse().expect("Invalid cookie header"),
            );
        }

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            && let Some(pair) = set_cookie.split(';').next()
        {
            self.cookie = Some(pair.trim().to_string());
        }

        let header_value = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(ToString::to_string)
        };
        let status = response.status();
        let location = header_value(header::LOCATION.as_str());
        let request_id = header_value(webenv_core::server::REQUEST_ID_HEADER);

        let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("Failed to read response body");

        TestResponse {
            status,
            location,
            request_id,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
