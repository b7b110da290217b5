//! Integration tests for Emporium.
//!
//! The tests drive the full storefront router in process, the same stack
//! the binary serves, over a throwaway `SQLite` session database, and carry
//! the session cookie between requests the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p emporium-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart add/remove, persistence across requests, panel
//! - `storefront_products` - Page, search and category grids

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        HeaderMap, Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
    },
};
use emporium_storefront::{app, config::StorefrontConfig, db, state::AppState};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// Header carrying client-side events on HTMX responses.
pub const HX_TRIGGER: &str = "HX-Trigger";

/// An in-process storefront with its own session database.
#[derive(Debug, Clone)]
pub struct TestServer {
    database_url: String,
    app: Router,
}

impl TestServer {
    /// Start a storefront over a fresh session database in the temp dir.
    ///
    /// # Errors
    ///
    /// Returns an error if the session database cannot be created.
    pub async fn start() -> Result<Self, sqlx::Error> {
        let path = std::env::temp_dir().join(format!("emporium-it-{}.sqlite", Uuid::new_v4()));
        Self::open(format!("sqlite://{}", path.display())).await
    }

    /// Start a storefront over an existing session database.
    ///
    /// # Errors
    ///
    /// Returns an error if the session database cannot be opened.
    pub async fn open(database_url: String) -> Result<Self, sqlx::Error> {
        let config = StorefrontConfig {
            session_database_url: database_url.clone(),
            ..StorefrontConfig::default()
        };

        let pool = db::create_pool(&config.session_database_url).await?;
        let session_store = db::create_session_store(pool).await?;

        Ok(Self {
            database_url,
            app: app(AppState::new(config), session_store),
        })
    }

    /// A new server process over this server's session database.
    ///
    /// # Errors
    ///
    /// Returns an error if the session database cannot be reopened.
    pub async fn restart(&self) -> Result<Self, sqlx::Error> {
        Self::open(self.database_url.clone()).await
    }

    /// A browser with no cookies.
    #[must_use]
    pub fn browser(&self) -> TestBrowser {
        TestBrowser {
            app: self.app.clone(),
            cookie: None,
        }
    }
}

/// A single browser talking to an in-process storefront.
///
/// The session cookie from the latest `Set-Cookie` is sent with every
/// following request. Cloning a browser gives a second tab sharing the
/// cookie.
#[derive(Debug, Clone)]
pub struct TestBrowser {
    app: Router,
    cookie: Option<String>,
}

impl TestBrowser {
    /// This browser, cookie included, pointed at `server`.
    #[must_use]
    pub fn visit(&self, server: &TestServer) -> Self {
        Self {
            app: server.app.clone(),
            cookie: self.cookie.clone(),
        }
    }

    /// The session cookie currently held, as `name=value`.
    #[must_use]
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Issue a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if the response body cannot be read.
    pub async fn get(&mut self, uri: &str) -> Result<TestResponse, axum::Error> {
        let request = self.request("GET", uri).body(Body::empty());
        self.send(request).await
    }

    /// Issue a POST request with an urlencoded form body.
    ///
    /// # Errors
    ///
    /// Returns an error if the response body cannot be read.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> Result<TestResponse, axum::Error> {
        let request = self
            .request("POST", uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()));
        self.send(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(
        &mut self,
        request: Result<Request<Body>, axum::http::Error>,
    ) -> Result<TestResponse, axum::Error> {
        let request = request.map_err(axum::Error::new)?;
        let response = match self.app.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        if let Some(cookie) = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            self.cookie = Some(cookie.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await?;

        Ok(TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

/// A buffered response.
#[derive(Debug, Clone)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The parsed `HX-Trigger` header, or `Value::Null` when absent.
    #[must_use]
    pub fn triggers(&self) -> Value {
        self.headers
            .get(HX_TRIGGER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| serde_json::from_str(v).ok())
            .unwrap_or(Value::Null)
    }

    /// Number of times `needle` occurs in the body.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.body.matches(needle).count()
    }
}
