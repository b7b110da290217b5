//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Route handlers return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use emporium_core::{CartError, UnknownCategory};
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cart operation rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Category key in the URL is not a known category.
    #[error("Category error: {0}")]
    Category(#[from] UnknownCategory),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Template(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Cart(CartError::UnknownProduct(_)) | Self::Category(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Template(_) => "Internal server error",
            Self::Cart(CartError::UnknownProduct(_)) => "Product not found",
            Self::Category(_) => "Category not found",
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use emporium_core::ProductId;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(UnknownCategory("tablet".to_string()));
        assert!(err.to_string().starts_with("Category error: "));

        let err = AppError::from(CartError::UnknownProduct(ProductId::new("toaster1")));
        assert_eq!(err.to_string(), "Cart error: unknown product: toaster1");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(CartError::UnknownProduct(ProductId::new("x")).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(UnknownCategory("tablet".to_string()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(askama::Error::Fmt.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
