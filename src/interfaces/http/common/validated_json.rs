//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value. Any
//! failure (unreadable body, malformed JSON, missing fields) is answered
//! with the endpoint's "missing parameters" response taken from
//! [`RequestContract`].
//!
//! The voice client does not always send a `Content-Type` header, so the
//! body is parsed regardless of it. An empty body counts as `{}`.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::interfaces::http::error::ApiError;

/// What an endpoint reports when its request body is unusable.
pub trait RequestContract {
    const ERROR: &'static str = "Missing required parameters";
    const REQUIRED: &'static [&'static str];

    fn rejection() -> ApiError {
        ApiError::missing_parameters(Self::ERROR, Self::REQUIRED)
    }
}

/// An extractor that deserializes JSON and validates it.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct MenuRequest {
///     #[validate(required, length(min = 1))]
///     item_name: Option<String>,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<MenuRequest>) {
///     // `body` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + RequestContract,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "Unreadable request body");
            T::rejection()
        })?;

        let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        let value: T = serde_json::from_slice(raw).map_err(|e| {
            debug!(error = %e, "Malformed JSON body");
            T::rejection()
        })?;

        value.validate().map_err(|e| {
            debug!(errors = %e, "Request validation failed");
            T::rejection()
        })?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
