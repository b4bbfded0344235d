//! Request extractors shared by the handlers.

use axum::extract::{FromRequest, Request};
use axum::Json;
use nexa_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs the payload's `validator` rules.
///
/// Malformed JSON, missing fields and failed rules all reject with a 400
/// JSON error instead of axum's plain-text 415/422 rejections.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateStaff>) -> AppResult<Json<()>> {
///     // `input` is deserialized and validated here.
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        validate_input(&value)?;

        Ok(Self(value))
    }
}
