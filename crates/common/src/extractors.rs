//! Custom axum extractors for Second Brain

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::Error;

/// JSON extractor that validates the deserialized value automatically.
///
/// All input errors (missing content type, malformed JSON, wrong shape,
/// constraint violations) surface as `Error::Validation`, i.e. 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for `ValidatedJson`
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => {
                tracing::debug!(error = %e.body_text(), "Rejected request body");
                Error::Validation("Invalid request body".to_string()).into_response()
            }
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value
            .validate()
            .map_err(|e| ValidatedJsonRejection::Validation(validation_error(&e)))?;
        Ok(ValidatedJson(value))
    }
}

/// Flatten validator output into a single readable message, fields sorted.
fn validation_error(errors: &ValidationErrors) -> Error {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort_unstable();
    Error::Validation(format!("Invalid request body: {}", fields.join(", ")))
}
