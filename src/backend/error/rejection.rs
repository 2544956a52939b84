/**
 * Request Body Rejections
 *
 * `ApiJson` and `ApiForm` wrap Axum's `Json` and `Form` extractors so that a
 * body that cannot be read or deserialized is reported in the same
 * `{"error", "status", "field"}` format as every other API error.
 *
 * # Mapping
 *
 * - Missing field or wrong type: validation error (400) naming the field
 * - Malformed syntax, wrong content type: the rejection's own status
 */

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    Form, Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

/// Field name used when the rejection does not point at one
const BODY_FIELD: &str = "body";

/// JSON body extractor that rejects with `BackendError`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state).await?;
        Ok(Self(value))
    }
}

/// URL-encoded form extractor that rejects with `BackendError`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiForm<T>(pub T);

impl<T, S> FromRequest<S> for ApiForm<T>
where
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(request, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        if matches!(rejection, JsonRejection::JsonDataError(_)) {
            invalid_body(&text)
        } else {
            Self::handler(rejection.status(), text)
        }
    }
}

impl From<FormRejection> for BackendError {
    fn from(rejection: FormRejection) -> Self {
        let text = rejection.body_text();
        match rejection {
            FormRejection::FailedToDeserializeForm(_)
            | FormRejection::FailedToDeserializeFormBody(_) => invalid_body(&text),
            _ => Self::handler(rejection.status(), text),
        }
    }
}

fn invalid_body(text: &str) -> BackendError {
    let field = rejected_field(text).unwrap_or(BODY_FIELD);
    SharedError::validation(field, text).into()
}

/// Pull the offending field out of a deserializer message
///
/// Handles `missing field `title`` and the `priority: invalid type: ...`
/// prefix that path-aware deserialization puts in front of the cause.
fn rejected_field(text: &str) -> Option<&str> {
    if let Some((_, rest)) = text.split_once("missing field `") {
        return rest.split('`').next().filter(|field| !field.is_empty());
    }

    let detail = text.rsplit_once("target type: ").map_or(text, |(_, detail)| detail);
    let (path, _) = detail.split_once(": ")?;
    (!path.is_empty() && !path.contains(char::is_whitespace)).then_some(path)
}
