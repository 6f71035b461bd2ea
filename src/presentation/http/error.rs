use crate::application::{
    ApplicationResult,
    error::{ApplicationError, ValidationErrors},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Every failure is rendered as `{"errors": {field: [message, ...]}}`.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    errors: ValidationErrors,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, errors)
            }
            ApplicationError::Conflict { field } => Self::single(
                StatusCode::CONFLICT,
                field,
                "has already been taken",
            ),
            ApplicationError::NotFound(entity) => {
                Self::single(StatusCode::NOT_FOUND, entity.as_str(), "not found")
            }
            ApplicationError::Forbidden(msg) => Self::single(StatusCode::FORBIDDEN, "body", msg),
            ApplicationError::Unauthenticated(msg) => {
                Self::single(StatusCode::UNAUTHORIZED, "body", msg)
            }
            ApplicationError::InvalidCredentials => Self::single(
                StatusCode::UNAUTHORIZED,
                "email or password",
                "is invalid",
            ),
            err @ (ApplicationError::Storage { .. } | ApplicationError::Infrastructure(_)) => {
                tracing::error!(error = %err, source = ?std::error::Error::source(&err), "request failed");
                Self::single(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "body",
                    "internal server error",
                )
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, errors: ValidationErrors) -> Self {
        Self { status, errors }
    }

    fn single(status: StatusCode, field: &str, message: impl Into<String>) -> Self {
        Self::new(status, ValidationErrors::single(field, message))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { errors: self.errors })).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    errors: ValidationErrors,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
