use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use validator::{ValidationErrors, ValidationErrorsKind};

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

#[derive(Debug, ThisError)]
pub enum PortalError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("password hash error: {0}")]
    PasswordHash(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl PortalError {
    /// Map an opaque error onto the response taxonomy by its message.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();
        if lowered.contains("not found") {
            PortalError::NotFound("Resource tidak ditemukan".to_string())
        } else if lowered.contains("unauthorized") {
            PortalError::Unauthorized
        } else {
            PortalError::Internal(message)
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PortalError::Validation(_) | PortalError::BadRequest(_) => VALIDATION_ERROR,
            PortalError::Unauthorized => UNAUTHORIZED,
            PortalError::NotFound(_) | PortalError::Database(SqlxError::RowNotFound) => NOT_FOUND,
            PortalError::Database(_) | PortalError::PasswordHash(_) | PortalError::Internal(_) => {
                INTERNAL_ERROR
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.code() {
            VALIDATION_ERROR => StatusCode::BAD_REQUEST,
            UNAUTHORIZED => StatusCode::UNAUTHORIZED,
            NOT_FOUND => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Re-map catch-all errors by their message; typed variants keep their code.
    pub fn reclassified(self) -> Self {
        match self {
            PortalError::Internal(message) => PortalError::classify(message),
            other => other,
        }
    }

    /// Log unexpected failures with the originating request, then map them
    /// onto the closest taxonomy entry.
    pub fn logged(self, context: &str) -> Self {
        if self.code() == INTERNAL_ERROR {
            tracing::error!(context, error = %self, "request failed");
        } else {
            tracing::debug!(context, error = %self, "request rejected");
        }
        self.reclassified()
    }

    /// Per-field messages, empty for every variant but `Validation`.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            PortalError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<ValidationErrors> for PortalError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .errors()
            .iter()
            .flat_map(|(field, kind)| match kind {
                ValidationErrorsKind::Field(list) => list
                    .iter()
                    .map(|e| FieldError {
                        field: wire_name(field),
                        message: e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} tidak valid", field)),
                    })
                    .collect::<Vec<_>>(),
                _ => Vec::new(),
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        PortalError::Validation(fields)
    }
}

/// Payload structs use snake_case fields, the wire uses camelCase.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let body = match self {
            PortalError::Validation(errors) => ApiErrorResponse {
                success: false,
                message: "Validasi gagal".to_string(),
                errors: Some(errors),
                code,
            },
            PortalError::BadRequest(message) | PortalError::NotFound(message) => {
                ApiErrorResponse {
                    success: false,
                    message,
                    errors: None,
                    code,
                }
            }
            PortalError::Unauthorized => ApiErrorResponse {
                success: false,
                message: "Tidak memiliki akses".to_string(),
                errors: None,
                code,
            },
            PortalError::Database(SqlxError::RowNotFound) => ApiErrorResponse {
                success: false,
                message: "Resource tidak ditemukan".to_string(),
                errors: None,
                code,
            },
            PortalError::Database(_) | PortalError::PasswordHash(_) | PortalError::Internal(_) => {
                ApiErrorResponse {
                    success: false,
                    message: "Terjadi kesalahan server".to_string(),
                    errors: None,
                    code,
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

/// One rejected field, surfaced verbatim to API callers and form views.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Standardized API error envelope
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    pub code: &'static str,
}
