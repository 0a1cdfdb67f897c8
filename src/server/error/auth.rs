use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request used a parameter or endpoint reserved for signed-in users
    /// but no user is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authentication credentials were not provided.")]
    AuthenticationRequired,

    /// The signed-in user is not allowed to act on the resource.
    ///
    /// The message is logged and a generic 403 Forbidden body is returned.
    ///
    /// # Fields
    /// - ID of the user attempting the action
    /// - Description of the denied action, for logging only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `AuthenticationRequired`
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
