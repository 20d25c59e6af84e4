use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::database::StoreError;
use crate::lookup::LookupError;
use crate::models::ErrorResponse;

pub const MISSING_PLANET_ID: &str = "Planet ID is required in request body.";
pub const INVALID_PLANET_ID: &str = "Planet ID must be an integer.";
pub const PLANET_NOT_FOUND: &str = "Planet not found. Choose a number from 0 - 9.";
pub const PLANET_SERVER_ERROR: &str = "Server error retrieving planet.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Planet ID missing from request body")]
    MissingPlanetId,

    #[error("Planet ID is not an integer")]
    InvalidPlanetId,

    #[error("Planet {0} not found")]
    PlanetNotFound(String),

    #[error("Store error: {0}")]
    StoreFailure(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingPlanetId => (StatusCode::BAD_REQUEST, MISSING_PLANET_ID),
            ApiError::InvalidPlanetId => (StatusCode::BAD_REQUEST, INVALID_PLANET_ID),
            ApiError::PlanetNotFound(_) => (StatusCode::NOT_FOUND, PLANET_NOT_FOUND),
            ApiError::StoreFailure(ref e) => {
                error!("Store error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, PLANET_SERVER_ERROR)
            }
        };

        let response = ErrorResponse {
            error: message.to_string(),
        };

        (status, Json(response)).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(id) => ApiError::PlanetNotFound(id.to_string()),
            LookupError::Store(e) => ApiError::StoreFailure(e),
        }
    }
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(ApiError::MissingPlanetId.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidPlanetId.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::PlanetNotFound("99".to_string()).into_response().status(), StatusCode::NOT_FOUND);

        let store = ApiError::StoreFailure(StoreError::Unavailable("down".to_string()));
        assert_eq!(store.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn lookup_errors_convert() {
        let not_found: ApiError = LookupError::NotFound(12).into();
        assert!(matches!(not_found, ApiError::PlanetNotFound(ref id) if id == "12"));

        let store: ApiError = LookupError::Store(StoreError::Unavailable("x".into())).into();
        assert!(matches!(store, ApiError::StoreFailure(_)));
    }
}
