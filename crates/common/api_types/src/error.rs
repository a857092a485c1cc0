use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error(
        "Beacon node is currently syncing and not serving request on that endpoint. Details: {0}"
    )]
    UnderSyncing(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage {
            code: self.status_code().as_u16(),
            message: self.to_string(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnderSyncing(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorMessage {
    pub code: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;

    use super::ApiError;

    #[test]
    fn status_codes_match_error_classes() {
        assert_eq!(ApiError::BadRequest("".into()).status_code(), 400);
        assert_eq!(ApiError::NotFound("".into()).status_code(), 404);
        assert_eq!(ApiError::InternalError("".into()).status_code(), 500);
        assert_eq!(ApiError::UnderSyncing("{}".into()).status_code(), 503);
    }

    #[test]
    fn syncing_message_names_the_condition() {
        let error = ApiError::UnderSyncing("{\"head_slot\":\"5\"}".to_string());
        assert!(error.to_string().contains("currently syncing"));
        assert!(error.to_string().contains("head_slot"));
    }
}
