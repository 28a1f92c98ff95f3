// Route exports
pub mod recommendations;

use actix_web::{error, http::StatusCode, web, HttpResponse};

use crate::models::{ErrorResponse, ServiceVersion};

/// Select the route table for the configured handler variant
///
/// v1 only serves GET; v2 adds the personalized POST. The variant is fixed
/// at process start, matching how each version is deployed separately.
pub fn configure_routes(version: ServiceVersion) -> fn(&mut web::ServiceConfig) {
    match version {
        ServiceVersion::V1 => recommendations::configure_v1,
        ServiceVersion::V2 => recommendations::configure_v2,
    }
}

impl error::ResponseError for ErrorResponse {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
///
/// A missing or unparsable POST body is an explicit 400 with a JSON error.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::ResponseError;

    #[test]
    fn test_error_response_renders_json_body() {
        let err = ErrorResponse {
            error: "invalid_json".to_string(),
            message: "Invalid JSON: EOF".to_string(),
            status_code: 400,
        };

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let content_type = resp.headers().get("content-type").unwrap();
        assert_eq!(content_type.to_str().unwrap(), "application/json");
    }
}
