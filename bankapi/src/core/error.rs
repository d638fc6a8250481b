use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::query::InvalidQuery;
use crate::schema::validate::{Issue, IssueKind, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A request body that does not conform to its entity schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown id or schema name; carries the kind of thing looked up.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    InvalidQuery(#[from] InvalidQuery),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(error = %self, "request rejected");
        let status = self.status();
        let body = match self {
            ApiError::Validation(err) => json!({ "detail": err.issues }),
            ApiError::NotFound(what) => json!({ "detail": format!("{what} not found") }),
            ApiError::InvalidQuery(err) => {
                let issue = Issue {
                    loc: vec!["query".to_string(), err.param.to_string()],
                    msg: err.message,
                    kind: IssueKind::Query,
                };
                json!({ "detail": [issue] })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_client_statuses() {
        assert_eq!(ApiError::NotFound("Customer").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(InvalidQuery::new("limit", "too big")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(ValidationError { issues: vec![] }).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn not_found_message_names_the_kind() {
        assert_eq!(ApiError::NotFound("Schema").to_string(), "Schema not found");
    }
}
