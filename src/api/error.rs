use crate::application::library::LibraryApplicationError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと、リクエスト自体の不備をHTTPレスポンスにマッピングする。
#[derive(Debug)]
pub enum ApiError {
    Application(LibraryApplicationError),
    InvalidFilter(String),
    InvalidDraftField(String),
    InvalidPath(PathRejection),
    InvalidQuery(QueryRejection),
    InvalidBody(JsonRejection),
}

impl From<LibraryApplicationError> for ApiError {
    fn from(err: LibraryApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 404 Not Found - リクエストされた書籍が存在しない
            ApiError::Application(ref err @ LibraryApplicationError::BookNotFound(_)) => {
                (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", err.to_string())
            }

            // 422 Unprocessable Entity - ビジネスルール違反
            ApiError::Application(ref err @ LibraryApplicationError::MissingField(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MISSING_FIELD",
                err.to_string(),
            ),
            ApiError::Application(ref err @ LibraryApplicationError::BookNotAvailable(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "BOOK_NOT_AVAILABLE",
                err.to_string(),
            ),
            ApiError::Application(ref err @ LibraryApplicationError::BorrowerNotProvided) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "BORROWER_NOT_PROVIDED",
                err.to_string(),
            ),

            // 428 Precondition Required - 削除の確認がない
            ApiError::Application(ref err @ LibraryApplicationError::DeletionNotConfirmed(_)) => (
                StatusCode::PRECONDITION_REQUIRED,
                "DELETION_NOT_CONFIRMED",
                err.to_string(),
            ),

            // 400 Bad Request - リクエストの値が不正
            ApiError::InvalidFilter(msg) => (StatusCode::BAD_REQUEST, "INVALID_FILTER", msg),
            ApiError::InvalidDraftField(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_DRAFT_FIELD", msg)
            }

            // 抽出に失敗したリクエスト（ステータスはaxumの判定に従う）
            ApiError::InvalidPath(rejection) => {
                (rejection.status(), "INVALID_PATH", rejection.body_text())
            }
            ApiError::InvalidQuery(rejection) => {
                (rejection.status(), "INVALID_QUERY", rejection.body_text())
            }
            ApiError::InvalidBody(rejection) => {
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
        };

        tracing::debug!(%status, error_type, "request rejected");

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
