use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// `Path`と同じだが、パースに失敗した場合は`ApiError`のJSON形式で返す
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// `Query`と同じだが、パースに失敗した場合は`ApiError`のJSON形式で返す
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// `Json`と同じだが、ボディが不正な場合は`ApiError`のJSON形式で返す
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
