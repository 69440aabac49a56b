use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::constants::INVALID_OPERATION_MESSAGE;

/// エラーコード（ログ出力用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidOperation,
    NotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidOperation => "INVALID_OPERATION",
            ErrorCode::NotFound => "NOT_FOUND",
        }
    }
}

/// API エラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// パスが `数値 演算子 数値 ...` の形になっていない
    #[error("{}", INVALID_OPERATION_MESSAGE)]
    InvalidOperation,
    /// 該当するルートがない
    #[error("Not Found")]
    NotFound,
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::InvalidOperation => ErrorCode::InvalidOperation,
            ApiError::NotFound => ErrorCode::NotFound,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidOperation => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid operation parameters")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self { error: message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(code = self.code().as_str(), "{}", self);
        let body = ErrorResponse::new(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}
