use crate::utils::ApiError;

/// どのルートにも一致しないリクエスト
pub async fn handle() -> ApiError {
    ApiError::NotFound
}
