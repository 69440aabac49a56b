use axum::Json;

use crate::models::WelcomeResponse;

/// ルートエンドポイントのハンドラー
/// GET /
pub async fn handle() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new())
}
