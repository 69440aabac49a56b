use axum::extract::State;
use axum::Json;

use crate::models::Operation;
use crate::state::AppState;

/// 計算履歴エンドポイントのハンドラー
/// GET /history
pub async fn handle(State(state): State<AppState>) -> Json<Vec<Operation>> {
    let records = state.history.read().await.list();
    tracing::debug!("[History] Returning {} records", records.len());
    Json(records)
}
