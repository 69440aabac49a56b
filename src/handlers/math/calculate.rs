use axum::extract::State;
use axum::http::Uri;
use axum::Json;

use crate::calculator::calculate;
use crate::models::Operation;
use crate::state::AppState;
use crate::utils::{split_path_tokens, ApiError};

/// 計算エンドポイントのハンドラー
/// GET /{operand}/{operator}/{operand}[/{operator}/{operand}...]
///
/// 成功した計算だけを履歴に記録します。
pub async fn handle(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<Operation>, ApiError> {
    let tokens = split_path_tokens(uri.path()).ok_or(ApiError::InvalidOperation)?;
    let operation = calculate(tokens.as_slice())?;

    tracing::info!(
        question = %operation.question,
        answer = operation.answer,
        "[Math] Evaluated"
    );

    state
        .history
        .write()
        .await
        .record(operation.question.clone(), operation.answer);

    Ok(Json(operation))
}
