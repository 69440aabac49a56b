/// ヘルスチェックエンドポイント
pub async fn handle() -> &'static str {
    "OK"
}
