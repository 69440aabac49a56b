use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod calculator;
pub mod config;
pub mod constants;
pub mod handlers;
pub mod history;
pub mod models;
pub mod openapi;
pub mod state;
pub mod utils;

pub use config::Config;
pub use state::AppState;

/// メインルーター
///
/// 固定パス（`/history` など）は計算ルートより優先されます。
/// それ以外の `/` で始まるパスはすべて計算式として扱います。
pub fn main_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::handle))
        .route("/health", get(handlers::health::handle))
        .route("/history", get(handlers::history::handle))
        .route("/openapi.json", get(handlers::docs::openapi_json))
        .route("/docs", get(handlers::docs::swagger_ui))
        .route("/*params", get(handlers::math::calculate::handle))
        .fallback(handlers::fallback::handle)
        .with_state(state)
        // すべてのレスポンスにCORSヘッダーを追加（OPTIONSのプリフライトもここで処理）
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
