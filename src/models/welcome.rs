use serde::Serialize;
use utoipa::ToSchema;

/// ウェルカムレスポンスのエンドポイント情報
#[derive(Serialize, ToSchema)]
pub struct Endpoints {
    /// Swagger UI
    pub swagger: String,
    /// `OpenAPI` 仕様
    pub openapi: String,
    /// 計算エンドポイント
    pub calculate: String,
    /// 計算履歴エンドポイント
    pub history: String,
    /// ヘルスチェック
    pub health: String,
}

/// ルートエンドポイントのレスポンス
#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// ウェルカムメッセージ
    pub message: String,
    /// 利用可能なエンドポイント
    pub endpoints: Endpoints,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: "Welcome to Calc API with OpenAPI document".to_string(),
            endpoints: Endpoints {
                swagger: "/docs".to_string(),
                openapi: "/openapi.json".to_string(),
                calculate: "/{operand}/{operator}/{operand}".to_string(),
                history: "/history".to_string(),
                health: "/health".to_string(),
            },
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}
