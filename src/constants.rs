//! アプリケーション全体で使用する定数

/// APIタイトル
pub const API_TITLE: &str = "Calc API";

/// Swagger UI バージョン
pub const SWAGGER_UI_VERSION: &str = "5";

/// 履歴に保持する計算結果の最大件数
pub const MAX_HISTORY_LENGTH: usize = 20;

/// 環境変数キー: 待ち受けポート
pub const PORT_ENV: &str = "PORT";

/// ポートのデフォルト値
pub const DEFAULT_PORT: u16 = 3000;

/// 不正なパスに対するエラーメッセージ
pub const INVALID_OPERATION_MESSAGE: &str = "Invalid operation parameters";
