//! `OpenAPI` ドキュメント定義モジュール

#![allow(clippy::needless_for_each)]

use utoipa::OpenApi;

use crate::models::{Operation, WelcomeResponse};
use crate::utils::ErrorResponse;

/// `OpenAPI` ドキュメント定義
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calc API",
        description = "URLパスに `数値/演算子/数値/...` の形で書いた計算を左から順に評価するAPI。直近20件の計算履歴を取得できます。",
        version = "1.0.0"
    ),
    paths(
        crate::openapi::root,
        crate::openapi::health,
        crate::openapi::calculate,
        crate::openapi::history
    ),
    components(schemas(WelcomeResponse, Operation, ErrorResponse)),
    tags(
        (name = "General", description = "一般エンドポイント"),
        (name = "Math", description = "計算エンドポイント")
    )
)]
pub struct ApiDoc;

/// `OpenAPI` ドキュメントを JSON 文字列で取得
pub fn get_openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

/// API 情報
///
/// API のウェルカムメッセージと利用可能なエンドポイント一覧を返します
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/",
    tag = "General",
    responses(
        (status = 200, description = "API 情報", body = WelcomeResponse)
    )
)]
fn root() {}

/// ヘルスチェック
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/health",
    tag = "General",
    responses(
        (status = 200, description = "稼働中", body = String, content_type = "text/plain")
    )
)]
fn health() {}

/// 計算
///
/// パスのトークンを左から順に評価します。演算子の優先順位はありません。
/// 使える演算子: `plus`, `add`, `minus`, `subtract`, `into`, `multiply`, `by`, `divide`,
/// `power`, `modulus`, `sqrt`, `negate`（先頭1文字を大文字にした表記も可）。
/// `sqrt` と `negate` は直後のオペランドを読み飛ばします。
/// 0除算などで結果が有限でない場合、`answer` は `null` になります。
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/{operand}/{operator}/{rest}",
    tag = "Math",
    params(
        ("operand" = f64, Path, description = "最初の数値"),
        ("operator" = String, Path, description = "演算子キーワード"),
        ("rest" = String, Path, description = "数値、または `数値/演算子/数値/...` の続き")
    ),
    responses(
        (status = 200, description = "計算結果", body = Operation),
        (status = 400, description = "不正なパス", body = ErrorResponse)
    )
)]
fn calculate() {}

/// 計算履歴
///
/// 直近の計算結果を新しい順に最大20件返します
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/history",
    tag = "Math",
    responses(
        (status = 200, description = "計算履歴", body = [Operation])
    )
)]
fn history() {}
