//! パスに埋め込まれた計算チェーンの検証と評価

mod evaluate;
mod operator;
mod validate;

pub use evaluate::evaluate;
pub use operator::Operator;
pub use validate::validate;

use crate::models::Operation;
use crate::utils::ApiError;

/// オペランドを数値として解釈する
///
/// `NaN` として解釈される値は不正として `None` を返します。
/// `inf` / `infinity` は ±Infinity として受け付けます。
pub fn parse_operand(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// トークン列を検証して評価し、計算結果を返す
///
/// # Errors
/// トークン列が `数値 演算子 数値 ...` の形になっていない場合は
/// [`ApiError::InvalidOperation`] を返します。
pub fn calculate<S: AsRef<str>>(tokens: &[S]) -> Result<Operation, ApiError> {
    if !validate(tokens) {
        return Err(ApiError::InvalidOperation);
    }

    let question = tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    let answer = evaluate(tokens);

    Ok(Operation::new(question, answer))
}
