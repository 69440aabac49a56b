use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// 2^53: f64 で誤差なく表せる整数の上限
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// 計算結果のレスポンス（履歴の1件でもある）
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Operation {
    /// パスのトークンを空白で連結した式
    #[schema(example = "5 plus 3")]
    pub question: String,
    /// 計算結果（`NaN` / `±Infinity` は `null`）
    #[serde(serialize_with = "serialize_answer")]
    #[schema(value_type = Option<f64>, example = 8)]
    pub answer: f64,
}

impl Operation {
    pub fn new(question: String, answer: f64) -> Self {
        Self { question, answer }
    }
}

/// 計算結果を JSON の数値として書き出す
///
/// - 有限でない値は `null`
/// - 整数値は `8.0` ではなく `8`
/// - それ以外は浮動小数点数のまま
#[allow(
    clippy::cast_possible_truncation,
    clippy::float_cmp,
    clippy::trivially_copy_pass_by_ref
)]
fn serialize_answer<S: Serializer>(answer: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !answer.is_finite() {
        return serializer.serialize_none();
    }
    if answer.fract() == 0.0 && answer.abs() <= MAX_EXACT_INTEGER {
        return serializer.serialize_i64(*answer as i64);
    }
    serializer.serialize_f64(*answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn to_json(answer: f64) -> serde_json::Value {
        serde_json::to_value(Operation::new("q".to_string(), answer)).unwrap()
    }

    #[test]
    fn test_integral_answer_is_integer() {
        assert_eq!(to_json(8.0), json!({"question": "q", "answer": 8}));
        assert_eq!(
            serde_json::to_string(&Operation::new("5 plus 3".to_string(), 8.0)).unwrap(),
            r#"{"question":"5 plus 3","answer":8}"#
        );
    }

    #[test]
    fn test_fractional_answer() {
        assert_eq!(to_json(2.5)["answer"], json!(2.5));
        assert_eq!(to_json(-0.125)["answer"], json!(-0.125));
    }

    #[test]
    fn test_non_finite_answer_is_null() {
        assert_eq!(to_json(f64::INFINITY)["answer"], json!(null));
        assert_eq!(to_json(f64::NEG_INFINITY)["answer"], json!(null));
        assert_eq!(to_json(f64::NAN)["answer"], json!(null));
    }

    #[test]
    fn test_huge_integral_answer_stays_float() {
        assert_eq!(to_json(1e300)["answer"], json!(1e300));
    }
}
