use std::collections::HashMap;

use once_cell::sync::Lazy;

/// 演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Modulus,
    Sqrt,
    Negate,
}

/// パスで使えるキーワードと演算子の対応表
const KEYWORDS: [(&str, Operator); 12] = [
    ("plus", Operator::Plus),
    ("minus", Operator::Minus),
    ("into", Operator::Multiply),
    ("by", Operator::Divide),
    ("add", Operator::Plus),
    ("subtract", Operator::Minus),
    ("multiply", Operator::Multiply),
    ("divide", Operator::Divide),
    ("power", Operator::Power),
    ("modulus", Operator::Modulus),
    ("sqrt", Operator::Sqrt),
    ("negate", Operator::Negate),
];

/// キーワード → 演算子のルックアップテーブル
///
/// 小文字のキーワードに加えて、先頭1文字だけを大文字にした表記（`Plus` など）も登録します。
/// それ以外の大文字小文字の組み合わせ（`PLUS` など）は受け付けません。
static OPERATORS: Lazy<HashMap<String, Operator>> = Lazy::new(|| {
    KEYWORDS
        .iter()
        .flat_map(|&(keyword, op)| [(keyword.to_string(), op), (capitalize(keyword), op)])
        .collect()
});

/// 先頭1文字を大文字にする
fn capitalize(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Operator {
    /// キーワードから演算子を引く
    pub fn lookup(token: &str) -> Option<Self> {
        OPERATORS.get(token).copied()
    }

    /// 累積値に演算子を適用する
    ///
    /// `Sqrt` と `Negate` は単項演算なので `operand` を使いません。
    pub fn apply(self, acc: f64, operand: f64) -> f64 {
        match self {
            Operator::Plus => acc + operand,
            Operator::Minus => acc - operand,
            Operator::Multiply => acc * operand,
            Operator::Divide => acc / operand,
            Operator::Power => power(acc, operand),
            Operator::Modulus => acc % operand,
            Operator::Sqrt => acc.sqrt(),
            Operator::Negate => -acc,
        }
    }
}

/// べき乗
///
/// `powf` は `(±1)^∞` を 1 にするが、ここでは NaN として扱う。
#[allow(clippy::float_cmp)]
fn power(base: f64, exponent: f64) -> f64 {
    if base.abs() == 1.0 && exponent.is_infinite() {
        return f64::NAN;
    }
    base.powf(exponent)
}
