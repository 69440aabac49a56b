use super::{parse_operand, Operator};

/// 検証済みのトークン列を左から順に評価する
///
/// 演算子の優先順位はなく、先頭のオペランドを初期値として
/// `(演算子, オペランド)` の組を1つずつ累積値に適用します。
/// 0除算などの結果は `NaN` / `±Infinity` のまま返します。
/// 未知の演算子は累積値を変更しません。
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> f64 {
    let Some((first, rest)) = tokens.split_first() else {
        return f64::NAN;
    };
    let initial = parse_operand(first.as_ref()).unwrap_or(f64::NAN);

    rest.chunks_exact(2).fold(initial, |acc, pair| {
        let operand = parse_operand(pair[1].as_ref()).unwrap_or(f64::NAN);
        match Operator::lookup(pair[0].as_ref()) {
            Some(op) => op.apply(acc, operand),
            None => acc,
        }
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["5", "plus", "3"], 8.0)]
    #[case(&["5", "add", "3"], 8.0)]
    #[case(&["5", "minus", "3"], 2.0)]
    #[case(&["5", "Subtract", "3"], 2.0)]
    #[case(&["5", "into", "3"], 15.0)]
    #[case(&["5", "multiply", "3"], 15.0)]
    #[case(&["6", "by", "3"], 2.0)]
    #[case(&["6", "Divide", "3"], 2.0)]
    #[case(&["9", "sqrt", "0"], 3.0)]
    #[case(&["9", "negate", "123"], -9.0)]
    #[case(&["7", "modulus", "4"], 3.0)]
    #[case(&["2", "power", "10"], 1024.0)]
    fn test_single_operator(#[case] tokens: &[&str], #[case] expected: f64) {
        assert_eq!(evaluate(tokens), expected);
    }

    #[test]
    fn test_left_to_right_without_precedence() {
        // 2 + 3 * 4 は 14 ではなく 20
        assert_eq!(evaluate(&["2", "plus", "3", "into", "4"]), 20.0);
        assert_eq!(evaluate(&["4", "power", "2", "plus", "1"]), 17.0);
        assert_eq!(evaluate(&["16", "sqrt", "0", "sqrt", "0", "negate", "0"]), -2.0);
    }

    #[test]
    fn test_non_finite_results() {
        assert_eq!(evaluate(&["10", "by", "0"]), f64::INFINITY);
        assert_eq!(evaluate(&["-10", "by", "0"]), f64::NEG_INFINITY);
        assert!(evaluate(&["0", "by", "0"]).is_nan());
        assert!(evaluate(&["-4", "sqrt", "0"]).is_nan());
    }

    #[test]
    fn test_unknown_operator_is_noop() {
        assert_eq!(evaluate(&["5", "foo", "3", "plus", "1"]), 6.0);
    }

    #[test]
    fn test_deterministic() {
        let tokens = ["1.1", "into", "3", "minus", "0.3", "by", "7"];
        assert_eq!(evaluate(&tokens), evaluate(&tokens));
    }
}
