use super::{parse_operand, Operator};

/// トークン列が `数値 演算子 数値 [演算子 数値 ...]` の形になっているか検証する
///
/// - 3個未満、または偶数個のトークンは不正
/// - 奇数番目（1, 3, 5, ...）は演算子キーワード
/// - 偶数番目（0, 2, 4, ...）は `NaN` 以外の数値
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> bool {
    if tokens.len() < 3 || tokens.len() % 2 == 0 {
        return false;
    }

    if parse_operand(tokens[0].as_ref()).is_none() {
        return false;
    }

    tokens[1..].chunks(2).all(|pair| match pair {
        [operator, operand] => {
            Operator::lookup(operator.as_ref()).is_some()
                && parse_operand(operand.as_ref()).is_some()
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["5", "plus", "3"])]
    #[case(&["5", "Plus", "3"])]
    #[case(&["4", "power", "2", "plus", "1"])]
    #[case(&["10", "by", "0"])]
    #[case(&["9", "sqrt", "0"])]
    #[case(&["-1.5", "Multiply", "2e2", "negate", "0"])]
    #[case(&["1", "add", "inf"])]
    fn test_valid(#[case] tokens: &[&str]) {
        assert!(validate(tokens));
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::single(&["5"])]
    #[case::two_tokens(&["5", "plus"])]
    #[case::even_length(&["5", "plus", "3", "minus"])]
    #[case::unknown_operator(&["5", "foo", "3"])]
    #[case::upper_case_operator(&["5", "PLUS", "3"])]
    #[case::nan_operand(&["5", "plus", "NaN"])]
    #[case::non_numeric_operand(&["5", "plus", "three"])]
    #[case::non_numeric_first_operand(&["five", "plus", "3"])]
    #[case::empty_operand(&["5", "plus", ""])]
    #[case::operator_in_operand_position(&["5", "plus", "minus", "plus", "3"])]
    fn test_invalid(#[case] tokens: &[&str]) {
        assert!(!validate(tokens));
    }
}
