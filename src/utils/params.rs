/// URLパスを `/` で区切ってトークン列にする
///
/// 先頭の `/` を1つだけ取り除き、各セグメントをパーセントデコードします。
/// 末尾の `/` や連続した `/` は空のトークンとして残ります。
/// UTF-8 としてデコードできないセグメントがある場合は `None` を返します。
pub fn split_path_tokens(path: &str) -> Option<Vec<String>> {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.split('/')
        .map(|segment| urlencoding::decode(segment).ok().map(|s| s.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_path_tokens() {
        assert_eq!(
            split_path_tokens("/5/plus/3"),
            Some(vec!["5".to_string(), "plus".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn test_split_keeps_empty_segments() {
        assert_eq!(
            split_path_tokens("/5/plus/3/"),
            Some(vec![
                "5".to_string(),
                "plus".to_string(),
                "3".to_string(),
                String::new()
            ])
        );
    }

    #[test]
    fn test_split_decodes_segments() {
        assert_eq!(
            split_path_tokens("/-1.5/plus/%32"),
            Some(vec!["-1.5".to_string(), "plus".to_string(), "2".to_string()])
        );
        assert_eq!(split_path_tokens("/%FF/plus/2"), None);
    }
}
