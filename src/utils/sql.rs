/// 转义 LIKE 模式中的特殊字符，避免用户输入被当作通配符
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_wildcards() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
    }

    #[test]
    fn test_escapes_backslash_first() {
        assert_eq!(escape_like_pattern("a\\b%"), "a\\\\b\\%");
    }

    #[test]
    fn test_plain_input_unchanged() {
        assert_eq!(escape_like_pattern("rust"), "rust");
    }
}
