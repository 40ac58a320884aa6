//! slug 生成
//!
//! 课程、博客、奖学金、会议等对外资源都以 slug 作为可读标识。
//! 非 ASCII 字符直接丢弃；撞库时由调用方追加随机后缀重试。

use rand::Rng;

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// 由标题生成 slug：小写、空白折叠为连字符、去掉其余符号
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_dash = true; // 抑制前导连字符

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if (c.is_whitespace() || c == '-' || c == '_') && !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        // 全部字符都不可用时退化为随机 slug
        random_suffix(8)
    } else {
        slug
    }
}

/// 在 slug 后追加随机后缀，用于唯一键冲突时重试
pub fn slug_with_suffix(slug: &str) -> String {
    format!("{}-{}", slug, random_suffix(6))
}

fn random_suffix(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..SUFFIX_CHARSET.len());
            SUFFIX_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Intro to Rust"), "intro-to-rust");
        assert_eq!(slugify("  Advanced   Topics  "), "advanced-topics");
    }

    #[test]
    fn test_strips_symbols() {
        assert_eq!(slugify("C++ & Systems (2026)!"), "c-systems-2026");
    }

    #[test]
    fn test_underscores_become_dashes() {
        assert_eq!(slugify("snake_case_title"), "snake-case-title");
    }

    #[test]
    fn test_empty_input_falls_back_to_random() {
        let slug = slugify("！！！");
        assert_eq!(slug.len(), 8);
        assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_suffix_preserves_base() {
        let with_suffix = slug_with_suffix("intro-to-rust");
        assert!(with_suffix.starts_with("intro-to-rust-"));
        assert_eq!(with_suffix.len(), "intro-to-rust-".len() + 6);
    }
}
