//! 随机编码生成

use rand::Rng;

// 去掉易混淆字符（0/O、1/I/L）
const CODE_CHARSET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// 生成指定长度的随机大写编码
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}

/// 生成证书序列号，形如 `AC-2026-7KQ2M9XW`
pub fn generate_certificate_serial() -> String {
    let year = chrono::Utc::now().format("%Y");
    format!("AC-{}-{}", year, generate_code(8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_and_charset() {
        let code = generate_code(8);
        assert_eq!(code.len(), 8);
        assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
    }

    #[test]
    fn test_serial_format() {
        let serial = generate_certificate_serial();
        let parts: Vec<&str> = serial.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "AC");
        assert_eq!(parts[1].len(), 4);
        assert_eq!(parts[2].len(), 8);
    }

    #[test]
    fn test_no_ambiguous_characters() {
        let code = generate_code(64);
        assert!(!code.contains('0'));
        assert!(!code.contains('O'));
        assert!(!code.contains('1'));
        assert!(!code.contains('I'));
        assert!(!code.contains('L'));
    }
}
