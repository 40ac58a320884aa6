/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `extension` - 文件扩展名（包含点号，如 ".png"）
///
/// # Returns
/// * `true` - 魔术字节匹配或该类型不需要验证
/// * `false` - 魔术字节不匹配
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        // 图片格式
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",
        ".svg" => {
            // XML 文本，允许 BOM 或空白开头
            data.starts_with(b"<?xml") || data.starts_with(b"<svg") || data[0].is_ascii()
        }

        // 讲义与论文
        ".pdf" => data.starts_with(b"%PDF"),
        ".docx" | ".xlsx" | ".pptx" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        ".zip" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),

        // 课程音视频
        ".mp4" | ".m4v" => data.len() >= 8 && &data[4..8] == b"ftyp",
        ".webm" => data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]),
        ".mp3" => data.starts_with(b"ID3") || data.starts_with(&[0xFF, 0xFB]),
        ".wav" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE",

        // 文本格式 - 不检查魔术字节
        ".txt" | ".md" | ".csv" | ".srt" | ".vtt" => true,

        // 未知格式 - 默认拒绝
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_magic_bytes(&png_header, ".png"));
        assert!(validate_magic_bytes(&png_header, ".PNG"));
        assert!(!validate_magic_bytes(&png_header, ".jpg"));
    }

    #[test]
    fn test_pdf_magic() {
        let pdf_header = b"%PDF-1.7";
        assert!(validate_magic_bytes(pdf_header, ".pdf"));
        assert!(!validate_magic_bytes(pdf_header, ".mp4"));
    }

    #[test]
    fn test_mp4_magic() {
        let mp4_header = [0x00, 0x00, 0x00, 0x20, b'f', b't', b'y', b'p'];
        assert!(validate_magic_bytes(&mp4_header, ".mp4"));
        assert!(!validate_magic_bytes(&mp4_header, ".webm"));
    }

    #[test]
    fn test_text_files() {
        let text_content = b"# Lecture notes";
        assert!(validate_magic_bytes(text_content, ".md"));
        assert!(validate_magic_bytes(text_content, ".txt"));
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_magic_bytes(&[], ".png"));
        assert!(!validate_magic_bytes(&[], ".txt"));
    }

    #[test]
    fn test_unknown_extension() {
        let data = [0x00, 0x01, 0x02, 0x03];
        assert!(!validate_magic_bytes(&data, ".exe"));
        assert!(!validate_magic_bytes(&data, ".unknown"));
    }
}
