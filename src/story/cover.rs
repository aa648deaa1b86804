use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverImage {
    pub filename: String,
    pub path: String,
    pub url: String,
    /// Kích thước tệp, tính bằng byte.
    pub size: u64,
}

/// Đuôi tệp ảnh: ưu tiên `Content-Type`, sau đó tới URL, mặc định `jpg`.
pub fn image_extension(content_type: &str, url: &str) -> &'static str {
    let content_type = content_type.to_lowercase();
    if content_type.contains("jpeg") || content_type.contains("jpg") {
        return "jpg";
    }
    if content_type.contains("png") {
        return "png";
    }
    if content_type.contains("gif") {
        return "gif";
    }
    if content_type.contains("webp") {
        return "webp";
    }

    let url = url.to_lowercase();
    ["jpg", "png", "gif", "webp"]
        .into_iter()
        .find(|ext| url.contains(&format!(".{ext}")))
        .unwrap_or("jpg")
}
