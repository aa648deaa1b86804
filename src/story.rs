pub mod chapter;
pub mod cover;

pub use chapter::{ChapterLink, ChapterRecord};
pub use cover::CoverImage;

use serde::{Deserialize, Serialize};
use url::Url;

/// Thông tin đọc được từ trang truyện, trước khi tải chương.
#[derive(Debug, Clone)]
pub struct StoryPage {
    pub url: Url,
    pub title: String,
    pub author: String,
    pub cover_url: Option<Url>,
    pub chapters: Vec<ChapterLink>,
}

impl StoryPage {
    /// Tên thư mục lưu truyện.
    pub fn dir_name(&self) -> String {
        if self.title.is_empty() {
            "unknown-story".to_string()
        } else {
            self.title.replace([' ', '/'], "-")
        }
    }
}

/// Nội dung `story_info_FINAL.json`, dùng cho bước nhập dữ liệu phía web.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryInfo {
    pub title: String,
    pub author: String,
    pub url: String,
    pub total_chapters: usize,
    pub crawled_chapters: usize,
    pub cover_image: Option<CoverImage>,
    pub chapters: Vec<ChapterRecord>,
    pub crawled_at: String,
}

impl StoryInfo {
    pub fn new(page: &StoryPage, cover_image: Option<CoverImage>, chapters: Vec<ChapterRecord>) -> Self {
        Self {
            title: page.title.clone(),
            author: page.author.clone(),
            url: page.url.to_string(),
            total_chapters: page.chapters.len(),
            crawled_chapters: chapters.len(),
            cover_image,
            chapters,
            crawled_at: chrono::Local::now().to_rfc3339(),
        }
    }

    pub fn total_lines(&self) -> usize {
        self.chapters.iter().map(|c| c.total_lines).sum()
    }

    pub fn non_empty_lines(&self) -> usize {
        self.chapters.iter().map(|c| c.non_empty_lines).sum()
    }
}
