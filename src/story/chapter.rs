use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterLink {
    pub title: String,
    pub url: Url,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChapterRecord {
    pub title: String,
    pub content: String,
    pub url: String,
    pub total_lines: usize,
    pub non_empty_lines: usize,
}

impl ChapterRecord {
    pub fn new(title: String, url: String, content: String) -> Self {
        let total_lines = content.split('\n').count();
        let non_empty_lines = content
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .count();

        Self {
            title,
            content,
            url,
            total_lines,
            non_empty_lines,
        }
    }

    /// Nội dung tệp `.txt` của chương.
    pub fn file_contents(&self) -> String {
        format!("# {}\n\n{}", self.title, self.content)
    }
}
