pub mod attr;
pub mod contains;
pub mod first;
pub mod text;

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Deserializer};

pub use attr::Attr;
pub use contains::Contains;
pub use first::First;
pub use text::Text;

#[derive(Debug, PartialEq)]
pub enum Value {
    /// Không có kết quả
    Empty,
    /// Một giá trị
    Single(String),
}

impl Value {
    pub fn into_option(self) -> Option<String> {
        match self {
            Value::Single(v) => Some(v),
            Value::Empty => None,
        }
    }
}

#[typetag::deserialize(tag = "type")]
pub trait Extractor: Send + Sync {
    fn extract(&self, element: ElementRef) -> Value;
}

/// Trang thông tin truyện: tên, tác giả, ảnh bìa.
#[derive(Deserialize)]
pub struct StoryExtractor {
    pub title: Box<dyn Extractor>,
    pub author: Option<Box<dyn Extractor>>,
    pub cover_url: Option<Box<dyn Extractor>>,
}

impl StoryExtractor {
    pub fn extract_title(&self, this: ElementRef) -> Value {
        self.title.extract(this)
    }

    pub fn extract_author(&self, this: ElementRef) -> Value {
        match &self.author {
            Some(author_extractor) => author_extractor.extract(this),
            None => Value::Empty,
        }
    }

    pub fn extract_cover_url(&self, this: ElementRef) -> Value {
        match &self.cover_url {
            Some(cover_extractor) => cover_extractor.extract(this),
            None => Value::Empty,
        }
    }
}

/// Danh sách chương trên trang truyện.
#[derive(Deserialize)]
pub struct ChapterListExtractor {
    #[serde(deserialize_with = "deserialize_selector")]
    pub this: Selector,
    /// Bỏ qua link có href chứa một trong các chuỗi này.
    #[serde(default)]
    pub skip: Vec<String>,
    pub href_contains: Option<String>,
    /// So sánh với tiêu đề đã chuyển sang chữ thường.
    pub title_prefix: Option<String>,
}

impl ChapterListExtractor {
    /// Trả về các cặp (tiêu đề, href) theo thứ tự xuất hiện.
    pub fn extract_links(&self, this: ElementRef) -> Vec<(String, String)> {
        let mut links = Vec::new();

        for link_elem in this.select(&self.this) {
            let Some(href) = link_elem.value().attr("href") else {
                continue;
            };
            let title = link_elem.text().collect::<String>();
            let title = title.trim();

            if self.accepts(href, title) {
                links.push((title.to_string(), href.to_string()));
            }
        }
        links
    }

    fn accepts(&self, href: &str, title: &str) -> bool {
        if self.skip.iter().any(|s| href.contains(s.as_str())) {
            return false;
        }
        if let Some(marker) = &self.href_contains {
            if !href.contains(marker.as_str()) {
                return false;
            }
        }
        if let Some(prefix) = &self.title_prefix {
            if !title.to_lowercase().starts_with(prefix.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Khối nội dung chương; thử lần lượt từng selector.
#[derive(Deserialize)]
pub struct ContentExtractor {
    #[serde(deserialize_with = "deserialize_selectors")]
    pub candidates: Vec<Selector>,
}

impl ContentExtractor {
    pub fn this<'a>(&self, element: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.candidates
            .iter()
            .find_map(|selector| element.select(selector).next())
    }
}

fn deserialize_selector<'de, D>(deserializer: D) -> Result<Selector, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    Selector::parse(&s).map_err(|e| serde::de::Error::custom(format!("Invalid selector: {}", e)))
}

fn deserialize_selectors<'de, D>(deserializer: D) -> Result<Vec<Selector>, D::Error>
where
    D: Deserializer<'de>,
{
    let list: Vec<String> = Vec::deserialize(deserializer)?;

    list.iter()
        .map(|s| {
            Selector::parse(s)
                .map_err(|e| serde::de::Error::custom(format!("Invalid selector '{}': {}", s, e)))
        })
        .collect()
}

fn deserialize_nullable_selector<'de, D>(deserializer: D) -> Result<Option<Selector>, D::Error>
where
    D: Deserializer<'de>,
{
    let option_str: Option<String> = Option::deserialize(deserializer)?;

    match option_str {
        Some(s) if s.trim().is_empty() => Ok(None), // chuỗi rỗng cũng coi như None
        Some(s) => Selector::parse(&s)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("Invalid selector '{}': {}", s, e))),
        None => Ok(None),
    }
}
