use anyhow::Result;
use scraper::Html;
use tracing::{info, instrument, warn};
use url::Url;

use crate::config::SiteConfig;
use crate::extractor::Value;
use crate::normalize;
use crate::story::{ChapterLink, StoryPage};

#[derive(Clone, Copy)]
pub struct Parser<'a> {
    config: &'a SiteConfig,
}

impl<'a> Parser<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }
}

impl Parser<'_> {
    #[instrument(skip_all)]
    pub fn story_page(&self, html: &str, story_url: &Url) -> Result<StoryPage> {
        info!("Đang phân tích trang truyện");
        let document = Html::parse_document(html);
        let root = document.root_element();
        let story_extractor = &self.config.story;

        let title = match story_extractor.extract_title(root) {
            Value::Single(title) => title,
            Value::Empty => {
                warn!("Không tìm thấy tên truyện");
                String::new()
            }
        };

        let author = story_extractor
            .extract_author(root)
            .into_option()
            .unwrap_or_default();

        let base_url = self.config.base_url()?;
        let cover_url = match story_extractor.extract_cover_url(root) {
            Value::Single(src) => match base_url.join(&src) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("Đường dẫn ảnh bìa không hợp lệ {}: {}", src, e);
                    None
                }
            },
            Value::Empty => None,
        };

        let mut chapters = Vec::new();
        for (chapter_title, href) in self.config.chapters.extract_links(root) {
            let Ok(url) = story_url.join(&href) else {
                warn!("Bỏ qua link chương không hợp lệ: {}", href);
                continue;
            };
            chapters.push(ChapterLink {
                title: chapter_title,
                url,
            });
        }

        info!("Tên truyện: {}, tác giả: {}, {} chương", title, author, chapters.len());
        Ok(StoryPage {
            url: story_url.clone(),
            title,
            author,
            cover_url,
            chapters,
        })
    }

    /// Trích và sửa văn bản của một trang chương.
    #[instrument(skip_all)]
    pub fn chapter_content(&self, html: &str) -> Result<String> {
        let document = Html::parse_document(html);

        let Some(content_elem) = self.config.content.this(document.root_element()) else {
            anyhow::bail!("Không tìm thấy nội dung chương");
        };

        Ok(normalize::normalize(Some(content_elem)))
    }
}
