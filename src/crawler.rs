pub mod downloader;
pub mod parser;
pub mod processor;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, instrument, warn};
use url::Url;

pub use downloader::Downloader;
pub use parser::Parser;
pub use processor::Processor;

use crate::config::{AppConfig, SiteConfig};
use crate::story::{ChapterLink, ChapterRecord, CoverImage, StoryInfo, StoryPage};

/// Tải từng chương một, theo thứ tự, nghỉ cố định giữa hai lần tải.
pub struct TruyenCrawler {
    site: SiteConfig,
    downloader: Downloader,
    output_dir: PathBuf,
}

impl TruyenCrawler {
    pub fn new(app: &AppConfig, site: SiteConfig) -> Result<Self> {
        let downloader = Downloader::new(&app.user_agent(), site.timeout())?;
        Ok(Self {
            site,
            downloader,
            output_dir: app.output_dir.clone(),
        })
    }

    /// Tải và phân tích trang truyện. Không có chương nào là lỗi.
    #[instrument(skip_all, fields(url = %story_url))]
    pub async fn story(&self, story_url: &Url) -> Result<StoryPage> {
        let html = self.downloader.page(story_url).await?;
        let page = Parser::new(&self.site).story_page(&html, story_url)?;

        if page.chapters.is_empty() {
            anyhow::bail!("Không tìm thấy chương nào");
        }
        Ok(page)
    }

    /// Tải tối đa `max_chapters` chương đầu (`None` là tất cả) và lưu ra đĩa.
    #[instrument(skip_all, fields(title = %page.title))]
    pub async fn crawl(&self, page: &StoryPage, max_chapters: Option<usize>) -> Result<StoryInfo> {
        let processor = Processor::new(self.output_dir.join(page.dir_name()));
        processor.prepare().await?;

        let cover_image = self.cover(page, &processor).await;

        let total = page.chapters.len();
        let limit = max_chapters.map_or(total, |n| n.min(total));
        info!("Sẽ tải {}/{} chương", limit, total);

        let mut chapters = Vec::new();
        for (i, link) in page.chapters.iter().take(limit).enumerate() {
            let index = i + 1;
            info!("[{}/{}] {}", index, total, link.title);

            match self.chapter(index, link, &processor).await {
                Ok(record) => chapters.push(record),
                Err(e) => warn!("Bỏ qua chương {}: {}", link.url, e),
            }

            if index < limit {
                tokio::time::sleep(self.site.delay()).await;
            }
        }

        let story = StoryInfo::new(page, cover_image, chapters);
        processor.write_story_info(&story).await?;

        info!(
            "Hoàn thành: {}/{} chương, {} dòng ({} dòng có chữ), lưu tại {}",
            story.crawled_chapters,
            story.total_chapters,
            story.total_lines(),
            story.non_empty_lines(),
            processor.story_dir().display()
        );
        Ok(story)
    }

    async fn chapter(&self, index: usize, link: &ChapterLink, processor: &Processor) -> Result<ChapterRecord> {
        let html = self.downloader.page(&link.url).await?;
        let content = Parser::new(&self.site).chapter_content(&html)?;

        let record = ChapterRecord::new(link.title.clone(), link.url.to_string(), content);
        info!(
            "Nội dung: {} ký tự, {} dòng ({} dòng có chữ)",
            record.content.chars().count(),
            record.total_lines,
            record.non_empty_lines
        );

        processor.write_chapter(index, &record).await?;
        Ok(record)
    }

    /// Lỗi ảnh bìa chỉ được ghi log, không làm dừng việc tải truyện.
    async fn cover(&self, page: &StoryPage, processor: &Processor) -> Option<CoverImage> {
        let Some(cover_url) = &page.cover_url else {
            warn!("Không tìm thấy ảnh bìa");
            return None;
        };

        let referer = match self.site.base_url() {
            Ok(url) => url,
            Err(e) => {
                warn!("{}", e);
                return None;
            }
        };

        let (image_bytes, extension) = match self.downloader.image(cover_url, &referer).await {
            Ok(image) => image,
            Err(e) => {
                warn!("Tải ảnh bìa thất bại: {}", e);
                return None;
            }
        };

        match processor.write_cover(image_bytes, extension, cover_url).await {
            Ok(cover) => Some(cover),
            Err(e) => {
                warn!("Lưu ảnh bìa thất bại: {}", e);
                None
            }
        }
    }
}
