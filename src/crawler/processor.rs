use std::path::{Path, PathBuf};

use anyhow::Result;
use bytes::Bytes;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

use crate::story::{ChapterRecord, CoverImage, StoryInfo};

/// Tên tệp mà bước nhập dữ liệu phía web tìm trong mỗi thư mục truyện.
static STORY_INFO_FILE: &str = "story_info_FINAL.json";

/// Ghi kết quả của một truyện vào thư mục riêng của nó.
#[derive(Clone)]
pub struct Processor {
    story_dir: PathBuf,
}

impl Processor {
    pub fn new(story_dir: PathBuf) -> Self {
        Self { story_dir }
    }

    pub fn story_dir(&self) -> &Path {
        &self.story_dir
    }

    pub async fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.story_dir).await?;
        Ok(())
    }

    #[instrument(skip_all)]
    pub async fn write_chapter(&self, index: usize, chapter: &ChapterRecord) -> Result<PathBuf> {
        let chapter_path = self.story_dir.join(chapter_filename(index));
        fs::write(&chapter_path, chapter.file_contents()).await?;

        info!("Đã lưu chương vào: {}", chapter_path.display());
        Ok(chapter_path)
    }

    #[instrument(skip_all)]
    pub async fn write_cover(&self, image_bytes: Bytes, extension: &str, url: &Url) -> Result<CoverImage> {
        let filename = format!("cover.{}", extension);
        let cover_path = self.story_dir.join(&filename);
        fs::write(&cover_path, &image_bytes).await?;

        let size = fs::metadata(&cover_path).await?.len();
        info!("Đã lưu ảnh bìa: {} ({} byte)", filename, size);

        Ok(CoverImage {
            filename,
            path: cover_path.display().to_string(),
            url: url.to_string(),
            size,
        })
    }

    #[instrument(skip_all)]
    pub async fn write_story_info(&self, story: &StoryInfo) -> Result<PathBuf> {
        let info_path = self.story_dir.join(STORY_INFO_FILE);
        let json = serde_json::to_string_pretty(story)?;
        fs::write(&info_path, json).await?;

        info!("Đã lưu thông tin truyện vào: {}", info_path.display());
        Ok(info_path)
    }
}

pub fn chapter_filename(index: usize) -> String {
    format!("chapter_{:03}_FINAL.txt", index)
}
