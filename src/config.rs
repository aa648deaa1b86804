use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Result;
use serde::Deserialize;
use url::Url;

use crate::extractor::{ChapterListExtractor, ContentExtractor, StoryExtractor};

static APP_CONFIG_FILE: &str = "config";
static ENV_PREFIX: &str = "TRUYEN";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_site")]
    pub site: String,
    #[serde(default = "default_sites_dir")]
    pub sites_dir: PathBuf,
    pub user_agent: Option<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("stories")
}

fn default_site() -> String {
    "truyenfull".to_string()
}

fn default_sites_dir() -> PathBuf {
    PathBuf::from("config")
}

impl AppConfig {
    /// `config.toml` (không bắt buộc) rồi tới biến môi trường `TRUYEN_*`.
    pub fn load() -> Result<Self> {
        Self::load_from(APP_CONFIG_FILE)
    }

    pub fn load_from(name: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(
                config::File::with_name(name)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Không đọc được cấu hình: {}", e))
    }

    pub fn user_agent(&self) -> String {
        match &self.user_agent {
            Some(ua) => ua.clone(),
            None => ua_generator::ua::spoof_ua().to_string(),
        }
    }

    pub fn site_config(&self) -> Result<SiteConfig> {
        let mut configs = load_site_configs(&self.sites_dir)?;
        configs
            .remove(&self.site)
            .ok_or_else(|| anyhow::anyhow!("Cấu hình trang '{}' không tồn tại", self.site))
    }
}

pub fn load_site_configs(dir: &Path) -> Result<HashMap<String, SiteConfig>> {
    if !(dir.exists() && dir.is_dir()) {
        anyhow::bail!("Thư mục cấu hình {} không tồn tại", dir.display());
    }

    let mut configs = HashMap::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml") {
            let config = SiteConfig::load(&path)?;
            configs.insert(config.name.clone(), config);
        }
    }
    Ok(configs)
}

#[derive(Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
    /// Nghỉ giữa hai lần tải chương.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub story: StoryExtractor,
    pub chapters: ChapterListExtractor,
    pub content: ContentExtractor,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    15
}

impl SiteConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let file_content = std::fs::read_to_string(config_path)?;

        Self::from_toml(&file_content)
            .map_err(|e| anyhow::anyhow!("{}: {}", config_path.display(), e))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Cấu hình trang không hợp lệ: {}", e))?;

        config.base_url()?;
        Ok(config)
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("base_url '{}' không hợp lệ: {}", self.base_url, e))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use scraper::Html;

    use super::*;
    use crate::extractor::Value;

    pub(crate) const SITE_TOML: &str = r##"
name = "truyenfull"
base_url = "https://truyenfull.vision/"
delay_ms = 0

[story.title]
type = "Text"
selector = "h1"

[story.author]
type = "Text"
selector = "a[href*='tac-gia']"

[story.cover_url]
type = "First"
items = [
    { type = "Attr", selector = "img.book", name = "src" },
    { type = "Attr", selector = "img[alt*='cover']", name = "src" },
    { type = "Contains", selector = "img[src]", name = "src", keywords = ["cover", "book", "story", "truyen"] },
]

[chapters]
this = "li a[href*='chuong-']"
skip = ["top-truyen", "danh-sach", "100-chuong", "500-chuong", "1000-chuong"]
href_contains = "chuong-"
title_prefix = "chương"

[content]
candidates = ["#chapter-c", ".chapter-c"]
"##;

    #[test]
    fn site_config_parses_extractor_tree() {
        let site = SiteConfig::from_toml(SITE_TOML).unwrap();
        assert_eq!(site.name, "truyenfull");
        assert_eq!(site.delay(), Duration::ZERO);
        assert_eq!(site.timeout(), Duration::from_secs(15));
        assert_eq!(site.content.candidates.len(), 2);
        assert!(SITE_TOML.trim_end().ends_with(r##"candidates = ["#chapter-c", ".chapter-c"]"##));

        let html = Html::parse_document(
            r#"<h1> Tam Sinh Tam Thế </h1>
               <a href="/tac-gia/duong-that-cong-tu/">Đường Thất Công Tử</a>
               <img src="/logo.png"><img src="/img/truyen/tam-sinh.jpg">"#,
        );
        let root = html.root_element();
        assert_eq!(
            site.story.extract_title(root),
            Value::Single("Tam Sinh Tam Thế".into())
        );
        assert_eq!(
            site.story.extract_author(root),
            Value::Single("Đường Thất Công Tử".into())
        );
        assert_eq!(
            site.story.extract_cover_url(root),
            Value::Single("/img/truyen/tam-sinh.jpg".into())
        );
    }

    #[test]
    fn invalid_selector_is_rejected() {
        let broken = SITE_TOML.replace("#chapter-c", "##");
        assert!(SiteConfig::from_toml(&broken).is_err());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let broken = SITE_TOML.replace("https://truyenfull.vision/", "không phải url");
        assert!(SiteConfig::from_toml(&broken).is_err());
    }

    #[test]
    fn missing_app_config_uses_defaults() {
        let app = AppConfig::load_from("does-not-exist").unwrap();
        assert_eq!(app.site, "truyenfull");
        assert_eq!(app.sites_dir, PathBuf::from("config"));
        assert!(!app.user_agent().is_empty());
    }
}
