use std::time::Duration;

use anyhow::Result;
use bytes::Bytes;
use reqwest::{Client, StatusCode, header};
use tracing::{debug, instrument};
use url::Url;

use crate::story::cover::image_extension;

pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self { client })
    }

    /// Tải một trang HTML; mã trạng thái khác 200 được coi là lỗi.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn page(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Tải thất bại {}: {}", url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            anyhow::bail!("Mã trạng thái {} khi tải {}", status, url);
        }

        let html = response
            .text()
            .await
            .map_err(|e| anyhow::anyhow!("Đọc phản hồi thất bại {}: {}", url, e))?;
        debug!("Đã tải {} byte", html.len());
        Ok(html)
    }

    /// Tải ảnh, trả về dữ liệu và đuôi tệp.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn image(&self, url: &Url, referer: &Url) -> Result<(Bytes, &'static str)> {
        let response = self
            .client
            .get(url.clone())
            .header(header::REFERER, referer.as_str())
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Tải ảnh thất bại {}: {}", url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            anyhow::bail!("Mã trạng thái {} khi tải ảnh {}", status, url);
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let extension = image_extension(&content_type, url.as_str());

        let image_bytes = response.bytes().await?;
        Ok((image_bytes, extension))
    }
}
