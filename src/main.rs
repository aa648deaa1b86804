use std::time::Instant;

use anyhow::Result;
use tracing::error;

use truyenfull_fetch::config::AppConfig;
use truyenfull_fetch::utils::{ask_continue, display_elapsed_time, get_story_url, prompt_max_chapters};
use truyenfull_fetch::{TruyenCrawler, logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init();

    let app = AppConfig::load()?;
    let site = app.site_config()?;
    let base_url = site.base_url()?;
    let crawler = TruyenCrawler::new(&app, site)?;

    loop {
        println!("\n=== truyenfull-fetch ===");
        let Some(story_url) = get_story_url(&base_url)? else {
            break;
        };

        let start = Instant::now();
        match crawler.story(&story_url).await {
            Ok(page) => {
                let max_chapters = prompt_max_chapters(page.chapters.len())?;
                match crawler.crawl(&page, Some(max_chapters)).await {
                    Ok(_) => display_elapsed_time(start.elapsed()),
                    Err(e) => error!("Tải truyện thất bại: {}", e),
                }
            }
            Err(e) => error!("Không đọc được trang truyện: {}", e),
        }

        if !ask_continue()? {
            break;
        }
    }

    println!("Tạm biệt!");
    Ok(())
}
