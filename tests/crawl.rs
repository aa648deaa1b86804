use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use truyenfull_fetch::config::{AppConfig, SiteConfig};
use truyenfull_fetch::{StoryInfo, TruyenCrawler};
use url::Url;

const DELAY: Duration = Duration::from_millis(200);

const STORY_PAGE: &str = r#"<html><body>
<h1>Tam Sinh Tam Thế</h1>
<a href="/tac-gia/duong-that-cong-tu/">Đường Thất Công Tử</a>
<img class="book" src="/img/cover.jpg">
<ul>
<li><a href="/tam-sinh/chuong-1/">Chương 1</a></li>
<li><a href="/tam-sinh/chuong-2/">Chương 2</a></li>
<li><a href="/tam-sinh/chuong-3/">Chương 3</a></li>
<li><a href="/tam-sinh/chuong-4/">Chương 4</a></li>
</ul>
</body></html>"#;

const CHAPTER_PAGE: &str =
    r#"<html><body><div id="chapter-c">nó i chuyện<br>Xin   chào , bạn</div></body></html>"#;

type Requests = Arc<Mutex<Vec<(String, Instant)>>>;

fn route(path: &str) -> (&'static str, &'static str) {
    match path {
        "/tam-sinh/" => ("200 OK", STORY_PAGE),
        "/tam-sinh/chuong-1/" | "/tam-sinh/chuong-3/" | "/tam-sinh/chuong-4/" => ("200 OK", CHAPTER_PAGE),
        _ => ("404 Not Found", "not found"),
    }
}

async fn serve(listener: TcpListener, requests: Requests) {
    while let Ok((mut stream, _)) = listener.accept().await {
        let requests = requests.clone();
        tokio::spawn(async move {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk).await {
                    Ok(0) | Err(_) => return,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }

            let request = String::from_utf8_lossy(&buf);
            let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
            requests.lock().unwrap().push((path.clone(), Instant::now()));

            let (status, body) = route(&path);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });
    }
}

fn requested_at(requests: &Requests, path: &str) -> Vec<Instant> {
    requests
        .lock()
        .unwrap()
        .iter()
        .filter(|(p, _)| p == path)
        .map(|(_, at)| *at)
        .collect()
}

#[tokio::test]
async fn failed_chapters_and_cover_are_skipped() {
    // máy chủ cục bộ, không đi qua proxy của hệ thống
    unsafe { std::env::set_var("NO_PROXY", "127.0.0.1,localhost") };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());
    let requests = Requests::default();
    tokio::spawn(serve(listener, requests.clone()));

    let site_toml = std::fs::read_to_string("config/truyenfull.toml")
        .unwrap()
        .replace("https://truyenfull.vision/", &base_url)
        .replace("delay_ms = 1000", &format!("delay_ms = {}", DELAY.as_millis()));
    let site = SiteConfig::from_toml(&site_toml).unwrap();

    let output_dir = std::env::temp_dir().join(format!("truyenfull_fetch_crawl_{}", std::process::id()));
    let app = AppConfig {
        output_dir: output_dir.clone(),
        site: "truyenfull".into(),
        sites_dir: PathBuf::from("config"),
        user_agent: Some("truyenfull-fetch-test".into()),
    };
    let crawler = TruyenCrawler::new(&app, site).unwrap();

    let story_url = Url::parse(&format!("{}tam-sinh/", base_url)).unwrap();
    let page = crawler.story(&story_url).await.unwrap();
    assert_eq!(page.title, "Tam Sinh Tam Thế");
    assert_eq!(page.chapters.len(), 4);

    let story = crawler.crawl(&page, Some(3)).await.unwrap();
    let finished = Instant::now();

    assert_eq!(story.total_chapters, 4);
    assert_eq!(story.crawled_chapters, 2);
    assert!(story.cover_image.is_none());
    let titles: Vec<_> = story.chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Chương 1", "Chương 3"]);
    assert_eq!(story.chapters[0].content, "nói chuyện\nXin chào, bạn");

    let story_dir = output_dir.join("Tam-Sinh-Tam-Thế");
    let chapter_one = std::fs::read_to_string(story_dir.join("chapter_001_FINAL.txt")).unwrap();
    assert_eq!(chapter_one, "# Chương 1\n\nnói chuyện\nXin chào, bạn");
    assert!(!story_dir.join("chapter_002_FINAL.txt").exists());
    assert!(story_dir.join("chapter_003_FINAL.txt").exists());
    assert!(!story_dir.join("chapter_004_FINAL.txt").exists());

    let json = std::fs::read_to_string(story_dir.join("story_info_FINAL.json")).unwrap();
    let saved: StoryInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(saved, story);
    assert!(json.contains("\"cover_image\": null"));

    // chỉ tải đúng số chương được yêu cầu, ảnh bìa thử một lần
    assert_eq!(requested_at(&requests, "/img/cover.jpg").len(), 1);
    assert!(requested_at(&requests, "/tam-sinh/chuong-4/").is_empty());

    // nghỉ giữa các chương, kể cả sau chương lỗi, nhưng không nghỉ sau chương cuối
    let first = requested_at(&requests, "/tam-sinh/chuong-1/")[0];
    let second = requested_at(&requests, "/tam-sinh/chuong-2/")[0];
    let third = requested_at(&requests, "/tam-sinh/chuong-3/")[0];
    assert!(second - first >= DELAY);
    assert!(third - second >= DELAY);
    assert!(finished - third < DELAY);

    std::fs::remove_dir_all(&output_dir).unwrap();
}
