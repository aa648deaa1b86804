use std::io::{self, Write};

use anyhow::Result;
use tracing::{debug, info, instrument};
use url::Url;

/// Số chương tải thử khi người dùng không muốn tải hết.
const TRIAL_CHAPTERS: usize = 2;

const YES: &[&str] = &["y", "yes", "có", "c"];
const NO: &[&str] = &["n", "no", "không", "k"];
const EXIT: &[&str] = &["exit", "quit", "thoát", "q"];

/// Truyện mẫu, chọn bằng cách nhập số thứ tự.
pub const SAMPLE_STORIES: &[&str] = &[
    "https://truyenfull.vision/tam-sinh-tam-the-thap-ly-dao-hoa/",
    "https://truyenfull.vision/co-vo-ngot-ngao-khong-the-chay-thoat/",
    "https://truyenfull.vision/tieu-nong-dan-cua-hoang-gia/",
    "https://truyenfull.vision/phi-cung-kieu-nu/",
    "https://truyenfull.vision/nhan-gian-vo-dao/",
];

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    debug!("Người dùng nhập: {}", input.trim());
    Ok(input.trim().to_string())
}

/// Hỏi URL truyện cho tới khi hợp lệ. `None` nếu người dùng thoát.
#[instrument(skip_all)]
pub fn get_story_url(base_url: &Url) -> Result<Option<Url>> {
    println!("\nMột số URL mẫu:");
    for (i, url) in SAMPLE_STORIES.iter().enumerate() {
        println!("   {}. {}", i + 1, url);
    }

    loop {
        let input = prompt(&format!(
            "\nNhập URL truyện (hoặc số 1-{} để chọn mẫu, 'exit' để thoát): ",
            SAMPLE_STORIES.len()
        ))?;
        if EXIT.contains(&input.to_lowercase().as_str()) {
            return Ok(None);
        }
        match choose_story_url(&input, base_url) {
            Ok(url) => {
                println!("Đã chọn: {}", url);
                return Ok(Some(url));
            }
            Err(e) => println!("{}", e),
        }
    }
}

/// Số thứ tự chọn một truyện mẫu; còn lại phải là URL hợp lệ.
pub fn choose_story_url(input: &str, base_url: &Url) -> Result<Url> {
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        let sample = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| SAMPLE_STORIES.get(i))
            .ok_or_else(|| anyhow::anyhow!("Vui lòng chọn từ 1 đến {}", SAMPLE_STORIES.len()))?;
        return check_story_url(sample, base_url);
    }
    check_story_url(input, base_url)
}

/// URL phải đầy đủ và cùng tên miền với trang đã cấu hình.
pub fn check_story_url(input: &str, base_url: &Url) -> Result<Url> {
    if !input.starts_with("http") {
        anyhow::bail!("Vui lòng nhập URL đầy đủ (bắt đầu bằng http)");
    }
    let url = Url::parse(input)?;
    if url.host_str() != base_url.host_str() {
        anyhow::bail!(
            "Chỉ hỗ trợ {}",
            base_url.host_str().unwrap_or(base_url.as_str())
        );
    }
    Ok(url)
}

/// Hỏi số chương cần tải, trong khoảng `1..=total`.
#[instrument]
pub fn prompt_max_chapters(total: usize) -> Result<usize> {
    loop {
        let input = prompt(&format!(
            "\nTải tất cả {} chương? (y/n) hoặc nhập số chương muốn tải: ",
            total
        ))?;
        match parse_chapter_choice(&input, total) {
            Some(count) => return Ok(count),
            None => println!("Vui lòng nhập 'y', 'n' hoặc một số từ 1 đến {}", total),
        }
    }
}

/// `y` là tất cả, `n` là tải thử, số trong `1..=total` là đúng số đó.
pub fn parse_chapter_choice(input: &str, total: usize) -> Option<usize> {
    let input = input.trim().to_lowercase();
    if YES.contains(&input.as_str()) {
        return Some(total);
    }
    if NO.contains(&input.as_str()) {
        return Some(TRIAL_CHAPTERS);
    }
    input
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=total).contains(n))
}

pub fn ask_continue() -> Result<bool> {
    loop {
        let input = prompt("\nTải thêm truyện khác? (y/n): ")?.to_lowercase();
        if YES.contains(&input.as_str()) {
            return Ok(true);
        }
        if NO.contains(&input.as_str()) {
            return Ok(false);
        }
        println!("Vui lòng nhập 'y' hoặc 'n'");
    }
}

pub fn display_elapsed_time(duration: std::time::Duration) {
    let total_ms = duration.as_millis();

    if total_ms >= 60000 {
        let mins = total_ms / 60000;
        let secs = (total_ms % 60000) / 1000;
        info!("Thời gian: {} phút {} giây", mins, secs);
    } else if total_ms >= 1000 {
        let secs = total_ms / 1000;
        let ms_remaining = total_ms % 1000;
        info!("Thời gian: {} giây {} ms", secs, ms_remaining);
    } else {
        info!("Thời gian: {} ms", total_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_choice() {
        assert_eq!(parse_chapter_choice("y", 120), Some(120));
        assert_eq!(parse_chapter_choice(" Có ", 120), Some(120));
        assert_eq!(parse_chapter_choice("không", 120), Some(TRIAL_CHAPTERS));
        assert_eq!(parse_chapter_choice("15", 120), Some(15));
        assert_eq!(parse_chapter_choice("120", 120), Some(120));
        assert_eq!(parse_chapter_choice("0", 120), None);
        assert_eq!(parse_chapter_choice("121", 120), None);
        assert_eq!(parse_chapter_choice("mười", 120), None);
    }

    #[test]
    fn story_url_must_match_site() {
        let base = Url::parse("https://truyenfull.vision/").unwrap();
        assert!(check_story_url("https://truyenfull.vision/tam-sinh/", &base).is_ok());
        assert!(check_story_url("truyenfull.vision/tam-sinh/", &base).is_err());
        assert!(check_story_url("https://example.com/tam-sinh/", &base).is_err());
    }

    #[test]
    fn sample_story_is_chosen_by_number() {
        let base = Url::parse("https://truyenfull.vision/").unwrap();
        assert_eq!(
            choose_story_url("1", &base).unwrap().as_str(),
            "https://truyenfull.vision/tam-sinh-tam-the-thap-ly-dao-hoa/"
        );
        assert_eq!(choose_story_url("5", &base).unwrap().as_str(), SAMPLE_STORIES[4]);
        assert!(choose_story_url("0", &base).is_err());
        assert!(choose_story_url("6", &base).is_err());
        assert_eq!(
            choose_story_url("https://truyenfull.vision/phi-cung-kieu-nu/", &base)
                .unwrap()
                .as_str(),
            SAMPLE_STORIES[3]
        );
    }
}
