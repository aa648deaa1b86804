use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

// Khối quảng cáo không lồng thêm <div> nào khác, nên khớp không tham lam là đủ.
static AD_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<div[^>]*ads[^>]*>.*?</div>").expect("AD_BLOCK regex")
});

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("LINE_BREAK regex"));

/// Lấy văn bản thuần từ khối nội dung chương, mỗi `<br>` thành đúng một `\n`.
///
/// `None` cho kết quả rỗng.
pub fn extract(content: Option<ElementRef>) -> String {
    match content {
        Some(element) => extract_html(&element.html()),
        None => String::new(),
    }
}

/// Như [`extract`], nhưng nhận thẳng chuỗi HTML.
pub fn extract_html(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let html = AD_BLOCK.replace_all(html, "");
    // phải đổi <br> trước khi bỏ thẻ, nếu không sẽ mất xuống dòng
    let html = LINE_BREAK.replace_all(&html, "\n");

    let fragment = Html::parse_fragment(&html);
    let text = fragment.root_element().text().collect::<String>();

    text.trim().to_string()
}
