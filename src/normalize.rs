//! Chuẩn hoá văn bản chương: HTML → văn bản thuần → sửa lỗi chữ tiếng Việt.
//!
//! Cả hai bước đều là hàm thuần, không giữ trạng thái, có thể gọi song song.

pub mod extract;
pub mod repair;
mod tables;

pub use extract::{extract, extract_html};
pub use repair::{fix_broken_words, fix_missing_spaces, normalize_spacing, repair, repair_line};

use scraper::ElementRef;

/// Toàn bộ quy trình cho một khối nội dung chương.
pub fn normalize(content: Option<ElementRef>) -> String {
    repair(&extract(content))
}
