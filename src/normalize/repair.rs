use std::sync::LazyLock;

use regex::Regex;

use super::tables::{BROKEN_WORDS, GENERAL_BOUNDARY, WORD_PAIRS};

/// Văn bản ngắn hơn số ký tự này được coi là nhiễu và trả về nguyên vẹn.
const MIN_REPAIR_CHARS: usize = 5;

static SPACE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    std::iter::once(GENERAL_BOUNDARY)
        .chain(WORD_PAIRS.iter().copied())
        .map(|pattern| Regex::new(pattern).expect("WORD_PAIRS regex"))
        .collect()
});

static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("HORIZONTAL_SPACE regex"));

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +([.!?,:;])").expect("SPACE_BEFORE_PUNCT regex"));

/// Sửa chữ bị tách và chữ bị dính trong văn bản chương.
///
/// Xử lý từng dòng một, không bao giờ gộp hay tách dòng: số dòng đầu ra luôn
/// bằng số dòng đầu vào. Dòng chỉ có khoảng trắng trở thành dòng rỗng.
pub fn repair(text: &str) -> String {
    if text.trim().chars().count() < MIN_REPAIR_CHARS {
        return text.to_string();
    }

    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                repair_line(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Chạy lần lượt ba bước sửa trên một dòng.
pub fn repair_line(line: &str) -> String {
    let line = fix_broken_words(line);
    let line = fix_missing_spaces(&line);
    normalize_spacing(&line)
}

/// Bước A: ghép lại các chữ bị chèn dấu cách ở giữa.
pub fn fix_broken_words(line: &str) -> String {
    BROKEN_WORDS
        .iter()
        .fold(line.to_string(), |line, (broken, fixed)| {
            line.replace(broken, fixed)
        })
}

/// Bước B: thêm dấu cách giữa hai chữ bị dính liền.
pub fn fix_missing_spaces(line: &str) -> String {
    SPACE_RULES.iter().fold(line.to_string(), |line, rule| {
        rule.replace_all(&line, "${1} ${2}").into_owned()
    })
}

/// Bước C: gộp khoảng trắng, bỏ dấu cách trước dấu câu, cắt hai đầu.
pub fn normalize_spacing(line: &str) -> String {
    let line = HORIZONTAL_SPACE.replace_all(line, " ");
    let line = SPACE_BEFORE_PUNCT.replace_all(&line, "${1}");
    line.trim().to_string()
}
