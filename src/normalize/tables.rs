// Bảng sửa lỗi lấy từ dữ liệu thực tế của truyenfull, giữ nguyên thứ tự.
// Thứ tự có ý nghĩa: mỗi luật chạy trên kết quả của luật trước.

/// Chữ bị tách bởi một dấu cách thừa ở giữa từ.
pub(crate) const BROKEN_WORDS: &[(&str, &str)] = &[
    ("nó i", "nói"),
    ("th ai", "thai"),
    ("như ng", "nhưng"),
    ("cũ ng", "cũng"),
    ("qua nh", "quanh"),
    ("to àn", "toàn"),
    ("và o", "vào"),
    ("đi ện", "điện"),
    ("đượ c", "được"),
    ("ngườ i", "người"),
    ("thấ y", "thấy"),
    ("mà ng", "mang"),
    ("thườ ng", "thường"),
    ("cườ i", "cười"),
    ("là m", "làm"),
    ("đâ u", "đâu"),
    ("nà o", "nào"),
    ("lạ i", "lại"),
    ("lạ nh", "lạnh"),
    ("rồ i", "rồi"),
    ("cò n", "còn"),
    ("tr ước", "trước"),
    ("tr ên", "trên"),
    ("tr ở", "trở"),
    ("từ ng", "từng"),
    ("khi ến", "khiến"),
    ("khá c", "khác"),
    ("cá c", "các"),
    ("sá ng", "sáng"),
    ("miề ng", "miệng"),
    ("tiề ng", "tiếng"),
    ("thiề u", "thiếu"),
    ("diề u", "điều"),
    // tên nhân vật
    ("Tộ tố", "Tố Tố"),
    ("tộ tố", "Tố Tố"),
];

/// Chữ thường liền ngay trước một chữ viết hoa.
pub(crate) const GENERAL_BOUNDARY: &str = r"([a-zàáảãạăằắẳẵặâầấẩẫậđèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵ]+)([A-ZÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬĐÈÉẺẼẸÊỀẾỂỄỆÌÍỈĨỊÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢÙÚỦŨỤƯỪỨỬỮỰỲÝỶỸỴ][a-zàáảãạăằắẳẵặâầấẩẫậđèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵ]*)";

/// Các cặp từ hay bị dính liền, cả hai vế đều viết thường.
/// Nhóm 1 là từ bên trái, nhóm 2 là các từ có thể đứng sau.
pub(crate) const WORD_PAIRS: &[&str] = &[
    r"(là)(một|hai|ba|bốn|năm|sáu|bảy|tám|chín|mười|thần|tiên|hối|núi|khuôn|vợ|tự|thái|đang|hạ|mà|thầm)",
    r"(vì)(mang|ta|thế)",
    r"(có)(sáng|được|chút|đứa|phải|ai|hai|một)",
    r"(ta)(hai|chui|đoán|sợ|run|không|còn|đau|thầm)",
    r"(tử)(duy|khác|điện)",
    r"(nữ)(chăm)",
    r"(mở)(cửa)",
    r"(ai)(đó)",
    r"(ra)(khỏi|đã|giường)",
    r"(đi)(một|nữa)",
    r"(đó)(lại|thực|thích)",
    r"(đã)(khiến|yêu|có|từng|mất|hơi)",
    r"(vô)(lý)",
    r"(tơ)(vò)",
    r"(và)(đôi)",
    r"(bị)(khoét)",
    r"(từ)(đâu|khi)",
    r"(ban)(năm)",
    r"(cô)(nương|đơn)",
    r"(đi)(qua)",
    r"(về)(cái)",
    r"(tự)(khép|lấy)",
    r"(ta)(cứu|nói)",
    r"(cả)(mọi)",
    r"(đỡ)(ta)",
    r"(sự)(việc)",
    r"(lên)(Cửu)",
    r"(bốn)(bề)",
    r"(chữ)(Tố)",
    r"(ăn)(khớp)",
    r"(đi)(nghỉ)",
    r"(đã)(có|mất)",
    r"(ta)(rằng|rồi)",
    r"(cứ)(ngỡ)",
    r"(của)(đám|ngươi)",
    r"(trào)(lên)",
    r"(ngạo)(mạn)",
    r"(như)(thế)",
    r"(chộp)(lấy)",
    r"(ta)(xuống)",
    r"(rơi)(khỏi)",
    r"(cố)(ý)",
    r"(dựng)(đứng)",
    r"(hắt)(ra)",
    r"(con)(trai)",
    r"(tiểu)(tiên)",
    r"(năm)(thứ)",
    r"(Dạ)(Hoa)",
    r"(Tố)(Cẩm)",
];
