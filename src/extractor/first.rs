use scraper::ElementRef;
use serde::Deserialize;

use super::{Extractor, Value};

/// Thử lần lượt các extractor con, lấy kết quả không rỗng đầu tiên.
#[derive(Deserialize)]
pub struct First {
    items: Vec<Box<dyn Extractor>>,
}

#[typetag::deserialize]
impl Extractor for First {
    fn extract(&self, element: ElementRef) -> Value {
        for item in &self.items {
            if let Value::Single(v) = item.extract(element) {
                return Value::Single(v);
            }
        }
        Value::Empty
    }
}
