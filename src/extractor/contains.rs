use scraper::{ElementRef, Selector};
use serde::Deserialize;

use super::{Extractor, Value, deserialize_selector};

/// Thuộc tính `name` của phần tử đầu tiên mà giá trị (chữ thường) chứa một
/// trong các từ khoá.
#[derive(Deserialize)]
pub struct Contains {
    #[serde(deserialize_with = "deserialize_selector")]
    selector: Selector,
    name: String,
    keywords: Vec<String>,
}

#[typetag::deserialize]
impl Extractor for Contains {
    fn extract(&self, element: ElementRef) -> Value {
        for elem in element.select(&self.selector) {
            let Some(value) = elem.value().attr(&self.name) else {
                continue;
            };
            let lowered = value.to_lowercase();
            if self.keywords.iter().any(|k| lowered.contains(k.as_str())) {
                return Value::Single(value.to_string());
            }
        }
        Value::Empty
    }
}
