use scraper::{ElementRef, Selector};
use serde::Deserialize;

use super::{Extractor, Value, deserialize_nullable_selector};

/// Văn bản (đã cắt khoảng trắng hai đầu) của phần tử khớp đầu tiên.
#[derive(Debug, Deserialize)]
pub struct Text {
    #[serde(default, deserialize_with = "deserialize_nullable_selector")]
    selector: Option<Selector>,
}

#[typetag::deserialize]
impl Extractor for Text {
    fn extract(&self, element: ElementRef) -> Value {
        let elem = if let Some(selector) = &self.selector {
            element.select(selector).next()
        } else {
            Some(element)
        };
        let Some(elem) = elem else {
            return Value::Empty;
        };

        let text = elem.text().collect::<String>();
        let text = text.trim();
        if text.is_empty() {
            Value::Empty
        } else {
            Value::Single(text.to_string())
        }
    }
}
