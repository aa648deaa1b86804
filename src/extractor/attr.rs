use scraper::{ElementRef, Selector};
use serde::Deserialize;

use super::{Extractor, Value, deserialize_nullable_selector};

#[derive(Deserialize)]
pub struct Attr {
    #[serde(default, deserialize_with = "deserialize_nullable_selector")]
    pub selector: Option<Selector>,
    pub name: String,
}

#[typetag::deserialize]
impl Extractor for Attr {
    fn extract(&self, element: ElementRef) -> Value {
        let element = if let Some(selector) = &self.selector {
            element.select(selector).next()
        } else {
            Some(element)
        };
        let attr = element
            .and_then(|e| e.value().attr(&self.name))
            .filter(|v| !v.is_empty());

        attr.map_or(Value::Empty, |v| Value::Single(v.to_string()))
    }
}
