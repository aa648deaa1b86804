pub mod config;
pub mod crawler;
pub mod extractor;
pub mod logger;
pub mod normalize;
pub mod story;
pub mod utils;

pub use crawler::TruyenCrawler;
pub use normalize::{extract, repair};
pub use story::{ChapterRecord, StoryInfo, StoryPage};
