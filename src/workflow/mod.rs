pub mod crawl_state;
pub mod pagination_crawler;

pub use crawl_state::{CrawlReport, CrawlState, CrawlStep};
pub use pagination_crawler::PaginationCrawler;
