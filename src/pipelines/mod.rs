pub mod url;

pub use self::url::{scrape_document, scrape_html, Scraper};
