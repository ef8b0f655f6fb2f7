pub mod scraper;
pub mod types;

pub use scraper::{scrape, Client, Search};
pub use types::ApiResponse;
