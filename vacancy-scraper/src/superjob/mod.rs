pub mod scraper;
pub mod types;

pub use scraper::{scrape, Client};
pub use types::ApiResponse;
