pub mod api;
pub mod config;
pub mod headhunter;
pub mod superjob;
#[cfg(test)]
mod test_server;
mod types;

pub use api::PageSource;
pub use config::{HeadHunterConfig, SuperJobConfig};
pub use types::{Error, Result};

/// One page worth of raw vacancy records, kept as loose JSON so a single
/// malformed record never fails the whole page.
pub type Batch = Vec<serde_json::Value>;
