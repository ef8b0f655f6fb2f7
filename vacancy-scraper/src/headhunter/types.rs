use serde::{Deserialize, Serialize};

/// One page of `GET /vacancies`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ApiResponse {
    /// Total matches for the query, across all pages
    pub found: u32,
    pub pages: u32,
    pub items: Vec<serde_json::Value>,
}
