use serde::{Deserialize, Serialize};

/// One page of `GET /2.0/vacancies/`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ApiResponse {
    pub objects: Vec<serde_json::Value>,
}
