use serde_json::Value;

use crate::models::SalaryRange;

/// Strategy for reading an advertised salary range out of one raw vacancy record.
/// Each platform has its own record shape, so each gets its own implementation.
pub trait SalaryExtractor {
    /// Never fails: a record without a usable salary yields an empty range
    fn extract(&self, vacancy: &Value) -> SalaryRange;
}
