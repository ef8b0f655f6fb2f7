pub mod aggregator;
pub mod api;
pub mod estimator;
pub mod extractors;
pub mod models;

pub use aggregator::{collect_salaries, SalarySample};
pub use api::SalaryExtractor;
pub use estimator::predict_salary;
pub use extractors::{HeadHunterSalary, SuperJobSalary};
pub use models::{LanguageStatistics, SalaryRange};
