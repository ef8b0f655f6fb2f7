use futures::{pin_mut, Stream, TryStreamExt};
use serde_json::Value;

use crate::api::SalaryExtractor;
use crate::estimator::predict_salary;

/// Truncated salary estimates collected for one language on one platform
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SalarySample {
    /// Every record looked at, with or without a usable salary
    pub examined: u32,
    pub estimates: Vec<u32>,
}

impl SalarySample {
    pub fn from_estimates(estimates: Vec<u32>) -> Self {
        Self {
            examined: estimates.len() as u32,
            estimates,
        }
    }

    pub fn record<X>(&mut self, vacancy: &Value, extractor: &X)
    where
        X: SalaryExtractor + ?Sized,
    {
        self.examined += 1;
        let range = extractor.extract(vacancy);
        if let Some(salary) = predict_salary(&range) {
            self.estimates.push(salary as u32);
        }
    }

    pub fn vacancies_processed(&self) -> u32 {
        self.estimates.len() as u32
    }

    /// Integer mean of the estimates, 0 when there are none
    pub fn average_salary(&self) -> u32 {
        if self.estimates.is_empty() {
            return 0;
        }
        let total: u64 = self.estimates.iter().map(|salary| u64::from(*salary)).sum();
        (total / self.estimates.len() as u64) as u32
    }
}

/// Drain a stream of vacancy batches, estimating the salary of every record.
/// The first batch error aborts collection and is returned as is.
pub async fn collect_salaries<S, E, X>(batches: S, extractor: &X) -> Result<SalarySample, E>
where
    S: Stream<Item = Result<Vec<Value>, E>>,
    X: SalaryExtractor + ?Sized,
{
    pin_mut!(batches);
    let mut sample = SalarySample::default();
    while let Some(batch) = batches.try_next().await? {
        for vacancy in &batch {
            sample.record(vacancy, extractor);
        }
    }
    log::debug!(
        "examined {} vacancies, {} with a usable salary",
        sample.examined,
        sample.vacancies_processed()
    );
    Ok(sample)
}
