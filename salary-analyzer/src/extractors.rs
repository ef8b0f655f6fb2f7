use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::api::SalaryExtractor;
use crate::models::SalaryRange;

pub const DOMESTIC_CURRENCY: &str = "RUR";

/// The key must be present, `null` is allowed
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}

#[derive(Deserialize, Debug)]
struct HeadHunterSalaryField {
    #[serde(deserialize_with = "required_nullable")]
    from: Option<u32>,
    #[serde(deserialize_with = "required_nullable")]
    to: Option<u32>,
    currency: String,
}

/// Reads the `salary` object of a HeadHunter vacancy.
/// Ranges in any currency other than `currency` are dropped entirely.
#[derive(Debug, Clone)]
pub struct HeadHunterSalary {
    currency: String,
}

impl HeadHunterSalary {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl Default for HeadHunterSalary {
    fn default() -> Self {
        Self::new(DOMESTIC_CURRENCY)
    }
}

impl SalaryExtractor for HeadHunterSalary {
    fn extract(&self, vacancy: &Value) -> SalaryRange {
        let Some(salary) = vacancy.get("salary") else {
            return SalaryRange::unset();
        };
        let salary = match HeadHunterSalaryField::deserialize(salary) {
            Ok(salary) => salary,
            Err(e) => {
                log::trace!("ignoring malformed headhunter salary {}: {}", salary, e);
                return SalaryRange::unset();
            }
        };
        if salary.currency != self.currency {
            return SalaryRange::unset();
        }
        SalaryRange::new(
            salary.from.filter(|from| *from != 0),
            salary.to.filter(|to| *to != 0),
        )
    }
}

#[derive(Deserialize, Debug)]
struct SuperJobPayment {
    #[serde(deserialize_with = "required_nullable")]
    payment_from: Option<u32>,
    #[serde(deserialize_with = "required_nullable")]
    payment_to: Option<u32>,
}

/// Reads `payment_from` and `payment_to` of a SuperJob vacancy, which are
/// always quoted in the domestic currency.
#[derive(Debug, Clone, Default)]
pub struct SuperJobSalary;

impl SalaryExtractor for SuperJobSalary {
    fn extract(&self, vacancy: &Value) -> SalaryRange {
        let payment = match SuperJobPayment::deserialize(vacancy) {
            Ok(payment) => payment,
            Err(e) => {
                log::trace!("ignoring malformed superjob payment: {}", e);
                return SalaryRange::unset();
            }
        };
        let from = payment.payment_from.filter(|from| *from != 0);
        // a lower bound with a zero upper bound is a broken range, not an open one
        if from.is_some() && payment.payment_to == Some(0) {
            return SalaryRange::unset();
        }
        SalaryRange::new(from, payment.payment_to)
    }
}
