use crate::aggregator::SalarySample;

/// Advertised compensation bounds of a single vacancy, in one currency
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub from: Option<u32>,
    pub to: Option<u32>,
}

impl SalaryRange {
    pub fn new(from: Option<u32>, to: Option<u32>) -> Self {
        Self { from, to }
    }

    pub fn unset() -> Self {
        Self::default()
    }
}

/// Per platform and language summary shown in the report.
///
/// `vacancies_found` is the platform reported match count for HeadHunter, but
/// the number of records this client actually examined for SuperJob. The two
/// columns are therefore not comparable across platforms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStatistics {
    pub vacancies_found: u32,
    pub vacancies_processed: u32,
    /// 0 when no vacancy had a usable salary
    pub average_salary: u32,
}

impl LanguageStatistics {
    pub fn new(vacancies_found: u32, sample: &SalarySample) -> Self {
        Self {
            vacancies_found,
            vacancies_processed: sample.vacancies_processed(),
            average_salary: sample.average_salary(),
        }
    }
}
