use crate::models::SalaryRange;

/// Ceilings overstate typical pay
const UPPER_BOUND_FACTOR: f64 = 0.8;
/// Floors understate typical pay
const LOWER_BOUND_FACTOR: f64 = 1.2;

/// Point estimate of the salary behind an advertised range.
///
/// Both bounds give their mean, a lone upper bound is scaled down by 20% and a
/// lone lower bound is scaled up by 20%. A zero bound counts as missing.
pub fn predict_salary(range: &SalaryRange) -> Option<f64> {
    let from = range.from.filter(|from| *from > 0).map(f64::from);
    let to = range.to.filter(|to| *to > 0).map(f64::from);
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (None, Some(to)) => Some(to * UPPER_BOUND_FACTOR),
        (Some(from), None) => Some(from * LOWER_BOUND_FACTOR),
        (None, None) => None,
    }
}
