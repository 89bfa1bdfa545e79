//! Tip Split
//!
//! Splits a bill plus tip evenly across a party.

use serde::Serialize;

use crate::error::{TallyError, TallyResult};
use crate::models::Amount;

/// Result of splitting a bill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipSplit {
    pub bill: Amount,
    pub tip_percent: f64,
    pub num_people: u32,
    pub tip_amount: Amount,
    pub total: Amount,
    pub per_person: Amount,
    pub tip_per_person: Amount,
}

/// Compute tip, total and per-person shares
///
/// Bill and tip percentage must be finite and non-negative; there must be
/// at least one person. Any upper bound on the tip is left to the caller.
pub fn split_bill(bill: f64, tip_percent: f64, num_people: u32) -> TallyResult<TipSplit> {
    if !bill.is_finite() || bill < 0.0 {
        return Err(TallyError::Validation(format!(
            "Bill amount must be a non-negative number (got {})",
            bill
        )));
    }

    if !tip_percent.is_finite() || tip_percent < 0.0 {
        return Err(TallyError::Validation(format!(
            "Tip percentage must be a non-negative number (got {})",
            tip_percent
        )));
    }

    if num_people == 0 {
        return Err(TallyError::Validation(
            "Number of people must be at least 1".into(),
        ));
    }

    let people = f64::from(num_people);
    let tip_amount = bill * (tip_percent / 100.0);
    let total = bill + tip_amount;

    Ok(TipSplit {
        bill: Amount::new(bill),
        tip_percent,
        num_people,
        tip_amount: Amount::new(tip_amount),
        total: Amount::new(total),
        per_person: Amount::new(total / people),
        tip_per_person: Amount::new(tip_amount / people),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bill() {
        let split = split_bill(100.0, 20.0, 4).unwrap();
        assert_eq!(split.tip_amount.value(), 20.0);
        assert_eq!(split.total.value(), 120.0);
        assert_eq!(split.per_person.value(), 30.0);
        assert_eq!(split.tip_per_person.value(), 5.0);
    }

    #[test]
    fn test_single_person_default() {
        let split = split_bill(50.0, 18.0, 1).unwrap();
        assert_eq!(split.tip_amount.cents(), 900);
        assert_eq!(split.total.cents(), 5900);
        assert_eq!(split.per_person, split.total);
    }

    #[test]
    fn test_zero_tip_and_zero_bill() {
        let split = split_bill(80.0, 0.0, 2).unwrap();
        assert!(split.tip_amount.is_zero());
        assert_eq!(split.per_person.value(), 40.0);

        let split = split_bill(0.0, 15.0, 3).unwrap();
        assert!(split.total.is_zero());
    }

    #[test]
    fn test_tip_above_slider_range_accepted() {
        let split = split_bill(10.0, 120.0, 1).unwrap();
        assert_eq!(split.tip_amount.value(), 12.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(split_bill(-1.0, 10.0, 1).unwrap_err().is_validation());
        assert!(split_bill(10.0, -5.0, 1).unwrap_err().is_validation());
        assert!(split_bill(10.0, 10.0, 0).unwrap_err().is_validation());
        assert!(split_bill(f64::NAN, 10.0, 1).is_err());
        assert!(split_bill(10.0, f64::INFINITY, 1).is_err());
    }
}
