use chrono::NaiveDate;

use crate::models::training::TrainingStatus;

/// Records expiring within this many days (inclusive) are flagged Due Soon.
pub const DUE_SOON_WINDOW_DAYS: i64 = 30;

/// Classifies a training record from its expiry date and a reference day.
///
/// Both inputs are calendar dates, so transitions happen exactly at day
/// boundaries. A record with no expiry never expires. A record expiring
/// today is Due Soon, not Expired — it is still current until midnight.
pub fn classify(expiry_date: Option<NaiveDate>, today: NaiveDate) -> TrainingStatus {
    let expiry = match expiry_date {
        Some(d) => d,
        None => return TrainingStatus::Valid,
    };

    let days_until_expiry = (expiry - today).num_days();
    if days_until_expiry < 0 {
        TrainingStatus::Expired
    } else if days_until_expiry <= DUE_SOON_WINDOW_DAYS {
        TrainingStatus::DueSoon
    } else {
        TrainingStatus::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_expiry_is_always_valid() {
        assert_eq!(classify(None, date(2024, 6, 1)), TrainingStatus::Valid);
    }

    #[test]
    fn thirty_days_out_is_due_soon() {
        let today = date(2024, 6, 1);
        assert_eq!(
            classify(Some(date(2024, 7, 1)), today),
            TrainingStatus::DueSoon
        );
    }

    #[test]
    fn thirty_one_days_out_is_valid() {
        let today = date(2024, 6, 1);
        assert_eq!(
            classify(Some(date(2024, 7, 2)), today),
            TrainingStatus::Valid
        );
    }

    #[test]
    fn one_day_past_is_expired() {
        let today = date(2024, 6, 1);
        assert_eq!(
            classify(Some(date(2024, 5, 31)), today),
            TrainingStatus::Expired
        );
    }

    #[test]
    fn expiring_today_is_due_soon() {
        let today = date(2024, 6, 1);
        assert_eq!(
            classify(Some(date(2024, 6, 1)), today),
            TrainingStatus::DueSoon
        );
    }

    #[test]
    fn far_future_is_valid() {
        let today = date(2024, 6, 1);
        assert_eq!(
            classify(Some(date(2030, 1, 1)), today),
            TrainingStatus::Valid
        );
    }
}
