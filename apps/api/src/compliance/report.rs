use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::compliance::status::classify;
use crate::models::training::{TrainingRecordRow, TrainingStatus};

/// Aggregated training compliance for one user's record set.
///
/// `percent` is `None` when there are no records at all — "N/A" is not the
/// same thing as an achieved 0%.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceReport {
    pub valid: usize,
    pub due_soon: usize,
    pub expired: usize,
    pub total: usize,
    pub percent: Option<u8>,
}

/// Builds the compliance report for a snapshot of training records,
/// reclassifying every record against `today` rather than trusting any
/// previously derived status.
pub fn compliance_report(records: &[TrainingRecordRow], today: NaiveDate) -> ComplianceReport {
    let mut valid = 0;
    let mut due_soon = 0;
    let mut expired = 0;

    for record in records {
        match classify(record.expiry_date, today) {
            TrainingStatus::Valid => valid += 1,
            TrainingStatus::DueSoon => due_soon += 1,
            TrainingStatus::Expired => expired += 1,
        }
    }

    let total = records.len();
    let percent = if total == 0 {
        None
    } else {
        Some(((valid as f64 / total as f64) * 100.0).round() as u8)
    };

    ComplianceReport {
        valid,
        due_soon,
        expired,
        total,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(expiry: Option<NaiveDate>) -> TrainingRecordRow {
        TrainingRecordRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            course_name: "Basic Life Support".to_string(),
            provider: "NHS Trust".to_string(),
            date_completed: date(2023, 10, 10),
            expiry_date: expiry,
            category: "Clinical".to_string(),
            linked_doc_id: None,
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    #[test]
    fn three_of_four_valid_is_seventy_five_percent() {
        let today = date(2024, 6, 1);
        let records = vec![
            record(Some(date(2025, 1, 1))),
            record(Some(date(2025, 2, 1))),
            record(None),
            record(Some(date(2024, 1, 1))),
        ];

        let report = compliance_report(&records, today);

        assert_eq!(report.valid, 3);
        assert_eq!(report.due_soon, 0);
        assert_eq!(report.expired, 1);
        assert_eq!(report.percent, Some(75));
    }

    #[test]
    fn empty_record_set_has_no_percent() {
        let report = compliance_report(&[], date(2024, 6, 1));

        assert_eq!(report.total, 0);
        assert_eq!(report.percent, None);
    }

    #[test]
    fn percent_rounds_half_up() {
        let today = date(2024, 6, 1);
        // 1 of 8 valid = 12.5% → 13
        let mut records = vec![record(None)];
        records.extend((0..7).map(|_| record(Some(date(2024, 1, 1)))));

        let report = compliance_report(&records, today);

        assert_eq!(report.percent, Some(13));
    }

    #[test]
    fn counts_every_bucket() {
        let today = date(2024, 6, 1);
        let records = vec![
            record(Some(date(2024, 6, 15))), // within 30 days
            record(Some(date(2024, 5, 1))),  // past
            record(Some(date(2026, 1, 1))),  // far out
        ];

        let report = compliance_report(&records, today);

        assert_eq!(
            (report.valid, report.due_soon, report.expired),
            (1, 1, 1)
        );
        assert_eq!(report.percent, Some(33));
    }
}
