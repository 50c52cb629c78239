use serde::{Deserialize, Serialize};

use crate::models::cpd::CpdEntryRow;
use crate::models::reflection::ReflectionRow;

/// NMC revalidation thresholds. Regulatory policy constants, not tunables.
pub const CPD_HOURS_REQUIRED: f64 = 35.0;
pub const PARTICIPATORY_HOURS_REQUIRED: f64 = 20.0;
pub const REFLECTIONS_REQUIRED: usize = 5;

/// Revalidation-readiness metrics for one user, plus the checklist each
/// metric is measured against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevalidationReadiness {
    pub total_cpd_hours: f64,
    pub participatory_hours: f64,
    pub reflection_count: usize,
    pub cpd_hours_met: bool,
    pub participatory_hours_met: bool,
    pub reflections_met: bool,
}

pub fn revalidation_readiness(
    cpd_entries: &[CpdEntryRow],
    reflections: &[ReflectionRow],
) -> RevalidationReadiness {
    let total_cpd_hours: f64 = cpd_entries.iter().map(|e| e.hours).sum();
    let participatory_hours: f64 = cpd_entries
        .iter()
        .filter(|e| e.participatory)
        .map(|e| e.hours)
        .sum();
    let reflection_count = reflections.len();

    RevalidationReadiness {
        total_cpd_hours,
        participatory_hours,
        reflection_count,
        cpd_hours_met: total_cpd_hours >= CPD_HOURS_REQUIRED,
        participatory_hours_met: participatory_hours >= PARTICIPATORY_HOURS_REQUIRED,
        reflections_met: reflection_count >= REFLECTIONS_REQUIRED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reflection::ReflectionMethod;
    use chrono::{DateTime, NaiveDate, Utc};
    use uuid::Uuid;

    fn cpd(hours: f64, participatory: bool) -> CpdEntryRow {
        CpdEntryRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Wound Care Conference".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            hours,
            participatory,
            reflection: String::new(),
            category: "Clinical".to_string(),
            tags: vec![],
            evidence_url: None,
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    fn reflection() -> ReflectionRow {
        ReflectionRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            title: "Managing a difficult relative".to_string(),
            content: "De-escalation worked.".to_string(),
            nmc_question1: None,
            nmc_question2: None,
            nmc_question3: None,
            nmc_question4: None,
            code_themes: vec![],
            tags: vec![],
            method: ReflectionMethod::Written,
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    #[test]
    fn sums_hours_and_checks_threshold() {
        let entries = vec![cpd(10.0, true), cpd(15.0, false), cpd(12.0, true)];

        let readiness = revalidation_readiness(&entries, &[]);

        assert_eq!(readiness.total_cpd_hours, 37.0);
        assert!(readiness.cpd_hours_met);
    }

    #[test]
    fn participatory_hours_only_count_participatory_entries() {
        let entries = vec![cpd(10.0, true), cpd(15.0, false), cpd(12.0, true)];

        let readiness = revalidation_readiness(&entries, &[]);

        assert_eq!(readiness.participatory_hours, 22.0);
        assert!(readiness.participatory_hours_met);
    }

    #[test]
    fn empty_inputs_produce_zeroes_not_errors() {
        let readiness = revalidation_readiness(&[], &[]);

        assert_eq!(readiness.total_cpd_hours, 0.0);
        assert_eq!(readiness.participatory_hours, 0.0);
        assert_eq!(readiness.reflection_count, 0);
        assert!(!readiness.cpd_hours_met);
        assert!(!readiness.participatory_hours_met);
        assert!(!readiness.reflections_met);
    }

    #[test]
    fn exactly_at_threshold_counts_as_met() {
        let entries = vec![cpd(20.0, true), cpd(15.0, false)];
        let reflections: Vec<ReflectionRow> = (0..5).map(|_| reflection()).collect();

        let readiness = revalidation_readiness(&entries, &reflections);

        assert_eq!(readiness.total_cpd_hours, 35.0);
        assert!(readiness.cpd_hours_met);
        assert_eq!(readiness.participatory_hours, 20.0);
        assert!(readiness.participatory_hours_met);
        assert_eq!(readiness.reflection_count, 5);
        assert!(readiness.reflections_met);
    }

    #[test]
    fn four_reflections_do_not_meet_threshold() {
        let reflections: Vec<ReflectionRow> = (0..4).map(|_| reflection()).collect();

        let readiness = revalidation_readiness(&[], &reflections);

        assert!(!readiness.reflections_met);
    }
}
