use serde::{Deserialize, Serialize};

use crate::models::career::{CareerPathRow, CareerRequirementRow, RequirementStatus};

/// Progress toward a career path's target band.
///
/// An empty requirement list reads as 0% — a path with nothing planned has
/// nothing done. `salary_delta` is only present when both salaries are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathwayProgress {
    pub done: usize,
    pub total: usize,
    pub percent_complete: u8,
    pub salary_delta: Option<f64>,
}

pub fn pathway_progress(
    path: &CareerPathRow,
    requirements: &[CareerRequirementRow],
) -> PathwayProgress {
    let total = requirements.len();
    let done = requirements
        .iter()
        .filter(|r| r.status == RequirementStatus::Done)
        .count();

    let percent_complete = if total == 0 {
        0
    } else {
        ((done as f64 / total as f64) * 100.0).round() as u8
    };

    let salary_delta = match (path.current_salary, path.target_salary) {
        (Some(current), Some(target)) => Some(target - current),
        _ => None,
    };

    PathwayProgress {
        done,
        total,
        percent_complete,
        salary_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::RequirementKind;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    fn path(current_salary: Option<f64>, target_salary: Option<f64>) -> CareerPathRow {
        CareerPathRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            current_band: "Band 5".to_string(),
            target_band: "Band 6".to_string(),
            specialty: "Acute Medicine".to_string(),
            current_salary,
            target_salary,
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    fn requirement(status: RequirementStatus) -> CareerRequirementRow {
        CareerRequirementRow {
            id: Uuid::new_v4(),
            career_path_id: Uuid::new_v4(),
            title: "ALS (Advanced Life Support)".to_string(),
            kind: RequirementKind::Qualification,
            status,
            description: String::new(),
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    #[test]
    fn two_of_four_done_is_fifty_percent() {
        let requirements = vec![
            requirement(RequirementStatus::Done),
            requirement(RequirementStatus::Done),
            requirement(RequirementStatus::InProgress),
            requirement(RequirementStatus::NotStarted),
        ];

        let progress = pathway_progress(&path(None, None), &requirements);

        assert_eq!(progress.done, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percent_complete, 50);
    }

    #[test]
    fn empty_requirement_list_is_zero_percent() {
        let progress = pathway_progress(&path(None, None), &[]);

        assert_eq!(progress.percent_complete, 0);
        assert_eq!(progress.total, 0);
    }

    #[test]
    fn salary_delta_needs_both_figures() {
        let both = pathway_progress(&path(Some(28_407.0), Some(35_392.0)), &[]);
        assert_eq!(both.salary_delta, Some(6_985.0));

        let current_only = pathway_progress(&path(Some(28_407.0), None), &[]);
        assert_eq!(current_only.salary_delta, None);

        let neither = pathway_progress(&path(None, None), &[]);
        assert_eq!(neither.salary_delta, None);
    }

    #[test]
    fn status_cycle_returns_to_start_after_three_advances() {
        let start = RequirementStatus::NotStarted;

        let once = start.advance();
        let twice = once.advance();
        let thrice = twice.advance();

        assert_eq!(once, RequirementStatus::InProgress);
        assert_eq!(twice, RequirementStatus::Done);
        assert_eq!(thrice, RequirementStatus::NotStarted);
    }
}
