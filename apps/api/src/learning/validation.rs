//! Boundary validation for learning records. The evaluator assumes
//! well-formed input, so malformed records are rejected here, before they
//! are persisted.

/// CPD hours must be a positive, finite number.
pub fn validate_cpd_hours(hours: f64) -> Result<(), String> {
    if hours.is_finite() && hours > 0.0 {
        Ok(())
    } else {
        Err("hours must be a positive number".to_string())
    }
}

/// A reflection is acceptable in one of two shapes: the legacy free-text
/// `content`, or all four NMC question answers plus at least one Code
/// theme. A partially answered NMC form is neither.
pub fn validate_reflection_content(
    content: &str,
    nmc_answers: [Option<&str>; 4],
    code_theme_count: usize,
) -> Result<(), String> {
    let has_legacy = !content.trim().is_empty();
    let nmc_complete = nmc_answers
        .iter()
        .all(|answer| answer.map(|a| !a.trim().is_empty()).unwrap_or(false));

    if has_legacy || (nmc_complete && code_theme_count > 0) {
        Ok(())
    } else {
        Err(
            "a reflection needs either free-text content, or all four NMC answers \
             and at least one Code theme"
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_hours_pass() {
        assert!(validate_cpd_hours(0.5).is_ok());
        assert!(validate_cpd_hours(6.0).is_ok());
    }

    #[test]
    fn zero_negative_and_nan_hours_fail() {
        assert!(validate_cpd_hours(0.0).is_err());
        assert!(validate_cpd_hours(-1.0).is_err());
        assert!(validate_cpd_hours(f64::NAN).is_err());
        assert!(validate_cpd_hours(f64::INFINITY).is_err());
    }

    #[test]
    fn legacy_content_alone_is_enough() {
        let result = validate_reflection_content("De-escalation worked.", [None; 4], 0);
        assert!(result.is_ok());
    }

    #[test]
    fn complete_nmc_form_is_enough() {
        let answers = [Some("what"), Some("learned"), Some("changed"), Some("code")];
        assert!(validate_reflection_content("", answers, 1).is_ok());
    }

    #[test]
    fn partial_nmc_form_is_rejected() {
        let answers = [Some("what"), Some("learned"), Some("changed"), None];
        assert!(validate_reflection_content("", answers, 1).is_err());
    }

    #[test]
    fn nmc_form_without_code_themes_is_rejected() {
        let answers = [Some("what"), Some("learned"), Some("changed"), Some("code")];
        assert!(validate_reflection_content("", answers, 0).is_err());
    }

    #[test]
    fn whitespace_answers_do_not_count() {
        let answers = [Some("what"), Some("   "), Some("changed"), Some("code")];
        assert!(validate_reflection_content("", answers, 1).is_err());
        assert!(validate_reflection_content("   ", [None; 4], 0).is_err());
    }
}
