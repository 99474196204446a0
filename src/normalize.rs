use crate::models::{NormalizedRecord, StressCategory, SurveyRecord};

/// Representative hours for a study-time answer. Unknown answers count as 0.
pub fn study_hours_midpoint(raw: &str) -> f64 {
    match raw {
        "1-2 hours" => 1.5,
        "3-4 hours" => 3.5,
        "5+ hours" => 5.5,
        other => {
            log::warn!("Unrecognized study hours {other:?}, using 0");
            0.0
        }
    }
}

/// Case-insensitive; anything that is not yes or no is `Depends`.
pub fn stress_category(raw: &str) -> StressCategory {
    match raw.to_lowercase().as_str() {
        "yes" => StressCategory::Yes,
        "no" => StressCategory::No,
        "depends" => StressCategory::Depends,
        _ => {
            log::warn!("Unrecognized financial stress answer {raw:?}, using Depends");
            StressCategory::Depends
        }
    }
}

pub fn normalize(record: &SurveyRecord) -> NormalizedRecord {
    NormalizedRecord {
        study_hours_midpoint: study_hours_midpoint(&record.study_hours_raw),
        stress_category: stress_category(&record.financial_stress_raw),
        record: record.clone(),
    }
}

pub fn normalize_all(records: &[SurveyRecord]) -> Vec<NormalizedRecord> {
    records.iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn midpoints_follow_answer_ranges() {
        assert_eq!(study_hours_midpoint("1-2 hours"), 1.5);
        assert_eq!(study_hours_midpoint("3-4 hours"), 3.5);
        assert_eq!(study_hours_midpoint("5+ hours"), 5.5);
    }

    #[test]
    fn unknown_hours_fall_back_to_zero() {
        assert_eq!(study_hours_midpoint(""), 0.0);
        assert_eq!(study_hours_midpoint("1-2 Hours"), 0.0);
        assert_eq!(study_hours_midpoint("all night"), 0.0);
    }

    #[test]
    fn stress_matching_ignores_case() {
        assert_eq!(stress_category("YES"), StressCategory::Yes);
        assert_eq!(stress_category("yes"), StressCategory::Yes);
        assert_eq!(stress_category("No"), StressCategory::No);
        assert_eq!(stress_category("nO"), StressCategory::No);
        assert_eq!(stress_category("depends"), StressCategory::Depends);
        assert_eq!(stress_category("Depends"), StressCategory::Depends);
    }

    #[test]
    fn unexpected_stress_text_is_depends() {
        assert_eq!(stress_category(""), StressCategory::Depends);
        assert_eq!(stress_category("sometimes"), StressCategory::Depends);
        assert_eq!(stress_category(" yes"), StressCategory::Depends);
    }

    #[test]
    fn normalize_keeps_original_fields() {
        let record = SurveyRecord::new(
            "Test U",
            "Undecided",
            "Dorm",
            "Chemistry",
            "1-2 hours",
            "YES",
        );
        let normalized = normalize(&record);
        assert_eq!(normalized.record, record);
        assert_eq!(normalized.study_hours_midpoint, 1.5);
        assert_eq!(normalized.stress_category, StressCategory::Yes);
    }

    proptest! {
        #[test]
        fn normalization_is_total(hours in ".*", stress in ".*") {
            let record = SurveyRecord::new("c", "m", "l", "s", &hours, &stress);
            let normalized = normalize(&record);
            prop_assert!([0.0, 1.5, 3.5, 5.5].contains(&normalized.study_hours_midpoint));
            prop_assert!(StressCategory::ALL.contains(&normalized.stress_category));
        }
    }
}
