use serde::Serialize;

use crate::models::NormalizedRecord;

/// Study-intensity group a respondent falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Self::Low, Self::Medium, Self::High];

    /// `<= 2` is Low, `(2, 4]` is Medium, everything else is High.
    pub fn classify(midpoint: f64) -> Self {
        if midpoint <= 2.0 {
            Self::Low
        } else if midpoint <= 4.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Light Studiers",
            Self::Medium => "Moderate Studiers",
            Self::High => "Intense Studiers",
        }
    }

    pub fn range(&self) -> &'static str {
        match self {
            Self::Low => "1-2 hours",
            Self::Medium => "3-4 hours",
            Self::High => "5+ hours",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    pub low: Vec<NormalizedRecord>,
    pub medium: Vec<NormalizedRecord>,
    pub high: Vec<NormalizedRecord>,
}

impl Buckets {
    pub fn members(&self, intensity: Intensity) -> &[NormalizedRecord] {
        match intensity {
            Intensity::Low => &self.low,
            Intensity::Medium => &self.medium,
            Intensity::High => &self.high,
        }
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.medium.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split records into the three intensity groups, keeping input order
/// within each group.
pub fn bucketize(records: &[NormalizedRecord]) -> Buckets {
    let mut buckets = Buckets::default();

    for record in records {
        let target = match Intensity::classify(record.study_hours_midpoint) {
            Intensity::Low => &mut buckets.low,
            Intensity::Medium => &mut buckets.medium,
            Intensity::High => &mut buckets.high,
        };
        target.push(record.clone());
    }

    log::debug!(
        "Bucketed {} records: low {}, medium {}, high {}",
        records.len(),
        buckets.low.len(),
        buckets.medium.len(),
        buckets.high.len()
    );
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StressCategory, SurveyRecord};
    use proptest::prelude::*;

    fn sample_record(subject: &str, midpoint: f64) -> NormalizedRecord {
        NormalizedRecord {
            record: SurveyRecord::new("Test U", "Math", "Dorm", subject, "", "no"),
            study_hours_midpoint: midpoint,
            stress_category: StressCategory::No,
        }
    }

    #[test]
    fn boundaries_are_inclusive_on_the_upper_end() {
        assert_eq!(Intensity::classify(0.0), Intensity::Low);
        assert_eq!(Intensity::classify(1.5), Intensity::Low);
        assert_eq!(Intensity::classify(2.0), Intensity::Low);
        assert_eq!(Intensity::classify(2.01), Intensity::Medium);
        assert_eq!(Intensity::classify(4.0), Intensity::Medium);
        assert_eq!(Intensity::classify(4.5), Intensity::High);
        assert_eq!(Intensity::classify(5.5), Intensity::High);
    }

    #[test]
    fn negative_midpoints_are_low() {
        assert_eq!(Intensity::classify(-3.0), Intensity::Low);
    }

    #[test]
    fn bucketize_preserves_order_within_groups() {
        let records = vec![
            sample_record("a", 3.5),
            sample_record("b", 1.5),
            sample_record("c", 3.5),
            sample_record("d", 5.5),
            sample_record("e", 0.0),
        ];
        let buckets = bucketize(&records);

        let subjects = |group: &[NormalizedRecord]| {
            group
                .iter()
                .map(|r| r.record.subject.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(subjects(&buckets.low), vec!["b", "e"]);
        assert_eq!(subjects(&buckets.medium), vec!["a", "c"]);
        assert_eq!(subjects(&buckets.high), vec!["d"]);
    }

    #[test]
    fn labels_and_ranges_match_groups() {
        assert_eq!(Intensity::Low.label(), "Light Studiers");
        assert_eq!(Intensity::Medium.range(), "3-4 hours");
        assert_eq!(Intensity::High.label(), "Intense Studiers");
    }

    proptest! {
        #[test]
        fn every_record_lands_in_exactly_one_bucket(
            midpoints in prop::collection::vec(-10.0f64..20.0, 0..60)
        ) {
            let records: Vec<NormalizedRecord> = midpoints
                .iter()
                .enumerate()
                .map(|(i, m)| sample_record(&i.to_string(), *m))
                .collect();
            let buckets = bucketize(&records);

            prop_assert_eq!(buckets.len(), records.len());
            let mut seen: Vec<String> = Intensity::ALL
                .iter()
                .flat_map(|i| buckets.members(*i).iter().map(|r| r.record.subject.clone()))
                .collect();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), records.len());
        }
    }
}
