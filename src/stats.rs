use crate::models::{BucketStats, NormalizedRecord, StressCategory};

/// Stress distribution and mean study hours for a group.
///
/// An empty group yields [`BucketStats::EMPTY`] rather than NaN.
pub fn aggregate(members: &[NormalizedRecord]) -> BucketStats {
    let total = members.len();
    if total == 0 {
        return BucketStats::EMPTY;
    }

    let (mut stressed, mut not_stressed, mut depends) = (0usize, 0usize, 0usize);
    let mut hours = 0.0;
    for member in members {
        match member.stress_category {
            StressCategory::Yes => stressed += 1,
            StressCategory::No => not_stressed += 1,
            StressCategory::Depends => depends += 1,
        }
        hours += member.study_hours_midpoint;
    }

    let percent = |count: usize| count as f64 / total as f64 * 100.0;

    BucketStats {
        total,
        stressed_pct: percent(stressed),
        not_stressed_pct: percent(not_stressed),
        depends_pct: percent(depends),
        average_study_hours: hours / total as f64,
    }
}
