use serde::{Serialize, Serializer};

use crate::bucket::{bucketize, Intensity};
use crate::models::{BucketStats, SurveyRecord};
use crate::normalize::normalize_all;
use crate::stats::aggregate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSummary {
    #[serde(skip)]
    pub intensity: Intensity,
    pub label: &'static str,
    pub range: &'static str,
    pub students: usize,
    #[serde(flatten)]
    pub stats: BucketStats,
}

impl BucketSummary {
    fn new(intensity: Intensity, stats: BucketStats) -> Self {
        Self {
            intensity,
            label: intensity.label(),
            range: intensity.range(),
            students: stats.total,
            stats,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultSummary {
    pub low_study: BucketSummary,
    pub medium_study: BucketSummary,
    pub high_study: BucketSummary,
    pub overall: BucketStats,
}

impl ResultSummary {
    pub fn bucket(&self, intensity: Intensity) -> &BucketSummary {
        match intensity {
            Intensity::Low => &self.low_study,
            Intensity::Medium => &self.medium_study,
            Intensity::High => &self.high_study,
        }
    }

    /// Low, Medium, High in that order.
    pub fn buckets(&self) -> impl Iterator<Item = &BucketSummary> {
        Intensity::ALL.into_iter().map(move |i| self.bucket(i))
    }

    /// Bucket size as a percentage of all respondents.
    pub fn share_of_total(&self, intensity: Intensity) -> f64 {
        if self.overall.total == 0 {
            return 0.0;
        }
        self.bucket(intensity).stats.total as f64 / self.overall.total as f64 * 100.0
    }

    /// Non-empty buckets from most to least financially stressed.
    pub fn stress_ranking(&self) -> Vec<&BucketSummary> {
        let mut ranked: Vec<&BucketSummary> =
            self.buckets().filter(|b| b.stats.has_data()).collect();
        ranked.sort_by(|a, b| {
            b.stats
                .stressed_pct
                .partial_cmp(&a.stats.stressed_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}

impl Serialize for ResultSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Overall<'a> {
            total_students: usize,
            #[serde(flatten)]
            stats: &'a BucketStats,
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct View<'a> {
            low_study: &'a BucketSummary,
            medium_study: &'a BucketSummary,
            high_study: &'a BucketSummary,
            overall: Overall<'a>,
        }

        View {
            low_study: &self.low_study,
            medium_study: &self.medium_study,
            high_study: &self.high_study,
            overall: Overall {
                total_students: self.overall.total,
                stats: &self.overall,
            },
        }
        .serialize(serializer)
    }
}

/// Run the whole pipeline over `records`.
pub fn summarize(records: &[SurveyRecord]) -> ResultSummary {
    let normalized = normalize_all(records);
    let buckets = bucketize(&normalized);

    let summary = ResultSummary {
        low_study: BucketSummary::new(Intensity::Low, aggregate(&buckets.low)),
        medium_study: BucketSummary::new(Intensity::Medium, aggregate(&buckets.medium)),
        high_study: BucketSummary::new(Intensity::High, aggregate(&buckets.high)),
        overall: aggregate(&normalized),
    };

    log::debug!(
        "Summarized {} respondents, {:.1}% stressed overall",
        summary.overall.total,
        summary.overall.stressed_pct
    );
    summary
}
