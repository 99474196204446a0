use serde::{Deserialize, Serialize};

/// One survey response, exactly as collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub college: String,
    pub major: String,
    pub study_location: String,
    pub subject: String,
    #[serde(rename = "studyHours")]
    pub study_hours_raw: String,
    #[serde(rename = "financialStress")]
    pub financial_stress_raw: String,
}

impl SurveyRecord {
    pub fn new(
        college: &str,
        major: &str,
        study_location: &str,
        subject: &str,
        study_hours: &str,
        financial_stress: &str,
    ) -> Self {
        Self {
            college: college.to_string(),
            major: major.to_string(),
            study_location: study_location.to_string(),
            subject: subject.to_string(),
            study_hours_raw: study_hours.to_string(),
            financial_stress_raw: financial_stress.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressCategory {
    Yes,
    No,
    Depends,
}

impl StressCategory {
    pub const ALL: [StressCategory; 3] = [Self::Yes, Self::No, Self::Depends];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Depends => "Depends",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    #[serde(flatten)]
    pub record: SurveyRecord,
    pub study_hours_midpoint: f64,
    pub stress_category: StressCategory,
}

/// Aggregate figures for one group of respondents.
///
/// An empty group carries zeros in every field; check [`BucketStats::has_data`]
/// before presenting the percentages as a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketStats {
    pub total: usize,
    #[serde(rename = "stressed")]
    pub stressed_pct: f64,
    #[serde(rename = "notStressed")]
    pub not_stressed_pct: f64,
    #[serde(rename = "depends")]
    pub depends_pct: f64,
    pub average_study_hours: f64,
}

impl BucketStats {
    pub const EMPTY: BucketStats = BucketStats {
        total: 0,
        stressed_pct: 0.0,
        not_stressed_pct: 0.0,
        depends_pct: 0.0,
        average_study_hours: 0.0,
    };

    pub fn has_data(&self) -> bool {
        self.total > 0
    }

    pub fn percentage(&self, category: StressCategory) -> f64 {
        match category {
            StressCategory::Yes => self.stressed_pct,
            StressCategory::No => self.not_stressed_pct,
            StressCategory::Depends => self.depends_pct,
        }
    }

    /// Whole number of respondents behind a category percentage.
    pub fn respondents(&self, category: StressCategory) -> usize {
        (self.percentage(category) / 100.0 * self.total as f64).round() as usize
    }

    /// Share of respondents who did not answer a flat no.
    pub fn total_stress_response(&self) -> f64 {
        self.stressed_pct + self.depends_pct
    }

    /// `None` for an empty group.
    pub fn stress_level(&self) -> Option<StressLevel> {
        self.has_data().then(|| StressLevel::from_stressed_pct(self.stressed_pct))
    }

    /// `None` for an empty group.
    pub fn key_insight(&self) -> Option<Insight> {
        if !self.has_data() {
            return None;
        }
        let insight = if self.stressed_pct > 30.0 {
            Insight::HighStress
        } else if self.depends_pct > 40.0 {
            Insight::MixedStress
        } else {
            Insight::LowStress
        };
        Some(insight)
    }
}

/// Tier of a group's stressed percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    /// `<= 25` is Low, `(25, 75]` is Moderate, everything else is High.
    pub fn from_stressed_pct(stressed_pct: f64) -> Self {
        if stressed_pct <= 25.0 {
            Self::Low
        } else if stressed_pct <= 75.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Stress",
            Self::Moderate => "Moderate Stress",
            Self::High => "High Stress",
        }
    }

    /// How much of a figure to fill when drawing this tier.
    pub fn fill_percentage(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Moderate => 50,
            Self::High => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Insight {
    HighStress,
    MixedStress,
    LowStress,
}

impl Insight {
    pub fn message(&self) -> &'static str {
        match self {
            Self::HighStress => {
                "High financial stress levels indicate potential impact on academic performance."
            }
            Self::MixedStress => "Mixed stress responses suggest situational financial concerns.",
            Self::LowStress => "Low financial stress levels may support better academic focus.",
        }
    }
}
