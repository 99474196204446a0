use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::bucket::Intensity;
use crate::models::StressCategory;
use crate::summary::{BucketSummary, ResultSummary};

pub fn render_summary(summary: &ResultSummary) -> String {
    let mut output = String::new();
    let overall = &summary.overall;

    if !overall.has_data() {
        let _ = writeln!(output, "No survey responses available.");
        return output;
    }

    let _ = writeln!(output, "{} students surveyed", overall.total);
    let _ = writeln!(
        output,
        "Average study time: {:.1} hours daily",
        overall.average_study_hours
    );
    let _ = writeln!(
        output,
        "Financial stress affects {:.0}% of students",
        overall.stressed_pct
    );
    let _ = writeln!(output);

    for bucket in summary.buckets() {
        if bucket.stats.has_data() {
            let _ = writeln!(
                output,
                "- {} ({}): {} students, {:.1}h avg, {:.0}% stressed",
                bucket.label,
                bucket.range,
                bucket.students,
                bucket.stats.average_study_hours,
                bucket.stats.stressed_pct
            );
        } else {
            let _ = writeln!(output, "- {} ({}): no data", bucket.label, bucket.range);
        }
    }

    output
}

/// Detail view for a single bucket.
pub fn render_panel(bucket: &BucketSummary) -> String {
    let mut output = String::new();
    let stats = &bucket.stats;

    let _ = writeln!(output, "Financial Stress Analytics");
    let _ = writeln!(output, "{} - {}", bucket.label, bucket.range);
    let _ = writeln!(output);
    let _ = writeln!(output, "{} students surveyed", bucket.students);

    if !stats.has_data() {
        let _ = writeln!(output, "No data available for this group.");
        return output;
    }

    let _ = writeln!(output);
    for (title, category) in [
        ("High Stress", StressCategory::Yes),
        ("Depends", StressCategory::Depends),
        ("Low Stress", StressCategory::No),
    ] {
        let _ = writeln!(
            output,
            "  {:<12} {:>4.0}%  ({} students)",
            title,
            stats.percentage(category),
            stats.respondents(category)
        );
    }
    if let Some(level) = stats.stress_level() {
        let _ = writeln!(output, "  Overall: {}", level.label());
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Study Pattern Analysis");
    let _ = writeln!(
        output,
        "  Average study time: {:.1} hours daily",
        stats.average_study_hours
    );
    let _ = writeln!(output, "  Study range: {}", bucket.range);
    let _ = writeln!(
        output,
        "  Total stress response: {:.0}%",
        stats.total_stress_response()
    );

    if let Some(insight) = stats.key_insight() {
        let _ = writeln!(output);
        let _ = writeln!(output, "Key Insight: {}", insight.message());
    }

    output
}

pub fn build_report(summary: &ResultSummary, generated_at: DateTime<Utc>) -> String {
    let mut output = String::new();
    let overall = &summary.overall;

    let _ = writeln!(output, "# Study Hours & Financial Stress Report");
    let _ = writeln!(
        output,
        "Generated {}",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Overview");

    if !overall.has_data() {
        let _ = writeln!(output, "No survey responses recorded.");
        return output;
    }

    let _ = writeln!(output, "- Students surveyed: {}", overall.total);
    let _ = writeln!(
        output,
        "- Average study time: {:.1} hours daily",
        overall.average_study_hours
    );
    let _ = writeln!(
        output,
        "- Financially stressed: {:.0}% (depends {:.0}%, not stressed {:.0}%)",
        overall.stressed_pct, overall.depends_pct, overall.not_stressed_pct
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Sample Distribution");
    for intensity in Intensity::ALL {
        let bucket = summary.bucket(intensity);
        let _ = writeln!(
            output,
            "- {}: {} students ({:.1}%)",
            bucket.label,
            bucket.students,
            summary.share_of_total(intensity)
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Stress Ranking");
    for (rank, bucket) in summary.stress_ranking().iter().enumerate() {
        let _ = writeln!(
            output,
            "{}. {} ({}): {:.0}% stressed",
            rank + 1,
            bucket.label,
            bucket.range,
            bucket.stats.stressed_pct
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Breakdown by Study Intensity");
    for bucket in summary.buckets() {
        let _ = writeln!(output);
        let _ = writeln!(output, "### {} ({})", bucket.label, bucket.range);
        if !bucket.stats.has_data() {
            let _ = writeln!(output, "No data available.");
            continue;
        }
        let _ = writeln!(
            output,
            "- Students: {} (avg {:.1}h)",
            bucket.students, bucket.stats.average_study_hours
        );
        for category in StressCategory::ALL {
            let _ = writeln!(
                output,
                "- {}: {:.1}% ({} students)",
                category.as_str(),
                bucket.stats.percentage(category),
                bucket.stats.respondents(category)
            );
        }
        let _ = writeln!(
            output,
            "- Total stress response: {:.0}%",
            bucket.stats.total_stress_response()
        );
        if let Some(level) = bucket.stats.stress_level() {
            let _ = writeln!(output, "- Stress level: {}", level.label());
        }
        if let Some(insight) = bucket.stats.key_insight() {
            let _ = writeln!(output, "- Key insight: {}", insight.message());
        }
    }

    output
}

pub fn to_json(summary: &ResultSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
