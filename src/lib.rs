//! Study-hours vs. financial-stress survey analytics.
//!
//! Survey answers flow through four pure stages:
//!
//! ```text
//! SurveyRecord → normalize → bucketize → aggregate → ResultSummary
//! ```
//!
//! [`summarize`] runs the whole pipeline; [`report`] turns the result into
//! text, markdown or JSON for display.

pub mod bucket;
pub mod dataset;
pub mod error;
pub mod models;
pub mod normalize;
pub mod report;
pub mod stats;
pub mod summary;

pub use bucket::{bucketize, Buckets, Intensity};
pub use error::DatasetError;
pub use models::{
    BucketStats, Insight, NormalizedRecord, StressCategory, StressLevel, SurveyRecord,
};
pub use normalize::normalize;
pub use stats::aggregate;
pub use summary::{summarize, BucketSummary, ResultSummary};
