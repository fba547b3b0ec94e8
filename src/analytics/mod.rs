//! Analytics engine over an in-memory working set of diary logs.
//!
//! Every function here is a pure, synchronous transformation of `&[Log]`:
//! no I/O, no shared state, and re-running over the same input yields
//! structurally identical output. Callers fetch and date-filter the working
//! set through the repository, then hand the engine a plain slice; the
//! outputs are plain data for the chart and widget layers.

pub mod aggregates;
pub mod insights;
pub mod series;
pub mod stats;
pub mod types;

pub use aggregates::{medication_effectiveness, region_breakdown, symptom_frequency};
pub use insights::generate_insights;
pub use series::{build_bowel_series, build_pain_series, date_label};
pub use stats::{classify_pain_trend, compute_basic_stats};
pub use types::*;

use crate::models::Log;

/// Assembles every aggregation the history view needs in one call.
pub fn build_report(logs: &[Log]) -> AnalyticsReport {
    AnalyticsReport {
        stats: compute_basic_stats(logs),
        pain_series: build_pain_series(logs),
        bowel_series: build_bowel_series(logs),
        symptom_frequency: symptom_frequency(logs),
        regions: region_breakdown(logs),
        medications: medication_effectiveness(logs),
        insights: generate_insights(logs),
    }
}
