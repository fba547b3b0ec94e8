//! Time-series builders for the pain and bowel trend charts.
//!
//! Both builders sort a borrowed view of the working set ascending by date
//! (lexicographic ISO order, stable on ties) without touching the caller's
//! ordering, and keep duplicate dates as separate points.

use chrono::NaiveDate;

use crate::models::Log;

use super::types::{BowelTrendSeries, PainTrendSeries};

/// Human "Mar 2" rendering of an ISO date; malformed dates fall back to the
/// raw string.
pub fn date_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%b %-d").to_string(),
        Err(_) => date.to_string(),
    }
}

fn by_date(logs: &[Log]) -> Vec<&Log> {
    let mut ordered: Vec<&Log> = logs.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));
    ordered
}

pub fn build_pain_series(logs: &[Log]) -> PainTrendSeries {
    let mut series = PainTrendSeries::default();
    for log in by_date(logs) {
        series.labels.push(date_label(&log.date));
        series.values.push(log.clamped_pain());
        series.dates.push(log.date.clone());
    }
    series
}

pub fn build_bowel_series(logs: &[Log]) -> BowelTrendSeries {
    let mut series = BowelTrendSeries::default();
    for log in by_date(logs) {
        series.labels.push(date_label(&log.date));
        series.counts.push(log.bowel_movements.count);
        series.has_blood.push(log.bowel_movements.blood as u8);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(date: &str, level: u8, bm_count: u32, blood: bool) -> Log {
        let mut l = Log {
            date: date.into(),
            ..Default::default()
        };
        l.pain.level = level;
        l.bowel_movements.count = bm_count;
        l.bowel_movements.blood = blood;
        l
    }

    #[test]
    fn empty_set_yields_empty_series() {
        assert_eq!(build_pain_series(&[]), PainTrendSeries::default());
        assert_eq!(build_bowel_series(&[]), BowelTrendSeries::default());
    }

    #[test]
    fn pain_series_sorts_ascending_without_mutating_input() {
        let logs = vec![
            log("2025-03-05", 7, 0, false),
            log("2025-03-01", 2, 0, false),
            log("2025-03-03", 4, 0, false),
        ];
        let series = build_pain_series(&logs);
        assert_eq!(series.dates, vec!["2025-03-01", "2025-03-03", "2025-03-05"]);
        assert_eq!(series.values, vec![2, 4, 7]);
        assert_eq!(series.labels, vec!["Mar 1", "Mar 3", "Mar 5"]);
        // Caller's ordering untouched.
        assert_eq!(logs[0].date, "2025-03-05");
    }

    #[test]
    fn duplicate_dates_stay_separate_in_input_order() {
        let logs = vec![
            log("2025-03-02", 3, 0, false),
            log("2025-03-02", 6, 0, false),
        ];
        let series = build_pain_series(&logs);
        assert_eq!(series.values, vec![3, 6]);
    }

    #[test]
    fn bowel_series_flags_blood_as_one() {
        let logs = vec![
            log("2025-03-02", 0, 3, true),
            log("2025-03-01", 0, 1, false),
        ];
        let series = build_bowel_series(&logs);
        assert_eq!(series.counts, vec![1, 3]);
        assert_eq!(series.has_blood, vec![0, 1]);
    }

    #[test]
    fn malformed_date_label_falls_back_to_raw() {
        assert_eq!(date_label("not-a-date"), "not-a-date");
        assert_eq!(date_label("2025-03-09"), "Mar 9");
    }
}
