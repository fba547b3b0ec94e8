//! Basic statistics and the half-over-half pain trend classification.

use crate::models::Log;

use super::types::{BasicStats, PainTrend};

/// Difference in half-means that counts as a real shift rather than noise.
const TREND_THRESHOLD: f64 = 0.5;

/// Fewest logs for which a half-over-half comparison is meaningful.
const TREND_MIN_LOGS: usize = 4;

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean_pain(logs: &[Log]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    let sum: u32 = logs.iter().map(|l| l.clamped_pain() as u32).sum();
    sum as f64 / logs.len() as f64
}

/// Summary numbers over the working set. Pure; an empty set yields zeroes
/// and an undetermined trend.
pub fn compute_basic_stats(logs: &[Log]) -> BasicStats {
    let total_logs = logs.len();
    let avg_pain = if total_logs == 0 {
        0.0
    } else {
        round1(mean_pain(logs))
    };

    BasicStats {
        total_logs,
        avg_pain,
        high_pain_days: logs.iter().filter(|l| l.clamped_pain() >= 7).count(),
        red_flags: logs.iter().filter(|l| l.is_red_flag()).count(),
        pain_trend: classify_pain_trend(logs),
    }
}

/// Splits the working set into first/second halves **in input order** and
/// compares their mean pain. Callers wanting a chronological trend must sort
/// by date before calling; the split itself imposes no ordering.
pub fn classify_pain_trend(logs: &[Log]) -> PainTrend {
    if logs.len() < TREND_MIN_LOGS {
        return PainTrend::Undetermined;
    }
    let mid = logs.len() / 2;
    let diff = mean_pain(&logs[mid..]) - mean_pain(&logs[..mid]);
    if diff > TREND_THRESHOLD {
        PainTrend::Worsening
    } else if diff < -TREND_THRESHOLD {
        PainTrend::Improving
    } else {
        PainTrend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FEVER_CHILLS;

    fn log(date: &str, level: u8) -> Log {
        let mut l = Log {
            date: date.into(),
            ..Default::default()
        };
        l.pain.level = level;
        l
    }

    #[test]
    fn empty_set_is_all_zeroes() {
        let stats = compute_basic_stats(&[]);
        assert_eq!(stats.total_logs, 0);
        assert_eq!(stats.avg_pain, 0.0);
        assert_eq!(stats.high_pain_days, 0);
        assert_eq!(stats.red_flags, 0);
        assert_eq!(stats.pain_trend, PainTrend::Undetermined);
    }

    #[test]
    fn avg_pain_rounds_to_one_decimal() {
        let logs = vec![log("2025-03-01", 2), log("2025-03-02", 8)];
        let stats = compute_basic_stats(&logs);
        assert_eq!(stats.avg_pain, 5.0);
        // Two records: trend stays undetermined.
        assert_eq!(stats.pain_trend, PainTrend::Undetermined);

        let logs = vec![log("2025-03-01", 1), log("2025-03-02", 1), log("2025-03-03", 2)];
        assert_eq!(compute_basic_stats(&logs).avg_pain, 1.3);
    }

    #[test]
    fn avg_pain_stays_in_domain_with_wild_levels() {
        let mut l = log("2025-03-01", 0);
        l.pain.level = 200; // constructed directly, bypassing the capture clamp
        let stats = compute_basic_stats(&[l]);
        assert!(stats.avg_pain >= 0.0 && stats.avg_pain <= 10.0);
        assert_eq!(stats.avg_pain, 10.0);
    }

    #[test]
    fn high_pain_days_threshold_is_seven() {
        let logs = vec![log("2025-03-01", 6), log("2025-03-02", 7), log("2025-03-03", 9)];
        assert_eq!(compute_basic_stats(&logs).high_pain_days, 2);
    }

    #[test]
    fn red_flags_count_once_per_log() {
        let mut both = log("2025-03-01", 3);
        both.bowel_movements.blood = true;
        both.other_symptoms.symptoms.push(FEVER_CHILLS.into());

        let mut fever_only = log("2025-03-02", 1);
        fever_only.other_symptoms.symptoms.push(FEVER_CHILLS.into());

        let stats = compute_basic_stats(&[both, fever_only, log("2025-03-03", 0)]);
        assert_eq!(stats.red_flags, 2);
    }

    #[test]
    fn trend_worsening_on_rising_halves() {
        // First half mean 2, second half mean 8, diff 6.
        let logs = vec![
            log("2025-03-01", 2),
            log("2025-03-02", 2),
            log("2025-03-03", 8),
            log("2025-03-04", 8),
        ];
        assert_eq!(classify_pain_trend(&logs), PainTrend::Worsening);
    }

    #[test]
    fn trend_improving_on_falling_halves() {
        let logs = vec![
            log("2025-03-01", 8),
            log("2025-03-02", 7),
            log("2025-03-03", 2),
            log("2025-03-04", 1),
        ];
        assert_eq!(classify_pain_trend(&logs), PainTrend::Improving);
    }

    #[test]
    fn trend_stable_within_threshold() {
        let logs = vec![
            log("2025-03-01", 4),
            log("2025-03-02", 4),
            log("2025-03-03", 4),
            log("2025-03-04", 4),
        ];
        assert_eq!(classify_pain_trend(&logs), PainTrend::Stable);
    }

    #[test]
    fn trend_odd_count_puts_extra_log_in_second_half() {
        // floor(5/2) = 2 in the first half, 3 in the second.
        let logs = vec![
            log("2025-03-01", 0),
            log("2025-03-02", 0),
            log("2025-03-03", 2),
            log("2025-03-04", 2),
            log("2025-03-05", 2),
        ];
        assert_eq!(classify_pain_trend(&logs), PainTrend::Worsening);
    }

    #[test]
    fn trend_depends_on_input_order() {
        // The halves follow input order, not dates. The same four logs in a
        // different order classify differently; chronological callers must
        // sort first.
        let rising = vec![
            log("2025-03-01", 1),
            log("2025-03-02", 1),
            log("2025-03-03", 8),
            log("2025-03-04", 8),
        ];
        let shuffled = vec![
            rising[2].clone(),
            rising[3].clone(),
            rising[0].clone(),
            rising[1].clone(),
        ];
        assert_eq!(classify_pain_trend(&rising), PainTrend::Worsening);
        assert_eq!(classify_pain_trend(&shuffled), PainTrend::Improving);
    }

    #[test]
    fn stats_are_deterministic() {
        let logs = vec![log("2025-03-01", 2), log("2025-03-02", 8)];
        assert_eq!(compute_basic_stats(&logs), compute_basic_stats(&logs));
    }
}
