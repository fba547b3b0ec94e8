//! Pattern-insight rule engine.
//!
//! Five independent rules evaluated in a fixed order; a rule that finds
//! nothing emits nothing, and an empty working set yields an empty list the
//! view layer renders as "not enough data". The output is heuristic
//! commentary over aggregates, never clinical inference.

use crate::models::{Log, TimeOfDay};

use super::aggregates::medication_effectiveness;
use super::stats::compute_basic_stats;
use super::types::{Insight, InsightKind};

/// How far a food category's mean pain must sit from the overall average
/// before it is worth mentioning.
const FOOD_DELTA: f64 = 1.0;

/// Categories mentioned fewer times than this are too thin to report on.
const FOOD_MIN_OCCURRENCES: usize = 2;

/// Medications logged fewer times than this are skipped.
const MED_MIN_DOSES: u32 = 2;

fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as u32).sum::<u32>() as f64 / values.len() as f64
}

fn insight(icon: &str, text: String, kind: InsightKind) -> Insight {
    Insight {
        icon: icon.into(),
        text,
        kind,
    }
}

/// Runs all rules over the working set, in emission order: time-of-day pain,
/// food correlation, medication patterns, blood flag, fever flag.
pub fn generate_insights(logs: &[Log]) -> Vec<Insight> {
    let mut insights = Vec::new();
    if logs.is_empty() {
        return insights;
    }

    time_of_day_rule(logs, &mut insights);
    food_correlation_rule(logs, &mut insights);
    medication_rule(logs, &mut insights);
    blood_flag_rule(logs, &mut insights);
    fever_flag_rule(logs, &mut insights);

    tracing::debug!(count = insights.len(), "generated insights");
    insights
}

/// Buckets pain levels by time of day (unrecognized values collect into the
/// morning bucket, same fallback as the capture form) and reports the bucket
/// with the strictly highest non-zero mean.
fn time_of_day_rule(logs: &[Log], out: &mut Vec<Insight>) {
    let buckets = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];
    let mut levels: [Vec<u8>; 3] = [Vec::new(), Vec::new(), Vec::new()];

    for log in logs {
        let idx = buckets
            .iter()
            .position(|b| *b == log.time_of_day_bucket())
            .unwrap_or(0);
        levels[idx].push(log.clamped_pain());
    }

    let mut worst: Option<(TimeOfDay, f64)> = None;
    for (bucket, values) in buckets.iter().zip(levels.iter()) {
        if values.is_empty() {
            continue;
        }
        let avg = mean(values);
        if worst.map_or(true, |(_, best)| avg > best) {
            worst = Some((*bucket, avg));
        }
    }

    if let Some((bucket, avg)) = worst {
        if avg > 0.0 {
            out.push(insight(
                "schedule",
                format!(
                    "Pain tends to be highest in the {}, averaging {avg:.1}/10.",
                    bucket.as_str()
                ),
                InsightKind::Info,
            ));
        }
    }
}

/// Compares per-food-category mean pain against the overall average. The
/// worst and best categories are reported independently; both can fire in
/// the same pass.
fn food_correlation_rule(logs: &[Log], out: &mut Vec<Insight>) {
    let mut categories: Vec<(String, Vec<u8>)> = Vec::new();
    for log in logs {
        for category in &log.eating.categories {
            match categories.iter_mut().find(|(c, _)| c == category) {
                Some((_, levels)) => levels.push(log.clamped_pain()),
                None => categories.push((category.clone(), vec![log.clamped_pain()])),
            }
        }
    }

    let scored: Vec<(&str, f64)> = categories
        .iter()
        .filter(|(_, levels)| levels.len() >= FOOD_MIN_OCCURRENCES)
        .map(|(category, levels)| (category.as_str(), mean(levels)))
        .collect();
    if scored.is_empty() {
        return;
    }

    let overall = compute_basic_stats(logs).avg_pain;

    let mut worst = scored[0];
    let mut best = scored[0];
    for &entry in &scored[1..] {
        if entry.1 > worst.1 {
            worst = entry;
        }
        if entry.1 < best.1 {
            best = entry;
        }
    }

    if worst.1 > overall + FOOD_DELTA {
        out.push(insight(
            "restaurant",
            format!(
                "Pain averages {:.1}/10 on days with {}, above your overall average of {overall:.1}.",
                worst.1, worst.0
            ),
            InsightKind::Warning,
        ));
    }
    if best.1 < overall - FOOD_DELTA && best.1 < 4.0 {
        out.push(insight(
            "restaurant",
            format!(
                "Pain stays low ({:.1}/10) on days with {}.",
                best.1, best.0
            ),
            InsightKind::Success,
        ));
    }
}

/// Reports medications that clearly help (with a rounded helpful rate) or
/// that were ever followed by worsening symptoms.
fn medication_rule(logs: &[Log], out: &mut Vec<Insight>) {
    for med in medication_effectiveness(logs) {
        if med.total < MED_MIN_DOSES {
            continue;
        }
        if med.helpful > med.not_helpful + med.worsened {
            let rate = (med.helpful as f64 / med.total as f64 * 100.0).round() as u32;
            out.push(insight(
                "medication",
                format!("{} helped {rate}% of the times you logged it.", med.name),
                InsightKind::Success,
            ));
        } else if med.worsened > 0 {
            out.push(insight(
                "medication",
                format!(
                    "{} was followed by worsened symptoms {} time(s).",
                    med.name, med.worsened
                ),
                InsightKind::Warning,
            ));
        }
    }
}

fn blood_flag_rule(logs: &[Log], out: &mut Vec<Insight>) {
    let count = logs.iter().filter(|l| l.bowel_movements.blood).count();
    if count > 0 {
        out.push(insight(
            "water_drop",
            format!("Blood present in {count} log(s). Worth discussing with your doctor."),
            InsightKind::Error,
        ));
    }
}

fn fever_flag_rule(logs: &[Log], out: &mut Vec<Insight>) {
    let count = logs.iter().filter(|l| l.has_fever_chills()).count();
    if count > 0 {
        out.push(insight(
            "thermostat",
            format!("Fever or chills reported in {count} log(s)."),
            InsightKind::Error,
        ));
    }
}
