//! Frequency-style aggregations: symptom ranking, pain-location regions,
//! and medication effectiveness.
//!
//! All three fold the working set into `Vec`-backed accumulators keyed in
//! first-seen order, so descending stable sorts preserve encounter order on
//! ties and re-running over the same input is bit-identical.

use crate::models::{BodyView, Log, MedicationEffect};

use super::stats::round1;
use super::types::{MedicationEffectiveness, Region, Region::*, RegionShare, SymptomFrequency};

const TOP_SYMPTOMS: usize = 10;

const MUCUS_LABEL: &str = "Mucus in stool";
const BLOOD_LABEL: &str = "Blood in stool";

fn bump(entries: &mut Vec<(String, u32)>, key: String) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some((_, count)) => *count += 1,
        None => entries.push((key, 1)),
    }
}

/// Top-10 symptom ranking. Pain types count under their raw string; other
/// symptoms are display-normalized (hyphens to spaces); mucus/blood flags
/// count under fixed labels.
pub fn symptom_frequency(logs: &[Log]) -> SymptomFrequency {
    let mut entries: Vec<(String, u32)> = Vec::new();

    for log in logs {
        for pain_type in &log.pain.types {
            bump(&mut entries, pain_type.clone());
        }
        for symptom in &log.other_symptoms.symptoms {
            bump(&mut entries, symptom.replace('-', " "));
        }
        if log.bowel_movements.mucus {
            bump(&mut entries, MUCUS_LABEL.to_string());
        }
        if log.bowel_movements.blood {
            bump(&mut entries, BLOOD_LABEL.to_string());
        }
    }

    // Stable sort keeps first-seen order on equal counts.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(TOP_SYMPTOMS);

    let mut freq = SymptomFrequency::default();
    for (label, count) in entries {
        freq.labels.push(label);
        freq.counts.push(count);
    }
    freq
}

/// Buckets every pain point across the working set into the 8 reporting
/// regions and renders counts as a share of the log count.
///
/// Bands and sides are independent axes: a front-view point increments
/// exactly one vertical band, and additionally one side bucket when it sits
/// left of 40 or right of 60. The double counting is intentional: the
/// report shows band rows and side rows together.
pub fn region_breakdown(logs: &[Log]) -> Vec<RegionShare> {
    let mut counters: Vec<(Region, u32)> = [
        HeadNeck, UpperAbdomen, LowerAbdomen, Pelvis,
        LeftSide, RightSide, BackUpper, BackLower,
    ]
    .into_iter()
    .map(|r| (r, 0))
    .collect();

    let mut add = |region: Region| {
        for (r, count) in counters.iter_mut() {
            if *r == region {
                *count += 1;
            }
        }
    };

    for log in logs {
        for point in &log.pain.locations {
            match point.view {
                BodyView::Front => {
                    add(if point.y < 20.0 {
                        HeadNeck
                    } else if point.y < 40.0 {
                        UpperAbdomen
                    } else if point.y < 60.0 {
                        LowerAbdomen
                    } else {
                        Pelvis
                    });
                    if point.x < 40.0 {
                        add(LeftSide);
                    } else if point.x > 60.0 {
                        add(RightSide);
                    }
                }
                BodyView::Back => {
                    add(if point.y < 50.0 { BackUpper } else { BackLower });
                }
            }
        }
    }

    let total_logs = logs.len();
    let mut shares: Vec<RegionShare> = counters
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(region, count)| RegionShare {
            region,
            count,
            percent: round1(count as f64 / total_logs as f64 * 100.0),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// Per-medication effect counters keyed by exact, case-sensitive name.
/// Blank names are skipped; blank or unrecognized effects count only toward
/// `total`.
pub fn medication_effectiveness(logs: &[Log]) -> Vec<MedicationEffectiveness> {
    let mut meds: Vec<MedicationEffectiveness> = Vec::new();

    for log in logs {
        for dose in &log.medications {
            if dose.name.is_empty() {
                continue;
            }
            let entry = match meds.iter_mut().find(|m| m.name == dose.name) {
                Some(entry) => entry,
                None => {
                    meds.push(MedicationEffectiveness {
                        name: dose.name.clone(),
                        helpful: 0,
                        not_helpful: 0,
                        worsened: 0,
                        total: 0,
                    });
                    meds.last_mut().unwrap()
                }
            };
            entry.total += 1;
            match dose.effect.parse::<MedicationEffect>() {
                Ok(MedicationEffect::Helpful) => entry.helpful += 1,
                Ok(MedicationEffect::NotHelpful) => entry.not_helpful += 1,
                Ok(MedicationEffect::Worsened) => entry.worsened += 1,
                Err(_) => {}
            }
        }
    }

    meds
}
