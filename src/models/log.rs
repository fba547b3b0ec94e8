//! Log record types: one structured symptom-diary entry per record.
//!
//! Every field carries a serde default so a sparse raw record (older app
//! versions omitted whole sections) deserializes into a fully-populated
//! struct. The analytics layer can then assume presence instead of guarding
//! every nested access.

use serde::{Deserialize, Deserializer, Serialize};

use super::enums::{BodyView, TimeOfDay};

pub const MAX_PAIN_LEVEL: u8 = 10;

/// Symptom key the capture form uses for fever/chills; checked by red-flag
/// counting and the fever insight rule.
pub const FEVER_CHILLS: &str = "fever-chills";

/// A stored diary entry. Immutable once fetched; owned by the repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Log {
    pub id: String,
    /// ISO `YYYY-MM-DD`. Kept as a string so lexicographic ordering is the
    /// chronological ordering and malformed dates degrade gracefully.
    pub date: String,
    /// Optional `HH:MM:SS`; empty means midnight for sort purposes.
    pub time: String,
    /// Raw capture value; bucket with [`TimeOfDay::from_raw`].
    pub time_of_day: String,
    pub pain: Pain,
    pub bowel_movements: BowelMovements,
    pub eating: Eating,
    pub other_symptoms: OtherSymptoms,
    pub medications: Vec<MedicationDose>,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Log {
    /// Pain level clamped to the 0–10 domain. The capture layer already
    /// clamps, but records constructed elsewhere are tolerated.
    pub fn clamped_pain(&self) -> u8 {
        self.pain.level.min(MAX_PAIN_LEVEL)
    }

    pub fn has_fever_chills(&self) -> bool {
        self.other_symptoms
            .symptoms
            .iter()
            .any(|s| s == FEVER_CHILLS)
    }

    /// A log counts as a red flag when blood is present or fever/chills was
    /// reported. Counted once per log even if both hold.
    pub fn is_red_flag(&self) -> bool {
        self.bowel_movements.blood || self.has_fever_chills()
    }

    pub fn time_of_day_bucket(&self) -> TimeOfDay {
        TimeOfDay::from_raw(&self.time_of_day)
    }

    /// Time-of-day used for chronological sorting; missing time = midnight.
    pub fn sort_time(&self) -> &str {
        if self.time.is_empty() {
            "00:00:00"
        } else {
            &self.time
        }
    }
}

/// Pain section: level, user-marked body locations, and free-form lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pain {
    pub locations: Vec<PainPoint>,
    #[serde(deserialize_with = "de_clamped_level")]
    pub level: u8,
    pub types: Vec<String>,
    pub description: String,
    pub triggers: Vec<String>,
    pub relief: Vec<String>,
}

/// A user-marked coordinate on the body silhouette, as percentages of the
/// diagram. Points are never deduplicated across logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainPoint {
    pub x: f64,
    pub y: f64,
    pub view: BodyView,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BowelMovements {
    pub count: u32,
    pub consistency: String,
    pub color: String,
    pub mucus: bool,
    pub blood: bool,
    pub painful: bool,
    pub gas_passage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Eating {
    pub meals: String,
    pub categories: Vec<String>,
    pub fluids: String,
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherSymptoms {
    pub symptoms: Vec<String>,
    pub urinary_details: String,
    pub gynecologic_details: String,
}

/// One medication dose within a log. `effect` is the raw capture value
/// (`""`, `helpful`, `not-helpful`, `worsened`); unrecognized values only
/// count toward totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicationDose {
    pub name: String,
    pub dose: String,
    pub time: String,
    pub effect: String,
}

/// Entry as submitted by the capture form, minus the fields the
/// repository assigns on save (id, timestamps).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogDraft {
    pub date: String,
    pub time: String,
    pub time_of_day: String,
    pub pain: Pain,
    pub bowel_movements: BowelMovements,
    pub eating: Eating,
    pub other_symptoms: OtherSymptoms,
    pub medications: Vec<MedicationDose>,
    pub notes: String,
}

/// Accepts any numeric pain level and clamps it into 0–10 at the
/// deserialization boundary.
fn de_clamped_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.clamp(0.0, MAX_PAIN_LEVEL as f64) as u8)
}
