use serde::{Deserialize, Serialize};

/// Summary numbers for the stats widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub total_logs: usize,
    /// Mean of clamped pain levels, rounded to 1 decimal; 0.0 when empty.
    pub avg_pain: f64,
    /// Logs with pain level >= 7.
    pub high_pain_days: usize,
    /// Logs with blood present or fever/chills reported, once per log.
    pub red_flags: usize,
    pub pain_trend: PainTrend,
}

/// Half-over-half classification of the pain series. Undetermined below
/// four logs; serialized as the empty string so the view layer can show a
/// neutral placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PainTrend {
    #[serde(rename = "")]
    Undetermined,
    Worsening,
    Improving,
    Stable,
}

impl PainTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undetermined => "",
            Self::Worsening => "Worsening",
            Self::Improving => "Improving",
            Self::Stable => "Stable",
        }
    }
}

/// Pain-over-time chart data: parallel arrays, one entry per log, ascending
/// by date with duplicate dates kept as separate points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PainTrendSeries {
    pub labels: Vec<String>,
    pub values: Vec<u8>,
    pub dates: Vec<String>,
}

/// Bowel-movement chart data, same ordering rule as the pain series.
/// `has_blood` is 1/0 so it can overlay the count bars directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowelTrendSeries {
    pub labels: Vec<String>,
    pub counts: Vec<u32>,
    pub has_blood: Vec<u8>,
}

/// Top-10 symptom ranking as parallel label/count arrays, non-increasing by
/// count with first-seen order on ties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomFrequency {
    pub labels: Vec<String>,
    pub counts: Vec<u32>,
}

/// The 8 reporting zones for pain points. Bands and sides are separate axes:
/// a front-view point lands in exactly one band and may additionally land in
/// one side bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    HeadNeck,
    UpperAbdomen,
    LowerAbdomen,
    Pelvis,
    LeftSide,
    RightSide,
    BackUpper,
    BackLower,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeadNeck => "Head/Neck",
            Self::UpperAbdomen => "Upper Abdomen",
            Self::LowerAbdomen => "Lower Abdomen",
            Self::Pelvis => "Pelvis",
            Self::LeftSide => "Left Side",
            Self::RightSide => "Right Side",
            Self::BackUpper => "Back Upper",
            Self::BackLower => "Back Lower",
        }
    }
}

/// One region's share of the working set. The percentage denominator is the
/// log count, not the point count, so values can exceed 100 when a log
/// contributes several points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShare {
    pub region: Region,
    pub count: u32,
    pub percent: f64,
}

/// Per-medication effect counters, keyed by exact name, first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationEffectiveness {
    pub name: String,
    pub helpful: u32,
    pub not_helpful: u32,
    pub worsened: u32,
    /// Every dose counts here, including blank/unrecognized effects.
    pub total: u32,
}

/// Sentiment of a pattern insight, used by the view layer for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Success,
    Warning,
    Error,
    Info,
}

/// A short heuristic statement derived from the working set. Statistical
/// commentary only, never clinical inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Material symbol name the view layer renders next to the text.
    pub icon: String,
    pub text: String,
    pub kind: InsightKind,
}

/// Everything the history view needs, assembled in a single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub stats: BasicStats,
    pub pain_series: PainTrendSeries,
    pub bowel_series: BowelTrendSeries,
    pub symptom_frequency: SymptomFrequency,
    pub regions: Vec<RegionShare>,
    pub medications: Vec<MedicationEffectiveness>,
    pub insights: Vec<Insight>,
}
