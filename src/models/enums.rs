use crate::db::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(TimeOfDay {
    Morning => "morning",
    Afternoon => "afternoon",
    Evening => "evening",
});

impl TimeOfDay {
    /// Lenient parse used at the analytics boundary: anything the capture
    /// layer did not recognize falls back to morning, matching the form's
    /// own default.
    pub fn from_raw(s: &str) -> Self {
        s.parse().unwrap_or(Self::Morning)
    }
}

str_enum!(BodyView {
    Front => "front",
    Back => "back",
});

impl Default for BodyView {
    fn default() -> Self {
        Self::Front
    }
}

str_enum!(MedicationEffect {
    Helpful => "helpful",
    NotHelpful => "not-helpful",
    Worsened => "worsened",
});
