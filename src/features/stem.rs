use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative thickness of a plant's stem, as chosen on the input form.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StemQuality {
    Thin,
    #[default]
    Medium,
    Thick,
}

impl StemQuality {
    /// Every category, in ordinal order.
    pub const ALL: [StemQuality; 3] = [StemQuality::Thin, StemQuality::Medium, StemQuality::Thick];

    /// The ordinal code used as the third feature.
    pub const fn code(self) -> u8 {
        match self {
            StemQuality::Thin => 0,
            StemQuality::Medium => 1,
            StemQuality::Thick => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StemQuality::Thin => "thin",
            StemQuality::Medium => "medium",
            StemQuality::Thick => "thick",
        }
    }
}

impl fmt::Display for StemQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StemQuality {
    type Err = InputError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thin" => Ok(StemQuality::Thin),
            "medium" => Ok(StemQuality::Medium),
            "thick" => Ok(StemQuality::Thick),
            _ => Err(InputError::UnknownStemQuality(s.to_string())),
        }
    }
}

impl TryFrom<String> for StemQuality {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
