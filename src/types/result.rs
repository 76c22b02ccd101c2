//! Result record produced by a successful computation

use serde::{Deserialize, Serialize};
use chrono::{DateTime, FixedOffset, Local, Utc};
use crate::types::Variant;
use crate::{BAND_MARGINAL_ABOVE, BAND_STABLE_ABOVE, TIMESTAMP_FORMAT};

/// Immutable output of one computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Which screen produced it
    pub variant: Variant,
    /// Energy absorption / luminous output / energy output (MW)
    pub output_magnitude: f64,
    /// Stability (harmony) index, clamped to [1, 10]
    pub stability_index: f64,
    /// iterations * duration per iteration
    pub duration_seconds: f64,
    /// Capture time of the computation
    pub timestamp: DateTime<Utc>,
    /// Fixed-format rendering of every input parameter
    pub parameters_snapshot: String,
}

impl ResultRecord {
    /// Color band of the stability index
    pub fn stability_band(&self) -> StabilityBand {
        StabilityBand::of(self.stability_index)
    }

    /// Timestamp as shown in share text and metric rows
    pub fn formatted_timestamp(&self, zone: DisplayZone) -> String {
        zone.format(&self.timestamp)
    }
}

/// Zone the stored UTC timestamp is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The machine's local zone
    #[default]
    Local,
    Utc,
    Offset(FixedOffset),
}

impl DisplayZone {
    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        match self {
            DisplayZone::Local => timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
            DisplayZone::Utc => timestamp.format(TIMESTAMP_FORMAT).to_string(),
            DisplayZone::Offset(offset) => timestamp.with_timezone(offset).format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Three-way classification of the stability index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StabilityBand {
    /// index > 7
    Stable,
    /// 4 < index <= 7
    Marginal,
    /// index <= 4
    Unstable,
}

impl StabilityBand {
    pub fn of(index: f64) -> Self {
        if index > BAND_STABLE_ABOVE {
            StabilityBand::Stable
        } else if index > BAND_MARGINAL_ABOVE {
            StabilityBand::Marginal
        } else {
            StabilityBand::Unstable
        }
    }
}

impl std::fmt::Display for StabilityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StabilityBand::Stable => "STABLE",
            StabilityBand::Marginal => "MARGINAL",
            StabilityBand::Unstable => "UNSTABLE",
        };
        write!(f, "{}", name)
    }
}
