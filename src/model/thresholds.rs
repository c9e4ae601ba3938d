use clap::ValueEnum;
use serde::Serialize;

/// Smallest precursor count that confirms AML under the strict profile.
pub const POSITIVE_MIN_PRECURSORS: u64 = 20;

/// Positive boundary used by the earlier revision (strictly above 20).
pub const LEGACY_POSITIVE_MIN_PRECURSORS: u64 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictThresholds {
    /// `precursor_count >= positive_min` is POSITIVE; any nonzero count below
    /// it is BORDERLINE.
    pub positive_min: u64,
    pub mode: ThresholdMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMode {
    Strict,
    Legacy,
}

impl ThresholdMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThresholdMode::Strict => "strict",
            ThresholdMode::Legacy => "legacy",
        }
    }
}

impl VerdictThresholds {
    pub fn strict_v2() -> Self {
        Self {
            positive_min: POSITIVE_MIN_PRECURSORS,
            mode: ThresholdMode::Strict,
        }
    }

    pub fn legacy_v1() -> Self {
        let mut base = Self::strict_v2();
        base.positive_min = LEGACY_POSITIVE_MIN_PRECURSORS;
        base.mode = ThresholdMode::Legacy;
        base
    }

    pub fn for_mode(mode: ThresholdMode) -> Self {
        match mode {
            ThresholdMode::Strict => Self::strict_v2(),
            ThresholdMode::Legacy => Self::legacy_v1(),
        }
    }
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self::strict_v2()
    }
}
