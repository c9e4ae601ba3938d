pub mod frequency;
pub mod record;
pub mod thresholds;
pub mod verdict;

pub use frequency::FrequencyRow;
pub use record::{PredictionRecord, PredictionsPayload, UNKNOWN_LABEL, ground_truth_label};
pub use thresholds::{POSITIVE_MIN_PRECURSORS, ThresholdMode, VerdictThresholds};
pub use verdict::Verdict;
