pub mod predictions;

pub use predictions::{load_predictions_file, parse_predictions};
