pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod labels;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{Result, ScreenError};
