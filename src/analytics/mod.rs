pub mod aggregator;
pub mod classifier;
pub mod resampler;
pub mod series;
pub mod thresholds;

pub use classifier::classify;
pub use resampler::{resample, window};
pub use series::tier_series;
pub use thresholds::ThresholdSet;
