pub mod indicators;
pub mod scores;
pub mod signals;
pub mod thresholds;
