//! Scoring module - pure computations over answers and a catalog.
//!
//! # Components
//!
//! - `Scorer` - composite soft/hard indices and category averages
//! - `Classifier` - 2x2 risk quadrant and executive/manager gaps
//! - `CategoryStatus` - good / caution / needs improvement per category
//!
//! Nothing in here performs I/O or logs; the application layer does both.

mod category_status;
mod classifier;
mod gap;
mod quadrant;
mod scorer;

pub use category_status::CategoryStatus;
pub use classifier::Classifier;
pub use gap::{
    GapDirection, GapLevel, GapRecord, GapReport, HIGH_GAP_THRESHOLD, LARGE_GAP_THRESHOLD,
    MODERATE_GAP_THRESHOLD,
};
pub use quadrant::{Quadrant, QuadrantProfile, DEFAULT_QUADRANT_THRESHOLD};
pub use scorer::{CategoryAverage, CategoryAverages, ScoreResult, Scorer};
