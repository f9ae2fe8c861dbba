//! Risk quadrant classification of the soft x hard plane.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Boundary between "low" and "high" on both 0-100 axes.
pub const DEFAULT_QUADRANT_THRESHOLD: f64 = 60.0;

/// One of the four named risk quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Soft high, hard high.
    Healthy,
    /// Soft low, hard high: revenue is up but people are leaving.
    FragileGrowth,
    /// Soft high, hard low: good culture, weak compliance and revenue.
    ChronicallyUnderfunded,
    /// Soft low, hard low.
    NearCollapse,
}

/// Static presentation data attached to a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuadrantProfile {
    pub description: &'static str,
    /// Hex color used for the quadrant card and plot region.
    pub color: &'static str,
    pub recommendation: &'static str,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Healthy,
        Quadrant::FragileGrowth,
        Quadrant::ChronicallyUnderfunded,
        Quadrant::NearCollapse,
    ];

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Quadrant::Healthy => "healthy",
            Quadrant::FragileGrowth => "fragile growth",
            Quadrant::ChronicallyUnderfunded => "chronically underfunded",
            Quadrant::NearCollapse => "near collapse",
        }
    }

    /// Returns the description/color/recommendation triple.
    pub fn profile(&self) -> QuadrantProfile {
        match self {
            Quadrant::Healthy => QuadrantProfile {
                description: "Both the organization and compliance are at a high level. Keep improving to grow further.",
                color: "#38A169",
                recommendation: "Maintain the current state and consider investing in the next stage.",
            },
            Quadrant::FragileGrowth => QuadrantProfile {
                description: "Revenue is rising, but people are at risk of leaving.",
                color: "#ECC94B",
                recommendation: "Strengthening organizational management is urgent. Watch for mass resignations.",
            },
            Quadrant::ChronicallyUnderfunded => QuadrantProfile {
                description: "The people are good, but earnings are weak and records are at risk of gaps.",
                color: "#ED8936",
                recommendation: "Prioritize claiming billing add-ons and putting record keeping in order.",
            },
            Quadrant::NearCollapse => QuadrantProfile {
                description: "Critical on both the organizational and the compliance side. Immediate intervention is needed.",
                color: "#E53E3E",
                recommendation: "Consulting a specialist is strongly recommended. Improve in order of priority.",
            },
        }
    }

    /// Returns true if the soft axis is on the high side.
    pub fn is_soft_high(&self) -> bool {
        matches!(self, Quadrant::Healthy | Quadrant::ChronicallyUnderfunded)
    }

    /// Returns true if the hard axis is on the high side.
    pub fn is_hard_high(&self) -> bool {
        matches!(self, Quadrant::Healthy | Quadrant::FragileGrowth)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
