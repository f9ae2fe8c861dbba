//! Fixed recommendation text for low categories and gap levels.

use serde::Serialize;

use crate::domain::scoring::GapLevel;

/// Advice shown for a category without a dedicated entry.
pub const FALLBACK_CATEGORY_ADVICE: &str = "Consult a specialist.";

/// Message shown when no category averages below 3.
pub const ALL_CATEGORIES_MEET_STANDARD: &str =
    "Every category meets the standard. Keep improving continuously.";

/// Warning shown when executive and manager land in different quadrants.
pub const PERCEPTION_MISMATCH_WARNING: &str =
    "This difference in perception can be an early sign of organizational breakdown.";

/// Returns the improvement advice for a category average below 3.
pub fn category_advice(category: &str) -> &'static str {
    match category {
        "retention" => {
            "Hold regular one-on-one meetings and consider introducing an anonymous staff survey."
        }
        "training" => {
            "Put a new-hire program (OJT checklist) in place and run training for managers."
        }
        "mission" => {
            "Hold regular sessions on the mission statement and tie it into daily work."
        }
        "staffing-ratio" => {
            "Calculate full-time equivalents every month and plan staffing so the ratio never falls below the standard."
        }
        "records" => {
            "Schedule updates of individual support plans and make same-day record keeping the rule."
        }
        "safety" => {
            "Set up an abuse-prevention committee and run BCP drills as the top priority."
        }
        _ => FALLBACK_CATEGORY_ADVICE,
    }
}

/// Fixed guidance for one gap level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapAdvice {
    pub title: &'static str,
    pub summary: &'static str,
    /// Risks that may surface if the gap is left alone. Empty below `Large`.
    pub risks: Vec<&'static str>,
    /// Recommended actions, in priority order.
    pub actions: Vec<&'static str>,
}

impl GapAdvice {
    pub fn for_level(level: GapLevel) -> Self {
        match level {
            GapLevel::Large => Self {
                title: "Urgent action required",
                summary: "There is a large perception gap between the executive and the manager. \
                          Left alone, the following risks may materialize.",
                risks: vec![
                    "Mass resignations as frustration builds on site",
                    "Unexpected findings during on-site regulatory inspections",
                    "Whistleblowing or labor disputes",
                ],
                actions: vec![
                    "Share this diagnosis between executive and manager and align your perceptions",
                    "Check the actual situation on site for the items with the largest gaps",
                    "Schedule regular one-on-one meetings to strengthen communication",
                ],
            },
            GapLevel::Moderate => Self {
                title: "Attention needed",
                summary: "Perceptions differ on some items. Acting early keeps them from \
                          growing into larger problems.",
                risks: Vec::new(),
                actions: vec![
                    "Confirm both sides' view of the items with a gap",
                    "Review how information is shared",
                    "Set up regular opportunities to look back together",
                ],
            },
            GapLevel::Small => Self {
                title: "In good shape",
                summary: "The executive's and the manager's perceptions broadly agree. Keep \
                          valuing communication to maintain this state.",
                risks: Vec::new(),
                actions: vec![
                    "Continue the current good communication",
                    "Run this diagnosis regularly to catch changes early",
                ],
            },
        }
    }
}
