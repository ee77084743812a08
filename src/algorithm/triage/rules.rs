//! Decision table mapping severity counts to a tier
//!
//! Rows are evaluated top to bottom and the first match wins. A single
//! urgent finding reaches both the second and third rows; only the order
//! decides which one applies, so the rows must not be reordered.

use super::severity::SeverityCounts;
use crate::models::triage::Tier;

/// Pick the tier for a set of counts
#[must_use]
pub const fn decide_tier(counts: &SeverityCounts) -> Tier {
    if counts.critical > 0 {
        Tier::Immediate
    } else if counts.urgent >= 2 || (counts.urgent == 1 && counts.non_urgent >= 2) {
        Tier::Priority
    } else if counts.urgent == 1 || counts.non_urgent >= 2 {
        Tier::Preferred
    } else {
        Tier::Normal
    }
}
