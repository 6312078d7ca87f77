//! Tier classification for the reserved podium places
//!
//! A tier is the qualification bucket a score falls into when compared
//! against the three minimum-score thresholds: eligible for 1st, for
//! 2nd, for 3rd, or for no reserved place at all. Tiers drive the
//! cascade in [`crate::ranking::placement`]: an unclaimed reserved place
//! collapses forward instead of leaving a gap in the numbering.

use crate::core::Thresholds;
use serde::{Deserialize, Serialize};

/// Qualification bucket for a single score.
///
/// Ordered best-first: `First < Second < Third < Unranked`. For a fixed
/// threshold triple the tier is monotone in the score: a lower score
/// can never land in a better tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualificationTier {
    /// Score meets the first-place minimum; eligible for place 1.
    First,

    /// Score meets the second-place minimum but not the first; eligible
    /// for place 2.
    Second,

    /// Score meets the third-place minimum but not the second; eligible
    /// for place 3.
    Third,

    /// Score meets no threshold; only the open places past the podium.
    Unranked,
}

impl QualificationTier {
    /// Slot index used by the placement pass: 0 for `First` through 3
    /// for `Unranked`.
    pub fn slot_index(&self) -> u32 {
        match self {
            QualificationTier::First => 0,
            QualificationTier::Second => 1,
            QualificationTier::Third => 2,
            QualificationTier::Unranked => 3,
        }
    }

    /// The reserved place this tier is eligible for, if any.
    pub fn reserved_place(&self) -> Option<u32> {
        match self {
            QualificationTier::Unranked => None,
            tier => Some(tier.slot_index() + 1),
        }
    }

    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            QualificationTier::First => "first-place qualifier",
            QualificationTier::Second => "second-place qualifier",
            QualificationTier::Third => "third-place qualifier",
            QualificationTier::Unranked => "unranked",
        }
    }
}

/// Classify a score into its qualification tier.
///
/// Checks the most-qualifying tier first, so each comparison needs only
/// the lower bound; the upper bound is implied by the earlier non-match.
pub fn classify_tier(score: u32, thresholds: &Thresholds) -> QualificationTier {
    if score >= thresholds.first_place_min_score {
        return QualificationTier::First;
    }

    if score >= thresholds.second_place_min_score {
        return QualificationTier::Second;
    }

    if score >= thresholds.third_place_min_score {
        return QualificationTier::Third;
    }

    QualificationTier::Unranked
}
