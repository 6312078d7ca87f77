//! Common type definitions used across the crate
//!
//! The serde field names are camelCase so the JSON shape matches the
//! leaderboard payloads an embedding service already exchanges:
//! `{"userId": "id1", "score": 3}` in, `{"userId": "id1", "place": 4}`
//! out, and `{"firstPlaceMinScore": 100, ...}` for the thresholds.

use serde::{Deserialize, Serialize};

/// Largest roster the contract admits per invocation.
pub const MAX_ROSTER_SIZE: usize = 100;

/// Number of leading places gated by a minimum-score threshold.
pub const RESERVED_PLACES: u32 = 3;

/// A competition participant together with the score they earned.
///
/// Identifiers are opaque and unique within a roster; scores are positive
/// integers and distinct across the roster (the surrounding business
/// logic guarantees no ties).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredUser {
    pub user_id: String,
    pub score: u32,
}

impl ScoredUser {
    pub fn new(user_id: impl Into<String>, score: u32) -> Self {
        Self {
            user_id: user_id.into(),
            score,
        }
    }
}

/// A participant with their final assigned place.
///
/// Places are 1-based; smaller is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedUser {
    pub user_id: String,
    pub place: u32,
}

impl PlacedUser {
    pub fn new(user_id: impl Into<String>, place: u32) -> Self {
        Self {
            user_id: user_id.into(),
            place,
        }
    }
}

/// Minimum scores required to claim each of the three reserved places.
///
/// The domain contract guarantees a strictly descending triple:
/// `first_place_min_score > second_place_min_score >
/// third_place_min_score > 0`. The triple is supplied once per
/// invocation and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub first_place_min_score: u32,
    pub second_place_min_score: u32,
    pub third_place_min_score: u32,
}

impl Thresholds {
    pub fn new(first: u32, second: u32, third: u32) -> Self {
        Self {
            first_place_min_score: first,
            second_place_min_score: second,
            third_place_min_score: third,
        }
    }

    /// Minimum score for a reserved slot index (0, 1 or 2).
    ///
    /// Returns `None` for slot 3, the open field below the podium.
    pub fn minimum_for_slot(&self, slot_index: u32) -> Option<u32> {
        match slot_index {
            0 => Some(self.first_place_min_score),
            1 => Some(self.second_place_min_score),
            2 => Some(self.third_place_min_score),
            _ => None,
        }
    }
}
