//! Contract checks for rosters and thresholds
//!
//! The placement core trusts its inputs, since the domain contract
//! guarantees them; validation lives here as a separate caller-boundary
//! concern. Embedding services that cannot vouch for the contract call
//! [`checked_assign_places`]; everyone else calls
//! [`crate::ranking::placement::assign_places`] directly.

use std::collections::HashSet;

use crate::core::{Error, PlacedUser, Result, ScoredUser, Thresholds, MAX_ROSTER_SIZE};
use crate::ranking::placement::assign_places;

/// Validate the threshold triple: strictly descending, all positive.
pub fn validate_thresholds(thresholds: &Thresholds) -> Result<()> {
    if thresholds.third_place_min_score == 0 {
        return Err(Error::ZeroThreshold);
    }

    let descending = thresholds.first_place_min_score > thresholds.second_place_min_score
        && thresholds.second_place_min_score > thresholds.third_place_min_score;
    if !descending {
        return Err(Error::ThresholdsNotDescending {
            first: thresholds.first_place_min_score,
            second: thresholds.second_place_min_score,
            third: thresholds.third_place_min_score,
        });
    }

    Ok(())
}

/// Validate the roster: size within contract bounds, identifiers
/// unique, scores positive and all distinct.
pub fn validate_roster(users: &[ScoredUser]) -> Result<()> {
    if users.is_empty() {
        return Err(Error::EmptyRoster);
    }
    if users.len() > MAX_ROSTER_SIZE {
        return Err(Error::RosterTooLarge { count: users.len() });
    }

    let mut seen_ids = HashSet::with_capacity(users.len());
    let mut seen_scores = HashSet::with_capacity(users.len());
    for user in users {
        if user.score == 0 {
            return Err(Error::ZeroScore {
                user_id: user.user_id.clone(),
            });
        }
        if !seen_ids.insert(user.user_id.as_str()) {
            return Err(Error::DuplicateUserId {
                user_id: user.user_id.clone(),
            });
        }
        if !seen_scores.insert(user.score) {
            return Err(Error::TiedScores { score: user.score });
        }
    }

    Ok(())
}

/// Guarded entry point: enforce the contract, then assign places.
pub fn checked_assign_places(
    users: &[ScoredUser],
    thresholds: &Thresholds,
) -> Result<Vec<PlacedUser>> {
    validate_roster(users)?;
    validate_thresholds(thresholds)?;
    Ok(assign_places(users, thresholds))
}
