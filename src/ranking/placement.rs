//! Place assignment with cascade tracking for unclaimed podium places
//!
//! The roster moves through pure stages: rank by score descending,
//! classify every score into its qualification tier, then run a single
//! forward pass that carries the previous place as its only state. A
//! reserved place nobody qualifies for collapses forward, so the next
//! real place follows the previous one directly; a user whose tier
//! sits below the running numbering jumps ahead to the earliest place
//! the tier allows.

use crate::core::{PlacedUser, ScoredUser, Thresholds, RESERVED_PLACES};

use super::tiers::classify_tier;

/// Sorts the roster by score in descending order (pure).
///
/// Returns borrowed entries; the input slice is never mutated. Scores
/// are distinct by contract, so the ordering is a strict total order
/// with no ties to break.
pub fn rank_by_score(users: &[ScoredUser]) -> Vec<&ScoredUser> {
    let mut ordered: Vec<&ScoredUser> = users.iter().collect();
    ordered.sort_by(|a, b| b.score.cmp(&a.score));
    ordered
}

/// Offset that closes the gap between the running numbering and a
/// user's reserved slot (pure).
///
/// Before any user is placed the offset is the slot index itself: a
/// user eligible only for 3rd place must start at place 3 even though
/// places 1 and 2 go unclaimed. Afterwards the offset catches the
/// numbering up whenever the previous place is still above the slot,
/// and is zero once the numbering has advanced past it. Tiers are
/// monotone along the descending pass, so the offset only ever moves
/// the numbering forward.
pub fn cascade_offset(previous_place: Option<u32>, slot_index: u32) -> u32 {
    match previous_place {
        None => slot_index,
        Some(place) if place < slot_index => slot_index - place,
        Some(_) => 0,
    }
}

/// Assign final places to every user in the roster.
///
/// Places 1-3 are only awarded to users meeting the corresponding
/// minimum score from `thresholds`; reserved places nobody claims
/// cascade away so the numbering keeps no unjustified gaps. The output
/// is produced in descending-score order, but only the
/// (identifier, place) mapping is meaningful to callers.
///
/// Inputs are trusted per the domain contract (1-100 users, distinct
/// identifiers, distinct positive scores, strictly descending
/// thresholds); the guard layer in [`crate::validation`] exists for
/// callers who want the contract enforced.
///
/// # Arguments
///
/// * `users` - The roster, in any order
/// * `thresholds` - Minimum scores for the three reserved places
///
/// # Returns
///
/// One [`PlacedUser`] per input user, identifiers preserved exactly.
///
/// # Examples
///
/// ```rust
/// use podium::{assign_places, ScoredUser, Thresholds};
///
/// let roster = vec![ScoredUser::new("id1", 55)];
/// let thresholds = Thresholds::new(100, 50, 10);
///
/// let placed = assign_places(&roster, &thresholds);
/// // Place 1 goes unclaimed, so the lone second-tier qualifier starts at 2.
/// assert_eq!(placed[0].place, 2);
/// ```
pub fn assign_places(users: &[ScoredUser], thresholds: &Thresholds) -> Vec<PlacedUser> {
    let mut placed = Vec::with_capacity(users.len());
    let mut previous_place: Option<u32> = None;

    for (rank_index, user) in rank_by_score(users).into_iter().enumerate() {
        let slot_index = classify_tier(user.score, thresholds).slot_index();
        let offset = cascade_offset(previous_place, slot_index);
        let base = match previous_place {
            Some(place) => place + 1,
            None => rank_index as u32 + 1,
        };

        let place = base + offset;
        previous_place = Some(place);
        placed.push(PlacedUser::new(user.user_id.clone(), place));
    }

    log::debug!(
        "Assigned places for {} users, podium claims: {}",
        placed.len(),
        placed
            .iter()
            .filter(|user| user.place <= RESERVED_PLACES)
            .count()
    );

    placed
}
