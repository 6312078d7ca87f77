//! Order-independent comparison against golden placements

use crate::core::PlacedUser;

/// Check a computed placement against an expected one, ignoring order.
///
/// True iff both collections have the same length and every expected
/// identifier appears in `answer` with exactly the expected place.
/// Identifiers are unique by contract, so length equality plus
/// per-identifier lookup amounts to full equality of the mappings.
pub fn placements_match(answer: &[PlacedUser], expected: &[PlacedUser]) -> bool {
    if answer.len() != expected.len() {
        return false;
    }

    expected.iter().all(|want| {
        answer
            .iter()
            .any(|got| got.user_id == want.user_id && got.place == want.place)
    })
}
