// Export modules for library usage
pub mod core;
pub mod ranking;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Error, PlacedUser, Result, ScoredUser, Thresholds, MAX_ROSTER_SIZE, RESERVED_PLACES,
};

pub use crate::ranking::{
    placement::assign_places,
    tiers::{classify_tier, QualificationTier},
    verify::placements_match,
};

pub use crate::validation::{checked_assign_places, validate_roster, validate_thresholds};
