pub mod placement;
pub mod tiers;
pub mod verify;

pub use placement::{assign_places, cascade_offset, rank_by_score};
pub use tiers::{classify_tier, QualificationTier};
pub use verify::placements_match;
