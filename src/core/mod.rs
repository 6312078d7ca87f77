pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{PlacedUser, ScoredUser, Thresholds, MAX_ROSTER_SIZE, RESERVED_PLACES};
