//! Value objects - immutable types that represent domain concepts

mod category;
mod faction_type;

pub use category::DEFAULT_POST_CATEGORY;
pub use faction_type::{FactionType, FactionTypeParseError};
