//! Forum post categories
//!
//! Categories are free text chosen by the author. Posts created without one
//! land in the general section, stored under its Russian name.

/// Category assigned when the author does not pick one ("general")
pub const DEFAULT_POST_CATEGORY: &str = "общее";
