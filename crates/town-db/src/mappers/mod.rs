//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions that turn database rows into domain
//! objects, filling store defaults where a nullable column came back empty.

mod faction;
mod forum;
mod role;
mod user;

pub use faction::parse_faction_type;
pub use user::profile_from_parts;

use town_core::AdminCode;

use crate::models::AdminCodeModel;

/// Convert AdminCodeModel to AdminCode entity
impl From<AdminCodeModel> for AdminCode {
    fn from(model: AdminCodeModel) -> Self {
        AdminCode {
            code: model.code,
            valid_date: model.valid_date,
        }
    }
}
