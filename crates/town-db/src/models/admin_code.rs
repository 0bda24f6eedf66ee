//! Admin code database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for the admin_codes table
#[derive(Debug, Clone, FromRow)]
pub struct AdminCodeModel {
    pub code: String,
    pub valid_date: NaiveDate,
}
