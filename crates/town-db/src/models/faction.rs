//! Faction database models

use sqlx::FromRow;

/// Database model for the factions table
#[derive(Debug, Clone, FromRow)]
pub struct FactionModel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    pub faction_type: String,
    pub color: Option<String>,
    pub general_user_id: Option<i32>,
}

/// Faction row joined with its general's username
#[derive(Debug, Clone, FromRow)]
pub struct FactionWithGeneralModel {
    #[sqlx(flatten)]
    pub faction: FactionModel,
    pub general_name: Option<String>,
}
