//! Faction entity <- model mapper

use town_core::{Faction, FactionType, FactionWithGeneral};

use crate::models::{FactionModel, FactionWithGeneralModel};

/// Convert the stored faction type label to FactionType
///
/// Unknown labels are listed with open factions.
pub fn parse_faction_type(label: &str) -> FactionType {
    label.trim().parse().unwrap_or(FactionType::Open)
}

/// Convert FactionModel to Faction entity
impl From<FactionModel> for Faction {
    fn from(model: FactionModel) -> Self {
        Faction {
            id: model.id,
            name: model.name,
            description: model.description,
            kind: parse_faction_type(&model.faction_type),
            color: model.color.unwrap_or_else(|| "#FFFFFF".to_string()),
            general_user_id: model.general_user_id,
        }
    }
}

/// Convert FactionWithGeneralModel to FactionWithGeneral
impl From<FactionWithGeneralModel> for FactionWithGeneral {
    fn from(model: FactionWithGeneralModel) -> Self {
        FactionWithGeneral {
            faction: Faction::from(model.faction),
            general_name: model.general_name,
        }
    }
}
