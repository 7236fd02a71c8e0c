use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubType {
    Driver,
    Wood,
    Hybrid,
    Iron,
    Wedge,
    Putter,
}

/// A club descriptor attached to a tee or approach shot.
///
/// No statistic depends on which club was used; the descriptor is carried
/// through so stored rounds keep what the player entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Club {
    pub name: String,
    pub club_type: ClubType,
}

impl Club {
    pub fn new(club_type: ClubType, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            club_type,
        }
    }

    /// Predefined bag offered for quick selection.
    pub fn all_clubs() -> Vec<Club> {
        const BAG: &[(ClubType, &str)] = &[
            (ClubType::Driver, "Driver"),
            (ClubType::Wood, "3 Wood"),
            (ClubType::Wood, "5 Wood"),
            (ClubType::Hybrid, "3 Hybrid"),
            (ClubType::Hybrid, "4 Hybrid"),
            (ClubType::Iron, "4 Iron"),
            (ClubType::Iron, "5 Iron"),
            (ClubType::Iron, "6 Iron"),
            (ClubType::Iron, "7 Iron"),
            (ClubType::Iron, "8 Iron"),
            (ClubType::Iron, "9 Iron"),
            (ClubType::Wedge, "PW"), // Pitching
            (ClubType::Wedge, "GW"), // Gap
            (ClubType::Wedge, "SW"), // Sand
            (ClubType::Wedge, "LW"), // Lob
            (ClubType::Putter, "Putter"),
        ];

        BAG.iter()
            .map(|&(club_type, name)| Club::new(club_type, name))
            .collect()
    }

    pub fn find(name: &str) -> Option<Club> {
        Self::all_clubs().into_iter().find(|c| c.name == name)
    }

    /// Abbreviation used in compact hole summaries ("3W", "7i", "PW").
    pub fn short_name(&self) -> String {
        match self.club_type {
            ClubType::Driver => "Dr".to_string(),
            ClubType::Wood => self.name.replace(" Wood", "W"),
            ClubType::Hybrid => self.name.replace(" Hybrid", "H"),
            ClubType::Iron => self.name.replace(" Iron", "i"),
            ClubType::Wedge => self.name.clone(),
            ClubType::Putter => "Pt".to_string(),
        }
    }
}
