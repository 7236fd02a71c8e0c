use serde::{Deserialize, Serialize};

use crate::club::Club;

/// Where the approach finished, on a 3x3 grid around the green.
///
/// `Center` is the only location that counts as a green in regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreenHitLocation {
    LongLeft,
    Long,
    LongRight,
    Left,
    #[default]
    Center,
    Right,
    ShortLeft,
    Short,
    ShortRight,
}

impl GreenHitLocation {
    /// Grid order, row by row from long to short.
    pub const ALL: [GreenHitLocation; 9] = [
        GreenHitLocation::LongLeft,
        GreenHitLocation::Long,
        GreenHitLocation::LongRight,
        GreenHitLocation::Left,
        GreenHitLocation::Center,
        GreenHitLocation::Right,
        GreenHitLocation::ShortLeft,
        GreenHitLocation::Short,
        GreenHitLocation::ShortRight,
    ];

    pub fn is_gir(&self) -> bool {
        *self == GreenHitLocation::Center
    }

    pub fn description(&self) -> &'static str {
        match self {
            GreenHitLocation::Center => "Green in Reg",
            GreenHitLocation::LongLeft => "Missed Long Left",
            GreenHitLocation::Long => "Missed Long",
            GreenHitLocation::LongRight => "Missed Long Right",
            GreenHitLocation::Left => "Missed Left",
            GreenHitLocation::Right => "Missed Right",
            GreenHitLocation::ShortLeft => "Missed Short Left",
            GreenHitLocation::Short => "Missed Short",
            GreenHitLocation::ShortRight => "Missed Short Right",
        }
    }

    pub fn short_description(&self) -> &'static str {
        match self {
            GreenHitLocation::Center => "GIR",
            GreenHitLocation::LongLeft => "L/L",
            GreenHitLocation::Long => "Long",
            GreenHitLocation::LongRight => "L/R",
            GreenHitLocation::Left => "Left",
            GreenHitLocation::Right => "Right",
            GreenHitLocation::ShortLeft => "S/L",
            GreenHitLocation::Short => "Short",
            GreenHitLocation::ShortRight => "S/R",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairwayMissDirection {
    Left,
    Right,
    None,
}

/// Tee shot outcome on a hole.
///
/// The miss direction only exists inside `Missed`, so a hit can never carry
/// a stale direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairwayResult {
    #[default]
    NotApplicable,
    Hit,
    Missed(FairwayMissDirection),
}

impl FairwayResult {
    /// Whether a fairway result was entered (anything but `NotApplicable`).
    pub fn is_opportunity(&self) -> bool {
        !matches!(self, FairwayResult::NotApplicable)
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, FairwayResult::Hit)
    }

    pub fn miss_direction(&self) -> Option<FairwayMissDirection> {
        match self {
            FairwayResult::Missed(direction) => Some(*direction),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FairwayResult::NotApplicable => "N/A",
            FairwayResult::Hit => "Hit Fairway",
            FairwayResult::Missed(FairwayMissDirection::Left) => "Missed Left",
            FairwayResult::Missed(FairwayMissDirection::Right) => "Missed Right",
            FairwayResult::Missed(FairwayMissDirection::None) => "Missed",
        }
    }
}

/// Golf name for a hole score relative to par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreName {
    NotEntered,
    Eagle, // or better
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    Other,
}

impl ScoreName {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreName::NotEntered => "-",
            ScoreName::Eagle => "Eagle",
            ScoreName::Birdie => "Birdie",
            ScoreName::Par => "Par",
            ScoreName::Bogey => "Bogey",
            ScoreName::DoubleBogey => "Dbl",
            ScoreName::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u32, // 1-based
    pub par: u32,
    #[serde(default)]
    pub score: u32, // 0 = not yet entered

    #[serde(default)]
    pub tee_club: Option<Club>,
    #[serde(default)]
    pub fairway: FairwayResult,

    #[serde(default)]
    pub approach_distance: Option<u32>, // meters
    #[serde(default)]
    pub approach_club: Option<Club>,
    #[serde(default)]
    pub green_hit_location: GreenHitLocation,

    #[serde(default)]
    pub putts: u32,
    #[serde(default)]
    pub first_putt_distance: Option<u32>, // feet

    #[serde(default)]
    pub wind_speed: f64, // m/s
    #[serde(default)]
    pub wind_direction: f64, // degrees, blowing-from
}

impl Hole {
    pub fn new(number: u32, par: u32) -> Self {
        Self {
            number,
            par,
            score: 0,
            tee_club: None,
            fairway: FairwayResult::NotApplicable,
            approach_distance: None,
            approach_club: None,
            green_hit_location: GreenHitLocation::Center,
            putts: 0,
            first_putt_distance: None,
            wind_speed: 0.0,
            wind_direction: 0.0,
        }
    }

    pub fn is_par3(&self) -> bool {
        self.par == 3
    }

    pub fn is_gir(&self) -> bool {
        self.green_hit_location.is_gir()
    }

    /// Counts toward fairway statistics: not a par 3 and a recorded result.
    pub fn is_fairway_opportunity(&self) -> bool {
        !self.is_par3() && self.fairway.is_opportunity()
    }

    pub fn score_relative_to_par(&self) -> i64 {
        i64::from(self.score) - i64::from(self.par)
    }

    pub fn score_name(&self) -> ScoreName {
        if self.score == 0 {
            return ScoreName::NotEntered;
        }
        match self.score_relative_to_par() {
            d if d <= -2 => ScoreName::Eagle,
            -1 => ScoreName::Birdie,
            0 => ScoreName::Par,
            1 => ScoreName::Bogey,
            2 => ScoreName::DoubleBogey,
            _ => ScoreName::Other,
        }
    }
}
