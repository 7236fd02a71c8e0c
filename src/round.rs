use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hole::Hole;
use crate::statistics::percentage;

pub const DEFAULT_COURSE_NAME: &str = "My Course";

// Default par template by hole number; a 9-hole round uses the front of it.
const PAR3_HOLES: [u32; 4] = [3, 6, 11, 16];
const PAR5_HOLES: [u32; 4] = [4, 8, 13, 18];

/// Opaque round identifier, 128 random bits rendered as hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(String);

impl RoundId {
    pub fn generate() -> Self {
        Self(format!("{:032x}", rand::random::<u128>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoundId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub date: DateTime<Utc>,
    pub course_name: String,
    pub holes: Vec<Hole>, // in playing order
    #[serde(default)]
    pub notes: String,
}

impl Round {
    pub fn new(date: DateTime<Utc>, course_name: impl Into<String>, holes: Vec<Hole>) -> Self {
        Self {
            id: RoundId::generate(),
            date,
            course_name: course_name.into(),
            holes,
            notes: String::new(),
        }
    }

    /// Blank round with the default par layout, ready to be filled in hole by hole.
    pub fn create_new(hole_count: u32, date: DateTime<Utc>) -> Self {
        let holes = (1..=hole_count)
            .map(|number| Hole::new(number, default_par(number)))
            .collect();
        Self::new(date, DEFAULT_COURSE_NAME, holes)
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn is_nine_holes(&self) -> bool {
        self.holes.len() <= 9
    }

    // Hole values are unchecked u32, so totals sum in u64/i64

    pub fn total_score(&self) -> u64 {
        self.holes.iter().map(|h| u64::from(h.score)).sum()
    }

    pub fn total_par(&self) -> u64 {
        self.holes.iter().map(|h| u64::from(h.par)).sum()
    }

    pub fn score_relative_to_par(&self) -> i64 {
        self.holes.iter().map(|h| h.score_relative_to_par()).sum()
    }

    pub fn total_putts(&self) -> u64 {
        self.holes.iter().map(|h| u64::from(h.putts)).sum()
    }

    pub fn gir_hits(&self) -> usize {
        self.holes.iter().filter(|h| h.is_gir()).count()
    }

    pub fn gir_percentage(&self) -> f64 {
        percentage(self.gir_hits(), self.holes.len())
    }

    pub fn fairway_opportunities(&self) -> usize {
        self.holes
            .iter()
            .filter(|h| h.is_fairway_opportunity())
            .count()
    }

    pub fn fairways_hit(&self) -> usize {
        self.holes
            .iter()
            .filter(|h| h.is_fairway_opportunity() && h.fairway.is_hit())
            .count()
    }

    pub fn fairway_percentage(&self) -> f64 {
        percentage(self.fairways_hit(), self.fairway_opportunities())
    }

    /// "E" for even, "+3" over, "-2" under.
    pub fn relative_score_label(&self) -> String {
        match self.score_relative_to_par() {
            0 => "E".to_string(),
            rel if rel > 0 => format!("+{}", rel),
            rel => rel.to_string(),
        }
    }
}

fn default_par(number: u32) -> u32 {
    if PAR3_HOLES.contains(&number) {
        3
    } else if PAR5_HOLES.contains(&number) {
        5
    } else {
        4
    }
}
