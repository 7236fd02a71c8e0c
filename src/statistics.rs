use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateScorePair {
    pub date: DateTime<Utc>,
    pub score: u64,
    pub score_relative_to_par: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePuttsPair {
    pub date: DateTime<Utc>,
    pub putts: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePercentPair {
    pub date: DateTime<Utc>,
    pub percentage: f64,
}

/// Aggregate snapshot over a set of rounds.
///
/// Every average and percentage is `0.0` when its denominator is zero, so a
/// `Statistics` never contains NaN or infinity. Trend series are sorted by
/// date, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    // Scoring
    pub total_rounds: usize,
    pub total_holes_played: usize,
    pub average_score: f64, // per 18 holes
    pub avg_score_par3: f64,
    pub avg_score_par4: f64,
    pub avg_score_par5: f64,

    // Greens
    pub gir_hits: usize,
    pub gir_percentage: f64,
    pub gir_percentage_par3: f64,
    pub gir_percentage_par4: f64,
    pub gir_percentage_par5: f64,

    // Driving
    pub total_fairway_opportunities: usize,
    pub fairways_hit: usize,
    pub fairway_hit_percentage: f64,
    /// Same value as `fairway_hit_percentage`, repeated for the driving breakdown.
    pub fairways_hit_percentage_total: f64,
    pub fairways_missed_left_percentage: f64,
    pub fairways_missed_right_percentage: f64,

    // Putting
    pub average_putts_per_hole: f64,
    pub average_putts_per_round: f64,
    pub avg_putts_par3: f64,
    pub avg_putts_par4: f64,
    pub avg_putts_par5: f64,
    pub avg_putts_on_gir: f64,
    pub avg_putts_off_gir: f64,
    pub one_putt_percentage: f64,
    pub three_putt_percentage: f64,

    // Strokes gained: reserved, no benchmark model yet
    pub strokes_gained_total: Option<f64>,
    pub strokes_gained_off_the_tee: Option<f64>,
    pub strokes_gained_approach: Option<f64>,
    pub strokes_gained_around_green: Option<f64>,
    pub strokes_gained_putting: Option<f64>,

    // Trends
    pub rounds_with_score_by_date: Vec<DateScorePair>,
    pub rounds_with_putts_by_date: Vec<DatePuttsPair>,
    pub rounds_with_gir_by_date: Vec<DatePercentPair>,
    pub rounds_with_fairways_by_date: Vec<DatePercentPair>,
}

/// `numerator / denominator`, or `0.0` for an empty denominator.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Share of `count` in `total` as a percentage, `0.0` when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    ratio(count as f64, total as f64) * 100.0
}

/// Mean of `sum` over `count` items, `0.0` when there are none.
pub fn average(sum: u64, count: usize) -> f64 {
    ratio(sum as f64, count as f64)
}
