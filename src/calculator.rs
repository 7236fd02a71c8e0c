use crate::hole::{FairwayMissDirection, Hole};
use crate::round::Round;
use crate::statistics::{
    average, percentage, ratio, DatePercentPair, DatePuttsPair, DateScorePair, Statistics,
};

const HOLES_PER_ROUND: f64 = 18.0;

#[derive(Debug, Default, Clone, Copy)]
struct ParBucket {
    holes: usize,
    strokes: u64,
    putts: u64,
    gir_hits: usize,
}

impl ParBucket {
    fn add(&mut self, hole: &Hole) {
        self.holes += 1;
        self.strokes += u64::from(hole.score);
        self.putts += u64::from(hole.putts);
        if hole.is_gir() {
            self.gir_hits += 1;
        }
    }

    fn avg_score(&self) -> f64 {
        average(self.strokes, self.holes)
    }

    fn avg_putts(&self) -> f64 {
        average(self.putts, self.holes)
    }

    fn gir_percentage(&self) -> f64 {
        percentage(self.gir_hits, self.holes)
    }
}

/// Running sums for one pass over every hole of every round.
#[derive(Debug, Default)]
struct Totals {
    rounds: usize,
    equivalent_rounds: f64,

    holes: usize,
    strokes: u64,
    putts: u64,

    gir_hits: usize,
    putts_on_gir: u64,
    putts_off_gir: u64,

    fairway_opportunities: usize,
    fairways_hit: usize,
    fairways_missed_left: usize,
    fairways_missed_right: usize,

    one_putts: usize,
    three_putts: usize, // three or more

    // Index 0..3 is par 3..5
    by_par: [ParBucket; 3],
}

impl Totals {
    fn add_round(&mut self, round: &Round) {
        self.rounds += 1;
        self.equivalent_rounds += round.hole_count() as f64 / HOLES_PER_ROUND;

        for hole in &round.holes {
            self.add_hole(hole);
        }
    }

    fn add_hole(&mut self, hole: &Hole) {
        self.holes += 1;
        self.strokes += u64::from(hole.score);
        self.putts += u64::from(hole.putts);

        // Every hole is a GIR opportunity
        if hole.is_gir() {
            self.gir_hits += 1;
            self.putts_on_gir += u64::from(hole.putts);
        } else {
            self.putts_off_gir += u64::from(hole.putts);
        }

        if hole.is_fairway_opportunity() {
            self.fairway_opportunities += 1;
            if hole.fairway.is_hit() {
                self.fairways_hit += 1;
            }
            match hole.fairway.miss_direction() {
                Some(FairwayMissDirection::Left) => self.fairways_missed_left += 1,
                Some(FairwayMissDirection::Right) => self.fairways_missed_right += 1,
                _ => {}
            }
        }

        match hole.putts {
            1 => self.one_putts += 1,
            p if p >= 3 => self.three_putts += 1,
            _ => {}
        }

        match hole.par {
            3..=5 => self.by_par[(hole.par - 3) as usize].add(hole),
            other => log::debug!(
                "[STATS] Hole {} has par {}, skipped from par breakdown",
                hole.number,
                other
            ),
        }
    }

    fn into_statistics(self) -> Statistics {
        let [par3, par4, par5] = self.by_par;
        let fairway_hit_percentage = percentage(self.fairways_hit, self.fairway_opportunities);
        let gir_miss_count = self.holes - self.gir_hits;

        Statistics {
            total_rounds: self.rounds,
            total_holes_played: self.holes,
            average_score: ratio(self.strokes as f64, self.equivalent_rounds),
            avg_score_par3: par3.avg_score(),
            avg_score_par4: par4.avg_score(),
            avg_score_par5: par5.avg_score(),

            gir_hits: self.gir_hits,
            gir_percentage: percentage(self.gir_hits, self.holes),
            gir_percentage_par3: par3.gir_percentage(),
            gir_percentage_par4: par4.gir_percentage(),
            gir_percentage_par5: par5.gir_percentage(),

            total_fairway_opportunities: self.fairway_opportunities,
            fairways_hit: self.fairways_hit,
            fairway_hit_percentage,
            fairways_hit_percentage_total: fairway_hit_percentage,
            fairways_missed_left_percentage: percentage(
                self.fairways_missed_left,
                self.fairway_opportunities,
            ),
            fairways_missed_right_percentage: percentage(
                self.fairways_missed_right,
                self.fairway_opportunities,
            ),

            average_putts_per_hole: average(self.putts, self.holes),
            average_putts_per_round: average(self.putts, self.rounds),
            avg_putts_par3: par3.avg_putts(),
            avg_putts_par4: par4.avg_putts(),
            avg_putts_par5: par5.avg_putts(),
            avg_putts_on_gir: average(self.putts_on_gir, self.gir_hits),
            avg_putts_off_gir: average(self.putts_off_gir, gir_miss_count),
            one_putt_percentage: percentage(self.one_putts, self.holes),
            three_putt_percentage: percentage(self.three_putts, self.holes),

            ..Statistics::default()
        }
    }
}

/// Aggregate scoring, accuracy and putting statistics over `rounds`.
///
/// Rounds may be in any order and of any length; a 9-hole round counts as
/// half a round toward `average_score`. Holes with a par outside 3..=5 still
/// count toward the overall figures but not the per-par breakdown.
pub fn compute<'a, I>(rounds: I) -> Statistics
where
    I: IntoIterator<Item = &'a Round>,
{
    let mut totals = Totals::default();
    let mut score_trend = Vec::new();
    let mut putts_trend = Vec::new();
    let mut gir_trend = Vec::new();
    let mut fairway_trend = Vec::new();

    for round in rounds {
        totals.add_round(round);

        score_trend.push(DateScorePair {
            date: round.date,
            score: round.total_score(),
            score_relative_to_par: round.score_relative_to_par(),
        });
        putts_trend.push(DatePuttsPair {
            date: round.date,
            putts: round.total_putts(),
        });
        gir_trend.push(DatePercentPair {
            date: round.date,
            percentage: round.gir_percentage(),
        });
        fairway_trend.push(DatePercentPair {
            date: round.date,
            percentage: round.fairway_percentage(),
        });
    }

    log::debug!(
        "[STATS] {} rounds, {} holes ({:.1} round equivalents)",
        totals.rounds,
        totals.holes,
        totals.equivalent_rounds
    );

    let mut statistics = totals.into_statistics();

    // Input order is not guaranteed to be chronological
    score_trend.sort_by_key(|p| p.date);
    putts_trend.sort_by_key(|p| p.date);
    gir_trend.sort_by_key(|p| p.date);
    fairway_trend.sort_by_key(|p| p.date);

    statistics.rounds_with_score_by_date = score_trend;
    statistics.rounds_with_putts_by_date = putts_trend;
    statistics.rounds_with_gir_by_date = gir_trend;
    statistics.rounds_with_fairways_by_date = fairway_trend;
    statistics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::{FairwayResult, GreenHitLocation};
    use chrono::{Duration, TimeZone, Utc};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.05
    }

    fn hole(number: u32, par: u32, score: u32, putts: u32) -> Hole {
        let mut hole = Hole::new(number, par);
        hole.score = score;
        hole.putts = putts;
        hole
    }

    fn round_on(day: u32, holes: Vec<Hole>) -> Round {
        let date = Utc.with_ymd_and_hms(2025, 4, day, 9, 0, 0).unwrap();
        Round::new(date, "Test Links", holes)
    }

    fn all_finite(s: &Statistics) -> bool {
        [
            s.average_score,
            s.avg_score_par3,
            s.avg_score_par4,
            s.avg_score_par5,
            s.gir_percentage,
            s.gir_percentage_par3,
            s.gir_percentage_par4,
            s.gir_percentage_par5,
            s.fairway_hit_percentage,
            s.fairways_hit_percentage_total,
            s.fairways_missed_left_percentage,
            s.fairways_missed_right_percentage,
            s.average_putts_per_hole,
            s.average_putts_per_round,
            s.avg_putts_par3,
            s.avg_putts_par4,
            s.avg_putts_par5,
            s.avg_putts_on_gir,
            s.avg_putts_off_gir,
            s.one_putt_percentage,
            s.three_putt_percentage,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    #[test]
    fn test_empty_input_is_zeroed() {
        let stats = compute(&Vec::<Round>::new());
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.total_rounds, 0);
        assert!(all_finite(&stats));
    }

    #[test]
    fn test_round_without_holes() {
        let stats = compute(&[round_on(1, Vec::new())]);
        assert_eq!(stats.total_rounds, 1);
        assert_eq!(stats.total_holes_played, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.average_putts_per_round, 0.0);
        assert!(all_finite(&stats));
        assert_eq!(stats.rounds_with_score_by_date.len(), 1);
        assert_eq!(stats.rounds_with_gir_by_date[0].percentage, 0.0);
    }

    #[test]
    fn test_three_hole_scenario() {
        let mut holes = vec![hole(1, 3, 3, 2), hole(2, 4, 4, 2), hole(3, 5, 6, 3)];
        holes[1].fairway = FairwayResult::Hit;
        holes[2].fairway = FairwayResult::Hit;
        holes[2].green_hit_location = GreenHitLocation::Short;
        // Par 3 stays NotApplicable; a stray Hit there would still be ignored
        let stats = compute(&[round_on(1, holes)]);

        assert_eq!(stats.total_rounds, 1);
        assert!(approx_eq(stats.gir_percentage, 66.7));
        assert_eq!(stats.gir_hits, 2);
        assert_eq!(stats.total_fairway_opportunities, 2);
        assert_eq!(stats.fairway_hit_percentage, 100.0);
        assert!(approx_eq(stats.average_putts_per_hole, 2.33));
        assert_eq!(stats.average_putts_per_round, 7.0);
        assert_eq!(stats.avg_putts_on_gir, 2.0);
        assert_eq!(stats.avg_putts_off_gir, 3.0);
        assert_eq!(stats.avg_score_par5, 6.0);
        assert_eq!(stats.gir_percentage_par5, 0.0);
        assert_eq!(stats.gir_percentage_par3, 100.0);
        // 13 strokes over 3/18 of a round
        assert!(approx_eq(stats.average_score, 78.0));
    }

    #[test]
    fn test_single_fairway_opportunity() {
        let mut holes = vec![hole(1, 3, 3, 2), hole(2, 4, 4, 2), hole(3, 5, 6, 3)];
        holes[1].fairway = FairwayResult::Hit;
        let stats = compute(&[round_on(1, holes)]);
        assert_eq!(stats.total_fairway_opportunities, 1);
        assert_eq!(stats.fairways_hit, 1);
        assert_eq!(stats.fairway_hit_percentage, 100.0);
    }

    #[test]
    fn test_putting_buckets() {
        let holes = vec![hole(1, 4, 4, 1), hole(2, 4, 5, 3), hole(3, 4, 4, 2)];
        let stats = compute(&[round_on(1, holes)]);
        assert!(approx_eq(stats.one_putt_percentage, 33.3));
        assert!(approx_eq(stats.three_putt_percentage, 33.3));
    }

    #[test]
    fn test_no_par3_guarded() {
        let holes = vec![hole(1, 4, 4, 2), hole(2, 5, 5, 2)];
        let stats = compute(&[round_on(1, holes)]);
        assert_eq!(stats.gir_percentage_par3, 0.0);
        assert_eq!(stats.avg_score_par3, 0.0);
        assert_eq!(stats.avg_putts_par3, 0.0);
        assert!(all_finite(&stats));
    }

    #[test]
    fn test_all_par3_has_no_fairway_opportunities() {
        let holes = (1..=9)
            .map(|n| {
                let mut h = hole(n, 3, 3, 2);
                h.fairway = FairwayResult::Hit;
                h
            })
            .collect();
        let stats = compute(&[round_on(1, holes)]);
        assert_eq!(stats.total_fairway_opportunities, 0);
        assert_eq!(stats.fairway_hit_percentage, 0.0);
        assert_eq!(stats.fairways_missed_left_percentage, 0.0);
    }

    #[test]
    fn test_miss_percentages_use_opportunities() {
        let mut holes: Vec<Hole> = (1..=4).map(|n| hole(n, 4, 5, 2)).collect();
        holes[0].fairway = FairwayResult::Hit;
        holes[1].fairway = FairwayResult::Missed(FairwayMissDirection::Left);
        holes[2].fairway = FairwayResult::Missed(FairwayMissDirection::Right);
        holes[3].fairway = FairwayResult::Missed(FairwayMissDirection::Left);
        let stats = compute(&[round_on(1, holes)]);

        assert_eq!(stats.fairway_hit_percentage, 25.0);
        assert_eq!(stats.fairways_hit_percentage_total, stats.fairway_hit_percentage);
        assert_eq!(stats.fairways_missed_left_percentage, 50.0);
        assert_eq!(stats.fairways_missed_right_percentage, 25.0);
    }

    #[test]
    fn test_nine_hole_rounds_scale() {
        let make_holes = |offset: u32| -> Vec<Hole> {
            (1..=9).map(|n| hole(n + offset, 4, 5, 2)).collect()
        };
        let mut full = make_holes(0);
        full.extend(make_holes(9));

        let eighteen = compute(&[round_on(1, full)]);
        let two_nines = compute(&[round_on(1, make_holes(0)), round_on(2, make_holes(9))]);

        assert_eq!(eighteen.average_score, 90.0);
        assert_eq!(two_nines.average_score, eighteen.average_score);
        // Per-round putts use the actual round count
        assert_eq!(eighteen.average_putts_per_round, 36.0);
        assert_eq!(two_nines.average_putts_per_round, 18.0);
    }

    #[test]
    fn test_unusual_par_only_in_overall() {
        let holes = vec![hole(1, 6, 7, 2), hole(2, 4, 4, 2)];
        let stats = compute(&[round_on(1, holes)]);
        assert_eq!(stats.total_holes_played, 2);
        assert_eq!(stats.average_putts_per_hole, 2.0);
        assert_eq!(stats.avg_score_par4, 4.0);
        assert_eq!(stats.avg_score_par5, 0.0);
        assert_eq!(stats.gir_percentage, 100.0);
    }

    #[test]
    fn test_trends_sorted_by_date() {
        let late = round_on(20, vec![hole(1, 4, 6, 3)]);
        let early = round_on(2, vec![hole(1, 4, 3, 1)]);
        let middle = round_on(10, vec![hole(1, 4, 4, 2)]);
        let stats = compute(&[late, early, middle]);

        let dates: Vec<_> = stats.rounds_with_score_by_date.iter().map(|p| p.date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(dates[1] - dates[0], Duration::days(8));

        let scores: Vec<_> = stats.rounds_with_score_by_date.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![3, 4, 6]);
        let relative: Vec<_> = stats
            .rounds_with_score_by_date
            .iter()
            .map(|p| p.score_relative_to_par)
            .collect();
        assert_eq!(relative, vec![-1, 0, 2]);
        let putts: Vec<_> = stats.rounds_with_putts_by_date.iter().map(|p| p.putts).collect();
        assert_eq!(putts, vec![1, 2, 3]);
        assert_eq!(stats.rounds_with_gir_by_date.len(), 3);
        assert_eq!(stats.rounds_with_fairways_by_date.len(), 3);
    }

    #[test]
    fn test_gir_and_fairway_trends_follow_date_order() {
        // Later round: fairway found, green missed short
        let mut late_hole = hole(1, 4, 5, 2);
        late_hole.fairway = FairwayResult::Hit;
        late_hole.green_hit_location = GreenHitLocation::Short;
        let late = round_on(18, vec![late_hole]);

        // Earlier round: 3 of 4 greens, 1 of 4 fairways
        let mut early_holes: Vec<Hole> = (1..=4).map(|n| hole(n, 4, 4, 2)).collect();
        early_holes[0].fairway = FairwayResult::Hit;
        early_holes[1].fairway = FairwayResult::Missed(FairwayMissDirection::Left);
        early_holes[2].fairway = FairwayResult::Missed(FairwayMissDirection::Right);
        early_holes[3].fairway = FairwayResult::Missed(FairwayMissDirection::Right);
        early_holes[3].green_hit_location = GreenHitLocation::Long;
        let early = round_on(3, early_holes);

        let stats = compute(&[late.clone(), early.clone()]);

        let gir_dates: Vec<_> = stats.rounds_with_gir_by_date.iter().map(|p| p.date).collect();
        assert_eq!(gir_dates, vec![early.date, late.date]);
        let gir: Vec<_> = stats.rounds_with_gir_by_date.iter().map(|p| p.percentage).collect();
        assert_eq!(gir, vec![75.0, 0.0]);

        let fairway_dates: Vec<_> = stats
            .rounds_with_fairways_by_date
            .iter()
            .map(|p| p.date)
            .collect();
        assert_eq!(fairway_dates, vec![early.date, late.date]);
        let fairways: Vec<_> = stats
            .rounds_with_fairways_by_date
            .iter()
            .map(|p| p.percentage)
            .collect();
        assert_eq!(fairways, vec![25.0, 100.0]);
    }

    #[test]
    fn test_extreme_hole_values_do_not_overflow() {
        let mut holes = vec![hole(1, 4, u32::MAX, u32::MAX), hole(2, 4, 2, 1)];
        holes[1].green_hit_location = GreenHitLocation::Left;
        let round = round_on(5, holes);

        assert_eq!(round.total_score(), u64::from(u32::MAX) + 2);
        assert_eq!(round.total_putts(), u64::from(u32::MAX) + 1);
        assert_eq!(
            round.score_relative_to_par(),
            i64::from(u32::MAX) - 4 + 2 - 4
        );

        let stats = compute(&[round]);
        let trend = &stats.rounds_with_score_by_date[0];
        assert_eq!(trend.score, u64::from(u32::MAX) + 2);
        assert_eq!(trend.score_relative_to_par, i64::from(u32::MAX) - 6);
        assert_eq!(
            stats.rounds_with_putts_by_date[0].putts,
            u64::from(u32::MAX) + 1
        );
        assert!(all_finite(&stats));
        assert!(stats.average_score > 0.0);
    }

    #[test]
    fn test_input_not_mutated() {
        let rounds = vec![round_on(1, vec![hole(1, 4, 5, 2)])];
        let before = rounds.clone();
        let _ = compute(&rounds);
        assert_eq!(rounds, before);
    }
}
