use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::club::{Club, ClubType};
use crate::hole::{FairwayMissDirection, FairwayResult, GreenHitLocation};
use crate::round::Round;

/// Generates a small, plausible history of rounds for demos and tests.
///
/// Three rounds: a 9-hole round two weeks ago, an 18-hole round last week and
/// a better 18-hole round two days ago.
pub struct SampleRounds<R: Rng> {
    rng: R,
}

impl<R: Rng> SampleRounds<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, today: DateTime<Utc>) -> Vec<Round> {
        let rounds = vec![
            self.nine_hole_round(today - Duration::days(14)),
            self.eighteen_hole_round(today - Duration::days(7)),
            self.recent_round(today - Duration::days(2)),
        ];
        log::info!("[SAMPLE] Generated {} sample rounds", rounds.len());
        rounds
    }

    fn nine_hole_round(&mut self, date: DateTime<Utc>) -> Round {
        let mut round = Round::create_new(9, date);
        round.course_name = "Local Course".to_string();

        let driver = Club::find("Driver");
        let seven_iron = Club::find("7 Iron");
        for hole in &mut round.holes {
            hole.score = offset_score(hole.par, *[-1, 0, 0, 1].choose(&mut self.rng).unwrap_or(&0));
            hole.tee_club = driver.clone();
            hole.fairway = self.coin_flip_fairway(hole.is_par3());
            hole.approach_distance = Some(self.rng.gen_range(100..=180));
            hole.approach_club = seven_iron.clone();
            hole.green_hit_location = self.pick_location(&[
                GreenHitLocation::Center,
                GreenHitLocation::Center,
                GreenHitLocation::Short,
                GreenHitLocation::LongRight,
            ]);
            hole.putts = self.rng.gen_range(1..=3);
            hole.first_putt_distance = Some(self.rng.gen_range(3..=30));
        }
        round
    }

    fn eighteen_hole_round(&mut self, date: DateTime<Utc>) -> Round {
        let mut round = Round::create_new(18, date);
        round.course_name = "Championship Course".to_string();

        let bag = Club::all_clubs();
        let eight_iron = Club::find("8 Iron");
        for hole in &mut round.holes {
            hole.score = offset_score(
                hole.par,
                *[-1, 0, 0, 1, 2].choose(&mut self.rng).unwrap_or(&0),
            );
            hole.tee_club = bag.choose(&mut self.rng).cloned();
            hole.fairway = self.coin_flip_fairway(hole.is_par3());
            hole.approach_distance = Some(self.rng.gen_range(80..=200));
            hole.approach_club = eight_iron.clone();
            // Weighted toward hitting the green
            hole.green_hit_location = self.pick_location(&[
                GreenHitLocation::Center,
                GreenHitLocation::Center,
                GreenHitLocation::Center,
                GreenHitLocation::Long,
                GreenHitLocation::Short,
                GreenHitLocation::Left,
                GreenHitLocation::Right,
            ]);
            hole.putts = self.rng.gen_range(1..=3);
            hole.first_putt_distance = Some(self.rng.gen_range(2..=25));
        }
        round
    }

    fn recent_round(&mut self, date: DateTime<Utc>) -> Round {
        let mut round = Round::create_new(18, date);
        round.course_name = "City Links".to_string();

        let driver = Club::all_clubs()
            .into_iter()
            .find(|c| c.club_type == ClubType::Driver);
        let nine_iron = Club::find("9 Iron");
        for hole in &mut round.holes {
            hole.score = offset_score(
                hole.par,
                *[-2, -1, 0, 0, 0, 1].choose(&mut self.rng).unwrap_or(&0),
            );
            hole.tee_club = driver.clone();
            if !hole.is_par3() {
                // Two of three fairways
                hole.fairway = if self.rng.gen_ratio(2, 3) {
                    FairwayResult::Hit
                } else {
                    FairwayResult::Missed(self.miss_direction())
                };
            }
            hole.approach_distance = Some(self.rng.gen_range(90..=180));
            hole.approach_club = nine_iron.clone();
            hole.green_hit_location = self.pick_location(&[
                GreenHitLocation::Center,
                GreenHitLocation::Center,
                GreenHitLocation::Center,
                GreenHitLocation::Center,
                GreenHitLocation::Long,
                GreenHitLocation::Short,
            ]);
            hole.putts = *[1, 2, 2].choose(&mut self.rng).unwrap_or(&2);
            hole.first_putt_distance = Some(self.rng.gen_range(3..=20));
        }
        round
    }

    fn coin_flip_fairway(&mut self, is_par3: bool) -> FairwayResult {
        if is_par3 {
            return FairwayResult::NotApplicable;
        }
        if self.rng.gen_bool(0.5) {
            FairwayResult::Hit
        } else {
            FairwayResult::Missed(self.miss_direction())
        }
    }

    fn miss_direction(&mut self) -> FairwayMissDirection {
        if self.rng.gen_bool(0.5) {
            FairwayMissDirection::Left
        } else {
            FairwayMissDirection::Right
        }
    }

    fn pick_location(&mut self, weighted: &[GreenHitLocation]) -> GreenHitLocation {
        weighted.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

fn offset_score(par: u32, offset: i32) -> u32 {
    (par as i32 + offset).max(1) as u32
}
