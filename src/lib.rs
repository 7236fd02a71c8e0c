//! Golf round records and the statistics derived from them.
//!
//! Rounds are plain data ([`Round`], [`Hole`]); [`compute`] turns any set of
//! rounds into a [`Statistics`] snapshot. Storage lives behind
//! [`RoundRepository`] and is never touched by the statistics engine.

pub mod calculator;
pub mod club;
pub mod hole;
pub mod round;
pub mod sample;
pub mod statistics;
pub mod store;
pub mod wind;

pub use calculator::compute;
pub use club::{Club, ClubType};
pub use hole::{FairwayMissDirection, FairwayResult, GreenHitLocation, Hole, ScoreName};
pub use round::{Round, RoundId};
pub use sample::SampleRounds;
pub use statistics::{DatePercentPair, DatePuttsPair, DateScorePair, Statistics};
pub use store::{InMemoryStore, JsonFileStore, RoundRepository, StoreError};
pub use wind::{plays_like_distance, wind_impact};
