//! Candidate ranking: five factor scorers and a weighted combiner.
//!
//! Every scorer degrades to `NEUTRAL_SCORE` when either side lacks data, so
//! ranking never fails on data-quality issues.

pub mod engine;
pub mod handlers;
pub mod keywords;
pub mod personality;
pub mod traits;
pub mod weights;

pub use engine::{FactorScores, RankedCandidate, RankingEngine};
pub use personality::PersonalityBound;
pub use weights::RankingWeights;

/// Score assigned to a factor when there is not enough data to compare.
pub const NEUTRAL_SCORE: f64 = 0.5;
