//! Greedy doubles scheduler and fairness metrics.
//!
//! # Algorithm
//!
//! `ScheduleBuilder` picks one match at a time, scoring every eligible
//! 2v2 grouping of the roster by partner repeats, opponent repeats and
//! appearance spread. It is a local heuristic, not an exact design, and
//! is fast enough for the supported roster sizes (at most 12 players).
//!
//! # Metrics
//!
//! `ScheduleStats` reports appearance balance and partner/opponent
//! repeats for a finished schedule.

mod counters;
mod greedy;
mod stats;

pub use counters::{BuildCounters, Grouping, PairKey};
pub use greedy::{
    generate_schedule, generate_shuffled_schedule, CostWeights, ScheduleBuilder, ScheduleRequest,
};
pub use stats::{PlayerPair, ScheduleStats};
