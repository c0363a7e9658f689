//! Fair pairing engine for fixed-format doubles tournaments.
//!
//! Given a roster of 4 to 12 players and a target number of matches,
//! produces a schedule of 2v2 matches where every player plays equally
//! often and partner/opponent repeats are kept low.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Player`, `Team`, `Match`
//! - **`table`**: Roster size → total matches policy table
//! - **`scheduler`**: Greedy schedule builder and fairness statistics
//! - **`validation`**: Roster and target checks for callers
//!
//! # Example
//!
//! ```
//! use u_doubles::models::numbered_roster;
//! use u_doubles::scheduler::{generate_schedule, ScheduleStats};
//! use u_doubles::table::target_total_games;
//!
//! let roster = numbered_roster(6);
//! let target = target_total_games(roster.len());
//! let matches = generate_schedule(&roster, target);
//!
//! let stats = ScheduleStats::calculate(&matches, &roster);
//! assert!(stats.is_complete(target));
//! assert!(stats.is_balanced());
//! ```
//!
//! # Errors
//!
//! Scheduling never fails. An infeasible request yields an empty
//! schedule and a stalled search yields a short one; use
//! [`validation::validate_roster`] and [`scheduler::ScheduleStats`] to
//! tell those cases apart.

pub mod models;
pub mod scheduler;
pub mod table;
pub mod validation;
