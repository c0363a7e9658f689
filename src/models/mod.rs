//! Tournament domain models.
//!
//! Provides the data types the scheduler consumes and produces. The
//! roster is owned by the caller; matches and teams are created by the
//! scheduler with fresh identifiers.
//!
//! | Type | Role |
//! |------|------|
//! | `Player` | Roster entry, opaque to the scheduler beyond its position |
//! | `Team` | Two players on the same side |
//! | `Match` | Team1 vs Team2, score left unset |

mod matches;
mod player;

pub use matches::{Match, Team};
pub use player::{numbered_roster, Gender, Player};
