//! Query helpers over battle state
//!
//! Pure functions used by the battle's derived views: grouping contenders
//! into teams and formatting how long a launched battle has been running.

mod roster;
mod runtime;

pub use roster::{contenders, group_by_team, team_of};
pub use runtime::{format_runtime, friendly_runtime};
