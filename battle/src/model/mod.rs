//! The battle model: shared core, normalization and battle variants

pub mod normalize;
mod offline;
mod state;
mod variant;
mod watch;

#[cfg(test)]
mod tests;

pub use offline::OfflineBattle;
pub use state::{BattleConfig, BattleCore};
pub use variant::Battle;
