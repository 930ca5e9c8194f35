//! Battle session model for an RTS lobby client.
//!
//! This crate tracks who is in a battle, on which team, and with which options,
//! and keeps that state consistent while it is edited from the lobby.
//!
//! # Overview
//!
//! `skirmish-battle` is the synchronous core; `skirmish-client` supplies the
//! collaborators it needs:
//!
//! ```text
//! skirmish-client (session, router, content dispatch)
//!        │  implements services::*
//!        ▼
//! skirmish-battle (roster + options + commands) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`BattleOptions`] - Engine, game, map, start positions and game options
//! - [`User`], [`Bot`] - The two kinds of participant
//! - [`Participant`] - Borrowed view over either kind
//! - [`StartBox`], [`BoxLayout`] - Start areas and the default layouts
//!
//! ## Battle Model
//! - [`BattleCore`] - State and derived views (teams, contenders, founder, map)
//! - [`Battle`] - Command surface every battle variant implements
//! - [`OfflineBattle`] - Local battle against bots
//!
//! Contender player ids and team ids are kept dense (`0..k`) after every
//! roster command; see [`model::normalize`].
//!
//! # Example Usage
//!
//! ```ignore
//! use skirmish_battle::{Battle, BattleConfig, Bot, OfflineBattle};
//!
//! let mut battle = OfflineBattle::new(config, services);
//! battle.open();
//!
//! battle.add_bot(Bot::new("Bot 1", "BARb", local_user_id, 1))?;
//! battle.set_map("Red Comet Remake 1.8");
//!
//! for (team, members) in battle.core().teams() {
//!     println!("Team {}: {} contenders", team + 1, members.len());
//! }
//!
//! battle.start();
//! ```

pub mod boxes;
pub mod error;
pub mod model;
pub mod query;
pub mod services;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use boxes::{BoxLayout, default_map_boxes, start_boxes_for_map};
pub use error::BattleError;
pub use model::{Battle, BattleConfig, BattleCore, OfflineBattle};
pub use services::{
    BattleServices, ContentService, GameLauncher, OfflineServices, Router, SessionState,
    UserDirectory,
};
pub use types::{
    BattleOptions, BattleStatus, Bot, MapData, OptionMap, Participant, ParticipantId, StartBox,
    StartPosType, User, UserId,
};
