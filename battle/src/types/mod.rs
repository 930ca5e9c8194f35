//! Domain types for battle setup

mod map;
mod options;
mod participant;

pub use map::MapData;
pub use options::{BattleOptions, OptionMap, StartBox, StartPosType};
pub use participant::{BattleStatus, Bot, Participant, ParticipantId, User, UserId};
