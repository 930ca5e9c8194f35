use thiserror::Error;

use crate::types::UserId;

/// Failure of a battle command whose target is not in the battle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("No bot named {0:?} in this battle")]
    BotNotFound(String),

    #[error("A bot named {0:?} is already in this battle")]
    DuplicateBot(String),

    #[error("User {0} is not in this battle")]
    UserNotFound(UserId),
}
