//! Contender id normalization
//!
//! After every roster change the player ids and team ids of contenders are
//! renumbered to a dense `0..k` range. Each old id maps to its rank among the
//! distinct ids in use, so relative order is kept and a second pass changes
//! nothing. Spectating users are left alone.

use crate::types::{Bot, User};

/// Sorted distinct ids; an id's index in this list is its new value
pub fn ranked_ids(ids: impl IntoIterator<Item = u32>) -> Vec<u32> {
    let mut ranked: Vec<u32> = ids.into_iter().collect();
    ranked.sort_unstable();
    ranked.dedup();
    ranked
}

/// Whether the distinct ids are exactly `0..k`
pub fn is_dense(ids: impl IntoIterator<Item = u32>) -> bool {
    ranked_ids(ids)
        .iter()
        .enumerate()
        .all(|(rank, &id)| rank as u32 == id)
}

/// Player id for a contender joining the roster: one past the highest in use
pub fn next_player_id(bots: &[Bot], users: &[User]) -> u32 {
    bots.iter()
        .map(|bot| bot.player_id)
        .chain(
            users
                .iter()
                .filter(|user| !user.battle_status.is_spectator)
                .map(|user| user.battle_status.player_id),
        )
        .max()
        .map_or(0, |max| max + 1)
}

/// Renumber contender player and team ids in place
///
/// Returns true if any id changed.
pub fn normalize_ids(bots: &mut [Bot], users: &mut [User]) -> bool {
    let (player_ids, team_ids): (Vec<u32>, Vec<u32>) = bots
        .iter()
        .map(|bot| (bot.player_id, bot.team_id))
        .chain(
            users
                .iter()
                .filter(|user| !user.battle_status.is_spectator)
                .map(|user| (user.battle_status.player_id, user.battle_status.team_id)),
        )
        .unzip();

    let player_ranks = ranked_ids(player_ids);
    let team_ranks = ranked_ids(team_ids);

    let mut changed = false;
    for bot in bots.iter_mut() {
        changed |= renumber(&mut bot.player_id, &player_ranks);
        changed |= renumber(&mut bot.team_id, &team_ranks);
    }
    for status in users
        .iter_mut()
        .map(|user| &mut user.battle_status)
        .filter(|status| !status.is_spectator)
    {
        changed |= renumber(&mut status.player_id, &player_ranks);
        changed |= renumber(&mut status.team_id, &team_ranks);
    }

    if changed {
        tracing::debug!(
            players = player_ranks.len(),
            teams = team_ranks.len(),
            "Renumbered contender ids"
        );
    }

    changed
}

fn renumber(id: &mut u32, ranks: &[u32]) -> bool {
    // Every contender id is in `ranks` by construction
    let Ok(rank) = ranks.binary_search(id) else {
        return false;
    };
    let rank = rank as u32;
    if *id == rank {
        return false;
    }
    *id = rank;
    true
}
