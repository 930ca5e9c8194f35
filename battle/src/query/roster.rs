//! Roster grouping helpers

use std::collections::BTreeMap;

use crate::types::Participant;

/// Keep only contenders (bots and non-spectating users), preserving order
pub fn contenders<'a>(
    participants: impl IntoIterator<Item = Participant<'a>>,
) -> Vec<Participant<'a>> {
    participants
        .into_iter()
        .filter(|p| p.is_contender())
        .collect()
}

/// Group contenders by team id, keys ascending, members in input order
///
/// Spectating users are skipped.
pub fn group_by_team<'a>(
    participants: impl IntoIterator<Item = Participant<'a>>,
) -> BTreeMap<u32, Vec<Participant<'a>>> {
    let mut teams: BTreeMap<u32, Vec<Participant<'a>>> = BTreeMap::new();
    for participant in participants.into_iter().filter(|p| p.is_contender()) {
        teams.entry(participant.team_id()).or_default().push(participant);
    }
    teams
}

/// Contenders on one team, in input order
pub fn team_of<'a>(
    participants: impl IntoIterator<Item = Participant<'a>>,
    team_id: u32,
) -> Vec<Participant<'a>> {
    participants
        .into_iter()
        .filter(|p| p.is_contender() && p.team_id() == team_id)
        .collect()
}
