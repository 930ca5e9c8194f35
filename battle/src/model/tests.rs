use serde_json::json;

use super::normalize::is_dense;
use super::{Battle, BattleConfig, OfflineBattle};
use crate::boxes::BoxLayout;
use crate::error::BattleError;
use crate::testing::Fakes;
use crate::types::{
    BattleOptions, Bot, OptionMap, ParticipantId, StartBox, StartPosType, User,
};

fn offline_battle(bots: Vec<Bot>, users: Vec<User>) -> (OfflineBattle, Fakes) {
    let fakes = Fakes::new(&users);
    let config = BattleConfig {
        battle_options: BattleOptions::new("105.1.1", "byar:test", "Throne v8", 1),
        bots,
        users,
    };
    (OfflineBattle::new(config, fakes.offline_services()), fakes)
}

fn two_players() -> Vec<User> {
    vec![
        User::new(1, "alice").on_team(0, 0),
        User::new(2, "bob").on_team(1, 1),
    ]
}

fn team_keys(battle: &OfflineBattle) -> Vec<u32> {
    battle.core().teams().keys().copied().collect()
}

fn assert_dense(battle: &OfflineBattle) {
    let contenders = battle.core().contenders();
    assert!(is_dense(contenders.iter().map(|c| c.team_id())));
    assert!(is_dense(contenders.iter().map(|c| c.player_id())));
}

#[test]
fn test_add_bot_renumbers_team() {
    let (mut battle, _) = offline_battle(vec![], two_players());

    battle
        .add_bot(Bot::new("Bot 1", "BARb", 1, 5).with_player_id(2))
        .unwrap();

    assert_eq!(team_keys(&battle), vec![0, 1, 2]);
    assert_eq!(battle.core().bot("Bot 1").unwrap().team_id, 2);
}

fn assert_unique_player_ids(battle: &OfflineBattle) {
    let mut ids: Vec<u32> = battle
        .core()
        .contenders()
        .iter()
        .map(|c| c.player_id())
        .collect();
    let count = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), count, "duplicate player ids among contenders");
}

#[test]
fn test_added_bots_get_their_own_player_ids() {
    let (mut battle, _) = offline_battle(vec![], vec![User::new(1, "alice").on_team(0, 0)]);

    battle.add_bot(Bot::new("Bot 1", "BARb", 1, 1)).unwrap();
    battle.add_bot(Bot::new("Bot 2", "BARb", 1, 1)).unwrap();

    assert_unique_player_ids(&battle);
    assert_eq!(battle.core().user(1).unwrap().battle_status.player_id, 0);
    assert_eq!(battle.core().bot("Bot 1").unwrap().player_id, 1);
    assert_eq!(battle.core().bot("Bot 2").unwrap().player_id, 2);
    assert_dense(&battle);
}

#[test]
fn test_returning_spectator_gets_fresh_player_id() {
    let (mut battle, _) = offline_battle(
        vec![],
        vec![
            User::new(1, "alice").on_team(0, 0),
            User::new(2, "bob").on_team(0, 1),
        ],
    );

    battle.player_to_spectator(1).unwrap();
    assert_eq!(battle.core().user(2).unwrap().battle_status.player_id, 0);

    // alice still carries player id 0 from before she left
    battle.spectator_to_player(1, 0).unwrap();

    assert_unique_player_ids(&battle);
    assert_eq!(battle.core().user(1).unwrap().battle_status.player_id, 1);
    assert_dense(&battle);
}

#[test]
fn test_team_gap_closes() {
    let (battle, _) = offline_battle(
        vec![],
        vec![
            User::new(1, "alice").on_team(0, 0),
            User::new(2, "bob").on_team(2, 1),
            User::new(3, "carol").on_team(2, 2),
        ],
    );

    let teams: Vec<u32> = battle
        .core()
        .users()
        .iter()
        .map(|u| u.battle_status.team_id)
        .collect();
    assert_eq!(teams, vec![0, 1, 1]);
}

#[test]
fn test_set_map_without_entry_uses_fallback_boxes() {
    let (mut battle, _) = offline_battle(vec![], two_players());

    battle.set_map("DeltaSiegeDry");

    assert_eq!(battle.core().options().map, "DeltaSiegeDry");
    assert_eq!(
        battle.core().options().start_boxes,
        BoxLayout::NorthVsSouth.boxes().to_vec()
    );
}

#[test]
fn test_set_map_with_entry_uses_map_boxes() {
    let (mut battle, _) = offline_battle(vec![], two_players());

    battle.set_map("Red Comet Remake 1.8");

    assert_eq!(
        battle.core().options().start_boxes[1],
        StartBox::new(0.75, 0.0, 0.25, 1.0)
    );
}

#[test]
fn test_player_to_spectator() {
    let (mut battle, _) = offline_battle(
        vec![],
        vec![
            User::new(1, "alice").on_team(0, 0),
            User::new(2, "bob").on_team(1, 1),
            User::new(3, "carol").on_team(2, 2),
        ],
    );

    battle.player_to_spectator(2).unwrap();

    let core = battle.core();
    assert!(core.players().iter().all(|u| u.user_id != 2));
    assert!(core.spectators().iter().any(|u| u.user_id == 2));
    assert!(
        core.teams()
            .values()
            .flatten()
            .all(|p| p.as_user().is_none_or(|u| u.user_id != 2))
    );
    assert_eq!(team_keys(&battle), vec![0, 1]);
    assert_eq!(battle.core().user(3).unwrap().battle_status.team_id, 1);
    assert_dense(&battle);
}

#[test]
fn test_spectator_leaving_shared_team_keeps_numbering() {
    let (mut battle, _) = offline_battle(
        vec![],
        vec![
            User::new(1, "alice").on_team(0, 0),
            User::new(2, "bob").on_team(1, 1),
            User::new(3, "carol").on_team(1, 2),
        ],
    );

    battle.player_to_spectator(2).unwrap();

    assert_eq!(team_keys(&battle), vec![0, 1]);
    assert_eq!(battle.core().user(3).unwrap().battle_status.team_id, 1);
    assert_eq!(battle.core().user(3).unwrap().battle_status.player_id, 1);
}

#[test]
fn test_unknown_name_is_none() {
    let (battle, _) = offline_battle(vec![Bot::new("Bot 1", "BARb", 1, 0)], two_players());
    assert!(battle.get_participant_by_name("ghost").is_none());
}

#[test]
fn test_spectator_to_player() {
    let (mut battle, _) = offline_battle(
        vec![],
        vec![
            User::new(1, "alice").on_team(0, 0),
            User::new(2, "bob").spectating(),
        ],
    );

    battle.spectator_to_player(2, 4).unwrap();

    let bob = battle.core().user(2).unwrap();
    assert!(!bob.is_spectator());
    assert_eq!(bob.battle_status.team_id, 1);
    assert_eq!(team_keys(&battle), vec![0, 1]);
    assert_dense(&battle);
}

#[test]
fn test_set_contender_team_for_bot_and_user() {
    let (mut battle, _) = offline_battle(
        vec![Bot::new("Bot 1", "BARb", 1, 1).with_player_id(2)],
        two_players(),
    );

    battle
        .set_contender_team(&ParticipantId::Bot("Bot 1".into()), 0)
        .unwrap();
    assert_eq!(team_keys(&battle), vec![0, 1]);
    assert_eq!(battle.get_team_participants(0).len(), 2);

    battle.set_contender_team(&ParticipantId::User(2), 9).unwrap();
    assert_eq!(battle.core().user(2).unwrap().battle_status.team_id, 1);
    assert_dense(&battle);
}

#[test]
fn test_set_contender_team_unknown_targets() {
    let (mut battle, _) = offline_battle(vec![], two_players());

    assert_eq!(
        battle.set_contender_team(&ParticipantId::Bot("ghost".into()), 0),
        Err(BattleError::BotNotFound("ghost".into()))
    );
    assert_eq!(
        battle.set_contender_team(&ParticipantId::User(42), 0),
        Err(BattleError::UserNotFound(42))
    );
}

#[test]
fn test_remove_bot() {
    let (mut battle, _) = offline_battle(
        vec![
            Bot::new("Bot 1", "BARb", 1, 2).with_player_id(2),
            Bot::new("Bot 2", "BARb", 1, 3).with_player_id(3),
        ],
        two_players(),
    );

    let removed = battle.remove_bot("Bot 1").unwrap();

    assert_eq!(removed.name, "Bot 1");
    assert!(battle.core().bot("Bot 1").is_none());
    assert_eq!(battle.core().bot("Bot 2").unwrap().team_id, 2);
    assert_eq!(battle.core().bot("Bot 2").unwrap().player_id, 2);
}

#[test]
fn test_remove_missing_bot_is_error() {
    let (mut battle, _) = offline_battle(vec![Bot::new("Bot 1", "BARb", 1, 2)], two_players());

    assert_eq!(
        battle.remove_bot("ghost"),
        Err(BattleError::BotNotFound("ghost".into()))
    );
    assert_eq!(battle.core().bots().len(), 1);
}

#[test]
fn test_add_duplicate_bot_is_error() {
    let (mut battle, _) = offline_battle(vec![Bot::new("Bot 1", "BARb", 1, 2)], two_players());

    assert_eq!(
        battle.add_bot(Bot::new("Bot 1", "SimpleAI", 1, 0)),
        Err(BattleError::DuplicateBot("Bot 1".into()))
    );
    assert_eq!(battle.core().bots().len(), 1);
}

#[test]
fn test_set_bot_options() {
    let (mut battle, _) = offline_battle(vec![Bot::new("Bot 1", "BARb", 1, 2)], two_players());
    let options: OptionMap = [("profile".to_string(), json!("hard"))].into_iter().collect();

    battle.set_bot_options("Bot 1", options.clone()).unwrap();

    assert_eq!(battle.core().bot("Bot 1").unwrap().ai_options, options);
    assert_eq!(battle.core().bot_options()["Bot 1"], &options);
}

#[test]
fn test_set_bot_options_on_user_name_is_error() {
    let (mut battle, _) = offline_battle(vec![], two_players());

    assert_eq!(
        battle.set_bot_options("alice", OptionMap::new()),
        Err(BattleError::BotNotFound("alice".into()))
    );
}

#[test]
fn test_set_game_options_overwrites() {
    let (mut battle, _) = offline_battle(vec![], two_players());
    let first: OptionMap = [
        ("startmetal".to_string(), json!(1000)),
        ("fixedallies".to_string(), json!(true)),
    ]
    .into_iter()
    .collect();
    let second: OptionMap = [("startmetal".to_string(), json!(2000))].into_iter().collect();

    battle.set_game_options(first);
    battle.set_game_options(second.clone());

    assert_eq!(battle.core().options().game_options, second);
}

#[test]
fn test_option_setters() {
    let (mut battle, _) = offline_battle(vec![], two_players());
    let boxes = vec![StartBox::new(0.0, 0.0, 0.5, 0.5), StartBox::new(2.0, -1.0, 9.0, 9.0)];

    battle.set_start_pos_type(StartPosType::Random);
    battle.set_start_boxes(boxes.clone());
    battle.set_engine("105.1.1-2590");
    battle.set_game("byar:test-27000");

    let options = battle.core().options();
    assert_eq!(options.start_pos_type, StartPosType::Random);
    assert_eq!(options.start_boxes, boxes);
    assert_eq!(options.engine_version, "105.1.1-2590");
    assert_eq!(options.game_version, "byar:test-27000");
}

#[test]
fn test_open_watchers_follow_setters() {
    let (mut battle, fakes) = offline_battle(vec![], two_players());

    battle.set_engine("ignored-before-open");
    assert!(fakes.content.requests().is_empty());

    battle.open();
    battle.set_engine("105.1.1-2590");
    battle.set_game("byar:test");
    battle.set_map("DeltaSiegeDry");

    assert_eq!(
        fakes.content.requests(),
        vec![
            "engine:ignored-before-open",
            "game:byar:test",
            "map:Throne v8",
            "engine:105.1.1-2590",
            "map:DeltaSiegeDry",
        ]
    );
}

#[test]
fn test_start_hands_snapshot_to_launcher() {
    let (mut battle, fakes) = offline_battle(vec![Bot::new("Bot 1", "BARb", 1, 2)], two_players());

    battle.start();

    let launched = fakes.launcher.launched.lock().unwrap();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0], battle.core().snapshot());
}

#[test]
fn test_leave() {
    let (mut battle, fakes) = offline_battle(vec![], two_players());

    battle.leave();

    assert!(!*fakes.session.has_offline_battle.lock().unwrap());
    assert_eq!(*fakes.session.battle_id.lock().unwrap(), None);
    assert_eq!(fakes.router.route.lock().unwrap().as_deref(), Some("/home"));
}

#[test]
fn test_usable_as_trait_object() {
    let (battle, _) = offline_battle(vec![], two_players());
    let mut battle: Box<dyn Battle> = Box::new(battle);

    battle.add_bot(Bot::new("Bot 1", "BARb", 1, 7)).unwrap();

    assert_eq!(battle.core().teams().len(), 3);
}

#[test]
fn test_mixed_command_sequence_stays_dense() {
    let (mut battle, _) = offline_battle(
        vec![],
        vec![
            User::new(1, "alice").on_team(0, 0),
            User::new(2, "bob").on_team(1, 1),
            User::new(3, "carol").spectating(),
        ],
    );

    battle.add_bot(Bot::new("Bot 1", "BARb", 1, 8).with_player_id(8)).unwrap();
    assert_dense(&battle);
    battle.spectator_to_player(3, 6).unwrap();
    assert_dense(&battle);
    battle.player_to_spectator(1).unwrap();
    assert_dense(&battle);
    battle.set_contender_team(&ParticipantId::User(2), 11).unwrap();
    assert_dense(&battle);
    battle.remove_bot("Bot 1").unwrap();
    assert_dense(&battle);
    assert_unique_player_ids(&battle);

    let core = battle.core();
    assert_eq!(core.participants().len(), core.bots().len() + core.users().len());
    assert_eq!(
        core.contenders().len(),
        core.participants().len() - core.spectators().len()
    );
}
