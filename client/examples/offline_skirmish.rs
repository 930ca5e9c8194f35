//! Offline Skirmish Example
//!
//! Opens an offline battle, fills it with bots on random teams, prints the
//! team layout after each change, then launches it against a handler that
//! pretends to download content.
//!
//! Run with `RUST_LOG=debug` to see watcher and renumbering events.

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rand::Rng;
use skirmish_battle::{Battle, BattleCore, Bot, Participant, User};
use skirmish_client::{
    BattleConfig, ContentHandler, LobbyClient, LobbyConfig, MapCatalogue, MapData,
};
use tracing_subscriber::EnvFilter;

struct FakeDownloader;

#[async_trait]
impl ContentHandler for FakeDownloader {
    async fn on_engine_install(&mut self, engine_version: &str) -> Result<()> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        println!("[content] engine {} ready", engine_version);
        Ok(())
    }

    async fn on_map_install(&mut self, script_name: &str) -> Result<Option<MapData>> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        println!("[content] map {} downloaded", script_name);
        Ok(Some(MapData::new(script_name, format!("{}.sd7", script_name))))
    }

    async fn on_launch(&mut self, battle: &BattleConfig) -> Result<()> {
        println!(
            "[launch] {} on {} with {} bots",
            battle.battle_options.game_version,
            battle.battle_options.map,
            battle.bots.len()
        );
        Ok(())
    }
}

fn print_teams(core: &BattleCore) {
    for (team, members) in core.teams() {
        let names: Vec<String> = members
            .iter()
            .map(|member| match member {
                Participant::Bot(bot) => format!("{} ({})", bot.name, bot.ai_short_name),
                Participant::User(user) => user.username.clone(),
            })
            .collect();
        println!("  Team {}: {}", team + 1, names.join(", "));
    }
    let spectators: Vec<&str> = core.spectators().iter().map(|u| u.username.as_str()).collect();
    if !spectators.is_empty() {
        println!("  Spectators: {}", spectators.join(", "));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => LobbyConfig::load(path)?,
        None => LobbyConfig::default(),
    };

    let local_user = User::new(1, "commander");
    let (client, mut receiver) = LobbyClient::new(config, local_user.clone(), MapCatalogue::new());
    client.session().register_user(User::new(2, "observer"));

    let worker = tokio::spawn(async move {
        let mut downloader = FakeDownloader;
        receiver.run(&mut downloader).await;
    });

    let shared = client.start_offline_battle()?;
    {
        let mut battle = shared
            .lock()
            .map_err(|_| anyhow!("Offline battle lock poisoned"))?;

        let mut rng = rand::thread_rng();
        for i in 1..=3 {
            let team = rng.gen_range(0..4);
            battle.add_bot(Bot::new(format!("Bot {}", i), "BARb", local_user.user_id, team))?;
        }
        println!("After adding bots:");
        print_teams(battle.core());

        battle.set_map("Isthmus v1.0");
        battle.player_to_spectator(local_user.user_id)?;
        println!("After spectating:");
        print_teams(battle.core());

        battle.start();
    }

    // Give the receiver time to work through the queue
    tokio::time::sleep(Duration::from_millis(300)).await;

    if let Ok(mut battle) = shared.lock() {
        battle.leave();
    }
    println!("Route after leaving: {:?}", client.router().current());

    drop(shared);
    drop(client);
    worker.await?;
    Ok(())
}
