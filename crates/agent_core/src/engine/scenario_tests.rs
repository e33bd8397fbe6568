//! Whole-engine behaviour: new game, transfers, training, contracts, the
//! season wrap and persistence, driven through [`Engine`].

use super::*;
use crate::models::{MatchEvent, FREE_AGENT};
use crate::player::PositionWeights;
use crate::save::{self, MemorySaveStore};

fn engine(seed: u64) -> Engine {
    Engine::with_seed(EngineConfig::testing(), seed)
}

fn new_game(seed: u64) -> (Engine, WorldState) {
    let mut engine = engine(seed);
    let world = engine.initialize_new_game("Test", Difficulty::Normal);
    (engine, world)
}

/// A club with players on its books and some other club to buy from it
fn two_clubs(world: &WorldState) -> (String, String) {
    let seller = world.players.iter().find(|p| world.club(&p.club).is_some()).map(|p| p.club.clone()).unwrap();
    let buyer = world.clubs.iter().find(|c| c.name != seller).map(|c| c.name.clone()).unwrap();
    (seller, buyer)
}

#[test]
fn new_game_starts_agent_with_two_clients() {
    let (_, world) = new_game(1);

    assert_eq!(world.agent.balance, 100_000.0);
    assert_eq!(world.agent.clients.len(), 2);
    assert_eq!((world.week, world.season), (1, 1));
    assert!(world.transfer_window);
    // welcome plus one per starting client
    assert_eq!(world.notifications.len(), 3);
    for &id in &world.agent.clients {
        assert_eq!(world.player(id).unwrap().agent.as_deref(), Some("Test"));
    }
}

#[test]
fn transfer_over_budget_changes_nothing() {
    let (mut engine, mut world) = new_game(2);
    let (seller, buyer) = two_clubs(&world);
    world.club_mut(&buyer).unwrap().budget = 10_000_000.0;
    let seller_budget = world.club(&seller).unwrap().budget;
    let player = world.players_of(&seller).next().unwrap().id;

    let outcome = engine.transfer_player(&mut world, player, &buyer, 15_000_000.0);

    assert!(!outcome.success);
    assert_eq!(world.club(&buyer).unwrap().budget, 10_000_000.0);
    assert_eq!(world.club(&seller).unwrap().budget, seller_budget);
    assert_eq!(world.player(player).unwrap().club, seller);
}

#[test]
fn closed_window_rejects_transfer_untouched() {
    let (mut engine, mut world) = new_game(3);
    world.transfer_window = false;
    let (seller, buyer) = two_clubs(&world);
    let player = world.players_of(&seller).next().unwrap().id;
    let before = world.clone();

    let outcome = engine.transfer_player(&mut world, player, &buyer, 1_000.0);

    assert!(!outcome.success);
    assert!(outcome.message.contains("Transfer window is closed"));
    assert_eq!(world, before);
}

#[test]
fn expiring_weak_player_becomes_free_agent() {
    let (mut engine, mut world) = new_game(4);
    for p in &mut world.players {
        p.contract.years_remaining = 5;
    }
    let idx = world.players.iter().position(|p| p.overall <= 70 && world.club(&p.club).is_some()).unwrap();
    world.players[idx].contract.years_remaining = 1;
    let id = world.players[idx].id;

    engine.simulate_week(&mut world).unwrap();

    let player = world.player(id).unwrap();
    assert_eq!(player.club, FREE_AGENT);
    assert_eq!(player.contract.years_remaining, 0);
}

#[test]
fn training_raises_attribute_and_charges_agent() {
    let (mut engine, mut world) = new_game(5);
    let id = world.agent.clients[0];
    world.player_mut(id).unwrap().attributes.set(Attribute::Passing, 95);

    let outcome = engine.train_player(&mut world, id, Attribute::Passing, TrainingIntensity::Normal);

    assert!(outcome.success);
    assert_eq!(world.player(id).unwrap().attributes.passing, 97);
    assert_eq!(world.agent.balance, 90_000.0);
}

#[test]
fn transfer_conserves_budgets() {
    let (mut engine, mut world) = new_game(6);
    let (seller, buyer) = two_clubs(&world);
    world.club_mut(&buyer).unwrap().budget = 50_000_000.0;
    let before: Vec<f64> = world.clubs.iter().map(|c| c.budget).collect();
    let player = world.players_of(&seller).next().unwrap().id;

    let outcome = engine.transfer_player(&mut world, player, &buyer, 2_000_000.0);
    assert!(outcome.success, "{}", outcome.message);

    for (club, old) in world.clubs.iter().zip(before) {
        let expected = if club.name == buyer {
            old - 2_000_000.0
        } else if club.name == seller {
            old + 0.95 * 2_000_000.0
        } else {
            old
        };
        assert!((club.budget - expected).abs() < 1e-6, "{}", club.name);
    }
}

#[test]
fn recruit_twice_keeps_one_entry() {
    let (mut engine, mut world) = new_game(7);
    let id = world.agent.clients[1];
    engine.recruit_player(&mut world, id);
    engine.recruit_player(&mut world, id);
    assert_eq!(world.agent.clients.iter().filter(|&&c| c == id).count(), 1);
}

#[test]
fn week_wrap_runs_one_season_close() {
    let (mut engine, mut world) = new_game(8);
    world.week = engine.config().season.weeks_per_season;
    let ages: Vec<u8> = world.players.iter().map(|p| p.age).collect();

    let summary = engine.simulate_week(&mut world).unwrap();

    assert_eq!((summary.week, summary.season), (1, 2));
    assert_eq!(world.award_history.len(), 1);
    for (player, age) in world.players.iter().zip(ages) {
        assert_eq!(player.age, age + 1);
    }
    // the new season's tables only hold this week's results
    assert!(world.leagues.values().flatten().all(|row| row.played <= 1));
}

#[test]
fn invariants_hold_over_many_weeks() {
    let (mut engine, mut world) = new_game(9);
    for _ in 0..10 {
        let injured: Vec<PlayerId> =
            world.players.iter().filter(|p| p.injury > 0 || p.suspension > 0).map(|p| p.id).collect();

        let summary = engine.simulate_week(&mut world).unwrap();

        for fixture in &summary.fixtures {
            let result = fixture.result.as_ref().unwrap();
            for event in &result.events {
                if matches!(event, MatchEvent::Injury { .. }) {
                    continue;
                }
                for player in event.involved_players() {
                    assert!(!injured.contains(&player.id), "unavailable player {} took part", player.name);
                }
            }
        }
        assert!(world.leagues.values().flatten().all(|row| row.points == 3 * row.wins + row.draws));
    }
    for player in &world.players {
        let expected = PositionWeights::get_for_position(player.position).overall(&player.attributes);
        assert_eq!(player.overall, expected, "{}", player.name);
    }
}

#[test]
fn failed_week_leaves_world_untouched() {
    let (mut engine, mut world) = new_game(10);
    world.leagues.clear();
    let before = world.clone();

    assert!(engine.simulate_week(&mut world).is_err());
    assert_eq!(world, before);
}

#[test]
fn same_seed_same_career() {
    let (mut a, mut world_a) = new_game(11);
    let (mut b, mut world_b) = new_game(11);
    for _ in 0..3 {
        let sa = a.simulate_week(&mut world_a).unwrap();
        let sb = b.simulate_week(&mut world_b).unwrap();
        assert_eq!(sa.fixtures, sb.fixtures);
    }
    assert_eq!(world_a.leagues, world_b.leagues);
    assert_eq!(world_a.agent, world_b.agent);
}

#[test]
fn persistence_roundtrip_after_play() {
    let mut engine = engine(12).with_store(Box::new(MemorySaveStore::new()));
    assert!(engine.load_game().is_none());

    let mut world = engine.initialize_new_game("Test", Difficulty::Normal);
    assert_eq!(engine.load_game().as_ref(), Some(&world));

    let (seller, buyer) = two_clubs(&world);
    world.club_mut(&buyer).unwrap().budget = 90_000_000.0;
    let player = world.players_of(&seller).next().unwrap().id;
    engine.transfer_player(&mut world, player, &buyer, 5_000_000.0);
    for _ in 0..3 {
        engine.simulate_week(&mut world).unwrap();
    }

    // autosave kept the store in step
    assert_eq!(engine.load_game().as_ref(), Some(&world));

    let json = save::world_to_json(&world).unwrap();
    assert_eq!(save::world_from_json(&json).unwrap(), world);
}

#[test]
fn autosave_off_skips_store() {
    let mut engine = engine(13).with_store(Box::new(MemorySaveStore::new()));
    let mut world = engine.initialize_new_game("Test", Difficulty::Easy);
    world.settings.auto_save = false;
    let stored = engine.load_game().unwrap();

    engine.simulate_week(&mut world).unwrap();
    assert_eq!(engine.load_game().unwrap(), stored);

    assert!(engine.save_game(&world));
    assert_eq!(engine.load_game().unwrap(), world);
}

#[test]
fn mark_notification_read() {
    let (mut engine, mut world) = new_game(14);
    let id = world.notifications.last().unwrap().id;
    assert!(engine.mark_notification_read(&mut world, id));
    assert!(!engine.mark_notification_read(&mut world, 9_999));
    assert_eq!(world.notifications.unread_count(), 2);

    engine.mark_all_notifications_read(&mut world);
    assert_eq!(world.notifications.unread_count(), 0);
}
