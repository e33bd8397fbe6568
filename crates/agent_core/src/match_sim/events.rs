//! Per-player match effects and event attribution
//!
//! Every function works on indices into the world's player list and only ever
//! touches the eligible players it is given.

use crate::config::MatchConfig;
use crate::models::{MatchEvent, Personality, Player, Position};
use crate::random::{weighted_pick, GameRng};

/// Match rating in `[1, 10]`: `overall/10 + U(-1,1) + (morale-50)/100`
pub fn performance_rating(player: &Player, rng: &mut GameRng) -> f64 {
    let base = player.overall as f64 / 10.0;
    let noise = rng.float_range(-1.0, 1.0);
    let morale = (player.morale as f64 - 50.0) / 100.0;
    (base + noise + morale).clamp(1.0, 10.0)
}

/// Every eligible player is credited a match and a rating
pub fn rate_performances(players: &mut [Player], eligible: &[usize], rng: &mut GameRng) {
    for &idx in eligible {
        let rating = performance_rating(&players[idx], rng);
        players[idx].season.record_performance(rating);
    }
}

pub fn scorer_weight(player: &Player) -> f64 {
    let a = &player.attributes;
    match player.position {
        Position::Forward => a.finishing as f64 * 1.5 + a.dribbling as f64 * 0.5,
        Position::Midfielder => {
            a.finishing as f64 * 0.8 + a.dribbling as f64 * 0.3 + a.passing as f64 * 0.2
        }
        Position::Defender => a.finishing as f64 * 0.3 + a.defending as f64 * 0.1,
        Position::Goalkeeper => 1.0,
    }
}

pub fn assist_weight(player: &Player) -> f64 {
    let passing = player.attributes.passing as f64;
    match player.position {
        Position::Midfielder => passing * 1.5,
        Position::Forward => passing * 0.8,
        Position::Defender => passing * 0.4,
        Position::Goalkeeper => 0.0,
    }
}

/// Attribute one goal to a scorer and (maybe) an assister.
///
/// With no eligible scorer the goal still stands, unattributed.
pub fn attribute_goal(
    players: &mut [Player],
    eligible: &[usize],
    club: &str,
    config: &MatchConfig,
    rng: &mut GameRng,
) -> MatchEvent {
    let scorers: Vec<(usize, f64)> = eligible.iter().map(|&i| (i, scorer_weight(&players[i]))).collect();
    let Some(scorer) = weighted_pick(rng, &scorers) else {
        return MatchEvent::Goal { club: club.to_string(), scorer: None, assist: None };
    };
    players[scorer].season.goals += 1;

    let mut assist = None;
    if rng.chance(config.assist_chance) {
        let assisters: Vec<(usize, f64)> = eligible
            .iter()
            .filter(|&&i| i != scorer)
            .map(|&i| (i, assist_weight(&players[i])))
            .collect();
        if let Some(idx) = weighted_pick(rng, &assisters) {
            players[idx].season.assists += 1;
            assist = Some(players[idx].to_ref());
        }
    }

    MatchEvent::Goal { club: club.to_string(), scorer: Some(players[scorer].to_ref()), assist }
}

pub fn yellow_card_chance(player: &Player, config: &MatchConfig) -> f64 {
    let mut chance = config.yellow_base;
    if player.position == Position::Defender {
        chance += config.yellow_defender_bonus;
    }
    if player.personality == Personality::Controversial {
        chance += config.yellow_controversial_bonus;
    }
    chance
}

pub fn red_card_chance(player: &Player, config: &MatchConfig) -> f64 {
    let mut chance = config.red_base;
    if player.position == Position::Defender {
        chance += config.red_defender_bonus;
    }
    if player.personality == Personality::Controversial {
        chance += config.red_controversial_bonus;
    }
    chance
}

/// Yellow and red cards, rolled independently per player
pub fn resolve_discipline(
    players: &mut [Player],
    eligible: &[usize],
    club: &str,
    config: &MatchConfig,
    rng: &mut GameRng,
    events: &mut Vec<MatchEvent>,
) {
    for &idx in eligible {
        let player = &mut players[idx];

        if rng.chance(yellow_card_chance(player, config)) {
            player.season.yellow_cards += 1;
            if config.yellows_per_suspension > 0 && player.season.yellow_cards % config.yellows_per_suspension == 0 {
                player.suspension = player.suspension.saturating_add(1);
            }
            events.push(MatchEvent::YellowCard { club: club.to_string(), player: player.to_ref() });
        }

        if rng.chance(red_card_chance(player, config)) {
            player.season.red_cards += 1;
            player.suspension = player.suspension.saturating_add(config.red_suspension_matches);
            events.push(MatchEvent::RedCard { club: club.to_string(), player: player.to_ref() });
        }
    }
}

pub fn injury_chance(player: &Player, config: &MatchConfig) -> f64 {
    let mut chance = config.injury_base;
    if player.age > 30 {
        chance += (player.age - 30) as f64 * config.injury_per_year_over_30;
    }
    if player.form < 50 {
        chance += (50 - player.form) as f64 * config.injury_per_form_point_below_50;
    }
    chance
}

/// Weeks out: 60% 1-2, 30% 3-6, 10% 7-12
pub fn injury_duration(rng: &mut GameRng) -> u8 {
    let severity = rng.unit();
    let weeks = if severity < 0.6 {
        rng.int_inclusive(1, 2)
    } else if severity < 0.9 {
        rng.int_inclusive(3, 6)
    } else {
        rng.int_inclusive(7, 12)
    };
    weeks as u8
}

pub fn resolve_injuries(
    players: &mut [Player],
    eligible: &[usize],
    club: &str,
    config: &MatchConfig,
    rng: &mut GameRng,
    events: &mut Vec<MatchEvent>,
) {
    for &idx in eligible {
        if !rng.chance(injury_chance(&players[idx], config)) {
            continue;
        }
        let duration = injury_duration(rng);
        let player = &mut players[idx];
        player.injury = duration;
        events.push(MatchEvent::Injury { club: club.to_string(), player: player.to_ref(), duration });
    }
}

/// Every eligible keeper of a side that conceded nothing
pub fn credit_clean_sheets(players: &mut [Player], eligible: &[usize]) {
    for &idx in eligible {
        if players[idx].position == Position::Goalkeeper {
            players[idx].season.clean_sheets += 1;
        }
    }
}
