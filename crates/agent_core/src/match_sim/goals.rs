//! Scoreline model: perturbed strengths → Poisson rates → goals, plus the
//! rare upset that piles extra goals onto one side.

use crate::config::MatchConfig;
use crate::random::GameRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

/// Poisson rate for each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedGoals {
    pub home: f64,
    pub away: f64,
}

/// Perturb both strengths into attack/defence ratings and derive the rates.
///
/// `rate = max(attack / (attack + opposing defence) × average × multiplier, minimum)`
pub fn expected_goals(home_strength: f64, away_strength: f64, config: &MatchConfig, rng: &mut GameRng) -> ExpectedGoals {
    let (home_lo, home_hi) = config.home_form_range;
    let (away_lo, away_hi) = config.away_form_range;

    let home_attack = home_strength * rng.float_range(home_lo, home_hi);
    let home_defense = home_strength * rng.float_range(home_lo, home_hi);
    let away_attack = away_strength * rng.float_range(away_lo, away_hi);
    let away_defense = away_strength * rng.float_range(away_lo, away_hi);

    ExpectedGoals {
        home: rate(home_attack, away_defense, config.league_average_goals * config.home_advantage, config.minimum_rate),
        away: rate(away_attack, home_defense, config.league_average_goals * config.away_penalty, config.minimum_rate),
    }
}

fn rate(attack: f64, defense: f64, scale: f64, minimum: f64) -> f64 {
    let total = attack + defense;
    if total <= 0.0 || !total.is_finite() {
        return minimum;
    }
    (attack / total * scale).max(minimum)
}

/// Upper bound on draws per Poisson sample
const MAX_POISSON_DRAWS: u32 = 64;

/// Poisson-distributed integer by the product-of-uniforms method: multiply
/// uniform draws until the product falls to `e^-λ`; the count minus one is
/// the sample.
pub fn poisson(lambda: f64, rng: &mut GameRng) -> u32 {
    if !lambda.is_finite() || lambda <= 0.0 {
        return 0;
    }
    let limit = (-lambda).exp();
    let mut product = 1.0;
    let mut draws = 0;
    loop {
        draws += 1;
        product *= rng.unit();
        if product <= limit || draws >= MAX_POISSON_DRAWS {
            break;
        }
    }
    draws - 1
}

/// Injected variance: with `upset_chance` one random side gets 2-5 extra goals
pub fn roll_upset(config: &MatchConfig, rng: &mut GameRng) -> Option<(Side, u32)> {
    if !rng.chance(config.upset_chance) {
        return None;
    }
    let (lo, hi) = config.upset_goals;
    let extra = rng.int_inclusive(lo as i64, hi as i64) as u32;
    let side = if rng.chance(0.5) { Side::Home } else { Side::Away };
    Some((side, extra))
}

/// Draw the final score for two strengths
pub fn draw_score(home_strength: f64, away_strength: f64, config: &MatchConfig, rng: &mut GameRng) -> (u32, u32) {
    let rates = expected_goals(home_strength, away_strength, config, rng);
    let mut home = poisson(rates.home, rng);
    let mut away = poisson(rates.away, rng);
    match roll_upset(config, rng) {
        Some((Side::Home, extra)) => home += extra,
        Some((Side::Away, extra)) => away += extra,
        None => {}
    }
    (home, away)
}
