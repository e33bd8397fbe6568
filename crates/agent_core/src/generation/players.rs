//! Player generation
//!
//! Attributes are `base(30-69) + quality + age adjustment`, where quality is
//! three summed uniforms (bell-shaped, 0-40) and the age adjustment peaks at
//! 30. Position adjustments are then applied and everything is clamped.

use super::data::name_pool;
use crate::models::{
    Attribute, Contract, Nationality, Personality, PlayStyle, Player, PlayerAttributes, PlayerId,
    Position, SeasonStats, FREE_AGENT,
};
use crate::random::GameRng;

/// Age drawn from the prime-biased mixture: 10% 17-19, 60% 20-29, 25% 30-34, 5% 35-37
pub fn roll_age(rng: &mut GameRng) -> u8 {
    let roll = rng.unit();
    let age = if roll < 0.1 {
        rng.int_inclusive(17, 19)
    } else if roll < 0.7 {
        rng.int_inclusive(20, 29)
    } else if roll < 0.95 {
        rng.int_inclusive(30, 34)
    } else {
        rng.int_inclusive(35, 37)
    };
    age as u8
}

/// 0 at 17, 30 at 30, tapering by 2 per year after
pub fn age_adjustment(age: u8) -> f64 {
    let age = age as f64;
    let factor = if age < 30.0 { (age - 17.0) / 13.0 } else { 1.0 - (age - 30.0) / 15.0 };
    factor * 30.0
}

fn roll_attribute(rng: &mut GameRng, adjustment: f64) -> i32 {
    let base = rng.int_inclusive(30, 69) as f64;
    let quality = ((rng.unit() + rng.unit() + rng.unit()) * 20.0).floor().clamp(0.0, 40.0);
    (base + quality + adjustment).floor().clamp(1.0, 99.0) as i32
}

fn position_adjustments(position: Position) -> &'static [(Attribute, i32)] {
    match position {
        Position::Goalkeeper => &[
            (Attribute::Goalkeeping, 20),
            (Attribute::Defending, 10),
            (Attribute::Finishing, -15),
            (Attribute::Dribbling, -15),
        ],
        Position::Defender => &[
            (Attribute::Defending, 15),
            (Attribute::Physical, 10),
            (Attribute::Finishing, -10),
        ],
        Position::Midfielder => &[
            (Attribute::Passing, 15),
            (Attribute::Technique, 10),
            (Attribute::Defending, 5),
        ],
        Position::Forward => &[
            (Attribute::Finishing, 15),
            (Attribute::Dribbling, 10),
            (Attribute::Speed, 5),
            (Attribute::Defending, -15),
        ],
    }
}

pub fn roll_attributes(rng: &mut GameRng, position: Position, age: u8) -> PlayerAttributes {
    let adjustment = age_adjustment(age);
    let mut attrs = PlayerAttributes::default();
    for attr in Attribute::ALL {
        let value = if attr == Attribute::Goalkeeping && !position.is_goalkeeper() {
            rng.int_inclusive(1, 20) as i32
        } else {
            roll_attribute(rng, adjustment)
        };
        attrs.set(attr, value as u8);
    }
    for &(attr, delta) in position_adjustments(position) {
        attrs.adjust(attr, delta);
    }
    attrs
}

/// Visible potential from one of three talent tiers (10/20/70%)
pub fn roll_potential(rng: &mut GameRng, overall: u8, age: u8) -> u8 {
    let overall_f = overall as f64;
    let boost = (30.0 - age as f64).max(0.0);
    let roll = rng.unit();
    let potential = if roll < 0.1 {
        overall_f + boost + rng.int_inclusive(0, 9) as f64 + 5.0
    } else if roll < 0.3 {
        overall_f + boost / 1.5 + rng.int_inclusive(0, 6) as f64 + 3.0
    } else {
        overall_f + boost / 2.0 + rng.int_inclusive(0, 4) as f64
    };
    potential.floor().min(99.0).max(overall_f) as u8
}

/// Hidden potential: potential ±5 jitter, never below overall
pub fn roll_hidden_potential(rng: &mut GameRng, overall: u8, potential: u8) -> u8 {
    let jitter = (rng.unit() * 10.0 - 5.0).floor() as i32;
    (potential as i32 + jitter).max(overall as i32).min(99) as u8
}

fn random_name(rng: &mut GameRng, nationality: Nationality) -> String {
    match name_pool(nationality) {
        Some(pool) => {
            let first = rng.pick(&pool.first).map(String::as_str).unwrap_or("Unknown");
            let last = rng.pick(&pool.last).map(String::as_str).unwrap_or("Player");
            format!("{} {}", first, last)
        }
        None => "Unknown Player".to_string(),
    }
}

/// Generate one unattached player. `club_names` feeds the flavour fields
/// (rivals, dream club, origin club).
pub fn generate_player(id: PlayerId, rng: &mut GameRng, club_names: &[String]) -> Player {
    let nationality = *rng.pick(&Nationality::ALL).unwrap_or(&Nationality::Brazil);
    let name = random_name(rng, nationality);
    let position = *rng.pick(&Position::ALL).unwrap_or(&Position::Midfielder);
    let age = roll_age(rng);
    let personality = *rng.pick(&Personality::ALL).unwrap_or(&Personality::Professional);
    let play_style = *rng.pick(&PlayStyle::ALL).unwrap_or(&PlayStyle::Balanced);

    let attributes = roll_attributes(rng, position, age);

    let mut player = Player {
        id,
        name,
        nationality,
        position,
        age,
        attributes,
        overall: 0,
        potential: 0,
        hidden_potential: 0,
        value: 0.0,
        salary: 0.0,
        contract: Contract { years_remaining: 0, release_clause: 0.0 },
        club: FREE_AGENT.to_string(),
        agent: None,
        personality,
        play_style,
        popularity: rng.int_inclusive(1, 100) as u8,
        loyalty: rng.int_inclusive(1, 100) as u8,
        respect: 50,
        rival_clubs: rng.sample(club_names, 2),
        dream_club: rng.pick(club_names).cloned().unwrap_or_default(),
        origin_club: rng.pick(club_names).cloned().unwrap_or_default(),
        season: SeasonStats::default(),
        injury: 0,
        suspension: 0,
        morale: rng.int_inclusive(50, 99) as u8,
        form: 0,
        development_plan: None,
    };

    player.recalculate_overall();
    player.potential = roll_potential(rng, player.overall, age);
    player.hidden_potential = roll_hidden_potential(rng, player.overall, player.potential);
    player.refresh_market_value();
    player.contract = Contract {
        years_remaining: rng.int_inclusive(1, 5) as u8,
        release_clause: player.value * rng.float_range(1.5, 2.5),
    };
    player
}

/// Generate `count` players with ids `1..=count`
pub fn generate_players(count: usize, rng: &mut GameRng, club_names: &[String]) -> Vec<Player> {
    (1..=count as PlayerId).map(|id| generate_player(id, rng, club_names)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PositionWeights;

    fn clubs() -> Vec<String> {
        vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()]
    }

    #[test]
    fn test_age_mixture_bounds() {
        let mut rng = GameRng::seeded(31);
        let ages: Vec<u8> = (0..5000).map(|_| roll_age(&mut rng)).collect();
        assert!(ages.iter().all(|a| (17..=37).contains(a)));
        let prime = ages.iter().filter(|a| (20..=29).contains(*a)).count() as f64 / 5000.0;
        assert!((prime - 0.6).abs() < 0.04, "prime share {}", prime);
    }

    #[test]
    fn test_age_adjustment_peaks_at_thirty() {
        assert_eq!(age_adjustment(17), 0.0);
        assert_eq!(age_adjustment(30), 30.0);
        assert!(age_adjustment(37) < age_adjustment(30));
        assert!(age_adjustment(25) < age_adjustment(30));
    }

    #[test]
    fn test_generated_player_invariants() {
        let mut rng = GameRng::seeded(32);
        let players = generate_players(500, &mut rng, &clubs());
        for (idx, player) in players.iter().enumerate() {
            assert_eq!(player.id as usize, idx + 1);
            let expected = PositionWeights::get_for_position(player.position).overall(&player.attributes);
            assert_eq!(player.overall, expected);
            assert!(player.potential >= player.overall);
            assert!(player.hidden_potential >= player.overall);
            assert!(player.hidden_potential <= 99);
            assert!((1..=5).contains(&player.contract.years_remaining));
            assert!(player.contract.release_clause >= player.value * 1.5 - 1e-6);
            assert!((50..=99).contains(&player.morale));
            assert_eq!(player.form, 0);
            assert_eq!(player.rival_clubs.len(), 2);
            assert!((player.salary - player.value * 0.05).abs() < 1e-6);
            if !player.position.is_goalkeeper() {
                assert!(player.attributes.goalkeeping <= 20);
            }
        }
    }

    #[test]
    fn test_same_seed_same_players() {
        let a = generate_players(50, &mut GameRng::seeded(33), &clubs());
        let b = generate_players(50, &mut GameRng::seeded(33), &clubs());
        assert_eq!(a, b);
    }
}
