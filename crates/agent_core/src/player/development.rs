//! Season-end player development
//!
//! A development factor is built from the player's (new) age, season rating
//! and playing time. The overall moves by that factor:
//! - growth stops once the overall reaches the hidden potential
//! - decline never takes the overall below 50
//! - every attribute also takes a nudge of `factor × 0.7 × U(0,1)`
//! - a development-plan attribute gets an extra flat +1..3
//!
//! The position-weighted attributes are then stepped until the derived
//! overall lands on its target, so the overall stays derivable.

use std::cmp::{Ordering, Reverse};

use crate::models::{Attribute, Player};
use crate::player::position_weights::PositionWeights;
use crate::random::GameRng;

/// Overall a declining player is never pushed below
pub const DECLINE_FLOOR: u8 = 50;

#[derive(Debug)]
pub struct DevelopmentCalculator;

impl DevelopmentCalculator {
    /// Age term, evaluated after the birthday
    pub fn age_term(age: u8) -> f64 {
        match age {
            a if a < 23 => 3.0,
            a if a < 28 => 1.0,
            a if a < 32 => 0.5,
            a => -((a as f64) - 31.0) * 0.5,
        }
    }

    pub fn performance_term(average_performance: f64) -> f64 {
        if average_performance > 7.5 {
            2.0
        } else if average_performance > 6.5 {
            1.0
        } else {
            0.0
        }
    }

    pub fn playing_time_term(matches_played: u32) -> f64 {
        if matches_played > 30 {
            1.0
        } else if matches_played > 20 {
            0.5
        } else if matches_played < 10 {
            -1.0
        } else {
            0.0
        }
    }

    pub fn development_factor(age: u8, average_performance: f64, matches_played: u32) -> f64 {
        Self::age_term(age)
            + Self::performance_term(average_performance)
            + Self::playing_time_term(matches_played)
    }

    /// Overall the player should end the season on.
    ///
    /// The factor is rounded away from zero, so a half-point factor still
    /// moves the overall by one. Growth stops at the hidden potential and
    /// decline stops at the floor.
    pub fn target_overall(overall: u8, hidden_potential: u8, factor: f64) -> u8 {
        let delta = factor.round() as i32;
        let current = overall as i32;
        if delta > 0 {
            if overall >= hidden_potential {
                return overall;
            }
            (current + delta).min(hidden_potential as i32).min(99) as u8
        } else if delta < 0 {
            let floor = DECLINE_FLOOR.min(overall) as i32;
            (current + delta).max(floor) as u8
        } else {
            overall
        }
    }

    /// Age the player one year and develop them from this season's counters.
    ///
    /// Must run before the season counters are cleared.
    pub fn progress_season(player: &mut Player, rng: &mut GameRng) {
        player.age = player.age.saturating_add(1);
        let factor = Self::development_factor(
            player.age,
            player.season.average_performance,
            player.season.matches_played,
        );

        if let Some(plan) = player.development_plan {
            let bonus = rng.int_inclusive(1, 3) as i32;
            player.attributes.adjust(plan, bonus);
            player.recalculate_overall();
        }

        let target = Self::target_overall(player.overall, player.hidden_potential, factor);
        if factor != 0.0 {
            for attr in Attribute::ALL {
                let delta = (factor * 0.7 * rng.unit()).round() as i32;
                player.attributes.adjust(attr, delta);
            }
        }
        Self::settle_overall(player, target);

        player.potential = player.potential.max(player.overall);
        player.recalculate_all();
    }

    /// Step the position-weighted attributes one point at a time until the
    /// derived overall equals `target`.
    ///
    /// No weight reaches the total, so one step never moves the overall by
    /// more than one. Raising picks the lowest weighted attribute, lowering
    /// the highest, leaving the development-plan attribute alone. Stops early
    /// only when no attribute can move.
    fn settle_overall(player: &mut Player, target: u8) {
        let weights = PositionWeights::get_for_position(player.position);
        let weighted: Vec<Attribute> =
            Attribute::ALL.iter().copied().filter(|&attr| weights.weight_of(attr) > 0).collect();
        let plan = player.development_plan;

        loop {
            player.recalculate_overall();
            let attrs = &player.attributes;
            let step = match player.overall.cmp(&target) {
                Ordering::Equal => return,
                Ordering::Less => weighted
                    .iter()
                    .copied()
                    .filter(|&attr| attrs.get(attr) < 99)
                    .min_by_key(|&attr| (attrs.get(attr), Reverse(weights.weight_of(attr))))
                    .map(|attr| (attr, 1)),
                Ordering::Greater => weighted
                    .iter()
                    .copied()
                    .filter(|&attr| attrs.get(attr) > 1 && Some(attr) != plan)
                    .max_by_key(|&attr| (attrs.get(attr), weights.weight_of(attr)))
                    .map(|attr| (attr, -1)),
            };
            let Some((attr, delta)) = step else {
                return;
            };
            player.attributes.adjust(attr, delta);
        }
    }
}
