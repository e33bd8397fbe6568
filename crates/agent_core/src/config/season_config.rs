//! Season calendar parameters

use serde::{Deserialize, Serialize};

/// An inclusive range of weeks during which transfers are allowed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferWindow {
    pub first_week: u32,
    pub last_week: u32,
}

impl TransferWindow {
    pub fn contains(&self, week: u32) -> bool {
        (self.first_week..=self.last_week).contains(&week)
    }
}

/// How often contract years are counted down
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContractTick {
    /// One year is consumed every simulated week
    #[default]
    Weekly,
    /// One year is consumed at each season wrap
    Seasonal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AwardThresholds {
    pub golden_ball_matches: u32,
    pub golden_ball_rating: f64,
    pub golden_glove_matches: u32,
    pub young_player_max_age: u8,
    pub young_player_matches: u32,
    pub best_defender_matches: u32,
    pub team_of_season_matches: u32,
    pub top_scorer_entries: usize,
}

impl Default for AwardThresholds {
    fn default() -> Self {
        Self {
            golden_ball_matches: 20,
            golden_ball_rating: 7.0,
            golden_glove_matches: 15,
            young_player_max_age: 23,
            young_player_matches: 15,
            best_defender_matches: 20,
            team_of_season_matches: 20,
            top_scorer_entries: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeasonConfig {
    /// Week counter wraps after this week (default: 38)
    pub weeks_per_season: u32,
    pub transfer_windows: Vec<TransferWindow>,
    /// Clubs swapped between adjacent divisions each season
    pub promotion_slots: usize,
    pub awards: AwardThresholds,
    pub contract_tick: ContractTick,
    /// Overall a player must exceed for the club to attempt a renewal
    pub renewal_min_overall: u8,
    /// Base weekly chance of an unsolicited client offer
    pub offer_base_chance: f64,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            weeks_per_season: 38,
            transfer_windows: vec![
                TransferWindow { first_week: 1, last_week: 4 },
                TransferWindow { first_week: 20, last_week: 24 },
            ],
            promotion_slots: 3,
            awards: AwardThresholds::default(),
            contract_tick: ContractTick::Weekly,
            renewal_min_overall: 70,
            offer_base_chance: 0.1,
        }
    }
}

impl SeasonConfig {
    pub fn is_window_open(&self, week: u32) -> bool {
        self.transfer_windows.iter().any(|w| w.contains(week))
    }
}
