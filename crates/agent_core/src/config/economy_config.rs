//! Money flow parameters

use crate::models::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EconomyConfig {
    /// Share of the fee the selling club keeps (the rest is fees/taxes)
    pub seller_share: f64,
    /// Agent commission on a client's transfer fee
    pub commission_rate: f64,
    pub starting_balance_easy: f64,
    pub starting_balance_normal: f64,
    pub starting_balance_hard: f64,
    /// Starting agent reputation (0-100)
    pub starting_reputation: f64,
    /// Training session cost for light/normal/intense sessions
    pub training_costs: [f64; 3],
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            seller_share: 0.95,
            commission_rate: 0.08,
            starting_balance_easy: 250_000.0,
            starting_balance_normal: 100_000.0,
            starting_balance_hard: 50_000.0,
            starting_reputation: 15.0,
            training_costs: [5_000.0, 10_000.0, 20_000.0],
        }
    }
}

impl EconomyConfig {
    pub fn starting_balance(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.starting_balance_easy,
            Difficulty::Normal => self.starting_balance_normal,
            Difficulty::Hard => self.starting_balance_hard,
        }
    }
}
