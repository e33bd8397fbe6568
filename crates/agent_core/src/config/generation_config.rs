//! World generation parameters

use crate::models::{Division, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Size of the player pool (default: 2000)
    pub player_count: usize,
    /// Squad cap for division 1/2/3 clubs during distribution
    pub squad_caps: [usize; 3],
    /// Minimum keepers/defenders/midfielders/forwards per club
    pub position_minimums: [usize; 4],
    /// Weakest unrepresented players handed to the agent at start
    pub starting_clients: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            player_count: 2000,
            squad_caps: [25, 22, 20],
            position_minimums: [2, 6, 6, 4],
            starting_clients: 2,
        }
    }
}

impl GenerationConfig {
    pub fn squad_cap(&self, division: Division) -> usize {
        self.squad_caps[division.index()]
    }

    pub fn position_minimum(&self, position: Position) -> usize {
        self.position_minimums[position.index()]
    }
}
