//! Match simulation parameters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    // === Expected goals ===
    /// Average goals per match (default: 2.7)
    pub league_average_goals: f64,
    /// Home rate multiplier (default: 1.2)
    pub home_advantage: f64,
    /// Away rate multiplier (default: 0.8)
    pub away_penalty: f64,
    /// Home strength perturbation range
    pub home_form_range: (f64, f64),
    /// Away strength perturbation range, slightly penalized
    pub away_form_range: (f64, f64),
    /// Floor for each Poisson rate
    pub minimum_rate: f64,

    // === Upsets ===
    pub upset_chance: f64,
    /// Inclusive bonus-goal range added to one side on an upset
    pub upset_goals: (u8, u8),

    // === Attribution ===
    pub assist_chance: f64,

    // === Discipline ===
    pub yellow_base: f64,
    pub yellow_defender_bonus: f64,
    pub yellow_controversial_bonus: f64,
    /// Every n-th accumulated yellow adds one match of suspension
    pub yellows_per_suspension: u32,
    pub red_base: f64,
    pub red_defender_bonus: f64,
    pub red_controversial_bonus: f64,
    pub red_suspension_matches: u8,

    // === Injuries ===
    pub injury_base: f64,
    /// Added per year of age above 30
    pub injury_per_year_over_30: f64,
    /// Added per point of form below 50
    pub injury_per_form_point_below_50: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            league_average_goals: 2.7,
            home_advantage: 1.2,
            away_penalty: 0.8,
            home_form_range: (0.85, 1.15),
            away_form_range: (0.80, 1.10),
            minimum_rate: 0.1,

            upset_chance: 0.05,
            upset_goals: (2, 5),

            assist_chance: 0.7,

            yellow_base: 0.08,
            yellow_defender_bonus: 0.04,
            yellow_controversial_bonus: 0.03,
            yellows_per_suspension: 3,
            red_base: 0.01,
            red_defender_bonus: 0.005,
            red_controversial_bonus: 0.01,
            red_suspension_matches: 2,

            injury_base: 0.02,
            injury_per_year_over_30: 0.002,
            injury_per_form_point_below_50: 0.0004,
        }
    }
}
