use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SimulationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

/// Preferences that travel with the save
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub auto_save: bool,
    pub simulation_speed: SimulationSpeed,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { difficulty: Difficulty::Normal, auto_save: true, simulation_speed: SimulationSpeed::Normal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("Normal".parse::<Difficulty>(), Ok(Difficulty::Normal));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("legendary".parse::<Difficulty>().is_err());
    }
}
