//! Position-specific weighting for overall rating
//!
//! Weights are integer hundredths so the overall is an exact floor division:
//! - GK: goalkeeping 40, defending 20, passing/speed/physical/technique 10
//! - DF: defending 35, physical 20, speed 15, passing 15, technique 10, finishing/dribbling 5
//! - MF: passing 30, technique 20, dribbling 20, speed 10, defending 10, physical/finishing 5
//! - FW: finishing 40, dribbling 20, speed 20, technique 10, passing/physical 5
//!
//! Decision and composure carry no weight for any position.

use crate::models::{Attribute, PlayerAttributes, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionWeights {
    pub finishing: u32,
    pub passing: u32,
    pub dribbling: u32,
    pub defending: u32,
    pub speed: u32,
    pub physical: u32,
    pub technique: u32,
    pub goalkeeping: u32,
}

impl PositionWeights {
    pub fn get_for_position(position: Position) -> Self {
        match position {
            Position::Goalkeeper => Self {
                finishing: 0,
                passing: 10,
                dribbling: 0,
                defending: 20,
                speed: 10,
                physical: 10,
                technique: 10,
                goalkeeping: 40,
            },
            Position::Defender => Self {
                finishing: 5,
                passing: 15,
                dribbling: 5,
                defending: 35,
                speed: 15,
                physical: 20,
                technique: 10,
                goalkeeping: 0,
            },
            Position::Midfielder => Self {
                finishing: 5,
                passing: 30,
                dribbling: 20,
                defending: 10,
                speed: 10,
                physical: 5,
                technique: 20,
                goalkeeping: 0,
            },
            Position::Forward => Self {
                finishing: 40,
                passing: 5,
                dribbling: 20,
                defending: 0,
                speed: 20,
                physical: 5,
                technique: 10,
                goalkeeping: 0,
            },
        }
    }

    pub fn weight_of(&self, attr: Attribute) -> u32 {
        match attr {
            Attribute::Finishing => self.finishing,
            Attribute::Passing => self.passing,
            Attribute::Dribbling => self.dribbling,
            Attribute::Defending => self.defending,
            Attribute::Speed => self.speed,
            Attribute::Physical => self.physical,
            Attribute::Technique => self.technique,
            Attribute::Goalkeeping => self.goalkeeping,
            Attribute::Decision | Attribute::Composure => 0,
        }
    }

    /// Get total weight sum for normalization
    pub fn total_weight(&self) -> u32 {
        Attribute::ALL.iter().map(|&attr| self.weight_of(attr)).sum()
    }

    pub fn weighted_sum(&self, attrs: &PlayerAttributes) -> u32 {
        Attribute::ALL.iter().map(|&attr| attrs.get(attr) as u32 * self.weight_of(attr)).sum()
    }

    /// `floor(weighted_sum / total_weight)`
    pub fn overall(&self, attrs: &PlayerAttributes) -> u8 {
        let total = self.total_weight();
        if total == 0 {
            return 0;
        }
        (self.weighted_sum(attrs) / total).min(99) as u8
    }
}
