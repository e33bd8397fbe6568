use super::nation::Nationality;
use super::player::PlayStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Division {
    First,
    Second,
    Third,
}

impl Division {
    pub const ALL: [Division; 3] = [Division::First, Division::Second, Division::Third];

    pub fn index(&self) -> usize {
        match self {
            Division::First => 0,
            Division::Second => 1,
            Division::Third => 2,
        }
    }

    /// 1-based division number used in league names
    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inclusive bounds of club strength in this division
    pub fn strength_band(&self) -> (f64, f64) {
        match self {
            Division::First => (70.0, 99.0),
            Division::Second => (60.0, 85.0),
            Division::Third => (50.0, 75.0),
        }
    }

    /// Strength of a club without any player
    pub fn fallback_strength(&self) -> f64 {
        match self {
            Division::First => 75.0,
            Division::Second => 65.0,
            Division::Third => 55.0,
        }
    }

    /// Budget range in millions
    pub fn budget_range(&self) -> (f64, f64) {
        match self {
            Division::First => (50.0, 500.0),
            Division::Second => (10.0, 100.0),
            Division::Third => (1.0, 20.0),
        }
    }

    /// The division below, if any
    pub fn lower(&self) -> Option<Division> {
        match self {
            Division::First => Some(Division::Second),
            Division::Second => Some(Division::Third),
            Division::Third => None,
        }
    }

    /// The division above, if any
    pub fn higher(&self) -> Option<Division> {
        match self {
            Division::First => None,
            Division::Second => Some(Division::First),
            Division::Third => Some(Division::Second),
        }
    }

    /// Division for the n-th club (0-based) of a country's ordered club list
    pub fn for_rank(rank: usize) -> Division {
        match rank {
            0..=9 => Division::First,
            10..=19 => Division::Second,
            _ => Division::Third,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Division {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CoachExperience {
    Experienced,
    Beginner,
    Veteran,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssistantQuality {
    Good,
    Regular,
    Beginner,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ManagerStyle {
    Efficient,
    Bureaucratic,
    Charismatic,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MarketingLevel {
    Expert,
    Regular,
    Beginner,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Formation {
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "4-2-3-1")]
    F4231,
}

impl Formation {
    pub const ALL: [Formation; 4] = [Formation::F433, Formation::F442, Formation::F352, Formation::F4231];

    pub fn label(&self) -> &'static str {
        match self {
            Formation::F433 => "4-3-3",
            Formation::F442 => "4-4-2",
            Formation::F352 => "3-5-2",
            Formation::F4231 => "4-2-3-1",
        }
    }
}

/// Backroom staff; flavour only, never read by the strength model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Staff {
    pub coach: CoachExperience,
    pub assistant_coach: AssistantQuality,
    pub manager: ManagerStyle,
    pub scouts: u8,
    pub physios: u8,
    pub psychologists: u8,
    pub fitness_coaches: u8,
    pub marketing: MarketingLevel,
}

/// Facility levels, 1-5 each
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facilities {
    pub stadium: u8,
    pub training_center: u8,
    pub medical_center: u8,
    pub youth_academy: u8,
}

/// A club. Season totals (points, goals) are not stored here; they are read
/// from the club's league-table row through `WorldState::club_totals`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Club {
    pub name: String,
    pub country: Nationality,
    pub division: Division,
    pub budget: f64,
    /// Budget the club is reset to at each season start
    pub base_budget: f64,
    /// Prestige tier 1-10
    pub fame: u8,
    pub popularity: u8,
    /// Competitive strength, bounded by the division band
    pub strength: f64,
    pub staff: Staff,
    pub facilities: Facilities,
    pub play_style: PlayStyle,
    pub formation: Formation,
}

impl Club {
    /// League key, e.g. "Spain Division 1"
    pub fn league(&self) -> String {
        super::league::league_name(self.country, self.division)
    }
}
