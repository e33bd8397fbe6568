use super::nation::Nationality;
use crate::player::position_weights::PositionWeights;
use crate::player::valuation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type PlayerId = u32;

/// Club value of a player without a contract
pub const FREE_AGENT: &str = "Free Agent";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] =
        [Position::Goalkeeper, Position::Defender, Position::Midfielder, Position::Forward];

    pub fn index(&self) -> usize {
        match self {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        }
    }

    pub fn short_code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, Position::Defender)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.short_code())
    }
}

/// The ten trainable player attributes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Finishing,
    Passing,
    Dribbling,
    Defending,
    Speed,
    Physical,
    Technique,
    Goalkeeping,
    Decision,
    Composure,
}

impl Attribute {
    pub const ALL: [Attribute; 10] = [
        Attribute::Finishing,
        Attribute::Passing,
        Attribute::Dribbling,
        Attribute::Defending,
        Attribute::Speed,
        Attribute::Physical,
        Attribute::Technique,
        Attribute::Goalkeeping,
        Attribute::Decision,
        Attribute::Composure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Finishing => "finishing",
            Attribute::Passing => "passing",
            Attribute::Dribbling => "dribbling",
            Attribute::Defending => "defending",
            Attribute::Speed => "speed",
            Attribute::Physical => "physical",
            Attribute::Technique => "technique",
            Attribute::Goalkeeping => "goalkeeping",
            Attribute::Decision => "decision",
            Attribute::Composure => "composure",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Attribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.name() == wanted)
            .ok_or_else(|| format!("Unknown attribute: {}", s))
    }
}

/// Attribute block, each value in `1..=99`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlayerAttributes {
    pub finishing: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defending: u8,
    pub speed: u8,
    pub physical: u8,
    pub technique: u8,
    pub goalkeeping: u8,
    pub decision: u8,
    pub composure: u8,
}

impl PlayerAttributes {
    pub fn uniform(value: u8) -> Self {
        let mut attrs = Self::default();
        for attr in Attribute::ALL {
            attrs.set(attr, value);
        }
        attrs
    }

    pub fn get(&self, attr: Attribute) -> u8 {
        match attr {
            Attribute::Finishing => self.finishing,
            Attribute::Passing => self.passing,
            Attribute::Dribbling => self.dribbling,
            Attribute::Defending => self.defending,
            Attribute::Speed => self.speed,
            Attribute::Physical => self.physical,
            Attribute::Technique => self.technique,
            Attribute::Goalkeeping => self.goalkeeping,
            Attribute::Decision => self.decision,
            Attribute::Composure => self.composure,
        }
    }

    /// Set an attribute, clamped into `1..=99`
    pub fn set(&mut self, attr: Attribute, value: u8) {
        let value = value.clamp(1, 99);
        match attr {
            Attribute::Finishing => self.finishing = value,
            Attribute::Passing => self.passing = value,
            Attribute::Dribbling => self.dribbling = value,
            Attribute::Defending => self.defending = value,
            Attribute::Speed => self.speed = value,
            Attribute::Physical => self.physical = value,
            Attribute::Technique => self.technique = value,
            Attribute::Goalkeeping => self.goalkeeping = value,
            Attribute::Decision => self.decision = value,
            Attribute::Composure => self.composure = value,
        }
    }

    /// Add a signed delta, clamped into `1..=99`
    pub fn adjust(&mut self, attr: Attribute, delta: i32) {
        let next = (self.get(attr) as i32 + delta).clamp(1, 99);
        self.set(attr, next as u8);
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Personality {
    Ambitious,
    Professional,
    Charismatic,
    Controversial,
    Disciplined,
    Leader,
    Introvert,
    Extrovert,
}

impl Personality {
    pub const ALL: [Personality; 8] = [
        Personality::Ambitious,
        Personality::Professional,
        Personality::Charismatic,
        Personality::Controversial,
        Personality::Disciplined,
        Personality::Leader,
        Personality::Introvert,
        Personality::Extrovert,
    ];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayStyle {
    Possession,
    CounterAttack,
    HighPress,
    Defensive,
    Balanced,
}

impl PlayStyle {
    pub const ALL: [PlayStyle; 5] = [
        PlayStyle::Possession,
        PlayStyle::CounterAttack,
        PlayStyle::HighPress,
        PlayStyle::Defensive,
        PlayStyle::Balanced,
    ];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub years_remaining: u8,
    pub release_clause: f64,
}

/// Per-season counters, cleared at the season wrap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SeasonStats {
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub matches_played: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    /// Match ratings (1-10) in the order they were played
    pub performances: Vec<f64>,
    pub average_performance: f64,
}

impl SeasonStats {
    /// Record a match rating; the average has no decay, every match weighs the same.
    pub fn record_performance(&mut self, rating: f64) {
        self.matches_played += 1;
        self.performances.push(rating);
        self.average_performance =
            self.performances.iter().sum::<f64>() / self.performances.len() as f64;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Compact player reference carried by match events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub nationality: Nationality,
    pub position: Position,
    pub age: u8,
    pub attributes: PlayerAttributes,

    /// Derived from `attributes` via the position weight table
    pub overall: u8,
    /// Visible soft ceiling
    pub potential: u8,
    /// Internal ceiling the overall grows toward
    pub hidden_potential: u8,

    pub value: f64,
    /// Annual salary
    pub salary: f64,
    pub contract: Contract,

    /// Club name or [`FREE_AGENT`]
    pub club: String,
    pub agent: Option<String>,

    pub personality: Personality,
    pub play_style: PlayStyle,
    pub popularity: u8,
    pub loyalty: u8,
    /// Respect toward agents (starts at 50)
    pub respect: u8,
    pub rival_clubs: Vec<String>,
    pub dream_club: String,
    pub origin_club: String,

    pub season: SeasonStats,

    /// Weeks of injury remaining
    pub injury: u8,
    /// Matches of suspension remaining
    pub suspension: u8,
    pub morale: u8,
    pub form: u8,

    pub development_plan: Option<Attribute>,
}

impl Player {
    /// Injured or suspended players never take part in a match
    pub fn is_available(&self) -> bool {
        self.injury == 0 && self.suspension == 0
    }

    pub fn is_free_agent(&self) -> bool {
        self.club == FREE_AGENT
    }

    pub fn is_represented_by(&self, agent_name: &str) -> bool {
        self.agent.as_deref() == Some(agent_name)
    }

    pub fn weekly_salary(&self) -> f64 {
        self.salary / 52.0
    }

    /// Recompute `overall` from the current attributes
    pub fn recalculate_overall(&mut self) {
        self.overall = PositionWeights::get_for_position(self.position).overall(&self.attributes);
    }

    /// Recompute `value` and the base salary from overall, age and potential gap
    pub fn refresh_market_value(&mut self) {
        self.value = valuation::market_value(self.overall, self.age, self.potential, self.position);
        self.salary = valuation::base_salary(self.value);
    }

    /// Overall and valuation in one step, after any attribute change
    pub fn recalculate_all(&mut self) {
        self.recalculate_overall();
        self.refresh_market_value();
    }

    pub fn to_ref(&self) -> PlayerRef {
        PlayerRef { id: self.id, name: self.name.clone(), position: self.position }
    }
}
