use super::player::PlayerRef;
use serde::{Deserialize, Serialize};

/// A discrete thing that happened in a match, in occurrence order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MatchEvent {
    Goal { club: String, scorer: Option<PlayerRef>, assist: Option<PlayerRef> },
    YellowCard { club: String, player: PlayerRef },
    RedCard { club: String, player: PlayerRef },
    /// `duration` in weeks
    Injury { club: String, player: PlayerRef, duration: u8 },
}

impl MatchEvent {
    pub fn club(&self) -> &str {
        match self {
            MatchEvent::Goal { club, .. }
            | MatchEvent::YellowCard { club, .. }
            | MatchEvent::RedCard { club, .. }
            | MatchEvent::Injury { club, .. } => club,
        }
    }

    /// Players named by the event
    pub fn involved_players(&self) -> Vec<&PlayerRef> {
        match self {
            MatchEvent::Goal { scorer, assist, .. } => {
                scorer.iter().chain(assist.iter()).collect()
            }
            MatchEvent::YellowCard { player, .. }
            | MatchEvent::RedCard { player, .. }
            | MatchEvent::Injury { player, .. } => vec![player],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub home_goals: u32,
    pub away_goals: u32,
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    pub league: String,
    pub home: String,
    pub away: String,
    pub week: u32,
    pub result: Option<MatchResult>,
}

impl Fixture {
    pub fn new(league: impl Into<String>, home: impl Into<String>, away: impl Into<String>, week: u32) -> Self {
        Self { league: league.into(), home: home.into(), away: away.into(), week, result: None }
    }

    pub fn total_goals(&self) -> u32 {
        self.result.as_ref().map(|r| r.home_goals + r.away_goals).unwrap_or(0)
    }
}
