use super::player::{PlayerId, Position};
use serde::{Deserialize, Serialize};

/// One award winner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AwardRecord {
    pub season: u32,
    pub player_id: PlayerId,
    pub player_name: String,
    pub club: String,
    /// Goals, clean sheets or assists for the counting awards
    pub stat: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamOfSeasonSlot {
    pub player_id: PlayerId,
    pub player_name: String,
    pub position: Position,
    pub club: String,
    pub average_performance: f64,
}

/// Best keeper, four defenders, four midfielders and two forwards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamOfSeason {
    pub goalkeeper: Vec<TeamOfSeasonSlot>,
    pub defenders: Vec<TeamOfSeasonSlot>,
    pub midfielders: Vec<TeamOfSeasonSlot>,
    pub forwards: Vec<TeamOfSeasonSlot>,
}

impl TeamOfSeason {
    pub fn len(&self) -> usize {
        self.goalkeeper.len() + self.defenders.len() + self.midfielders.len() + self.forwards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Awards of a single season; a category is `None` when nobody qualified
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SeasonAwards {
    pub season: u32,
    pub golden_ball: Option<AwardRecord>,
    pub golden_boot: Option<AwardRecord>,
    pub golden_glove: Option<AwardRecord>,
    pub best_young_player: Option<AwardRecord>,
    pub most_assists: Option<AwardRecord>,
    pub best_defender: Option<AwardRecord>,
    pub team_of_season: TeamOfSeason,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopScorerEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    pub club: String,
    pub goals: u32,
    pub assists: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferRecord {
    pub season: u32,
    pub week: u32,
    pub player_id: PlayerId,
    pub player_name: String,
    pub from_club: String,
    pub to_club: String,
    pub fee: f64,
}

/// Transfer ledger and scorer leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SeasonStatistics {
    pub transfers: Vec<TransferRecord>,
    /// Leaderboard of the last completed season
    pub top_scorers: Vec<TopScorerEntry>,
}
