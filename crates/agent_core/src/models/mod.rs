//! World data model: players, clubs, tables, fixtures, agent and logs.
//!
//! Every type here is JSON-plain (numbers, strings, booleans, arrays, nested
//! objects) so a whole world round-trips through a text blob.

pub mod agent;
pub mod awards;
pub mod club;
pub mod fixture;
pub mod league;
pub mod nation;
pub mod notification;
pub mod player;
pub mod settings;

pub use agent::Agent;
pub use awards::{
    AwardRecord, SeasonAwards, SeasonStatistics, TeamOfSeason, TeamOfSeasonSlot, TopScorerEntry,
    TransferRecord,
};
pub use club::{
    AssistantQuality, Club, CoachExperience, Division, Facilities, Formation, ManagerStyle,
    MarketingLevel, Staff,
};
pub use fixture::{Fixture, MatchEvent, MatchResult};
pub use league::{league_name, LeagueTableEntry, LeagueTables};
pub use nation::Nationality;
pub use notification::{Notification, NotificationKind, NotificationLog};
pub use player::{
    Attribute, Contract, Personality, PlayStyle, Player, PlayerAttributes, PlayerId, PlayerRef,
    Position, SeasonStats, FREE_AGENT,
};
pub use settings::{Difficulty, GameSettings, SimulationSpeed};
