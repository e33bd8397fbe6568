//! World State
//!
//! `WorldState` is the single aggregate every engine operation reads and
//! mutates: clubs, players, league tables, the agent, the clock and the logs.
//! It is a plain value (no globals, no locks); callers own it and pass it by
//! reference. It converts to/from the `GameSave` envelope for persistence.

use serde::{Deserialize, Serialize};

use crate::models::{
    Agent, Club, LeagueTableEntry, LeagueTables, NotificationKind, NotificationLog, Player,
    PlayerId, SeasonAwards, SeasonStatistics, GameSettings,
};
use crate::save::GameSave;

/// A club's season totals, read from its league-table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubTotals {
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub agent: Agent,

    /// Current week, `1..=weeks_per_season`
    pub week: u32,
    pub season: u32,
    /// Mirrors the calendar; flips only inside a week pass
    pub transfer_window: bool,

    pub clubs: Vec<Club>,
    /// Ordered by id; `players[i].id == i + 1`
    pub players: Vec<Player>,
    pub leagues: LeagueTables,

    pub notifications: NotificationLog,
    pub settings: GameSettings,

    /// Awards of the last completed season
    pub awards: Option<SeasonAwards>,
    pub award_history: Vec<SeasonAwards>,
    pub statistics: SeasonStatistics,
}

impl WorldState {
    /// Empty world at week 1 of season 1
    pub fn new(agent: Agent, settings: GameSettings) -> Self {
        Self {
            agent,
            week: 1,
            season: 1,
            transfer_window: false,
            clubs: Vec::new(),
            players: Vec::new(),
            leagues: LeagueTables::new(),
            notifications: NotificationLog::new(),
            settings,
            awards: None,
            award_history: Vec::new(),
            statistics: SeasonStatistics::default(),
        }
    }

    /// Wrap the world in a save envelope
    pub fn to_save(&self, slot_name: &str) -> GameSave {
        GameSave::new(slot_name, self.clone())
    }

    /// Restore the world from a save envelope
    pub fn from_save(save: &GameSave) -> Self {
        save.world.clone()
    }

    // ========================
    // Player lookups
    // ========================

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.player_index(id).map(|idx| &self.players[idx])
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.player_index(id).map(move |idx| &mut self.players[idx])
    }

    /// Index of a player in `players`; ids are dense so this is O(1) for
    /// generated worlds and falls back to a scan otherwise.
    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        let guess = (id as usize).checked_sub(1)?;
        match self.players.get(guess) {
            Some(p) if p.id == id => Some(guess),
            _ => self.players.iter().position(|p| p.id == id),
        }
    }

    pub fn players_of<'a>(&'a self, club: &'a str) -> impl Iterator<Item = &'a Player> + 'a {
        self.players.iter().filter(move |p| p.club == club)
    }

    /// The agent's clients, in signing order
    pub fn clients(&self) -> Vec<&Player> {
        self.agent.clients.iter().filter_map(|&id| self.player(id)).collect()
    }

    pub fn is_client(&self, player: &Player) -> bool {
        player.is_represented_by(&self.agent.name)
    }

    // ========================
    // Club lookups
    // ========================

    pub fn club(&self, name: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.name == name)
    }

    pub fn club_mut(&mut self, name: &str) -> Option<&mut Club> {
        self.clubs.iter_mut().find(|c| c.name == name)
    }

    pub fn club_index(&self, name: &str) -> Option<usize> {
        self.clubs.iter().position(|c| c.name == name)
    }

    pub fn table_row(&self, club: &str) -> Option<&LeagueTableEntry> {
        let league = self.club(club)?.league();
        self.leagues.get(&league)?.iter().find(|row| row.club == club)
    }

    /// Points and goals of a club this season, projected from its table row
    pub fn club_totals(&self, club: &str) -> Option<ClubTotals> {
        self.table_row(club).map(|row| ClubTotals {
            points: row.points,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
        })
    }

    /// League table sorted by points, goal difference, goals scored
    pub fn standings(&self, league: &str) -> Vec<LeagueTableEntry> {
        let mut rows = self.leagues.get(league).cloned().unwrap_or_default();
        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.goal_difference().cmp(&a.goal_difference()))
                .then(b.goals_for.cmp(&a.goals_for))
        });
        rows
    }

    /// Rebuild empty tables from the current club → league mapping
    pub fn regenerate_tables(&mut self) {
        let mut leagues = LeagueTables::new();
        for club in &self.clubs {
            leagues.entry(club.league()).or_default().push(LeagueTableEntry::new(club.name.clone()));
        }
        self.leagues = leagues;
    }

    // ========================
    // Notifications
    // ========================

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.notifications.push(kind, message, None)
    }

    pub fn notify_about(&mut self, kind: NotificationKind, message: impl Into<String>, player: PlayerId) -> u64 {
        self.notifications.push(kind, message, Some(player))
    }

    // ========================
    // Clock
    // ========================

    /// Advance the week counter; returns true when the season wrapped.
    pub fn advance_clock(&mut self, weeks_per_season: u32) -> bool {
        self.week += 1;
        if self.week > weeks_per_season {
            self.week = 1;
            self.season += 1;
            return true;
        }
        false
    }
}
