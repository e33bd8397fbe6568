use super::club::Division;
use super::nation::Nationality;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// League tables keyed by league name
pub type LeagueTables = BTreeMap<String, Vec<LeagueTableEntry>>;

pub fn league_name(country: Nationality, division: Division) -> String {
    format!("{} {}", country.display_name(), division)
}

/// One club's row in a league table.
///
/// `points` is maintained together with the result counters so that
/// `points == wins * 3 + draws` holds after every update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeagueTableEntry {
    pub club: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl LeagueTableEntry {
    pub fn new(club: impl Into<String>) -> Self {
        Self {
            club: club.into(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    /// Fold one match result into the row
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        if scored > conceded {
            self.wins += 1;
            self.points += 3;
        } else if scored == conceded {
            self.draws += 1;
            self.points += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn points_consistent(&self) -> bool {
        self.points == self.wins * 3 + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_league_name_format() {
        assert_eq!(league_name(Nationality::England, Division::Second), "England Division 2");
    }

    #[test]
    fn test_record_results() {
        let mut row = LeagueTableEntry::new("Arsenal");
        row.record(2, 0);
        row.record(1, 1);
        row.record(0, 3);

        assert_eq!(row.played, 3);
        assert_eq!((row.wins, row.draws, row.losses), (1, 1, 1));
        assert_eq!(row.points, 4);
        assert_eq!(row.goal_difference(), -1);
    }

    proptest! {
        #[test]
        fn prop_points_always_consistent(results in proptest::collection::vec((0u32..8, 0u32..8), 0..60)) {
            let mut row = LeagueTableEntry::new("Club");
            for (scored, conceded) in results {
                row.record(scored, conceded);
                prop_assert!(row.points_consistent());
            }
            prop_assert_eq!(row.played, row.wins + row.draws + row.losses);
        }
    }
}
