//! Season awards, team of the season and the scorer leaderboard
//!
//! All rankings are stable sorts over the player list, so ties go to the
//! player who comes first in the world's player order.

use std::cmp::Ordering;

use crate::config::AwardThresholds;
use crate::models::{
    AwardRecord, Player, Position, SeasonAwards, TeamOfSeason, TeamOfSeasonSlot, TopScorerEntry,
};
use crate::strength::BEST_XI_SHAPE;

fn record(season: u32, player: &Player, stat: Option<f64>) -> AwardRecord {
    AwardRecord {
        season,
        player_id: player.id,
        player_name: player.name.clone(),
        club: player.club.clone(),
        stat,
    }
}

fn contribution(player: &Player) -> f64 {
    player.season.goals as f64 + player.season.assists as f64 * 0.7
}

/// Higher average first, then goals + 0.7 × assists
fn by_rating_then_contribution(a: &&Player, b: &&Player) -> Ordering {
    b.season
        .average_performance
        .total_cmp(&a.season.average_performance)
        .then(contribution(b).total_cmp(&contribution(a)))
}

fn by_rating(a: &&Player, b: &&Player) -> Ordering {
    b.season.average_performance.total_cmp(&a.season.average_performance)
}

/// First player by a stable ordering
fn best<'a, F>(players: impl Iterator<Item = &'a Player>, order: F) -> Option<&'a Player>
where
    F: FnMut(&&'a Player, &&'a Player) -> Ordering,
{
    let mut ranked: Vec<&Player> = players.collect();
    ranked.sort_by(order);
    ranked.first().copied()
}

pub fn compute_awards(players: &[Player], season: u32, thresholds: &AwardThresholds) -> SeasonAwards {
    let golden_ball = best(
        players.iter().filter(|p| {
            p.season.matches_played >= thresholds.golden_ball_matches
                && p.season.average_performance >= thresholds.golden_ball_rating
        }),
        by_rating_then_contribution,
    )
    .map(|p| record(season, p, None));

    let golden_boot = best(players.iter(), |a, b| b.season.goals.cmp(&a.season.goals))
        .map(|p| record(season, p, Some(p.season.goals as f64)));

    let golden_glove = best(
        players.iter().filter(|p| {
            p.position == Position::Goalkeeper && p.season.matches_played >= thresholds.golden_glove_matches
        }),
        |a, b| b.season.clean_sheets.cmp(&a.season.clean_sheets),
    )
    .map(|p| record(season, p, Some(p.season.clean_sheets as f64)));

    let best_young_player = best(
        players.iter().filter(|p| {
            p.age <= thresholds.young_player_max_age && p.season.matches_played >= thresholds.young_player_matches
        }),
        by_rating_then_contribution,
    )
    .map(|p| record(season, p, None));

    let most_assists = best(players.iter(), |a, b| b.season.assists.cmp(&a.season.assists))
        .map(|p| record(season, p, Some(p.season.assists as f64)));

    let best_defender = best(
        players.iter().filter(|p| {
            p.position == Position::Defender && p.season.matches_played >= thresholds.best_defender_matches
        }),
        by_rating,
    )
    .map(|p| record(season, p, None));

    SeasonAwards {
        season,
        golden_ball,
        golden_boot,
        golden_glove,
        best_young_player,
        most_assists,
        best_defender,
        team_of_season: team_of_season(players, thresholds.team_of_season_matches),
    }
}

/// One keeper, four defenders, four midfielders and two forwards by average rating
pub fn team_of_season(players: &[Player], min_matches: u32) -> TeamOfSeason {
    let mut lines: Vec<Vec<TeamOfSeasonSlot>> = Position::ALL
        .iter()
        .map(|&position| {
            let mut ranked: Vec<&Player> = players
                .iter()
                .filter(|p| p.position == position && p.season.matches_played >= min_matches)
                .collect();
            ranked.sort_by(by_rating);
            ranked
                .into_iter()
                .take(BEST_XI_SHAPE[position.index()])
                .map(|p| TeamOfSeasonSlot {
                    player_id: p.id,
                    player_name: p.name.clone(),
                    position: p.position,
                    club: p.club.clone(),
                    average_performance: p.season.average_performance,
                })
                .collect()
        })
        .collect();

    let forwards = lines.pop().unwrap_or_default();
    let midfielders = lines.pop().unwrap_or_default();
    let defenders = lines.pop().unwrap_or_default();
    let goalkeeper = lines.pop().unwrap_or_default();
    TeamOfSeason { goalkeeper, defenders, midfielders, forwards }
}

/// Players with at least one goal, most goals first
pub fn top_scorers(players: &[Player], limit: usize) -> Vec<TopScorerEntry> {
    let mut scorers: Vec<&Player> = players.iter().filter(|p| p.season.goals > 0).collect();
    scorers.sort_by(|a, b| b.season.goals.cmp(&a.season.goals));
    scorers
        .into_iter()
        .take(limit)
        .map(|p| TopScorerEntry {
            player_id: p.id,
            player_name: p.name.clone(),
            club: p.club.clone(),
            goals: p.season.goals,
            assists: p.season.assists,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::test_support::sample_player;

    fn player(id: u32, position: Position, age: u8, ratings: &[f64]) -> Player {
        let mut p = sample_player(age, 70);
        p.id = id;
        p.name = format!("Player {}", id);
        p.position = position;
        for &r in ratings {
            p.season.record_performance(r);
        }
        p
    }

    #[test]
    fn test_golden_ball_thresholds_and_tiebreak() {
        let mut a = player(1, Position::Midfielder, 27, &[7.5; 20]);
        a.season.goals = 3;
        let mut b = player(2, Position::Forward, 27, &[7.5; 20]);
        b.season.goals = 4;
        let c = player(3, Position::Forward, 27, &[9.0; 19]);
        let d = player(4, Position::Forward, 27, &[6.9; 30]);

        let awards = compute_awards(&[a, b, c, d], 1, &AwardThresholds::default());
        assert_eq!(awards.golden_ball.unwrap().player_id, 2);
    }

    #[test]
    fn test_empty_categories_are_none() {
        let players = vec![player(1, Position::Forward, 30, &[6.0; 5])];
        let awards = compute_awards(&players, 4, &AwardThresholds::default());
        assert!(awards.golden_ball.is_none());
        assert!(awards.golden_glove.is_none());
        assert!(awards.best_young_player.is_none());
        assert!(awards.best_defender.is_none());
        assert!(awards.team_of_season.is_empty());
        // counting awards have no minimum
        assert_eq!(awards.golden_boot.unwrap().season, 4);
    }

    #[test]
    fn test_counting_awards_carry_stat() {
        let mut keeper = player(1, Position::Goalkeeper, 30, &[6.0; 15]);
        keeper.season.clean_sheets = 9;
        let mut striker = player(2, Position::Forward, 22, &[7.0; 15]);
        striker.season.goals = 12;
        striker.season.assists = 2;
        let mut creator = player(3, Position::Midfielder, 26, &[6.5; 15]);
        creator.season.assists = 8;

        let awards = compute_awards(&[keeper, striker, creator], 2, &AwardThresholds::default());
        assert_eq!(awards.golden_glove.unwrap().stat, Some(9.0));
        assert_eq!(awards.golden_boot.unwrap().stat, Some(12.0));
        let assists = awards.most_assists.unwrap();
        assert_eq!((assists.player_id, assists.stat), (3, Some(8.0)));
        assert_eq!(awards.best_young_player.unwrap().player_id, 2);
    }

    #[test]
    fn test_team_of_season_shape() {
        let mut players = Vec::new();
        let mut id = 1;
        for position in Position::ALL {
            for k in 0..6 {
                players.push(player(id, position, 26, &vec![6.0 + k as f64 * 0.1; 20]));
                id += 1;
            }
        }
        let team = team_of_season(&players, 20);
        assert_eq!(team.goalkeeper.len(), 1);
        assert_eq!(team.defenders.len(), 4);
        assert_eq!(team.midfielders.len(), 4);
        assert_eq!(team.forwards.len(), 2);
        assert!(team.defenders.windows(2).all(|w| w[0].average_performance >= w[1].average_performance));
    }

    #[test]
    fn test_top_scorers_skip_goalless() {
        let mut players: Vec<Player> = (1..=30).map(|i| player(i, Position::Forward, 25, &[])).collect();
        for (i, p) in players.iter_mut().enumerate().take(25) {
            p.season.goals = i as u32 + 1;
        }
        let board = top_scorers(&players, 20);
        assert_eq!(board.len(), 20);
        assert_eq!(board[0].goals, 25);
        assert!(board.iter().all(|e| e.goals > 0));
    }
}
