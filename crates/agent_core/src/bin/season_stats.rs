// Full-season statistics run
// Run with: cargo run --bin season_stats --release -- [seed] [league]
//
// Plays one season of the generated world, prints the chosen league's final
// table, goal averages, the award winners and the scorer leaderboard.

use agent_core::config::EngineConfig;
use agent_core::engine::Engine;
use agent_core::models::{AwardRecord, Difficulty};
use anyhow::{anyhow, Context, Result};

fn print_award(label: &str, record: &Option<AwardRecord>) {
    match record {
        Some(r) => match r.stat {
            Some(stat) => println!("  {:<18} {} ({}) - {}", label, r.player_name, r.club, stat),
            None => println!("  {:<18} {} ({})", label, r.player_name, r.club),
        },
        None => println!("  {:<18} -", label),
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(raw) => raw.parse().with_context(|| format!("seed must be a number, got {raw}"))?,
        None => 42,
    };
    let league_arg = args.next();

    let config = EngineConfig::standard();
    let weeks = config.season.weeks_per_season;
    let mut engine = Engine::with_seed(config, seed);
    let mut world = engine.initialize_new_game("Stats", Difficulty::Normal);

    println!("=== Season simulation (seed {seed}) ===");
    println!("clubs: {}, players: {}, leagues: {}", world.clubs.len(), world.players.len(), world.leagues.len());

    let mut matches = 0u32;
    let mut goals = 0u32;
    let mut home_wins = 0u32;
    let mut draws = 0u32;
    for _ in 1..weeks {
        let summary = engine.simulate_week(&mut world)?;
        for result in summary.fixtures.iter().filter_map(|f| f.result.as_ref()) {
            matches += 1;
            goals += result.home_goals + result.away_goals;
            if result.home_goals > result.away_goals {
                home_wins += 1;
            } else if result.home_goals == result.away_goals {
                draws += 1;
            }
        }
    }

    let league = match league_arg {
        Some(name) => name,
        None => world.leagues.keys().next().cloned().ok_or_else(|| anyhow!("world has no leagues"))?,
    };
    if !world.leagues.contains_key(&league) {
        return Err(anyhow!("unknown league: {league}"));
    }

    println!();
    println!("--- {} (after week {}) ---", league, world.week);
    println!("{:<3} {:<28} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}", "#", "Club", "P", "W", "D", "L", "GD", "Pts");
    for (pos, row) in world.standings(&league).iter().enumerate() {
        println!(
            "{:<3} {:<28} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
            pos + 1,
            row.club,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goal_difference(),
            row.points
        );
    }

    if matches > 0 {
        println!();
        println!("matches: {matches}");
        println!("goals/match: {:.2}", goals as f64 / matches as f64);
        println!("home win: {:.1}%", home_wins as f64 * 100.0 / matches as f64);
        println!("draw: {:.1}%", draws as f64 * 100.0 / matches as f64);
    }

    // one more week wraps the season and runs the awards
    engine.simulate_week(&mut world)?;

    let awards = world.awards.as_ref().ok_or_else(|| anyhow!("season closed without awards"))?;
    println!();
    println!("--- Awards, season {} ---", awards.season);
    print_award("Golden Ball", &awards.golden_ball);
    print_award("Golden Boot", &awards.golden_boot);
    print_award("Golden Glove", &awards.golden_glove);
    print_award("Best Young Player", &awards.best_young_player);
    print_award("Most Assists", &awards.most_assists);
    print_award("Best Defender", &awards.best_defender);
    println!("  Team of the season: {} players", awards.team_of_season.len());

    println!();
    println!("--- Top scorers ---");
    for (rank, entry) in world.statistics.top_scorers.iter().enumerate() {
        println!("{:>2}. {:<24} {:<28} {:>3} goals {:>3} assists", rank + 1, entry.player_name, entry.club, entry.goals, entry.assists);
    }

    println!();
    println!("transfers: {}", world.statistics.transfers.len());
    println!("notifications: {}", world.notifications.len());
    Ok(())
}
