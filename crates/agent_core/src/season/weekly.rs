//! Weekly player upkeep: status countdown, then form and morale drift

use crate::models::Player;
use crate::random::GameRng;

const MORALE_FLOOR: u8 = 10;
const MORALE_CEILING: u8 = 100;

/// Count injury weeks and suspension matches down by one, floored at zero
pub fn tick_status(players: &mut [Player]) {
    for player in players {
        player.injury = player.injury.saturating_sub(1);
        player.suspension = player.suspension.saturating_sub(1);
    }
}

fn shift(value: u8, delta: i32, lo: u8, hi: u8) -> u8 {
    (value as i32 + delta).clamp(lo as i32, hi as i32) as u8
}

/// Form change for this week, driven by the latest rating
pub fn form_delta(player: &Player) -> i32 {
    if !player.is_available() {
        return -3;
    }
    match player.season.performances.last() {
        Some(&rating) if rating > 7.0 => 5,
        Some(&rating) if rating > 5.0 => 2,
        Some(_) => -1,
        None => -2,
    }
}

/// Update form first, then morale from playing time, the new form and a
/// random wobble of -1..=1.
pub fn update_form_and_morale(player: &mut Player, week: u32, rng: &mut GameRng) {
    player.form = shift(player.form, form_delta(player), 0, 100);

    let mut morale = player.morale;
    if (player.season.matches_played as f64) < week as f64 * 0.3 {
        morale = shift(morale, -2, MORALE_FLOOR, MORALE_CEILING);
    }
    if player.form > 80 {
        morale = shift(morale, 1, MORALE_FLOOR, MORALE_CEILING);
    } else if player.form < 40 {
        morale = shift(morale, -1, MORALE_FLOOR, MORALE_CEILING);
    }
    let wobble = rng.int_inclusive(-1, 1) as i32;
    player.morale = shift(morale, wobble, MORALE_FLOOR, MORALE_CEILING);
}

pub fn update_all_form_and_morale(players: &mut [Player], week: u32, rng: &mut GameRng) {
    for player in players {
        update_form_and_morale(player, week, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::test_support::sample_player;

    #[test]
    fn test_status_floors_at_zero() {
        let mut players = vec![sample_player(25, 60), sample_player(25, 60)];
        players[0].injury = 2;
        players[1].suspension = 1;
        tick_status(&mut players);
        tick_status(&mut players);
        assert_eq!(players[0].injury, 0);
        assert_eq!(players[1].suspension, 0);
        tick_status(&mut players);
        assert_eq!(players[0].injury, 0);
    }

    #[test]
    fn test_form_delta_rules() {
        let mut player = sample_player(25, 60);
        assert_eq!(form_delta(&player), -2);
        player.season.record_performance(7.5);
        assert_eq!(form_delta(&player), 5);
        player.season.record_performance(6.0);
        assert_eq!(form_delta(&player), 2);
        player.season.record_performance(4.0);
        assert_eq!(form_delta(&player), -1);
        player.injury = 1;
        assert_eq!(form_delta(&player), -3);
    }

    #[test]
    fn test_morale_and_form_bounds() {
        let mut rng = GameRng::seeded(101);
        let mut low = sample_player(25, 60);
        low.morale = 10;
        low.form = 1;
        low.suspension = 4;
        let mut high = sample_player(25, 60);
        high.morale = 100;
        high.form = 99;
        high.season.record_performance(9.0);
        for week in 1..=38 {
            update_form_and_morale(&mut low, week, &mut rng);
            update_form_and_morale(&mut high, 1, &mut rng);
            assert!((10..=100).contains(&low.morale));
            assert!((10..=100).contains(&high.morale));
            assert!(high.form <= 100);
        }
        assert_eq!(low.form, 0);
        assert_eq!(high.form, 100);
    }

    #[test]
    fn test_benched_player_loses_morale() {
        let mut rng = GameRng::seeded(102);
        let mut player = sample_player(25, 60);
        player.morale = 60;
        player.form = 60;
        // 0 matches by week 20 → -2, plus at most +1 wobble
        update_form_and_morale(&mut player, 20, &mut rng);
        assert!(player.morale <= 59);
    }
}
