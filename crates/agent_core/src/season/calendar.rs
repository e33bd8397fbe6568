//! Transfer-window calendar

use tracing::info;

use crate::config::SeasonConfig;
use crate::models::NotificationKind;
use crate::state::WorldState;

const WINTER_WINDOW_FROM_WEEK: u32 = 10;

/// Sync `world.transfer_window` with the calendar.
///
/// Returns the new state when the window opened or closed this week; exactly
/// one notification is written per transition.
pub fn update_transfer_window(world: &mut WorldState, config: &SeasonConfig) -> Option<bool> {
    let open = config.is_window_open(world.week);
    if open == world.transfer_window {
        return None;
    }
    world.transfer_window = open;

    let message = if open {
        let period = if world.week < WINTER_WINDOW_FROM_WEEK {
            "the new season"
        } else {
            "the second half of the season"
        };
        format!("The transfer window is now open! Time to make deals for {}.", period)
    } else {
        "The transfer window has closed. You'll need to wait until the next window to make transfers."
            .to_string()
    };
    world.notify(NotificationKind::TransferWindow, message);
    info!(season = world.season, week = world.week, open, "Transfer window changed");
    Some(open)
}
