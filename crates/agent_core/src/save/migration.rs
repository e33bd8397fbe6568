use super::error::SaveError;
use super::format::{GameSave, SaveDetails};
use super::SAVE_VERSION;

/// Agent name given to saves that were written without one
pub const DEFAULT_AGENT_NAME: &str = "Agent";

/// Migrate save data from older versions to current version
pub fn migrate_save(mut save: GameSave) -> Result<GameSave, SaveError> {
    let original_version = save.version;

    save = match save.version {
        0 => migrate_v0_to_v1(save)?,
        1 => save,
        v if v > SAVE_VERSION => {
            log::warn!("Loading save from future version {} (current: {})", v, SAVE_VERSION);
            save
        }
        _ => {
            return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
        }
    };

    if original_version != SAVE_VERSION {
        save.version = SAVE_VERSION;
        save.update_timestamp();
        log::info!("Migrated save from version {} to {}", original_version, SAVE_VERSION);
    }

    Ok(save)
}

/// v0 saves could carry a zero clock, a blank agent and dangling client ids
fn migrate_v0_to_v1(mut save: GameSave) -> Result<GameSave, SaveError> {
    log::info!("Migrating save from version 0 to 1");
    let world = &mut save.world;

    if world.week == 0 {
        world.week = 1;
    }
    if world.season == 0 {
        world.season = 1;
    }

    if world.agent.name.trim().is_empty() {
        let old = std::mem::replace(&mut world.agent.name, DEFAULT_AGENT_NAME.to_string());
        for &id in &world.agent.clients {
            if let Some(idx) = world.player_index(id) {
                let player = &mut world.players[idx];
                if player.agent.as_deref().map_or(true, |a| a == old) {
                    player.agent = Some(DEFAULT_AGENT_NAME.to_string());
                }
            }
        }
    }

    let before = world.agent.clients.len();
    let players = &world.players;
    world.agent.clients.retain(|&id| players.iter().any(|p| p.id == id));
    if world.agent.clients.len() != before {
        log::warn!("Dropped {} unknown client ids", before - world.agent.clients.len());
    }

    save.details = SaveDetails::of(&save.world);
    Ok(save)
}

/// Check if a save file needs migration
pub fn needs_migration(save: &GameSave) -> bool {
    save.version < SAVE_VERSION
}

/// Get migration description for UI display
pub fn get_migration_description(from_version: u32, to_version: u32) -> String {
    match (from_version, to_version) {
        (0, 1) => "Fixing the game clock and agent details".to_string(),
        _ => format!("Updating save format from version {} to {}", from_version, to_version),
    }
}
