use std::collections::HashSet;

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;
use uuid::Uuid;

use super::error::SaveError;
use super::SAVE_VERSION;
use crate::state::WorldState;

/// Upper bound on the player pool accepted from a save
const MAX_PLAYERS: usize = 100_000;

/// Summary shown in save listings without touching the world
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaveDetails {
    pub agent: String,
    pub balance: f64,
    pub reputation: f64,
    pub season: u32,
    pub week: u32,
    pub clients: usize,
}

impl SaveDetails {
    pub fn of(world: &WorldState) -> Self {
        Self {
            agent: world.agent.name.clone(),
            balance: world.agent.balance,
            reputation: world.agent.reputation,
            season: world.season,
            week: world.week,
            clients: world.agent.clients.len(),
        }
    }
}

/// Save envelope: metadata plus the full world
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameSave {
    /// Save format version for migration
    pub version: u32,

    /// Unique save id (regenerated on import)
    pub id: String,

    /// Save timestamp (unix milliseconds)
    pub timestamp: u64,

    pub name: String,
    pub details: SaveDetails,
    pub world: WorldState,
}

impl GameSave {
    /// Wrap a world; an empty name becomes "Save - Season s, Week w"
    pub fn new(name: &str, world: WorldState) -> Self {
        let name = if name.trim().is_empty() {
            format!("Save - Season {}, Week {}", world.season, world.week)
        } else {
            name.to_string()
        };
        Self {
            version: SAVE_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: current_timestamp(),
            name,
            details: SaveDetails::of(&world),
            world,
        }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    pub fn refresh_id(&mut self) {
        self.id = Uuid::new_v4().to_string();
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        validate_world(&self.world)
    }
}

/// Structural checks a loaded world must pass
pub fn validate_world(world: &WorldState) -> Result<(), SaveError> {
    if world.players.len() > MAX_PLAYERS {
        return Err(SaveError::DataTooLarge { size: world.players.len() });
    }

    let mut player_ids = HashSet::new();
    for player in &world.players {
        if !player_ids.insert(player.id) {
            return Err(SaveError::corrupted(format!("duplicate player id {}", player.id)));
        }
    }

    let mut club_names = HashSet::new();
    for club in &world.clubs {
        if !club_names.insert(club.name.as_str()) {
            return Err(SaveError::corrupted(format!("duplicate club {}", club.name)));
        }
    }

    Ok(())
}

/// World → JSON text (every field JSON-plain)
pub fn world_to_json(world: &WorldState) -> Result<String, SaveError> {
    Ok(serde_json::to_string(world)?)
}

/// JSON text → world; the result is validated
pub fn world_from_json(json: &str) -> Result<WorldState, SaveError> {
    let world: WorldState = serde_json::from_str(json)?;
    validate_world(&world)?;
    Ok(world)
}

/// Serialize and compress game save data
pub fn serialize_and_compress(save: &GameSave) -> Result<Vec<u8>, SaveError> {
    save.validate()?;

    // 1. MessagePack with field names
    let msgpack = to_vec_named(save)?;

    // 2. LZ4, size prepended
    let compressed = compress_prepend_size(&msgpack);

    // 3. SHA-256 trailer
    let checksum = Sha256::digest(&compressed);
    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize game save data
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<GameSave, SaveError> {
    // size header + checksum
    if bytes.len() < 4 + 32 {
        return Err(SaveError::corrupted("save data is truncated"));
    }

    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);
    let calculated = Sha256::digest(payload);
    if &calculated[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;
    let save: GameSave = from_slice(&msgpack)?;

    if save.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    Ok(save)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
