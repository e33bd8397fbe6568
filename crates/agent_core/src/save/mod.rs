// Save/Load System for the agent career
// JSON text blob for the UI boundary; MessagePack + LZ4 + SHA-256 for slot files

pub mod error;
pub mod format;
pub mod manager;
pub mod migration;

pub use error::SaveError;
pub use format::{
    decompress_and_deserialize, serialize_and_compress, world_from_json, world_to_json, GameSave,
    SaveDetails,
};
pub use manager::{FileSaveStore, SaveSlotInfo, SLOT_COUNT};
pub use migration::migrate_save;

use crate::state::WorldState;

pub const SAVE_VERSION: u32 = 1;

/// Persistence collaborator the engine calls after state changes.
///
/// Failures are reported as `false`/`None`; `load` returning `None` is the
/// normal first-run case.
pub trait SaveStore {
    fn save(&mut self, world: &WorldState) -> bool;
    fn load(&self) -> Option<WorldState>;
}

/// Keeps the last saved world as JSON text
#[derive(Debug, Clone, Default)]
pub struct MemorySaveStore {
    blob: Option<String>,
    saves: usize,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl SaveStore for MemorySaveStore {
    fn save(&mut self, world: &WorldState) -> bool {
        match world_to_json(world) {
            Ok(json) => {
                self.blob = Some(json);
                self.saves += 1;
                true
            }
            Err(e) => {
                log::warn!("In-memory save failed: {}", e);
                false
            }
        }
    }

    fn load(&self) -> Option<WorldState> {
        let json = self.blob.as_deref()?;
        match world_from_json(json) {
            Ok(world) => Some(world),
            Err(e) => {
                log::warn!("In-memory save is unreadable: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::generation::generate_world;
    use crate::models::Difficulty;
    use crate::random::GameRng;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemorySaveStore::new();
        assert!(store.load().is_none());

        let world = generate_world("Test", Difficulty::Hard, &EngineConfig::testing(), &mut GameRng::seeded(201));
        assert!(store.save(&world));
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load(), Some(world));
    }

    #[test]
    fn test_memory_store_tolerates_garbage() {
        let store = MemorySaveStore { blob: Some("{\"agent\":".to_string()), saves: 1 };
        assert!(store.load().is_none());
    }
}
