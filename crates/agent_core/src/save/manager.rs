use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::error::SaveError;
use super::format::{current_timestamp, decompress_and_deserialize, serialize_and_compress, GameSave};
use super::migration::migrate_save;
use super::SaveStore;
use crate::state::WorldState;

/// Number of named save slots
pub const SLOT_COUNT: u8 = 3;

/// Envelope fields an imported JSON save must carry
const REQUIRED_IMPORT_FIELDS: [&str; 4] = ["id", "name", "timestamp", "world"];

/// Directory-backed save store: the current game, three slots and an auto-save
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    dir: PathBuf,
}

impl FileSaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the game the player is currently in
    pub fn save_current(&self, world: &WorldState) -> Result<GameSave, SaveError> {
        let save = world.to_save("");
        save_to_path(&self.current_path(), &save)?;
        log::debug!("Current game saved");
        Ok(save)
    }

    pub fn load_current(&self) -> Result<GameSave, SaveError> {
        load_from_path(&self.current_path())
    }

    /// Save to a named slot; the slot also becomes the current game
    pub fn save_to_slot(&self, slot: u8, name: &str, world: &WorldState) -> Result<GameSave, SaveError> {
        validate_slot(slot)?;

        let save = world.to_save(name);
        save_to_path(&self.slot_path(slot), &save)?;
        save_to_path(&self.current_path(), &save)?;

        log::info!("Game saved to slot {} ({})", slot, save.name);
        Ok(save)
    }

    /// Load a slot; it becomes the current game
    pub fn load_from_slot(&self, slot: u8) -> Result<GameSave, SaveError> {
        validate_slot(slot)?;

        let save = load_from_path(&self.slot_path(slot))?;
        save_to_path(&self.current_path(), &save)?;

        log::info!("Game loaded from slot {}", slot);
        Ok(save)
    }

    pub fn auto_save(&self, world: &WorldState) -> Result<(), SaveError> {
        save_to_path(&self.auto_save_path(), &world.to_save("Auto-save"))?;
        log::debug!("Auto-save completed");
        Ok(())
    }

    pub fn load_auto_save(&self) -> Result<GameSave, SaveError> {
        let save = load_from_path(&self.auto_save_path())?;
        log::info!("Auto-save loaded");
        Ok(save)
    }

    pub fn slot_exists(&self, slot: u8) -> bool {
        validate_slot(slot).is_ok() && self.slot_path(slot).exists()
    }

    pub fn auto_save_exists(&self) -> bool {
        self.auto_save_path().exists()
    }

    pub fn delete_slot(&self, slot: u8) -> Result<(), SaveError> {
        validate_slot(slot)?;

        let path = self.slot_path(slot);
        if path.exists() {
            remove_file(&path)?;
            log::info!("Deleted save slot {}", slot);
        }

        Ok(())
    }

    /// Get save slot info for UI display
    pub fn slot_info(&self, slot: u8) -> Result<Option<SaveSlotInfo>, SaveError> {
        validate_slot(slot)?;

        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        let save = load_from_path(&path)?;
        Ok(Some(SaveSlotInfo {
            slot,
            id: save.id,
            name: save.name,
            timestamp: save.timestamp,
            version: save.version,
            agent: save.details.agent,
            balance: save.details.balance,
            week: save.details.week,
            season: save.details.season,
            clients: save.details.clients,
        }))
    }

    /// Every readable slot, most recent first
    pub fn list_slots(&self) -> Vec<SaveSlotInfo> {
        let mut slots = Vec::new();

        for slot in 0..SLOT_COUNT {
            match self.slot_info(slot) {
                Ok(Some(info)) => slots.push(info),
                Ok(None) => {}
                Err(e) => log::warn!("Skipping unreadable slot {}: {}", slot, e),
            }
        }

        slots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        slots
    }

    /// Export a slot as pretty JSON text
    pub fn export_slot(&self, slot: u8) -> Result<String, SaveError> {
        validate_slot(slot)?;
        let save = load_from_path(&self.slot_path(slot))?;
        Ok(serde_json::to_string_pretty(&save)?)
    }

    /// Import a JSON save into a slot under a fresh id
    pub fn import_slot(&self, slot: u8, json: &str) -> Result<GameSave, SaveError> {
        validate_slot(slot)?;

        let save = parse_import(json)?;
        save_to_path(&self.slot_path(slot), &save)?;

        log::info!("Imported save '{}' into slot {}", save.name, slot);
        Ok(save)
    }

    fn current_path(&self) -> PathBuf {
        self.dir.join("current_game.dat")
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.dir.join(format!("save_slot_{}.dat", slot))
    }

    fn auto_save_path(&self) -> PathBuf {
        self.dir.join("auto_save.dat")
    }
}

impl SaveStore for FileSaveStore {
    fn save(&mut self, world: &WorldState) -> bool {
        match self.save_current(world) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Saving current game failed: {}", e);
                false
            }
        }
    }

    fn load(&self) -> Option<WorldState> {
        match self.load_current() {
            Ok(save) => Some(save.world),
            Err(SaveError::FileNotFound { .. }) => None,
            Err(e) => {
                log::warn!("Loading current game failed: {}", e);
                None
            }
        }
    }
}

/// Parse an exported save; the envelope must name every required field
fn parse_import(json: &str) -> Result<GameSave, SaveError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let missing = REQUIRED_IMPORT_FIELDS.iter().find(|field| value.get(**field).is_none());
    if let Some(field) = missing {
        return Err(SaveError::corrupted(format!("Invalid save file format: missing {}", field)));
    }

    let mut save: GameSave = serde_json::from_value(value)?;
    save = migrate_save(save)?;
    save.validate()?;
    save.refresh_id();
    save.timestamp = current_timestamp();
    Ok(save)
}

fn validate_slot(slot: u8) -> Result<(), SaveError> {
    if slot >= SLOT_COUNT {
        return Err(SaveError::InvalidSlot { slot: slot as i64 });
    }
    Ok(())
}

fn save_to_path(path: &Path, save: &GameSave) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let data = serialize_and_compress(save)?;

    // Atomic save: write to temp file, then rename
    let temp_path = path.with_extension("tmp");

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(&data)?;
        file.flush()?;
        file.sync_all()?;
    }

    rename(&temp_path, path)?;

    log::debug!("Saved {} bytes to {:?}", data.len(), path);
    Ok(())
}

fn load_from_path(path: &Path) -> Result<GameSave, SaveError> {
    if !path.exists() {
        return Err(SaveError::FileNotFound { path: path.display().to_string() });
    }

    let mut file = File::open(path)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;

    let save = migrate_save(decompress_and_deserialize(&data)?)?;

    log::debug!("Loaded {} bytes from {:?}", data.len(), path);
    Ok(save)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveSlotInfo {
    pub slot: u8,
    pub id: String,
    pub name: String,
    pub timestamp: u64,
    pub version: u32,
    pub agent: String,
    pub balance: f64,
    pub week: u32,
    pub season: u32,
    pub clients: usize,
}

impl SaveSlotInfo {
    pub fn format_timestamp(&self) -> String {
        use time::{format_description::well_known::Rfc3339, OffsetDateTime};

        let timestamp = OffsetDateTime::from_unix_timestamp_nanos(self.timestamp as i128 * 1_000_000)
            .unwrap_or_else(|_| OffsetDateTime::now_utc());

        timestamp.format(&Rfc3339).unwrap_or_else(|_| "Unknown".to_string())
    }

    pub fn get_display_text(&self) -> String {
        format!(
            "Slot {}: {} (Season {}, Week {}, {} clients)",
            self.slot, self.name, self.season, self.week, self.clients
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::generation::generate_world;
    use crate::models::Difficulty;
    use crate::random::GameRng;
    use tempfile::TempDir;

    fn world(seed: u64) -> WorldState {
        generate_world("Test", Difficulty::Normal, &EngineConfig::testing(), &mut GameRng::seeded(seed))
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let save_path = temp_dir.path().join("test_save.dat");
        let original = world(191).to_save("roundtrip");

        save_to_path(&save_path, &original).unwrap();
        let loaded = load_from_path(&save_path).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_atomic_save() {
        let temp_dir = TempDir::new().unwrap();
        let save_path = temp_dir.path().join("atomic_test.dat");

        save_to_path(&save_path, &world(192).to_save("atomic")).unwrap();

        assert!(save_path.exists());
        assert!(!save_path.with_extension("tmp").exists());
    }

    #[test]
    fn test_slot_validation() {
        assert!(validate_slot(0).is_ok());
        assert!(validate_slot(2).is_ok());
        assert!(matches!(validate_slot(3), Err(SaveError::InvalidSlot { slot: 3 })));
        assert!(validate_slot(255).is_err());
    }

    #[test]
    fn test_store_contract_first_run() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileSaveStore::new(temp_dir.path().join("saves"));
        assert!(store.load().is_none());

        let world = world(193);
        assert!(store.save(&world));
        assert_eq!(store.load(), Some(world));
    }

    #[test]
    fn test_slots_listing_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSaveStore::new(temp_dir.path());
        let mut world = world(194);

        store.save_to_slot(0, "", &world).unwrap();
        world.week = 9;
        store.save_to_slot(2, "Title push", &world).unwrap();

        let slots = store.list_slots();
        assert_eq!(slots.len(), 2);
        assert!(slots[0].timestamp >= slots[1].timestamp);

        let info = store.slot_info(0).unwrap().unwrap();
        assert_eq!(info.name, "Save - Season 1, Week 1");
        assert_eq!(info.clients, 2);
        assert!(info.format_timestamp().contains('T'));

        // slot 2 was also made the current game
        assert_eq!(store.load().unwrap().week, 9);

        store.delete_slot(0).unwrap();
        assert!(!store.slot_exists(0));
        assert!(store.slot_info(0).unwrap().is_none());
        assert!(matches!(store.load_from_slot(0), Err(SaveError::FileNotFound { .. })));
    }

    #[test]
    fn test_export_import_assigns_new_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSaveStore::new(temp_dir.path());
        let saved = store.save_to_slot(0, "Export me", &world(195)).unwrap();

        let json = store.export_slot(0).unwrap();
        let imported = store.import_slot(1, &json).unwrap();

        assert_ne!(imported.id, saved.id);
        assert_eq!(imported.name, "Export me");
        assert_eq!(imported.world, saved.world);
        assert_eq!(store.load_from_slot(1).unwrap().id, imported.id);
    }

    #[test]
    fn test_import_rejects_incomplete_envelope() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSaveStore::new(temp_dir.path());

        let err = store.import_slot(0, r#"{"id":"x","name":"y","timestamp":1}"#).unwrap_err();
        assert_eq!(err.to_string(), "Corrupted data: Invalid save file format: missing world");
        assert!(matches!(store.import_slot(0, "not json"), Err(SaveError::Json(_))));
        assert!(!store.slot_exists(0));
    }

    #[test]
    fn test_auto_save() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSaveStore::new(temp_dir.path());
        assert!(!store.auto_save_exists());

        let world = world(196);
        store.auto_save(&world).unwrap();
        let loaded = store.load_auto_save().unwrap();
        assert_eq!(loaded.name, "Auto-save");
        assert_eq!(loaded.world, world);
    }
}
