use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted data: {reason}")]
    Corrupted { reason: String },

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid save slot: {slot}")]
    InvalidSlot { slot: i64 },

    #[error("Save data too large: {size} players")]
    DataTooLarge { size: usize },
}

impl SaveError {
    pub fn corrupted(reason: impl Into<String>) -> Self {
        SaveError::Corrupted { reason: reason.into() }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::FileNotFound { .. } => true,
            SaveError::VersionMismatch { .. } => true,
            SaveError::InvalidSlot { .. } => false,
            SaveError::Corrupted { .. } => false,
            SaveError::ChecksumMismatch => false,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        assert!(SaveError::FileNotFound { path: "x".into() }.is_recoverable());
        assert!(!SaveError::ChecksumMismatch.is_recoverable());
        assert!(!SaveError::corrupted("duplicate player id 4").is_recoverable());
        assert_eq!(SaveError::InvalidSlot { slot: 7 }.to_string(), "Invalid save slot: 7");
    }
}
