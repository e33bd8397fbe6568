use super::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    Welcome,
    NewClient,
    TransferWindow,
    PlayerOffer,
    ContractRenewal,
    ContractExpiry,
    TransferComplete,
    TransferNews,
    EndOfSeason,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub timestamp: Option<DateTime<Utc>>,
    pub player_id: Option<PlayerId>,
}

/// Append-only notification list; entries are never removed, only marked read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
    next_id: u64,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id (ids start at 1)
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, player_id: Option<PlayerId>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Notification {
            id,
            kind,
            message: message.into(),
            read: false,
            timestamp: Some(Utc::now()),
            player_id,
        });
        id
    }

    /// Returns false when no entry has that id
    pub fn mark_read(&mut self, id: u64) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) => {
                entry.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn of_kind(&self, kind: NotificationKind) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(move |n| n.kind == kind)
    }

    pub fn last(&self) -> Option<&Notification> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_mark_read() {
        let mut log = NotificationLog::new();
        let first = log.push(NotificationKind::Welcome, "Welcome", None);
        let second = log.push(NotificationKind::PlayerOffer, "Offer", Some(12));

        assert_ne!(first, second);
        assert_eq!(log.unread_count(), 2);
        assert!(log.mark_read(second));
        assert_eq!(log.unread_count(), 1);
        assert!(!log.mark_read(999));

        log.mark_all_read();
        assert_eq!(log.unread_count(), 0);
        assert_eq!(log.len(), 2);
        assert_eq!(log.of_kind(NotificationKind::PlayerOffer).next().unwrap().player_id, Some(12));
    }

    #[test]
    fn test_kind_serializes_camel_case() {
        let json = serde_json::to_string(&NotificationKind::TransferComplete).unwrap();
        assert_eq!(json, "\"transferComplete\"");
    }
}
