use super::player::PlayerId;
use serde::{Deserialize, Serialize};

/// The player-controlled football agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub name: String,
    pub balance: f64,
    /// 0-100
    pub reputation: f64,
    pub clients: Vec<PlayerId>,
    /// Players who approached the agent and have not been signed yet
    pub offers: Vec<PlayerId>,
}

impl Agent {
    pub fn new(name: impl Into<String>, balance: f64, reputation: f64) -> Self {
        Self { name: name.into(), balance, reputation, clients: Vec::new(), offers: Vec::new() }
    }

    pub fn has_client(&self, id: PlayerId) -> bool {
        self.clients.contains(&id)
    }

    pub fn has_offer(&self, id: PlayerId) -> bool {
        self.offers.contains(&id)
    }

    /// Add a client (no duplicates) and drop any pending offer for them
    pub fn sign_client(&mut self, id: PlayerId) {
        if !self.clients.contains(&id) {
            self.clients.push(id);
        }
        self.offers.retain(|&offer| offer != id);
    }

    pub fn add_offer(&mut self, id: PlayerId) {
        if !self.offers.contains(&id) && !self.clients.contains(&id) {
            self.offers.push(id);
        }
    }

    /// Raise reputation, capped at 100
    pub fn gain_reputation(&mut self, amount: f64) {
        self.reputation = (self.reputation + amount).clamp(0.0, 100.0);
    }
}
