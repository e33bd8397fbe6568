//! Transfer & contract subsystem

pub mod contracts;
pub mod transfer;

pub use contracts::{process_contracts, renewal_chance, ContractEvent};
pub use transfer::{reputation_gain, transfer_player, TransferOutcome};
