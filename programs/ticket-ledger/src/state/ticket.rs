//! Ticket record and the account that holds it in world state

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_RECORD_LEN, MAX_TICKET_ID_LEN, TICKET_SEED};

/// The ticket record. Its JSON form, `{"value":"..."}`, is the stored wire format.
#[derive(
    AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq,
)]
#[serde(deny_unknown_fields)]
pub struct Ticket {
    pub value: String,
}

impl Ticket {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// World-state slot for one ticket id, derived from `[TICKET_SEED, sha256(ticket_id)]`.
#[account]
#[derive(InitSpace)]
pub struct TicketState {
    /// Key this slot was written under (empty until first write)
    #[max_len(MAX_TICKET_ID_LEN)]
    pub ticket_id: String,
    /// Serialized record; empty means no live ticket
    #[max_len(MAX_RECORD_LEN)]
    pub record: Vec<u8>,
    /// PDA bump
    pub bump: u8,
}

impl TicketState {
    /// Fixed-width PDA seed for `ticket_id`. Ids of any length hash to 32 bytes,
    /// the most a single seed may hold.
    pub fn seed(ticket_id: &str) -> [u8; 32] {
        hash(ticket_id.as_bytes()).to_bytes()
    }

    pub fn address(ticket_id: &str) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[TICKET_SEED, Self::seed(ticket_id).as_ref()],
            &crate::ID,
        )
    }
}
