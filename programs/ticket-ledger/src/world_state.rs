//! World-state access for the ticket contract.
//!
//! The contract only ever sees a [`WorldState`]: three byte-level primitives keyed by
//! string. On chain, a ticket's state is a single PDA, so the adapters here are bound
//! to the one key that PDA was derived from and refuse any other.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::constants::{MAX_RECORD_LEN, MAX_TICKET_ID_LEN};
use crate::error::LedgerError;
use crate::state::TicketState;

/// Key-value capability supplied with each transaction.
pub trait WorldState {
    /// Bytes stored at `key`; empty when nothing is stored.
    fn get_state(&self, key: &str) -> Result<Vec<u8>>;

    /// Write or overwrite the bytes at `key`.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove whatever is stored at `key`.
    fn delete_state(&mut self, key: &str) -> Result<()>;
}

/// Ordered in-memory world state for off-chain simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryWorldState {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WorldState for MemoryWorldState {
    fn get_state(&self, key: &str) -> Result<Vec<u8>> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Read-only view over a ticket PDA. `None` is an account that was never allocated.
pub struct TicketStateView<'a> {
    key: &'a str,
    state: Option<&'a TicketState>,
}

impl<'a> TicketStateView<'a> {
    pub fn new(key: &'a str, state: Option<&'a TicketState>) -> Self {
        Self { key, state }
    }
}

impl WorldState for TicketStateView<'_> {
    fn get_state(&self, key: &str) -> Result<Vec<u8>> {
        require!(key == self.key, LedgerError::KeyNotBound);
        Ok(self.state.map(|state| state.record.clone()).unwrap_or_default())
    }

    fn put_state(&mut self, _key: &str, _value: &[u8]) -> Result<()> {
        err!(LedgerError::ReadOnlyWorldState)
    }

    fn delete_state(&mut self, _key: &str) -> Result<()> {
        err!(LedgerError::ReadOnlyWorldState)
    }
}

/// Mutable store over an allocated ticket PDA.
pub struct TicketStateStore<'a> {
    key: &'a str,
    state: &'a mut TicketState,
}

impl<'a> TicketStateStore<'a> {
    pub fn new(key: &'a str, state: &'a mut TicketState) -> Self {
        Self { key, state }
    }
}

impl WorldState for TicketStateStore<'_> {
    fn get_state(&self, key: &str) -> Result<Vec<u8>> {
        require!(key == self.key, LedgerError::KeyNotBound);
        Ok(self.state.record.clone())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<()> {
        require!(key == self.key, LedgerError::KeyNotBound);
        require!(key.len() <= MAX_TICKET_ID_LEN, LedgerError::TicketIdTooLong);
        require!(value.len() <= MAX_RECORD_LEN, LedgerError::TicketRecordTooLarge);
        self.state.ticket_id = key.to_string();
        self.state.record = value.to_vec();
        Ok(())
    }

    // The account stays allocated; an empty record reads as absent.
    fn delete_state(&mut self, key: &str) -> Result<()> {
        require!(key == self.key, LedgerError::KeyNotBound);
        self.state.record.clear();
        Ok(())
    }
}
