//! Ticket contract operations.
//!
//! Each operation is a single existence check followed by at most one write or
//! delete against the supplied [`WorldState`]. Nothing is held between calls.

use anchor_lang::prelude::msg;
use thiserror::Error;

use crate::state::Ticket;
use crate::world_state::WorldState;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("The ticket {0} already exists")]
    Conflict(String),

    #[error("The ticket {0} does not exist")]
    NotFound(String),

    #[error("The ticket {ticket_id} holds a malformed record: {reason}")]
    MalformedRecord { ticket_id: String, reason: String },

    #[error("Failed to serialize ticket record: {0}")]
    Serialization(String),

    #[error("World state access failed: {0}")]
    WorldState(anchor_lang::error::Error),
}

pub type ContractResult<T> = std::result::Result<T, ContractError>;

pub fn ticket_exists<S: WorldState + ?Sized>(ctx: &S, ticket_id: &str) -> ContractResult<bool> {
    let bytes = ctx.get_state(ticket_id).map_err(ContractError::WorldState)?;
    Ok(!bytes.is_empty())
}

pub fn create_ticket<S: WorldState + ?Sized>(
    ctx: &mut S,
    ticket_id: &str,
    value: &str,
) -> ContractResult<()> {
    if ticket_exists(&*ctx, ticket_id)? {
        return Err(ContractError::Conflict(ticket_id.to_string()));
    }
    write_record(ctx, ticket_id, value)?;
    msg!("Ticket {} created", ticket_id);
    Ok(())
}

pub fn read_ticket<S: WorldState + ?Sized>(ctx: &S, ticket_id: &str) -> ContractResult<Ticket> {
    let bytes = ctx.get_state(ticket_id).map_err(ContractError::WorldState)?;
    if bytes.is_empty() {
        return Err(ContractError::NotFound(ticket_id.to_string()));
    }
    Ticket::from_bytes(&bytes).map_err(|e| ContractError::MalformedRecord {
        ticket_id: ticket_id.to_string(),
        reason: e.to_string(),
    })
}

/// Replaces the whole record; nothing from the previous value is kept.
pub fn update_ticket<S: WorldState + ?Sized>(
    ctx: &mut S,
    ticket_id: &str,
    new_value: &str,
) -> ContractResult<()> {
    require_live(&*ctx, ticket_id)?;
    write_record(ctx, ticket_id, new_value)?;
    msg!("Ticket {} updated", ticket_id);
    Ok(())
}

pub fn delete_ticket<S: WorldState + ?Sized>(ctx: &mut S, ticket_id: &str) -> ContractResult<()> {
    require_live(&*ctx, ticket_id)?;
    ctx.delete_state(ticket_id).map_err(ContractError::WorldState)?;
    msg!("Ticket {} deleted", ticket_id);
    Ok(())
}

fn require_live<S: WorldState + ?Sized>(ctx: &S, ticket_id: &str) -> ContractResult<()> {
    if !ticket_exists(ctx, ticket_id)? {
        return Err(ContractError::NotFound(ticket_id.to_string()));
    }
    Ok(())
}

fn write_record<S: WorldState + ?Sized>(
    ctx: &mut S,
    ticket_id: &str,
    value: &str,
) -> ContractResult<()> {
    let bytes = Ticket::new(value)
        .to_bytes()
        .map_err(|e| ContractError::Serialization(e.to_string()))?;
    ctx.put_state(ticket_id, &bytes).map_err(ContractError::WorldState)
}
