//! Ticket ledger instruction handlers

use anchor_lang::prelude::*;

use crate::constants::TICKET_SEED;
use crate::contract;
use crate::state::{Ticket, TicketState};
use crate::world_state::{TicketStateStore, TicketStateView};

#[derive(Accounts)]
#[instruction(ticket_id: String)]
pub struct QueryTicketAccountConstraints<'info> {
    /// CHECK: read as raw world state; an unallocated PDA is an absent ticket
    #[account(seeds = [TICKET_SEED, TicketState::seed(&ticket_id).as_ref()], bump)]
    pub ticket: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(ticket_id: String)]
pub struct MutateTicketAccountConstraints<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    // Allocated on demand so the contract, not the loader, decides existence
    #[account(
        init_if_needed,
        payer = authority,
        space = TicketState::DISCRIMINATOR.len() + TicketState::INIT_SPACE,
        seeds = [TICKET_SEED, TicketState::seed(&ticket_id).as_ref()],
        bump
    )]
    pub ticket: Account<'info, TicketState>,
    pub system_program: Program<'info, System>,
}

pub fn ticket_exists(
    context: Context<QueryTicketAccountConstraints>,
    ticket_id: String,
) -> Result<bool> {
    let state = load_ticket_state(&context.accounts.ticket)?;
    let view = TicketStateView::new(&ticket_id, state.as_ref());
    Ok(contract::ticket_exists(&view, &ticket_id)?)
}

pub fn read_ticket(
    context: Context<QueryTicketAccountConstraints>,
    ticket_id: String,
) -> Result<Ticket> {
    let state = load_ticket_state(&context.accounts.ticket)?;
    let view = TicketStateView::new(&ticket_id, state.as_ref());
    Ok(contract::read_ticket(&view, &ticket_id)?)
}

pub fn create_ticket(
    context: Context<MutateTicketAccountConstraints>,
    ticket_id: String,
    value: String,
) -> Result<()> {
    let authority = context.accounts.authority.key();
    let mut store = bind_store(
        &ticket_id,
        &mut context.accounts.ticket,
        context.bumps.ticket,
    );
    contract::create_ticket(&mut store, &ticket_id, &value)?;

    msg!("Created by: {}", authority);
    Ok(())
}

pub fn update_ticket(
    context: Context<MutateTicketAccountConstraints>,
    ticket_id: String,
    new_value: String,
) -> Result<()> {
    let authority = context.accounts.authority.key();
    let mut store = bind_store(
        &ticket_id,
        &mut context.accounts.ticket,
        context.bumps.ticket,
    );
    contract::update_ticket(&mut store, &ticket_id, &new_value)?;

    msg!("Updated by: {}", authority);
    Ok(())
}

pub fn delete_ticket(
    context: Context<MutateTicketAccountConstraints>,
    ticket_id: String,
) -> Result<()> {
    let authority = context.accounts.authority.key();
    let mut store = bind_store(
        &ticket_id,
        &mut context.accounts.ticket,
        context.bumps.ticket,
    );
    contract::delete_ticket(&mut store, &ticket_id)?;

    msg!("Deleted by: {}", authority);
    Ok(())
}

/// Record the canonical bump and hand the account to the contract as world state.
fn bind_store<'a>(
    ticket_id: &'a str,
    state: &'a mut TicketState,
    bump: u8,
) -> TicketStateStore<'a> {
    state.bump = bump;
    TicketStateStore::new(ticket_id, state)
}

/// Decode the ticket PDA if this program has allocated it.
fn load_ticket_state(account: &AccountInfo) -> Result<Option<TicketState>> {
    if account.owner != &crate::ID || account.data_is_empty() {
        return Ok(None);
    }
    let data = account.try_borrow_data()?;
    let state = TicketState::try_deserialize(&mut &data[..])?;
    Ok(Some(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_state::WorldState;

    // Helper: serialized ticket account, discriminator included
    fn account_bytes(ticket_id: &str, record: &[u8]) -> Vec<u8> {
        let state = TicketState {
            ticket_id: ticket_id.to_string(),
            record: record.to_vec(),
            bump: 254,
        };
        let mut data = Vec::new();
        state.try_serialize(&mut data).unwrap();
        data
    }

    // Helper: run `f` against an AccountInfo over `data` owned by `owner`
    fn with_account<T>(
        owner: &Pubkey,
        data: &mut [u8],
        f: impl FnOnce(&AccountInfo) -> T,
    ) -> T {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000u64;
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            data,
            owner,
            false,
            0,
        );
        f(&info)
    }

    #[test]
    fn test_load_allocated_ticket_account() {
        let mut data = account_bytes("1001", br#"{"value":"ticket 1001 value"}"#);
        let state = with_account(&crate::ID, &mut data, load_ticket_state)
            .unwrap()
            .unwrap();
        assert_eq!(state.ticket_id, "1001");
        assert_eq!(state.bump, 254);

        let view = TicketStateView::new("1001", Some(&state));
        assert_eq!(
            contract::read_ticket(&view, "1001").unwrap(),
            Ticket::new("ticket 1001 value")
        );
    }

    #[test]
    fn test_unallocated_account_reads_as_absent() {
        let mut data: Vec<u8> = Vec::new();
        let state = with_account(&crate::ID, &mut data, load_ticket_state).unwrap();
        assert!(state.is_none());

        let view = TicketStateView::new("1003", state.as_ref());
        assert!(!contract::ticket_exists(&view, "1003").unwrap());
    }

    #[test]
    fn test_foreign_owned_account_reads_as_absent() {
        let mut data = account_bytes("1001", br#"{"value":"ticket 1001 value"}"#);
        let foreign_owner = Pubkey::new_unique();
        let state = with_account(&foreign_owner, &mut data, load_ticket_state).unwrap();
        assert!(state.is_none());
    }

    #[test]
    fn test_corrupt_account_fails_to_load() {
        let mut data = b"definitely not a ticket account".to_vec();
        assert!(with_account(&crate::ID, &mut data, load_ticket_state).is_err());

        // Right length, wrong discriminator
        let mut data = account_bytes("1001", b"abc");
        data[0] ^= 0xff;
        assert!(with_account(&crate::ID, &mut data, load_ticket_state).is_err());
    }

    #[test]
    fn test_bind_store_records_bump() {
        let mut state = TicketState {
            ticket_id: String::new(),
            record: Vec::new(),
            bump: 0,
        };
        {
            let mut store = bind_store("1003", &mut state, 251);
            contract::create_ticket(&mut store, "1003", "ticket 1003 value").unwrap();
            assert!(store.get_state("1003").is_ok());
        }
        assert_eq!(state.bump, 251);
        assert_eq!(state.ticket_id, "1003");
        assert_eq!(state.record, br#"{"value":"ticket 1003 value"}"#.to_vec());
    }
}
