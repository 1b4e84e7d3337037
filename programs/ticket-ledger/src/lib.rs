#![allow(unexpected_cfgs)]
// See https://solana.stackexchange.com/questions/17777/unexpected-cfg-condition-value-solana)

pub mod constants;
pub mod contract;
pub mod error;
pub mod handlers;
pub mod state;
pub mod world_state;

use anchor_lang::prelude::*;
use handlers::*;
use state::Ticket;

declare_id!("4Wkyg2oNdbxEmQsgHBrdkwHBHXd4w3dnWWeN6oYCWNGd");

#[program]
pub mod ticket_ledger {
    use super::*;

    /// Report whether a live ticket is stored under `ticket_id`.
    pub fn ticket_exists(
        context: Context<QueryTicketAccountConstraints>,
        ticket_id: String,
    ) -> Result<bool> {
        handlers::ticket::ticket_exists(context, ticket_id)
    }

    /// Store a new ticket; fails if one already exists.
    pub fn create_ticket(
        context: Context<MutateTicketAccountConstraints>,
        ticket_id: String,
        value: String,
    ) -> Result<()> {
        handlers::ticket::create_ticket(context, ticket_id, value)
    }

    /// Return the stored ticket record.
    pub fn read_ticket(
        context: Context<QueryTicketAccountConstraints>,
        ticket_id: String,
    ) -> Result<Ticket> {
        handlers::ticket::read_ticket(context, ticket_id)
    }

    /// Replace the value of an existing ticket.
    pub fn update_ticket(
        context: Context<MutateTicketAccountConstraints>,
        ticket_id: String,
        new_value: String,
    ) -> Result<()> {
        handlers::ticket::update_ticket(context, ticket_id, new_value)
    }

    /// Remove an existing ticket.
    pub fn delete_ticket(
        context: Context<MutateTicketAccountConstraints>,
        ticket_id: String,
    ) -> Result<()> {
        handlers::ticket::delete_ticket(context, ticket_id)
    }
}
