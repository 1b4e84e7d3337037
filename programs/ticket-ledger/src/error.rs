use anchor_lang::prelude::*;

use crate::contract::ContractError;

#[error_code]
pub enum LedgerError {
    #[msg("The ticket already exists")]
    TicketAlreadyExists,

    #[msg("The ticket does not exist")]
    TicketDoesNotExist,

    #[msg("The stored ticket record is malformed")]
    MalformedTicketRecord,

    #[msg("The ticket record could not be serialized")]
    TicketSerializationFailed,

    #[msg("World state key does not match the ticket account")]
    KeyNotBound,

    #[msg("World state is read-only for this instruction")]
    ReadOnlyWorldState,

    #[msg("Ticket record exceeds the account capacity")]
    TicketRecordTooLarge,

    #[msg("Ticket id exceeds the account capacity")]
    TicketIdTooLong,
}

// The coded error reaches the client; the full message goes to the program log.
impl From<ContractError> for anchor_lang::error::Error {
    fn from(err: ContractError) -> Self {
        msg!("{}", err);
        match err {
            ContractError::Conflict(_) => error!(LedgerError::TicketAlreadyExists),
            ContractError::NotFound(_) => error!(LedgerError::TicketDoesNotExist),
            ContractError::MalformedRecord { .. } => error!(LedgerError::MalformedTicketRecord),
            ContractError::Serialization(_) => error!(LedgerError::TicketSerializationFailed),
            ContractError::WorldState(inner) => inner,
        }
    }
}
