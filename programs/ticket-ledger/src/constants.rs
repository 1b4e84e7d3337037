// PDA seed prefix for ticket world-state accounts: ["ticket", sha256(ticket_id)]
pub const TICKET_SEED: &[u8] = b"ticket";

// Longest ticket id a ticket account can record
pub const MAX_TICKET_ID_LEN: usize = 64;

// Capacity for the serialized `{"value": ...}` record held by a ticket account
pub const MAX_RECORD_LEN: usize = 512;
