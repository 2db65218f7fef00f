use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol representing ELECTION events.
pub const ELECTION: Symbol = symbol_short!("ELECTION");

// Symbol representing VOTE events.
pub const VOTE: Symbol = symbol_short!("VOTE");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    pub voter: Address,
    pub candidate_id: u32,
}
