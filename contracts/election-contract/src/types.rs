use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ElectionError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidWindow = 3,
    NoCandidates = 4,
    VotingNotOpen = 5,
    NotEligible = 6,
    AlreadyVoted = 7,
    InvalidCandidate = 8,
}

/// Immutable election parameters, fixed at initialization.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ElectionConfig {
    pub admin: Address,
    pub registry: Address, // Voting NFT contract issuing credentials
    pub candidates: Vec<String>,
    pub start_time: u64,
    pub end_time: u64,
}

/// Lifecycle phase, always derived from the ledger clock against the stored
/// window boundaries.
#[contracttype]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ElectionPhase {
    Pending,
    Active,
    Closed,
}

/// Keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Tally,         // Per-candidate vote counts, parallel to the candidate list
    VotesCast,     // Total accepted votes, equals the number of voted credentials
    HasVoted(u64), // Credential ids that have already voted
}
