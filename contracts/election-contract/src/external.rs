use soroban_sdk::{contractclient, Address};

/// Interface of the voting NFT contract, the registry that issues one voting
/// credential per eligible identity.
#[allow(dead_code)]
#[contractclient(name = "EligibilityClient")]
pub trait EligibilityProvider {
    /// Returns the credential id held by `voter`, if any.
    fn credential_of(voter: Address) -> Option<u64>;
}
