#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, Symbol,
};

// Symbol representing REGISTRY events.
pub const REGISTRY: Symbol = symbol_short!("REGISTRY");

// Symbol representing REGISTER events.
pub const REGISTER: Symbol = symbol_short!("REGISTER");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegistered {
    pub voter: Address,
    pub credential: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAdmin = 3,
    AlreadyRegistered = 4,
}

/// Keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    NextCredentialId,
    Credential(Address), // Credential id held by a registered voter
}

#[contract]
pub struct VotingNftContract;

#[contractimpl]
impl VotingNftContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::NextCredentialId, &0u64);
        Ok(())
    }

    /// Mints one voting credential for `voter`. Only the administrator may
    /// register voters, and an identity can never hold more than one
    /// credential.
    pub fn register(env: Env, caller: Address, voter: Address) -> Result<u64, RegistryError> {
        caller.require_auth();

        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(RegistryError::NotInitialized)?;
        if caller != admin {
            return Err(RegistryError::NotAdmin);
        }

        if env
            .storage()
            .persistent()
            .has(&DataKey::Credential(voter.clone()))
        {
            return Err(RegistryError::AlreadyRegistered);
        }

        let credential: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextCredentialId)
            .unwrap_or(0)
            + 1;
        env.storage()
            .instance()
            .set(&DataKey::NextCredentialId, &credential);
        env.storage()
            .persistent()
            .set(&DataKey::Credential(voter.clone()), &credential);

        env.events().publish(
            (REGISTRY, REGISTER, voter.clone()),
            VoterRegistered { voter, credential },
        );

        Ok(credential)
    }

    pub fn credential_of(env: Env, voter: Address) -> Option<u64> {
        env.storage().persistent().get(&DataKey::Credential(voter))
    }

    pub fn get_admin(env: Env) -> Result<Address, RegistryError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(RegistryError::NotInitialized)
    }
}
