#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub mod event;
pub mod external;
pub mod types;
pub mod vote;

use types::{DataKey, ElectionConfig, ElectionError, ElectionPhase};
use vote::BallotManager;

pub trait ElectionTrait {
    /// Set up the election: administrator, credential registry, candidate
    /// list (index is the candidate's id) and voting window.
    fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        candidates: Vec<String>,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), ElectionError>;

    /// Cast the caller's single vote for a candidate during the active
    /// window.
    fn vote(env: Env, voter: Address, candidate_id: u32) -> Result<(), ElectionError>;

    /// Per-candidate counts, parallel to the candidate list. In-progress
    /// during the active window, final once closed.
    fn get_results(env: Env) -> Result<Vec<u32>, ElectionError>;

    fn get_phase(env: Env) -> Result<ElectionPhase, ElectionError>;

    fn get_candidates(env: Env) -> Result<Vec<String>, ElectionError>;

    fn get_votes_cast(env: Env) -> u32;

    fn get_admin(env: Env) -> Result<Address, ElectionError>;
}

#[contract]
pub struct ElectionContract;

#[contractimpl]
impl ElectionTrait for ElectionContract {
    fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        candidates: Vec<String>,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), ElectionError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(ElectionError::AlreadyInitialized);
        }
        admin.require_auth();

        if candidates.is_empty() {
            return Err(ElectionError::NoCandidates);
        }
        if start_time >= end_time {
            return Err(ElectionError::InvalidWindow);
        }

        let mut tally: Vec<u32> = Vec::new(&env);
        for _ in 0..candidates.len() {
            tally.push_back(0);
        }

        let config = ElectionConfig {
            admin,
            registry,
            candidates,
            start_time,
            end_time,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::Tally, &tally);
        env.storage().instance().set(&DataKey::VotesCast, &0u32);

        Ok(())
    }

    fn vote(env: Env, voter: Address, candidate_id: u32) -> Result<(), ElectionError> {
        voter.require_auth();

        BallotManager::cast_vote(&env, voter, candidate_id)
    }

    fn get_results(env: Env) -> Result<Vec<u32>, ElectionError> {
        BallotManager::results(&env)
    }

    fn get_phase(env: Env) -> Result<ElectionPhase, ElectionError> {
        let config = BallotManager::config(&env)?;
        Ok(BallotManager::phase(&env, &config))
    }

    fn get_candidates(env: Env) -> Result<Vec<String>, ElectionError> {
        Ok(BallotManager::config(&env)?.candidates)
    }

    fn get_votes_cast(env: Env) -> u32 {
        BallotManager::votes_cast(&env)
    }

    fn get_admin(env: Env) -> Result<Address, ElectionError> {
        Ok(BallotManager::config(&env)?.admin)
    }
}
