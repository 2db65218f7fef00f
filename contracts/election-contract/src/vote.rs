use soroban_sdk::{Address, Env, Vec};

use crate::event::{VoteCast, ELECTION, VOTE};
use crate::external::EligibilityClient;
use crate::types::{DataKey, ElectionConfig, ElectionError, ElectionPhase};

pub struct BallotManager;

impl BallotManager {
    pub fn config(env: &Env) -> Result<ElectionConfig, ElectionError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(ElectionError::NotInitialized)
    }

    pub fn phase(env: &Env, config: &ElectionConfig) -> ElectionPhase {
        let now = env.ledger().timestamp();
        if now < config.start_time {
            ElectionPhase::Pending
        } else if now < config.end_time {
            ElectionPhase::Active
        } else {
            ElectionPhase::Closed
        }
    }

    pub fn cast_vote(
        env: &Env,
        voter: Address,
        candidate_id: u32,
    ) -> Result<(), ElectionError> {
        let config = Self::config(env)?;

        if Self::phase(env, &config) != ElectionPhase::Active {
            return Err(ElectionError::VotingNotOpen);
        }

        // Eligibility is decided by the credential registry, not by this
        // contract
        let credential = EligibilityClient::new(env, &config.registry)
            .credential_of(&voter)
            .ok_or(ElectionError::NotEligible)?;

        if env
            .storage()
            .persistent()
            .has(&DataKey::HasVoted(credential))
        {
            return Err(ElectionError::AlreadyVoted);
        }

        let mut tally: Vec<u32> = env.storage().instance().get(&DataKey::Tally).unwrap();
        if candidate_id >= tally.len() {
            return Err(ElectionError::InvalidCandidate);
        }

        env.storage()
            .persistent()
            .set(&DataKey::HasVoted(credential), &true);

        let count = tally.get(candidate_id).unwrap() + 1;
        tally.set(candidate_id, count);
        env.storage().instance().set(&DataKey::Tally, &tally);

        let votes_cast: u32 = env
            .storage()
            .instance()
            .get(&DataKey::VotesCast)
            .unwrap_or(0)
            + 1;
        env.storage().instance().set(&DataKey::VotesCast, &votes_cast);

        env.events().publish(
            (ELECTION, VOTE, voter.clone()),
            VoteCast {
                voter,
                candidate_id,
            },
        );

        Ok(())
    }

    pub fn results(env: &Env) -> Result<Vec<u32>, ElectionError> {
        env.storage()
            .instance()
            .get(&DataKey::Tally)
            .ok_or(ElectionError::NotInitialized)
    }

    pub fn votes_cast(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::VotesCast)
            .unwrap_or(0)
    }
}
