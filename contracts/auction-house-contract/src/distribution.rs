use soroban_sdk::{token, Address, Env};

// Transfer tokens to contract
pub fn transfer_to_contract(env: &Env, token: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), amount);
}

/// Payout attempt that reports failure instead of trapping, so callers can
/// keep the owed amount on the books when the recipient cannot take funds.
pub fn try_transfer_from_contract(env: &Env, token: &Address, to: &Address, amount: &i128) -> bool {
    token::Client::new(env, token)
        .try_transfer(&env.current_contract_address(), to, amount)
        .is_ok()
}
