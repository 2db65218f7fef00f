use soroban_sdk::{Address, Env};

use crate::event::{Refund, AUCTION, REFUND};
use crate::{distribution, errors::AuctionError, types::*};

pub fn record_bid(
    env: &Env,
    auction_data: &mut Auction,
    new_bidder: Address,
    new_bid_amount: i128,
) -> Result<(), AuctionError> {
    // Check if bidder can bid
    auction_data.check_open(env)?;
    auction_data.check_bid_amount(new_bid_amount)?;

    // Lock the bid in the contract
    distribution::transfer_to_contract(env, &auction_data.token, &new_bidder, &new_bid_amount);

    // The outbid leader's stake is credited to the refund ledger first, then
    // pushed back. A failed push leaves the balance claimable via
    // `claim_refund` rather than losing it.
    if let Some(prev_bidder) = auction_data.highest_bidder.clone() {
        let owed = refund_balance(env, auction_data.id, &prev_bidder) + auction_data.highest_bid;
        set_refund_balance(env, auction_data.id, &prev_bidder, &owed);

        if distribution::try_transfer_from_contract(env, &auction_data.token, &prev_bidder, &owed) {
            clear_refund_balance(env, auction_data.id, &prev_bidder);

            env.events().publish(
                (AUCTION, REFUND, prev_bidder.clone()),
                Refund {
                    auction_id: auction_data.id,
                    bidder: prev_bidder,
                    amount: owed,
                },
            );
        }
    }

    // Update the leader atomically with the new amount
    auction_data.highest_bidder = Some(new_bidder);
    auction_data.highest_bid = new_bid_amount;

    Ok(())
}

pub fn refund_balance(env: &Env, auction_id: u32, bidder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Refund(auction_id, bidder.clone()))
        .unwrap_or(0)
}

pub fn set_refund_balance(env: &Env, auction_id: u32, bidder: &Address, amount: &i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Refund(auction_id, bidder.clone()), amount);
}

pub fn clear_refund_balance(env: &Env, auction_id: u32, bidder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Refund(auction_id, bidder.clone()));
}
