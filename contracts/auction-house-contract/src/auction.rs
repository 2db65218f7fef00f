use crate::event::{AuctionCreated, AuctionEnded, NewBid, AUCTION, BID, CREATE, END, REFUND};
use crate::traits::AuctionHouseTrait;
use crate::{bid, distribution, errors::AuctionError, event::Refund, types::*};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct AuctionHouseContract;

#[contractimpl]
impl AuctionHouseTrait for AuctionHouseContract {
    /// Lists a new item for auction and registers it in creation order.
    fn create_auction(
        env: Env,
        seller: Address,
        token: Address,
        item: String,
        min_price: i128,
        end_time: u64,
    ) -> Result<u32, AuctionError> {
        seller.require_auth(); // Ensure caller is authenticated as the auction seller

        if end_time <= env.ledger().timestamp() {
            return Err(AuctionError::InvalidWindow);
        }

        if min_price <= 0 {
            return Err(AuctionError::InvalidPrice);
        }

        let auction_id = Self::_next_auction_id(&env);

        let auction = Auction {
            id: auction_id,
            seller: seller.clone(),
            item: item.clone(),
            min_price,
            end_time,
            token,
            highest_bid: 0,
            highest_bidder: None,
            settled: false,
        };

        Self::_save_auction(&env, auction_id, &auction);
        Self::_register_auction(&env, auction_id);

        env.events().publish(
            (AUCTION, CREATE, seller.clone()),
            AuctionCreated {
                auction_id,
                seller,
                item,
                min_price,
                end_time,
            },
        );

        Ok(auction_id)
    }

    /// Places a bid on an open auction. The previous leader's stake is
    /// refunded as part of the same call, falling back to the refund ledger
    /// when the push payout cannot complete.
    fn place_bid(
        env: Env,
        auction_id: u32,
        bidder: Address,
        amount: i128,
    ) -> Result<(), AuctionError> {
        bidder.require_auth(); // Ensure bidder is authenticated

        let mut auction_data = Self::_get_auction(&env, auction_id)
            .ok_or(AuctionError::AuctionNotFound)?;

        bid::record_bid(&env, &mut auction_data, bidder.clone(), amount)?;

        Self::_save_auction(&env, auction_id, &auction_data);

        env.events().publish(
            (AUCTION, BID, bidder.clone()),
            NewBid {
                auction_id,
                bidder,
                amount,
            },
        );

        Ok(())
    }

    /// Pays out the claimant's outstanding refundable balance, if any.
    /// Claiming with no balance is a no-op, not an error.
    fn claim_refund(env: Env, auction_id: u32, claimant: Address) -> Result<(), AuctionError> {
        claimant.require_auth();

        let auction_data = Self::_get_auction(&env, auction_id)
            .ok_or(AuctionError::AuctionNotFound)?;

        let owed = bid::refund_balance(&env, auction_id, &claimant);
        if owed == 0 {
            return Ok(());
        }

        if !distribution::try_transfer_from_contract(&env, &auction_data.token, &claimant, &owed) {
            // Balance stays on the books for a later claim
            return Err(AuctionError::TransferFailed);
        }

        bid::clear_refund_balance(&env, auction_id, &claimant);

        env.events().publish(
            (AUCTION, REFUND, claimant.clone()),
            Refund {
                auction_id,
                bidder: claimant,
                amount: owed,
            },
        );

        Ok(())
    }

    /// Settles an ended auction, transferring the winning bid to the seller.
    /// Succeeds exactly once; an auction with no bids settles with no payout.
    fn withdraw(env: Env, auction_id: u32, caller: Address) -> Result<(), AuctionError> {
        caller.require_auth();

        let mut auction_data = Self::_get_auction(&env, auction_id)
            .ok_or(AuctionError::AuctionNotFound)?;

        if caller != auction_data.seller {
            return Err(AuctionError::NotSeller);
        }

        match auction_data.phase(&env) {
            AuctionPhase::Open => return Err(AuctionError::AuctionNotEnded),
            AuctionPhase::Settled => return Err(AuctionError::AlreadySettled),
            AuctionPhase::Ended => (),
        }

        if auction_data.highest_bid > 0
            && !distribution::try_transfer_from_contract(
                &env,
                &auction_data.token,
                &auction_data.seller,
                &auction_data.highest_bid,
            )
        {
            // Nothing is marked settled, the seller can retry
            return Err(AuctionError::TransferFailed);
        }

        auction_data.settled = true;
        Self::_save_auction(&env, auction_id, &auction_data);

        env.events().publish(
            (AUCTION, END, auction_data.seller.clone()),
            AuctionEnded {
                auction_id,
                winner: auction_data.highest_bidder,
                amount: auction_data.highest_bid,
            },
        );

        Ok(())
    }

    fn get_auction(env: Env, auction_id: u32) -> Option<Auction> {
        Self::_get_auction(&env, auction_id)
    }

    fn get_auctions(env: Env) -> Vec<u32> {
        env.storage()
            .instance()
            .get(&DataKey::Auctions)
            .unwrap_or_else(|| Vec::new(&env))
    }

    fn get_phase(env: Env, auction_id: u32) -> Result<AuctionPhase, AuctionError> {
        let auction_data = Self::_get_auction(&env, auction_id)
            .ok_or(AuctionError::AuctionNotFound)?;
        Ok(auction_data.phase(&env))
    }

    fn get_refund(env: Env, auction_id: u32, bidder: Address) -> i128 {
        bid::refund_balance(&env, auction_id, &bidder)
    }
}

impl AuctionHouseContract {
    /// Internal helper to fetch an auction from storage.
    fn _get_auction(env: &Env, auction_id: u32) -> Option<Auction> {
        env.storage().persistent().get(&DataKey::Auction(auction_id))
    }

    /// Internal helper to save an auction to storage.
    fn _save_auction(env: &Env, auction_id: u32, auction: &Auction) {
        env.storage()
            .persistent()
            .set(&DataKey::Auction(auction_id), auction);
    }

    /// Internal helper to allocate the next auction id.
    fn _next_auction_id(env: &Env) -> u32 {
        let next: u32 = env
            .storage()
            .instance()
            .get(&DataKey::NextAuctionId)
            .unwrap_or(0)
            + 1;
        env.storage().instance().set(&DataKey::NextAuctionId, &next);
        next
    }

    /// Internal helper to append an auction id to the registry list.
    fn _register_auction(env: &Env, auction_id: u32) {
        let mut auctions: Vec<u32> = env
            .storage()
            .instance()
            .get(&DataKey::Auctions)
            .unwrap_or_else(|| Vec::new(env));
        auctions.push_back(auction_id);
        env.storage().instance().set(&DataKey::Auctions, &auctions);
    }
}
