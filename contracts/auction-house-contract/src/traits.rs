use crate::errors::AuctionError;
use crate::types::*;
use soroban_sdk::{Address, Env, String, Vec};

/// Interface for the auction house contract.
pub trait AuctionHouseTrait {
    /// List a new item for auction. Returns the new auction's id.
    fn create_auction(
        env: Env,
        seller: Address,
        token: Address,
        item: String,
        min_price: i128,
        end_time: u64,
    ) -> Result<u32, AuctionError>;

    /// Place a bid on an open auction, refunding the previous leader.
    fn place_bid(
        env: Env,
        auction_id: u32,
        bidder: Address,
        amount: i128,
    ) -> Result<(), AuctionError>;

    /// Pull fallback for refunds that could not be pushed on outbid.
    fn claim_refund(env: Env, auction_id: u32, claimant: Address) -> Result<(), AuctionError>;

    /// Seller's one-time settlement after the auction window closes.
    fn withdraw(env: Env, auction_id: u32, caller: Address) -> Result<(), AuctionError>;

    fn get_auction(env: Env, auction_id: u32) -> Option<Auction>;

    fn get_auctions(env: Env) -> Vec<u32>;

    fn get_phase(env: Env, auction_id: u32) -> Result<AuctionPhase, AuctionError>;

    fn get_refund(env: Env, auction_id: u32, bidder: Address) -> i128;
}
