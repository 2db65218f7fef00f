use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub id: u32,
    pub seller: Address,
    pub item: String,
    pub min_price: i128,
    pub end_time: u64,
    pub token: Address,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub settled: bool,
}

/// Lifecycle phase of an auction, always derived from the ledger clock and
/// the stored `end_time`/`settled` fields rather than stored itself.
#[contracttype]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum AuctionPhase {
    Open,
    Ended,
    Settled,
}

/// Keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Auctions,             // Append-only list of auction ids, creation order
    NextAuctionId,        // Counter for assigning auction ids
    Auction(u32),         // One auction record per id
    Refund(u32, Address), // Outstanding refundable balance per auction/bidder
}
