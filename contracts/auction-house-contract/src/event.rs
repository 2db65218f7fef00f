use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol};

// Symbol representing AUCTION events.
pub const AUCTION: Symbol = symbol_short!("AUCTION");

// Symbol representing CREATE events.
pub const CREATE: Symbol = symbol_short!("CREATE");

// Symbol representing BID events.
pub const BID: Symbol = symbol_short!("BID");

// Symbol representing REFUND events.
pub const REFUND: Symbol = symbol_short!("REFUND");

// Symbol representing END events.
pub const END: Symbol = symbol_short!("END");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    pub auction_id: u32,
    pub seller: Address,
    pub item: String,
    pub min_price: i128,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewBid {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refund {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEnded {
    pub auction_id: u32,
    pub winner: Option<Address>,
    pub amount: i128,
}
