use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    // Creation-time validation
    InvalidWindow = 101,
    InvalidPrice = 102,

    // Lifecycle
    AuctionNotFound = 201,
    AuctionClosed = 202,
    BidTooLow = 203,
    NotSeller = 204,
    AuctionNotEnded = 205,
    AlreadySettled = 206,

    // Payouts
    TransferFailed = 301,
}
