use soroban_sdk::Env;

use crate::{errors::AuctionError, types::*};

impl Auction {
    /// Current lifecycle phase, derived from the ledger clock so the stored
    /// record can never drift out of sync with time.
    pub fn phase(&self, env: &Env) -> AuctionPhase {
        if self.settled {
            AuctionPhase::Settled
        } else if env.ledger().timestamp() > self.end_time {
            AuctionPhase::Ended
        } else {
            AuctionPhase::Open
        }
    }

    pub fn check_open(&self, env: &Env) -> Result<(), AuctionError> {
        match self.phase(env) {
            AuctionPhase::Open => Ok(()),
            _ => Err(AuctionError::AuctionClosed),
        }
    }

    /// A first bid competes against the minimum price, later bids against the
    /// current leader. Ties are rejected.
    pub fn check_bid_amount(&self, amount: i128) -> Result<(), AuctionError> {
        match self.highest_bidder {
            Some(_) => {
                if amount <= self.highest_bid {
                    return Err(AuctionError::BidTooLow);
                }
            }
            None => {
                if amount < self.min_price {
                    return Err(AuctionError::BidTooLow);
                }
            }
        }
        Ok(())
    }
}
