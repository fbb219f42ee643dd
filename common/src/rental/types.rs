use crate::nft::types::AssetRef;
use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

/// Billing granularity. All timestamps are epoch seconds.
pub const SECONDS_PER_DAY: u64 = 86_400;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    StateNotAlreadySet = 2,
    RentalNotFound = 3,
    RentalInvalid = 4,
    NotRenter = 5,
    NotRentalOwner = 6,
    RentalNotEnded = 7,
    NotAssetOwner = 8,
    VaultNotApproved = 9,
}

/// The active custody-and-billing agreement created when a proposal is
/// accepted. Immutable after creation except for the status.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rental {
    pub id: u64,
    pub owner: Address,
    pub renter: Address,
    pub asset: AssetRef,
    pub collateral_amount: i128,
    pub price_per_day: i128,
    pub starting_date: u64,
    pub ending_date: u64,
    pub is_pro_rated: bool,
    pub listing_id: u64,
    pub proposal_id: u64,
    pub status: RentalStatus,
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RentalStatus {
    Active = 1,
    // Reserved: no operation currently expires a rental in place.
    Expired = 2,
    Refund = 3,
    Liquidated = 4,
}

impl RentalStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RentalStatus::Refund | RentalStatus::Liquidated)
    }

    /// Refund and Liquidated are mutually exclusive terminal states: the
    /// first transition to commit wins.
    pub fn can_transition(self, to: RentalStatus) -> bool {
        matches!(
            (self, to),
            (RentalStatus::Active, RentalStatus::Refund)
                | (RentalStatus::Active, RentalStatus::Liquidated)
                | (RentalStatus::Active, RentalStatus::Expired)
        )
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Rental(u64),
    RentalCount,
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const PROPOSAL_CONTRACT: Symbol = symbol_short!("PROP_CA");
pub const VAULT_CONTRACT: Symbol = symbol_short!("VAULT_CA");
pub const COLLATERAL_TOKEN: Symbol = symbol_short!("COL_TOKEN");
