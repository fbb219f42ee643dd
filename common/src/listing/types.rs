use crate::nft::types::AssetRef;
use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    StateNotAlreadySet = 2,
    ListingNotFound = 3,
    ListingInvalid = 4,
    NotListingCreator = 5,
    InvalidTimeWindow = 6,
    ZeroCollateral = 7,
    NotAssetOwner = 8,
    VaultNotApproved = 9,
    AssetAlreadyListed = 10,
}

/// An offer to rent out an asset against a collateral deposit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub id: u64,
    pub creator: Address,
    pub asset: AssetRef,
    pub collateral_amount: i128,
    pub window_start: u64, // epoch seconds
    pub window_end: u64,
    pub price_per_day: i128,
    pub comment: String,
    pub status: ListingStatus,
}

/// Caller-supplied listing terms. The asset ref is fixed at creation and
/// ignored by updates.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ListingParams {
    pub asset: AssetRef,
    pub collateral_amount: i128,
    pub window_start: u64,
    pub window_end: u64,
    pub price_per_day: i128,
    pub comment: String,
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    Pending = 1,
    Completed = 2,
    Cancelled = 3,
}

impl ListingStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, ListingStatus::Completed | ListingStatus::Cancelled)
    }

    /// Central transition table. Completed and Cancelled are terminal.
    pub fn can_transition(self, to: ListingStatus) -> bool {
        matches!(
            (self, to),
            (ListingStatus::Pending, ListingStatus::Completed)
                | (ListingStatus::Pending, ListingStatus::Cancelled)
        )
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(u64),
    ListingCount,
    ActiveListing(AssetRef), // id of the one non-terminal listing per asset
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const PROPOSAL_CONTRACT: Symbol = symbol_short!("PROP_CA");
pub const VAULT_CONTRACT: Symbol = symbol_short!("VAULT_CA");
