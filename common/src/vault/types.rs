use crate::nft::types::AssetRef;
use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    StateNotAlreadySet = 2,
    NotClaimant = 3,
    AssetNotInCustody = 4,
    NoBalance = 5,
    InsufficientCollateral = 6,
    InvalidCommissionRate = 7,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Party entitled to reclaim the asset once it is back in custody.
    AssetClaimant(AssetRef),
    /// Withdrawable rental revenue per (owner, token).
    OwnerBalance(Address, Address),
    /// Accumulated commission pool per token.
    ProtocolBalance(Address),
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const RENTAL_CONTRACT: Symbol = symbol_short!("RENT_CA");
pub const COMMISSION_RATE: Symbol = symbol_short!("COM_RATE");
