use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    StateNotAlreadySet = 2,
    TokenAlreadyMinted = 3,
    TokenNotFound = 4,
    NotTokenOwner = 5,
    NotAuthorized = 6,
}

/// A non-fungible asset: the contract that issued it plus its token id.
/// Used as the custody key across the whole protocol.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub contract: Address,
    pub token_id: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    TokenOwner(u64),
    OperatorApproval(Address, Address), // (owner, operator)
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
