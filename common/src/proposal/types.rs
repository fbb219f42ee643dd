use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    StateNotAlreadySet = 2,
    ProposalNotFound = 3,
    ProposalInvalid = 4,
    NotProposalCreator = 5,
    InvalidTimeWindow = 6,
    ListingInvalid = 7,
    ListingExpired = 8,
    ProposalExpired = 9,
    NotListingCreator = 10,
    NotAssetOwner = 11,
    VaultNotApproved = 12,
    InsufficientAllowance = 13,
    InsufficientBalance = 14,
}

/// A counterparty's bid against a listing, specifying timing and proration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub listing_id: u64,
    pub creator: Address,
    pub window_start: u64, // epoch seconds, within the listing's window
    pub window_end: u64,   // acceptance deadline
    pub rental_end: u64,   // scheduled end of the rental itself
    pub is_pro_rated: bool,
    pub status: ProposalStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ProposalParams {
    pub window_start: u64,
    pub window_end: u64,
    pub rental_end: u64,
    pub is_pro_rated: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalStatus {
    Pending = 1,
    Accepted = 2,
    // Reserved: no operation currently refuses a proposal.
    Refused = 3,
    Cancelled = 4,
}

impl ProposalStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ProposalStatus::Pending)
    }

    pub fn can_transition(self, to: ProposalStatus) -> bool {
        matches!(
            (self, to),
            (ProposalStatus::Pending, ProposalStatus::Accepted)
                | (ProposalStatus::Pending, ProposalStatus::Refused)
                | (ProposalStatus::Pending, ProposalStatus::Cancelled)
        )
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Proposal(u64),
    ProposalCount,
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const LISTING_CONTRACT: Symbol = symbol_short!("LIST_CA");
pub const RENTAL_CONTRACT: Symbol = symbol_short!("RENT_CA");
pub const VAULT_CONTRACT: Symbol = symbol_short!("VAULT_CA");
pub const COLLATERAL_TOKEN: Symbol = symbol_short!("COL_TOKEN");
