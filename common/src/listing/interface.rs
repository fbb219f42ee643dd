use super::types::{Error, Listing, ListingParams};
use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol};

#[contractclient(name = "ListingContractClient")]
pub trait ListingContractTrait {
    fn initialize(
        env: Env,
        admin: Address,
        proposal_contract_id: Address,
        vault_contract_id: Address,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn create_listing(env: Env, creator: Address, params: ListingParams) -> Result<u64, Error>;
    fn update_listing(
        env: Env,
        caller: Address,
        listing_id: u64,
        params: ListingParams,
    ) -> Result<(), Error>;
    fn cancel_listing(env: Env, caller: Address, listing_id: u64) -> Result<(), Error>;
    fn complete_listing(env: Env, listing_id: u64) -> Result<(), Error>;
    fn get_listing(env: Env, listing_id: u64) -> Result<Listing, Error>;
    fn get_listing_count(env: Env) -> u64;
}
