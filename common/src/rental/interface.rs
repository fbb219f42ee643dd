use super::types::{Error, Rental};
use crate::nft::types::AssetRef;
use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol};

#[contractclient(name = "RentalContractClient")]
pub trait RentalContractTrait {
    fn initialize(
        env: Env,
        admin: Address,
        proposal_contract_id: Address,
        vault_contract_id: Address,
        collateral_token: Address,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    /// Restricted to the proposal contract; performs the custody swap.
    #[allow(clippy::too_many_arguments)]
    fn create_rental(
        env: Env,
        owner: Address,
        renter: Address,
        asset: AssetRef,
        collateral_amount: i128,
        price_per_day: i128,
        ending_date: u64,
        is_pro_rated: bool,
        listing_id: u64,
        proposal_id: u64,
    ) -> u64;
    fn refund_rental(env: Env, caller: Address, rental_id: u64) -> Result<(), Error>;
    fn liquidate_rental(env: Env, caller: Address, rental_id: u64) -> Result<(), Error>;
    fn get_rental(env: Env, rental_id: u64) -> Result<Rental, Error>;
    fn get_rental_count(env: Env) -> u64;
}
