use super::types::Error;
use crate::nft::types::AssetRef;
use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol};

#[contractclient(name = "VaultContractClient")]
pub trait VaultContractTrait {
    fn initialize(
        env: Env,
        admin: Address,
        rental_contract_id: Address,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn set_commission_rate(env: Env, rate: u32) -> Result<(), Error>;
    fn get_commission_rate(env: Env) -> u32;

    // Custody primitives, restricted to the rental contract.
    fn transfer_asset_from(env: Env, asset: AssetRef, from: Address, claimant: Address);
    fn transfer_asset_to_renter(env: Env, owner: Address, renter: Address, asset: AssetRef);
    fn transfer_collateral_from(env: Env, token: Address, from: Address, amount: i128);
    fn pay_and_return_collateral(
        env: Env,
        token: Address,
        owner: Address,
        renter: Address,
        collateral_amount: i128,
        amount_due: i128,
    ) -> Result<(i128, i128), Error>;
    fn liquidate_collateral(env: Env, token: Address, owner: Address, amount: i128);

    // Public surface.
    fn retrieve_asset(env: Env, caller: Address, asset: AssetRef) -> Result<(), Error>;
    fn withdraw_balance(env: Env, caller: Address, token: Address) -> Result<i128, Error>;
    fn withdraw_protocol_balance(env: Env, token: Address) -> Result<i128, Error>;
    fn get_owner_balance(env: Env, owner: Address, token: Address) -> i128;
    fn get_protocol_balance(env: Env, token: Address) -> i128;
    fn get_claimant(env: Env, asset: AssetRef) -> Option<Address>;
}
