#![no_std]

mod events;

use events::VaultEvent;
use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, Symbol};

use common::nft::interface::AssetContractClient;
use common::nft::types::AssetRef;
use common::storage::{
    get_data, get_persistent, has_data, has_persistent, remove_persistent, store_data,
    store_persistent,
};
use common::vault::{
    interface::VaultContractTrait,
    types::{DataKey, Error, ADMIN, COMMISSION_RATE, RENTAL_CONTRACT},
};

fn require_rental_call(env: &Env) {
    let rental_ca: Address = get_data(env, &RENTAL_CONTRACT).unwrap();
    rental_ca.require_auth();
}

#[contract]
pub struct VaultContract;

#[contractimpl]
impl VaultContractTrait for VaultContract {
    fn initialize(env: Env, admin: Address, rental_contract_id: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &RENTAL_CONTRACT, &rental_contract_id);
        store_data(&env, &COMMISSION_RATE, &0u32);

        VaultEvent::Initialized(rental_contract_id).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        VaultEvent::Upgraded(Self::version()).publish(&env);
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        if !has_data::<Symbol>(&env, &state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        store_data(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    fn set_commission_rate(env: Env, rate: u32) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        if rate > 100 {
            return Err(Error::InvalidCommissionRate);
        }
        store_data(&env, &COMMISSION_RATE, &rate);

        VaultEvent::CommissionRateSet(rate).publish(&env);
        Ok(())
    }

    fn get_commission_rate(env: Env) -> u32 {
        get_data(&env, &COMMISSION_RATE).unwrap_or(0)
    }

    /// Pulls an asset into custody and records who may reclaim it.
    fn transfer_asset_from(env: Env, asset: AssetRef, from: Address, claimant: Address) {
        require_rental_call(&env);

        let this: Address = env.current_contract_address();
        let asset_client = AssetContractClient::new(&env, &asset.contract);
        asset_client.transfer_from(&this, &from, &this, &asset.token_id);

        store_persistent(&env, &DataKey::AssetClaimant(asset.clone()), &claimant);

        VaultEvent::AssetDeposited(asset, from, claimant).publish(&env);
    }

    fn transfer_asset_to_renter(env: Env, owner: Address, renter: Address, asset: AssetRef) {
        require_rental_call(&env);

        // Any stale custody record is void once the asset changes hands.
        let claimant_key = DataKey::AssetClaimant(asset.clone());
        if has_persistent(&env, &claimant_key) {
            remove_persistent(&env, &claimant_key);
        }

        let this: Address = env.current_contract_address();
        let asset_client = AssetContractClient::new(&env, &asset.contract);
        asset_client.transfer_from(&this, &owner, &renter, &asset.token_id);

        VaultEvent::AssetTransferred(asset, owner, renter).publish(&env);
    }

    fn transfer_collateral_from(env: Env, token: Address, from: Address, amount: i128) {
        require_rental_call(&env);

        let this: Address = env.current_contract_address();
        token::Client::new(&env, &token).transfer_from(&this, &from, &this, &amount);

        VaultEvent::CollateralLocked(token, from, amount).publish(&env);
    }

    /// Splits a locked deposit at settlement. The owner is credited the full
    /// amount due, the commission accrues to the protocol pool, and the
    /// remainder goes straight back to the renter.
    fn pay_and_return_collateral(
        env: Env,
        token: Address,
        owner: Address,
        renter: Address,
        collateral_amount: i128,
        amount_due: i128,
    ) -> Result<(i128, i128), Error> {
        require_rental_call(&env);

        let rate: u32 = get_data(&env, &COMMISSION_RATE).unwrap_or(0);
        let commission: i128 = amount_due * rate as i128 / 100;

        if amount_due + commission > collateral_amount {
            return Err(Error::InsufficientCollateral);
        }
        let refund: i128 = collateral_amount - amount_due - commission;

        let owner_key = DataKey::OwnerBalance(owner.clone(), token.clone());
        let owner_balance: i128 = get_persistent(&env, &owner_key).unwrap_or(0);
        store_persistent(&env, &owner_key, &(owner_balance + amount_due));

        if commission > 0 {
            let protocol_key = DataKey::ProtocolBalance(token.clone());
            let protocol_balance: i128 = get_persistent(&env, &protocol_key).unwrap_or(0);
            store_persistent(&env, &protocol_key, &(protocol_balance + commission));
        }

        if refund > 0 {
            let this: Address = env.current_contract_address();
            token::Client::new(&env, &token).transfer(&this, &renter, &refund);
        }

        VaultEvent::CollateralSettled(token, owner, renter, commission, refund).publish(&env);
        Ok((commission, refund))
    }

    /// Pays the full deposit directly to the owner. No commission is taken
    /// and nothing passes through the balance ledger on a liquidation.
    fn liquidate_collateral(env: Env, token: Address, owner: Address, amount: i128) {
        require_rental_call(&env);

        let this: Address = env.current_contract_address();
        token::Client::new(&env, &token).transfer(&this, &owner, &amount);

        VaultEvent::CollateralLiquidated(token, owner, amount).publish(&env);
    }

    fn retrieve_asset(env: Env, caller: Address, asset: AssetRef) -> Result<(), Error> {
        caller.require_auth();

        let key = DataKey::AssetClaimant(asset.clone());
        let claimant: Address = get_persistent(&env, &key).ok_or(Error::AssetNotInCustody)?;
        if claimant != caller {
            return Err(Error::NotClaimant);
        }

        remove_persistent(&env, &key);

        let this: Address = env.current_contract_address();
        let asset_client = AssetContractClient::new(&env, &asset.contract);
        asset_client.transfer_from(&this, &this, &caller, &asset.token_id);

        VaultEvent::AssetRetrieved(asset, caller).publish(&env);
        Ok(())
    }

    fn withdraw_balance(env: Env, caller: Address, token: Address) -> Result<i128, Error> {
        caller.require_auth();

        let key = DataKey::OwnerBalance(caller.clone(), token.clone());
        let balance: i128 = get_persistent(&env, &key).unwrap_or(0);
        if balance <= 0 {
            return Err(Error::NoBalance);
        }

        remove_persistent(&env, &key);

        let this: Address = env.current_contract_address();
        token::Client::new(&env, &token).transfer(&this, &caller, &balance);

        VaultEvent::BalanceWithdrawn(caller, token, balance).publish(&env);
        Ok(balance)
    }

    fn withdraw_protocol_balance(env: Env, token: Address) -> Result<i128, Error> {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        let key = DataKey::ProtocolBalance(token.clone());
        let balance: i128 = get_persistent(&env, &key).unwrap_or(0);
        if balance <= 0 {
            return Err(Error::NoBalance);
        }

        remove_persistent(&env, &key);

        let this: Address = env.current_contract_address();
        token::Client::new(&env, &token).transfer(&this, &admin, &balance);

        VaultEvent::ProtocolBalanceWithdrawn(token, balance).publish(&env);
        Ok(balance)
    }

    fn get_owner_balance(env: Env, owner: Address, token: Address) -> i128 {
        get_persistent(&env, &DataKey::OwnerBalance(owner, token)).unwrap_or(0)
    }

    fn get_protocol_balance(env: Env, token: Address) -> i128 {
        get_persistent(&env, &DataKey::ProtocolBalance(token)).unwrap_or(0)
    }

    fn get_claimant(env: Env, asset: AssetRef) -> Option<Address> {
        get_persistent(&env, &DataKey::AssetClaimant(asset))
    }
}
