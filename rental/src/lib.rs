#![no_std]

mod events;

use events::RentalEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol};

use common::nft::interface::AssetContractClient;
use common::nft::types::AssetRef;
use common::rental::{
    interface::RentalContractTrait,
    types::{
        DataKey, Error, Rental, RentalStatus, ADMIN, COLLATERAL_TOKEN, PROPOSAL_CONTRACT,
        SECONDS_PER_DAY, VAULT_CONTRACT,
    },
};
use common::storage::{get_data, get_persistent, has_data, store_data, store_persistent};
use common::vault::interface::VaultContractClient;

fn require_proposal_call(env: &Env) {
    let proposal_ca: Address = get_data(env, &PROPOSAL_CONTRACT).unwrap();
    proposal_ca.require_auth();
}

fn get_rental_by_id(env: &Env, rental_id: u64) -> Result<Rental, Error> {
    get_persistent(env, &DataKey::Rental(rental_id)).ok_or(Error::RentalNotFound)
}

fn ceil_days(duration: u64) -> u64 {
    (duration + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

/// Days the renter owes for. A pro-rated rental bills the actual hold time
/// with a floor of one day; otherwise the scheduled term fixed at acceptance
/// applies regardless of when the asset comes back.
fn payable_days(env: &Env, rental: &Rental) -> u64 {
    if rental.is_pro_rated {
        let elapsed: u64 = env
            .ledger()
            .timestamp()
            .saturating_sub(rental.starting_date);
        ceil_days(elapsed).max(1)
    } else {
        ceil_days(rental.ending_date.saturating_sub(rental.starting_date))
    }
}

#[contract]
pub struct RentalContract;

#[contractimpl]
impl RentalContractTrait for RentalContract {
    fn initialize(
        env: Env,
        admin: Address,
        proposal_contract_id: Address,
        vault_contract_id: Address,
        collateral_token: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &PROPOSAL_CONTRACT, &proposal_contract_id);
        store_data(&env, &VAULT_CONTRACT, &vault_contract_id);
        store_data(&env, &COLLATERAL_TOKEN, &collateral_token);
        store_data(&env, &DataKey::RentalCount, &0u64);

        RentalEvent::Initialized(proposal_contract_id, vault_contract_id, collateral_token)
            .publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        RentalEvent::Upgraded(Self::version()).publish(&env);
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
    ) -> u64 {
        require_proposal_call(&env);

        let vault_ca: Address = get_data(&env, &VAULT_CONTRACT).unwrap();
        let token: Address = get_data(&env, &COLLATERAL_TOKEN).unwrap();
        let vault_client = VaultContractClient::new(&env, &vault_ca);

        // Custody swap: asset to the renter, deposit into the vault.
        vault_client.transfer_asset_to_renter(&owner, &renter, &asset);
        vault_client.transfer_collateral_from(&token, &renter, &collateral_amount);

        let rental_count: u64 = get_data(&env, &DataKey::RentalCount).unwrap_or(0);
        let rental_id: u64 = rental_count + 1;

        let rental = Rental {
            id: rental_id,
            owner,
            renter,
            asset,
            collateral_amount,
            price_per_day,
            starting_date: env.ledger().timestamp(),
            ending_date,
            is_pro_rated,
            listing_id,
            proposal_id,
            status: RentalStatus::Active,
        };

        store_persistent(&env, &DataKey::Rental(rental_id), &rental);
        store_data(&env, &DataKey::RentalCount, &rental_id);

        RentalEvent::Created(rental_id, rental).publish(&env);

        rental_id
    }

    fn refund_rental(env: Env, caller: Address, rental_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut rental = get_rental_by_id(&env, rental_id)?;
        if rental.renter != caller {
            return Err(Error::NotRenter);
        }
        if !rental.status.can_transition(RentalStatus::Refund) {
            return Err(Error::RentalInvalid);
        }

        let vault_ca: Address = get_data(&env, &VAULT_CONTRACT).unwrap();
        let token: Address = get_data(&env, &COLLATERAL_TOKEN).unwrap();

        // The renter must still hold the asset and the vault must be able to
        // reclaim it.
        let asset_client = AssetContractClient::new(&env, &rental.asset.contract);
        match asset_client.try_owner_of(&rental.asset.token_id) {
            Ok(Ok(owner)) if owner == rental.renter => {}
            _ => return Err(Error::NotAssetOwner),
        }
        if !asset_client.is_approved_for_all(&rental.renter, &vault_ca) {
            return Err(Error::VaultNotApproved);
        }

        let amount_due: i128 = payable_days(&env, &rental) as i128 * rental.price_per_day;

        let vault_client = VaultContractClient::new(&env, &vault_ca);
        vault_client.transfer_asset_from(&rental.asset, &rental.renter, &rental.owner);
        let (commission, refund) = vault_client.pay_and_return_collateral(
            &token,
            &rental.owner,
            &rental.renter,
            &rental.collateral_amount,
            &amount_due,
        );

        rental.status = RentalStatus::Refund;
        store_persistent(&env, &DataKey::Rental(rental_id), &rental);

        RentalEvent::Refunded(rental_id, rental, amount_due, commission, refund).publish(&env);
        Ok(())
    }

    fn liquidate_rental(env: Env, caller: Address, rental_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut rental = get_rental_by_id(&env, rental_id)?;
        if rental.owner != caller {
            return Err(Error::NotRentalOwner);
        }
        if !rental.status.can_transition(RentalStatus::Liquidated) {
            return Err(Error::RentalInvalid);
        }
        if env.ledger().timestamp() <= rental.ending_date {
            return Err(Error::RentalNotEnded);
        }

        let vault_ca: Address = get_data(&env, &VAULT_CONTRACT).unwrap();
        let token: Address = get_data(&env, &COLLATERAL_TOKEN).unwrap();

        let vault_client = VaultContractClient::new(&env, &vault_ca);
        vault_client.liquidate_collateral(&token, &rental.owner, &rental.collateral_amount);

        rental.status = RentalStatus::Liquidated;
        store_persistent(&env, &DataKey::Rental(rental_id), &rental);

        RentalEvent::Liquidated(rental_id, rental).publish(&env);
        Ok(())
    }

    fn get_rental(env: Env, rental_id: u64) -> Result<Rental, Error> {
        get_rental_by_id(&env, rental_id)
    }

    fn get_rental_count(env: Env) -> u64 {
        get_data(&env, &DataKey::RentalCount).unwrap_or(0)
    }
}
