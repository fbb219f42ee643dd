#![no_std]

mod events;

use events::ListingEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol};

use common::listing::{
    interface::ListingContractTrait,
    types::{
        DataKey, Error, Listing, ListingParams, ListingStatus, ADMIN, PROPOSAL_CONTRACT,
        VAULT_CONTRACT,
    },
};
use common::nft::interface::AssetContractClient;
use common::nft::types::AssetRef;
use common::storage::{
    get_data, get_persistent, has_data, has_persistent, remove_persistent, store_data,
    store_persistent,
};

fn require_proposal_call(env: &Env) {
    let proposal_ca: Address = get_data(env, &PROPOSAL_CONTRACT).unwrap();
    proposal_ca.require_auth();
}

fn get_listing_by_id(env: &Env, listing_id: u64) -> Result<Listing, Error> {
    get_persistent(env, &DataKey::Listing(listing_id)).ok_or(Error::ListingNotFound)
}

// Shared by create and update. The asset ref is validated separately so
// updates keep the listing's original asset.
fn validate_terms(
    env: &Env,
    creator: &Address,
    asset: &AssetRef,
    params: &ListingParams,
) -> Result<(), Error> {
    if params.collateral_amount <= 0 {
        return Err(Error::ZeroCollateral);
    }

    let now: u64 = env.ledger().timestamp();
    if params.window_end <= now || params.window_end <= params.window_start {
        return Err(Error::InvalidTimeWindow);
    }

    let asset_client = AssetContractClient::new(env, &asset.contract);
    match asset_client.try_owner_of(&asset.token_id) {
        Ok(Ok(owner)) if owner == *creator => {}
        _ => return Err(Error::NotAssetOwner),
    }

    let vault: Address = get_data(env, &VAULT_CONTRACT).unwrap();
    if !asset_client.is_approved_for_all(creator, &vault) {
        return Err(Error::VaultNotApproved);
    }

    Ok(())
}

#[contract]
pub struct ListingContract;

#[contractimpl]
impl ListingContractTrait for ListingContract {
    fn initialize(
        env: Env,
        admin: Address,
        proposal_contract_id: Address,
        vault_contract_id: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &PROPOSAL_CONTRACT, &proposal_contract_id);
        store_data(&env, &VAULT_CONTRACT, &vault_contract_id);
        store_data(&env, &DataKey::ListingCount, &0u64);

        ListingEvent::Initialized(proposal_contract_id, vault_contract_id).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        ListingEvent::Upgraded(Self::version()).publish(&env);
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

    fn create_listing(env: Env, creator: Address, params: ListingParams) -> Result<u64, Error> {
        creator.require_auth();

        validate_terms(&env, &creator, &params.asset, &params)?;

        // One non-terminal listing per asset.
        if has_persistent(&env, &DataKey::ActiveListing(params.asset.clone())) {
            return Err(Error::AssetAlreadyListed);
        }

        let listing_count: u64 = get_data(&env, &DataKey::ListingCount).unwrap_or(0);
        let listing_id: u64 = listing_count + 1;

        let listing = Listing {
            id: listing_id,
            creator: creator.clone(),
            asset: params.asset.clone(),
            collateral_amount: params.collateral_amount,
            window_start: params.window_start,
            window_end: params.window_end,
            price_per_day: params.price_per_day,
            comment: params.comment.clone(),
            status: ListingStatus::Pending,
        };

        store_persistent(&env, &DataKey::Listing(listing_id), &listing);
        store_persistent(&env, &DataKey::ActiveListing(params.asset), &listing_id);
        store_data(&env, &DataKey::ListingCount, &listing_id);

        ListingEvent::Created(listing_id, creator, listing).publish(&env);

        Ok(listing_id)
    }

    fn update_listing(
        env: Env,
        caller: Address,
        listing_id: u64,
        params: ListingParams,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut listing = get_listing_by_id(&env, listing_id)?;
        if listing.creator != caller {
            return Err(Error::NotListingCreator);
        }
        if listing.status != ListingStatus::Pending {
            return Err(Error::ListingInvalid);
        }

        // The asset ref is immutable; re-validate the new terms against it.
        validate_terms(&env, &caller, &listing.asset, &params)?;

        listing.collateral_amount = params.collateral_amount;
        listing.window_start = params.window_start;
        listing.window_end = params.window_end;
        listing.price_per_day = params.price_per_day;
        listing.comment = params.comment;

        store_persistent(&env, &DataKey::Listing(listing_id), &listing);

        ListingEvent::Updated(listing_id, listing).publish(&env);
        Ok(())
    }

    fn cancel_listing(env: Env, caller: Address, listing_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut listing = get_listing_by_id(&env, listing_id)?;
        if listing.creator != caller {
            return Err(Error::NotListingCreator);
        }
        if !listing.status.can_transition(ListingStatus::Cancelled) {
            return Err(Error::ListingInvalid);
        }

        listing.status = ListingStatus::Cancelled;
        store_persistent(&env, &DataKey::Listing(listing_id), &listing);
        // The asset may be listed again.
        remove_persistent(&env, &DataKey::ActiveListing(listing.asset.clone()));

        ListingEvent::Cancelled(listing_id, listing).publish(&env);
        Ok(())
    }

    fn complete_listing(env: Env, listing_id: u64) -> Result<(), Error> {
        require_proposal_call(&env);

        let mut listing = get_listing_by_id(&env, listing_id)?;
        if !listing.status.can_transition(ListingStatus::Completed) {
            return Err(Error::ListingInvalid);
        }

        listing.status = ListingStatus::Completed;
        store_persistent(&env, &DataKey::Listing(listing_id), &listing);
        remove_persistent(&env, &DataKey::ActiveListing(listing.asset.clone()));

        ListingEvent::Completed(listing_id, listing).publish(&env);
        Ok(())
    }

    fn get_listing(env: Env, listing_id: u64) -> Result<Listing, Error> {
        get_listing_by_id(&env, listing_id)
    }

    fn get_listing_count(env: Env) -> u64 {
        get_data(&env, &DataKey::ListingCount).unwrap_or(0)
    }
}

#[cfg(test)]
mod test;
