#![no_std]

mod events;

use events::ProposalEvent;
use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, Symbol};

use common::listing::interface::ListingContractClient;
use common::listing::types::{Listing, ListingStatus};
use common::nft::interface::AssetContractClient;
use common::proposal::{
    interface::ProposalContractTrait,
    types::{
        DataKey, Error, Proposal, ProposalParams, ProposalStatus, ADMIN, COLLATERAL_TOKEN,
        LISTING_CONTRACT, RENTAL_CONTRACT, VAULT_CONTRACT,
    },
};
use common::rental::interface::RentalContractClient;
use common::storage::{get_data, get_persistent, has_data, store_data, store_persistent};

fn get_proposal_by_id(env: &Env, proposal_id: u64) -> Result<Proposal, Error> {
    get_persistent(env, &DataKey::Proposal(proposal_id)).ok_or(Error::ProposalNotFound)
}

/// Fetches the listing a proposal bids on; anything but a Pending listing is
/// unusable from this contract's point of view.
fn get_pending_listing(env: &Env, listing_id: u64) -> Result<Listing, Error> {
    let listing_ca: Address = get_data(env, &LISTING_CONTRACT).unwrap();
    let listing_client = ListingContractClient::new(env, &listing_ca);

    let listing: Listing = match listing_client.try_get_listing(&listing_id) {
        Ok(Ok(listing)) => listing,
        _ => return Err(Error::ListingInvalid),
    };
    if listing.status != ListingStatus::Pending {
        return Err(Error::ListingInvalid);
    }
    Ok(listing)
}

fn validate_terms(
    env: &Env,
    creator: &Address,
    listing: &Listing,
    params: &ProposalParams,
) -> Result<(), Error> {
    if params.window_start < listing.window_start || params.window_start > listing.window_end {
        return Err(Error::InvalidTimeWindow);
    }
    if params.window_end <= params.window_start || params.rental_end <= params.window_start {
        return Err(Error::InvalidTimeWindow);
    }

    check_collateral_funding(env, creator, listing.collateral_amount)?;

    Ok(())
}

/// The vault must be able to pull the full deposit from the proposer at
/// acceptance time.
fn check_collateral_funding(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let token_address: Address = get_data(env, &COLLATERAL_TOKEN).unwrap();
    let vault_ca: Address = get_data(env, &VAULT_CONTRACT).unwrap();
    let token_client = token::Client::new(env, &token_address);

    if token_client.allowance(from, &vault_ca) < amount {
        return Err(Error::InsufficientAllowance);
    }
    if token_client.balance(from) < amount {
        return Err(Error::InsufficientBalance);
    }
    Ok(())
}

#[contract]
pub struct ProposalContract;

#[contractimpl]
impl ProposalContractTrait for ProposalContract {
    fn initialize(
        env: Env,
        admin: Address,
        listing_contract_id: Address,
        rental_contract_id: Address,
        vault_contract_id: Address,
        collateral_token: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &LISTING_CONTRACT, &listing_contract_id);
        store_data(&env, &RENTAL_CONTRACT, &rental_contract_id);
        store_data(&env, &VAULT_CONTRACT, &vault_contract_id);
        store_data(&env, &COLLATERAL_TOKEN, &collateral_token);
        store_data(&env, &DataKey::ProposalCount, &0u64);

        ProposalEvent::Initialized(
            listing_contract_id,
            rental_contract_id,
            vault_contract_id,
            collateral_token,
        )
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
        ProposalEvent::Upgraded(Self::version()).publish(&env);
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

    fn create_proposal(
        env: Env,
        creator: Address,
        listing_id: u64,
        params: ProposalParams,
    ) -> Result<u64, Error> {
        creator.require_auth();

        let listing = get_pending_listing(&env, listing_id)?;
        validate_terms(&env, &creator, &listing, &params)?;

        let proposal_count: u64 = get_data(&env, &DataKey::ProposalCount).unwrap_or(0);
        let proposal_id: u64 = proposal_count + 1;

        let proposal = Proposal {
            id: proposal_id,
            listing_id,
            creator: creator.clone(),
            window_start: params.window_start,
            window_end: params.window_end,
            rental_end: params.rental_end,
            is_pro_rated: params.is_pro_rated,
            status: ProposalStatus::Pending,
        };

        store_persistent(&env, &DataKey::Proposal(proposal_id), &proposal);
        store_data(&env, &DataKey::ProposalCount, &proposal_id);

        ProposalEvent::Created(proposal_id, creator, proposal).publish(&env);

        Ok(proposal_id)
    }

    fn update_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
        params: ProposalParams,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut proposal = get_proposal_by_id(&env, proposal_id)?;
        if proposal.creator != caller {
            return Err(Error::NotProposalCreator);
        }
        if proposal.status != ProposalStatus::Pending {
            return Err(Error::ProposalInvalid);
        }

        let listing = get_pending_listing(&env, proposal.listing_id)?;
        validate_terms(&env, &caller, &listing, &params)?;

        proposal.window_start = params.window_start;
        proposal.window_end = params.window_end;
        proposal.rental_end = params.rental_end;
        proposal.is_pro_rated = params.is_pro_rated;

        store_persistent(&env, &DataKey::Proposal(proposal_id), &proposal);

        ProposalEvent::Updated(proposal_id, proposal).publish(&env);
        Ok(())
    }

    fn cancel_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut proposal = get_proposal_by_id(&env, proposal_id)?;
        if proposal.creator != caller {
            return Err(Error::NotProposalCreator);
        }
        if !proposal.status.can_transition(ProposalStatus::Cancelled) {
            return Err(Error::ProposalInvalid);
        }

        proposal.status = ProposalStatus::Cancelled;
        store_persistent(&env, &DataKey::Proposal(proposal_id), &proposal);

        ProposalEvent::Cancelled(proposal_id, proposal).publish(&env);
        Ok(())
    }

    /// Turns a pending proposal into an active rental. Mutual exclusion
    /// between competing proposals comes from the listing transition: the
    /// first acceptance completes the listing and every later one fails.
    fn accept_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<u64, Error> {
        caller.require_auth();

        let mut proposal = get_proposal_by_id(&env, proposal_id)?;
        if !proposal.status.can_transition(ProposalStatus::Accepted) {
            return Err(Error::ProposalInvalid);
        }

        let listing = get_pending_listing(&env, proposal.listing_id)?;
        if listing.creator != caller {
            return Err(Error::NotListingCreator);
        }

        let now: u64 = env.ledger().timestamp();
        if now > listing.window_end {
            return Err(Error::ListingExpired);
        }
        if now > proposal.window_end {
            return Err(Error::ProposalExpired);
        }

        let vault_ca: Address = get_data(&env, &VAULT_CONTRACT).unwrap();
        let asset_client = AssetContractClient::new(&env, &listing.asset.contract);
        match asset_client.try_owner_of(&listing.asset.token_id) {
            Ok(Ok(owner)) if owner == caller => {}
            _ => return Err(Error::NotAssetOwner),
        }
        if !asset_client.is_approved_for_all(&caller, &vault_ca) {
            return Err(Error::VaultNotApproved);
        }

        // The proposer's funding is re-checked at acceptance; approvals may
        // have been spent or revoked since the proposal was created.
        check_collateral_funding(&env, &proposal.creator, listing.collateral_amount)?;

        let rental_ca: Address = get_data(&env, &RENTAL_CONTRACT).unwrap();
        let rental_client = RentalContractClient::new(&env, &rental_ca);
        let rental_id: u64 = rental_client.create_rental(
            &caller,
            &proposal.creator,
            &listing.asset,
            &listing.collateral_amount,
            &listing.price_per_day,
            &proposal.rental_end,
            &proposal.is_pro_rated,
            &proposal.listing_id,
            &proposal_id,
        );

        let listing_ca: Address = get_data(&env, &LISTING_CONTRACT).unwrap();
        ListingContractClient::new(&env, &listing_ca).complete_listing(&proposal.listing_id);

        proposal.status = ProposalStatus::Accepted;
        store_persistent(&env, &DataKey::Proposal(proposal_id), &proposal);

        ProposalEvent::Accepted(proposal_id, rental_id, proposal).publish(&env);

        Ok(rental_id)
    }

    fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, Error> {
        get_proposal_by_id(&env, proposal_id)
    }

    fn get_proposal_count(env: Env) -> u64 {
        get_data(&env, &DataKey::ProposalCount).unwrap_or(0)
    }
}
