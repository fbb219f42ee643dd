#![cfg(test)]
extern crate std;

use super::*;
use common::nft::interface::AssetContractClient;
use common::nft::types::AssetRef;
use nft::contract::AssetContract;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, String};

const DAY: u64 = 86_400;

fn create_listing_contract<'a>(env: &Env) -> ListingContractClient<'a> {
    let contract_id: Address = env.register(ListingContract, ());
    ListingContractClient::new(env, &contract_id)
}

fn create_asset_contract<'a>(env: &Env) -> AssetContractClient<'a> {
    let contract_id: Address = env.register(AssetContract, ());
    AssetContractClient::new(env, &contract_id)
}

pub struct ListingTest {
    env: Env,
    listing_client: ListingContractClient<'static>,
    asset_client: AssetContractClient<'static>,
    proposal_ca: Address,
    vault_ca: Address,
    alice: Address,
    bob: Address,
    admin: Address,
}

impl ListingTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(10_000);

        let listing_client = create_listing_contract(&env);
        let asset_client = create_asset_contract(&env);

        let alice: Address = Address::generate(&env);
        let bob: Address = Address::generate(&env);
        let admin: Address = Address::generate(&env);
        let proposal_ca: Address = Address::generate(&env);
        let vault_ca: Address = Address::generate(&env);

        listing_client.initialize(&admin, &proposal_ca, &vault_ca);
        asset_client.initialize(&admin);

        // Alice owns token 1 and has approved the vault as operator.
        asset_client.mint(&alice, &1u64);
        asset_client.set_approval_for_all(&alice, &vault_ca, &true);

        ListingTest {
            env,
            listing_client,
            asset_client,
            proposal_ca,
            vault_ca,
            alice,
            bob,
            admin,
        }
    }

    fn asset(&self) -> AssetRef {
        AssetRef {
            contract: self.asset_client.address.clone(),
            token_id: 1,
        }
    }

    fn default_params(&self) -> ListingParams {
        let now: u64 = self.env.ledger().timestamp();
        ListingParams {
            asset: self.asset(),
            collateral_amount: 40_000,
            window_start: now,
            window_end: now + 30 * DAY,
            price_per_day: 300,
            comment: String::from_str(&self.env, "mountain bike, pickup downtown"),
        }
    }
}

#[test]
fn test_create_listing() {
    let test = ListingTest::setup();
    let params = test.default_params();

    let listing_id: u64 = test.listing_client.create_listing(&test.alice, &params);
    assert_eq!(listing_id, 1);
    assert_eq!(test.listing_client.get_listing_count(), 1);

    let listing: Listing = test.listing_client.get_listing(&listing_id);
    assert_eq!(listing.id, listing_id);
    assert_eq!(listing.creator, test.alice);
    assert_eq!(listing.asset, params.asset);
    assert_eq!(listing.collateral_amount, 40_000);
    assert_eq!(listing.price_per_day, 300);
    assert_eq!(listing.status, ListingStatus::Pending);
}

#[test]
fn test_create_listing_rejects_zero_collateral() {
    let test = ListingTest::setup();
    let mut params = test.default_params();
    params.collateral_amount = 0;

    let result = test
        .listing_client
        .try_create_listing(&test.alice, &params);
    assert_eq!(result, Err(Ok(Error::ZeroCollateral)));
}

#[test]
fn test_create_listing_rejects_invalid_window() {
    let test = ListingTest::setup();
    let now: u64 = test.env.ledger().timestamp();

    // window ends in the past
    let mut params = test.default_params();
    params.window_start = 0;
    params.window_end = now - 1;
    let result = test
        .listing_client
        .try_create_listing(&test.alice, &params);
    assert_eq!(result, Err(Ok(Error::InvalidTimeWindow)));

    // window ends before it starts
    let mut params = test.default_params();
    params.window_start = now + 10 * DAY;
    params.window_end = now + 5 * DAY;
    let result = test
        .listing_client
        .try_create_listing(&test.alice, &params);
    assert_eq!(result, Err(Ok(Error::InvalidTimeWindow)));
}

#[test]
fn test_create_listing_requires_asset_ownership() {
    let test = ListingTest::setup();
    let params = test.default_params();

    // Bob does not own token 1.
    let result = test.listing_client.try_create_listing(&test.bob, &params);
    assert_eq!(result, Err(Ok(Error::NotAssetOwner)));

    // Unminted token.
    let mut params = test.default_params();
    params.asset.token_id = 99;
    let result = test
        .listing_client
        .try_create_listing(&test.alice, &params);
    assert_eq!(result, Err(Ok(Error::NotAssetOwner)));
}

#[test]
fn test_create_listing_requires_vault_approval() {
    let test = ListingTest::setup();
    test.asset_client
        .set_approval_for_all(&test.alice, &test.vault_ca, &false);

    let params = test.default_params();
    let result = test
        .listing_client
        .try_create_listing(&test.alice, &params);
    assert_eq!(result, Err(Ok(Error::VaultNotApproved)));
}

#[test]
fn test_one_active_listing_per_asset() {
    let test = ListingTest::setup();
    let params = test.default_params();

    let listing_id: u64 = test.listing_client.create_listing(&test.alice, &params);

    let result = test
        .listing_client
        .try_create_listing(&test.alice, &params);
    assert_eq!(result, Err(Ok(Error::AssetAlreadyListed)));

    // Cancelling frees the asset for a new listing.
    test.listing_client.cancel_listing(&test.alice, &listing_id);
    let second_id: u64 = test.listing_client.create_listing(&test.alice, &params);
    assert_eq!(second_id, 2);
}

#[test]
fn test_update_listing() {
    let test = ListingTest::setup();
    let listing_id: u64 = test
        .listing_client
        .create_listing(&test.alice, &test.default_params());

    let mut params = test.default_params();
    params.collateral_amount = 50_000;
    params.price_per_day = 450;
    test.listing_client
        .update_listing(&test.alice, &listing_id, &params);

    let listing: Listing = test.listing_client.get_listing(&listing_id);
    assert_eq!(listing.collateral_amount, 50_000);
    assert_eq!(listing.price_per_day, 450);
    assert_eq!(listing.status, ListingStatus::Pending);
}

#[test]
fn test_update_listing_only_creator() {
    let test = ListingTest::setup();
    let listing_id: u64 = test
        .listing_client
        .create_listing(&test.alice, &test.default_params());

    let result =
        test.listing_client
            .try_update_listing(&test.bob, &listing_id, &test.default_params());
    assert_eq!(result, Err(Ok(Error::NotListingCreator)));
}

#[test]
fn test_update_listing_rejects_terminal_status() {
    let test = ListingTest::setup();
    let listing_id: u64 = test
        .listing_client
        .create_listing(&test.alice, &test.default_params());
    test.listing_client.cancel_listing(&test.alice, &listing_id);

    let result =
        test.listing_client
            .try_update_listing(&test.alice, &listing_id, &test.default_params());
    assert_eq!(result, Err(Ok(Error::ListingInvalid)));
}

#[test]
fn test_cancel_listing() {
    let test = ListingTest::setup();
    let listing_id: u64 = test
        .listing_client
        .create_listing(&test.alice, &test.default_params());

    test.listing_client.cancel_listing(&test.alice, &listing_id);
    let listing: Listing = test.listing_client.get_listing(&listing_id);
    assert_eq!(listing.status, ListingStatus::Cancelled);

    // Terminal states stay terminal.
    let result = test.listing_client.try_cancel_listing(&test.alice, &listing_id);
    assert_eq!(result, Err(Ok(Error::ListingInvalid)));
}

#[test]
fn test_cancel_listing_only_creator() {
    let test = ListingTest::setup();
    let listing_id: u64 = test
        .listing_client
        .create_listing(&test.alice, &test.default_params());

    let result = test.listing_client.try_cancel_listing(&test.bob, &listing_id);
    assert_eq!(result, Err(Ok(Error::NotListingCreator)));
}

#[test]
fn test_complete_listing() {
    let test = ListingTest::setup();
    let listing_id: u64 = test
        .listing_client
        .create_listing(&test.alice, &test.default_params());

    test.listing_client.complete_listing(&listing_id);
    let listing: Listing = test.listing_client.get_listing(&listing_id);
    assert_eq!(listing.status, ListingStatus::Completed);

    // No transition out of Completed.
    let result = test.listing_client.try_cancel_listing(&test.alice, &listing_id);
    assert_eq!(result, Err(Ok(Error::ListingInvalid)));
    let result = test.listing_client.try_complete_listing(&listing_id);
    assert_eq!(result, Err(Ok(Error::ListingInvalid)));
}

#[test]
fn test_complete_listing_restricted_to_proposal_contract() {
    let test = ListingTest::setup();
    let listing_id: u64 = test
        .listing_client
        .create_listing(&test.alice, &test.default_params());

    // Drop the auth mocks so the stored proposal address must sign.
    test.env.set_auths(&[]);
    let result = test.listing_client.try_complete_listing(&listing_id);
    assert!(result.is_err());
}

#[test]
fn test_get_listing_not_found() {
    let test = ListingTest::setup();
    let result = test.listing_client.try_get_listing(&42u64);
    assert_eq!(result, Err(Ok(Error::ListingNotFound)));
}

#[test]
fn test_initialize_twice_fails() {
    let test = ListingTest::setup();
    let result =
        test.listing_client
            .try_initialize(&test.admin, &test.proposal_ca, &test.vault_ca);
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_update_state() {
    let test = ListingTest::setup();
    let new_vault: Address = Address::generate(&test.env);

    test.listing_client
        .update_state(&VAULT_CONTRACT, &new_vault);

    let unknown = soroban_sdk::symbol_short!("NOPE");
    let result = test.listing_client.try_update_state(&unknown, &new_vault);
    assert_eq!(result, Err(Ok(Error::StateNotAlreadySet)));
}
