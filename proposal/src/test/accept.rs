#![cfg(test)]

use super::*;
use common::rental::types::{Rental, RentalStatus};

#[test]
fn test_accept_proposal() {
    let test = ProposalTest::setup();
    let proposal_id: u64 =
        test.proposal_client
            .create_proposal(&test.bob, &test.listing_id, &test.default_params());

    let rental_id: u64 = test.proposal_client.accept_proposal(&test.alice, &proposal_id);
    assert_eq!(rental_id, 1);

    // Entity transitions.
    let proposal: Proposal = test.proposal_client.get_proposal(&proposal_id);
    assert_eq!(proposal.status, ProposalStatus::Accepted);
    let listing: Listing = test.listing_client.get_listing(&test.listing_id);
    assert_eq!(listing.status, ListingStatus::Completed);

    // Rental terms come from the listing and the proposal.
    let rental: Rental = test.rental_client.get_rental(&rental_id);
    assert_eq!(rental.owner, test.alice);
    assert_eq!(rental.renter, test.bob);
    assert_eq!(rental.asset, test.asset());
    assert_eq!(rental.collateral_amount, COLLATERAL);
    assert_eq!(rental.price_per_day, PRICE_PER_DAY);
    assert_eq!(rental.starting_date, START);
    assert_eq!(rental.ending_date, START + 9 * DAY);
    assert_eq!(rental.listing_id, test.listing_id);
    assert_eq!(rental.proposal_id, proposal_id);
    assert_eq!(rental.status, RentalStatus::Active);

    // Custody swap happened.
    assert_eq!(test.asset_client.owner_of(&1u64), test.bob);
    assert_eq!(test.token_client.balance(&test.bob), 0);
    assert_eq!(
        test.token_client.balance(&test.vault_client.address),
        COLLATERAL
    );
}

#[test]
fn test_accept_proposal_only_listing_creator() {
    let test = ProposalTest::setup();
    let proposal_id: u64 =
        test.proposal_client
            .create_proposal(&test.bob, &test.listing_id, &test.default_params());

    let result = test.proposal_client.try_accept_proposal(&test.bob, &proposal_id);
    assert_eq!(result, Err(Ok(Error::NotListingCreator)));
}

#[test]
fn test_accept_proposal_is_exclusive() {
    let test = ProposalTest::setup();
    let first: u64 =
        test.proposal_client
            .create_proposal(&test.bob, &test.listing_id, &test.default_params());
    let second: u64 =
        test.proposal_client
            .create_proposal(&test.bob, &test.listing_id, &test.default_params());

    test.proposal_client.accept_proposal(&test.alice, &first);

    // Re-accepting the same proposal fails on the proposal's own status and
    // never double-transfers.
    let result = test.proposal_client.try_accept_proposal(&test.alice, &first);
    assert_eq!(result, Err(Ok(Error::ProposalInvalid)));

    // Every other proposal on the completed listing fails too.
    let result = test.proposal_client.try_accept_proposal(&test.alice, &second);
    assert_eq!(result, Err(Ok(Error::ListingInvalid)));
}

#[test]
fn test_accept_proposal_expiry() {
    let test = ProposalTest::setup();

    // Proposal window closes before the listing's.
    let mut params = test.default_params();
    params.window_end = START + 2 * DAY;
    params.rental_end = START + 9 * DAY;
    let short_lived: u64 =
        test.proposal_client
            .create_proposal(&test.bob, &test.listing_id, &params);

    test.env.ledger().set_timestamp(START + 3 * DAY);
    let result = test
        .proposal_client
        .try_accept_proposal(&test.alice, &short_lived);
    assert_eq!(result, Err(Ok(Error::ProposalExpired)));

    // Past the listing window, the listing itself is the blocker.
    let mut params = test.default_params();
    params.window_end = START + 40 * DAY;
    let long_lived: u64 =
        test.proposal_client
            .create_proposal(&test.bob, &test.listing_id, &params);

    test.env.ledger().set_timestamp(START + 31 * DAY);
    let result = test
        .proposal_client
        .try_accept_proposal(&test.alice, &long_lived);
    assert_eq!(result, Err(Ok(Error::ListingExpired)));
}

#[test]
fn test_accept_proposal_rechecks_funding() {
    let test = ProposalTest::setup();
    let proposal_id: u64 =
        test.proposal_client
            .create_proposal(&test.bob, &test.listing_id, &test.default_params());

    // Bob trimmed the vault's allowance after proposing.
    test.token_client
        .approve(&test.bob, &test.vault_client.address, &100_i128, &200u32);

    let result = test
        .proposal_client
        .try_accept_proposal(&test.alice, &proposal_id);
    assert_eq!(result, Err(Ok(Error::InsufficientAllowance)));
}

#[test]
fn test_accept_proposal_requires_asset_and_approval() {
    let test = ProposalTest::setup();
    let proposal_id: u64 =
        test.proposal_client
            .create_proposal(&test.bob, &test.listing_id, &test.default_params());

    // Alice revoked the vault's operator approval after listing.
    test.asset_client
        .set_approval_for_all(&test.alice, &test.vault_client.address, &false);
    let result = test
        .proposal_client
        .try_accept_proposal(&test.alice, &proposal_id);
    assert_eq!(result, Err(Ok(Error::VaultNotApproved)));

    // Alice no longer holds the asset at all.
    let charlie: Address = Address::generate(&test.env);
    test.asset_client
        .transfer_from(&test.alice, &test.alice, &charlie, &1u64);
    let result = test
        .proposal_client
        .try_accept_proposal(&test.alice, &proposal_id);
    assert_eq!(result, Err(Ok(Error::NotAssetOwner)));
}

// Listing through settlement in one pass, with the balances checked at each
// hop of the collateral.
#[test]
fn test_full_rental_lifecycle() {
    let test = ProposalTest::setup();
    let proposal_id: u64 =
        test.proposal_client
            .create_proposal(&test.bob, &test.listing_id, &test.default_params());
    let rental_id: u64 = test.proposal_client.accept_proposal(&test.alice, &proposal_id);

    // Bob returns the bike on day 5 of the 9-day schedule.
    test.env.ledger().set_timestamp(START + 5 * DAY);
    test.rental_client.refund_rental(&test.bob, &rental_id);

    // Fixed-schedule billing: 9 x 300 due, 5% commission, rest refunded.
    assert_eq!(test.token_client.balance(&test.bob), 37_165);
    assert_eq!(
        test.vault_client
            .get_owner_balance(&test.alice, &test.token_client.address),
        2_700
    );
    assert_eq!(
        test.vault_client
            .get_protocol_balance(&test.token_client.address),
        135
    );

    // Alice reclaims the asset and cashes out; the admin collects the fee.
    test.vault_client.retrieve_asset(&test.alice, &test.asset());
    assert_eq!(test.asset_client.owner_of(&1u64), test.alice);
    assert_eq!(
        test.vault_client
            .withdraw_balance(&test.alice, &test.token_client.address),
        2_700
    );
    assert_eq!(
        test.vault_client
            .withdraw_protocol_balance(&test.token_client.address),
        135
    );
    assert_eq!(test.token_client.balance(&test.alice), 2_700);
    assert_eq!(test.token_client.balance(&test.admin), 135);
    assert_eq!(test.token_client.balance(&test.vault_client.address), 0);
}
