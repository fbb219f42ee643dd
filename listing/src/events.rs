use common::listing::types::Listing;
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum ListingEvent {
    Initialized(Address, Address),
    Upgraded(u32),
    Created(u64, Address, Listing),
    Updated(u64, Listing),
    Cancelled(u64, Listing),
    Completed(u64, Listing),
}

impl ListingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ListingEvent::Initialized(..) => stringify!(Initialized),
            ListingEvent::Upgraded(..) => stringify!(Upgraded),
            ListingEvent::Created(..) => stringify!(ListingCreated),
            ListingEvent::Updated(..) => stringify!(ListingUpdated),
            ListingEvent::Cancelled(..) => stringify!(ListingCancelled),
            ListingEvent::Completed(..) => stringify!(ListingCompleted),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            ListingEvent::Initialized(proposal_contract, vault_contract) => {
                v.push_back(proposal_contract.into_val(env));
                v.push_back(vault_contract.into_val(env));
            }
            ListingEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            ListingEvent::Created(listing_id, creator, listing) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(creator.into_val(env));
                v.push_back(listing.into_val(env));
            }
            ListingEvent::Updated(listing_id, listing)
            | ListingEvent::Cancelled(listing_id, listing)
            | ListingEvent::Completed(listing_id, listing) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(listing.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
