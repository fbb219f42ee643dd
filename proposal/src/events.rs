use common::proposal::types::Proposal;
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum ProposalEvent {
    Initialized(Address, Address, Address, Address),
    Upgraded(u32),
    Created(u64, Address, Proposal),
    Updated(u64, Proposal),
    Cancelled(u64, Proposal),
    Accepted(u64, u64, Proposal),
}

impl ProposalEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ProposalEvent::Initialized(..) => stringify!(Initialized),
            ProposalEvent::Upgraded(..) => stringify!(Upgraded),
            ProposalEvent::Created(..) => stringify!(ProposalCreated),
            ProposalEvent::Updated(..) => stringify!(ProposalUpdated),
            ProposalEvent::Cancelled(..) => stringify!(ProposalCancelled),
            ProposalEvent::Accepted(..) => stringify!(ProposalAccepted),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            ProposalEvent::Initialized(
                listing_contract,
                rental_contract,
                vault_contract,
                collateral_token,
            ) => {
                v.push_back(listing_contract.into_val(env));
                v.push_back(rental_contract.into_val(env));
                v.push_back(vault_contract.into_val(env));
                v.push_back(collateral_token.into_val(env));
            }
            ProposalEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            ProposalEvent::Created(proposal_id, creator, proposal) => {
                v.push_back(proposal_id.into_val(env));
                v.push_back(creator.into_val(env));
                v.push_back(proposal.into_val(env));
            }
            ProposalEvent::Updated(proposal_id, proposal)
            | ProposalEvent::Cancelled(proposal_id, proposal) => {
                v.push_back(proposal_id.into_val(env));
                v.push_back(proposal.into_val(env));
            }
            ProposalEvent::Accepted(proposal_id, rental_id, proposal) => {
                v.push_back(proposal_id.into_val(env));
                v.push_back(rental_id.into_val(env));
                v.push_back(proposal.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
