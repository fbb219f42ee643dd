use common::rental::types::Rental;
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum RentalEvent {
    Initialized(Address, Address, Address),
    Upgraded(u32),
    Created(u64, Rental),
    Refunded(u64, Rental, i128, i128, i128),
    Liquidated(u64, Rental),
}

impl RentalEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RentalEvent::Initialized(..) => stringify!(Initialized),
            RentalEvent::Upgraded(..) => stringify!(Upgraded),
            RentalEvent::Created(..) => stringify!(RentalCreated),
            RentalEvent::Refunded(..) => stringify!(RentalRefunded),
            RentalEvent::Liquidated(..) => stringify!(RentalLiquidated),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            RentalEvent::Initialized(proposal_contract, vault_contract, collateral_token) => {
                v.push_back(proposal_contract.into_val(env));
                v.push_back(vault_contract.into_val(env));
                v.push_back(collateral_token.into_val(env));
            }
            RentalEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            RentalEvent::Created(rental_id, rental) => {
                v.push_back(rental_id.into_val(env));
                v.push_back(rental.into_val(env));
            }
            RentalEvent::Refunded(rental_id, rental, amount_due, commission, refund) => {
                v.push_back(rental_id.into_val(env));
                v.push_back(rental.into_val(env));
                v.push_back(amount_due.into_val(env));
                v.push_back(commission.into_val(env));
                v.push_back(refund.into_val(env));
            }
            RentalEvent::Liquidated(rental_id, rental) => {
                v.push_back(rental_id.into_val(env));
                v.push_back(rental.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
