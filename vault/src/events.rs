use common::nft::types::AssetRef;
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum VaultEvent {
    Initialized(Address),
    Upgraded(u32),
    CommissionRateSet(u32),
    AssetDeposited(AssetRef, Address, Address),
    AssetTransferred(AssetRef, Address, Address),
    AssetRetrieved(AssetRef, Address),
    CollateralLocked(Address, Address, i128),
    CollateralSettled(Address, Address, Address, i128, i128),
    CollateralLiquidated(Address, Address, i128),
    BalanceWithdrawn(Address, Address, i128),
    ProtocolBalanceWithdrawn(Address, i128),
}

impl VaultEvent {
    pub fn name(&self) -> &'static str {
        match self {
            VaultEvent::Initialized(..) => stringify!(Initialized),
            VaultEvent::Upgraded(..) => stringify!(Upgraded),
            VaultEvent::CommissionRateSet(..) => stringify!(CommissionRateSet),
            VaultEvent::AssetDeposited(..) => stringify!(AssetDeposited),
            VaultEvent::AssetTransferred(..) => stringify!(AssetTransferred),
            VaultEvent::AssetRetrieved(..) => stringify!(AssetRetrieved),
            VaultEvent::CollateralLocked(..) => stringify!(CollateralLocked),
            VaultEvent::CollateralSettled(..) => stringify!(CollateralSettled),
            VaultEvent::CollateralLiquidated(..) => stringify!(CollateralLiquidated),
            VaultEvent::BalanceWithdrawn(..) => stringify!(BalanceWithdrawn),
            VaultEvent::ProtocolBalanceWithdrawn(..) => stringify!(ProtocolBalanceWithdrawn),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            VaultEvent::Initialized(rental_contract) => {
                v.push_back(rental_contract.into_val(env));
            }
            VaultEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            VaultEvent::CommissionRateSet(rate) => {
                v.push_back(rate.into_val(env));
            }
            VaultEvent::AssetDeposited(asset, from, claimant) => {
                v.push_back(asset.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(claimant.into_val(env));
            }
            VaultEvent::AssetTransferred(asset, owner, renter) => {
                v.push_back(asset.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(renter.into_val(env));
            }
            VaultEvent::AssetRetrieved(asset, claimant) => {
                v.push_back(asset.into_val(env));
                v.push_back(claimant.into_val(env));
            }
            VaultEvent::CollateralLocked(token, from, amount) => {
                v.push_back(token.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(amount.into_val(env));
            }
            VaultEvent::CollateralSettled(token, owner, renter, commission, refund) => {
                v.push_back(token.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(renter.into_val(env));
                v.push_back(commission.into_val(env));
                v.push_back(refund.into_val(env));
            }
            VaultEvent::CollateralLiquidated(token, owner, amount) => {
                v.push_back(token.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(amount.into_val(env));
            }
            VaultEvent::BalanceWithdrawn(claimant, token, amount) => {
                v.push_back(claimant.into_val(env));
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
            VaultEvent::ProtocolBalanceWithdrawn(token, amount) => {
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
