use super::types::{Error, Proposal, ProposalParams};
use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol};

#[contractclient(name = "ProposalContractClient")]
pub trait ProposalContractTrait {
    fn initialize(
        env: Env,
        admin: Address,
        listing_contract_id: Address,
        rental_contract_id: Address,
        vault_contract_id: Address,
        collateral_token: Address,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn create_proposal(
        env: Env,
        creator: Address,
        listing_id: u64,
        params: ProposalParams,
    ) -> Result<u64, Error>;
    fn update_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
        params: ProposalParams,
    ) -> Result<(), Error>;
    fn cancel_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), Error>;
    fn accept_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<u64, Error>;
    fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, Error>;
    fn get_proposal_count(env: Env) -> u64;
}
