use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol};

use crate::events::AssetEvent;
use common::nft::{
    interface::AssetContractTrait,
    types::{DataKey, Error, ADMIN},
};
use common::storage::{
    get_data, get_persistent, has_data, has_persistent, remove_persistent, store_data,
    store_persistent,
};

const NAME: &str = "Rentable Asset";
const SYMBOL: &str = "RNTA";

#[contract]
pub struct AssetContract;

#[contractimpl]
impl AssetContractTrait for AssetContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        AssetEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        AssetEvent::Upgraded(Self::version()).publish(&env);
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    fn mint(env: Env, to: Address, token_id: u64) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        if has_persistent(&env, &DataKey::TokenOwner(token_id)) {
            return Err(Error::TokenAlreadyMinted);
        }
        store_persistent(&env, &DataKey::TokenOwner(token_id), &to);

        AssetEvent::Mint(token_id, to).publish(&env);
        Ok(())
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        get_persistent(&env, &DataKey::TokenOwner(token_id)).ok_or(Error::TokenNotFound)
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let owner: Address =
            get_persistent(&env, &DataKey::TokenOwner(token_id)).ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::NotTokenOwner);
        }
        if spender != from && !Self::is_approved_for_all(env.clone(), from.clone(), spender) {
            return Err(Error::NotAuthorized);
        }

        store_persistent(&env, &DataKey::TokenOwner(token_id), &to);

        AssetEvent::Transfer(token_id, from, to).publish(&env);
        Ok(())
    }

    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();

        let key = DataKey::OperatorApproval(owner.clone(), operator.clone());
        if approved {
            store_persistent(&env, &key, &true);
        } else if has_persistent(&env, &key) {
            remove_persistent(&env, &key);
        }

        AssetEvent::ApprovalForAll(owner, operator, approved).publish(&env);
    }

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        get_persistent(&env, &DataKey::OperatorApproval(owner, operator)).unwrap_or(false)
    }
}
