use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum AssetEvent {
    Initialized,
    Upgraded(u32),
    Mint(u64, Address),
    Transfer(u64, Address, Address),
    ApprovalForAll(Address, Address, bool),
}

impl AssetEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AssetEvent::Initialized => stringify!(Initialized),
            AssetEvent::Upgraded(..) => stringify!(Upgraded),
            AssetEvent::Mint(..) => stringify!(Mint),
            AssetEvent::Transfer(..) => stringify!(Transfer),
            AssetEvent::ApprovalForAll(..) => stringify!(ApprovalForAll),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            AssetEvent::Initialized => {}
            AssetEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            AssetEvent::Mint(token_id, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(to.into_val(env));
            }
            AssetEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
            AssetEvent::ApprovalForAll(owner, operator, approved) => {
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
                v.push_back(approved.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
