use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
enum OwnershipKey {
    Owner,
}

pub fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OwnershipKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OwnershipKey::Owner, owner);
}

/// Authenticates `caller` and reports whether it is the stored owner.
/// A contract with no owner yet has no authorized caller.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    caller.require_auth();
    match owner(env) {
        Some(current) => current == *caller,
        None => false,
    }
}

/// Hands the contract to `new_owner`. Returns false when `caller` is not the owner.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> bool {
    if !is_owner(env, caller) {
        return false;
    }
    set_owner(env, new_owner);
    env.events().publish(
        (symbol_short!("own_xfer"), caller.clone()),
        new_owner.clone(),
    );
    true
}
