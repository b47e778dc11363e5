#![no_std]

use sale_common::{is_zero_address, ownership};
use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address, Env,
    Vec,
};

contractmeta!(
    key = "Description",
    val = "Sale participant whitelist with bonus tiers and purchase caps"
);

/// Largest bonus a tier may carry, in percent.
pub const MAX_BONUS_PERCENT: u32 = 100;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    InvalidAddress = 4,
    InvalidBonus = 5,
    InvalidAmount = 6,
    NotWhitelisted = 7,
}

/// Eligibility record of one sale participant. `purchased` counts contributed
/// value, not tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Participant {
    pub bonus_percent: u32,
    pub purchase_cap: i128,
    pub purchased: i128,
    pub revoked: bool,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Crowdsale,
    Participant(Address),
}

fn get_participant(env: &Env, addr: &Address) -> Option<Participant> {
    env.storage()
        .persistent()
        .get(&DataKey::Participant(addr.clone()))
}

fn set_participant(env: &Env, addr: &Address, participant: &Participant) {
    env.storage()
        .persistent()
        .set(&DataKey::Participant(addr.clone()), participant);
}

fn get_crowdsale(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Crowdsale)
}

fn require_initialized(env: &Env) -> Result<(), Error> {
    if !env.storage().instance().has(&DataKey::Initialized) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    require_initialized(env)?;
    if !ownership::is_owner(env, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// The owner and the bound crowdsale may both manage participants.
fn require_manager(env: &Env, caller: &Address) -> Result<(), Error> {
    require_initialized(env)?;
    if ownership::is_owner(env, caller) {
        return Ok(());
    }
    match get_crowdsale(env) {
        Some(crowdsale) if crowdsale == *caller => Ok(()),
        _ => Err(Error::Unauthorized),
    }
}

fn validate_purchase(participant: &Participant, amount: i128) -> bool {
    if participant.revoked || amount < 0 {
        return false;
    }
    match participant.purchased.checked_add(amount) {
        Some(total) => total <= participant.purchase_cap,
        None => false,
    }
}

fn add_one(env: &Env, addr: &Address, bonus_percent: u32, purchase_cap: i128) -> Result<(), Error> {
    if is_zero_address(env, addr) {
        return Err(Error::InvalidAddress);
    }

    // A revoked entry is replaced by a fresh one; an active entry keeps its
    // running total and only changes tier and cap.
    let purchased = match get_participant(env, addr) {
        Some(existing) if !existing.revoked => existing.purchased,
        _ => 0,
    };
    let participant = Participant {
        bonus_percent,
        purchase_cap,
        purchased,
        revoked: false,
    };
    set_participant(env, addr, &participant);

    env.events().publish(
        (symbol_short!("wl_add"), addr.clone()),
        (bonus_percent, purchase_cap, purchased),
    );
    Ok(())
}

fn revoke_one(env: &Env, addr: &Address) {
    if let Some(mut participant) = get_participant(env, addr) {
        participant.revoked = true;
        set_participant(env, addr, &participant);
        env.events().publish(
            (symbol_short!("wl_revoke"), addr.clone()),
            participant.purchased,
        );
    }
}

fn validate_tier(bonus_percent: u32, purchase_cap: i128) -> Result<(), Error> {
    if bonus_percent > MAX_BONUS_PERCENT {
        return Err(Error::InvalidBonus);
    }
    if purchase_cap < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

#[contract]
pub struct ParticipantWhitelist;

#[contractimpl]
impl ParticipantWhitelist {
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        ownership::set_owner(&env, &owner);
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.events().publish((symbol_short!("init"),), owner);
        Ok(())
    }

    /// Binds the crowdsale allowed to manage participants and record purchases.
    pub fn set_crowdsale(env: Env, caller: Address, crowdsale: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        env.storage().instance().set(&DataKey::Crowdsale, &crowdsale);
        env.events()
            .publish((symbol_short!("wl_sale"),), crowdsale);
        Ok(())
    }

    pub fn add_participant(
        env: Env,
        caller: Address,
        participant: Address,
        bonus_percent: u32,
        purchase_cap: i128,
    ) -> Result<(), Error> {
        require_manager(&env, &caller)?;
        validate_tier(bonus_percent, purchase_cap)?;
        add_one(&env, &participant, bonus_percent, purchase_cap)
    }

    /// Adds every address in `participants` to the same tier. One invalid
    /// address fails the whole batch.
    pub fn add_participants(
        env: Env,
        caller: Address,
        participants: Vec<Address>,
        bonus_percent: u32,
        purchase_cap: i128,
    ) -> Result<(), Error> {
        require_manager(&env, &caller)?;
        validate_tier(bonus_percent, purchase_cap)?;
        for participant in participants.iter() {
            add_one(&env, &participant, bonus_percent, purchase_cap)?;
        }
        Ok(())
    }

    pub fn revoke_participant(env: Env, caller: Address, participant: Address) -> Result<(), Error> {
        require_manager(&env, &caller)?;
        revoke_one(&env, &participant);
        Ok(())
    }

    pub fn revoke_participants(
        env: Env,
        caller: Address,
        participants: Vec<Address>,
    ) -> Result<(), Error> {
        require_manager(&env, &caller)?;
        for participant in participants.iter() {
            revoke_one(&env, &participant);
        }
        Ok(())
    }

    /// Adds `amount` of contributed value to the participant's running total.
    /// Only the bound crowdsale records purchases.
    pub fn record_purchase(
        env: Env,
        caller: Address,
        participant: Address,
        amount: i128,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        caller.require_auth();
        if get_crowdsale(&env) != Some(caller) {
            return Err(Error::Unauthorized);
        }

        let mut entry = get_participant(&env, &participant).ok_or(Error::NotWhitelisted)?;
        if !validate_purchase(&entry, amount) {
            return Err(Error::NotWhitelisted);
        }
        entry.purchased += amount;
        set_participant(&env, &participant, &entry);

        env.events().publish(
            (symbol_short!("wl_buy"), participant),
            (amount, entry.purchased, entry.purchase_cap),
        );
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_initialized(&env)?;
        if !ownership::transfer_ownership(&env, &caller, &new_owner) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    // View functions
    pub fn is_valid_purchase(env: Env, participant: Address, amount: i128) -> bool {
        get_participant(&env, &participant)
            .map(|entry| validate_purchase(&entry, amount))
            .unwrap_or(false)
    }

    pub fn get_bonus_percent(env: Env, participant: Address) -> u32 {
        match get_participant(&env, &participant) {
            Some(entry) if !entry.revoked => entry.bonus_percent,
            _ => 0,
        }
    }

    pub fn participant(env: Env, participant: Address) -> Option<Participant> {
        get_participant(&env, &participant)
    }

    pub fn crowdsale(env: Env) -> Option<Address> {
        get_crowdsale(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        ownership::owner(&env).ok_or(Error::NotInitialized)
    }

    /// Capability probe: lets a crowdsale confirm it was handed a whitelist.
    pub fn is_whitelist(_env: Env) -> bool {
        true
    }
}
