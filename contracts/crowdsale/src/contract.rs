use crate::events;
use crate::pricing;
use crate::storage::*;
use crate::types::*;
use sale_common::{is_zero_address, ownership, recovery, LedgerClient, WhitelistClient};
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Whitelisted crowdsale with bonus tiers paid from a community pool"
);

fn load_config(env: &Env) -> Result<SaleConfig, Error> {
    get_config(env).ok_or(Error::NotInitialized)
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    if !ownership::is_owner(env, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Purchase preconditions in the order buyers see them. Returns the
/// whitelist to record against.
fn check_purchase(
    env: &Env,
    config: &SaleConfig,
    beneficiary: &Address,
    value: i128,
) -> Result<Address, Error> {
    if get_state(env) != SaleState::Active {
        return Err(Error::SaleNotActive);
    }
    if is_zero_address(env, beneficiary) {
        return Err(Error::InvalidBeneficiary);
    }
    if value < config.min_purchase {
        return Err(Error::BelowMinimum);
    }
    let whitelist = config.whitelist.clone().ok_or(Error::WhitelistNotSet)?;
    if !WhitelistClient::new(env, &whitelist).is_valid_purchase(beneficiary, &value) {
        return Err(Error::NotWhitelisted);
    }
    Ok(whitelist)
}

fn purchase(env: &Env, payer: &Address, beneficiary: &Address, value: i128) -> Result<i128, Error> {
    let config = load_config(env)?;
    let whitelist_id = check_purchase(env, &config, beneficiary, value)?;
    let bonus_pool = config.bonus_pool.clone().ok_or(Error::BonusPoolNotSet)?;

    let whitelist = WhitelistClient::new(env, &whitelist_id);
    let bonus_percent = whitelist.get_bonus_percent(beneficiary);
    let split = pricing::allocation(value, config.rate, bonus_percent).ok_or(Error::Overflow)?;
    let total_raised = get_total_raised(env)
        .checked_add(value)
        .ok_or(Error::Overflow)?;

    let here = env.current_contract_address();
    token::Client::new(env, &config.payment_token).transfer(payer, &here, &value);

    let ledger = LedgerClient::new(env, &config.token);
    ledger.transfer(&here, beneficiary, &split.base);
    if split.bonus > 0 {
        ledger.transfer_from(&here, &bonus_pool, beneficiary, &split.bonus);
    }

    whitelist.record_purchase(&here, beneficiary, &value);
    set_total_raised(env, total_raised);

    events::purchased(env, payer, beneficiary, value, &split);
    Ok(split.total)
}

#[contract]
pub struct Crowdsale;

#[contractimpl]
impl Crowdsale {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        payment_token: Address,
        start_time: u64,
        rate: i128,
        min_purchase: i128,
    ) -> Result<(), Error> {
        if get_config(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        if rate <= 0 || min_purchase < 0 {
            return Err(Error::InvalidAmount);
        }

        ownership::set_owner(&env, &owner);
        set_config(
            &env,
            &SaleConfig {
                token: token.clone(),
                payment_token,
                start_time,
                end_time: None,
                rate,
                min_purchase,
                bonus_pool: None,
                whitelist: None,
            },
        );
        set_state(&env, SaleState::Pending);
        set_total_raised(&env, 0);

        events::initialized(&env, &token, start_time, rate);
        Ok(())
    }

    /// Opens the sale. Needs a whitelist and a bonus pool in place.
    pub fn start(env: Env, caller: Address) -> Result<(), Error> {
        let config = load_config(&env)?;
        require_owner(&env, &caller)?;

        match get_state(&env) {
            SaleState::Active => return Err(Error::AlreadyStarted),
            SaleState::Ended => return Err(Error::AlreadyEnded),
            SaleState::Pending => {}
        }
        let now = env.ledger().timestamp();
        if now < config.start_time {
            return Err(Error::TooEarly);
        }
        if config.whitelist.is_none() {
            return Err(Error::WhitelistNotSet);
        }
        if config.bonus_pool.is_none() {
            return Err(Error::BonusPoolNotSet);
        }

        set_state(&env, SaleState::Active);
        events::started(&env, now);
        Ok(())
    }

    /// Buys for `buyer`, paid by `buyer`. Returns the tokens delivered,
    /// bonus included.
    pub fn buy_tokens(env: Env, buyer: Address, value: i128) -> Result<i128, Error> {
        buyer.require_auth();
        purchase(&env, &buyer, &buyer, value)
    }

    /// Owner-assisted purchase: the owner pays, `beneficiary` receives.
    pub fn buy_tokens_for(
        env: Env,
        caller: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<i128, Error> {
        load_config(&env)?;
        require_owner(&env, &caller)?;
        purchase(&env, &caller, &beneficiary, value)
    }

    pub fn set_exchange_rate(env: Env, caller: Address, rate: i128) -> Result<(), Error> {
        let mut config = load_config(&env)?;
        require_owner(&env, &caller)?;
        if rate <= 0 {
            return Err(Error::InvalidAmount);
        }

        let old = config.rate;
        config.rate = rate;
        set_config(&env, &config);
        events::rate_changed(&env, old, rate);
        Ok(())
    }

    /// Sets the community pool that funds bonuses through an allowance and
    /// receives unsold tokens.
    pub fn set_bonus_pool(env: Env, caller: Address, pool: Address) -> Result<(), Error> {
        let mut config = load_config(&env)?;
        require_owner(&env, &caller)?;
        if is_zero_address(&env, &pool) {
            return Err(Error::InvalidAddress);
        }

        config.bonus_pool = Some(pool.clone());
        set_config(&env, &config);
        events::bonus_pool_set(&env, &pool);
        Ok(())
    }

    pub fn set_whitelist(env: Env, caller: Address, whitelist: Address) -> Result<(), Error> {
        let mut config = load_config(&env)?;
        require_owner(&env, &caller)?;

        let probe = WhitelistClient::new(&env, &whitelist).try_is_whitelist();
        if !matches!(probe, Ok(Ok(true))) {
            log!(&env, "rejected whitelist", whitelist);
            return Err(Error::InvalidWhitelist);
        }

        config.whitelist = Some(whitelist.clone());
        set_config(&env, &config);
        events::whitelist_set(&env, &whitelist);
        Ok(())
    }

    /// Closes the sale. Unsold reserve goes to the bonus pool and collected
    /// contributions to the owner.
    pub fn end(env: Env, caller: Address) -> Result<(), Error> {
        let mut config = load_config(&env)?;
        require_owner(&env, &caller)?;

        match get_state(&env) {
            SaleState::Pending => return Err(Error::SaleNotActive),
            SaleState::Ended => return Err(Error::AlreadyEnded),
            SaleState::Active => {}
        }
        let pool = config.bonus_pool.clone().ok_or(Error::BonusPoolNotSet)?;

        let now = env.ledger().timestamp();
        config.end_time = Some(now);
        set_config(&env, &config);
        set_state(&env, SaleState::Ended);

        let here = env.current_contract_address();
        let ledger = LedgerClient::new(&env, &config.token);
        let unsold = ledger.balance(&here);
        if unsold > 0 {
            ledger.transfer(&here, &pool, &unsold);
        }
        let collected = recovery::sweep(&env, &config.payment_token, &caller);

        events::ended(&env, now, unsold, collected);
        Ok(())
    }

    /// Forwards collected contributions to the owner. Allowed in any state.
    pub fn withdraw_eth(env: Env, caller: Address) -> Result<i128, Error> {
        let config = load_config(&env)?;
        require_owner(&env, &caller)?;
        Ok(recovery::sweep(&env, &config.payment_token, &caller))
    }

    /// Moves the remaining sale reserve to the bonus pool. Allowed in any state.
    pub fn withdraw_tokens(env: Env, caller: Address) -> Result<i128, Error> {
        let config = load_config(&env)?;
        require_owner(&env, &caller)?;
        let pool = config.bonus_pool.ok_or(Error::BonusPoolNotSet)?;

        let here = env.current_contract_address();
        let ledger = LedgerClient::new(&env, &config.token);
        let amount = ledger.balance(&here);
        if amount > 0 {
            ledger.transfer(&here, &pool, &amount);
            events::tokens_withdrawn(&env, &pool, amount);
        }
        Ok(amount)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        load_config(&env)?;
        if !ownership::transfer_ownership(&env, &caller, &new_owner) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    // View functions
    pub fn valid_purchase(env: Env, beneficiary: Address, value: i128) -> bool {
        match get_config(&env) {
            Some(config) => check_purchase(&env, &config, &beneficiary, value).is_ok(),
            None => false,
        }
    }

    pub fn state(env: Env) -> SaleState {
        get_state(&env)
    }

    pub fn sale_active(env: Env) -> bool {
        get_state(&env) == SaleState::Active
    }

    pub fn config(env: Env) -> Result<SaleConfig, Error> {
        load_config(&env)
    }

    pub fn total_raised(env: Env) -> i128 {
        get_total_raised(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        ownership::owner(&env).ok_or(Error::NotInitialized)
    }
}
