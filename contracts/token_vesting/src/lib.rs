#![no_std]

mod storage;

pub use storage::{VestingConfig, VestingStatus};

use sale_common::{ownership, LedgerClient, ScheduleClient};
use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, log, symbol_short, Address, Env,
};
use storage::*;

contractmeta!(
    key = "Description",
    val = "Token vesting account released along a shared schedule"
);

const BPS_DENOMINATOR: i128 = 10_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    NothingToRelease = 4,
    TokenLocked = 5,
    AlreadyRevoked = 6,
}

/// `floor(amount * bps / 10_000)` for `0 <= bps <= 10_000`, computed without
/// forming the full product.
pub fn portion(amount: i128, bps: u32) -> i128 {
    let bps = i128::from(bps);
    (amount / BPS_DENOMINATOR) * bps + (amount % BPS_DENOMINATOR) * bps / BPS_DENOMINATOR
}

/// Snapshot of the account taken once per call.
struct Position {
    balance: i128,
    released: i128,
    vested: i128,
}

impl Position {
    fn releasable(&self) -> i128 {
        if self.vested > self.released {
            self.vested - self.released
        } else {
            0
        }
    }
}

fn load_config(env: &Env) -> Result<VestingConfig, Error> {
    get_config(env).ok_or(Error::NotInitialized)
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    if !ownership::is_owner(env, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

fn position(env: &Env, config: &VestingConfig) -> Position {
    let balance = LedgerClient::new(env, &config.token).balance(&env.current_contract_address());
    let released = get_released(env);
    let vested = match get_status(env) {
        VestingStatus::Active => {
            let fraction = ScheduleClient::new(env, &config.schedule).unlocked_fraction();
            portion(balance + released, fraction)
        }
        // accrual stopped at revocation; what is left here was already vested
        VestingStatus::Revoked => balance + released,
        VestingStatus::Killed => released,
    };
    Position {
        balance,
        released,
        vested,
    }
}

fn require_can_move(env: &Env, config: &VestingConfig) -> Result<(), Error> {
    let ledger = LedgerClient::new(env, &config.token);
    if !ledger.can_trade(&env.current_contract_address()) {
        return Err(Error::TokenLocked);
    }
    Ok(())
}

fn pay_out(env: &Env, config: &VestingConfig, to: &Address, amount: i128) {
    LedgerClient::new(env, &config.token).transfer(&env.current_contract_address(), to, &amount);
}

#[contract]
pub struct TokenVesting;

#[contractimpl]
impl TokenVesting {
    /// Binds the account. The allocation is whatever the ledger credits to
    /// this contract's address.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        beneficiary: Address,
        schedule: Address,
    ) -> Result<(), Error> {
        if get_config(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        ownership::set_owner(&env, &owner);
        set_config(
            &env,
            &VestingConfig {
                token,
                beneficiary: beneficiary.clone(),
                schedule: schedule.clone(),
            },
        );
        set_released(&env, 0);
        set_status(&env, VestingStatus::Active);

        env.events()
            .publish((symbol_short!("init"), beneficiary), schedule);
        Ok(())
    }

    /// Pays everything currently releasable to the beneficiary. Anyone may
    /// trigger it.
    pub fn release(env: Env) -> Result<i128, Error> {
        let config = load_config(&env)?;
        let position = position(&env, &config);
        let amount = position.releasable();
        if amount == 0 {
            return Err(Error::NothingToRelease);
        }
        require_can_move(&env, &config)?;

        pay_out(&env, &config, &config.beneficiary, amount);
        let released = position.released + amount;
        set_released(&env, released);

        env.events().publish(
            (symbol_short!("released"), config.beneficiary),
            (amount, released, position.balance - amount),
        );
        Ok(amount)
    }

    /// Stops vesting. The part vested so far stays releasable; the rest goes
    /// back to the owner now.
    pub fn revoke(env: Env, caller: Address) -> Result<i128, Error> {
        let config = load_config(&env)?;
        require_owner(&env, &caller)?;
        if get_status(&env) != VestingStatus::Active {
            return Err(Error::AlreadyRevoked);
        }

        let position = position(&env, &config);
        let retained = position.releasable();
        let refund = position.balance - retained;
        if refund > 0 {
            require_can_move(&env, &config)?;
            pay_out(&env, &config, &caller, refund);
        }
        set_status(&env, VestingStatus::Revoked);

        log!(&env, "vesting revoked", refund, retained);
        env.events()
            .publish((symbol_short!("revoked"), caller), (refund, retained));
        Ok(refund)
    }

    /// Sweeps the whole balance to the owner regardless of the schedule.
    /// Allowed from any state; the account ends killed.
    pub fn kill(env: Env, caller: Address) -> Result<i128, Error> {
        let config = load_config(&env)?;
        require_owner(&env, &caller)?;

        let balance =
            LedgerClient::new(&env, &config.token).balance(&env.current_contract_address());
        if balance > 0 {
            require_can_move(&env, &config)?;
            pay_out(&env, &config, &caller, balance);
        }
        set_status(&env, VestingStatus::Killed);

        env.events()
            .publish((symbol_short!("killed"), caller), balance);
        Ok(balance)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        load_config(&env)?;
        if !ownership::transfer_ownership(&env, &caller, &new_owner) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    // View functions
    pub fn releasable_amount(env: Env) -> Result<i128, Error> {
        let config = load_config(&env)?;
        Ok(position(&env, &config).releasable())
    }

    pub fn vested_amount(env: Env) -> Result<i128, Error> {
        let config = load_config(&env)?;
        Ok(position(&env, &config).vested)
    }

    pub fn released(env: Env) -> i128 {
        get_released(&env)
    }

    pub fn status(env: Env) -> VestingStatus {
        get_status(&env)
    }

    pub fn config(env: Env) -> Result<VestingConfig, Error> {
        load_config(&env)
    }

    pub fn beneficiary(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.beneficiary)
    }

    pub fn schedule(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.schedule)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.token)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        ownership::owner(&env).ok_or(Error::NotInitialized)
    }
}
