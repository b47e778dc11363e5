use crate::events;
use crate::policy::sender_can_trade;
use crate::storage::*;
use crate::types::*;
use sale_common::{is_zero_address, ownership, recovery, OwnableClient};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Fixed-supply sale token with a global trade lock"
);

#[contract]
pub struct SaleToken;

fn require_initialized(env: &Env) -> Result<(), Error> {
    if !is_initialized(env) {
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

fn require_non_negative(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

fn require_can_trade(env: &Env, sender: &Address) -> Result<(), Error> {
    if !sender_can_trade(env, sender) {
        return Err(Error::TradeLocked);
    }
    Ok(())
}

/// Debits `from` and credits `to`, returning both resulting balances.
fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(i128, i128), Error> {
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }
    set_balance(env, from, from_balance - amount);

    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    set_balance(env, to, to_balance);

    let from_balance = get_balance(env, from);
    events::transferred(env, from, to, amount, from_balance, to_balance);
    Ok((from_balance, to_balance))
}

fn update_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    new_allowance: i128,
) {
    let old = get_allowance(env, from, spender);
    set_allowance(env, from, spender, new_allowance);
    events::approval(env, from, spender, old, new_allowance);
}

#[contractimpl]
impl SaleToken {
    /// Mints the whole supply once, crediting `holders[i]` with `amounts[i]`.
    /// Trading starts locked.
    pub fn initialize(
        env: Env,
        owner: Address,
        holders: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if holders.len() != amounts.len() {
            return Err(Error::LengthMismatch);
        }

        let mut total_supply: i128 = 0;
        for (holder, amount) in holders.iter().zip(amounts.iter()) {
            require_non_negative(amount)?;
            if is_zero_address(&env, &holder) {
                return Err(Error::InvalidAddress);
            }
            total_supply = total_supply.checked_add(amount).ok_or(Error::Overflow)?;

            let balance = get_balance(&env, &holder) + amount;
            set_balance(&env, &holder, balance);
            events::minted(&env, &holder, amount, balance);
        }

        ownership::set_owner(&env, &owner);
        set_total_supply(&env, total_supply);
        set_trade_locked(&env, true);
        set_initialized(&env);

        log!(&env, "ledger initialized", holders.len(), total_supply);
        events::initialized(&env, &owner, total_supply);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        from.require_auth();
        require_non_negative(amount)?;
        if is_zero_address(&env, &to) {
            return Err(Error::InvalidAddress);
        }
        require_can_trade(&env, &from)?;

        move_balance(&env, &from, &to, amount)?;
        Ok(())
    }

    /// Moves `amount` from `from` to `to` against the allowance `from` granted
    /// to `spender`. The trade lock applies to `from`, the owner of the tokens.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        spender.require_auth();
        require_non_negative(amount)?;
        if is_zero_address(&env, &to) {
            return Err(Error::InvalidAddress);
        }
        require_can_trade(&env, &from)?;

        let allowance = get_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(Error::InsufficientAllowance);
        }

        move_balance(&env, &from, &to, amount)?;
        update_allowance(&env, &from, &spender, allowance - amount);
        Ok(())
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        from.require_auth();
        require_non_negative(amount)?;
        require_can_trade(&env, &from)?;

        update_allowance(&env, &from, &spender, amount);
        Ok(())
    }

    pub fn increase_approval(
        env: Env,
        from: Address,
        spender: Address,
        added: i128,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        from.require_auth();
        require_non_negative(added)?;
        require_can_trade(&env, &from)?;

        let allowance = get_allowance(&env, &from, &spender)
            .checked_add(added)
            .ok_or(Error::Overflow)?;
        update_allowance(&env, &from, &spender, allowance);
        Ok(())
    }

    /// Lowers an allowance, bottoming out at zero.
    pub fn decrease_approval(
        env: Env,
        from: Address,
        spender: Address,
        subtracted: i128,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        from.require_auth();
        require_non_negative(subtracted)?;
        require_can_trade(&env, &from)?;

        let allowance = get_allowance(&env, &from, &spender);
        let remaining = if subtracted >= allowance {
            0
        } else {
            allowance - subtracted
        };
        update_allowance(&env, &from, &spender, remaining);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        from.require_auth();
        require_non_negative(amount)?;

        let balance = get_balance(&env, &from);
        if balance < amount {
            return Err(Error::InsufficientBalance);
        }
        let balance = balance - amount;
        let total_supply = get_total_supply(&env) - amount;
        set_balance(&env, &from, balance);
        set_total_supply(&env, total_supply);

        events::burned(&env, &from, amount, balance, total_supply);
        Ok(())
    }

    pub fn set_trade_exception(
        env: Env,
        caller: Address,
        id: Address,
        allowed: bool,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        set_trade_exception(&env, &id, allowed);
        events::trade_exception(&env, &id, allowed);
        Ok(())
    }

    pub fn lock(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        set_trade_locked(&env, true);
        events::trade_lock(&env, true);
        Ok(())
    }

    pub fn unlock(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        set_trade_locked(&env, false);
        events::trade_lock(&env, false);
        Ok(())
    }

    /// Sweeps this contract's balance of `asset` to the owner. Tokens of this
    /// ledger parked at its own address move internally, regardless of the lock.
    pub fn reclaim_token(env: Env, caller: Address, asset: Address) -> Result<i128, Error> {
        require_owner(&env, &caller)?;

        let here = env.current_contract_address();
        if asset != here {
            return Ok(recovery::sweep(&env, &asset, &caller));
        }

        let amount = get_balance(&env, &here);
        if amount > 0 {
            move_balance(&env, &here, &caller, amount)?;
            events::reclaimed(&env, &asset, &caller, amount);
        }
        Ok(amount)
    }

    /// Sweeps native asset held by this contract to the owner.
    pub fn reclaim_ether(env: Env, caller: Address, native_asset: Address) -> Result<i128, Error> {
        require_owner(&env, &caller)?;
        Ok(recovery::sweep(&env, &native_asset, &caller))
    }

    /// Passes ownership of a contract owned by this ledger on to the ledger's owner.
    pub fn reclaim_contract(env: Env, caller: Address, contract: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        OwnableClient::new(&env, &contract)
            .transfer_ownership(&env.current_contract_address(), &caller);
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
    pub fn owner(env: Env) -> Result<Address, Error> {
        ownership::owner(&env).ok_or(Error::NotInitialized)
    }

    pub fn initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender)
    }

    pub fn trade_locked(env: Env) -> bool {
        is_trade_locked(&env)
    }

    pub fn has_trade_exception(env: Env, id: Address) -> bool {
        has_trade_exception(&env, &id)
    }

    pub fn can_trade(env: Env, id: Address) -> bool {
        sender_can_trade(&env, &id)
    }
}
