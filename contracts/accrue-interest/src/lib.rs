#![no_std]

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, Vec};

mod error;
mod events;
mod ledger;
mod rate;
mod storage;
mod types;

pub use error::Error;
pub use types::{DepositRecord, LockUp};

use events::{deposit_event, initialized_event, withdraw_event};
use storage::{
    add_outstanding, extend_instance, get_admin, get_long_boosted_rate, get_membership_token,
    get_total_locked, get_total_owed, get_value_token, is_initialized, remove_outstanding,
    require_initialized, set_admin, set_initialized, set_long_boosted_rate, set_membership_token,
    set_value_token,
};

fn payout_for(env: &Env, record: &DepositRecord) -> Result<i128, Error> {
    let long_boosted_rate = get_long_boosted_rate(env)?;
    let percent = rate::rate(record.lock_up(), record.boosted, long_boosted_rate);
    Ok(rate::payout(record.principal, percent))
}

#[contract]
pub struct AccrueInterest;

#[contractimpl]
impl AccrueInterest {
    /// Configure the ledger.
    ///
    /// `long_boosted_rate` is the total interest percentage for a boosted
    /// 180-day deposit. It is fixed for the life of the contract.
    pub fn initialize(
        env: Env,
        admin: Address,
        value_token: Address,
        membership_token: Address,
        long_boosted_rate: u32,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        rate::validate_long_boosted_rate(long_boosted_rate)?;

        set_admin(&env, &admin);
        set_value_token(&env, &value_token);
        set_membership_token(&env, &membership_token);
        set_long_boosted_rate(&env, long_boosted_rate);
        set_initialized(&env);
        extend_instance(&env);

        initialized_event(&env, admin, value_token, membership_token, long_boosted_rate);
        log!(&env, "AccrueInterest: Initialized");
        Ok(())
    }

    /// Upgrade the contract WASM. Only callable by admin.
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        require_initialized(&env)?;
        let admin = get_admin(&env)?;
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    /// Bump instance TTL. Anyone may call this to keep the contract alive.
    pub fn bump_instance(env: Env) -> Result<(), Error> {
        require_initialized(&env)
    }

    // ==========================================================
    // Deposits
    // ==========================================================

    /// Lock `amount` of the value token for 45 days (`short`) or 180 days
    /// (`long`). Exactly one of the two flags must be set.
    ///
    /// Returns the id of the new deposit.
    pub fn deposit(
        env: Env,
        user: Address,
        amount: i128,
        short: bool,
        long: bool,
    ) -> Result<BytesN<32>, Error> {
        require_initialized(&env)?;
        user.require_auth();

        let lock_up = LockUp::select(short, long)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let membership = token::Client::new(&env, &get_membership_token(&env)?);
        let boosted = membership.balance(&user) > 0;

        let value = token::Client::new(&env, &get_value_token(&env)?);
        value.transfer(&user, &env.current_contract_address(), &amount);

        let now = env.ledger().timestamp();
        let (id, record) = ledger::create_record(&env, &user, amount, lock_up, boosted, now)?;
        add_outstanding(&env, amount, payout_for(&env, &record)?);

        deposit_event(&env, user.clone(), id.clone(), &record);
        log!(
            &env,
            "Deposit: user={}, amount={}, lock_up={}, boosted={}",
            user, amount, record.lock_up_period, boosted
        );

        Ok(id)
    }

    /// Pay out principal plus interest once the lock-up has elapsed.
    ///
    /// Returns the amount transferred to `user`.
    pub fn withdraw(env: Env, user: Address, deposit_id: BytesN<32>) -> Result<i128, Error> {
        require_initialized(&env)?;
        user.require_auth();

        let record = ledger::get_record(&env, &user, &deposit_id)
            .filter(DepositRecord::is_active)
            .ok_or(Error::NoBalance)?;

        let now = env.ledger().timestamp();
        if now < record.withdrawable_at {
            return Err(Error::LockUpNotElapsed);
        }

        let payout = payout_for(&env, &record)?;

        // Retire before paying out so the same id can never pay twice.
        ledger::retire_record(&env, &user, &deposit_id)?;
        remove_outstanding(&env, record.principal, payout);

        let value = token::Client::new(&env, &get_value_token(&env)?);
        value.transfer(&env.current_contract_address(), &user, &payout);

        withdraw_event(&env, user.clone(), deposit_id, record.principal, payout);
        log!(
            &env,
            "Withdraw: user={}, principal={}, payout={}",
            user, record.principal, payout
        );

        Ok(payout)
    }

    // ==========================================================
    // View functions
    // ==========================================================

    /// Every deposit id ever created for `user`, oldest first. Withdrawn
    /// deposits stay listed.
    pub fn get_user_deposits(env: Env, user: Address) -> Vec<BytesN<32>> {
        ledger::list_ids(&env, &user)
    }

    /// `None` if the id was never created for `user`. A withdrawn deposit
    /// reads back with a principal of zero.
    pub fn get_deposit(env: Env, user: Address, deposit_id: BytesN<32>) -> Option<DepositRecord> {
        ledger::get_record(&env, &user, &deposit_id)
    }

    /// What `withdraw` would pay for this deposit, ignoring the lock-up.
    pub fn preview_payout(env: Env, user: Address, deposit_id: BytesN<32>) -> Result<i128, Error> {
        require_initialized(&env)?;
        let record = ledger::get_record(&env, &user, &deposit_id)
            .filter(DepositRecord::is_active)
            .ok_or(Error::NoBalance)?;
        payout_for(&env, &record)
    }

    pub fn rate_for(env: Env, lock_up: LockUp, boosted: bool) -> Result<u32, Error> {
        require_initialized(&env)?;
        Ok(rate::rate(lock_up, boosted, get_long_boosted_rate(&env)?))
    }

    pub fn total_locked(env: Env) -> i128 {
        get_total_locked(&env)
    }

    pub fn total_owed(env: Env) -> i128 {
        get_total_owed(&env)
    }

    /// Value-token balance held by the contract.
    pub fn custody_balance(env: Env) -> Result<i128, Error> {
        require_initialized(&env)?;
        let value = token::Client::new(&env, &get_value_token(&env)?);
        Ok(value.balance(&env.current_contract_address()))
    }

    pub fn value_token(env: Env) -> Result<Address, Error> {
        get_value_token(&env)
    }

    pub fn membership_token(env: Env) -> Result<Address, Error> {
        get_membership_token(&env)
    }

    pub fn long_boosted_rate(env: Env) -> Result<u32, Error> {
        get_long_boosted_rate(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }
}
