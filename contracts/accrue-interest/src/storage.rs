use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::types::DataKey;

// ---------- TTL constants ----------
// ~5s per ledger
// 30 days  ≈  518_400 ledgers
// 180 days ≈ 3_110_400 ledgers
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 100_800; // ~7 days
pub const INSTANCE_BUMP_AMOUNT: u32 = 518_400;        // bump to ~30 days
pub const RECORD_LIFETIME_THRESHOLD: u32 = 518_400;   // ~30 days
pub const RECORD_BUMP_AMOUNT: u32 = 3_110_400;        // bump to ~180 days

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ============ INITIALIZED ============

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    extend_instance(env);
    Ok(())
}

// ============ ADMIN ============

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

// ============ TOKENS ============

pub fn get_value_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::ValueToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_value_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::ValueToken, token);
}

pub fn get_membership_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::MembershipToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_membership_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::MembershipToken, token);
}

// ============ RATES ============

pub fn get_long_boosted_rate(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::LongBoostedRate)
        .ok_or(Error::NotInitialized)
}

pub fn set_long_boosted_rate(env: &Env, rate: u32) {
    env.storage().instance().set(&DataKey::LongBoostedRate, &rate);
}

// ============ CUSTODY TOTALS ============

fn read_i128(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

fn write_i128(env: &Env, key: &DataKey, val: i128) {
    env.storage().instance().set(key, &val);
}

/// Principal of every active deposit.
pub fn get_total_locked(env: &Env) -> i128 {
    read_i128(env, &DataKey::TotalLocked)
}

/// Payout owed on every active deposit.
pub fn get_total_owed(env: &Env) -> i128 {
    read_i128(env, &DataKey::TotalOwed)
}

pub fn add_outstanding(env: &Env, principal: i128, payout: i128) {
    write_i128(env, &DataKey::TotalLocked, get_total_locked(env) + principal);
    write_i128(env, &DataKey::TotalOwed, get_total_owed(env) + payout);
}

pub fn remove_outstanding(env: &Env, principal: i128, payout: i128) {
    write_i128(env, &DataKey::TotalLocked, get_total_locked(env) - principal);
    write_i128(env, &DataKey::TotalOwed, get_total_owed(env) - payout);
}
