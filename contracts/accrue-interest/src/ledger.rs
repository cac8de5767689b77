//! Deposit records, keyed by owner and deposit id, plus each owner's
//! append-only list of ids.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

use crate::error::Error;
use crate::storage::{RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD};
use crate::types::{DataKey, DepositRecord, LockUp};

const DEPOSIT_ID_DOMAIN: &[u8] = b"accrue-interest/deposit";

fn extend_entry(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

/// keccak256(domain || xdr(owner) || be(nonce) || be(now)).
///
/// `nonce` is the owner's id-list length, which only ever grows, so no two
/// deposits of the same owner share a preimage.
fn derive_id(env: &Env, owner: &Address, nonce: u32, now: u64) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, DEPOSIT_ID_DOMAIN);
    preimage.append(&owner.clone().to_xdr(env));
    preimage.extend_from_array(&nonce.to_be_bytes());
    preimage.extend_from_array(&now.to_be_bytes());
    env.crypto().keccak256(&preimage).to_bytes()
}

pub fn list_ids(env: &Env, owner: &Address) -> Vec<BytesN<32>> {
    let key = DataKey::DepositIds(owner.clone());
    match env.storage().persistent().get::<DataKey, Vec<BytesN<32>>>(&key) {
        Some(ids) => {
            extend_entry(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

pub fn get_record(env: &Env, owner: &Address, id: &BytesN<32>) -> Option<DepositRecord> {
    let key = DataKey::Deposit(owner.clone(), id.clone());
    let record: Option<DepositRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        extend_entry(env, &key);
    }
    record
}

fn write_record(env: &Env, owner: &Address, id: &BytesN<32>, record: &DepositRecord) {
    let key = DataKey::Deposit(owner.clone(), id.clone());
    env.storage().persistent().set(&key, record);
    extend_entry(env, &key);
}

/// Stores a new active deposit and appends its id to the owner's list.
pub fn create_record(
    env: &Env,
    owner: &Address,
    principal: i128,
    lock_up: LockUp,
    boosted: bool,
    now: u64,
) -> Result<(BytesN<32>, DepositRecord), Error> {
    let mut ids = list_ids(env, owner);
    let id = derive_id(env, owner, ids.len(), now);

    let key = DataKey::Deposit(owner.clone(), id.clone());
    if env.storage().persistent().has(&key) {
        return Err(Error::RecordIdCollision);
    }

    let lock_up_period = lock_up.duration();
    let record = DepositRecord {
        principal,
        deposited_at: now,
        withdrawable_at: now + lock_up_period,
        lock_up_period,
        boosted,
    };
    write_record(env, owner, &id, &record);

    ids.push_back(id.clone());
    let ids_key = DataKey::DepositIds(owner.clone());
    env.storage().persistent().set(&ids_key, &ids);
    extend_entry(env, &ids_key);

    Ok((id, record))
}

/// Zeroes the principal in place and returns the record as it was.
///
/// The id stays listed and the timestamps stay readable.
pub fn retire_record(env: &Env, owner: &Address, id: &BytesN<32>) -> Result<DepositRecord, Error> {
    let record = get_record(env, owner, id)
        .filter(DepositRecord::is_active)
        .ok_or(Error::NoBalance)?;

    let retired = DepositRecord {
        principal: 0,
        ..record.clone()
    };
    write_record(env, owner, id, &retired);

    Ok(record)
}
