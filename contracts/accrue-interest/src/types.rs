use soroban_sdk::{contracttype, Address, BytesN};

use crate::error::Error;

const SECONDS_PER_DAY: u64 = 86_400;

pub const SHORT_LOCK_UP: u64 = 45 * SECONDS_PER_DAY;
pub const LONG_LOCK_UP: u64 = 180 * SECONDS_PER_DAY;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    ValueToken,
    MembershipToken,
    LongBoostedRate,
    Initialized,
    TotalLocked,
    TotalOwed,
    Deposit(Address, BytesN<32>), // (owner, deposit id) → DepositRecord
    DepositIds(Address),          // owner → Vec<BytesN<32>>, append-only
}

/// One of the two lock-up tiers a depositor can pick.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LockUp {
    Short,
    Long,
}

impl LockUp {
    /// Maps the two deposit flags to a tier. Exactly one must be set.
    pub fn select(short: bool, long: bool) -> Result<LockUp, Error> {
        match (short, long) {
            (true, false) => Ok(LockUp::Short),
            (false, true) => Ok(LockUp::Long),
            _ => Err(Error::InvalidLockUpSelection),
        }
    }

    /// Lock-up length in seconds.
    pub fn duration(&self) -> u64 {
        match self {
            LockUp::Short => SHORT_LOCK_UP,
            LockUp::Long => LONG_LOCK_UP,
        }
    }

    pub fn from_duration(seconds: u64) -> Option<LockUp> {
        match seconds {
            SHORT_LOCK_UP => Some(LockUp::Short),
            LONG_LOCK_UP => Some(LockUp::Long),
            _ => None,
        }
    }
}

/// A single time-locked deposit.
///
/// `principal` drops to zero once the deposit has been withdrawn; the
/// timestamps are kept so the record still reads back afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRecord {
    pub principal: i128,

    pub deposited_at: u64,

    // always deposited_at + lock_up_period
    pub withdrawable_at: u64,

    pub lock_up_period: u64,

    // fixed at deposit time
    pub boosted: bool,
}

impl DepositRecord {
    pub fn is_active(&self) -> bool {
        self.principal > 0
    }

    // lock_up_period is only ever written from LockUp::duration
    pub fn lock_up(&self) -> LockUp {
        LockUp::from_duration(self.lock_up_period).unwrap_or(LockUp::Short)
    }
}
