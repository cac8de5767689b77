use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {

    AlreadyInitialized = 1,

    NotInitialized = 2,

    // "Must be one or the other"
    InvalidLockUpSelection = 3,

    InvalidAmount = 4,

    // "No balance to withdraw"
    NoBalance = 5,

    // "Cannot withdraw yet"
    LockUpNotElapsed = 6,

    RecordIdCollision = 7,

    InvalidRate = 8,
}
