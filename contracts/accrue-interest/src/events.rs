use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::types::DepositRecord;

// Event emitted once the contract is configured
pub fn initialized_event(
    env: &Env,
    admin: Address,
    value_token: Address,
    membership_token: Address,
    long_boosted_rate: u32,
) {
    let topics = (symbol_short!("init"),);
    env.events()
        .publish(topics, (admin, value_token, membership_token, long_boosted_rate));
}

// Event emitted when a user locks up a deposit
pub fn deposit_event(env: &Env, user: Address, id: BytesN<32>, record: &DepositRecord) {
    let topics = (symbol_short!("deposit"), user);
    env.events().publish(
        topics,
        (
            id,
            record.principal,
            record.lock_up_period,
            record.boosted,
            record.withdrawable_at,
        ),
    );
}

// Event emitted when a deposit is paid out
pub fn withdraw_event(env: &Env, user: Address, id: BytesN<32>, principal: i128, payout: i128) {
    let topics = (symbol_short!("withdraw"), user);
    env.events().publish(topics, (id, principal, payout));
}
