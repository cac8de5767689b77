use crate::error::Error;
use crate::types::LockUp;

// Total interest over the whole lock-up, in percent (not annualised).
pub const SHORT_RATE: u32 = 18;
pub const SHORT_BOOSTED_RATE: u32 = 23;
pub const LONG_RATE: u32 = 48;

/// Upper bound accepted for the configured long-tier boosted rate.
pub const MAX_RATE_PERCENT: u32 = 1_000;

const PERCENT_DENOMINATOR: i128 = 100;

/// Interest percentage for a tier.
///
/// The long-tier boosted rate has no fixed value yet and is supplied by the
/// deployer at initialisation.
pub fn rate(lock_up: LockUp, boosted: bool, long_boosted_rate: u32) -> u32 {
    match (lock_up, boosted) {
        (LockUp::Short, false) => SHORT_RATE,
        (LockUp::Short, true) => SHORT_BOOSTED_RATE,
        (LockUp::Long, false) => LONG_RATE,
        (LockUp::Long, true) => long_boosted_rate,
    }
}

/// Principal plus interest, truncated toward zero.
pub fn payout(principal: i128, rate: u32) -> i128 {
    principal + principal * rate as i128 / PERCENT_DENOMINATOR
}

/// A boost never lowers the rate below the unboosted long tier.
pub fn validate_long_boosted_rate(long_boosted_rate: u32) -> Result<(), Error> {
    if long_boosted_rate < LONG_RATE || long_boosted_rate > MAX_RATE_PERCENT {
        return Err(Error::InvalidRate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_HUNDRED: i128 = 100_0000000;

    #[test]
    fn test_confirmed_rates() {
        assert_eq!(rate(LockUp::Short, false, 60), 18);
        assert_eq!(rate(LockUp::Short, true, 60), 23);
        assert_eq!(rate(LockUp::Long, false, 60), 48);
    }

    #[test]
    fn test_long_boosted_rate_comes_from_config() {
        for configured in [48u32, 53, 60, 72] {
            assert_eq!(rate(LockUp::Long, true, configured), configured);
        }
    }

    #[test]
    fn test_payout_whole_units() {
        assert_eq!(payout(100, SHORT_RATE), 118);
        assert_eq!(payout(100, SHORT_BOOSTED_RATE), 123);
        assert_eq!(payout(100, LONG_RATE), 148);
    }

    #[test]
    fn test_payout_fixed_point() {
        // 100 tokens at 7 decimals
        assert_eq!(payout(ONE_HUNDRED, SHORT_RATE), 118_0000000);
        assert_eq!(payout(ONE_HUNDRED, SHORT_BOOSTED_RATE), 123_0000000);
        assert_eq!(payout(ONE_HUNDRED, LONG_RATE), 148_0000000);
    }

    #[test]
    fn test_payout_truncates() {
        // 7 * 18 / 100 = 1.26 -> 1
        assert_eq!(payout(7, SHORT_RATE), 8);
        // 3 * 23 / 100 = 0.69 -> 0
        assert_eq!(payout(3, SHORT_BOOSTED_RATE), 3);
    }

    #[test]
    fn test_validate_long_boosted_rate() {
        assert_eq!(validate_long_boosted_rate(LONG_RATE), Ok(()));
        assert_eq!(validate_long_boosted_rate(MAX_RATE_PERCENT), Ok(()));
        assert_eq!(validate_long_boosted_rate(LONG_RATE - 1), Err(Error::InvalidRate));
        assert_eq!(validate_long_boosted_rate(MAX_RATE_PERCENT + 1), Err(Error::InvalidRate));
    }
}
