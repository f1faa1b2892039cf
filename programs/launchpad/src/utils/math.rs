//! Fixed-point helpers. Fractions are integer numerators over `ACCURACY`;
//! every product is formed in u128 before the division.

use crate::constants::ACCURACY;
use crate::error::{LaunchpadError, LaunchpadResult};

/// Reward units bought with `amount` funds at `rate` (funds per reward unit,
/// scaled by `ACCURACY`). Floors.
pub fn funds_to_reward(amount: u64, rate: u64) -> LaunchpadResult<u128> {
    if rate == 0 {
        return Err(LaunchpadError::InvalidRate);
    }
    // u64::MAX * 1e10 < u128::MAX
    Ok((amount as u128) * (ACCURACY as u128) / (rate as u128))
}

/// `value * fraction / ACCURACY`, floored.
pub fn apply_fraction(value: u64, fraction: u64) -> LaunchpadResult<u64> {
    let v = (value as u128) * (fraction as u128) / (ACCURACY as u128);
    to_u64(v)
}

/// Splits `total` into `(fee, remainder)` for a service fee fraction.
pub fn split_service_fee(total: u64, fee_fraction: u64) -> LaunchpadResult<(u64, u64)> {
    if fee_fraction > ACCURACY {
        return Err(LaunchpadError::InvalidFraction);
    }
    let fee = apply_fraction(total, fee_fraction)?;
    let rest = total.checked_sub(fee).ok_or(LaunchpadError::MathOverflow)?;
    Ok((fee, rest))
}

pub fn to_u64(v: u128) -> LaunchpadResult<u64> {
    u64::try_from(v).map_err(|_| LaunchpadError::MathOverflow)
}
