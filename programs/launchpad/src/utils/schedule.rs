//! Linear-release vesting curve.
//! - before `start_time` (or while unscheduled, `start_time == 0`): 0
//! - `start_time <= now < start_time + lock_period`: 0
//! - afterwards: `initial_unlock * total + floor(elapsed / interval) * release_rate * total`
//!   (both over `ACCURACY`), clamped to `total`
//! - `vesting_period > 0` and `now >= lock_end + vesting_period`: `total`
//!
//! The release product saturates instead of wrapping, so the curve stays
//! monotonic and bounded by `total` for any `now`.

use crate::constants::ACCURACY;
use crate::state::VestingTerms;

pub fn lock_end(start_time: i64, terms: &VestingTerms) -> i64 {
    start_time.saturating_add(terms.lock_period)
}

pub fn vested_amount(total: u64, terms: &VestingTerms, start_time: i64, now: i64) -> u64 {
    if total == 0 || start_time == 0 || now < start_time {
        return 0;
    }
    let unlock_at = lock_end(start_time, terms);
    if now < unlock_at {
        return 0;
    }
    if terms.vesting_period > 0 && now >= unlock_at.saturating_add(terms.vesting_period) {
        return total;
    }

    let total = total as u128;
    let accuracy = ACCURACY as u128;
    let elapsed = (now - unlock_at) as u128;
    let intervals = elapsed / (terms.release_interval.max(1) as u128);

    let initial = total * (terms.initial_unlock as u128) / accuracy;
    let released = intervals
        .saturating_mul(total)
        .saturating_mul(terms.release_rate as u128)
        / accuracy;

    initial.saturating_add(released).min(total) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_800_000_000;

    fn terms() -> VestingTerms {
        VestingTerms {
            initial_unlock: 1_000_000_000, // 10%
            release_interval: 60,
            release_rate: 1_000_000_000, // 10% per interval
            lock_period: 60,
            vesting_period: 0,
        }
    }

    #[test]
    fn nothing_before_start_or_inside_lock() {
        let t = terms();
        assert_eq!(vested_amount(1000, &t, START, START - 1), 0);
        assert_eq!(vested_amount(1000, &t, START, START), 0);
        assert_eq!(vested_amount(1000, &t, START, START + 59), 0);
        // unscheduled
        assert_eq!(vested_amount(1000, &t, 0, START), 0);
    }

    #[test]
    fn releases_per_interval_and_clamps() {
        let t = terms();
        let unlock = lock_end(START, &t);
        assert_eq!(vested_amount(1000, &t, START, unlock), 100);
        assert_eq!(vested_amount(1000, &t, START, unlock + 59), 100);
        assert_eq!(vested_amount(1000, &t, START, unlock + 60), 200);
        assert_eq!(vested_amount(1000, &t, START, unlock + 60 * 9), 1000);
        assert_eq!(vested_amount(1000, &t, START, unlock + 60 * 10), 1000);
    }

    #[test]
    fn saturates_for_huge_elapsed_time() {
        let t = terms();
        assert_eq!(vested_amount(u64::MAX, &t, START, i64::MAX), u64::MAX);
        assert_eq!(vested_amount(1000, &t, 1, i64::MAX), 1000);
    }

    #[test]
    fn monotonic_over_time() {
        let t = VestingTerms {
            initial_unlock: 0,
            release_interval: 7,
            release_rate: 23_150,
            lock_period: 13,
            vesting_period: 0,
        };
        let mut prev = 0;
        for now in (START - 10..START + 10_000).step_by(3) {
            let v = vested_amount(987_654_321, &t, START, now);
            assert!(v >= prev);
            assert!(v <= 987_654_321);
            prev = v;
        }
    }

    #[test]
    fn vesting_period_releases_everything() {
        let mut t = terms();
        t.release_rate = 1; // tiny rate would take forever
        t.vesting_period = 3_600;
        let unlock = lock_end(START, &t);
        assert_eq!(vested_amount(1000, &t, START, unlock + 3_599), 100);
        assert_eq!(vested_amount(1000, &t, START, unlock + 3_600), 1000);
    }
}
