use anchor_lang::prelude::*;

use crate::constants::ACCURACY;
use crate::error::{LaunchpadError, LaunchpadResult};
use crate::utils::access::Role;
use crate::utils::schedule;

/// Release curve parameters. Fractions are out of `ACCURACY`; durations in seconds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingTerms {
    /// Share unlocked at the end of the lock period.
    pub initial_unlock: u64,
    pub release_interval: i64,
    /// Share released per elapsed interval.
    pub release_rate: u64,
    pub lock_period: i64,
    /// Everything is vested at `lock end + vesting_period`; 0 disables.
    pub vesting_period: i64,
}

impl VestingTerms {
    pub const SIZE: usize = 8 + 8 + 8 + 8 + 8;

    pub fn validate(&self) -> LaunchpadResult<()> {
        if self.release_rate == 0 {
            return Err(LaunchpadError::InvalidReleaseRate);
        }
        if self.release_interval <= 0 {
            return Err(LaunchpadError::InvalidReleaseInterval);
        }
        if self.initial_unlock > ACCURACY || self.release_rate > ACCURACY {
            return Err(LaunchpadError::InvalidFraction);
        }
        if self.lock_period < 0 || self.vesting_period < 0 {
            return Err(LaunchpadError::InvalidConfig);
        }
        Ok(())
    }
}

/// `initialize_vesting` input.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct VestingParams {
    pub terms: VestingTerms,
    /// Ceiling on the sum of all credited entitlements.
    pub amount_to_be_vested: u64,
}

impl VestingParams {
    pub fn validate(&self) -> LaunchpadResult<()> {
        if self.amount_to_be_vested == 0 {
            return Err(LaunchpadError::InvalidAmount);
        }
        self.terms.validate()
    }
}

/// Vesting pool PDA. The reward vault it owns backs every entitlement.
#[account]
pub struct VestingPool {
    pub operator: Pubkey,
    /// Null key when no worker is assigned.
    pub worker: Pubkey,
    /// Sale PDA allowed to credit and refund; null until `attach_sale`.
    pub creditor: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub terms: VestingTerms,
    /// Unix seconds; 0 while unscheduled.
    pub start_time: i64,
    pub amount_to_be_vested: u64,
    pub total_allocated: u64,
    pub total_withdrawn: u64,
    pub bump: u8,
}

impl VestingPool {
    pub const SIZE: usize =
        32 + // operator
        32 + // worker
        32 + // creditor
        32 + // reward_mint
        32 + // reward_vault
        VestingTerms::SIZE +
        8 +  // start_time
        8 +  // amount_to_be_vested
        8 +  // total_allocated
        8 +  // total_withdrawn
        1;   // bump

    pub fn role(&self, signer: &Pubkey) -> Role {
        Role::resolve(signer, &self.operator, &self.worker, &self.creditor)
    }

    pub fn is_started(&self, now: i64) -> bool {
        self.start_time != 0 && now >= self.start_time
    }

    pub fn remaining(&self) -> u64 {
        self.amount_to_be_vested.saturating_sub(self.total_allocated)
    }

    /// Entitlements still owed to recipients.
    pub fn outstanding(&self) -> u64 {
        self.total_allocated.saturating_sub(self.total_withdrawn)
    }

    /// Hands the credit capability to a sale. One-shot.
    pub fn attach_sale(&mut self, role: Role, sale: Pubkey) -> LaunchpadResult<()> {
        role.require_operator()?;
        if sale == Pubkey::default() {
            return Err(LaunchpadError::InvalidPubkey);
        }
        if self.creditor != Pubkey::default() {
            return Err(LaunchpadError::SaleAlreadyAttached);
        }
        self.creditor = sale;
        Ok(())
    }

    pub fn set_worker(&mut self, role: Role, worker: Pubkey) -> LaunchpadResult<()> {
        role.require_operator()?;
        self.worker = worker;
        Ok(())
    }

    pub fn set_start_time(&mut self, now: i64, start_time: i64) -> LaunchpadResult<()> {
        if self.is_started(now) {
            return Err(LaunchpadError::VestingAlreadyStarted);
        }
        if start_time <= now {
            return Err(LaunchpadError::InvalidTimestamp);
        }
        self.start_time = start_time;
        Ok(())
    }

    /// Adds `amount` to the recipient's entitlement. Credits accumulate.
    pub fn credit(
        &mut self,
        now: i64,
        recipient: &mut VestingRecipient,
        amount: u64,
    ) -> LaunchpadResult<u64> {
        if self.is_started(now) {
            return Err(LaunchpadError::VestingAlreadyStarted);
        }
        if amount == 0 {
            return Err(LaunchpadError::InvalidAmount);
        }
        if amount > self.remaining() {
            return Err(LaunchpadError::ExceedsVestingPool);
        }
        let total = recipient
            .total_amount
            .checked_add(amount)
            .ok_or(LaunchpadError::MathOverflow)?;
        let allocated = self
            .total_allocated
            .checked_add(amount)
            .ok_or(LaunchpadError::MathOverflow)?;

        recipient.total_amount = total;
        self.total_allocated = allocated;
        Ok(total)
    }

    pub fn vested(&self, recipient: &VestingRecipient, now: i64) -> u64 {
        schedule::vested_amount(recipient.total_amount, &self.terms, self.start_time, now)
    }

    pub fn withdrawable(&self, recipient: &VestingRecipient, now: i64) -> u64 {
        self.vested(recipient, now)
            .saturating_sub(recipient.amount_withdrawn)
    }

    pub fn quote(&self, recipient: &VestingRecipient, now: i64) -> VestingSnapshot {
        let vested = self.vested(recipient, now);
        VestingSnapshot {
            total: recipient.total_amount,
            vested,
            withdrawn: recipient.amount_withdrawn,
            withdrawable: vested.saturating_sub(recipient.amount_withdrawn),
            locked: recipient.total_amount.saturating_sub(vested),
        }
    }

    /// Books everything vested so far as withdrawn and returns the amount.
    pub fn withdraw(&mut self, now: i64, recipient: &mut VestingRecipient) -> LaunchpadResult<u64> {
        let amount = self.withdrawable(recipient, now);
        if amount == 0 {
            return Err(LaunchpadError::NothingToWithdraw);
        }
        let withdrawn = recipient
            .amount_withdrawn
            .checked_add(amount)
            .ok_or(LaunchpadError::MathOverflow)?;
        let pool_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(LaunchpadError::MathOverflow)?;

        recipient.amount_withdrawn = withdrawn;
        self.total_withdrawn = pool_withdrawn;
        Ok(amount)
    }

    /// Revokes an untouched entitlement and returns the revoked amount.
    pub fn refund(&mut self, recipient: &mut VestingRecipient) -> LaunchpadResult<u64> {
        if recipient.amount_withdrawn > 0 {
            return Err(LaunchpadError::AlreadyWithdrawn);
        }
        let amount = recipient.total_amount;
        if amount == 0 {
            return Err(LaunchpadError::NothingVesting);
        }
        let allocated = self
            .total_allocated
            .checked_sub(amount)
            .ok_or(LaunchpadError::MathOverflow)?;

        recipient.total_amount = 0;
        self.total_allocated = allocated;
        Ok(amount)
    }
}

/// Point-in-time view of one entitlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSnapshot {
    pub total: u64,
    pub vested: u64,
    pub withdrawn: u64,
    pub withdrawable: u64,
    pub locked: u64,
}

/// Per-beneficiary entitlement PDA.
#[account]
pub struct VestingRecipient {
    pub pool: Pubkey,
    pub wallet: Pubkey,
    pub total_amount: u64,
    pub amount_withdrawn: u64,
    pub bump: u8,
}

impl VestingRecipient {
    pub const SIZE: usize = 32 + 32 + 8 + 8 + 1;

    /// Binds a freshly created (zeroed) account to its pool and wallet.
    pub fn bind(&mut self, pool: Pubkey, wallet: Pubkey, bump: u8) {
        if self.wallet == Pubkey::default() {
            self.pool = pool;
            self.wallet = wallet;
            self.bump = bump;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_800_000_000;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn pool() -> VestingPool {
        VestingPool {
            operator: key(1),
            worker: Pubkey::default(),
            creditor: Pubkey::default(),
            reward_mint: key(2),
            reward_vault: key(3),
            terms: VestingTerms {
                initial_unlock: 1_000_000_000,
                release_interval: 60,
                release_rate: 1_000_000_000,
                lock_period: 60,
                vesting_period: 0,
            },
            start_time: 0,
            amount_to_be_vested: 10_000,
            total_allocated: 0,
            total_withdrawn: 0,
            bump: 254,
        }
    }

    fn recipient(n: u8) -> VestingRecipient {
        VestingRecipient {
            pool: key(9),
            wallet: key(n),
            total_amount: 0,
            amount_withdrawn: 0,
            bump: 253,
        }
    }

    #[test]
    fn params_validation() {
        let mut params = VestingParams {
            terms: pool().terms,
            amount_to_be_vested: 1,
        };
        assert!(params.validate().is_ok());

        params.terms.release_rate = 0;
        assert!(matches!(params.validate(), Err(LaunchpadError::InvalidReleaseRate)));
        params.terms.release_rate = 1;
        params.terms.release_interval = 0;
        assert!(matches!(params.validate(), Err(LaunchpadError::InvalidReleaseInterval)));
        params.terms.release_interval = 1;
        params.terms.initial_unlock = ACCURACY + 1;
        assert!(matches!(params.validate(), Err(LaunchpadError::InvalidFraction)));
        params.terms.initial_unlock = 0;
        params.amount_to_be_vested = 0;
        assert!(matches!(params.validate(), Err(LaunchpadError::InvalidAmount)));
    }

    #[test]
    fn credits_accumulate_within_pool() {
        let mut p = pool();
        let mut r = recipient(5);
        assert_eq!(p.credit(NOW, &mut r, 400).unwrap(), 400);
        assert_eq!(p.credit(NOW, &mut r, 600).unwrap(), 1_000);
        assert_eq!(p.total_allocated, 1_000);

        assert!(matches!(p.credit(NOW, &mut r, 0), Err(LaunchpadError::InvalidAmount)));
        assert!(matches!(
            p.credit(NOW, &mut r, 9_001),
            Err(LaunchpadError::ExceedsVestingPool)
        ));
        // rejected credits leave state untouched
        assert_eq!(r.total_amount, 1_000);
        assert_eq!(p.total_allocated, 1_000);
    }

    #[test]
    fn no_credit_after_start() {
        let mut p = pool();
        let mut r = recipient(5);
        p.set_start_time(NOW, NOW + 10).unwrap();
        p.credit(NOW + 9, &mut r, 1).unwrap();
        assert!(matches!(
            p.credit(NOW + 10, &mut r, 1),
            Err(LaunchpadError::VestingAlreadyStarted)
        ));
    }

    #[test]
    fn start_time_rules() {
        let mut p = pool();
        assert!(matches!(
            p.set_start_time(NOW, NOW),
            Err(LaunchpadError::InvalidTimestamp)
        ));
        p.set_start_time(NOW, NOW + 100).unwrap();
        // can still move it before it is reached
        p.set_start_time(NOW + 50, NOW + 200).unwrap();
        assert!(matches!(
            p.set_start_time(NOW + 200, NOW + 500),
            Err(LaunchpadError::VestingAlreadyStarted)
        ));
    }

    #[test]
    fn withdraw_follows_curve() {
        let mut p = pool();
        let mut r = recipient(5);
        p.credit(NOW, &mut r, 1_000).unwrap();
        p.set_start_time(NOW, NOW + 10).unwrap();
        let unlock = NOW + 10 + 60;

        assert!(matches!(
            p.withdraw(unlock - 1, &mut r),
            Err(LaunchpadError::NothingToWithdraw)
        ));
        assert_eq!(p.withdraw(unlock, &mut r).unwrap(), 100);
        assert!(matches!(
            p.withdraw(unlock + 59, &mut r),
            Err(LaunchpadError::NothingToWithdraw)
        ));
        assert_eq!(p.withdraw(unlock + 60 * 3, &mut r).unwrap(), 300);

        let q = p.quote(&r, unlock + 60 * 20);
        assert_eq!(q.vested, 1_000);
        assert_eq!(q.withdrawable, 600);
        assert_eq!(q.locked, 0);
        assert_eq!(p.withdraw(unlock + 60 * 20, &mut r).unwrap(), 600);
        assert_eq!(p.total_withdrawn, 1_000);
        assert_eq!(p.outstanding(), 0);
        assert!(r.amount_withdrawn <= p.vested(&r, unlock + 60 * 20));
    }

    #[test]
    fn refund_rules() {
        let mut p = pool();
        let mut r = recipient(5);
        assert!(matches!(p.refund(&mut r), Err(LaunchpadError::NothingVesting)));

        p.credit(NOW, &mut r, 500).unwrap();
        assert_eq!(p.refund(&mut r).unwrap(), 500);
        assert_eq!(r.total_amount, 0);
        assert_eq!(p.total_allocated, 0);

        let mut r2 = recipient(6);
        p.credit(NOW, &mut r2, 1_000).unwrap();
        p.set_start_time(NOW, NOW + 1).unwrap();
        p.withdraw(NOW + 61, &mut r2).unwrap();
        assert!(matches!(p.refund(&mut r2), Err(LaunchpadError::AlreadyWithdrawn)));
    }

    #[test]
    fn attach_is_one_shot_and_operator_only() {
        let mut p = pool();
        assert!(matches!(
            p.attach_sale(p.role(&key(7)), key(8)),
            Err(LaunchpadError::UnauthorizedOperator)
        ));
        p.attach_sale(p.role(&key(1)), key(8)).unwrap();
        assert_eq!(p.role(&key(8)), Role::Creditor);
        assert!(matches!(
            p.attach_sale(p.role(&key(1)), key(9)),
            Err(LaunchpadError::SaleAlreadyAttached)
        ));
    }
}
