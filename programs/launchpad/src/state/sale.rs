use anchor_lang::prelude::*;

use crate::constants::{ACCURACY, DEFAULT_CLOSE_PERIOD};
use crate::error::{LaunchpadError, LaunchpadResult};
use crate::state::{AllocationRecord, Allowlist, Participants, VestingPool, VestingRecipient};
use crate::utils::access::Role;
use crate::utils::math;

/// What opens the public window besides the schedule.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PublicSaleGate {
    /// Public sale runs on `start_time` alone, even before `end_private_sale`.
    #[default]
    Schedule,
    /// Public sale additionally requires `end_private_sale`.
    PrivateSaleEnded,
}

/// Sale parameters, fixed at initialization except `start_time` and
/// `private_start_time`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaleConfig {
    /// Funds per reward unit, scaled by `ACCURACY`.
    pub rate: u64,
    /// Public sale start (Unix seconds). Shifted by manual start and resumes.
    pub start_time: i64,
    pub period: i64,
    /// Fraction of raised funds paid to the treasury.
    pub service_fee: u64,
    /// Reward units offered by the sale.
    pub initial_reward_pool: u64,
    pub list_time: i64,
    pub refund_period: i64,
    /// Length of the fill period closing the public sale.
    pub close_period: i64,
    /// 0 opens the private sale immediately.
    pub private_start_time: i64,
    pub public_gate: PublicSaleGate,
}

impl SaleConfig {
    pub const SIZE: usize = 8 * 9 + 1;

    /// A zero `close_period` falls back to one hour, capped at the sale period.
    pub fn with_defaults(mut self) -> Self {
        if self.close_period == 0 {
            self.close_period = DEFAULT_CLOSE_PERIOD.min(self.period);
        }
        self
    }

    pub fn validate(&self, now: i64) -> LaunchpadResult<()> {
        if self.rate == 0 {
            return Err(LaunchpadError::InvalidRate);
        }
        if self.period <= 0 {
            return Err(LaunchpadError::InvalidPeriod);
        }
        if self.start_time <= now {
            return Err(LaunchpadError::InvalidTimestamp);
        }
        if self.private_start_time != 0 && self.private_start_time <= now {
            return Err(LaunchpadError::InvalidTimestamp);
        }
        if self.service_fee > ACCURACY {
            return Err(LaunchpadError::InvalidFraction);
        }
        if self.initial_reward_pool == 0 {
            return Err(LaunchpadError::InvalidAmount);
        }
        if self.refund_period < 0
            || self.list_time < 0
            || self.close_period < 0
            || self.close_period > self.period
        {
            return Err(LaunchpadError::InvalidConfig);
        }
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaleStatus {
    pub private_sale_ended: bool,
    pub manually_started: bool,
    pub paused: bool,
    /// Elapsed public-sale time captured at pause.
    pub current_presale_period: i64,
    /// Total forward shift of `start_time` caused by pauses.
    pub accumulated_pause_offset: i64,
    pub unsold_withdrawn: bool,
    pub private_sold: u64,
    pub public_sold: u64,
    /// Funds held for the sale, net of redemptions.
    pub total_funds: u64,
    pub funds_withdrawn: u64,
}

impl SaleStatus {
    pub const SIZE: usize =
        1 + // private_sale_ended
        1 + // manually_started
        1 + // paused
        8 + // current_presale_period
        8 + // accumulated_pause_offset
        1 + // unsold_withdrawn
        8 + // private_sold
        8 + // public_sold
        8 + // total_funds
        8;  // funds_withdrawn
}

/// Sale state PDA. Owns the fund vault; credits the vesting pool through the
/// pool's creditor capability.
#[account]
pub struct Sale {
    pub operator: Pubkey,
    pub fund_mint: Pubkey,
    pub vesting_pool: Pubkey,
    pub fund_vault: Pubkey,
    pub config: SaleConfig,
    pub status: SaleStatus,
    pub bump: u8,
}

/// Outcome of `withdraw_funds`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FundsSplit {
    pub fee: u64,
    pub operator_share: u64,
}

/// A deposit as submitted by the beneficiary.
pub struct DepositRequest<'a> {
    pub beneficiary: Pubkey,
    pub record: &'a AllocationRecord,
    pub proof: &'a [[u8; 32]],
    pub amount: u64,
    pub is_private: bool,
}

/// Accounts a deposit or refund reads and books into.
pub struct SaleLedgers<'a> {
    pub pool: &'a mut VestingPool,
    pub sale_recipient: &'a mut SaleRecipient,
    pub vesting_recipient: &'a mut VestingRecipient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositReceipt {
    pub reward: u64,
    pub vesting_total: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedeemReceipt {
    pub funds: u64,
    pub revoked_reward: u64,
}

impl Sale {
    pub const SIZE: usize =
        32 + // operator
        32 + // fund_mint
        32 + // vesting_pool
        32 + // fund_vault
        SaleConfig::SIZE +
        SaleStatus::SIZE +
        1;   // bump

    pub fn role(&self, signer: &Pubkey) -> Role {
        Role::resolve(signer, &self.operator, &Pubkey::default(), &Pubkey::default())
    }

    pub fn end_time(&self) -> i64 {
        self.config.start_time.saturating_add(self.config.period)
    }

    fn public_gate_open(&self) -> bool {
        match self.config.public_gate {
            PublicSaleGate::Schedule => true,
            PublicSaleGate::PrivateSaleEnded => self.status.private_sale_ended,
        }
    }

    pub fn is_going(&self, now: i64) -> bool {
        self.public_gate_open()
            && (self.status.manually_started || now >= self.config.start_time)
            && now < self.end_time()
            && !self.status.paused
    }

    /// Public window opened at some point (running, paused or over).
    pub fn public_sale_started(&self, now: i64) -> bool {
        self.public_gate_open() && (self.status.manually_started || now >= self.config.start_time)
    }

    pub fn has_ended(&self, now: i64) -> bool {
        !self.status.paused && now >= self.end_time()
    }

    pub fn in_fill_period(&self, now: i64) -> bool {
        now >= self.end_time().saturating_sub(self.config.close_period)
    }

    pub fn require_ended(&self, now: i64) -> LaunchpadResult<()> {
        if !self.has_ended(now) {
            return Err(LaunchpadError::PresaleNotEnded);
        }
        Ok(())
    }

    pub fn total_sold(&self) -> LaunchpadResult<u64> {
        self.status
            .private_sold
            .checked_add(self.status.public_sold)
            .ok_or(LaunchpadError::MathOverflow)
    }

    fn require_reserve(&self, reserve: u64) -> LaunchpadResult<()> {
        if reserve < self.config.initial_reward_pool {
            return Err(LaunchpadError::InsufficientRewardReserve);
        }
        Ok(())
    }

    // ----- phase transitions -----

    pub fn set_private_sale_start_time(&mut self, now: i64, start_time: i64) -> LaunchpadResult<()> {
        let current = self.config.private_start_time;
        if current != 0 && now >= current {
            return Err(LaunchpadError::PrivateSaleAlreadyStarted);
        }
        if start_time <= now {
            return Err(LaunchpadError::InvalidTimestamp);
        }
        self.config.private_start_time = start_time;
        Ok(())
    }

    pub fn end_private_sale(&mut self) {
        self.status.private_sale_ended = true;
    }

    /// Moves the public start. Pause offsets are kept.
    pub fn set_start_time(&mut self, now: i64, start_time: i64) -> LaunchpadResult<()> {
        if start_time <= now {
            return Err(LaunchpadError::InvalidTimestamp);
        }
        // private-phase timing is not gated here
        if self.status.private_sale_ended && self.public_sale_started(now) {
            return Err(LaunchpadError::PresaleAlreadyStarted);
        }
        self.config.start_time = start_time;
        Ok(())
    }

    /// Manual start; rewinds `start_time` to `now` when started early.
    pub fn start_presale(&mut self, now: i64, reserve: u64) -> LaunchpadResult<()> {
        if !self.status.private_sale_ended {
            return Err(LaunchpadError::PrivateSaleNotEnded);
        }
        self.require_reserve(reserve)?;
        if self.status.manually_started || self.status.paused || self.is_going(now) {
            return Err(LaunchpadError::PresaleAlreadyStarted);
        }
        if now < self.config.start_time {
            self.config.start_time = now;
        }
        self.status.manually_started = true;
        Ok(())
    }

    pub fn pause(&mut self, now: i64) -> LaunchpadResult<()> {
        if !self.is_going(now) {
            return Err(LaunchpadError::PresaleNotInProgress);
        }
        self.status.current_presale_period = now.saturating_sub(self.config.start_time);
        self.status.paused = true;
        Ok(())
    }

    /// Shifts the window forward by the paused duration; returns the new start.
    pub fn resume(&mut self, now: i64) -> LaunchpadResult<i64> {
        if !self.status.paused {
            return Err(LaunchpadError::PresaleNotPaused);
        }
        let new_start = now
            .checked_sub(self.status.current_presale_period)
            .ok_or(LaunchpadError::MathOverflow)?;
        let shift = new_start
            .checked_sub(self.config.start_time)
            .ok_or(LaunchpadError::MathOverflow)?;
        let offset = self
            .status
            .accumulated_pause_offset
            .checked_add(shift)
            .ok_or(LaunchpadError::MathOverflow)?;

        self.config.start_time = new_start;
        self.status.accumulated_pause_offset = offset;
        self.status.paused = false;
        Ok(new_start)
    }

    // ----- deposits -----

    /// Reward bought by `amount` at the sale rate. The booked reward must fit
    /// a u64: 1e18 funds at rate 450_000_000 is ~2.22e19 reward units and
    /// fails with `MathOverflow`.
    fn reward_for(&self, amount: u64) -> LaunchpadResult<u64> {
        if amount == 0 {
            return Err(LaunchpadError::InvalidAmount);
        }
        let reward = math::to_u64(math::funds_to_reward(amount, self.config.rate)?)?;
        if reward == 0 {
            return Err(LaunchpadError::InvalidAmount);
        }
        let sold = self
            .total_sold()?
            .checked_add(reward)
            .ok_or(LaunchpadError::MathOverflow)?;
        if sold > self.config.initial_reward_pool {
            return Err(LaunchpadError::RewardPoolExhausted);
        }
        Ok(reward)
    }

    /// Validates a private-sale deposit; returns the reward it buys.
    /// `record` must already be admitted by the allowlist.
    pub fn quote_private_deposit(
        &self,
        now: i64,
        recipient: &SaleRecipient,
        record: &AllocationRecord,
        amount: u64,
        reserve: u64,
    ) -> LaunchpadResult<u64> {
        if self.status.private_sale_ended {
            return Err(LaunchpadError::PrivateSaleEnded);
        }
        let opens_at = self.config.private_start_time;
        if opens_at != 0 && now < opens_at {
            return Err(LaunchpadError::PrivateSaleNotStarted);
        }
        self.require_reserve(reserve)?;
        if !record.allowed_private_sale {
            return Err(LaunchpadError::PrivateSaleNotAllowed);
        }
        let contributed = recipient
            .private_contribution
            .checked_add(amount)
            .ok_or(LaunchpadError::MathOverflow)?;
        if contributed > record.private_max_alloc {
            return Err(LaunchpadError::PrivateCapExceeded);
        }
        self.reward_for(amount)
    }

    /// Validates a public-sale deposit; returns the reward it buys.
    /// `record` must already be admitted by the allowlist.
    pub fn quote_public_deposit(
        &self,
        now: i64,
        recipient: &SaleRecipient,
        record: &AllocationRecord,
        amount: u64,
        reserve: u64,
    ) -> LaunchpadResult<u64> {
        if !self.is_going(now) {
            return Err(LaunchpadError::PresaleNotInProgress);
        }
        self.require_reserve(reserve)?;
        // private participants with allocation left wait for the fill period
        if record.allowed_private_sale
            && recipient.private_contribution < record.private_max_alloc
            && !self.in_fill_period(now)
        {
            return Err(LaunchpadError::NotInFillPeriod);
        }
        let public_funds = recipient
            .public_contribution()
            .checked_add(amount)
            .ok_or(LaunchpadError::MathOverflow)?;
        let rate = self.config.rate;
        if math::funds_to_reward(public_funds, rate)? > math::funds_to_reward(record.public_max_alloc, rate)? {
            return Err(LaunchpadError::PublicCapExceeded);
        }
        self.reward_for(amount)
    }

    /// Whole deposit: allowlist admission, creditor check, phase quote,
    /// vesting credit, sale booking and participant listing. Token movement
    /// is left to the caller.
    #[allow(clippy::too_many_arguments)]
    pub fn accept_deposit(
        &mut self,
        sale_key: &Pubkey,
        now: i64,
        reserve: u64,
        request: &DepositRequest<'_>,
        allowlist: &Allowlist,
        participants: &mut Participants,
        ledgers: SaleLedgers<'_>,
    ) -> LaunchpadResult<DepositReceipt> {
        let SaleLedgers {
            pool,
            sale_recipient,
            vesting_recipient,
        } = ledgers;
        let DepositRequest {
            beneficiary,
            record,
            proof,
            amount,
            is_private,
        } = *request;

        allowlist.admit(&beneficiary, record, proof)?;
        pool.role(sale_key).require_creditor()?;

        let reward = if is_private {
            self.quote_private_deposit(now, sale_recipient, record, amount, reserve)?
        } else {
            self.quote_public_deposit(now, sale_recipient, record, amount, reserve)?
        };
        let vesting_total = pool.credit(now, vesting_recipient, reward)?;
        self.record_deposit(sale_recipient, amount, reward, is_private)?;
        participants.push_unique(beneficiary);

        Ok(DepositReceipt {
            reward,
            vesting_total,
        })
    }

    /// Books a quoted deposit on the recipient and the sale accumulators.
    pub fn record_deposit(
        &mut self,
        recipient: &mut SaleRecipient,
        amount: u64,
        reward: u64,
        is_private: bool,
    ) -> LaunchpadResult<()> {
        let fund_balance = recipient
            .fund_balance
            .checked_add(amount)
            .ok_or(LaunchpadError::MathOverflow)?;
        let reward_balance = recipient
            .reward_balance
            .checked_add(reward)
            .ok_or(LaunchpadError::MathOverflow)?;
        let total_funds = self
            .status
            .total_funds
            .checked_add(amount)
            .ok_or(LaunchpadError::MathOverflow)?;
        let (private_contribution, private_sold, public_sold) = if is_private {
            (
                recipient
                    .private_contribution
                    .checked_add(amount)
                    .ok_or(LaunchpadError::MathOverflow)?,
                self.status
                    .private_sold
                    .checked_add(reward)
                    .ok_or(LaunchpadError::MathOverflow)?,
                self.status.public_sold,
            )
        } else {
            (
                recipient.private_contribution,
                self.status.private_sold,
                self.status
                    .public_sold
                    .checked_add(reward)
                    .ok_or(LaunchpadError::MathOverflow)?,
            )
        };

        recipient.fund_balance = fund_balance;
        recipient.reward_balance = reward_balance;
        recipient.private_contribution = private_contribution;
        self.status.total_funds = total_funds;
        self.status.private_sold = private_sold;
        self.status.public_sold = public_sold;
        Ok(())
    }

    // ----- settlement -----

    /// Marks unsold reward units withdrawn and returns how many there are. One-shot.
    pub fn withdraw_unsold(&mut self, now: i64) -> LaunchpadResult<u64> {
        self.require_ended(now)?;
        if self.status.unsold_withdrawn {
            return Err(LaunchpadError::UnsoldAlreadyWithdrawn);
        }
        let unsold = self
            .config
            .initial_reward_pool
            .checked_sub(self.total_sold()?)
            .ok_or(LaunchpadError::MathOverflow)?;
        self.status.unsold_withdrawn = true;
        Ok(unsold)
    }

    /// Books every fund not yet withdrawn and splits it between treasury fee
    /// and operator.
    pub fn withdraw_funds(&mut self, now: i64, treasury: &Pubkey) -> LaunchpadResult<FundsSplit> {
        self.require_ended(now)?;
        if *treasury == Pubkey::default() {
            return Err(LaunchpadError::InvalidTreasury);
        }
        let available = self
            .status
            .total_funds
            .checked_sub(self.status.funds_withdrawn)
            .ok_or(LaunchpadError::MathOverflow)?;
        let (fee, operator_share) = math::split_service_fee(available, self.config.service_fee)?;
        self.status.funds_withdrawn = self.status.total_funds;
        Ok(FundsSplit { fee, operator_share })
    }

    /// Earliest vesting start the sale allows, i.e. `now + 1`.
    pub fn vesting_start(&self, now: i64) -> LaunchpadResult<i64> {
        self.require_ended(now)?;
        if !self.status.unsold_withdrawn {
            return Err(LaunchpadError::UnsoldNotWithdrawn);
        }
        now.checked_add(1).ok_or(LaunchpadError::MathOverflow)
    }

    /// Checks the refund window; returns the funds owed back.
    pub fn quote_redeem(&self, now: i64, recipient: &SaleRecipient) -> LaunchpadResult<u64> {
        self.require_ended(now)?;
        if now < self.config.list_time {
            return Err(LaunchpadError::NotListedYet);
        }
        if now >= self.config.list_time.saturating_add(self.config.refund_period) {
            return Err(LaunchpadError::RefundPeriodEnded);
        }
        if recipient.redeemed {
            return Err(LaunchpadError::AlreadyRedeemed);
        }
        Ok(recipient.fund_balance)
    }

    /// Whole refund: window check, entitlement revocation and fund booking.
    /// `vault_balance` is what the fund vault holds before the payout.
    pub fn redeem(
        &mut self,
        sale_key: &Pubkey,
        now: i64,
        vault_balance: u64,
        ledgers: SaleLedgers<'_>,
    ) -> LaunchpadResult<RedeemReceipt> {
        let SaleLedgers {
            pool,
            sale_recipient,
            vesting_recipient,
        } = ledgers;

        let funds = self.quote_redeem(now, sale_recipient)?;
        pool.role(sale_key).require_creditor()?;
        if vault_balance < funds {
            return Err(LaunchpadError::InsufficientVaultBalance);
        }
        let revoked_reward = pool.refund(vesting_recipient)?;
        self.record_redeem(sale_recipient)?;

        Ok(RedeemReceipt {
            funds,
            revoked_reward,
        })
    }

    pub fn record_redeem(&mut self, recipient: &mut SaleRecipient) -> LaunchpadResult<()> {
        let total_funds = self
            .status
            .total_funds
            .checked_sub(recipient.fund_balance)
            .ok_or(LaunchpadError::MathOverflow)?;
        self.status.total_funds = total_funds;
        recipient.redeemed = true;
        Ok(())
    }
}

/// Per-beneficiary sale record PDA. Created on first deposit, never closed.
#[account]
pub struct SaleRecipient {
    pub sale: Pubkey,
    pub wallet: Pubkey,
    /// Funds contributed across both phases.
    pub fund_balance: u64,
    /// Reward units bought across both phases.
    pub reward_balance: u64,
    /// Funds contributed during the private phase.
    pub private_contribution: u64,
    pub redeemed: bool,
    pub bump: u8,
}

impl SaleRecipient {
    pub const SIZE: usize = 32 + 32 + 8 + 8 + 8 + 1 + 1;

    pub fn public_contribution(&self) -> u64 {
        self.fund_balance.saturating_sub(self.private_contribution)
    }

    /// Binds a freshly created (zeroed) account to its sale and wallet.
    pub fn bind(&mut self, sale: Pubkey, wallet: Pubkey, bump: u8) {
        if self.wallet == Pubkey::default() {
            self.sale = sale;
            self.wallet = wallet;
            self.bump = bump;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_800_000_000;
    const START: i64 = NOW + 86_400;
    const PERIOD: i64 = 86_400 * 7;
    const RATE: u64 = 450_000_000;
    const POOL: u64 = 1_000_000_000_000;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn config() -> SaleConfig {
        SaleConfig {
            rate: RATE,
            start_time: START,
            period: PERIOD,
            service_fee: 500_000_000,
            initial_reward_pool: POOL,
            list_time: START + PERIOD + 86_400,
            refund_period: 86_400,
            close_period: 3_600,
            private_start_time: 0,
            public_gate: PublicSaleGate::Schedule,
        }
    }

    fn sale() -> Sale {
        Sale {
            operator: key(1),
            fund_mint: key(2),
            vesting_pool: key(3),
            fund_vault: key(4),
            config: config(),
            status: SaleStatus::default(),
            bump: 255,
        }
    }

    fn recipient(n: u8) -> SaleRecipient {
        SaleRecipient {
            sale: key(10),
            wallet: key(n),
            fund_balance: 0,
            reward_balance: 0,
            private_contribution: 0,
            redeemed: false,
            bump: 254,
        }
    }

    fn record(n: u8, private_max: u64, public_max: u64) -> AllocationRecord {
        AllocationRecord {
            wallet: key(n),
            kyc_passed: true,
            public_max_alloc: public_max,
            allowed_private_sale: private_max > 0,
            private_max_alloc: private_max,
        }
    }

    #[test]
    fn config_validation() {
        assert!(config().validate(NOW).is_ok());

        let mut c = config();
        c.rate = 0;
        assert!(matches!(c.validate(NOW), Err(LaunchpadError::InvalidRate)));
        let mut c = config();
        c.period = 0;
        assert!(matches!(c.validate(NOW), Err(LaunchpadError::InvalidPeriod)));
        let mut c = config();
        c.start_time = NOW;
        assert!(matches!(c.validate(NOW), Err(LaunchpadError::InvalidTimestamp)));
        let mut c = config();
        c.close_period = PERIOD + 1;
        assert!(matches!(c.validate(NOW), Err(LaunchpadError::InvalidConfig)));
        let mut c = config();
        c.service_fee = ACCURACY + 1;
        assert!(matches!(c.validate(NOW), Err(LaunchpadError::InvalidFraction)));
    }

    #[test]
    fn close_period_default() {
        let mut c = config();
        c.close_period = 0;
        assert_eq!(c.with_defaults().close_period, DEFAULT_CLOSE_PERIOD);
        c.period = 600;
        assert_eq!(c.with_defaults().close_period, 600);
        c.close_period = 10;
        assert_eq!(c.with_defaults().close_period, 10);
    }

    #[test]
    fn going_window_boundaries() {
        let s = sale();
        assert!(!s.is_going(START - 1));
        assert!(s.is_going(START));
        assert!(s.is_going(START + PERIOD - 1));
        assert!(!s.is_going(START + PERIOD));
        assert!(!s.has_ended(START + PERIOD - 1));
        assert!(s.has_ended(START + PERIOD));
    }

    #[test]
    fn private_sale_gate_variant() {
        let mut s = sale();
        s.config.public_gate = PublicSaleGate::PrivateSaleEnded;
        assert!(!s.is_going(START));
        s.end_private_sale();
        assert!(s.is_going(START));
        // calling again is harmless
        s.end_private_sale();
        assert!(s.status.private_sale_ended);
    }

    #[test]
    fn set_start_time_rules() {
        let mut s = sale();
        assert!(matches!(
            s.set_start_time(NOW, NOW),
            Err(LaunchpadError::InvalidTimestamp)
        ));
        s.set_start_time(NOW, START + 100).unwrap();
        assert_eq!(s.config.start_time, START + 100);

        // still in the private phase: the public start can move
        s.set_start_time(START + 100, START + 500).unwrap();
        s.end_private_sale();
        assert!(matches!(
            s.set_start_time(START + 500, START + 900),
            Err(LaunchpadError::PresaleAlreadyStarted)
        ));
        s.set_start_time(START + 499, START + 900).unwrap();

        let mut s = sale();
        s.config.public_gate = PublicSaleGate::PrivateSaleEnded;
        s.end_private_sale();
        s.start_presale(NOW, POOL).unwrap();
        assert!(matches!(
            s.set_start_time(NOW + 1, START),
            Err(LaunchpadError::PresaleAlreadyStarted)
        ));
    }

    #[test]
    fn manual_start_rewinds_start_time() {
        let mut s = sale();
        assert!(matches!(
            s.start_presale(NOW, POOL),
            Err(LaunchpadError::PrivateSaleNotEnded)
        ));
        s.end_private_sale();
        assert!(matches!(
            s.start_presale(NOW, POOL - 1),
            Err(LaunchpadError::InsufficientRewardReserve)
        ));
        s.start_presale(NOW + 5, POOL).unwrap();
        assert_eq!(s.config.start_time, NOW + 5);
        assert!(s.is_going(NOW + 5));
        assert_eq!(s.end_time(), NOW + 5 + PERIOD);
        assert!(matches!(
            s.start_presale(NOW + 6, POOL),
            Err(LaunchpadError::PresaleAlreadyStarted)
        ));
    }

    #[test]
    fn pause_preserves_remaining_duration() {
        let mut s = sale();
        assert!(matches!(s.pause(START - 1), Err(LaunchpadError::PresaleNotInProgress)));
        assert!(matches!(s.resume(START), Err(LaunchpadError::PresaleNotPaused)));

        let elapsed = 1_000;
        s.pause(START + elapsed).unwrap();
        assert!(s.status.paused);
        assert!(!s.is_going(START + elapsed + 1));
        // not ended while paused, even past the scheduled end
        assert!(!s.has_ended(START + PERIOD + 10));

        let resumed_at = START + PERIOD + 10;
        let new_start = s.resume(resumed_at).unwrap();
        assert_eq!(new_start, resumed_at - elapsed);
        assert_eq!(s.end_time(), resumed_at + (PERIOD - elapsed));
        assert_eq!(s.status.accumulated_pause_offset, PERIOD + 10 - elapsed);
        assert!(s.is_going(resumed_at));

        // second pause accumulates
        s.pause(resumed_at + 100).unwrap();
        s.resume(resumed_at + 400).unwrap();
        assert_eq!(s.status.accumulated_pause_offset, PERIOD + 10 - elapsed + 300);
        assert_eq!(s.end_time(), resumed_at + 400 + (PERIOD - elapsed - 100));
    }

    #[test]
    fn private_deposit_rules() {
        let mut s = sale();
        s.config.private_start_time = NOW + 10;
        let r = recipient(5);
        let rec = record(5, 1_000_000, 1_000_000);

        assert!(matches!(
            s.quote_private_deposit(NOW, &r, &rec, 10, POOL),
            Err(LaunchpadError::PrivateSaleNotStarted)
        ));
        assert!(matches!(
            s.quote_private_deposit(NOW + 10, &r, &rec, 10, POOL - 1),
            Err(LaunchpadError::InsufficientRewardReserve)
        ));
        assert!(matches!(
            s.quote_private_deposit(NOW + 10, &r, &rec, 1_000_001, POOL),
            Err(LaunchpadError::PrivateCapExceeded)
        ));
        let reward = s.quote_private_deposit(NOW + 10, &r, &rec, 1_000_000, POOL).unwrap();
        assert_eq!(reward, 1_000_000 * ACCURACY / RATE);

        let no_private = record(5, 0, 1_000_000);
        assert!(matches!(
            s.quote_private_deposit(NOW + 10, &r, &no_private, 1, POOL),
            Err(LaunchpadError::PrivateSaleNotAllowed)
        ));

        s.end_private_sale();
        assert!(matches!(
            s.quote_private_deposit(NOW + 10, &r, &rec, 10, POOL),
            Err(LaunchpadError::PrivateSaleEnded)
        ));
    }

    #[test]
    fn deposits_accumulate() {
        let mut s = sale();
        let mut r = recipient(5);
        let rec = record(5, 1_000_000, 2_000_000);

        let reward1 = s.quote_private_deposit(NOW, &r, &rec, 500_000, POOL).unwrap();
        s.record_deposit(&mut r, 500_000, reward1, true).unwrap();
        let reward2 = s.quote_private_deposit(NOW, &r, &rec, 250_000, POOL).unwrap();
        s.record_deposit(&mut r, 250_000, reward2, true).unwrap();

        assert_eq!(r.fund_balance, 750_000);
        assert_eq!(r.private_contribution, 750_000);
        assert_eq!(r.reward_balance, reward1 + reward2);
        assert_eq!(s.status.private_sold, reward1 + reward2);
        assert_eq!(s.status.total_funds, 750_000);

        // remaining private allocation: must wait for the fill period
        assert!(matches!(
            s.quote_public_deposit(START, &r, &rec, 100, POOL),
            Err(LaunchpadError::NotInFillPeriod)
        ));
        let fill = START + PERIOD - 3_600;
        assert!(matches!(
            s.quote_public_deposit(fill - 1, &r, &rec, 100, POOL),
            Err(LaunchpadError::NotInFillPeriod)
        ));
        let reward3 = s.quote_public_deposit(fill, &r, &rec, 2_000_000, POOL).unwrap();
        s.record_deposit(&mut r, 2_000_000, reward3, false).unwrap();
        assert_eq!(r.public_contribution(), 2_000_000);
        assert_eq!(s.status.public_sold, reward3);
        assert!(matches!(
            s.quote_public_deposit(fill, &r, &rec, 1, POOL),
            Err(LaunchpadError::PublicCapExceeded)
        ));
    }

    #[test]
    fn public_deposit_rules() {
        let mut s = sale();
        let r = recipient(6);
        let rec = record(6, 0, 1_000_000);

        assert!(matches!(
            s.quote_public_deposit(START - 1, &r, &rec, 1, POOL),
            Err(LaunchpadError::PresaleNotInProgress)
        ));
        assert!(matches!(
            s.quote_public_deposit(START, &r, &rec, 1_000_001, POOL),
            Err(LaunchpadError::PublicCapExceeded)
        ));
        assert!(s.quote_public_deposit(START, &r, &rec, 1_000_000, POOL).is_ok());
        assert!(matches!(
            s.quote_public_deposit(START, &r, &rec, 0, POOL),
            Err(LaunchpadError::InvalidAmount)
        ));

        // exhausted private allocation: no fill-period wait
        let mut r2 = recipient(7);
        let rec2 = record(7, 100, 1_000);
        r2.fund_balance = 100;
        r2.private_contribution = 100;
        assert!(s.quote_public_deposit(START, &r2, &rec2, 1_000, POOL).is_ok());

        s.pause(START + 1).unwrap();
        assert!(matches!(
            s.quote_public_deposit(START + 2, &r, &rec, 1, POOL),
            Err(LaunchpadError::PresaleNotInProgress)
        ));
    }

    #[test]
    fn fill_period_only_gates_private_buyers() {
        let s = sale();
        let r = recipient(8);
        // private allocation on record, but no private access
        let rec = AllocationRecord {
            allowed_private_sale: false,
            ..record(8, 500, 1_000)
        };
        assert!(!s.in_fill_period(START));
        assert!(s.quote_public_deposit(START, &r, &rec, 100, POOL).is_ok());

        let gated = record(8, 500, 1_000);
        assert!(matches!(
            s.quote_public_deposit(START, &r, &gated, 100, POOL),
            Err(LaunchpadError::NotInFillPeriod)
        ));
    }

    #[test]
    fn reward_must_fit_u64() {
        let mut s = sale();
        s.config.initial_reward_pool = u64::MAX;
        // 1e18 * 1e10 / 4.5e8 ~ 2.22e19
        assert!(matches!(
            s.reward_for(1_000_000_000_000_000_000),
            Err(LaunchpadError::MathOverflow)
        ));
        assert!(s.reward_for(1_000_000_000_000_000).is_ok());
    }

    #[test]
    fn pool_cap_holds() {
        let mut s = sale();
        s.config.initial_reward_pool = 100;
        s.config.rate = ACCURACY; // 1 fund == 1 reward
        let mut r = recipient(5);
        let rec = record(5, 0, 1_000);

        let reward = s.quote_public_deposit(START, &r, &rec, 80, 100).unwrap();
        s.record_deposit(&mut r, 80, reward, false).unwrap();
        assert!(matches!(
            s.quote_public_deposit(START, &r, &rec, 21, 100),
            Err(LaunchpadError::RewardPoolExhausted)
        ));
        let reward = s.quote_public_deposit(START, &r, &rec, 20, 100).unwrap();
        s.record_deposit(&mut r, 20, reward, false).unwrap();
        assert_eq!(s.total_sold().unwrap(), 100);
    }

    #[test]
    fn unsold_withdrawal_is_one_shot() {
        let mut s = sale();
        s.status.private_sold = 300;
        s.status.public_sold = 200;
        assert!(matches!(
            s.withdraw_unsold(START + PERIOD - 1),
            Err(LaunchpadError::PresaleNotEnded)
        ));
        assert_eq!(s.withdraw_unsold(START + PERIOD).unwrap(), POOL - 500);
        assert!(s.status.unsold_withdrawn);
        assert!(matches!(
            s.withdraw_unsold(START + PERIOD + 1),
            Err(LaunchpadError::UnsoldAlreadyWithdrawn)
        ));
    }

    #[test]
    fn funds_split_with_fee() {
        let mut s = sale();
        s.status.total_funds = 1_000_000;
        let end = START + PERIOD;
        assert!(matches!(
            s.withdraw_funds(end, &Pubkey::default()),
            Err(LaunchpadError::InvalidTreasury)
        ));
        let split = s.withdraw_funds(end, &key(77)).unwrap();
        assert_eq!(split, FundsSplit { fee: 50_000, operator_share: 950_000 });
        // nothing left to split a second time
        let again = s.withdraw_funds(end, &key(77)).unwrap();
        assert_eq!(again, FundsSplit { fee: 0, operator_share: 0 });
    }

    #[test]
    fn vesting_start_requires_unsold_withdrawal() {
        let mut s = sale();
        let end = START + PERIOD;
        assert!(matches!(s.vesting_start(end - 1), Err(LaunchpadError::PresaleNotEnded)));
        assert!(matches!(s.vesting_start(end), Err(LaunchpadError::UnsoldNotWithdrawn)));
        s.withdraw_unsold(end).unwrap();
        assert_eq!(s.vesting_start(end).unwrap(), end + 1);
    }

    #[test]
    fn redeem_window() {
        let mut s = sale();
        let mut r = recipient(5);
        r.fund_balance = 1_000;
        s.status.total_funds = 1_000;
        let list = s.config.list_time;
        let refund_end = list + s.config.refund_period;

        assert!(matches!(
            s.quote_redeem(START + 1, &r),
            Err(LaunchpadError::PresaleNotEnded)
        ));
        assert!(matches!(
            s.quote_redeem(START + PERIOD + 1, &r),
            Err(LaunchpadError::NotListedYet)
        ));
        assert!(matches!(
            s.quote_redeem(refund_end, &r),
            Err(LaunchpadError::RefundPeriodEnded)
        ));
        assert_eq!(s.quote_redeem(list, &r).unwrap(), 1_000);
        s.record_redeem(&mut r).unwrap();
        assert_eq!(s.status.total_funds, 0);
        assert!(matches!(
            s.quote_redeem(list + 1, &r),
            Err(LaunchpadError::AlreadyRedeemed)
        ));
    }

    #[test]
    fn private_start_time_rules() {
        let mut s = sale();
        assert!(matches!(
            s.set_private_sale_start_time(NOW, NOW),
            Err(LaunchpadError::InvalidTimestamp)
        ));
        s.set_private_sale_start_time(NOW, NOW + 100).unwrap();
        assert!(matches!(
            s.set_private_sale_start_time(NOW + 100, NOW + 500),
            Err(LaunchpadError::PrivateSaleAlreadyStarted)
        ));
    }
}
