use anchor_lang::prelude::*;

use crate::constants::{SALE_SEED, VESTING_POOL_SEED};
use crate::error::LaunchpadError;
use crate::state::{Sale, VestingPool};

pub fn start_vesting(ctx: Context<StartVesting>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sale_key = ctx.accounts.sale.key();
    let accounts = &mut *ctx.accounts;
    accounts.sale.role(&accounts.operator.key()).require_operator()?;

    let start_time = activate_vesting(&accounts.sale, sale_key, &mut accounts.vesting_pool, now)?;

    msg!("vesting starts at {}", start_time);
    emit!(VestingStarted {
        vesting_pool: accounts.vesting_pool.key(),
        sale: sale_key,
        start_time,
    });
    Ok(())
}

/// The sale, as the pool's creditor, schedules vesting right after `now`.
pub(crate) fn activate_vesting(
    sale: &Sale,
    sale_key: Pubkey,
    pool: &mut VestingPool,
    now: i64,
) -> Result<i64> {
    pool.role(&sale_key).require_creditor()?;
    let start_time = sale.vesting_start(now)?;
    pool.set_start_time(now, start_time)?;
    Ok(start_time)
}

#[derive(Accounts)]
pub struct StartVesting<'info> {
    #[account(
        seeds = [SALE_SEED, vesting_pool.key().as_ref()],
        bump = sale.bump,
        has_one = vesting_pool @ LaunchpadError::VestingPoolMismatch,
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(
        mut,
        seeds = [
            VESTING_POOL_SEED,
            vesting_pool.reward_mint.as_ref(),
            vesting_pool.operator.as_ref()
        ],
        bump = vesting_pool.bump
    )]
    pub vesting_pool: Box<Account<'info, VestingPool>>,

    pub operator: Signer<'info>,
}

#[event]
pub struct VestingStarted {
    pub vesting_pool: Pubkey,
    pub sale: Pubkey,
    pub start_time: i64,
}
