use anchor_lang::prelude::*;

use crate::constants::VESTING_POOL_SEED;
use crate::instructions::VestingStarted;
use crate::state::VestingPool;

pub fn set_vesting_start_time(ctx: Context<SetVestingStartTime>, start_time: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.vesting_pool;
    pool.role(&ctx.accounts.operator.key()).require_operator()?;
    pool.set_start_time(now, start_time)?;

    emit!(VestingStarted {
        vesting_pool: pool.key(),
        sale: pool.creditor,
        start_time,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetVestingStartTime<'info> {
    #[account(
        mut,
        seeds = [
            VESTING_POOL_SEED,
            vesting_pool.reward_mint.as_ref(),
            vesting_pool.operator.as_ref()
        ],
        bump = vesting_pool.bump
    )]
    pub vesting_pool: Account<'info, VestingPool>,

    pub operator: Signer<'info>,
}
