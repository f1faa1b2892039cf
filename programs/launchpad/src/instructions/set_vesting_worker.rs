use anchor_lang::prelude::*;

use crate::constants::VESTING_POOL_SEED;
use crate::state::VestingPool;

/// The null key removes the worker.
pub fn set_vesting_worker(ctx: Context<SetVestingWorker>, worker: Pubkey) -> Result<()> {
    let pool = &mut ctx.accounts.vesting_pool;
    let role = pool.role(&ctx.accounts.operator.key());
    pool.set_worker(role, worker)?;

    emit!(VestingWorkerSet {
        vesting_pool: pool.key(),
        worker,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetVestingWorker<'info> {
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

#[event]
pub struct VestingWorkerSet {
    pub vesting_pool: Pubkey,
    pub worker: Pubkey,
}
