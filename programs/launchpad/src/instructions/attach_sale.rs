use anchor_lang::prelude::*;

use crate::constants::{SALE_SEED, VESTING_POOL_SEED};
use crate::error::LaunchpadError;
use crate::state::{Sale, VestingPool};

/// Second phase of setup: hands the pool's credit capability to the sale PDA.
pub fn attach_sale(ctx: Context<AttachSale>) -> Result<()> {
    let sale_key = ctx.accounts.sale.key();
    let pool = &mut ctx.accounts.vesting_pool;
    let role = pool.role(&ctx.accounts.operator.key());
    pool.attach_sale(role, sale_key)?;

    msg!("sale {} attached to vesting pool {}", sale_key, pool.key());
    emit!(SaleAttached {
        vesting_pool: pool.key(),
        sale: sale_key,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AttachSale<'info> {
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

    #[account(
        seeds = [SALE_SEED, vesting_pool.key().as_ref()],
        bump = sale.bump,
        has_one = vesting_pool @ LaunchpadError::VestingPoolMismatch,
    )]
    pub sale: Box<Account<'info, Sale>>,

    pub operator: Signer<'info>,
}

#[event]
pub struct SaleAttached {
    pub vesting_pool: Pubkey,
    pub sale: Pubkey,
}
