use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::state::Sale;

/// Moves the public sale start. Pause bookkeeping is left as is.
pub fn set_start_time(ctx: Context<SetStartTime>, start_time: i64) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    sale.role(&ctx.accounts.operator.key()).require_operator()?;

    let now = Clock::get()?.unix_timestamp;
    sale.set_start_time(now, start_time)?;

    emit!(PresaleScheduled {
        sale: sale.key(),
        start_time,
        end_time: sale.end_time(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetStartTime<'info> {
    #[account(
        mut,
        seeds = [SALE_SEED, sale.vesting_pool.as_ref()],
        bump = sale.bump
    )]
    pub sale: Box<Account<'info, Sale>>,

    pub operator: Signer<'info>,
}

#[event]
pub struct PresaleScheduled {
    pub sale: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
}
