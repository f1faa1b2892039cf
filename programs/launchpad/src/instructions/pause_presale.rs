use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::state::Sale;

/// Emergency stop. The elapsed part of the window is kept so `resume_presale`
/// can restore the remaining duration.
pub fn pause_presale(ctx: Context<PausePresale>) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    sale.role(&ctx.accounts.operator.key()).require_operator()?;

    let now = Clock::get()?.unix_timestamp;
    sale.pause(now)?;

    emit!(PresalePaused {
        sale: sale.key(),
        elapsed: sale.status.current_presale_period,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct PausePresale<'info> {
    #[account(
        mut,
        seeds = [SALE_SEED, sale.vesting_pool.as_ref()],
        bump = sale.bump
    )]
    pub sale: Box<Account<'info, Sale>>,

    pub operator: Signer<'info>,
}

#[event]
pub struct PresalePaused {
    pub sale: Pubkey,
    pub elapsed: i64,
    pub timestamp: i64,
}
