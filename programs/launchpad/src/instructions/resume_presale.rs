use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::state::Sale;

pub fn resume_presale(ctx: Context<ResumePresale>) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    sale.role(&ctx.accounts.operator.key()).require_operator()?;

    let now = Clock::get()?.unix_timestamp;
    let start_time = sale.resume(now)?;

    emit!(PresaleResumed {
        sale: sale.key(),
        start_time,
        end_time: sale.end_time(),
        accumulated_pause_offset: sale.status.accumulated_pause_offset,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ResumePresale<'info> {
    #[account(
        mut,
        seeds = [SALE_SEED, sale.vesting_pool.as_ref()],
        bump = sale.bump
    )]
    pub sale: Box<Account<'info, Sale>>,

    pub operator: Signer<'info>,
}

#[event]
pub struct PresaleResumed {
    pub sale: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub accumulated_pause_offset: i64,
}
