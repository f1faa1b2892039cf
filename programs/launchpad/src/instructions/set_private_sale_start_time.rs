use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::state::Sale;

pub fn set_private_sale_start_time(ctx: Context<SetPrivateSaleStartTime>, start_time: i64) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    sale.role(&ctx.accounts.operator.key()).require_operator()?;

    let now = Clock::get()?.unix_timestamp;
    sale.set_private_sale_start_time(now, start_time)?;

    emit!(PrivateSaleScheduled {
        sale: sale.key(),
        start_time,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPrivateSaleStartTime<'info> {
    #[account(
        mut,
        seeds = [SALE_SEED, sale.vesting_pool.as_ref()],
        bump = sale.bump
    )]
    pub sale: Box<Account<'info, Sale>>,

    pub operator: Signer<'info>,
}

#[event]
pub struct PrivateSaleScheduled {
    pub sale: Pubkey,
    pub start_time: i64,
}
