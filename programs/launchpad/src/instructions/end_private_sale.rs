use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::state::Sale;

/// One-way. Calling it again only re-emits the event.
pub fn end_private_sale(ctx: Context<EndPrivateSale>) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    sale.role(&ctx.accounts.operator.key()).require_operator()?;
    sale.end_private_sale();

    msg!("private sale closed");
    emit!(PrivateSaleEnded {
        sale: sale.key(),
        private_sold: sale.status.private_sold,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EndPrivateSale<'info> {
    #[account(
        mut,
        seeds = [SALE_SEED, sale.vesting_pool.as_ref()],
        bump = sale.bump
    )]
    pub sale: Box<Account<'info, Sale>>,

    pub operator: Signer<'info>,
}

#[event]
pub struct PrivateSaleEnded {
    pub sale: Pubkey,
    pub private_sold: u64,
    pub timestamp: i64,
}
