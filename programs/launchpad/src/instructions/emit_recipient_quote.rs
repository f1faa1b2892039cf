use anchor_lang::prelude::*;

use crate::constants::{SALE_RECIPIENT_SEED, SALE_SEED};
use crate::state::{Sale, SaleRecipient};

/// `recipientOf` as a log event.
pub fn emit_recipient_quote(ctx: Context<EmitRecipientQuote>, wallet: Pubkey) -> Result<()> {
    let r = &ctx.accounts.sale_recipient;
    emit!(RecipientQuote {
        sale: ctx.accounts.sale.key(),
        wallet,
        fund_balance: r.fund_balance,
        reward_balance: r.reward_balance,
        private_contribution: r.private_contribution,
        public_contribution: r.public_contribution(),
        redeemed: r.redeemed,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitRecipientQuote<'info> {
    #[account(
        seeds = [SALE_SEED, sale.vesting_pool.as_ref()],
        bump = sale.bump
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(
        seeds = [SALE_RECIPIENT_SEED, sale.key().as_ref(), wallet.as_ref()],
        bump = sale_recipient.bump
    )]
    pub sale_recipient: Account<'info, SaleRecipient>,
}

#[event]
pub struct RecipientQuote {
    pub sale: Pubkey,
    pub wallet: Pubkey,
    pub fund_balance: u64,
    pub reward_balance: u64,
    pub private_contribution: u64,
    pub public_contribution: u64,
    pub redeemed: bool,
}
