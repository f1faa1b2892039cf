use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::SALE_SEED;
use crate::error::LaunchpadError;
use crate::state::{Sale, VestingPool};

pub fn start_presale(ctx: Context<StartPresale>) -> Result<()> {
    let reserve = ctx.accounts.reward_vault.amount;
    let sale = &mut ctx.accounts.sale;
    sale.role(&ctx.accounts.operator.key()).require_operator()?;

    let now = Clock::get()?.unix_timestamp;
    sale.start_presale(now, reserve)?;

    msg!("public sale started manually");
    emit!(PresaleStarted {
        sale: sale.key(),
        start_time: sale.config.start_time,
        end_time: sale.end_time(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct StartPresale<'info> {
    #[account(
        mut,
        seeds = [SALE_SEED, vesting_pool.key().as_ref()],
        bump = sale.bump,
        has_one = vesting_pool @ LaunchpadError::VestingPoolMismatch,
    )]
    pub sale: Box<Account<'info, Sale>>,

    pub vesting_pool: Account<'info, VestingPool>,

    #[account(address = vesting_pool.reward_vault @ LaunchpadError::InvalidTokenAccount)]
    pub reward_vault: Account<'info, TokenAccount>,

    pub operator: Signer<'info>,
}

#[event]
pub struct PresaleStarted {
    pub sale: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
}
