use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{SALE_SEED, VESTING_POOL_SEED};
use crate::error::LaunchpadError;
use crate::instructions::start_vesting::activate_vesting;
use crate::instructions::withdraw_funds::release_funds;
use crate::instructions::withdraw_unsold_token::release_unsold;
use crate::state::{Sale, VestingPool};

/// `withdraw_unsold_token`, `withdraw_funds` and `start_vesting` in one
/// transaction.
pub fn settle_sale(ctx: Context<SettleSale>, treasury: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sale_key = ctx.accounts.sale.key();
    let accounts = &mut *ctx.accounts;
    accounts.sale.role(&accounts.operator.key()).require_operator()?;

    let unsold = release_unsold(
        &mut accounts.sale,
        &accounts.vesting_pool,
        &accounts.reward_vault,
        &accounts.operator_reward_account,
        &accounts.token_program,
        now,
    )?;
    let split = release_funds(
        &mut accounts.sale,
        &accounts.fund_vault,
        &accounts.treasury_token_account,
        &accounts.operator_fund_account,
        &accounts.token_program,
        &treasury,
        now,
    )?;
    let start_time = activate_vesting(&accounts.sale, sale_key, &mut accounts.vesting_pool, now)?;

    emit!(SaleSettled {
        sale: sale_key,
        treasury,
        unsold,
        fee: split.fee,
        operator_share: split.operator_share,
        vesting_start_time: start_time,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SettleSale<'info> {
    #[account(
        mut,
        seeds = [SALE_SEED, vesting_pool.key().as_ref()],
        bump = sale.bump,
        has_one = vesting_pool @ LaunchpadError::VestingPoolMismatch,
        has_one = fund_vault @ LaunchpadError::InvalidTokenAccount,
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(
        mut,
        seeds = [
            VESTING_POOL_SEED,
            vesting_pool.reward_mint.as_ref(),
            vesting_pool.operator.as_ref()
        ],
        bump = vesting_pool.bump
    )]
    pub vesting_pool: Box<Account<'info, VestingPool>>,

    #[account(
        mut,
        address = vesting_pool.reward_vault @ LaunchpadError::InvalidTokenAccount,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub fund_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = operator_reward_account.owner == operator.key() @ LaunchpadError::InvalidTokenAccount,
    )]
    pub operator_reward_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = operator_fund_account.owner == operator.key() @ LaunchpadError::InvalidTokenAccount,
    )]
    pub operator_fund_account: Box<Account<'info, TokenAccount>>,

    pub operator: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct SaleSettled {
    pub sale: Pubkey,
    pub treasury: Pubkey,
    pub unsold: u64,
    pub fee: u64,
    pub operator_share: u64,
    pub vesting_start_time: i64,
}
