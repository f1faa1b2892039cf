use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{SALE_RECIPIENT_SEED, SALE_SEED, VESTING_POOL_SEED, VESTING_RECIPIENT_SEED};
use crate::error::LaunchpadError;
use crate::state::{RedeemReceipt, Sale, SaleLedgers, SaleRecipient, VestingPool, VestingRecipient};
use crate::utils::transfer;

/// Refund inside the post-listing window: the vesting entitlement is revoked
/// and the contributed funds go back to the beneficiary.
pub fn redeem_funds(ctx: Context<RedeemFunds>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sale_key = ctx.accounts.sale.key();
    let sale_ai = ctx.accounts.sale.to_account_info();
    let accounts = &mut *ctx.accounts;

    let RedeemReceipt {
        funds,
        revoked_reward,
    } = accounts.sale.redeem(
        &sale_key,
        now,
        accounts.fund_vault.amount,
        SaleLedgers {
            pool: &mut accounts.vesting_pool,
            sale_recipient: &mut accounts.sale_recipient,
            vesting_recipient: &mut accounts.vesting_recipient,
        },
    )?;

    let bump = [accounts.sale.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[SALE_SEED, accounts.sale.vesting_pool.as_ref(), &bump]];
    transfer::pay_out(
        &accounts.token_program,
        &accounts.fund_vault,
        &accounts.beneficiary_token_account,
        sale_ai,
        signer_seeds,
        funds,
    )?;

    emit!(FundsRedeemed {
        sale: sale_key,
        beneficiary: accounts.beneficiary.key(),
        funds,
        revoked_reward,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RedeemFunds<'info> {
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
        seeds = [SALE_RECIPIENT_SEED, sale.key().as_ref(), beneficiary.key().as_ref()],
        bump = sale_recipient.bump
    )]
    pub sale_recipient: Box<Account<'info, SaleRecipient>>,

    #[account(
        mut,
        seeds = [VESTING_RECIPIENT_SEED, vesting_pool.key().as_ref(), beneficiary.key().as_ref()],
        bump = vesting_recipient.bump
    )]
    pub vesting_recipient: Box<Account<'info, VestingRecipient>>,

    #[account(mut)]
    pub fund_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == sale.fund_mint @ LaunchpadError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ LaunchpadError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Box<Account<'info, TokenAccount>>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FundsRedeemed {
    pub sale: Pubkey,
    pub beneficiary: Pubkey,
    pub funds: u64,
    pub revoked_reward: u64,
    pub timestamp: i64,
}
