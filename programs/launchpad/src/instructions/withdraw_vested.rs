use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{VESTING_POOL_SEED, VESTING_RECIPIENT_SEED};
use crate::error::LaunchpadError;
use crate::state::{VestingPool, VestingRecipient};
use crate::utils::transfer;

pub fn withdraw_vested(ctx: Context<WithdrawVested>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    // Capture the signer before taking mutable borrows.
    let pool_ai = ctx.accounts.vesting_pool.to_account_info();
    let accounts = &mut *ctx.accounts;

    let amount = accounts
        .vesting_pool
        .withdraw(now, &mut accounts.vesting_recipient)?;
    require!(
        accounts.reward_vault.amount >= amount,
        LaunchpadError::InsufficientVaultBalance
    );

    let pool = &accounts.vesting_pool;
    let bump = [pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[
        VESTING_POOL_SEED,
        pool.reward_mint.as_ref(),
        pool.operator.as_ref(),
        &bump,
    ]];
    transfer::pay_out(
        &accounts.token_program,
        &accounts.reward_vault,
        &accounts.beneficiary_reward_account,
        pool_ai,
        signer_seeds,
        amount,
    )?;

    emit!(TokensWithdrawn {
        vesting_pool: pool.key(),
        beneficiary: accounts.beneficiary.key(),
        amount,
        withdrawn_total: accounts.vesting_recipient.amount_withdrawn,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawVested<'info> {
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
        seeds = [VESTING_RECIPIENT_SEED, vesting_pool.key().as_ref(), beneficiary.key().as_ref()],
        bump = vesting_recipient.bump
    )]
    pub vesting_recipient: Box<Account<'info, VestingRecipient>>,

    #[account(
        mut,
        address = vesting_pool.reward_vault @ LaunchpadError::InvalidTokenAccount,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = beneficiary_reward_account.mint == vesting_pool.reward_mint @ LaunchpadError::InvalidTokenMint,
        constraint = beneficiary_reward_account.owner == beneficiary.key() @ LaunchpadError::InvalidTokenAccount,
    )]
    pub beneficiary_reward_account: Box<Account<'info, TokenAccount>>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensWithdrawn {
    pub vesting_pool: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub withdrawn_total: u64,
    pub timestamp: i64,
}
