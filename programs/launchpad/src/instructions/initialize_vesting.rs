use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{REWARD_VAULT_SEED, VESTING_POOL_SEED};
use crate::state::{VestingParams, VestingPool};

pub fn initialize_vesting(ctx: Context<InitializeVesting>, params: VestingParams) -> Result<()> {
    params.validate()?;

    let pool = &mut ctx.accounts.vesting_pool;
    pool.operator = ctx.accounts.operator.key();
    pool.worker = Pubkey::default();
    pool.creditor = Pubkey::default();
    pool.reward_mint = ctx.accounts.reward_mint.key();
    pool.reward_vault = ctx.accounts.reward_vault.key();
    pool.terms = params.terms;
    pool.start_time = 0;
    pool.amount_to_be_vested = params.amount_to_be_vested;
    pool.total_allocated = 0;
    pool.total_withdrawn = 0;
    pool.bump = ctx.bumps.vesting_pool;

    emit!(VestingInitialized {
        vesting_pool: pool.key(),
        operator: pool.operator,
        reward_mint: pool.reward_mint,
        amount_to_be_vested: pool.amount_to_be_vested,
        initial_unlock: pool.terms.initial_unlock,
        release_interval: pool.terms.release_interval,
        release_rate: pool.terms.release_rate,
        lock_period: pool.terms.lock_period,
        vesting_period: pool.terms.vesting_period,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVesting<'info> {
    #[account(
        init,
        payer = operator,
        space = 8 + VestingPool::SIZE,
        seeds = [VESTING_POOL_SEED, reward_mint.key().as_ref(), operator.key().as_ref()],
        bump
    )]
    pub vesting_pool: Account<'info, VestingPool>,

    #[account(
        init,
        payer = operator,
        token::mint = reward_mint,
        token::authority = vesting_pool,
        seeds = [REWARD_VAULT_SEED, vesting_pool.key().as_ref()],
        bump
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub reward_mint: Account<'info, Mint>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub vesting_pool: Pubkey,
    pub operator: Pubkey,
    pub reward_mint: Pubkey,
    pub amount_to_be_vested: u64,
    pub initial_unlock: u64,
    pub release_interval: i64,
    pub release_rate: u64,
    pub lock_period: i64,
    pub vesting_period: i64,
}
