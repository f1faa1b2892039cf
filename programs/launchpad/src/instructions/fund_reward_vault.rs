use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::VESTING_POOL_SEED;
use crate::error::LaunchpadError;
use crate::state::VestingPool;
use crate::utils::transfer;

/// Tops up the reward vault. Sales check the vault against their reward pool
/// before accepting deposits.
pub fn fund_reward_vault(ctx: Context<FundRewardVault>, amount: u64) -> Result<()> {
    require!(amount > 0, LaunchpadError::InvalidAmount);

    let pool = &ctx.accounts.vesting_pool;
    pool.role(&ctx.accounts.operator.key()).require_operator()?;

    require_keys_eq!(
        ctx.accounts.operator_token_account.mint,
        pool.reward_mint,
        LaunchpadError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.operator_token_account.owner,
        ctx.accounts.operator.key(),
        LaunchpadError::InvalidTokenAccount
    );

    transfer::pay_in(
        &ctx.accounts.token_program,
        &ctx.accounts.operator_token_account,
        &ctx.accounts.reward_vault,
        &ctx.accounts.operator,
        amount,
    )?;

    ctx.accounts.reward_vault.reload()?;

    emit!(RewardsDeposited {
        vesting_pool: ctx.accounts.vesting_pool.key(),
        operator: ctx.accounts.operator.key(),
        amount,
        vault_balance: ctx.accounts.reward_vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundRewardVault<'info> {
    #[account(
        seeds = [
            VESTING_POOL_SEED,
            vesting_pool.reward_mint.as_ref(),
            vesting_pool.operator.as_ref()
        ],
        bump = vesting_pool.bump
    )]
    pub vesting_pool: Account<'info, VestingPool>,

    #[account(
        mut,
        address = vesting_pool.reward_vault @ LaunchpadError::InvalidTokenAccount,
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub operator_token_account: Account<'info, TokenAccount>,

    pub operator: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardsDeposited {
    pub vesting_pool: Pubkey,
    pub operator: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
