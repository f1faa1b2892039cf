use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{SALE_SEED, VESTING_POOL_SEED};
use crate::error::LaunchpadError;
use crate::state::{Sale, VestingPool};
use crate::utils::transfer;

pub fn withdraw_unsold_token(ctx: Context<WithdrawUnsoldToken>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;
    accounts.sale.role(&accounts.operator.key()).require_operator()?;

    let amount = release_unsold(
        &mut accounts.sale,
        &accounts.vesting_pool,
        &accounts.reward_vault,
        &accounts.operator_reward_account,
        &accounts.token_program,
        now,
    )?;

    emit!(UnsoldWithdrawn {
        sale: accounts.sale.key(),
        operator: accounts.operator.key(),
        amount,
    });
    Ok(())
}

/// Books the unsold remainder and sends it out of the reward vault, leaving
/// enough behind for every outstanding entitlement.
pub(crate) fn release_unsold<'info>(
    sale: &mut Sale,
    pool: &Account<'info, VestingPool>,
    reward_vault: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
    now: i64,
) -> Result<u64> {
    require_keys_eq!(destination.mint, pool.reward_mint, LaunchpadError::InvalidTokenMint);

    let unsold = sale.withdraw_unsold(now)?;
    let left = reward_vault
        .amount
        .checked_sub(unsold)
        .ok_or(LaunchpadError::InsufficientVaultBalance)?;
    require!(left >= pool.outstanding(), LaunchpadError::InsufficientVaultBalance);

    let bump = [pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[
        VESTING_POOL_SEED,
        pool.reward_mint.as_ref(),
        pool.operator.as_ref(),
        &bump,
    ]];
    transfer::pay_out(
        token_program,
        reward_vault,
        destination,
        pool.to_account_info(),
        signer_seeds,
        unsold,
    )?;

    Ok(unsold)
}

#[derive(Accounts)]
pub struct WithdrawUnsoldToken<'info> {
    #[account(
        mut,
        seeds = [SALE_SEED, vesting_pool.key().as_ref()],
        bump = sale.bump,
        has_one = vesting_pool @ LaunchpadError::VestingPoolMismatch,
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(
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

    #[account(
        mut,
        constraint = operator_reward_account.owner == operator.key() @ LaunchpadError::InvalidTokenAccount,
    )]
    pub operator_reward_account: Box<Account<'info, TokenAccount>>,

    pub operator: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct UnsoldWithdrawn {
    pub sale: Pubkey,
    pub operator: Pubkey,
    pub amount: u64,
}
