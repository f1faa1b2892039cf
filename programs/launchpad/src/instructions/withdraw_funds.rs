use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::SALE_SEED;
use crate::error::LaunchpadError;
use crate::state::{FundsSplit, Sale};
use crate::utils::transfer;

/// Pays the service fee to `treasury` and the rest of the raised funds to the
/// operator.
pub fn withdraw_funds(ctx: Context<WithdrawFunds>, treasury: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;
    accounts.sale.role(&accounts.operator.key()).require_operator()?;

    let split = release_funds(
        &mut accounts.sale,
        &accounts.fund_vault,
        &accounts.treasury_token_account,
        &accounts.operator_fund_account,
        &accounts.token_program,
        &treasury,
        now,
    )?;

    emit!(FundsWithdrawn {
        sale: accounts.sale.key(),
        treasury,
        fee: split.fee,
        operator_share: split.operator_share,
    });
    Ok(())
}

pub(crate) fn release_funds<'info>(
    sale: &mut Account<'info, Sale>,
    fund_vault: &Account<'info, TokenAccount>,
    treasury_account: &Account<'info, TokenAccount>,
    operator_account: &Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
    treasury: &Pubkey,
    now: i64,
) -> Result<FundsSplit> {
    require_keys_eq!(treasury_account.owner, *treasury, LaunchpadError::InvalidTreasury);
    require_keys_eq!(treasury_account.mint, sale.fund_mint, LaunchpadError::InvalidTokenMint);
    require_keys_eq!(operator_account.mint, sale.fund_mint, LaunchpadError::InvalidTokenMint);

    let sale_ai = sale.to_account_info();
    let split = sale.withdraw_funds(now, treasury)?;
    let total = split
        .fee
        .checked_add(split.operator_share)
        .ok_or(LaunchpadError::MathOverflow)?;
    require!(fund_vault.amount >= total, LaunchpadError::InsufficientVaultBalance);

    let bump = [sale.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[SALE_SEED, sale.vesting_pool.as_ref(), &bump]];
    transfer::pay_out(
        token_program,
        fund_vault,
        treasury_account,
        sale_ai.clone(),
        signer_seeds,
        split.fee,
    )?;
    transfer::pay_out(
        token_program,
        fund_vault,
        operator_account,
        sale_ai,
        signer_seeds,
        split.operator_share,
    )?;

    Ok(split)
}

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(
        mut,
        seeds = [SALE_SEED, sale.vesting_pool.as_ref()],
        bump = sale.bump,
        has_one = fund_vault @ LaunchpadError::InvalidTokenAccount,
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(mut)]
    pub fund_vault: Box<Account<'info, TokenAccount>>,

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
pub struct FundsWithdrawn {
    pub sale: Pubkey,
    pub treasury: Pubkey,
    pub fee: u64,
    pub operator_share: u64,
}
