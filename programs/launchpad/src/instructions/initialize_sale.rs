use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{FUND_VAULT_SEED, PARTICIPANTS_SEED, SALE_SEED, VESTING_POOL_SEED};
use crate::error::LaunchpadError;
use crate::state::{Participants, Sale, SaleConfig, SaleStatus, VestingPool};

/// Creates the sale against an existing vesting pool. The pool only learns
/// about the sale in `attach_sale`.
pub fn initialize_sale(ctx: Context<InitializeSale>, config: SaleConfig) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = config.with_defaults();
    config.validate(now)?;

    ctx.accounts
        .vesting_pool
        .role(&ctx.accounts.operator.key())
        .require_operator()?;
    require!(
        ctx.accounts.fund_mint.key() != ctx.accounts.vesting_pool.reward_mint,
        LaunchpadError::InvalidTokenMint
    );

    let sale = &mut ctx.accounts.sale;
    sale.operator = ctx.accounts.operator.key();
    sale.fund_mint = ctx.accounts.fund_mint.key();
    sale.vesting_pool = ctx.accounts.vesting_pool.key();
    sale.fund_vault = ctx.accounts.fund_vault.key();
    sale.config = config;
    sale.status = SaleStatus::default();
    sale.bump = ctx.bumps.sale;

    let participants = &mut ctx.accounts.participants;
    participants.sale = sale.key();
    participants.entries = Vec::new();

    emit!(SaleInitialized {
        sale: sale.key(),
        vesting_pool: sale.vesting_pool,
        operator: sale.operator,
        fund_mint: sale.fund_mint,
        rate: config.rate,
        start_time: config.start_time,
        period: config.period,
        initial_reward_pool: config.initial_reward_pool,
        private_start_time: config.private_start_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSale<'info> {
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
        init,
        payer = operator,
        space = 8 + Sale::SIZE,
        seeds = [SALE_SEED, vesting_pool.key().as_ref()],
        bump
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(
        init,
        payer = operator,
        token::mint = fund_mint,
        token::authority = sale,
        seeds = [FUND_VAULT_SEED, sale.key().as_ref()],
        bump
    )]
    pub fund_vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = operator,
        space = Participants::space(0),
        seeds = [PARTICIPANTS_SEED, sale.key().as_ref()],
        bump
    )]
    pub participants: Box<Account<'info, Participants>>,

    pub fund_mint: Account<'info, Mint>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct SaleInitialized {
    pub sale: Pubkey,
    pub vesting_pool: Pubkey,
    pub operator: Pubkey,
    pub fund_mint: Pubkey,
    pub rate: u64,
    pub start_time: i64,
    pub period: i64,
    pub initial_reward_pool: u64,
    pub private_start_time: i64,
}
