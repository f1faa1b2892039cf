use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{
    ALLOWLIST_SEED, PARTICIPANTS_SEED, SALE_RECIPIENT_SEED, SALE_SEED, VESTING_POOL_SEED,
    VESTING_RECIPIENT_SEED,
};
use crate::error::LaunchpadError;
use crate::state::{
    AllocationRecord, Allowlist, DepositReceipt, DepositRequest, Participants, Sale, SaleLedgers,
    SaleRecipient, VestingPool, VestingRecipient,
};
use crate::utils::transfer;

/// Public-phase deposit.
pub fn deposit(
    ctx: Context<Deposit>,
    amount: u64,
    record: AllocationRecord,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    process_deposit(ctx, amount, record, proof, false)
}

/// Shared by both phases: verify the allowlist entry, price the deposit,
/// credit the vesting entitlement and pull the funds in.
pub(crate) fn process_deposit(
    ctx: Context<Deposit>,
    amount: u64,
    record: AllocationRecord,
    proof: Vec<[u8; 32]>,
    is_private: bool,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let beneficiary = ctx.accounts.beneficiary.key();
    let sale_key = ctx.accounts.sale.key();
    let pool_key = ctx.accounts.vesting_pool.key();
    let reserve = ctx.accounts.reward_vault.amount;
    let sale_recipient_bump = ctx.bumps.sale_recipient;
    let vesting_recipient_bump = ctx.bumps.vesting_recipient;

    let accounts = &mut *ctx.accounts;
    accounts
        .sale_recipient
        .bind(sale_key, beneficiary, sale_recipient_bump);
    accounts
        .vesting_recipient
        .bind(pool_key, beneficiary, vesting_recipient_bump);

    let request = DepositRequest {
        beneficiary,
        record: &record,
        proof: &proof,
        amount,
        is_private,
    };
    let DepositReceipt {
        reward,
        vesting_total,
    } = accounts.sale.accept_deposit(
        &sale_key,
        now,
        reserve,
        &request,
        &accounts.allowlist,
        &mut accounts.participants,
        SaleLedgers {
            pool: &mut accounts.vesting_pool,
            sale_recipient: &mut accounts.sale_recipient,
            vesting_recipient: &mut accounts.vesting_recipient,
        },
    )?;

    transfer::pay_in(
        &accounts.token_program,
        &accounts.beneficiary_token_account,
        &accounts.fund_vault,
        &accounts.beneficiary,
        amount,
    )?;

    emit!(TokensVested {
        beneficiary,
        amount: reward,
        is_private,
        timestamp: now,
    });
    emit!(DepositAccepted {
        sale: sale_key,
        beneficiary,
        funds: amount,
        reward,
        fund_balance: accounts.sale_recipient.fund_balance,
        vesting_total,
        is_private,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
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
        seeds = [ALLOWLIST_SEED, sale.key().as_ref()],
        bump = allowlist.bump
    )]
    pub allowlist: Box<Account<'info, Allowlist>>,

    #[account(
        mut,
        seeds = [PARTICIPANTS_SEED, sale.key().as_ref()],
        bump,
        realloc = participants.space_with(&beneficiary.key()),
        realloc::payer = beneficiary,
        realloc::zero = false
    )]
    pub participants: Box<Account<'info, Participants>>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        space = 8 + SaleRecipient::SIZE,
        seeds = [SALE_RECIPIENT_SEED, sale.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub sale_recipient: Box<Account<'info, SaleRecipient>>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        space = 8 + VestingRecipient::SIZE,
        seeds = [VESTING_RECIPIENT_SEED, vesting_pool.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub vesting_recipient: Box<Account<'info, VestingRecipient>>,

    #[account(address = vesting_pool.reward_vault @ LaunchpadError::InvalidTokenAccount)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub fund_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == sale.fund_mint @ LaunchpadError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ LaunchpadError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensVested {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub is_private: bool,
    pub timestamp: i64,
}

#[event]
pub struct DepositAccepted {
    pub sale: Pubkey,
    pub beneficiary: Pubkey,
    pub funds: u64,
    pub reward: u64,
    pub fund_balance: u64,
    pub vesting_total: u64,
    pub is_private: bool,
}
