use anchor_lang::prelude::*;

use crate::constants::{VESTING_POOL_SEED, VESTING_RECIPIENT_SEED};
use crate::state::{VestingPool, VestingRecipient};

/// `vestedOf` / `withdrawableOf` as a log event.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let snapshot = ctx
        .accounts
        .vesting_pool
        .quote(&ctx.accounts.vesting_recipient, now);

    emit!(VestingQuote {
        wallet,
        start_time: ctx.accounts.vesting_pool.start_time,
        total_amount: snapshot.total,
        vested_amount: snapshot.vested,
        withdrawn_amount: snapshot.withdrawn,
        withdrawable: snapshot.withdrawable,
        locked: snapshot.locked,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitVestingQuote<'info> {
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
        seeds = [VESTING_RECIPIENT_SEED, vesting_pool.key().as_ref(), wallet.as_ref()],
        bump = vesting_recipient.bump
    )]
    pub vesting_recipient: Account<'info, VestingRecipient>,
}

#[event]
pub struct VestingQuote {
    pub wallet: Pubkey,
    pub start_time: i64,
    pub total_amount: u64,
    pub vested_amount: u64,
    pub withdrawn_amount: u64,
    pub withdrawable: u64,
    pub locked: u64,
    pub timestamp: i64,
}
