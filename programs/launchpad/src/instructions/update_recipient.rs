use anchor_lang::prelude::*;

use crate::constants::{VESTING_POOL_SEED, VESTING_RECIPIENT_SEED};
use crate::error::LaunchpadError;
use crate::state::{VestingPool, VestingRecipient};

/// Direct credit by the operator or worker, outside any sale. Credits add up.
pub fn update_recipient(ctx: Context<UpdateRecipient>, beneficiary: Pubkey, amount: u64) -> Result<()> {
    require!(beneficiary != Pubkey::default(), LaunchpadError::InvalidPubkey);

    let now = Clock::get()?.unix_timestamp;
    let pool_key = ctx.accounts.vesting_pool.key();
    let bump = ctx.bumps.vesting_recipient;
    let accounts = &mut *ctx.accounts;

    accounts
        .vesting_pool
        .role(&accounts.authority.key())
        .require_operator_or_worker()?;

    accounts.vesting_recipient.bind(pool_key, beneficiary, bump);
    let total = accounts
        .vesting_pool
        .credit(now, &mut accounts.vesting_recipient, amount)?;

    emit!(RecipientUpdated {
        vesting_pool: pool_key,
        beneficiary,
        amount,
        total,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct UpdateRecipient<'info> {
    #[account(
        mut,
        seeds = [
            VESTING_POOL_SEED,
            vesting_pool.reward_mint.as_ref(),
            vesting_pool.operator.as_ref()
        ],
        bump = vesting_pool.bump
    )]
    pub vesting_pool: Account<'info, VestingPool>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + VestingRecipient::SIZE,
        seeds = [VESTING_RECIPIENT_SEED, vesting_pool.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub vesting_recipient: Account<'info, VestingRecipient>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RecipientUpdated {
    pub vesting_pool: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total: u64,
}
