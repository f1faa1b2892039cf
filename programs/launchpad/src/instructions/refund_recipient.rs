use anchor_lang::prelude::*;

use crate::constants::{VESTING_POOL_SEED, VESTING_RECIPIENT_SEED};
use crate::state::{VestingPool, VestingRecipient};

/// Revokes an entitlement nothing has been withdrawn from. The amount returns
/// to the pool's unallocated balance.
pub fn refund_recipient(ctx: Context<RefundRecipient>, beneficiary: Pubkey) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    accounts
        .vesting_pool
        .role(&accounts.authority.key())
        .require_operator_or_worker()?;

    let amount = accounts
        .vesting_pool
        .refund(&mut accounts.vesting_recipient)?;

    emit!(RecipientRefunded {
        vesting_pool: accounts.vesting_pool.key(),
        beneficiary,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct RefundRecipient<'info> {
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
        mut,
        seeds = [VESTING_RECIPIENT_SEED, vesting_pool.key().as_ref(), beneficiary.as_ref()],
        bump = vesting_recipient.bump
    )]
    pub vesting_recipient: Account<'info, VestingRecipient>,

    pub authority: Signer<'info>,
}

#[event]
pub struct RecipientRefunded {
    pub vesting_pool: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
}
