use anchor_lang::prelude::*;

use crate::constants::ALLOWLIST_SEED;
use crate::state::Allowlist;

pub fn set_allowlist_worker(ctx: Context<SetAllowlistWorker>, worker: Pubkey) -> Result<()> {
    let list = &mut ctx.accounts.allowlist;
    let role = list.role(&ctx.accounts.operator.key());
    list.set_worker(role, worker)?;

    emit!(AllowlistWorkerSet {
        allowlist: list.key(),
        worker,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAllowlistWorker<'info> {
    #[account(
        mut,
        seeds = [ALLOWLIST_SEED, allowlist.sale.as_ref()],
        bump = allowlist.bump
    )]
    pub allowlist: Account<'info, Allowlist>,

    pub operator: Signer<'info>,
}

#[event]
pub struct AllowlistWorkerSet {
    pub allowlist: Pubkey,
    pub worker: Pubkey,
}
