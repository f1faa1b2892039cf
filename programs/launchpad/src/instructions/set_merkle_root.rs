use anchor_lang::prelude::*;

use crate::constants::ALLOWLIST_SEED;
use crate::instructions::MerkleRootUpdated;
use crate::state::Allowlist;

/// Replaces the snapshot root. No history is kept.
pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, root: [u8; 32]) -> Result<()> {
    let list = &mut ctx.accounts.allowlist;
    let authority = ctx.accounts.authority.key();
    let role = list.role(&authority);
    list.set_root(role, root)?;

    emit!(MerkleRootUpdated {
        allowlist: list.key(),
        authority,
        root,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetMerkleRoot<'info> {
    #[account(
        mut,
        seeds = [ALLOWLIST_SEED, allowlist.sale.as_ref()],
        bump = allowlist.bump
    )]
    pub allowlist: Account<'info, Allowlist>,

    pub authority: Signer<'info>,
}
