use anchor_lang::prelude::*;

use crate::constants::{ALLOWLIST_SEED, SALE_SEED};
use crate::state::{Allowlist, Sale};

pub fn initialize_allowlist(ctx: Context<InitializeAllowlist>, root: [u8; 32]) -> Result<()> {
    ctx.accounts
        .sale
        .role(&ctx.accounts.operator.key())
        .require_operator()?;

    let list = &mut ctx.accounts.allowlist;
    list.sale = ctx.accounts.sale.key();
    list.operator = ctx.accounts.operator.key();
    list.worker = Pubkey::default();
    list.root = root;
    list.bump = ctx.bumps.allowlist;

    emit!(MerkleRootUpdated {
        allowlist: list.key(),
        authority: list.operator,
        root,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeAllowlist<'info> {
    #[account(
        seeds = [SALE_SEED, sale.vesting_pool.as_ref()],
        bump = sale.bump
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(
        init,
        payer = operator,
        space = 8 + Allowlist::SIZE,
        seeds = [ALLOWLIST_SEED, sale.key().as_ref()],
        bump
    )]
    pub allowlist: Account<'info, Allowlist>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct MerkleRootUpdated {
    pub allowlist: Pubkey,
    pub authority: Pubkey,
    pub root: [u8; 32],
}
