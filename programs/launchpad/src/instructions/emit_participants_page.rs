use anchor_lang::prelude::*;

use crate::constants::PARTICIPANTS_SEED;
use crate::state::Participants;

pub fn emit_participants_page(ctx: Context<EmitParticipantsPage>, page: u32, limit: u32) -> Result<()> {
    let participants = &ctx.accounts.participants;
    let entries = participants.page(page, limit)?;

    emit!(ParticipantsPage {
        sale: participants.sale,
        page,
        limit,
        participant_count: participants.count(),
        entries,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitParticipantsPage<'info> {
    #[account(
        seeds = [PARTICIPANTS_SEED, participants.sale.as_ref()],
        bump
    )]
    pub participants: Box<Account<'info, Participants>>,
}

#[event]
pub struct ParticipantsPage {
    pub sale: Pubkey,
    pub page: u32,
    pub limit: u32,
    pub participant_count: u32,
    pub entries: Vec<Pubkey>,
}
