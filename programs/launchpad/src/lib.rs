use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::{AllocationRecord, PublicSaleGate, SaleConfig, VestingParams, VestingTerms};

declare_id!("61EiRiRNSU4ZEhnn8JpC6L9VRHz6oKvD9YzSP6bNZNWp");

#[program]
pub mod launchpad {
    use super::*;

    // ----- setup -----

    pub fn initialize_vesting(ctx: Context<InitializeVesting>, params: VestingParams) -> Result<()> {
        instructions::initialize_vesting::initialize_vesting(ctx, params)
    }

    pub fn fund_reward_vault(ctx: Context<FundRewardVault>, amount: u64) -> Result<()> {
        instructions::fund_reward_vault::fund_reward_vault(ctx, amount)
    }

    pub fn initialize_sale(ctx: Context<InitializeSale>, config: SaleConfig) -> Result<()> {
        instructions::initialize_sale::initialize_sale(ctx, config)
    }

    pub fn initialize_allowlist(ctx: Context<InitializeAllowlist>, root: [u8; 32]) -> Result<()> {
        instructions::initialize_allowlist::initialize_allowlist(ctx, root)
    }

    pub fn attach_sale(ctx: Context<AttachSale>) -> Result<()> {
        instructions::attach_sale::attach_sale(ctx)
    }

    // ----- roles and allowlist -----

    pub fn set_vesting_worker(ctx: Context<SetVestingWorker>, worker: Pubkey) -> Result<()> {
        instructions::set_vesting_worker::set_vesting_worker(ctx, worker)
    }

    pub fn set_allowlist_worker(ctx: Context<SetAllowlistWorker>, worker: Pubkey) -> Result<()> {
        instructions::set_allowlist_worker::set_allowlist_worker(ctx, worker)
    }

    pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, root: [u8; 32]) -> Result<()> {
        instructions::set_merkle_root::set_merkle_root(ctx, root)
    }

    // ----- sale phases -----

    pub fn set_private_sale_start_time(
        ctx: Context<SetPrivateSaleStartTime>,
        start_time: i64,
    ) -> Result<()> {
        instructions::set_private_sale_start_time::set_private_sale_start_time(ctx, start_time)
    }

    pub fn end_private_sale(ctx: Context<EndPrivateSale>) -> Result<()> {
        instructions::end_private_sale::end_private_sale(ctx)
    }

    pub fn set_start_time(ctx: Context<SetStartTime>, start_time: i64) -> Result<()> {
        instructions::set_start_time::set_start_time(ctx, start_time)
    }

    pub fn start_presale(ctx: Context<StartPresale>) -> Result<()> {
        instructions::start_presale::start_presale(ctx)
    }

    pub fn pause_presale(ctx: Context<PausePresale>) -> Result<()> {
        instructions::pause_presale::pause_presale(ctx)
    }

    pub fn resume_presale(ctx: Context<ResumePresale>) -> Result<()> {
        instructions::resume_presale::resume_presale(ctx)
    }

    // ----- deposits -----

    pub fn deposit_private_sale(
        ctx: Context<Deposit>,
        amount: u64,
        record: AllocationRecord,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::deposit_private_sale::deposit_private_sale(ctx, amount, record, proof)
    }

    pub fn deposit(
        ctx: Context<Deposit>,
        amount: u64,
        record: AllocationRecord,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::deposit::deposit(ctx, amount, record, proof)
    }

    // ----- settlement -----

    pub fn withdraw_unsold_token(ctx: Context<WithdrawUnsoldToken>) -> Result<()> {
        instructions::withdraw_unsold_token::withdraw_unsold_token(ctx)
    }

    pub fn withdraw_funds(ctx: Context<WithdrawFunds>, treasury: Pubkey) -> Result<()> {
        instructions::withdraw_funds::withdraw_funds(ctx, treasury)
    }

    pub fn start_vesting(ctx: Context<StartVesting>) -> Result<()> {
        instructions::start_vesting::start_vesting(ctx)
    }

    pub fn settle_sale(ctx: Context<SettleSale>, treasury: Pubkey) -> Result<()> {
        instructions::settle_sale::settle_sale(ctx, treasury)
    }

    pub fn redeem_funds(ctx: Context<RedeemFunds>) -> Result<()> {
        instructions::redeem_funds::redeem_funds(ctx)
    }

    // ----- vesting -----

    pub fn update_recipient(
        ctx: Context<UpdateRecipient>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::update_recipient::update_recipient(ctx, beneficiary, amount)
    }

    pub fn refund_recipient(ctx: Context<RefundRecipient>, beneficiary: Pubkey) -> Result<()> {
        instructions::refund_recipient::refund_recipient(ctx, beneficiary)
    }

    pub fn set_vesting_start_time(ctx: Context<SetVestingStartTime>, start_time: i64) -> Result<()> {
        instructions::set_vesting_start_time::set_vesting_start_time(ctx, start_time)
    }

    pub fn withdraw_vested(ctx: Context<WithdrawVested>) -> Result<()> {
        instructions::withdraw_vested::withdraw_vested(ctx)
    }

    // ----- queries -----

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx, wallet)
    }

    pub fn emit_recipient_quote(ctx: Context<EmitRecipientQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_recipient_quote::emit_recipient_quote(ctx, wallet)
    }

    pub fn emit_participants_page(
        ctx: Context<EmitParticipantsPage>,
        page: u32,
        limit: u32,
    ) -> Result<()> {
        instructions::emit_participants_page::emit_participants_page(ctx, page, limit)
    }
}
