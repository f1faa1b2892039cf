//! Program-wide constants.

/// Denominator of every fixed-point fraction (rates, fees, unlock shares).
/// `ACCURACY` == 100%.
pub const ACCURACY: u64 = 10_000_000_000;

/// Max sibling digests accepted in a membership proof.
pub const MAX_PROOF_DEPTH: usize = 32;

/// Max entries returned by a single `emit_participants_page` call.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Default length of the fill period at the end of the public sale (1 hour).
pub const DEFAULT_CLOSE_PERIOD: i64 = 3_600;

// ===== Seeds =====
pub const VESTING_POOL_SEED: &[u8] = b"vesting_pool";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";
pub const VESTING_RECIPIENT_SEED: &[u8] = b"vesting_recipient";
pub const SALE_SEED: &[u8] = b"sale";
pub const FUND_VAULT_SEED: &[u8] = b"fund_vault";
pub const SALE_RECIPIENT_SEED: &[u8] = b"sale_recipient";
pub const PARTICIPANTS_SEED: &[u8] = b"participants";
pub const ALLOWLIST_SEED: &[u8] = b"allowlist";
