use anchor_lang::prelude::*;

use crate::instructions::deposit::{process_deposit, Deposit};
use crate::state::AllocationRecord;

/// Private-phase deposit. Takes the same accounts as `deposit`.
pub fn deposit_private_sale(
    ctx: Context<Deposit>,
    amount: u64,
    record: AllocationRecord,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    process_deposit(ctx, amount, record, proof, true)
}
