use anchor_lang::prelude::*;

use crate::error::{LaunchpadError, LaunchpadResult};
use crate::utils::access::Role;
use crate::utils::merkle;

/// One participant's entry in the allowlist snapshot (merkle leaf data).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AllocationRecord {
    pub wallet: Pubkey,
    pub kyc_passed: bool,
    /// Public-sale cap, in funding-token units.
    pub public_max_alloc: u64,
    pub allowed_private_sale: bool,
    /// Private-sale cap, in funding-token units.
    pub private_max_alloc: u64,
}

impl AllocationRecord {
    /// Ownership and KYC checks shared by both deposit paths. The private
    /// flag is checked by the sale.
    pub fn authorize(&self, beneficiary: &Pubkey) -> LaunchpadResult<()> {
        if self.wallet != *beneficiary {
            return Err(LaunchpadError::InvalidAllocationRecord);
        }
        if !self.kyc_passed {
            return Err(LaunchpadError::KycNotPassed);
        }
        Ok(())
    }
}

/// Allowlist snapshot PDA: only the root is stored. Replacing the root
/// supersedes every earlier record; accepted deposits are unaffected.
#[account]
pub struct Allowlist {
    pub sale: Pubkey,
    pub operator: Pubkey,
    /// Null key when no worker is assigned.
    pub worker: Pubkey,
    pub root: [u8; 32],
    pub bump: u8,
}

impl Allowlist {
    pub const SIZE: usize =
        32 + // sale
        32 + // operator
        32 + // worker
        32 + // root
        1;   // bump

    pub fn role(&self, signer: &Pubkey) -> Role {
        Role::resolve(signer, &self.operator, &self.worker, &Pubkey::default())
    }

    pub fn verify(&self, record: &AllocationRecord, proof: &[[u8; 32]]) -> bool {
        merkle::verify(&self.root, record, proof)
    }

    /// Proof check followed by ownership/KYC checks.
    pub fn admit(
        &self,
        beneficiary: &Pubkey,
        record: &AllocationRecord,
        proof: &[[u8; 32]],
    ) -> LaunchpadResult<()> {
        if !self.verify(record, proof) {
            return Err(LaunchpadError::NotWhitelisted);
        }
        record.authorize(beneficiary)
    }

    pub fn set_root(&mut self, role: Role, root: [u8; 32]) -> LaunchpadResult<()> {
        role.require_operator_or_worker()?;
        self.root = root;
        Ok(())
    }

    pub fn set_worker(&mut self, role: Role, worker: Pubkey) -> LaunchpadResult<()> {
        role.require_operator()?;
        self.worker = worker;
        Ok(())
    }
}
