//! Allowlist membership proofs.
//!
//! Leaves are BLAKE3 over a fixed byte layout of the allocation record, nodes
//! are BLAKE3 over the two children in sorted order (proofs carry no
//! left/right flags). Leaf and node hashes use distinct domain prefixes.

use bytemuck::{Pod, Zeroable};

use crate::constants::MAX_PROOF_DEPTH;
use crate::state::AllocationRecord;

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

/// Leaf preimage in record field order; integers little-endian.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct LeafPreimage {
    wallet: [u8; 32],
    kyc_passed: u8,
    public_max_alloc: [u8; 8],
    allowed_private_sale: u8,
    private_max_alloc: [u8; 8],
}

impl From<&AllocationRecord> for LeafPreimage {
    fn from(r: &AllocationRecord) -> Self {
        Self {
            wallet: r.wallet.to_bytes(),
            kyc_passed: r.kyc_passed as u8,
            public_max_alloc: r.public_max_alloc.to_le_bytes(),
            allowed_private_sale: r.allowed_private_sale as u8,
            private_max_alloc: r.private_max_alloc.to_le_bytes(),
        }
    }
}

pub fn leaf_hash(record: &AllocationRecord) -> [u8; 32] {
    let preimage = LeafPreimage::from(record);
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[LEAF_PREFIX]);
    hasher.update(bytemuck::bytes_of(&preimage));
    *hasher.finalize().as_bytes()
}

/// Commutative pairing: `hash_pair(a, b) == hash_pair(b, a)`.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[NODE_PREFIX]);
    hasher.update(lo);
    hasher.update(hi);
    *hasher.finalize().as_bytes()
}

/// Folds `proof` bottom-up starting from `leaf`. `None` for over-deep proofs.
pub fn fold_proof(leaf: [u8; 32], proof: &[[u8; 32]]) -> Option<[u8; 32]> {
    if proof.len() > MAX_PROOF_DEPTH {
        return None;
    }
    Some(proof.iter().fold(leaf, |acc, sibling| hash_pair(&acc, sibling)))
}

/// True iff `record` + `proof` fold to `root`. Never errors.
pub fn verify(root: &[u8; 32], record: &AllocationRecord, proof: &[[u8; 32]]) -> bool {
    match fold_proof(leaf_hash(record), proof) {
        Some(computed) => computed == *root,
        None => false,
    }
}
