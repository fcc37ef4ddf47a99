//! Plan fingerprints.
//!
//! Two callers planning from the same sheet must produce the same plan.
//! The digest is a SHA-256 over every transfer in order, so plans can be
//! compared (or cached) without comparing full payloads.

use sha2::{Digest, Sha256};
use splitledger_types::Settlement;

/// Compute the digest of a settlement plan.
///
/// Depends on transfer order, parties and amounts. Amounts are hashed in
/// normalized form so `30` and `30.00` hash alike.
#[must_use]
pub fn compute_plan_digest(settlements: &[Settlement]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"splitledger:plan:v1:");
    hasher.update((settlements.len() as u64).to_le_bytes());

    for s in settlements {
        let amount = s.amount.normalize().to_string();
        for field in [s.from.as_str().as_bytes(), s.to.as_str().as_bytes(), amount.as_bytes()] {
            // Length prefix keeps ("ab","c") and ("a","bc") apart.
            hasher.update((field.len() as u64).to_le_bytes());
            hasher.update(field);
        }
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Hex form of [`compute_plan_digest`].
#[must_use]
pub fn plan_digest_hex(settlements: &[Settlement]) -> String {
    hex::encode(compute_plan_digest(settlements))
}

/// Recompute and compare against an expected digest.
#[must_use]
pub fn verify_plan_digest(settlements: &[Settlement], expected: &[u8; 32]) -> bool {
    compute_plan_digest(settlements) == *expected
}
