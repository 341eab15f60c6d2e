use brl_core::RuleList;
use sha2::{Digest, Sha256};

/// Computes the canonical structural fingerprint for a rule list.
pub fn list_fingerprint(list: &RuleList) -> String {
    let mut hasher = Sha256::new();
    hasher.update((list.len() as u64).to_le_bytes());
    for &rule in list.as_slice() {
        hasher.update((rule as u64).to_le_bytes());
    }
    let digest = hasher.finalize();
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}
