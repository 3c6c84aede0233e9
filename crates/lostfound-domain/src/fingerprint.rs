use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a (lost, found) match candidate.
///
/// Identity fields, joined with `|`:
/// - lost report id
/// - found report id
pub fn fingerprint_for_match(lost_id: &str, found_id: &str) -> String {
    let canonical = [lost_id, found_id].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
