use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an asset finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - asset path (root-relative)
pub fn fingerprint_for_asset(check_id: &str, code: &str, asset_path: &str) -> String {
    let canonical = [check_id, code, asset_path].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
