use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the payload. Detects corruption in transit; the
/// value is carried in clear next to the payload so it offers no
/// authenticity.
pub fn generate_checksum(payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}
