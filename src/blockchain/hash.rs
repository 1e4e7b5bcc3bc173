use serde_json::Value;
use sha2::{Digest, Sha256};

/// SHA-256 over an unordered set of values.
///
/// Each value is rendered as JSON and the renderings are sorted before
/// hashing, so the digest does not depend on argument order. Returns the
/// lowercase hex encoding of the digest.
pub fn crypto_hash(values: &[Value]) -> String {
    let mut parts: Vec<String> = values.iter().map(Value::to_string).collect();
    parts.sort();

    let mut hasher = Sha256::new();
    hasher.update(parts.join(" ").as_bytes());
    hex::encode(hasher.finalize())
}

/// Number of leading zero bits in a hex digest.
/// Non-hex characters end the count.
pub fn leading_zero_bits(hex_digest: &str) -> u32 {
    let mut bits = 0;
    for c in hex_digest.chars() {
        match c.to_digit(16) {
            Some(0) => bits += 4,
            Some(d) => return bits + (d as u8).leading_zeros() - 4,
            None => return bits,
        }
    }
    bits
}
