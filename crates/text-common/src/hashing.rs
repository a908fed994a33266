use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// Identifier derived from `from` and the current time, formatted `8-4-4-4-12`.
pub fn simple_uid(from: &str) -> String {
    simple_uid_at(from, Utc::now())
}

/// sha256(from + "." + RFC3339 timestamp), first 128 bits as grouped lowercase hex.
pub fn simple_uid_at(from: &str, timestamp: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(from.as_bytes());
    hasher.update(b".");
    hasher.update(timestamp.to_rfc3339_opts(SecondsFormat::Secs, true).as_bytes());
    let hash: [u8; 32] = hasher.finalize().into();

    let hex: String = hash[..16].iter().map(|b| format!("{b:02x}")).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
