use serde::{Deserialize, Serialize};

/// A full name split into its first piece and everything after it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameElements {
    pub first_name: String,
    pub last_name: String,
}

/// Split on single spaces: the first piece is the first name, the rest is the last name.
pub fn split_name(full_name: &str) -> NameElements {
    let mut parts = full_name.split(' ');
    let first_name = parts.next().unwrap_or_default().to_string();
    let last_name = parts.collect::<Vec<_>>().join(" ");
    NameElements {
        first_name,
        last_name,
    }
}
