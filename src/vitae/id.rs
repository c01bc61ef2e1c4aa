//! Record identifiers.
//!
//! Every entry in a document collection carries an [`Id`]: a short, opaque,
//! lowercase base36 token. Ids are drawn from a random v4 UUID, so they are
//! unique with overwhelming probability within a document. They carry no
//! ordering or meaning and are never reassigned once created.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of base36 digits in a generated id.
pub const ID_LEN: usize = 9;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id(value)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates a fresh identifier.
pub fn new_id() -> Id {
    let space = 36u128.pow(ID_LEN as u32);
    let mut n = Uuid::new_v4().as_u128() % space;

    let mut digits = [b'0'; ID_LEN];
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(n % 36) as usize];
        n /= 36;
    }
    // Only ASCII digits and letters were written.
    Id(digits.iter().map(|&b| b as char).collect())
}
