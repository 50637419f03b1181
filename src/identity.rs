//! Content-derived identifiers for global style definitions.

use serde::Serialize;
use std::fmt;

/// Prefix shared by every global style identifier.
pub const ID_PREFIX: &str = "global-";

const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Stable identifier of a global style definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StyleId(String);

impl StyleId {
    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives the identifier for a serialized rule set.
///
/// The first 128 bits of the BLAKE3 digest are spelled out in base 52
/// (`a-z`, `A-Z`), so identical input always yields the same identifier and
/// distinct rule sets practically never collide.
///
/// # Example
///
/// ```rust
/// use globalstyle::identify;
///
/// let a = identify(r#"["body { margin: 0; }"]"#);
/// let b = identify(r#"["body { margin: 0; }"]"#);
/// assert_eq!(a, b);
/// assert!(a.as_str().starts_with("global-"));
/// ```
pub fn identify(serialized: &str) -> StyleId {
    let digest = blake3::hash(serialized.as_bytes());
    let mut head = [0u8; 16];
    head.copy_from_slice(&digest.as_bytes()[..16]);
    let code = u128::from_le_bytes(head);

    StyleId(format!("{}{}", ID_PREFIX, alphabetic_name(code)))
}

fn alphabetic_name(mut code: u128) -> String {
    let mut name = Vec::new();
    loop {
        name.push(char::from(ALPHABET[(code % 52) as usize]));
        code /= 52;
        if code == 0 {
            break;
        }
    }
    name.iter().rev().collect()
}
