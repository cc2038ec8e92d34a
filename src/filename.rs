// SPDX-License-Identifier: Apache-2.0

// Keys are arbitrary non-empty strings; filenames are not. Every key
// maps to exactly one filename via percent-style byte escaping: ASCII
// alphanumerics and '-' '_' '.' pass through, everything else becomes
// %XX. The transform is injective and reversible, so loading a
// directory recovers the original keys from the filenames alone.
// It must stay stable across releases: changing it orphans every
// entry written by an older build.

#[derive(Debug, PartialEq)]
pub enum FilenameError {
    EmptyKey,
    BadEscape(String),
}

impl std::fmt::Display for FilenameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilenameError::EmptyKey => write!(f, "Key must not be empty"),
            FilenameError::BadEscape(s) => write!(f, "Bad escape sequence in filename: {}", s),
        }
    }
}

impl std::error::Error for FilenameError {}

fn is_plain(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.'
}

pub fn encode(key: &str) -> Result<String, FilenameError> {
    if key.is_empty() {
        return Err(FilenameError::EmptyKey);
    }

    let mut out = String::with_capacity(key.len());
    for &b in key.as_bytes() {
        if is_plain(b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }

    // "." and ".." are directory entries, not usable filenames
    if out == "." {
        out = "%2E".to_string();
    } else if out == ".." {
        out = "%2E%2E".to_string();
    }
    Ok(out)
}

// Only canonical filenames are accepted: uppercase hex escapes, and
// no escape of a byte that passes through plain. Otherwise distinct
// names like %2e and %2E would alias to one key. The whole-name dot
// escapes are the one plain-byte escape encode emits.
pub fn decode(name: &str) -> Result<String, FilenameError> {
    let bytes = name.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut escaped_plain = false;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .ok_or_else(|| FilenameError::BadEscape(name.to_string()))?;
            if !hex
                .iter()
                .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(b))
            {
                return Err(FilenameError::BadEscape(name.to_string()));
            }
            let hex = std::str::from_utf8(hex)
                .map_err(|_| FilenameError::BadEscape(name.to_string()))?;
            let b = u8::from_str_radix(hex, 16)
                .map_err(|_| FilenameError::BadEscape(name.to_string()))?;
            if is_plain(b) {
                escaped_plain = true;
            }
            out.push(b);
            i += 3;
        } else if is_plain(bytes[i]) {
            out.push(bytes[i]);
            i += 1;
        } else {
            // a filename we did not produce
            return Err(FilenameError::BadEscape(name.to_string()));
        }
    }

    if escaped_plain && name != "%2E" && name != "%2E%2E" {
        return Err(FilenameError::BadEscape(name.to_string()));
    }
    if out.is_empty() {
        return Err(FilenameError::EmptyKey);
    }
    String::from_utf8(out).map_err(|_| FilenameError::BadEscape(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys_pass_through() {
        assert_eq!(encode("image000").unwrap(), "image000");
        assert_eq!(encode("a-b_c.d").unwrap(), "a-b_c.d");
        assert_eq!(decode("image000").unwrap(), "image000");
    }

    #[test]
    fn test_escaping_round_trip() {
        for key in ["with space", "a/b", "ünïcode", "per%cent", "..", ".", "a\nb"] {
            let name = encode(key).unwrap();
            assert!(!name.contains('/'), "{:?} leaked a separator", name);
            assert_eq!(decode(&name).unwrap(), key);
        }
    }

    #[test]
    fn test_injective_on_lookalikes() {
        // "a b" and "a%20b" must not collide
        let a = encode("a b").unwrap();
        let b = encode("a%20b").unwrap();
        assert_ne!(a, b);
        assert_eq!(decode(&a).unwrap(), "a b");
        assert_eq!(decode(&b).unwrap(), "a%20b");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(encode("").unwrap_err(), FilenameError::EmptyKey);
    }

    #[test]
    fn test_foreign_filenames_rejected() {
        assert!(decode("trailing%2").is_err());
        assert!(decode("bad%zzescape").is_err());
        assert!(decode("has space").is_err());
        assert!(decode("#tmp-AbC123").is_err());
    }

    #[test]
    fn test_non_canonical_escapes_rejected() {
        // lowercase hex and escapes of plain bytes would alias
        // distinct filenames onto one key
        assert!(decode("%2e").is_err());
        assert!(decode("a%2Eb").is_err());
        assert!(decode("%41").is_err());

        assert_eq!(decode("%2E").unwrap(), ".");
        assert_eq!(decode("%2E%2E").unwrap(), "..");
    }
}
