use std::{fmt, path::PathBuf};

/// Base64 text of a freshly generated secret, plus the raw byte count it encodes.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    encoded: String,
    byte_len: usize,
}

impl SecretKey {
    pub(crate) fn new(encoded: String, byte_len: usize) -> Self {
        Self { encoded, byte_len }
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    #[cfg(test)]
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.decode(&self.encoded)
    }

    /// Short SHA-256 digest of the key, safe to put in logs.
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(self.encoded.as_bytes());
        hex::encode(&digest[..8])
    }
}

// Keep the secret out of debug output
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("byte_len", &self.byte_len)
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

// Result of writing the environment file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub backup: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_key() {
        let key = SecretKey::new("c2VjcmV0LXZhbHVl".to_string(), 12);
        let debug = format!("{:?}", key);

        assert!(!debug.contains("c2VjcmV0LXZhbHVl"));
        assert!(debug.contains(&key.fingerprint()));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = SecretKey::new("AAAA".to_string(), 3);
        let b = SecretKey::new("AAAA".to_string(), 3);
        let c = SecretKey::new("AAAB".to_string(), 3);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint().len(), 16);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let key = SecretKey::new("not base64!".to_string(), 0);
        assert!(key.decode().is_err());
    }
}
