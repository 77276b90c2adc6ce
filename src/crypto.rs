use base64::{engine::general_purpose, Engine as _};
use rand::{rngs::OsRng, RngCore};
use tracing::debug;

use crate::{
    error::{AppError, Result},
    models::SecretKey,
};

/// 256-bit key unless configured otherwise.
pub const DEFAULT_KEY_LENGTH: usize = 32;

pub struct KeyGenerator;

impl KeyGenerator {
    /// Generate `length` bytes from the OS CSPRNG and base64-encode them.
    pub fn generate(length: usize) -> Result<SecretKey> {
        if length == 0 {
            return Err(AppError::InvalidKeyLength(length));
        }

        let mut bytes = vec![0u8; length];
        OsRng.try_fill_bytes(&mut bytes)?;

        let key = SecretKey::new(general_purpose::STANDARD.encode(&bytes), length);
        debug!("Generated {}-byte key, fingerprint {}", length, key.fingerprint());
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_decodes_to_32_bytes() {
        let key = KeyGenerator::generate(DEFAULT_KEY_LENGTH).unwrap();

        assert_eq!(key.byte_len(), 32);
        assert_eq!(key.decode().unwrap().len(), 32);
        // 32 bytes -> 44 base64 chars with one padding char
        assert_eq!(key.as_str().len(), 44);
        assert!(key.as_str().ends_with('='));
    }

    #[test]
    fn test_custom_lengths() {
        for length in [1, 16, 48, 64] {
            let key = KeyGenerator::generate(length).unwrap();
            assert_eq!(key.decode().unwrap().len(), length);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let first = KeyGenerator::generate(DEFAULT_KEY_LENGTH).unwrap();
        let second = KeyGenerator::generate(DEFAULT_KEY_LENGTH).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = KeyGenerator::generate(0).unwrap_err();
        assert!(matches!(err, AppError::InvalidKeyLength(0)));
    }
}
