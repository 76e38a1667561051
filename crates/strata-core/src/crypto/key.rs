//! Encryption key management.

use std::fmt;

use hkdf::Hkdf;
use rand::RngCore;
use sha2::Sha256;

use super::error::{CryptoError, CryptoResult};

/// The size of an XChaCha20-Poly1305 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Domain separation string for per-site key derivation.
const SITE_KEY_INFO: &[u8] = b"strata-site-encryption-key-v1";

/// A 256-bit encryption key for XChaCha20-Poly1305.
///
/// This type wraps the raw key bytes and provides safe construction
/// methods. The key is held in memory for the lifetime of the process
/// and never appears in Debug output.
#[derive(Clone)]
pub struct EncryptionKey {
    bytes: [u8; KEY_SIZE],
}

impl EncryptionKey {
    /// Creates a new encryption key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyLength`] if the slice is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength)?;
        Ok(Self { bytes })
    }

    /// Creates a new encryption key from a hex-encoded string.
    ///
    /// This is the form used when the key arrives through configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyEncoding`] for non-hex input and
    /// [`CryptoError::InvalidKeyLength`] when the decoded key is not 32 bytes.
    pub fn from_hex(encoded: &str) -> CryptoResult<Self> {
        let bytes = hex::decode(encoded).map_err(|_| CryptoError::InvalidKeyEncoding)?;
        Self::from_bytes(&bytes)
    }

    /// Generates a new random encryption key using a cryptographically secure RNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rand::rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Returns the raw key bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// Consumes the key and returns the raw bytes.
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> [u8; KEY_SIZE] {
        self.bytes
    }

    /// Derives a site-specific encryption key using HKDF-SHA256.
    ///
    /// Multi-site installations share one master key; each site gets a
    /// unique derived key so tokens never validate across sites.
    #[must_use]
    pub fn derive_site_key(&self, site_slug: &str) -> Self {
        let hkdf = Hkdf::<Sha256>::new(Some(site_slug.as_bytes()), &self.bytes);

        let mut derived_key = [0u8; KEY_SIZE];
        hkdf.expand(SITE_KEY_INFO, &mut derived_key)
            .expect("HKDF expand should not fail for 32-byte output");

        Self { bytes: derived_key }
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("bytes", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert_eq!(
            EncryptionKey::from_bytes(&[0u8; 16]).unwrap_err(),
            CryptoError::InvalidKeyLength
        );
    }

    #[test]
    fn test_from_hex_roundtrip() {
        let key = EncryptionKey::generate();
        let encoded = hex::encode(key.as_bytes());
        let decoded = EncryptionKey::from_hex(&encoded).unwrap();
        assert_eq!(key.as_bytes(), decoded.as_bytes());
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(
            EncryptionKey::from_hex("not hex at all").unwrap_err(),
            CryptoError::InvalidKeyEncoding
        );
    }

    #[test]
    fn test_derived_keys_differ_per_site() {
        let master = EncryptionKey::generate();
        let blog = master.derive_site_key("blog");
        let shop = master.derive_site_key("shop");

        assert_ne!(blog.as_bytes(), shop.as_bytes());
        assert_ne!(blog.as_bytes(), master.as_bytes());

        // Derivation is deterministic for the same site.
        assert_eq!(
            blog.as_bytes(),
            master.derive_site_key("blog").as_bytes()
        );
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let key = EncryptionKey::generate();
        let debug = format!("{key:?}");
        assert!(debug.contains("redacted"));
        assert!(!debug.contains(&hex::encode(key.as_bytes())));
    }
}
