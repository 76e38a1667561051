//! Encrypted entry token carried through the comment form.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use strata_core::crypto::{self, CryptoError, EncryptionKey};
use thiserror::Error;

use crate::entry::Entry;

/// Errors produced while encoding or decoding an entry token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token string is not valid base64.
    #[error("entry token is not valid base64")]
    Encoding,
    /// The token failed to encrypt, decrypt or deserialize.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// The entry identity bundle round-tripped through an HTML form.
///
/// Serialized, encrypted with the process-wide key and base64-encoded
/// into an opaque string. Encryption is nonce-randomized, so encoding
/// the same token twice yields different strings; decoding always
/// restores the five fields exactly. Clients must never parse the
/// encoded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryToken {
    /// Opaque entry identifier.
    pub id: String,
    /// Entry display title.
    pub title: Option<String>,
    /// Entry location.
    pub uri: String,
    /// Singular category localization key.
    pub singular: String,
    /// Plural category localization key.
    pub plural: String,
}

impl EntryToken {
    /// Builds the token for an entry, with the URI already resolved.
    pub fn from_entry(entry: &Entry, resolved_uri: impl Into<String>) -> Self {
        Self {
            id: entry.entry_id.clone(),
            title: entry.title.clone(),
            uri: resolved_uri.into(),
            singular: entry.singular.clone(),
            plural: entry.plural.clone(),
        }
    }

    /// Encrypts and encodes the token into an opaque, form-safe string.
    pub fn encode(&self, key: &EncryptionKey) -> Result<String, TokenError> {
        let ciphertext = crypto::encrypt_json(key, self)?;
        Ok(URL_SAFE_NO_PAD.encode(ciphertext))
    }

    /// Decodes and decrypts a token produced by [`encode`].
    ///
    /// Failures surface to the caller; nothing is recovered locally.
    ///
    /// [`encode`]: EntryToken::encode
    pub fn decode(key: &EncryptionKey, encoded: &str) -> Result<Self, TokenError> {
        let ciphertext = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| TokenError::Encoding)?;
        Ok(crypto::decrypt_json(key, &ciphertext)?)
    }
}
