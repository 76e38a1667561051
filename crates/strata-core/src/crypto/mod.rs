//! Symmetric encryption for opaque, form-safe tokens.
//!
//! This module provides authenticated encryption using XChaCha20-Poly1305,
//! used wherever the CMS has to round-trip trusted data through an
//! untrusted channel (the comment entry token being the main consumer).
//!
//! The ciphertext layout is `nonce (24 bytes) || ciphertext || tag (16 bytes)`;
//! clients treat the result as opaque bytes and must not parse it.

mod cipher;
mod error;
mod key;

pub use cipher::{
    MIN_CIPHERTEXT_SIZE, NONCE_SIZE, TAG_SIZE, decrypt, decrypt_json, encrypt, encrypt_json,
};
pub use error::{CryptoError, CryptoResult};
pub use key::{EncryptionKey, KEY_SIZE};
