//! Content encryption as of [RFC 7518 5](https://www.rfc-editor.org/rfc/rfc7518.html#section-5)

/// Generic façade dispatching to the content ciphers
pub mod aes_cipher;
/// AES-CBC-HMAC-SHA2 composite cipher
pub mod cbc_hmac;
/// AES-GCM cipher
pub mod gcm;
mod tag;

use crate::{
    crypto::{
        content_encryption::{CipherMode, ContentEncryption, ContentEncryptionParamsRef},
        DefaultProvider,
    },
    error::{CipherError, Result},
};

/// Façade using the default crypto backend
pub type AesCipher = aes_cipher::AesCipher<DefaultProvider>;

/// Shared interface of the content ciphers of both families.
///
/// Implementations reject algorithms of the other family with [`CipherError::UnsupportedAlgorithm`].
pub trait ContentCipher {
    /// Encrypts and authenticates `plain_text` and `aad` with the given IV
    fn encrypt(
        &self,
        algorithm: ContentEncryption,
        cek: &[u8],
        plain_text: &[u8],
        aad: &[u8],
        iv: &[u8],
    ) -> Result<CipherOutput>;

    /// Verifies `tag` and decrypts the cipher text, no plain text is produced for unauthenticated input
    fn decrypt(
        &self,
        algorithm: ContentEncryption,
        cek: &[u8],
        cipher_text: &[u8],
        tag: &[u8],
        iv: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>>;

    fn cek_byte_length(&self, algorithm: ContentEncryption) -> usize {
        algorithm.cek_byte_length()
    }

    fn iv_byte_length(&self, algorithm: ContentEncryption) -> usize {
        algorithm.iv_byte_length()
    }
}

/// Result of a content cipher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherOutput {
    pub cipher_text: Vec<u8>,
    pub tag: Vec<u8>,
}

/// Input of [`AesCipher::encrypt`](aes_cipher::AesCipher::encrypt)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptParams<'a> {
    pub algorithm: ContentEncryption,
    pub cek: &'a [u8],
    pub plain_text: &'a [u8],
    pub aad: &'a [u8],
    /// a fresh IV is generated if none is given
    pub iv: Option<&'a [u8]>,
}

/// Input of [`AesCipher::decrypt`](aes_cipher::AesCipher::decrypt)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptParams<'a> {
    pub algorithm: ContentEncryption,
    pub cek: &'a [u8],
    pub cipher_text: &'a [u8],
    pub tag: &'a [u8],
    pub iv: &'a [u8],
    pub aad: &'a [u8],
}

/// Result of [`AesCipher::encrypt`](aes_cipher::AesCipher::encrypt), the IV is returned
/// so it can be transmitted along with the cipher text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedContent {
    pub cipher_text: Vec<u8>,
    pub tag: Vec<u8>,
    pub iv: Vec<u8>,
}

pub(crate) fn params_of_mode(
    algorithm: ContentEncryption,
    mode: CipherMode,
) -> Result<ContentEncryptionParamsRef> {
    let params = algorithm.params();
    if params.mode != mode {
        log::debug!("{algorithm} cannot be processed by a {mode:?} cipher");
        return Err(CipherError::UnsupportedAlgorithm(algorithm.to_string()));
    }
    Ok(params)
}

pub(crate) fn check_cek_length(params: ContentEncryptionParamsRef, cek: &[u8]) -> Result<()> {
    if cek.len() != params.cek_len {
        log::debug!(
            "{} requires a key of {} bytes, got {}",
            params.algorithm,
            params.cek_len,
            cek.len()
        );
        return Err(CipherError::InvalidKeyLength {
            expected: params.cek_len,
            actual: cek.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_iv_length(expected: usize, iv: &[u8]) -> Result<()> {
    if iv.len() != expected {
        log::debug!("Expected an IV of {expected} bytes, got {}", iv.len());
        return Err(CipherError::InvalidIvLength {
            expected,
            actual: iv.len(),
        });
    }
    Ok(())
}
