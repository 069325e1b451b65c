//! RustCrypto-based cryptographic primitives.
//!
//! This module uses pure Rust implementations from the RustCrypto project.

mod aes_modes;

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::{
    crypto::provider::{CryptoProvider, HashAlgorithm},
    error::{CipherError, Result},
};

/// Primitive provider using RustCrypto libraries.
///
/// Supports all AES key sizes for both CBC and GCM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RustCrypto;

impl CryptoProvider for RustCrypto {
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        getrandom::getrandom(&mut buffer).map_err(|err| {
            log::debug!("Could not generate random bytes: {err}");
            CipherError::RandomGenerationFailed
        })?;
        Ok(buffer)
    }

    fn aes_cbc_encrypt(&self, key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>> {
        aes_modes::cbc_encrypt(key, iv, plain_text)
    }

    fn aes_cbc_decrypt(&self, key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>> {
        aes_modes::cbc_decrypt(key, iv, cipher_text)
    }

    fn aes_gcm_encrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        plain_text: &[u8],
        aad: &[u8],
        tag: &mut [u8],
    ) -> Result<Vec<u8>> {
        aes_modes::gcm_encrypt(key, iv, plain_text, aad, tag)
    }

    fn aes_gcm_decrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        cipher_text: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>> {
        aes_modes::gcm_decrypt(key, iv, cipher_text, aad, tag)
    }

    fn hmac(&self, hash: HashAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        match hash {
            HashAlgorithm::Sha256 => compute_hmac::<Hmac<Sha256>>(key, data),
            HashAlgorithm::Sha384 => compute_hmac::<Hmac<Sha384>>(key, data),
            HashAlgorithm::Sha512 => compute_hmac::<Hmac<Sha512>>(key, data),
        }
    }
}

fn compute_hmac<M>(key: &[u8], data: &[u8]) -> Result<Vec<u8>>
where
    M: Mac + hmac::digest::KeyInit,
{
    // HMAC accepts keys of any length, this only fails for broken implementations
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|err| {
        log::debug!("Invalid HMAC key: {err}");
        CipherError::EncryptionFailed
    })?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}
