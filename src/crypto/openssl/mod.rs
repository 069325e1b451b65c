//! OpenSSL-based cryptographic primitives.

mod aes_modes;

use openssl::{hash::MessageDigest, pkey::PKey, sign::Signer};

use crate::{
    crypto::provider::{CryptoProvider, HashAlgorithm},
    error::{CipherError, Result},
};

/// Primitive provider using the OpenSSL library.
///
/// Supports all AES key sizes for both CBC and GCM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenSsl;

impl CryptoProvider for OpenSsl {
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        openssl::rand::rand_bytes(&mut buffer).map_err(|err| {
            log::debug!("Could not generate random bytes, OpenSSL error stack: {err}");
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
        compute_hmac(hash.into(), key, data).map_err(|err| {
            log::debug!("HMAC failed, OpenSSL error stack: {err}");
            CipherError::EncryptionFailed
        })
    }
}

fn compute_hmac(
    digest: MessageDigest,
    key: &[u8],
    data: &[u8],
) -> std::result::Result<Vec<u8>, openssl::error::ErrorStack> {
    let key = PKey::hmac(key)?;
    let mut signer = Signer::new(digest, &key)?;
    signer.update(data)?;
    signer.sign_to_vec()
}

impl From<HashAlgorithm> for MessageDigest {
    fn from(hash: HashAlgorithm) -> Self {
        match hash {
            HashAlgorithm::Sha256 => MessageDigest::sha256(),
            HashAlgorithm::Sha384 => MessageDigest::sha384(),
            HashAlgorithm::Sha512 => MessageDigest::sha512(),
        }
    }
}
