//! Ring backend implementation of the crypto primitives.

mod aead;

use ring::{
    hmac,
    rand::{SecureRandom, SystemRandom},
};

use crate::{
    crypto::provider::{CryptoProvider, HashAlgorithm},
    error::{CipherError, Result},
};

/// Primitive provider using the ring library.
///
/// Supports AES-128-GCM and AES-256-GCM only, ring implements neither AES-CBC nor AES-192.
#[derive(Clone, Debug)]
pub struct Ring {
    rng: SystemRandom,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl CryptoProvider for Ring {
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        self.rng.fill(&mut buffer).map_err(|_| {
            log::debug!("Could not generate random bytes");
            CipherError::RandomGenerationFailed
        })?;
        Ok(buffer)
    }

    fn aes_cbc_encrypt(&self, _key: &[u8], _iv: &[u8], _plain_text: &[u8]) -> Result<Vec<u8>> {
        Err(unsupported_cbc())
    }

    fn aes_cbc_decrypt(&self, _key: &[u8], _iv: &[u8], _cipher_text: &[u8]) -> Result<Vec<u8>> {
        Err(unsupported_cbc())
    }

    fn aes_gcm_encrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        plain_text: &[u8],
        aad: &[u8],
        tag: &mut [u8],
    ) -> Result<Vec<u8>> {
        aead::seal(key, iv, plain_text, aad, tag)
    }

    fn aes_gcm_decrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        cipher_text: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>> {
        aead::open(key, iv, cipher_text, aad, tag)
    }

    fn hmac(&self, hash: HashAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let key = hmac::Key::new(hash.into(), key);
        Ok(hmac::sign(&key, data).as_ref().to_vec())
    }
}

impl From<HashAlgorithm> for hmac::Algorithm {
    fn from(hash: HashAlgorithm) -> Self {
        match hash {
            HashAlgorithm::Sha256 => hmac::HMAC_SHA256,
            HashAlgorithm::Sha384 => hmac::HMAC_SHA384,
            HashAlgorithm::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

fn unsupported_cbc() -> CipherError {
    log::debug!("AES CBC is not implemented in ring");
    CipherError::UnsupportedAlgorithm("AES-CBC".to_owned())
}
