use crate::error::Result;

/// Hash function backing the HMAC of the AES-CBC-HMAC-SHA2 family
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Selects the hash matching an AES key size, e.g. 128 bit keys are paired with SHA256
    pub fn from_key_bits(key_bits: usize) -> Option<Self> {
        match key_bits {
            128 => Some(HashAlgorithm::Sha256),
            192 => Some(HashAlgorithm::Sha384),
            256 => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }

    /// length of the full digest in bytes
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

/// Raw cryptographic primitives the content ciphers are composed of.
///
/// Implementations operate on raw AES keys of 16, 24 or 32 bytes and pick the AES variant
/// by key length. Length validation of keys and IVs is done by the callers, a provider
/// may still reject lengths it cannot handle.
/// Backends lacking a primitive report [`CipherError::UnsupportedAlgorithm`](crate::error::CipherError::UnsupportedAlgorithm).
pub trait CryptoProvider: Send + Sync {
    /// Returns `len` cryptographically secure random bytes
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>>;

    /// AES CBC encryption, the plain text is padded with PKCS#7
    fn aes_cbc_encrypt(&self, key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>>;

    /// AES CBC decryption, the PKCS#7 padding is removed
    fn aes_cbc_decrypt(&self, key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>>;

    /// AES GCM encryption, the authentication tag is written to `tag`, whose length determines the tag length
    fn aes_gcm_encrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        plain_text: &[u8],
        aad: &[u8],
        tag: &mut [u8],
    ) -> Result<Vec<u8>>;

    /// AES GCM decryption, fails if `tag` does not authenticate the cipher text and AAD
    fn aes_gcm_decrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        cipher_text: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>>;

    /// Computes the full (untruncated) HMAC of `data`
    fn hmac(&self, hash: HashAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>>;
}

impl<P> CryptoProvider for &P
where
    P: CryptoProvider + ?Sized,
{
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>> {
        (**self).random_bytes(len)
    }

    fn aes_cbc_encrypt(&self, key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>> {
        (**self).aes_cbc_encrypt(key, iv, plain_text)
    }

    fn aes_cbc_decrypt(&self, key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>> {
        (**self).aes_cbc_decrypt(key, iv, cipher_text)
    }

    fn aes_gcm_encrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        plain_text: &[u8],
        aad: &[u8],
        tag: &mut [u8],
    ) -> Result<Vec<u8>> {
        (**self).aes_gcm_encrypt(key, iv, plain_text, aad, tag)
    }

    fn aes_gcm_decrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        cipher_text: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>> {
        (**self).aes_gcm_decrypt(key, iv, cipher_text, aad, tag)
    }

    fn hmac(&self, hash: HashAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        (**self).hmac(hash, key, data)
    }
}
