use super::{
    cbc_hmac::CbcHmacCipher, check_cek_length, gcm::GcmCipher, CipherOutput, ContentCipher,
    DecryptParams, EncryptParams, EncryptedContent,
};
use crate::{
    crypto::{
        content_encryption::{CipherMode, ContentEncryption},
        provider::CryptoProvider,
    },
    error::Result,
};

/// Uniform entry point for all content encryption algorithms.
///
/// The façade is generic over:
/// - `P`: The crypto backend providing the raw primitives
///
/// It checks the key length, generates an IV if none is given, and dispatches
/// to the [`CbcHmacCipher`] or [`GcmCipher`] depending on the algorithm.
#[derive(Clone, Debug)]
pub struct AesCipher<P> {
    provider: P,
    cbc_hmac: CbcHmacCipher<P>,
    gcm: GcmCipher<P>,
}

impl<P> Default for AesCipher<P>
where
    P: CryptoProvider + Clone + Default,
{
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P> AesCipher<P>
where
    P: CryptoProvider + Clone,
{
    pub fn new(provider: P) -> Self {
        Self {
            cbc_hmac: CbcHmacCipher::new(provider.clone()),
            gcm: GcmCipher::new(provider.clone()),
            provider,
        }
    }

    /// Required length of the content encryption key
    pub fn cek_byte_length(&self, algorithm: ContentEncryption) -> usize {
        self.content_cipher(algorithm).cek_byte_length(algorithm)
    }

    /// Length of the IV, 16 bytes for the CBC and 12 bytes for the GCM family
    pub fn iv_byte_length(&self, algorithm: ContentEncryption) -> usize {
        self.content_cipher(algorithm).iv_byte_length(algorithm)
    }

    /// Creates a random content encryption key for `algorithm`
    pub fn generate_cek(&self, algorithm: ContentEncryption) -> Result<Vec<u8>> {
        self.provider.random_bytes(self.cek_byte_length(algorithm))
    }

    /// Creates a random IV for `algorithm`, an IV must never be used twice with the same key
    pub fn generate_iv(&self, algorithm: ContentEncryption) -> Result<Vec<u8>> {
        self.provider.random_bytes(self.iv_byte_length(algorithm))
    }

    /// Encrypts the plain text and authenticates it together with the AAD.
    ///
    /// The IV which was used is returned with the cipher text and tag, if none was provided a random one is generated.
    pub fn encrypt(&self, params: EncryptParams<'_>) -> Result<EncryptedContent> {
        let EncryptParams {
            algorithm,
            cek,
            plain_text,
            aad,
            iv,
        } = params;
        check_cek_length(algorithm.params(), cek)?;

        let iv = match iv {
            Some(iv) => iv.to_vec(),
            None => self.generate_iv(algorithm)?,
        };

        log::trace!(
            "Encrypting {} bytes with {algorithm}",
            plain_text.len()
        );
        let CipherOutput { cipher_text, tag } =
            self.content_cipher(algorithm)
                .encrypt(algorithm, cek, plain_text, aad, &iv)?;

        Ok(EncryptedContent {
            cipher_text,
            tag,
            iv,
        })
    }

    /// Verifies the tag and decrypts the cipher text
    pub fn decrypt(&self, params: DecryptParams<'_>) -> Result<Vec<u8>> {
        let DecryptParams {
            algorithm,
            cek,
            cipher_text,
            tag,
            iv,
            aad,
        } = params;
        check_cek_length(algorithm.params(), cek)?;

        log::trace!(
            "Decrypting {} bytes with {algorithm}",
            cipher_text.len()
        );
        self.content_cipher(algorithm)
            .decrypt(algorithm, cek, cipher_text, tag, iv, aad)
    }

    fn content_cipher(&self, algorithm: ContentEncryption) -> &dyn ContentCipher {
        match algorithm.mode() {
            CipherMode::CbcHmac => &self.cbc_hmac,
            CipherMode::Gcm => &self.gcm,
        }
    }
}
