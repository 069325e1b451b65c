use super::{
    check_cek_length, check_iv_length, params_of_mode,
    tag::{mac_data, split_cek, tags_match},
    CipherOutput, ContentCipher,
};
use crate::{
    crypto::{
        content_encryption::{CipherMode, ContentEncryption, ContentEncryptionParamsRef},
        provider::{CryptoProvider, HashAlgorithm},
    },
    error::{CipherError, Result},
};

/// AES-CBC-HMAC-SHA2 content encryption as described in [RFC 7518 5.2](https://www.rfc-editor.org/rfc/rfc7518.html#section-5.2).
///
/// The content encryption key is the concatenation of the MAC key and the AES key.
/// The cipher text is authenticated by an HMAC over
/// `AAD || IV || cipher text || AAD length in bits`, truncated to the AES key length
/// (Encrypt-then-MAC). On decryption the tag is verified before any decryption happens.
#[derive(Clone, Debug, Default)]
pub struct CbcHmacCipher<P> {
    provider: P,
}

impl<P> CbcHmacCipher<P>
where
    P: CryptoProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// AES CBC encryption of `plain_text`, padded with PKCS#7
    pub fn encrypt_internal(&self, enc_key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>> {
        self.provider.aes_cbc_encrypt(enc_key, iv, plain_text)
    }

    /// AES CBC decryption of `cipher_text`, the PKCS#7 padding is removed
    pub fn decrypt_internal(
        &self,
        enc_key: &[u8],
        iv: &[u8],
        cipher_text: &[u8],
    ) -> Result<Vec<u8>> {
        self.provider.aes_cbc_decrypt(enc_key, iv, cipher_text)
    }

    /// Computes the HMAC of `mac_data` with the hash matching `key_bits` and truncates it to `key_bits / 8` bytes
    pub fn generate_tag(&self, mac_key: &[u8], mac_data: &[u8], key_bits: usize) -> Result<Vec<u8>> {
        let hash = HashAlgorithm::from_key_bits(key_bits).ok_or_else(|| {
            log::debug!("No HMAC defined for AES keys of {key_bits} bits");
            CipherError::UnsupportedAlgorithm(format!("HMAC for {key_bits} bit keys"))
        })?;

        let mut tag = self.provider.hmac(hash, mac_key, mac_data)?;
        tag.truncate(key_bits / 8);

        Ok(tag)
    }

    fn algorithm_tag(
        &self,
        params: ContentEncryptionParamsRef,
        mac_key: &[u8],
        mac_data: &[u8],
    ) -> Result<Vec<u8>> {
        let key_bits = params.key_len * 8;
        debug_assert_eq!(
            params.hash,
            HashAlgorithm::from_key_bits(key_bits),
            "HMAC of {} does not match its key size",
            params.algorithm
        );
        self.generate_tag(mac_key, mac_data, key_bits)
    }
}

impl<P> ContentCipher for CbcHmacCipher<P>
where
    P: CryptoProvider,
{
    fn encrypt(
        &self,
        algorithm: ContentEncryption,
        cek: &[u8],
        plain_text: &[u8],
        aad: &[u8],
        iv: &[u8],
    ) -> Result<CipherOutput> {
        let params = params_of_mode(algorithm, CipherMode::CbcHmac)?;
        check_cek_length(params, cek)?;
        check_iv_length(params.iv_len, iv)?;

        let (mac_key, enc_key) = split_cek(cek);
        let cipher_text = self.encrypt_internal(enc_key, iv, plain_text)?;
        let tag = self.algorithm_tag(params, mac_key, &mac_data(aad, iv, &cipher_text))?;

        Ok(CipherOutput { cipher_text, tag })
    }

    fn decrypt(
        &self,
        algorithm: ContentEncryption,
        cek: &[u8],
        cipher_text: &[u8],
        tag: &[u8],
        iv: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>> {
        let params = params_of_mode(algorithm, CipherMode::CbcHmac)?;
        check_cek_length(params, cek)?;

        let (mac_key, enc_key) = split_cek(cek);
        let expected_tag = self.algorithm_tag(params, mac_key, &mac_data(aad, iv, cipher_text))?;

        if !tags_match(&expected_tag, tag) {
            log::debug!("Tags mismatching, discarding cipher text.");
            return Err(CipherError::AuthenticationFailed);
        }
        check_iv_length(params.iv_len, iv)?;

        self.decrypt_internal(enc_key, iv, cipher_text)
    }
}
