use super::{check_cek_length, check_iv_length, params_of_mode, CipherOutput, ContentCipher};
use crate::{
    crypto::{
        content_encryption::{CipherMode, ContentEncryption, GCM_IV_LEN, GCM_TAG_LEN},
        provider::CryptoProvider,
    },
    error::{CipherError, Result},
};

/// AES-GCM content encryption as described in [RFC 7518 5.3](https://www.rfc-editor.org/rfc/rfc7518.html#section-5.3).
///
/// Only 96 bit IVs and 128 bit tags are supported.
#[derive(Clone, Debug, Default)]
pub struct GcmCipher<P> {
    provider: P,
}

impl<P> GcmCipher<P>
where
    P: CryptoProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn encrypt_internal(
        &self,
        key: &[u8],
        iv: &[u8],
        plain_text: &[u8],
        aad: &[u8],
    ) -> Result<CipherOutput> {
        check_iv_length(GCM_IV_LEN, iv)?;

        let mut tag = vec![0u8; GCM_TAG_LEN];
        let cipher_text = self
            .provider
            .aes_gcm_encrypt(key, iv, plain_text, aad, &mut tag)?;

        Ok(CipherOutput { cipher_text, tag })
    }

    /// Any failure of the backend is reported as [`CipherError::AuthenticationFailed`],
    /// unless the backend lacks AES-GCM for the key size.
    pub fn decrypt_internal(
        &self,
        key: &[u8],
        iv: &[u8],
        cipher_text: &[u8],
        tag: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>> {
        check_iv_length(GCM_IV_LEN, iv)?;

        self.provider
            .aes_gcm_decrypt(key, iv, cipher_text, aad, tag)
            .map_err(|err| match err {
                CipherError::UnsupportedAlgorithm(_) => err,
                _ => {
                    log::debug!("AES GCM decryption failed: {err}");
                    CipherError::AuthenticationFailed
                }
            })
    }
}

impl<P> ContentCipher for GcmCipher<P>
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
        let params = params_of_mode(algorithm, CipherMode::Gcm)?;
        check_cek_length(params, cek)?;

        self.encrypt_internal(cek, iv, plain_text, aad)
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
        let params = params_of_mode(algorithm, CipherMode::Gcm)?;
        check_cek_length(params, cek)?;

        self.decrypt_internal(cek, iv, cipher_text, tag, aad)
    }
}

#[cfg(test)]
mod test {
    use super::GcmCipher;
    use crate::{
        cipher::{CipherOutput, ContentCipher},
        crypto::{content_encryption::ContentEncryption, DefaultProvider},
        error::CipherError,
        test_vectors::{get_test_vector, get_test_vectors},
        util::test::{all_bit_flips, assert_bytes_eq},
    };
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn cipher() -> GcmCipher<DefaultProvider> {
        GcmCipher::new(DefaultProvider::default())
    }

    #[test_case(ContentEncryption::A128Gcm; "A128GCM")]
    #[cfg_attr(any(feature = "rust-crypto", feature = "openssl"), test_case(ContentEncryption::A192Gcm; "A192GCM"))]
    #[test_case(ContentEncryption::A256Gcm; "A256GCM")]
    fn encrypt_test_vectors(algorithm: ContentEncryption) {
        let cipher = cipher();
        for test_vec in get_test_vectors(algorithm) {
            let CipherOutput { cipher_text, tag } = cipher
                .encrypt(
                    algorithm,
                    &test_vec.cek,
                    &test_vec.plain_text,
                    &test_vec.aad,
                    &test_vec.iv,
                )
                .unwrap();

            assert_bytes_eq(&cipher_text, &test_vec.cipher_text);
            assert_bytes_eq(&tag, &test_vec.tag);
        }
    }

    #[test_case(ContentEncryption::A128Gcm; "A128GCM")]
    #[cfg_attr(any(feature = "rust-crypto", feature = "openssl"), test_case(ContentEncryption::A192Gcm; "A192GCM"))]
    #[test_case(ContentEncryption::A256Gcm; "A256GCM")]
    fn decrypt_test_vectors(algorithm: ContentEncryption) {
        let cipher = cipher();
        for test_vec in get_test_vectors(algorithm) {
            let plain_text = cipher
                .decrypt(
                    algorithm,
                    &test_vec.cek,
                    &test_vec.cipher_text,
                    &test_vec.tag,
                    &test_vec.iv,
                    &test_vec.aad,
                )
                .unwrap();

            assert_bytes_eq(&plain_text, &test_vec.plain_text);
        }
    }

    #[test_case(0; "empty")]
    #[test_case(11; "short")]
    #[test_case(16; "too long")]
    fn rejects_iv_not_of_96_bits(iv_len: usize) {
        let cipher = cipher();
        let key = [0xAA; 16];
        let iv = vec![0x42; iv_len];
        let expected = CipherError::InvalidIvLength {
            expected: 12,
            actual: iv_len,
        };

        assert_eq!(
            cipher
                .encrypt_internal(&key, &iv, &[1, 2, 3], &[4, 5, 6])
                .unwrap_err(),
            expected
        );
        assert_eq!(
            cipher
                .decrypt_internal(&key, &iv, &[1, 2, 3], &[0; 16], &[4, 5, 6])
                .unwrap_err(),
            expected
        );
    }

    #[test]
    fn produces_cipher_text_of_plain_text_length() {
        let output = cipher()
            .encrypt_internal(&[0xAA; 32], &[0x42; 12], &[7; 1024], &[])
            .unwrap();

        assert_eq!(output.cipher_text.len(), 1024);
        assert_eq!(output.tag.len(), 16);
    }

    #[test]
    fn rejects_modified_input() {
        let test_vec = get_test_vector("A128GCM short");
        let cipher = cipher();
        let decrypt = |cipher_text: &[u8], tag: &[u8], iv: &[u8], aad: &[u8]| {
            cipher.decrypt(test_vec.enc, &test_vec.cek, cipher_text, tag, iv, aad)
        };

        let cipher_text = &test_vec.cipher_text;
        let tag = &test_vec.tag;
        let iv = &test_vec.iv;
        let aad = &test_vec.aad;

        for modified in all_bit_flips(cipher_text) {
            assert_eq!(
                decrypt(&modified, tag, iv, aad),
                Err(CipherError::AuthenticationFailed)
            );
        }
        for modified in all_bit_flips(tag) {
            assert_eq!(
                decrypt(cipher_text, &modified, iv, aad),
                Err(CipherError::AuthenticationFailed)
            );
        }
        for modified in all_bit_flips(iv) {
            assert_eq!(
                decrypt(cipher_text, tag, &modified, aad),
                Err(CipherError::AuthenticationFailed)
            );
        }
        for modified in all_bit_flips(aad) {
            assert_eq!(
                decrypt(cipher_text, tag, iv, &modified),
                Err(CipherError::AuthenticationFailed)
            );
        }
        assert_eq!(
            decrypt(cipher_text, &tag[..12], iv, aad),
            Err(CipherError::AuthenticationFailed)
        );
    }

    #[test]
    fn rejects_wrong_key_length() {
        let result = cipher().encrypt(
            ContentEncryption::A256Gcm,
            &[0xAA; 16],
            &[1, 2, 3],
            &[],
            &[0x42; 12],
        );
        assert_eq!(
            result,
            Err(CipherError::InvalidKeyLength {
                expected: 32,
                actual: 16
            })
        );
    }

    #[test]
    fn rejects_cbc_algorithms() {
        let result = cipher().decrypt(
            ContentEncryption::A128CbcHs256,
            &[0xAA; 32],
            &[0; 16],
            &[0; 16],
            &[0x42; 16],
            &[],
        );
        assert_eq!(
            result,
            Err(CipherError::UnsupportedAlgorithm("A128CBC-HS256".to_owned()))
        );
    }

    #[cfg(feature = "ring")]
    #[test]
    fn passes_missing_backend_support_through() {
        let cipher = GcmCipher::new(crate::crypto::ring::Ring::default());

        let result = cipher.decrypt(
            ContentEncryption::A192Gcm,
            &[0xAA; 24],
            &[1, 2, 3],
            &[0; 16],
            &[0x42; 12],
            &[],
        );
        assert_eq!(
            result,
            Err(CipherError::UnsupportedAlgorithm("AES-192-GCM".to_owned()))
        );
    }
}
