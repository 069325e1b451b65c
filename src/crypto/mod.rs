pub mod content_encryption;
pub mod provider;

#[cfg(feature = "openssl")]
pub mod openssl;
#[cfg(feature = "ring")]
pub mod ring;
#[cfg(feature = "rust-crypto")]
pub mod rust_crypto;

cfg_if::cfg_if! {
    if #[cfg(feature = "rust-crypto")] {
        /// Primitive provider used when none is passed explicitly, the RustCrypto backend.
        pub type DefaultProvider = rust_crypto::RustCrypto;
    } else if #[cfg(feature = "openssl")] {
        /// Primitive provider used when none is passed explicitly, the OpenSSL backend.
        pub type DefaultProvider = openssl::OpenSsl;
    } else if #[cfg(feature = "ring")] {
        /// Primitive provider used when none is passed explicitly, the ring backend.
        pub type DefaultProvider = ring::Ring;
    } else {
        compile_error!("At least one crypto backend has to be enabled: rust-crypto, openssl or ring.");
    }
}

#[cfg(all(test, feature = "rust-crypto", feature = "openssl"))]
mod test {
    use super::{openssl::OpenSsl, provider::CryptoProvider, rust_crypto::RustCrypto};
    use crate::{crypto::provider::HashAlgorithm, util::test::assert_bytes_eq};
    use rand::Rng;
    use test_case::test_case;

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut buffer = vec![0u8; len];
        rand::rng().fill(buffer.as_mut_slice());
        buffer
    }

    #[test_case(16, 3; "Aes128")]
    #[test_case(24, 0; "Aes192 empty")]
    #[test_case(32, 1024; "Aes256 block aligned")]
    fn cbc_matches_across_backends(key_len: usize, plain_text_len: usize) {
        let key = random_bytes(key_len);
        let iv = random_bytes(16);
        let plain_text = random_bytes(plain_text_len);

        let rust_crypto = RustCrypto.aes_cbc_encrypt(&key, &iv, &plain_text).unwrap();
        let openssl = OpenSsl.aes_cbc_encrypt(&key, &iv, &plain_text).unwrap();
        assert_bytes_eq(&rust_crypto, &openssl);

        let decrypted = OpenSsl.aes_cbc_decrypt(&key, &iv, &rust_crypto).unwrap();
        assert_bytes_eq(&decrypted, &plain_text);
    }

    #[test_case(16; "Aes128")]
    #[test_case(24; "Aes192")]
    #[test_case(32; "Aes256")]
    fn gcm_matches_across_backends(key_len: usize) {
        let key = random_bytes(key_len);
        let iv = random_bytes(12);
        let plain_text = random_bytes(77);
        let aad = random_bytes(5);

        let mut rust_crypto_tag = [0u8; 16];
        let rust_crypto = RustCrypto
            .aes_gcm_encrypt(&key, &iv, &plain_text, &aad, &mut rust_crypto_tag)
            .unwrap();
        let mut openssl_tag = [0u8; 16];
        let openssl = OpenSsl
            .aes_gcm_encrypt(&key, &iv, &plain_text, &aad, &mut openssl_tag)
            .unwrap();

        assert_bytes_eq(&rust_crypto, &openssl);
        assert_bytes_eq(&rust_crypto_tag, &openssl_tag);
    }

    #[test_case(HashAlgorithm::Sha256; "Sha256")]
    #[test_case(HashAlgorithm::Sha384; "Sha384")]
    #[test_case(HashAlgorithm::Sha512; "Sha512")]
    fn hmac_matches_across_backends(hash: HashAlgorithm) {
        let key = random_bytes(hash.output_len() / 2);
        let data = random_bytes(100);

        assert_bytes_eq(
            &RustCrypto.hmac(hash, &key, &data).unwrap(),
            &OpenSsl.hmac(hash, &key, &data).unwrap(),
        );
    }
}
