//! AES CBC and GCM for the RustCrypto backend.

use aes::{Aes128, Aes192, Aes256};
use aes_gcm::{AeadCore, AeadInPlace, AesGcm};
use cipher::{
    block_padding::Pkcs7, consts::U12, generic_array::GenericArray, typenum::Unsigned,
    BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit,
};

use crate::error::{CipherError, Result};

type Aes128Gcm = AesGcm<Aes128, U12>;
type Aes192Gcm = AesGcm<Aes192, U12>;
type Aes256Gcm = AesGcm<Aes256, U12>;

pub(super) fn cbc_encrypt(key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>> {
    match key.len() {
        16 => encrypt_padded::<cbc::Encryptor<Aes128>>(key, iv, plain_text),
        24 => encrypt_padded::<cbc::Encryptor<Aes192>>(key, iv, plain_text),
        32 => encrypt_padded::<cbc::Encryptor<Aes256>>(key, iv, plain_text),
        len => {
            log::debug!("AesCbc: no AES variant for a key of {len} bytes");
            Err(CipherError::EncryptionFailed)
        }
    }
}

pub(super) fn cbc_decrypt(key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>> {
    match key.len() {
        16 => decrypt_padded::<cbc::Decryptor<Aes128>>(key, iv, cipher_text),
        24 => decrypt_padded::<cbc::Decryptor<Aes192>>(key, iv, cipher_text),
        32 => decrypt_padded::<cbc::Decryptor<Aes256>>(key, iv, cipher_text),
        len => {
            log::debug!("AesCbc: no AES variant for a key of {len} bytes");
            Err(CipherError::DecryptionFailed)
        }
    }
}

pub(super) fn gcm_encrypt(
    key: &[u8],
    iv: &[u8],
    plain_text: &[u8],
    aad: &[u8],
    tag: &mut [u8],
) -> Result<Vec<u8>> {
    match key.len() {
        16 => encrypt_in_place_detached::<Aes128Gcm>(key, iv, plain_text, aad, tag),
        24 => encrypt_in_place_detached::<Aes192Gcm>(key, iv, plain_text, aad, tag),
        32 => encrypt_in_place_detached::<Aes256Gcm>(key, iv, plain_text, aad, tag),
        len => {
            log::debug!("AesGcm: no AES variant for a key of {len} bytes");
            Err(CipherError::EncryptionFailed)
        }
    }
}

pub(super) fn gcm_decrypt(
    key: &[u8],
    iv: &[u8],
    cipher_text: &[u8],
    aad: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>> {
    match key.len() {
        16 => decrypt_in_place_detached::<Aes128Gcm>(key, iv, cipher_text, aad, tag),
        24 => decrypt_in_place_detached::<Aes192Gcm>(key, iv, cipher_text, aad, tag),
        32 => decrypt_in_place_detached::<Aes256Gcm>(key, iv, cipher_text, aad, tag),
        len => {
            log::debug!("AesGcm: no AES variant for a key of {len} bytes");
            Err(CipherError::DecryptionFailed)
        }
    }
}

fn encrypt_padded<C>(key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + KeyIvInit,
{
    let cipher = C::new_from_slices(key, iv).map_err(|err| {
        log::debug!("AesCbc: Error encrypting: {err}");
        CipherError::EncryptionFailed
    })?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plain_text))
}

fn decrypt_padded<C>(key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + KeyIvInit,
{
    let cipher = C::new_from_slices(key, iv).map_err(|err| {
        log::debug!("AesCbc: Error decrypting: {err}");
        CipherError::DecryptionFailed
    })?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(cipher_text)
        .map_err(|err| {
            log::debug!("AesCbc: Error decrypting: {err}");
            CipherError::DecryptionFailed
        })
}

fn encrypt_in_place_detached<A>(
    key: &[u8],
    iv: &[u8],
    plain_text: &[u8],
    aad: &[u8],
    tag: &mut [u8],
) -> Result<Vec<u8>>
where
    A: AeadInPlace + AeadCore + KeyInit,
{
    if !has_supported_lengths::<A>(iv, tag) {
        return Err(CipherError::EncryptionFailed);
    }

    let algo = A::new_from_slice(key).map_err(|err| {
        log::debug!("AesGcm: Error encrypting: {err}");
        CipherError::EncryptionFailed
    })?;

    let mut buffer = plain_text.to_vec();
    let computed_tag = algo
        .encrypt_in_place_detached(GenericArray::from_slice(iv), aad, &mut buffer)
        .map_err(|err| {
            log::debug!("AesGcm: Error encrypting: {err}");
            CipherError::EncryptionFailed
        })?;
    tag.copy_from_slice(computed_tag.as_slice());

    Ok(buffer)
}

fn decrypt_in_place_detached<A>(
    key: &[u8],
    iv: &[u8],
    cipher_text: &[u8],
    aad: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>>
where
    A: AeadInPlace + AeadCore + KeyInit,
{
    if !has_supported_lengths::<A>(iv, tag) {
        return Err(CipherError::DecryptionFailed);
    }

    let algo = A::new_from_slice(key).map_err(|err| {
        log::debug!("AesGcm: Error decrypting: {err}");
        CipherError::DecryptionFailed
    })?;

    let mut buffer = cipher_text.to_vec();
    algo.decrypt_in_place_detached(
        GenericArray::from_slice(iv),
        aad,
        &mut buffer,
        GenericArray::from_slice(tag),
    )
    .map_err(|err| {
        log::debug!("AesGcm: Error decrypting: {err}");
        CipherError::DecryptionFailed
    })?;

    Ok(buffer)
}

fn has_supported_lengths<A: AeadCore>(iv: &[u8], tag: &[u8]) -> bool {
    let supported = iv.len() == <A::NonceSize as Unsigned>::USIZE
        && tag.len() == <A::TagSize as Unsigned>::USIZE;
    if !supported {
        log::debug!(
            "AesGcm: unsupported IV ({}) or tag ({}) length",
            iv.len(),
            tag.len()
        );
    }
    supported
}

#[cfg(test)]
mod test {
    use super::{cbc_decrypt, cbc_encrypt, gcm_decrypt, gcm_encrypt};
    use crate::{error::CipherError, util::test::assert_bytes_eq};
    use test_case::test_case;

    const IV: [u8; 16] = [0x42; 16];

    #[test_case(16; "Aes128")]
    #[test_case(24; "Aes192")]
    #[test_case(32; "Aes256")]
    fn pads_block_aligned_plain_text_with_full_block(key_len: usize) {
        let key = vec![0xAA; key_len];
        let plain_text = vec![7u8; 1024];

        let cipher_text = cbc_encrypt(&key, &IV, &plain_text).unwrap();
        assert_eq!(cipher_text.len(), 1040);

        let decrypted = cbc_decrypt(&key, &IV, &cipher_text).unwrap();
        assert_bytes_eq(&decrypted, &plain_text);
    }

    #[test]
    fn rejects_cipher_text_of_partial_blocks() {
        let key = [0xAA; 16];
        let cipher_text = cbc_encrypt(&key, &IV, b"some bytes").unwrap();

        assert_eq!(
            cbc_decrypt(&key, &IV, &cipher_text[..15]),
            Err(CipherError::DecryptionFailed)
        );
        assert_eq!(cbc_decrypt(&key, &IV, &[]), Err(CipherError::DecryptionFailed));
    }

    #[test]
    fn rejects_unknown_aes_key_sizes() {
        let key = [0xAA; 20];
        assert_eq!(
            cbc_encrypt(&key, &IV, b"data"),
            Err(CipherError::EncryptionFailed)
        );
        let mut tag = [0u8; 16];
        assert_eq!(
            gcm_encrypt(&key, &IV[..12], b"data", b"", &mut tag),
            Err(CipherError::EncryptionFailed)
        );
    }

    #[test]
    fn rejects_modified_gcm_tag() {
        let key = [0xAA; 32];
        let mut tag = [0u8; 16];
        let cipher_text = gcm_encrypt(&key, &IV[..12], b"data", b"aad", &mut tag).unwrap();

        tag[0] ^= 1;
        assert_eq!(
            gcm_decrypt(&key, &IV[..12], &cipher_text, b"aad", &tag),
            Err(CipherError::DecryptionFailed)
        );
    }
}
