use openssl::symm::{self, Cipher};

use crate::error::{CipherError, Result};

pub(super) fn cbc_encrypt(key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>> {
    let cipher = cbc_cipher(key.len()).ok_or(CipherError::EncryptionFailed)?;
    // openssl pads with PKCS#7 by default
    symm::encrypt(cipher, key, Some(iv), plain_text).map_err(|err| {
        log::debug!("Encryption failed, OpenSSL error stack: {err}");
        CipherError::EncryptionFailed
    })
}

pub(super) fn cbc_decrypt(key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>> {
    let cipher = cbc_cipher(key.len()).ok_or(CipherError::DecryptionFailed)?;
    symm::decrypt(cipher, key, Some(iv), cipher_text).map_err(|err| {
        log::debug!("Decryption failed, OpenSSL error stack: {err}");
        CipherError::DecryptionFailed
    })
}

pub(super) fn gcm_encrypt(
    key: &[u8],
    iv: &[u8],
    plain_text: &[u8],
    aad: &[u8],
    tag: &mut [u8],
) -> Result<Vec<u8>> {
    let cipher = gcm_cipher(key.len()).ok_or(CipherError::EncryptionFailed)?;
    let encrypted = symm::encrypt_aead(cipher, key, Some(iv), aad, plain_text, tag).map_err(
        |err| {
            log::debug!("Encryption failed, OpenSSL error stack: {err}");
            CipherError::EncryptionFailed
        },
    )?;

    debug_assert!(
        encrypted.len() == plain_text.len(),
        "For a stream cipher mode it is given that the output has the same length as the input"
    );
    Ok(encrypted)
}

pub(super) fn gcm_decrypt(
    key: &[u8],
    iv: &[u8],
    cipher_text: &[u8],
    aad: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>> {
    let cipher = gcm_cipher(key.len()).ok_or(CipherError::DecryptionFailed)?;
    symm::decrypt_aead(cipher, key, Some(iv), aad, cipher_text, tag).map_err(|err| {
        log::debug!("Decryption failed, OpenSSL error stack: {err}");
        CipherError::DecryptionFailed
    })
}

fn cbc_cipher(key_len: usize) -> Option<Cipher> {
    match key_len {
        16 => Some(Cipher::aes_128_cbc()),
        24 => Some(Cipher::aes_192_cbc()),
        32 => Some(Cipher::aes_256_cbc()),
        _ => {
            log::debug!("No AES CBC cipher for a key of {key_len} bytes");
            None
        }
    }
}

fn gcm_cipher(key_len: usize) -> Option<Cipher> {
    match key_len {
        16 => Some(Cipher::aes_128_gcm()),
        24 => Some(Cipher::aes_192_gcm()),
        32 => Some(Cipher::aes_256_gcm()),
        _ => {
            log::debug!("No AES GCM cipher for a key of {key_len} bytes");
            None
        }
    }
}
