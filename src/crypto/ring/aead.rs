use ring::aead::{Aad, BoundKey, Nonce, OpeningKey, SealingKey, UnboundKey, NONCE_LEN};

use crate::error::{CipherError, Result};

/// Hands out the caller provided IV exactly once
struct SingleNonce {
    buffer: Option<[u8; NONCE_LEN]>,
}

impl TryFrom<&[u8]> for SingleNonce {
    type Error = CipherError;

    fn try_from(iv: &[u8]) -> Result<Self> {
        let buffer = iv.try_into().map_err(|_| {
            log::debug!("ring only supports IVs of {NONCE_LEN} bytes, got {}", iv.len());
            CipherError::InvalidIvLength {
                expected: NONCE_LEN,
                actual: iv.len(),
            }
        })?;
        Ok(Self {
            buffer: Some(buffer),
        })
    }
}

impl ring::aead::NonceSequence for SingleNonce {
    fn advance(&mut self) -> std::result::Result<Nonce, ring::error::Unspecified> {
        self.buffer
            .take()
            .map(Nonce::assume_unique_for_key)
            .ok_or(ring::error::Unspecified)
    }
}

fn unbound_key(key: &[u8]) -> Result<UnboundKey> {
    let algorithm = match key.len() {
        16 => &ring::aead::AES_128_GCM,
        32 => &ring::aead::AES_256_GCM,
        len => {
            log::debug!("AES GCM with a key of {len} bytes is not implemented in ring");
            return Err(CipherError::UnsupportedAlgorithm(format!(
                "AES-{}-GCM",
                len * 8
            )));
        }
    };
    UnboundKey::new(algorithm, key).map_err(|_| CipherError::EncryptionFailed)
}

pub(super) fn seal(
    key: &[u8],
    iv: &[u8],
    plain_text: &[u8],
    aad: &[u8],
    tag: &mut [u8],
) -> Result<Vec<u8>> {
    let mut sealing_key = SealingKey::new(unbound_key(key)?, SingleNonce::try_from(iv)?);

    let mut buffer = plain_text.to_vec();
    let auth_tag = sealing_key
        .seal_in_place_separate_tag(Aad::from(aad), &mut buffer)
        .map_err(|_| CipherError::EncryptionFailed)?;

    if tag.len() != auth_tag.as_ref().len() {
        log::debug!("ring only supports tags of {} bytes", auth_tag.as_ref().len());
        return Err(CipherError::EncryptionFailed);
    }
    tag.copy_from_slice(auth_tag.as_ref());

    Ok(buffer)
}

pub(super) fn open(
    key: &[u8],
    iv: &[u8],
    cipher_text: &[u8],
    aad: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>> {
    let mut opening_key = OpeningKey::new(unbound_key(key)?, SingleNonce::try_from(iv)?);

    // ring expects the tag to be appended to the cipher text
    let mut buffer = [cipher_text, tag].concat();
    let plain_text_len = opening_key
        .open_in_place(Aad::from(aad), &mut buffer)
        .map_err(|_| CipherError::DecryptionFailed)?
        .len();
    buffer.truncate(plain_text_len);

    Ok(buffer)
}
