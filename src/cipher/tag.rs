//! Helpers shared by the authenticating parts of the content ciphers.

use subtle::ConstantTimeEq;

/// Splits an AES-CBC-HMAC-SHA2 content encryption key into `(mac_key, enc_key)`,
/// see [RFC 7518 5.2.2.1](https://www.rfc-editor.org/rfc/rfc7518.html#section-5.2.2.1)
pub(crate) fn split_cek(cek: &[u8]) -> (&[u8], &[u8]) {
    cek.split_at(cek.len() / 2)
}

/// Length of the AAD in bits as 64 bit big endian integer (`AL`)
pub(crate) fn aad_bit_length(aad: &[u8]) -> [u8; 8] {
    // for current platforms there is no issue casting from usize to u64
    ((aad.len() as u64) << 3).to_be_bytes()
}

/// Input of the HMAC: `AAD || IV || cipher text || AL`
pub(crate) fn mac_data(aad: &[u8], iv: &[u8], cipher_text: &[u8]) -> Vec<u8> {
    [aad, iv, cipher_text, &aad_bit_length(aad)].concat()
}

/// Compares two tags in constant time, tags of different length never match
pub(crate) fn tags_match(expected: &[u8], received: &[u8]) -> bool {
    expected.ct_eq(received).into()
}
